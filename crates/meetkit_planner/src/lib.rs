//! `meetkit_planner` v1:
//! Meeting cost and necessity planner artifacts.
//!
//! Produces a three-sheet workbook with live formulas, an `.ics` invite, and three
//! CSV templates from one set of planner inputs.
//!
//! Modules:
//! - `conf`      : file names, sheet anchors, scoring constants, default presets
//! - `spec`      : input/derived models and errors
//! - `calc`      : formula-equivalent evaluator
//! - `workbook`  : sheet layouts and workbook writer
//! - `calendar`  : invite derivation
//! - `templates` : CSV template definitions
//! - `report`    : generation report
//! - `generate`  : one-pass entry point
pub mod calc;
pub mod calendar;
pub mod conf;
pub mod generate;
pub mod report;
pub mod spec;
pub mod templates;
pub mod workbook;

pub use calc::derive_meeting_summary;
pub use conf::{derive_default_inputs, derive_default_meeting, derive_default_settings};
pub use generate::generate_planning_artifacts;
pub use report::{ReportGenerate, ReportGenerateBuilder};
pub use spec::{
    EnumMeetingType, EnumSuggestion, PlannerError, SpecAttendee, SpecGrade, SpecMeeting,
    SpecMeetingSummary, SpecPlannerInputs, SpecSettings,
};
