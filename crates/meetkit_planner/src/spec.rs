//! Planner input/derived models and top-level error types.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use meetkit_io_csv::CsvWriteError;
use meetkit_io_ics::IcsWriteError;
use meetkit_io_xlsx::XlsxWriteError;
use thiserror::Error;

use crate::conf::{N_ATTENDEE_ROWS, N_GRADE_ROWS_MAX, N_SCORE_ASYNC_BELOW, N_SCORE_HUDDLE_BELOW};

////////////////////////////////////////////////////////////////////////////////
// #region Settings

/// One salary grade row.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecGrade {
    /// Grade code, e.g. `P5`.
    pub name: String,
    /// Annual salary in USD; `None` leaves the cell blank.
    pub annual_usd: Option<f64>,
}

/// Editable cost parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSettings {
    /// Working hours per year used to derive hourly rates.
    pub hours_per_year: f64,
    /// Interpreter hourly rate in USD.
    pub interpreter_hourly_usd: f64,
    /// Exchange rate USD → PLN.
    pub usd_to_pln: f64,
    /// Grade table in sheet order.
    pub grades: Vec<SpecGrade>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Meeting

/// Meeting kind offered on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumMeetingType {
    #[default]
    Decision,
    Coordination,
    Info,
}

impl EnumMeetingType {
    /// Cell text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decision => "Decision",
            Self::Coordination => "Coordination",
            Self::Info => "Info",
        }
    }
}

impl fmt::Display for EnumMeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attendee row; empty strings stay blank on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecAttendee {
    pub name: String,
    pub email: String,
    pub grade: String,
    /// RACI-style role letter (A/D/R/C).
    pub role: String,
}

/// Meeting inputs as shown on the Meeting sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecMeeting {
    /// Title; blank by default.
    pub title: String,
    pub meeting_type: EnumMeetingType,
    pub if_decision_needed: bool,
    pub if_preread_attached: bool,
    /// Duration in minutes.
    pub duration_min: u32,
    /// City.
    pub location: String,
    pub if_interpreter_needed: bool,
    /// Local date in the meeting timezone.
    pub date: NaiveDate,
    /// Local start time in the meeting timezone.
    pub time_start: NaiveTime,
    /// Up to [`N_ATTENDEE_ROWS`] attendees in row order.
    pub attendees: Vec<SpecAttendee>,
}

/// Everything the generator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecPlannerInputs {
    pub settings: SpecSettings,
    pub meeting: SpecMeeting,
}

impl SpecPlannerInputs {
    /// Reject inputs the fixed sheet layout cannot hold.
    pub fn validate(&self) -> Result<(), PlannerError> {
        let n_attendees = self.meeting.attendees.len();
        if n_attendees > N_ATTENDEE_ROWS {
            return Err(PlannerError::TooManyAttendees {
                found: n_attendees,
                max: N_ATTENDEE_ROWS,
            });
        }
        let n_grades = self.settings.grades.len();
        if n_grades > N_GRADE_ROWS_MAX {
            return Err(PlannerError::TooManyGrades {
                found: n_grades,
                max: N_GRADE_ROWS_MAX,
            });
        }
        Ok(())
    }
}

/// Render a flag the way the sheet formulas compare it.
pub fn render_yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Derived

/// Recommendation derived from the necessity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumSuggestion {
    /// Score below 40.
    AsyncMemo,
    /// Score in `[40, 70)`.
    Huddle,
    /// Score of 70 or more.
    Proceed,
}

impl EnumSuggestion {
    /// Map a score onto its suggestion band.
    pub fn from_score(score: i64) -> Self {
        if score < N_SCORE_ASYNC_BELOW {
            Self::AsyncMemo
        } else if score < N_SCORE_HUDDLE_BELOW {
            Self::Huddle
        } else {
            Self::Proceed
        }
    }

    /// Cell text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AsyncMemo => "Do async memo",
            Self::Huddle => "15–30 min huddle (cap 5)",
            Self::Proceed => "Proceed; cap attendees (≤6)",
        }
    }
}

impl fmt::Display for EnumSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values of every derived cell, as the workbook formulas compute them.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecMeetingSummary {
    /// Hourly USD per attendee row (always [`N_ATTENDEE_ROWS`] entries).
    pub hourly_by_row: Vec<Option<f64>>,
    /// Meeting cost USD per attendee row.
    pub cost_by_row: Vec<Option<f64>>,
    /// Non-empty attendee names.
    pub cnt_attendees: usize,
    /// Sum of row costs.
    pub total_cost_usd: f64,
    /// Row costs plus interpreter surcharge when needed.
    pub total_cost_with_interpreter_usd: f64,
    /// With-interpreter cost converted to PLN, rounded to 2 decimals.
    pub total_cost_pln: f64,
    /// Clamped necessity score.
    pub necessity_score: i64,
    pub suggestion: EnumSuggestion,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Errors raised while generating planning artifacts.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The attendee table has a fixed number of rows.
    #[error("{found} attendees given, the sheet holds at most {max}")]
    TooManyAttendees {
        /// Attendees supplied.
        found: usize,
        /// Sheet capacity.
        max: usize,
    },
    /// Grade rows must end above the Settings notes block.
    #[error("{found} grades given, the Settings sheet holds at most {max}")]
    TooManyGrades { found: usize, max: usize },
    #[error(transparent)]
    Xlsx(#[from] XlsxWriteError),
    #[error(transparent)]
    Ics(#[from] IcsWriteError),
    #[error(transparent)]
    Csv(#[from] CsvWriteError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_bands_use_half_open_ranges() {
        assert_eq!(EnumSuggestion::from_score(0), EnumSuggestion::AsyncMemo);
        assert_eq!(EnumSuggestion::from_score(39), EnumSuggestion::AsyncMemo);
        assert_eq!(EnumSuggestion::from_score(40), EnumSuggestion::Huddle);
        assert_eq!(EnumSuggestion::from_score(69), EnumSuggestion::Huddle);
        assert_eq!(EnumSuggestion::from_score(70), EnumSuggestion::Proceed);
        assert_eq!(EnumSuggestion::from_score(100), EnumSuggestion::Proceed);
    }

    #[test]
    fn too_many_attendees_is_rejected() {
        let mut inputs = crate::conf::derive_default_inputs();
        inputs.meeting.attendees = vec![SpecAttendee::default(); N_ATTENDEE_ROWS + 1];

        let err = inputs.validate().expect_err("overflow");
        assert!(matches!(
            err,
            PlannerError::TooManyAttendees { found: 11, max: 10 }
        ));
        assert_eq!(
            err.to_string(),
            "11 attendees given, the sheet holds at most 10"
        );
    }

    #[test]
    fn too_many_grades_is_rejected() {
        let mut inputs = crate::conf::derive_default_inputs();
        inputs.settings.grades.push(SpecGrade {
            name: "D1".to_string(),
            annual_usd: None,
        });

        assert!(matches!(
            inputs.validate(),
            Err(PlannerError::TooManyGrades { found: 7, max: 6 })
        ));
    }

    #[test]
    fn flags_render_as_sheet_text() {
        assert_eq!(render_yes_no(true), "Yes");
        assert_eq!(render_yes_no(false), "No");
        assert_eq!(EnumMeetingType::Coordination.to_string(), "Coordination");
    }
}
