//! Planner constants, sheet anchors, and default input presets.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

use crate::spec::{EnumMeetingType, SpecGrade, SpecMeeting, SpecPlannerInputs, SpecSettings};

////////////////////////////////////////////////////////////////////////////////
// #region OutputFiles

/// Workbook file name.
pub const C_FILE_WORKBOOK: &str = "meeting_planner_template.xlsx";
/// Calendar invite file name.
pub const C_FILE_CALENDAR: &str = "meeting_invite.ics";
/// Staff directory template file name.
pub const C_FILE_DIRECTORY: &str = "directory_template.csv";
/// Working-hours roster template file name.
pub const C_FILE_ROSTER: &str = "roster_template.csv";
/// Decision log template file name.
pub const C_FILE_DECISION_LOG: &str = "decision_log.csv";
/// Order of file names on the `Templates created:` line.
pub const TUP_FILES_DISPLAY_ORDER: [&str; 5] = [
    C_FILE_WORKBOOK,
    C_FILE_DIRECTORY,
    C_FILE_ROSTER,
    C_FILE_CALENDAR,
    C_FILE_DECISION_LOG,
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Calendar

/// Civil timezone of every generated meeting.
pub const TZ_MEETING: Tz = chrono_tz::Europe::Warsaw;
/// Event summary used when the meeting title is blank.
pub const C_SUMMARY_FALLBACK: &str = "Meeting";

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Scoring

/// Score base when a decision is needed.
pub const N_SCORE_BASE_DECISION: i64 = 50;
/// Score base otherwise.
pub const N_SCORE_BASE_OTHER: i64 = 20;
/// Bonus when a pre-read is attached.
pub const N_SCORE_PREREAD_BONUS: i64 = 15;
/// Attendees allowed before the size penalty starts.
pub const N_ATTENDEES_FREE: i64 = 5;
/// Penalty per attendee above [`N_ATTENDEES_FREE`].
pub const N_SCORE_PER_EXTRA_ATTENDEE: i64 = 5;
/// Durations strictly above this many minutes are penalized.
pub const N_DURATION_LONG_MIN: u32 = 50;
/// Penalty for long meetings.
pub const N_SCORE_LONG_PENALTY: i64 = 10;
/// Lowest possible score.
pub const N_SCORE_MIN: i64 = 0;
/// Highest possible score.
pub const N_SCORE_MAX: i64 = 100;
/// Scores below this suggest an async memo.
pub const N_SCORE_ASYNC_BELOW: i64 = 40;
/// Scores below this (and at least [`N_SCORE_ASYNC_BELOW`]) suggest a short huddle.
pub const N_SCORE_HUDDLE_BELOW: i64 = 70;

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetAnchors

/// Sheet names in workbook order.
pub const C_SHEET_SETTINGS: &str = "Settings";
pub const C_SHEET_MEETING: &str = "Meeting";
pub const C_SHEET_EXPORTS: &str = "Exports";

/// Settings: first grade row (1-based).
pub const N_ROW_GRADE_FIRST: usize = 7;
/// Settings: last row covered by the grade lookup range, leaving room for new grades.
pub const N_ROW_GRADE_LOOKUP_LAST: usize = 20;
/// Settings: notes block first row.
pub const N_ROW_SETTINGS_NOTES: usize = 14;
/// Grade rows that fit above the notes block, keeping one spacer row.
pub const N_GRADE_ROWS_MAX: usize = N_ROW_SETTINGS_NOTES - N_ROW_GRADE_FIRST - 1;

/// Meeting: attendee table header row.
pub const N_ROW_ATTENDEE_HEADER: usize = 15;
/// Meeting: first attendee row.
pub const N_ROW_ATTENDEE_FIRST: usize = 16;
/// Attendee rows on the sheet.
pub const N_ATTENDEE_ROWS: usize = 10;
/// Meeting: last attendee row.
pub const N_ROW_ATTENDEE_LAST: usize = N_ROW_ATTENDEE_FIRST + N_ATTENDEE_ROWS - 1;
/// Meeting: totals rows.
pub const N_ROW_TOTAL_ATTENDEES: usize = 26;
pub const N_ROW_TOTAL_USD: usize = 27;
pub const N_ROW_TOTAL_WITH_INTERPRETER: usize = 28;
pub const N_ROW_TOTAL_PLN: usize = 29;
pub const N_ROW_SCORE: usize = 31;
pub const N_ROW_SUGGESTION: usize = 32;
/// Meeting: usage note block first row.
pub const N_ROW_MEETING_NOTES: usize = 32;

/// Column widths.
pub const TUP_WIDTHS_SETTINGS: [f64; 3] = [18.0, 24.0, 18.0];
pub const TUP_WIDTHS_MEETING: [f64; 6] = [24.0, 32.0, 10.0, 16.0, 18.0, 24.0];
pub const TUP_WIDTHS_EXPORTS: [f64; 2] = [24.0, 120.0];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region NoteTexts

pub const TUP_SETTINGS_NOTES: [&str; 2] = [
    "• Edit Hours_per_year and Annual_USD. Hourly calculates automatically.",
    "• Set Interpreter_hourly_USD and USD_to_PLN as needed.",
];

pub const TUP_MEETING_NOTES: [&str; 4] = [
    "1) In Settings sheet, set Hours_per_year, Annual_USD, interpreter rate and exchange rate.",
    "2) On Meeting sheet, fill title, yes/no fields, duration, location, date/time and attendees.",
    "3) Interpreter cost is added if needed and PLN totals are calculated.",
    "4) Use the suggestion to decide async vs. meeting.",
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DefaultPresets

/// Grade table defaults: P5 and G7 salaries filled, the rest left for staff to enter.
pub const TUP_GRADES_DEFAULT: [(&str, Option<f64>); 6] = [
    ("P5", Some(220_000.0)),
    ("G7", Some(77_000.0)),
    ("P4", None),
    ("P3", None),
    ("G6", None),
    ("G5", None),
];

/// Build default settings.
pub fn derive_default_settings() -> SpecSettings {
    SpecSettings {
        hours_per_year: 1760.0,
        interpreter_hourly_usd: 40.0,
        usd_to_pln: 4.0,
        grades: TUP_GRADES_DEFAULT
            .iter()
            .map(|(name, annual_usd)| SpecGrade {
                name: (*name).to_string(),
                annual_usd: *annual_usd,
            })
            .collect(),
    }
}

/// Build the default meeting (no title, no attendees).
pub fn derive_default_meeting() -> SpecMeeting {
    SpecMeeting {
        title: String::new(),
        meeting_type: EnumMeetingType::Decision,
        if_decision_needed: true,
        if_preread_attached: true,
        duration_min: 25,
        location: "Warsaw".to_string(),
        if_interpreter_needed: false,
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
        time_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        attendees: Vec::new(),
    }
}

/// Build the full default input set.
pub fn derive_default_inputs() -> SpecPlannerInputs {
    SpecPlannerInputs {
        settings: derive_default_settings(),
        meeting: derive_default_meeting(),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
