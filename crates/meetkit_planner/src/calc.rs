//! Pure evaluation of the workbook formulas.
//!
//! Each function mirrors one formula cell so the cached results written next to the
//! formulas match what a spreadsheet computes on open.

use crate::conf::{
    N_ATTENDEE_ROWS, N_ATTENDEES_FREE, N_DURATION_LONG_MIN, N_SCORE_BASE_DECISION,
    N_SCORE_BASE_OTHER, N_SCORE_LONG_PENALTY, N_SCORE_MAX, N_SCORE_MIN,
    N_SCORE_PER_EXTRA_ATTENDEE, N_SCORE_PREREAD_BONUS,
};
use crate::spec::{
    EnumSuggestion, SpecAttendee, SpecMeeting, SpecMeetingSummary, SpecSettings,
};

////////////////////////////////////////////////////////////////////////////////
// #region Costs

/// `IF(annual="","",IFERROR(annual/hours,""))`.
pub fn calculate_hourly_usd(annual_usd: Option<f64>, hours_per_year: f64) -> Option<f64> {
    let n_annual = annual_usd?;
    if hours_per_year == 0.0 {
        return None;
    }
    let n_hourly = n_annual / hours_per_year;
    n_hourly.is_finite().then_some(n_hourly)
}

/// Exact, case-insensitive grade lookup (`VLOOKUP(..., FALSE)`); first match wins.
pub fn lookup_hourly_usd(settings: &SpecSettings, grade: &str) -> Option<f64> {
    if grade.is_empty() {
        return None;
    }
    let grade_row = settings
        .grades
        .iter()
        .find(|row| row.name.to_lowercase() == grade.to_lowercase())?;
    calculate_hourly_usd(grade_row.annual_usd, settings.hours_per_year)
}

/// `hourly * duration / 60`, blank when hourly is blank.
pub fn calculate_attendee_cost_usd(hourly_usd: Option<f64>, duration_min: u32) -> Option<f64> {
    hourly_usd.map(|n_hourly| n_hourly * f64::from(duration_min) / 60.0)
}

/// Interpreter surcharge for the meeting, zero when not needed.
pub fn calculate_interpreter_cost_usd(
    if_interpreter_needed: bool,
    interpreter_hourly_usd: f64,
    duration_min: u32,
) -> f64 {
    if if_interpreter_needed {
        interpreter_hourly_usd * f64::from(duration_min) / 60.0
    } else {
        0.0
    }
}

/// `COUNTA` over the name column.
pub fn count_attendees(attendees: &[SpecAttendee]) -> usize {
    attendees.iter().filter(|row| !row.name.is_empty()).count()
}

/// Spreadsheet `ROUND`: half away from zero.
pub fn round_half_away_from_zero(value: f64, n_digits: i32) -> f64 {
    let n_scale = 10f64.powi(n_digits);
    (value * n_scale).round() / n_scale
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Scoring

/// `MAX(0, MIN(100, raw))`.
pub fn clamp_necessity_score(score_raw: i64) -> i64 {
    score_raw.clamp(N_SCORE_MIN, N_SCORE_MAX)
}

/// Necessity score from the meeting flags, head count, and duration.
pub fn calculate_necessity_score(
    if_decision_needed: bool,
    if_preread_attached: bool,
    cnt_attendees: usize,
    duration_min: u32,
) -> i64 {
    let n_base = if if_decision_needed {
        N_SCORE_BASE_DECISION
    } else {
        N_SCORE_BASE_OTHER
    };
    let n_preread = if if_preread_attached {
        N_SCORE_PREREAD_BONUS
    } else {
        0
    };
    let n_size_penalty = i64::max(
        0,
        (cnt_attendees as i64 - N_ATTENDEES_FREE) * N_SCORE_PER_EXTRA_ATTENDEE,
    );
    let n_long_penalty = if duration_min > N_DURATION_LONG_MIN {
        N_SCORE_LONG_PENALTY
    } else {
        0
    };

    clamp_necessity_score(n_base + n_preread - n_size_penalty - n_long_penalty)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Summary

/// Evaluate every derived cell of the Meeting sheet.
pub fn derive_meeting_summary(settings: &SpecSettings, meeting: &SpecMeeting) -> SpecMeetingSummary {
    let mut hourly_by_row = Vec::with_capacity(N_ATTENDEE_ROWS);
    let mut cost_by_row = Vec::with_capacity(N_ATTENDEE_ROWS);
    for n_idx in 0..N_ATTENDEE_ROWS {
        let n_hourly = meeting
            .attendees
            .get(n_idx)
            .and_then(|row| lookup_hourly_usd(settings, &row.grade));
        hourly_by_row.push(n_hourly);
        cost_by_row.push(calculate_attendee_cost_usd(n_hourly, meeting.duration_min));
    }

    let cnt_attendees = count_attendees(&meeting.attendees);
    let total_cost_usd: f64 = cost_by_row.iter().flatten().sum();
    let total_cost_with_interpreter_usd = total_cost_usd
        + calculate_interpreter_cost_usd(
            meeting.if_interpreter_needed,
            settings.interpreter_hourly_usd,
            meeting.duration_min,
        );
    let total_cost_pln =
        round_half_away_from_zero(total_cost_with_interpreter_usd * settings.usd_to_pln, 2);
    let necessity_score = calculate_necessity_score(
        meeting.if_decision_needed,
        meeting.if_preread_attached,
        cnt_attendees,
        meeting.duration_min,
    );

    SpecMeetingSummary {
        hourly_by_row,
        cost_by_row,
        cnt_attendees,
        total_cost_usd,
        total_cost_with_interpreter_usd,
        total_cost_pln,
        necessity_score,
        suggestion: EnumSuggestion::from_score(necessity_score),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TextRendering

/// Number as the General cell format shows it (`125`, `43.75`).
pub fn render_general_number(value: f64) -> String {
    format!("{value}")
}

/// Blank for `None`, General rendering otherwise.
pub fn render_optional_number(value: Option<f64>) -> String {
    value.map(render_general_number).unwrap_or_default()
}

/// `TEXT(value, "#,##0")`.
pub fn format_thousands(value: f64) -> String {
    let n_rounded = round_half_away_from_zero(value, 0);
    let c_digits = format!("{:.0}", n_rounded.abs());

    let mut c_out = String::with_capacity(c_digits.len() + c_digits.len() / 3 + 1);
    for (n_idx, chr) in c_digits.chars().enumerate() {
        if n_idx > 0 && (c_digits.len() - n_idx) % 3 == 0 {
            c_out.push(',');
        }
        c_out.push(chr);
    }
    if n_rounded < 0.0 {
        c_out.insert(0, '-');
    }
    c_out
}

/// Exports "Summary line".
pub fn render_summary_line(meeting: &SpecMeeting, summary: &SpecMeetingSummary) -> String {
    format!(
        "Title: {} | Type: {} | Duration: {} min | Location: {} | Attendees: {} | Cost: ${} ({} PLN)",
        meeting.title,
        meeting.meeting_type,
        meeting.duration_min,
        meeting.location,
        summary.cnt_attendees,
        format_thousands(summary.total_cost_with_interpreter_usd),
        format_thousands(summary.total_cost_pln),
    )
}

/// Exports "Suggestion line".
pub fn render_suggestion_line(summary: &SpecMeetingSummary) -> String {
    format!(
        "Suggestion: {} | Score: {}",
        summary.suggestion, summary.necessity_score
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
