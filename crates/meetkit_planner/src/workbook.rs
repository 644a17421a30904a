//! Cell layout of the planner workbook: Settings, Meeting, Exports.
//!
//! Every derived cell is a live formula; the cached result next to it comes from
//! [`crate::calc`] so non-recalculating viewers show the same numbers.

use std::path::Path;

use meetkit_io_xlsx::{
    EnumCellValue, EnumFmtKey, SpecSheetLayout, SpecXlsxReport, XlsxWriteError, XlsxWriter,
    derive_cell_ref, derive_default_xlsx_formats, derive_default_xlsx_write_options,
};
use tracing::debug;

use crate::calc::{
    calculate_hourly_usd, render_general_number, render_optional_number, render_suggestion_line,
    render_summary_line,
};
use crate::conf::{
    C_SHEET_EXPORTS, C_SHEET_MEETING, C_SHEET_SETTINGS, N_ATTENDEE_ROWS, N_ROW_ATTENDEE_FIRST,
    N_ROW_ATTENDEE_HEADER, N_ROW_ATTENDEE_LAST, N_ROW_GRADE_FIRST, N_ROW_GRADE_LOOKUP_LAST,
    N_ROW_MEETING_NOTES, N_ROW_SCORE, N_ROW_SETTINGS_NOTES, N_ROW_SUGGESTION,
    N_ROW_TOTAL_ATTENDEES, N_ROW_TOTAL_PLN, N_ROW_TOTAL_USD, N_ROW_TOTAL_WITH_INTERPRETER,
    TUP_MEETING_NOTES, TUP_SETTINGS_NOTES, TUP_WIDTHS_EXPORTS, TUP_WIDTHS_MEETING,
    TUP_WIDTHS_SETTINGS,
};
use crate::spec::{SpecMeeting, SpecMeetingSummary, SpecSettings, render_yes_no};

const C_FORMAT_DATE: &str = "%Y-%m-%d";
const C_FORMAT_TIME: &str = "%H:%M";

const N_COL_NAME: usize = 0;
const N_COL_COST: usize = 5;

////////////////////////////////////////////////////////////////////////////////
// #region SettingsSheet

/// Settings sheet: cost parameters and the grade table.
pub fn derive_settings_sheet(settings: &SpecSettings) -> Result<SpecSheetLayout, XlsxWriteError> {
    let mut layout = SpecSheetLayout::new(C_SHEET_SETTINGS);

    layout.set_cell_a1("A1", "Parameter", EnumFmtKey::Label)?;
    layout.set_cell_a1("B1", "Value", EnumFmtKey::Label)?;
    layout.set_cell_a1("A2", "Hours_per_year (editable)", EnumFmtKey::Text)?;
    layout.set_cell_a1("B2", settings.hours_per_year, EnumFmtKey::Text)?;
    layout.set_cell_a1("A3", "Interpreter_hourly_USD (edit)", EnumFmtKey::Text)?;
    layout.set_cell_a1("B3", settings.interpreter_hourly_usd, EnumFmtKey::Text)?;
    layout.set_cell_a1("A4", "USD_to_PLN (edit)", EnumFmtKey::Text)?;
    layout.set_cell_a1("B4", settings.usd_to_pln, EnumFmtKey::Text)?;

    let n_row_grade_header = N_ROW_GRADE_FIRST - 1;
    layout.set_cell_a1(&format!("A{n_row_grade_header}"), "Grade", EnumFmtKey::Label)?;
    layout.set_cell_a1(
        &format!("B{n_row_grade_header}"),
        "Annual_USD (editable)",
        EnumFmtKey::Label,
    )?;
    layout.set_cell_a1(
        &format!("C{n_row_grade_header}"),
        "Hourly_USD (auto)",
        EnumFmtKey::Label,
    )?;

    for (n_offset, grade) in settings.grades.iter().enumerate() {
        let r = N_ROW_GRADE_FIRST + n_offset;
        layout.set_cell_a1(&format!("A{r}"), grade.name.as_str(), EnumFmtKey::Text)?;
        if let Some(n_annual) = grade.annual_usd {
            layout.set_cell_a1(&format!("B{r}"), n_annual, EnumFmtKey::Text)?;
        }
        let n_hourly = calculate_hourly_usd(grade.annual_usd, settings.hours_per_year);
        layout.set_cell_a1(
            &format!("C{r}"),
            EnumCellValue::formula(
                format!(r#"IF(B{r}="","",IFERROR(B{r}/$B$2,""))"#),
                render_optional_number(n_hourly),
            ),
            EnumFmtKey::Decimal,
        )?;
    }

    layout.set_cell_a1(&format!("A{N_ROW_SETTINGS_NOTES}"), "Notes", EnumFmtKey::Label)?;
    for (n_offset, note) in TUP_SETTINGS_NOTES.iter().enumerate() {
        let r = N_ROW_SETTINGS_NOTES + 1 + n_offset;
        layout.set_cell_a1(&format!("A{r}"), *note, EnumFmtKey::Text)?;
    }

    layout.set_column_widths(0, &TUP_WIDTHS_SETTINGS);
    Ok(layout)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region MeetingSheet

/// Meeting sheet: inputs, attendee grid, totals, score, and suggestion.
pub fn derive_meeting_sheet(
    meeting: &SpecMeeting,
    summary: &SpecMeetingSummary,
) -> Result<SpecSheetLayout, XlsxWriteError> {
    let mut layout = SpecSheetLayout::new(C_SHEET_MEETING);
    layout.set_cell_a1("A1", "Meeting Planner (Lite)", EnumFmtKey::Title)?;

    // Inputs
    let l_inputs: [(&str, EnumCellValue); 9] = [
        ("Title:", meeting.title.as_str().into()),
        (
            "Type (Decision/Coordination/Info):",
            meeting.meeting_type.as_str().into(),
        ),
        (
            "Decision needed (Yes/No):",
            render_yes_no(meeting.if_decision_needed).into(),
        ),
        (
            "Pre-read attached (Yes/No):",
            render_yes_no(meeting.if_preread_attached).into(),
        ),
        ("Duration (minutes):", f64::from(meeting.duration_min).into()),
        ("Location (city):", meeting.location.as_str().into()),
        (
            "Interpreter needed (Yes/No):",
            render_yes_no(meeting.if_interpreter_needed).into(),
        ),
        (
            "Meeting date (YYYY-MM-DD):",
            meeting.date.format(C_FORMAT_DATE).to_string().into(),
        ),
        (
            "Start time (HH:MM):",
            meeting.time_start.format(C_FORMAT_TIME).to_string().into(),
        ),
    ];
    for (n_offset, (label, value)) in l_inputs.into_iter().enumerate() {
        let r = 3 + n_offset;
        layout.set_cell_a1(&format!("A{r}"), label, EnumFmtKey::Label)?;
        if value != EnumCellValue::String(String::new()) {
            layout.set_cell_a1(&format!("B{r}"), value, EnumFmtKey::Text)?;
        }
    }

    // Summary block
    layout.set_cell_a1("E3", "Summary", EnumFmtKey::Label)?;
    let l_summary: [(&str, usize, String); 5] = [
        (
            "Total attendees:",
            N_ROW_TOTAL_ATTENDEES,
            summary.cnt_attendees.to_string(),
        ),
        (
            "Total cost (USD):",
            N_ROW_TOTAL_WITH_INTERPRETER,
            render_general_number(summary.total_cost_with_interpreter_usd),
        ),
        (
            "Total cost (PLN):",
            N_ROW_TOTAL_PLN,
            render_general_number(summary.total_cost_pln),
        ),
        (
            "Necessity score (0–100):",
            N_ROW_SCORE,
            summary.necessity_score.to_string(),
        ),
        (
            "Suggestion:",
            N_ROW_SUGGESTION,
            summary.suggestion.to_string(),
        ),
    ];
    for (n_offset, (label, n_row_source, result)) in l_summary.into_iter().enumerate() {
        let r = 4 + n_offset;
        layout.set_cell_a1(&format!("E{r}"), label, EnumFmtKey::Label)?;
        layout.set_cell_a1(
            &format!("F{r}"),
            EnumCellValue::formula(format!("F{n_row_source}"), result),
            EnumFmtKey::Text,
        )?;
    }

    // Attendee grid
    layout.set_cell_a1("A13", "Attendees (up to 10 rows)", EnumFmtKey::Label)?;
    let l_headers = [
        "Name",
        "Email",
        "Grade",
        "Role (A/D/R/C)",
        "Hourly (USD)",
        "Cost for this meeting (USD)",
    ];
    for (n_col, header) in l_headers.iter().enumerate() {
        layout.set_cell(N_ROW_ATTENDEE_HEADER - 1, n_col, *header, EnumFmtKey::GridHeader);
    }

    for n_idx in 0..N_ATTENDEE_ROWS {
        let r = N_ROW_ATTENDEE_FIRST + n_idx;
        if let Some(attendee) = meeting.attendees.get(n_idx) {
            let l_texts = [
                &attendee.name,
                &attendee.email,
                &attendee.grade,
                &attendee.role,
            ];
            for (n_col, text) in l_texts.into_iter().enumerate() {
                if !text.is_empty() {
                    layout.set_cell(r - 1, n_col, text.as_str(), EnumFmtKey::Grid);
                }
            }
        }

        let n_hourly = summary.hourly_by_row.get(n_idx).copied().flatten();
        let n_cost = summary.cost_by_row.get(n_idx).copied().flatten();
        layout.set_cell_a1(
            &format!("E{r}"),
            EnumCellValue::formula(
                format!(
                    r#"IFERROR(VLOOKUP(C{r},Settings!$A${N_ROW_GRADE_FIRST}:$C${N_ROW_GRADE_LOOKUP_LAST},3,FALSE),"")"#
                ),
                render_optional_number(n_hourly),
            ),
            EnumFmtKey::GridDecimal,
        )?;
        layout.set_cell_a1(
            &format!("F{r}"),
            EnumCellValue::formula(
                format!(r#"IFERROR(E{r}*$B$7/60,"")"#),
                render_optional_number(n_cost),
            ),
            EnumFmtKey::GridDecimal,
        )?;
    }

    // Totals
    let c_names_range = derive_attendee_range(N_COL_NAME);
    let c_costs_range = derive_attendee_range(N_COL_COST);
    layout.set_cell_a1(
        &format!("E{N_ROW_TOTAL_ATTENDEES}"),
        "Totals:",
        EnumFmtKey::GridHeader,
    )?;
    layout.set_cell_a1(
        &format!("F{N_ROW_TOTAL_ATTENDEES}"),
        EnumCellValue::formula(
            format!("COUNTA({c_names_range})"),
            summary.cnt_attendees.to_string(),
        ),
        EnumFmtKey::Grid,
    )?;

    let l_totals: [(usize, &str, String, String); 3] = [
        (
            N_ROW_TOTAL_USD,
            "Total cost (USD):",
            format!("IFERROR(SUM({c_costs_range}),0)"),
            render_general_number(summary.total_cost_usd),
        ),
        (
            N_ROW_TOTAL_WITH_INTERPRETER,
            "With interpreter (USD):",
            format!(
                r#"IFERROR(F{N_ROW_TOTAL_USD}+IF($B$9="Yes",Settings!$B$3*$B$7/60,0),0)"#
            ),
            render_general_number(summary.total_cost_with_interpreter_usd),
        ),
        (
            N_ROW_TOTAL_PLN,
            "Total cost (PLN):",
            format!(r#"IFERROR(ROUND(F{N_ROW_TOTAL_WITH_INTERPRETER}*Settings!$B$4,2),"")"#),
            render_general_number(summary.total_cost_pln),
        ),
    ];
    for (r, label, formula, result) in l_totals {
        layout.set_cell_a1(&format!("E{r}"), label, EnumFmtKey::Label)?;
        layout.set_cell_a1(
            &format!("F{r}"),
            EnumCellValue::formula(formula, result),
            EnumFmtKey::Decimal,
        )?;
    }

    // Score and suggestion
    let r_count = N_ROW_TOTAL_ATTENDEES;
    layout.set_cell_a1(&format!("E{N_ROW_SCORE}"), "Necessity score:", EnumFmtKey::Label)?;
    layout.set_cell_a1(
        &format!("F{N_ROW_SCORE}"),
        EnumCellValue::formula(
            format!(
                r#"IFERROR(MAX(0,MIN(100,IF($B$5="Yes",50,20)+IF($B$6="Yes",15,0)-MAX(0,(F{r_count}-5)*5)-IF($B$7>50,10,0))),"")"#
            ),
            summary.necessity_score.to_string(),
        ),
        EnumFmtKey::Text,
    )?;
    let r_score = N_ROW_SCORE;
    layout.set_cell_a1(&format!("E{N_ROW_SUGGESTION}"), "Suggestion:", EnumFmtKey::Label)?;
    layout.set_cell_a1(
        &format!("F{N_ROW_SUGGESTION}"),
        EnumCellValue::formula(
            format!(
                r#"IF(F{r_score}="","",IF(F{r_score}<40,"Do async memo",IF(F{r_score}<70,"15–30 min huddle (cap 5)","Proceed; cap attendees (≤6)")))"#
            ),
            summary.suggestion.to_string(),
        ),
        EnumFmtKey::Text,
    )?;

    // Usage notes
    layout.set_cell_a1(
        &format!("A{N_ROW_MEETING_NOTES}"),
        "How to use (quick):",
        EnumFmtKey::Label,
    )?;
    for (n_offset, note) in TUP_MEETING_NOTES.iter().enumerate() {
        let r = N_ROW_MEETING_NOTES + 1 + n_offset;
        layout.set_cell_a1(&format!("A{r}"), *note, EnumFmtKey::Text)?;
    }

    layout.fill_blank_range(
        (N_ROW_ATTENDEE_HEADER - 1, 0),
        (N_ROW_TOTAL_ATTENDEES - 1, l_headers.len() - 1),
        EnumFmtKey::Grid,
    );
    layout.set_column_widths(0, &TUP_WIDTHS_MEETING);
    Ok(layout)
}

/// `A16:A25`-style range over the attendee rows of one column.
fn derive_attendee_range(col_idx: usize) -> String {
    format!(
        "{}:{}",
        derive_cell_ref(N_ROW_ATTENDEE_FIRST - 1, col_idx),
        derive_cell_ref(N_ROW_ATTENDEE_LAST - 1, col_idx)
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ExportsSheet

/// Exports sheet: two copy-paste lines built with `CONCAT`.
pub fn derive_exports_sheet(
    meeting: &SpecMeeting,
    summary: &SpecMeetingSummary,
) -> Result<SpecSheetLayout, XlsxWriteError> {
    let mut layout = SpecSheetLayout::new(C_SHEET_EXPORTS);
    layout.set_cell_a1(
        "A1",
        "Copy the rows below into invites or reports as needed.",
        EnumFmtKey::Label,
    )?;

    let c_summary_formula = format!(
        concat!(
            r#"CONCAT("Title: ",{}," | Type: ",{}," | Duration: ",{}," min | Location: ",{},"#,
            r#"" | Attendees: ",{}," | Cost: $",{}," (",{}," PLN)")"#,
        ),
        derive_text_ref("Meeting!B3"),
        derive_text_ref("Meeting!B4"),
        derive_text_ref("Meeting!B7"),
        derive_text_ref("Meeting!B8"),
        derive_text_ref(&format!("Meeting!F{N_ROW_TOTAL_ATTENDEES}")),
        derive_money_ref(&format!("Meeting!F{N_ROW_TOTAL_WITH_INTERPRETER}")),
        derive_money_ref(&format!("Meeting!F{N_ROW_TOTAL_PLN}")),
    );
    layout.set_cell_a1("A3", "Summary line", EnumFmtKey::Text)?;
    layout.set_cell_a1(
        "B3",
        EnumCellValue::formula(c_summary_formula, render_summary_line(meeting, summary)),
        EnumFmtKey::Text,
    )?;

    let c_suggestion_formula = format!(
        r#"CONCAT("Suggestion: ",{}," | Score: ",{})"#,
        derive_text_ref(&format!("Meeting!F{N_ROW_SUGGESTION}")),
        derive_text_ref(&format!("Meeting!F{N_ROW_SCORE}")),
    );
    layout.set_cell_a1("A5", "Suggestion line", EnumFmtKey::Text)?;
    layout.set_cell_a1(
        "B5",
        EnumCellValue::formula(c_suggestion_formula, render_suggestion_line(summary)),
        EnumFmtKey::Text,
    )?;

    layout.set_column_widths(0, &TUP_WIDTHS_EXPORTS);
    Ok(layout)
}

/// `IFERROR(ref&"","")`: a blank or failing source renders as empty text.
fn derive_text_ref(cell_ref: &str) -> String {
    format!(r#"IFERROR({cell_ref}&"","")"#)
}

/// `TEXT(IFERROR(ref,0),"#,##0")`.
fn derive_money_ref(cell_ref: &str) -> String {
    format!(r##"TEXT(IFERROR({cell_ref},0),"#,##0")"##)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Workbook

/// All three sheets in workbook order.
pub fn derive_workbook_layouts(
    settings: &SpecSettings,
    meeting: &SpecMeeting,
    summary: &SpecMeetingSummary,
) -> Result<Vec<SpecSheetLayout>, XlsxWriteError> {
    Ok(vec![
        derive_settings_sheet(settings)?,
        derive_meeting_sheet(meeting, summary)?,
        derive_exports_sheet(meeting, summary)?,
    ])
}

/// Write `layouts` to `path` with the default format presets.
pub fn write_workbook(
    path: &Path,
    layouts: &[SpecSheetLayout],
) -> Result<SpecXlsxReport, XlsxWriteError> {
    let mut writer = XlsxWriter::new(
        path.to_path_buf(),
        derive_default_xlsx_formats(),
        derive_default_xlsx_write_options(),
    )?;
    for layout in layouts {
        writer.write_sheet(layout)?;
    }
    writer.close()?;

    let report = writer.report();
    debug!(
        path = %writer.file_out(),
        sheets = report.sheets.len(),
        "workbook written"
    );
    Ok(report)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
