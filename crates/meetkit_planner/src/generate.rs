//! One-pass generation of every planning artifact.

use std::path::Path;

use meetkit_io_csv::write_table_template;
use meetkit_io_ics::write_calendar;
use tracing::info;

use crate::calc::derive_meeting_summary;
use crate::calendar::derive_meeting_calendar;
use crate::conf::{C_FILE_CALENDAR, C_FILE_WORKBOOK};
use crate::report::{ReportGenerate, ReportGenerateBuilder};
use crate::spec::{PlannerError, SpecPlannerInputs};
use crate::templates::derive_templates;
use crate::workbook::{derive_workbook_layouts, write_workbook};

/// Write the workbook, the invite, and the three templates into `dir_out`.
///
/// Existing files are overwritten. Output depends only on `inputs`.
pub fn generate_planning_artifacts(
    dir_out: &Path,
    inputs: &SpecPlannerInputs,
) -> Result<ReportGenerate, PlannerError> {
    inputs.validate()?;
    let mut report = ReportGenerateBuilder::default();

    let summary = derive_meeting_summary(&inputs.settings, &inputs.meeting);
    let l_layouts = derive_workbook_layouts(&inputs.settings, &inputs.meeting, &summary)?;
    let path_workbook = dir_out.join(C_FILE_WORKBOOK);
    let report_xlsx = write_workbook(&path_workbook, &l_layouts)?;
    for sheet in &report_xlsx.sheets {
        report.add_sheet(sheet.cnt_formulas);
    }
    report.add_warnings(report_xlsx.warnings);
    info!(
        path = %path_workbook.display(),
        score = summary.necessity_score,
        suggestion = %summary.suggestion,
        "workbook created"
    );
    report.add_file(path_workbook);

    let calendar = derive_meeting_calendar(&inputs.meeting)?;
    let path_calendar = dir_out.join(C_FILE_CALENDAR);
    write_calendar(&path_calendar, &calendar)?;
    let n_attendees: usize = calendar.events.iter().map(|event| event.attendees.len()).sum();
    report.add_calendar_attendees(n_attendees);
    info!(
        path = %path_calendar.display(),
        attendees = n_attendees,
        "calendar invite created"
    );
    report.add_file(path_calendar);

    for template in derive_templates() {
        let path_template = dir_out.join(&template.file_name);
        write_table_template(&path_template, &template)?;
        info!(
            path = %path_template.display(),
            template = %template.name,
            "template created"
        );
        report.add_file(path_template);
    }

    Ok(report.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::derive_default_inputs;
    use crate::spec::SpecAttendee;

    #[test]
    fn generate_reports_files_in_creation_order() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let report = generate_planning_artifacts(tmp.path(), &derive_default_inputs())
            .expect("generate");

        let l_created: Vec<String> = report
            .files_created
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            l_created,
            [
                "meeting_planner_template.xlsx",
                "meeting_invite.ics",
                "directory_template.csv",
                "roster_template.csv",
                "decision_log.csv"
            ]
        );
        assert_eq!(
            report.format_created_files(),
            "Templates created: meeting_planner_template.xlsx directory_template.csv \
             roster_template.csv meeting_invite.ics decision_log.csv"
        );
        assert_eq!(report.cnt_sheets, 3);
        assert_eq!(report.cnt_formulas, 39);
        assert_eq!(report.cnt_calendar_attendees, 0);
        assert!(report.warnings.is_empty());
        for path in &report.files_created {
            assert!(path.exists(), "{} missing", path.display());
        }
    }

    #[test]
    fn invalid_inputs_write_nothing() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut inputs = derive_default_inputs();
        inputs.meeting.attendees = vec![SpecAttendee::default(); 11];

        let err = generate_planning_artifacts(tmp.path(), &inputs).expect_err("overflow");
        assert!(matches!(err, PlannerError::TooManyAttendees { .. }));
        assert!(!tmp.path().join(C_FILE_WORKBOOK).exists());
    }
}
