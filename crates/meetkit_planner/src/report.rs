//! Generation report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::conf::TUP_FILES_DISPLAY_ORDER;

/// Outcome of one `generate_planning_artifacts` run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReportGenerate {
    /// Written files in creation order.
    pub files_created: Vec<PathBuf>,
    /// Worksheets written to the workbook.
    pub cnt_sheets: u64,
    /// Formula cells written to the workbook.
    pub cnt_formulas: u64,
    /// `ATTENDEE` lines in the invite.
    pub cnt_calendar_attendees: u64,
    /// Non-fatal warnings collected from the writers.
    pub warnings: Vec<String>,
}

impl ReportGenerate {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_files".to_string(), self.files_created.len() as u64);
        dict_counts.insert("cnt_sheets".to_string(), self.cnt_sheets);
        dict_counts.insert("cnt_formulas".to_string(), self.cnt_formulas);
        dict_counts.insert(
            "cnt_calendar_attendees".to_string(),
            self.cnt_calendar_attendees,
        );
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} files={} sheets={} formulas={} attendees={} warnings={}",
            dict_counts["cnt_files"],
            dict_counts["cnt_sheets"],
            dict_counts["cnt_formulas"],
            dict_counts["cnt_calendar_attendees"],
            dict_counts["cnt_warnings"]
        )
    }

    /// `Templates created: a b c` using bare file names.
    ///
    /// Known artifacts follow the display order (workbook, directory, roster, invite,
    /// decision log); other names keep creation order after them.
    pub fn format_created_files(&self) -> String {
        let mut l_names: Vec<String> = self
            .files_created
            .iter()
            .map(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            })
            .collect();
        l_names.sort_by_key(|name| {
            TUP_FILES_DISPLAY_ORDER
                .iter()
                .position(|known| *known == name.as_str())
                .unwrap_or(TUP_FILES_DISPLAY_ORDER.len())
        });
        format!("Templates created: {}", l_names.join(" "))
    }
}

impl fmt::Display for ReportGenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[GENERATE]"))
    }
}

/// Mutable accumulator filled while artifacts are written.
#[derive(Debug, Default, Clone)]
pub struct ReportGenerateBuilder {
    /// See [`ReportGenerate::files_created`].
    pub files_created: Vec<PathBuf>,
    /// See [`ReportGenerate::cnt_sheets`].
    pub cnt_sheets: u64,
    /// See [`ReportGenerate::cnt_formulas`].
    pub cnt_formulas: u64,
    /// See [`ReportGenerate::cnt_calendar_attendees`].
    pub cnt_calendar_attendees: u64,
    /// See [`ReportGenerate::warnings`].
    pub warnings: Vec<String>,
}

impl ReportGenerateBuilder {
    /// Record one written file.
    pub fn add_file(&mut self, path: PathBuf) {
        self.files_created.push(path);
    }

    /// Record one written worksheet and its formula count.
    pub fn add_sheet(&mut self, cnt_formulas: usize) {
        self.cnt_sheets += 1;
        self.cnt_formulas += cnt_formulas as u64;
    }

    /// Record invite attendees.
    pub fn add_calendar_attendees(&mut self, cnt: usize) {
        self.cnt_calendar_attendees += cnt as u64;
    }

    /// Add warning messages.
    pub fn add_warnings(&mut self, warnings: impl IntoIterator<Item = String>) {
        self.warnings.extend(warnings);
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportGenerate {
        ReportGenerate {
            files_created: self.files_created,
            cnt_sheets: self.cnt_sheets,
            cnt_formulas: self.cnt_formulas,
            cnt_calendar_attendees: self.cnt_calendar_attendees,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_format_and_display_match() {
        let mut builder = ReportGenerateBuilder::default();
        builder.add_file(PathBuf::from("out/meeting_planner_template.xlsx"));
        builder.add_file(PathBuf::from("out/meeting_invite.ics"));
        builder.add_sheet(6);
        builder.add_sheet(33);
        builder.add_calendar_attendees(2);
        builder.add_warnings(["w".to_string()]);
        let report = builder.build();

        let txt = report.format("[GENERATE]");
        assert_eq!(
            txt,
            "[GENERATE] files=2 sheets=2 formulas=39 attendees=2 warnings=1"
        );
        assert_eq!(report.to_string(), txt);
    }

    #[test]
    fn created_files_line_uses_bare_names() {
        let report = ReportGenerate {
            files_created: vec![
                PathBuf::from("/tmp/x/meeting_planner_template.xlsx"),
                PathBuf::from("decision_log.csv"),
            ],
            ..Default::default()
        };
        assert_eq!(
            report.format_created_files(),
            "Templates created: meeting_planner_template.xlsx decision_log.csv"
        );
    }

    #[test]
    fn created_files_line_lists_invite_after_templates() {
        let report = ReportGenerate {
            files_created: [
                "meeting_planner_template.xlsx",
                "meeting_invite.ics",
                "notes.txt",
                "directory_template.csv",
                "roster_template.csv",
                "decision_log.csv",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            ..Default::default()
        };
        assert_eq!(
            report.format_created_files(),
            "Templates created: meeting_planner_template.xlsx directory_template.csv \
             roster_template.csv meeting_invite.ics decision_log.csv notes.txt"
        );
        assert_eq!(report.files_created[1], PathBuf::from("meeting_invite.ics"));
    }
}
