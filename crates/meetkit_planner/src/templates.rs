//! Blank CSV templates shipped next to the workbook.

use meetkit_io_csv::{SpecTableTemplate, SpecTemplateColumn};

use crate::conf::{C_FILE_DECISION_LOG, C_FILE_DIRECTORY, C_FILE_ROSTER};

const N_ROWS_DIRECTORY: usize = 2;
const N_ROWS_ROSTER: usize = 2;
const N_ROWS_DECISION_LOG: usize = 1;

/// Staff directory: one sample row per default grade band.
pub fn derive_directory_template() -> SpecTableTemplate {
    let n = N_ROWS_DIRECTORY;
    SpecTableTemplate {
        name: "directory".to_string(),
        file_name: C_FILE_DIRECTORY.to_string(),
        columns: vec![
            SpecTemplateColumn::blank("name", n),
            SpecTemplateColumn::blank("email", n),
            SpecTemplateColumn::blank("unit", n),
            SpecTemplateColumn::blank("location", n),
            SpecTemplateColumn::per_row("grade_band", &["P5", "G7"]),
            SpecTemplateColumn::blank("role_tags", n),
            SpecTemplateColumn::blank("manager_email", n),
        ],
    }
}

/// Working-hours roster with office-hour defaults.
pub fn derive_roster_template() -> SpecTableTemplate {
    let n = N_ROWS_ROSTER;
    SpecTableTemplate {
        name: "roster".to_string(),
        file_name: C_FILE_ROSTER.to_string(),
        columns: vec![
            SpecTemplateColumn::blank("email", n),
            SpecTemplateColumn::repeat("workdays", "Mon-Fri", n),
            SpecTemplateColumn::repeat("start_local", "09:00", n),
            SpecTemplateColumn::repeat("end_local", "17:00", n),
            SpecTemplateColumn::repeat("timezone", "Europe/Warsaw", n),
            SpecTemplateColumn::blank("exceptions", n),
            SpecTemplateColumn::blank("travel_windows", n),
        ],
    }
}

/// Decision log with a single empty row.
pub fn derive_decision_log_template() -> SpecTableTemplate {
    let l_names = [
        "date",
        "title",
        "decision",
        "owner",
        "attendees",
        "cost_usd",
        "score",
        "suggestion",
    ];
    SpecTableTemplate {
        name: "decision_log".to_string(),
        file_name: C_FILE_DECISION_LOG.to_string(),
        columns: l_names
            .iter()
            .map(|name| SpecTemplateColumn::blank(name, N_ROWS_DECISION_LOG))
            .collect(),
    }
}

/// All templates in write order.
pub fn derive_templates() -> Vec<SpecTableTemplate> {
    vec![
        derive_directory_template(),
        derive_roster_template(),
        derive_decision_log_template(),
    ]
}
