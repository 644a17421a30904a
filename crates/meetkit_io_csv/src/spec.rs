//! Template specification models and top-level error types.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// One template column: header plus per-row placeholder values (`None` = blank).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTemplateColumn {
    /// Header text.
    pub name: String,
    /// One entry per placeholder row.
    pub values: Vec<Option<String>>,
}

impl SpecTemplateColumn {
    /// Column left blank on every row.
    pub fn blank(name: &str, n_rows: usize) -> Self {
        Self {
            name: name.to_string(),
            values: vec![None; n_rows],
        }
    }

    /// Column repeating the same default on every row.
    pub fn repeat(name: &str, value: &str, n_rows: usize) -> Self {
        Self {
            name: name.to_string(),
            values: vec![Some(value.to_string()); n_rows],
        }
    }

    /// Column with one explicit default per row.
    pub fn per_row(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            values: values.iter().map(|val| Some((*val).to_string())).collect(),
        }
    }
}

/// A named flat table with a header row and placeholder rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTableTemplate {
    /// Logical template name (used in logs and reports).
    pub name: String,
    /// Output file name.
    pub file_name: String,
    /// Columns in output order.
    pub columns: Vec<SpecTemplateColumn>,
}

impl SpecTableTemplate {
    /// Number of placeholder rows (taken from the first column).
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |col| col.values.len())
    }

    /// Column headers in output order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.name.as_str()).collect()
    }
}

/// Errors raised while building or writing a template.
#[derive(Debug, Error)]
pub enum CsvWriteError {
    /// Columns disagree on row count.
    #[error("template {template:?}: column {column:?} has {found} rows, expected {expected}")]
    RaggedTemplate {
        /// Template name.
        template: String,
        /// Offending column.
        column: String,
        /// Expected row count.
        expected: usize,
        /// Actual row count.
        found: usize,
    },
    /// DataFrame construction or CSV encoding failed.
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
    /// Output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Target path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
