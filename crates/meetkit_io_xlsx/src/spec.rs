//! Shared XLSX specification models and top-level error types.

use std::collections::BTreeMap;

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

use crate::conf::{EnumFmtKey, TUP_DOC_CREATION_DATE};
use crate::util::parse_cell_ref;

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification, resolved into a `rust_xlsxwriter::Format` at write time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Center content vertically.
    pub if_vcenter: Option<bool>,
    /// Thin border on all sides.
    pub if_border: Option<bool>,
    /// Border color for all sides (`#RRGGBB`).
    pub border_color: Option<String>,
    /// Number format code.
    pub num_format: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            if_vcenter: other.if_vcenter.or(self.if_vcenter),
            if_border: other.if_border.or(self.if_border),
            border_color: other
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellSpecification

/// Normalized cell value during the write pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Blank cell (still carries a format, e.g. grid borders).
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
    /// Live formula with an optional cached result shown before recalculation.
    Formula {
        /// Formula text, with or without the leading `=`.
        formula: String,
        /// Cached display value.
        result: Option<String>,
    },
}

impl EnumCellValue {
    /// Text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Formula cell with a cached result.
    pub fn formula(formula: impl Into<String>, result: impl Into<String>) -> Self {
        Self::Formula {
            formula: formula.into(),
            result: Some(result.into()),
        }
    }

    /// Formula text if this is a formula cell.
    pub fn as_formula(&self) -> Option<&str> {
        match self {
            Self::Formula { formula, .. } => Some(formula),
            _ => None,
        }
    }
}

impl From<&str> for EnumCellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumCellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for EnumCellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for EnumCellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::None, Self::Number)
    }
}

/// One positioned cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCell {
    /// Cell content.
    pub value: EnumCellValue,
    /// Named format preset.
    pub fmt_key: EnumFmtKey,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetLayoutSpecification

/// In-memory cell grid for one worksheet, addressed by zero-based `(row, col)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecSheetLayout {
    /// Requested sheet name (sanitized at write time).
    pub sheet_name: String,
    /// Cells keyed by `(row, col)`; ordered so writes are deterministic.
    pub cells: BTreeMap<(usize, usize), SpecCell>,
    /// Column widths in character units.
    pub widths_by_col: BTreeMap<usize, f64>,
}

impl SpecSheetLayout {
    /// Create an empty layout.
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            ..Default::default()
        }
    }

    /// Place (or replace) one cell.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<EnumCellValue>,
        fmt_key: EnumFmtKey,
    ) {
        self.cells.insert(
            (row, col),
            SpecCell {
                value: value.into(),
                fmt_key,
            },
        );
    }

    /// Place (or replace) one cell addressed in A1 notation.
    pub fn set_cell_a1(
        &mut self,
        cell_ref: &str,
        value: impl Into<EnumCellValue>,
        fmt_key: EnumFmtKey,
    ) -> Result<(), XlsxWriteError> {
        let (row, col) = parse_cell_ref(cell_ref)?;
        self.set_cell(row, col, value, fmt_key);
        Ok(())
    }

    /// Look up one cell addressed in A1 notation.
    pub fn get_cell_a1(&self, cell_ref: &str) -> Option<&SpecCell> {
        let (row, col) = parse_cell_ref(cell_ref).ok()?;
        self.cells.get(&(row, col))
    }

    /// Fill every unset cell of an inclusive rectangle with a formatted blank.
    ///
    /// Cells already placed keep their own value and format.
    pub fn fill_blank_range(
        &mut self,
        (row_first, col_first): (usize, usize),
        (row_last, col_last): (usize, usize),
        fmt_key: EnumFmtKey,
    ) {
        for row in row_first..=row_last {
            for col in col_first..=col_last {
                self.cells.entry((row, col)).or_insert(SpecCell {
                    value: EnumCellValue::None,
                    fmt_key,
                });
            }
        }
    }

    /// Set column widths starting at column `col_first`.
    pub fn set_column_widths(&mut self, col_first: usize, widths: &[f64]) {
        for (n_offset, width) in widths.iter().enumerate() {
            self.widths_by_col.insert(col_first + n_offset, *width);
        }
    }

    /// Number of formula cells in the layout.
    pub fn count_formulas(&self) -> usize {
        self.cells
            .values()
            .filter(|cell| matches!(cell.value, EnumCellValue::Formula { .. }))
            .count()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Writer-wide options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxWriteOptions {
    /// Document creation date `(year, month, day)` stored in workbook properties.
    pub doc_creation_date: (u16, u8, u8),
    /// Base patch merged into every named format.
    pub base_format_patch: SpecCellFormat,
}

impl Default for SpecXlsxWriteOptions {
    fn default() -> Self {
        Self {
            doc_creation_date: TUP_DOC_CREATION_DATE,
            base_format_patch: SpecCellFormat::default(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportAndErrors

/// Per-sheet write record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetReport {
    /// Actual unique sheet name in workbook.
    pub sheet_name: String,
    /// Number of cells written.
    pub cnt_cells: usize,
    /// Number of formula cells written.
    pub cnt_formulas: usize,
}

/// Per-workbook write report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Sheets in write order.
    pub sheets: Vec<SpecSheetReport>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

/// Errors raised while building or writing a workbook.
#[derive(Debug, Error)]
pub enum XlsxWriteError {
    /// Underlying `rust_xlsxwriter` failure (including file I/O on save).
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),
    /// Malformed A1 cell reference.
    #[error("invalid cell reference: {0:?}")]
    InvalidCellRef(String),
    /// Row or column past the Excel grid.
    #[error("{axis} index overflow: {value}")]
    IndexOverflow {
        /// `"row"` or `"column"`.
        axis: &'static str,
        /// Offending zero-based index.
        value: usize,
    },
    /// Missing named format preset.
    #[error("format preset not registered: {0:?}")]
    MissingFormat(EnumFmtKey),
    /// Write attempted after the workbook was saved.
    #[error("cannot write after close()")]
    Closed,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_cell_a1_and_get_cell_a1_share_coordinates() {
        let mut layout = SpecSheetLayout::new("Meeting");
        layout
            .set_cell_a1("F26", EnumCellValue::formula("COUNTA(A16:A25)", "0"), EnumFmtKey::Grid)
            .expect("valid ref");

        let cell = layout.cells.get(&(25, 5)).expect("cell at F26");
        assert_eq!(cell.value.as_formula(), Some("COUNTA(A16:A25)"));
        assert_eq!(layout.get_cell_a1("F26"), Some(cell));
        assert_eq!(layout.count_formulas(), 1);
    }

    #[test]
    fn fill_blank_range_keeps_existing_cells() {
        let mut layout = SpecSheetLayout::new("Grid");
        layout.set_cell(0, 0, "Name", EnumFmtKey::GridHeader);
        layout.fill_blank_range((0, 0), (1, 1), EnumFmtKey::Grid);

        assert_eq!(layout.cells.len(), 4);
        assert_eq!(layout.cells[&(0, 0)].fmt_key, EnumFmtKey::GridHeader);
        assert_eq!(layout.cells[&(1, 1)].value, EnumCellValue::None);
        assert_eq!(layout.cells[&(1, 1)].fmt_key, EnumFmtKey::Grid);
    }

    #[test]
    fn merge_prefers_right_side_values() {
        let base = SpecCellFormat {
            bold: Some(false),
            font_size: Some(11),
            ..Default::default()
        };
        let merged = base.with_(SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        });
        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.font_size, Some(11));
    }

    #[test]
    fn optional_number_maps_to_blank() {
        assert_eq!(EnumCellValue::from(None::<f64>), EnumCellValue::None);
        assert_eq!(EnumCellValue::from(Some(1.5)), EnumCellValue::Number(1.5));
    }
}
