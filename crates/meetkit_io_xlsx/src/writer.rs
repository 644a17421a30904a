//! XLSX writer kernel that turns sheet layouts into workbook output.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Formula, Workbook,
    Worksheet,
};
use tracing::debug;

use crate::conf::{EnumFmtKey, N_LEN_EXCEL_SHEET_NAME_MAX};
use crate::spec::{
    EnumCellValue, SpecCellFormat, SpecSheetLayout, SpecSheetReport, SpecXlsxReport,
    SpecXlsxWriteOptions, XlsxWriteError,
};
use crate::util::{create_sheet_identifier, sanitize_sheet_name, validate_cell_position};

/// Stateful workbook writer.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    dict_fmt: BTreeMap<EnumFmtKey, Format>,
    set_sheet_names_existing: BTreeSet<String>,
    report: SpecXlsxReport,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and format/options presets.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(
        path_file_out: PathBuf,
        dict_fmt_spec: BTreeMap<EnumFmtKey, SpecCellFormat>,
        write_options: SpecXlsxWriteOptions,
    ) -> Result<Self, XlsxWriteError> {
        let mut workbook = Workbook::new();

        let (n_year, n_month, n_day) = write_options.doc_creation_date;
        let dt_creation = ExcelDateTime::from_ymd(n_year, n_month, n_day)?;
        workbook.set_properties(&DocProperties::new().set_creation_datetime(&dt_creation));

        let dict_fmt = dict_fmt_spec
            .iter()
            .map(|(key, spec)| {
                (
                    *key,
                    derive_rust_xlsx_format(&spec.merge(&write_options.base_format_patch)),
                )
            })
            .collect();

        Ok(Self {
            path_file_out,
            workbook,
            dict_fmt,
            set_sheet_names_existing: BTreeSet::new(),
            report: SpecXlsxReport::default(),
            if_closed: false,
        })
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return immutable snapshot of the write report.
    pub fn report(&self) -> SpecXlsxReport {
        self.report.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), XlsxWriteError> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook.save(&self.path_file_out)?;
        self.if_closed = true;
        Ok(())
    }

    /// Append one worksheet built from `layout`.
    pub fn write_sheet(&mut self, layout: &SpecSheetLayout) -> Result<(), XlsxWriteError> {
        if self.if_closed {
            return Err(XlsxWriteError::Closed);
        }

        let c_sheet_name_requested = sanitize_sheet_name(&layout.sheet_name, "_");
        if c_sheet_name_requested != layout.sheet_name {
            self.report.warn(format!(
                "Sheet name {:?} sanitized to {c_sheet_name_requested:?}.",
                layout.sheet_name
            ));
        }
        let sheet_name_unique = self.derive_unique_sheet_name(&c_sheet_name_requested);

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet_name_unique)?;
        worksheet.set_formula_result_default("");

        for ((n_row, n_col), cell) in &layout.cells {
            validate_cell_position(*n_row, *n_col)?;
            let format = self
                .dict_fmt
                .get(&cell.fmt_key)
                .ok_or(XlsxWriteError::MissingFormat(cell.fmt_key))?;
            write_cell_with_format(worksheet, *n_row, *n_col, &cell.value, format)?;
        }

        for (n_col, width) in &layout.widths_by_col {
            worksheet.set_column_width(cast_col_num(*n_col)?, *width)?;
        }

        let n_formulas = layout.count_formulas();
        debug!(
            sheet = %sheet_name_unique,
            cells = layout.cells.len(),
            formulas = n_formulas,
            "worksheet written"
        );
        self.report.sheets.push(SpecSheetReport {
            sheet_name: sheet_name_unique,
            cnt_cells: layout.cells.len(),
            cnt_formulas: n_formulas,
        });
        Ok(())
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate = create_sheet_identifier(&base_name, n_idx);
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
) -> Result<(), XlsxWriteError> {
    let n_row = cast_row_num(row_idx)?;
    let n_col = cast_col_num(col_idx)?;
    match value {
        EnumCellValue::None => {
            worksheet.write_blank(n_row, n_col, format)?;
        }
        EnumCellValue::String(val) => {
            worksheet.write_string_with_format(n_row, n_col, val, format)?;
        }
        EnumCellValue::Number(val) => {
            worksheet.write_number_with_format(n_row, n_col, *val, format)?;
        }
        EnumCellValue::Formula { formula, result } => {
            let mut formula_cell = Formula::new(formula.as_str());
            if let Some(val) = result {
                formula_cell = formula_cell.set_result(val.as_str());
            }
            worksheet.write_formula_with_format(n_row, n_col, formula_cell, format)?;
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if spec.if_vcenter.unwrap_or(false) {
        format = format.set_align(FormatAlign::VerticalCenter);
    }
    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.clone());
    }

    if spec.if_border.unwrap_or(false) {
        format = format.set_border(FormatBorder::Thin);
    }
    if let Some(val) = &spec.border_color {
        format = format.set_border_color(val.as_str());
    }

    format
}

fn cast_row_num(value: usize) -> Result<u32, XlsxWriteError> {
    u32::try_from(value).map_err(|_| XlsxWriteError::IndexOverflow {
        axis: "row",
        value,
    })
}

fn cast_col_num(value: usize) -> Result<u16, XlsxWriteError> {
    u16::try_from(value).map_err(|_| XlsxWriteError::IndexOverflow {
        axis: "column",
        value,
    })
}
