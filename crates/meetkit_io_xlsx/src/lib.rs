//! `meetkit_io_xlsx` v1:
//! Cell-addressed XLSX writer kernel.
//!
//! Modules:
//! - `conf`   : constants and default presets
//! - `spec`   : cell/layout/options models and errors
//! - `util`   : pure helper functions
//! - `writer` : `rust_xlsxwriter` writer kernel
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_COLOR_GRID_BORDER, EnumFmtKey, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL, derive_default_xlsx_formats,
    derive_default_xlsx_write_options,
};
pub use spec::{
    EnumCellValue, SpecCell, SpecCellFormat, SpecSheetLayout, SpecSheetReport, SpecXlsxReport,
    SpecXlsxWriteOptions, XlsxWriteError,
};
pub use util::{derive_cell_ref, derive_column_letters, parse_cell_ref, sanitize_sheet_name};
pub use writer::XlsxWriter;
