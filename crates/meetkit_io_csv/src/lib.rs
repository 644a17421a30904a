//! `meetkit_io_csv` v1:
//! Tabular template kernel backed by Polars DataFrames.
//!
//! Modules:
//! - `spec`   : template models and errors
//! - `writer` : DataFrame conversion and CSV writer
pub mod spec;
pub mod writer;

pub use spec::{CsvWriteError, SpecTableTemplate, SpecTemplateColumn};
pub use writer::{derive_dataframe_from_template, serialize_table_template, write_table_template};
