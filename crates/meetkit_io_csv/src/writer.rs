//! Template to DataFrame conversion and CSV output.

use std::path::Path;

use polars::prelude::{Column, CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use crate::spec::{CsvWriteError, SpecTableTemplate};

/// Build a string DataFrame from `template`; blank placeholders become nulls.
pub fn derive_dataframe_from_template(
    template: &SpecTableTemplate,
) -> Result<DataFrame, CsvWriteError> {
    let n_height = template.height();
    for col in &template.columns {
        if col.values.len() != n_height {
            return Err(CsvWriteError::RaggedTemplate {
                template: template.name.clone(),
                column: col.name.clone(),
                expected: n_height,
                found: col.values.len(),
            });
        }
    }

    let l_cols: Vec<Column> = template
        .columns
        .iter()
        .map(|col| Column::new(col.name.as_str().into(), col.values.clone()))
        .collect();
    Ok(DataFrame::new(l_cols)?)
}

/// Encode `template` as CSV text: header row, `,` separator, nulls as empty fields.
pub fn serialize_table_template(template: &SpecTableTemplate) -> Result<String, CsvWriteError> {
    let mut df = derive_dataframe_from_template(template)?;
    let mut v_buf: Vec<u8> = Vec::new();
    CsvWriter::new(&mut v_buf)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df)?;
    Ok(String::from_utf8_lossy(&v_buf).into_owned())
}

/// Write `template` as CSV to `path`, replacing any existing file.
pub fn write_table_template(
    path: &Path,
    template: &SpecTableTemplate,
) -> Result<(), CsvWriteError> {
    let c_text = serialize_table_template(template)?;
    std::fs::write(path, c_text.as_bytes()).map_err(|source| CsvWriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        template = %template.name,
        path = %path.display(),
        rows = template.height(),
        cols = template.columns.len(),
        "template written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SpecTemplateColumn;

    fn create_template() -> SpecTableTemplate {
        SpecTableTemplate {
            name: "roster".to_string(),
            file_name: "roster.csv".to_string(),
            columns: vec![
                SpecTemplateColumn::blank("email", 2),
                SpecTemplateColumn::repeat("workdays", "Mon-Fri", 2),
                SpecTemplateColumn::per_row("grade_band", &["P5", "G7"]),
            ],
        }
    }

    #[test]
    fn serialize_writes_header_and_blank_fields() {
        let c_text = serialize_table_template(&create_template()).expect("csv");
        assert_eq!(
            c_text,
            "email,workdays,grade_band\n,Mon-Fri,P5\n,Mon-Fri,G7\n"
        );
    }

    #[test]
    fn dataframe_shape_matches_template() {
        let df = derive_dataframe_from_template(&create_template()).expect("df");
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn ragged_template_is_rejected() {
        let mut template = create_template();
        template.columns[1] = SpecTemplateColumn::repeat("workdays", "Mon-Fri", 3);

        let err = derive_dataframe_from_template(&template).expect_err("ragged");
        assert!(matches!(
            err,
            CsvWriteError::RaggedTemplate {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn write_creates_file_with_serialized_text() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("roster.csv");
        let template = create_template();

        write_table_template(&path, &template).expect("write");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            serialize_table_template(&template).expect("csv")
        );
    }
}
