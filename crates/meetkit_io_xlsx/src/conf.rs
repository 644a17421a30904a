//! XLSX constants and default preset factories.

use std::collections::BTreeMap;

use crate::spec::{SpecCellFormat, SpecXlsxWriteOptions};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Light gray used for grid borders.
pub const C_COLOR_GRID_BORDER: &str = "#DDDDDD";

/// Fixed document creation date `(year, month, day)`.
///
/// Pinned so repeated writes of the same layout produce identical bytes.
pub const TUP_DOC_CREATION_DATE: (u16, u8, u8) = (2025, 1, 1);

/// Canonical format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumFmtKey {
    /// Generic text cell format.
    Text,
    /// Bold label.
    Label,
    /// Large bold sheet title.
    Title,
    /// Bold header cell inside a bordered grid.
    GridHeader,
    /// Plain cell inside a bordered grid.
    Grid,
    /// Decimal number format.
    Decimal,
    /// Decimal number inside a bordered grid.
    GridDecimal,
}

/// Build default named format presets used by [`crate::writer::XlsxWriter`].
pub fn derive_default_xlsx_formats() -> BTreeMap<EnumFmtKey, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat {
        font_name: Some("Calibri".to_string()),
        font_size: Some(11),
        if_vcenter: Some(true),
        ..Default::default()
    };
    let cfg_grid_fmt_spec = cfg_base_fmt_spec.with_(SpecCellFormat {
        if_border: Some(true),
        border_color: Some(C_COLOR_GRID_BORDER.to_string()),
        ..Default::default()
    });

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(EnumFmtKey::Text, cfg_base_fmt_spec.clone());
    dict_fmt.insert(
        EnumFmtKey::Label,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Title,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(14),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::GridHeader,
        cfg_grid_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        }),
    );
    dict_fmt.insert(EnumFmtKey::Grid, cfg_grid_fmt_spec.clone());
    dict_fmt.insert(
        EnumFmtKey::Decimal,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            num_format: Some("0.00".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::GridDecimal,
        cfg_grid_fmt_spec.with_(SpecCellFormat {
            num_format: Some("0.00".to_string()),
            ..Default::default()
        }),
    );

    dict_fmt
}

/// Build default write options.
pub fn derive_default_xlsx_write_options() -> SpecXlsxWriteOptions {
    SpecXlsxWriteOptions::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formats_cover_every_key() {
        let dict_fmt = derive_default_xlsx_formats();
        for key in [
            EnumFmtKey::Text,
            EnumFmtKey::Label,
            EnumFmtKey::Title,
            EnumFmtKey::GridHeader,
            EnumFmtKey::Grid,
            EnumFmtKey::Decimal,
            EnumFmtKey::GridDecimal,
        ] {
            assert!(dict_fmt.contains_key(&key), "missing preset {key:?}");
        }
    }

    #[test]
    fn grid_header_inherits_grid_border_and_adds_bold() {
        let dict_fmt = derive_default_xlsx_formats();
        let fmt = &dict_fmt[&EnumFmtKey::GridHeader];
        assert_eq!(fmt.bold, Some(true));
        assert_eq!(fmt.if_border, Some(true));
        assert_eq!(fmt.border_color.as_deref(), Some(C_COLOR_GRID_BORDER));
        assert_eq!(dict_fmt[&EnumFmtKey::Title].font_size, Some(14));
    }
}
