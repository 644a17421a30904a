//! Stateless helper utilities used by the XLSX writer kernel.

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::XlsxWriteError;

////////////////////////////////////////////////////////////////////////////////
// #region CellReferences

/// Convert zero-based column index to letters (`0 -> A`, `26 -> AA`).
pub fn derive_column_letters(col_idx: usize) -> String {
    let mut l_chars = Vec::new();
    let mut n_rest = col_idx + 1;
    while n_rest > 0 {
        let n_rem = (n_rest - 1) % 26;
        l_chars.push((b'A' + n_rem as u8) as char);
        n_rest = (n_rest - 1) / 26;
    }
    l_chars.iter().rev().collect()
}

/// Build an A1 reference from zero-based indices.
pub fn derive_cell_ref(row_idx: usize, col_idx: usize) -> String {
    format!("{}{}", derive_column_letters(col_idx), row_idx + 1)
}

/// Parse an A1 reference (optionally with `$` anchors) into zero-based `(row, col)`.
pub fn parse_cell_ref(cell_ref: &str) -> Result<(usize, usize), XlsxWriteError> {
    let err = || XlsxWriteError::InvalidCellRef(cell_ref.to_string());

    let c_ref = cell_ref.trim().replace('$', "");
    let n_split = c_ref
        .find(|chr: char| chr.is_ascii_digit())
        .ok_or_else(err)?;
    let (c_letters, c_digits) = c_ref.split_at(n_split);
    if c_letters.is_empty() || !c_letters.chars().all(|chr| chr.is_ascii_alphabetic()) {
        return Err(err());
    }

    let mut n_col = 0usize;
    for chr in c_letters.chars() {
        let n_digit = (chr.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n_col = n_col
            .checked_mul(26)
            .and_then(|val| val.checked_add(n_digit))
            .ok_or_else(err)?;
    }
    let n_row: usize = c_digits.parse().map_err(|_| err())?;
    if n_row == 0 {
        return Err(err());
    }

    validate_cell_position(n_row - 1, n_col - 1)?;
    Ok((n_row - 1, n_col - 1))
}

/// Reject positions outside the Excel grid.
pub fn validate_cell_position(row_idx: usize, col_idx: usize) -> Result<(), XlsxWriteError> {
    if row_idx >= N_NROWS_EXCEL_MAX {
        return Err(XlsxWriteError::IndexOverflow {
            axis: "row",
            value: row_idx,
        });
    }
    if col_idx >= N_NCOLS_EXCEL_MAX {
        return Err(XlsxWriteError::IndexOverflow {
            axis: "column",
            value: col_idx,
        });
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Create suffixed sheet name (`base__2`, `base__3`, ...), respecting length cap.
pub fn create_sheet_identifier(base_name: &str, part_idx: usize) -> String {
    let c_sheet_name_suffix = format!("__{part_idx}");
    let n_len_base_name_max = N_LEN_EXCEL_SHEET_NAME_MAX.saturating_sub(c_sheet_name_suffix.len());

    let c_sheet_name_base: String = base_name
        .chars()
        .take(usize::max(1, n_len_base_name_max))
        .collect();

    format!("{c_sheet_name_base}{c_sheet_name_suffix}")
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters_roll_over() {
        assert_eq!(derive_column_letters(0), "A");
        assert_eq!(derive_column_letters(5), "F");
        assert_eq!(derive_column_letters(25), "Z");
        assert_eq!(derive_column_letters(26), "AA");
        assert_eq!(derive_column_letters(701), "ZZ");
        assert_eq!(derive_column_letters(702), "AAA");
    }

    #[test]
    fn test_parse_cell_ref_accepts_anchors() {
        assert_eq!(parse_cell_ref("A1").unwrap(), (0, 0));
        assert_eq!(parse_cell_ref("$B$7").unwrap(), (6, 1));
        assert_eq!(parse_cell_ref("f26").unwrap(), (25, 5));
        assert_eq!(parse_cell_ref("AA10").unwrap(), (9, 26));
        assert_eq!(derive_cell_ref(24, 5), "F25");
    }

    #[test]
    fn test_parse_cell_ref_rejects_malformed() {
        for c_ref in ["", "7", "B", "B0", "1B", "B-1", "B1C"] {
            assert!(
                matches!(parse_cell_ref(c_ref), Err(XlsxWriteError::InvalidCellRef(_))),
                "{c_ref:?} should be rejected"
            );
        }
        assert!(matches!(
            parse_cell_ref("A1048577"),
            Err(XlsxWriteError::IndexOverflow { axis: "row", .. })
        ));
    }

    #[test]
    fn test_parse_cell_ref_long_column_letters() {
        assert!(matches!(
            parse_cell_ref("ZZZZZ1"),
            Err(XlsxWriteError::IndexOverflow { axis: "column", .. })
        ));
        let c_ref = format!("{}1", "A".repeat(30));
        assert!(matches!(
            parse_cell_ref(&c_ref),
            Err(XlsxWriteError::InvalidCellRef(_))
        ));
    }

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("Plan/2025:[Q1]", "_"), "Plan_2025__Q1_");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");
        assert_eq!(
            sanitize_sheet_name(&"x".repeat(40), "_").len(),
            N_LEN_EXCEL_SHEET_NAME_MAX
        );
    }

    #[test]
    fn test_create_sheet_identifier_respects_length_cap() {
        assert_eq!(create_sheet_identifier("Meeting", 2), "Meeting__2");
        let c_name = create_sheet_identifier(&"y".repeat(40), 12);
        assert_eq!(c_name.len(), N_LEN_EXCEL_SHEET_NAME_MAX);
        assert!(c_name.ends_with("__12"));
    }
}
