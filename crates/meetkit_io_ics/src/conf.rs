//! Calendar constants.

/// Product identifier written to `PRODID`.
pub const C_PROD_ID_DEFAULT: &str = "-//meetkit//Meeting Planner//EN";
/// Domain suffix of generated `UID` values.
pub const C_UID_DOMAIN: &str = "meetkit.local";
/// `chrono` pattern for UTC date-time values.
pub const C_FORMAT_UTC_DATETIME: &str = "%Y%m%dT%H%M%SZ";
