//! Stateless helpers for identifiers and time resolution.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::conf::{C_FORMAT_UTC_DATETIME, C_UID_DOMAIN};
use crate::spec::IcsWriteError;

////////////////////////////////////////////////////////////////////////////////
// #region Identifiers

/// Render an instant as `YYYYMMDDTHHMMSSZ`.
pub fn format_utc_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(C_FORMAT_UTC_DATETIME).to_string()
}

/// Deterministic `UID` from start instant and a slug of the summary.
pub fn derive_event_uid(dt_start: &DateTime<Utc>, summary: &str) -> String {
    let mut c_slug = String::new();
    for chr in summary.trim().chars() {
        if chr.is_ascii_alphanumeric() {
            c_slug.push(chr.to_ascii_lowercase());
        } else if !c_slug.is_empty() && !c_slug.ends_with('-') {
            c_slug.push('-');
        }
    }
    let c_slug = c_slug.trim_end_matches('-');
    let c_slug = if c_slug.is_empty() { "event" } else { c_slug };

    format!(
        "{}-{c_slug}@{C_UID_DOMAIN}",
        format_utc_datetime(dt_start)
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TimeResolution

/// Resolve a wall-clock date and time in `tz` to an instant.
///
/// Ambiguous times (clocks going back) resolve to the earliest instant. Times inside
/// a spring-forward gap are shifted forward by one hour, i.e. read with the offset
/// in force before the transition.
pub fn resolve_local_datetime(
    tz: Tz,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<DateTime<Tz>, IcsWriteError> {
    let dt_naive = NaiveDateTime::new(date, time);
    if let Some(dt) = tz.from_local_datetime(&dt_naive).earliest() {
        return Ok(dt);
    }

    let dt_naive_shifted = dt_naive + TimeDelta::hours(1);
    if let Some(dt) = tz.from_local_datetime(&dt_naive_shifted).earliest() {
        warn!(
            local = %dt_naive,
            tz = %tz,
            resolved = %dt,
            "local time falls in a DST gap; using post-transition time"
        );
        return Ok(dt);
    }

    Err(IcsWriteError::UnresolvableLocalTime {
        local: dt_naive,
        tz: tz.name().to_string(),
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
