//! Calendar models and top-level error types.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use thiserror::Error;

use crate::conf::C_PROD_ID_DEFAULT;

/// One `VEVENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecCalendarEvent {
    /// Globally unique identifier.
    pub uid: String,
    /// `DTSTAMP`; set by the caller so output stays reproducible.
    pub dt_stamp: DateTime<Utc>,
    /// Start instant.
    pub dt_start: DateTime<Utc>,
    /// End instant.
    pub dt_end: DateTime<Utc>,
    /// Event title.
    pub summary: String,
    /// Free-text location; omitted when `None`.
    pub location: Option<String>,
    /// Attendee e-mail addresses in invite order.
    pub attendees: Vec<String>,
}

impl SpecCalendarEvent {
    /// `dt_end - dt_start`.
    pub fn duration(&self) -> TimeDelta {
        self.dt_end - self.dt_start
    }
}

/// One `VCALENDAR` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecCalendar {
    /// `PRODID` value.
    pub prod_id: String,
    /// Contained events.
    pub events: Vec<SpecCalendarEvent>,
}

impl SpecCalendar {
    /// Calendar holding a single event.
    pub fn with_event(event: SpecCalendarEvent) -> Self {
        Self {
            prod_id: C_PROD_ID_DEFAULT.to_string(),
            events: vec![event],
        }
    }
}

/// Errors raised while building or writing a calendar.
#[derive(Debug, Error)]
pub enum IcsWriteError {
    /// Local wall time has no instant in the zone, even after gap adjustment.
    #[error("local time {local} cannot be resolved in {tz}")]
    UnresolvableLocalTime {
        /// Requested wall-clock time.
        local: NaiveDateTime,
        /// IANA zone name.
        tz: String,
    },
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
