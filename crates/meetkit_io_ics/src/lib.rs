//! `meetkit_io_ics` v1:
//! RFC 5545 calendar kernel.
//!
//! Modules:
//! - `conf`   : protocol constants
//! - `spec`   : calendar/event models and errors
//! - `util`   : UID and time resolution helpers
//! - `writer` : `icalendar` builder, serializer and file writer
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::C_PROD_ID_DEFAULT;
pub use spec::{IcsWriteError, SpecCalendar, SpecCalendarEvent};
pub use util::{derive_event_uid, format_utc_datetime, resolve_local_datetime};
pub use writer::{derive_ical_calendar, derive_ical_event, serialize_calendar, write_calendar};
