//! `VCALENDAR` serializer on top of the `icalendar` builder.

use std::path::Path;

use icalendar::{Calendar, Component, Event, EventLike, Property};
use tracing::debug;

use crate::spec::{IcsWriteError, SpecCalendar, SpecCalendarEvent};

/// Build the `icalendar` event for `event`.
///
/// `UID` and `DTSTAMP` are always set, so the builder never falls back to a random
/// identifier or the wall clock.
pub fn derive_ical_event(event: &SpecCalendarEvent) -> Event {
    let mut ical_event = Event::new();
    ical_event
        .uid(&event.uid)
        .timestamp(event.dt_stamp)
        .starts(event.dt_start)
        .ends(event.dt_end)
        .summary(&event.summary);
    if let Some(location) = &event.location {
        ical_event.location(location);
    }
    for attendee in &event.attendees {
        ical_event.append_multi_property(Property::new("ATTENDEE", derive_cal_address(attendee)));
    }
    ical_event.done()
}

/// Build the `icalendar` calendar holding every event of `calendar`.
pub fn derive_ical_calendar(calendar: &SpecCalendar) -> Calendar {
    let mut ical_calendar = Calendar::empty();
    ical_calendar
        .append_property(Property::new("VERSION", "2.0"))
        .append_property(Property::new("PRODID", calendar.prod_id.as_str()))
        .append_property(Property::new("CALSCALE", "GREGORIAN"));
    for event in &calendar.events {
        ical_calendar.push(derive_ical_event(event));
    }
    ical_calendar.done()
}

/// Serialize a calendar into RFC 5545 text with CRLF line endings.
pub fn serialize_calendar(calendar: &SpecCalendar) -> String {
    derive_ical_calendar(calendar).to_string()
}

/// Serialize and write `calendar` to `path`, replacing any existing file.
pub fn write_calendar(path: &Path, calendar: &SpecCalendar) -> Result<(), IcsWriteError> {
    let c_text = serialize_calendar(calendar);
    std::fs::write(path, c_text.as_bytes()).map_err(|source| IcsWriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        events = calendar.events.len(),
        bytes = c_text.len(),
        "calendar written"
    );
    Ok(())
}

fn derive_cal_address(email: &str) -> String {
    if email.to_ascii_lowercase().starts_with("mailto:") {
        email.to_string()
    } else {
        format!("mailto:{email}")
    }
}
