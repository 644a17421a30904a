//! Calendar invite derived from the Meeting sheet inputs.

use chrono::{TimeDelta, Utc};
use meetkit_io_ics::{SpecCalendar, SpecCalendarEvent, derive_event_uid, resolve_local_datetime};
use tracing::debug;

use crate::conf::{C_SUMMARY_FALLBACK, N_ATTENDEE_ROWS, TZ_MEETING};
use crate::spec::{PlannerError, SpecMeeting};

/// Build the single invite event for `meeting`.
///
/// Start is the local date and time in the meeting timezone; end adds the duration as
/// absolute time, so a DST switch during the meeting does not stretch it.
pub fn derive_calendar_event(meeting: &SpecMeeting) -> Result<SpecCalendarEvent, PlannerError> {
    let summary = if meeting.title.is_empty() {
        C_SUMMARY_FALLBACK.to_string()
    } else {
        meeting.title.clone()
    };

    let dt_start = resolve_local_datetime(TZ_MEETING, meeting.date, meeting.time_start)?
        .with_timezone(&Utc);
    let dt_end = dt_start + TimeDelta::minutes(i64::from(meeting.duration_min));

    let location = (!meeting.location.is_empty()).then(|| meeting.location.clone());
    let l_attendees: Vec<String> = meeting
        .attendees
        .iter()
        .take(N_ATTENDEE_ROWS)
        .filter(|row| !row.email.is_empty())
        .map(|row| row.email.clone())
        .collect();

    debug!(
        start = %dt_start,
        end = %dt_end,
        attendees = l_attendees.len(),
        "calendar event derived"
    );
    Ok(SpecCalendarEvent {
        uid: derive_event_uid(&dt_start, &summary),
        dt_stamp: dt_start,
        dt_start,
        dt_end,
        summary,
        location,
        attendees: l_attendees,
    })
}

/// Calendar holding the invite for `meeting`.
pub fn derive_meeting_calendar(meeting: &SpecMeeting) -> Result<SpecCalendar, PlannerError> {
    Ok(SpecCalendar::with_event(derive_calendar_event(meeting)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::derive_default_meeting;
    use crate::spec::SpecAttendee;
    use chrono::{NaiveDate, NaiveTime, TimeZone};

    fn create_attendee(name: &str, email: &str) -> SpecAttendee {
        SpecAttendee {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_meeting_starts_at_warsaw_nine() {
        let event = derive_calendar_event(&derive_default_meeting()).expect("event");

        assert_eq!(event.summary, "Meeting");
        assert_eq!(
            event.dt_start,
            Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
        );
        assert_eq!(event.dt_end, Utc.with_ymd_and_hms(2025, 1, 1, 8, 25, 0).unwrap());
        assert_eq!(event.dt_stamp, event.dt_start);
        assert_eq!(event.location.as_deref(), Some("Warsaw"));
        assert!(event.attendees.is_empty());
        assert_eq!(event.uid, "20250101T080000Z-meeting@meetkit.local");
    }

    #[test]
    fn duration_is_end_minus_start() {
        let mut meeting = derive_default_meeting();
        for n_minutes in [1u32, 25, 60, 95, 600] {
            meeting.duration_min = n_minutes;
            let event = derive_calendar_event(&meeting).expect("event");
            assert_eq!(event.duration(), TimeDelta::minutes(i64::from(n_minutes)));
        }
    }

    #[test]
    fn summer_meeting_uses_summer_offset() {
        let mut meeting = derive_default_meeting();
        meeting.date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        meeting.time_start = NaiveTime::from_hms_opt(14, 30, 0).unwrap();

        let event = derive_calendar_event(&meeting).expect("event");
        assert_eq!(
            event.dt_start,
            Utc.with_ymd_and_hms(2025, 7, 15, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn attendees_follow_row_order_without_dedup() {
        let mut meeting = derive_default_meeting();
        meeting.attendees = vec![
            create_attendee("B", "b@unhcr.org"),
            create_attendee("No mail", ""),
            create_attendee("A", " a@unhcr.org "),
            create_attendee("B again", "b@unhcr.org"),
            create_attendee("", "orphan@unhcr.org"),
        ];

        let event = derive_calendar_event(&meeting).expect("event");
        assert_eq!(
            event.attendees,
            [
                "b@unhcr.org",
                " a@unhcr.org ",
                "b@unhcr.org",
                "orphan@unhcr.org"
            ]
        );
    }

    #[test]
    fn title_and_empty_location() {
        let mut meeting = derive_default_meeting();
        meeting.title = "Budget review, Q1".to_string();
        meeting.location = String::new();

        let calendar = derive_meeting_calendar(&meeting).expect("calendar");
        let event = &calendar.events[0];
        assert_eq!(event.summary, "Budget review, Q1");
        assert_eq!(event.location, None);
        assert_eq!(event.uid, "20250101T080000Z-budget-review-q1@meetkit.local");
    }

    #[test]
    fn empty_title_falls_back_but_whitespace_title_is_kept() {
        let mut meeting = derive_default_meeting();
        meeting.title = String::new();
        assert_eq!(
            derive_calendar_event(&meeting).expect("event").summary,
            "Meeting"
        );

        meeting.title = "   ".to_string();
        assert_eq!(derive_calendar_event(&meeting).expect("event").summary, "   ");
    }

    #[test]
    fn whitespace_only_email_is_an_attendee() {
        let mut meeting = derive_default_meeting();
        meeting.attendees = vec![create_attendee("Blank", " ")];

        let event = derive_calendar_event(&meeting).expect("event");
        assert_eq!(event.attendees, [" "]);
    }
}
