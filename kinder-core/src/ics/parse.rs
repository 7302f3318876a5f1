//! ICS file parsing using the icalendar crate's parser.

use chrono_tz::Tz;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{read_calendar, unfold},
};

use crate::error::{KinderError, KinderResult};
use crate::event::{Event, EventTime};

const UNTITLED: &str = "(No title)";

/// Parse ICS content into an Event
pub fn parse_event(content: &str) -> KinderResult<Event> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| KinderError::IcsParse(e.to_string()))?;
    let vevent = calendar
        .components
        .iter()
        .find(|c| c.name == "VEVENT")
        .ok_or_else(|| KinderError::IcsParse("no VEVENT component".into()))?;

    let uid = vevent
        .find_prop("UID")
        .map(|p| p.val.to_string())
        .ok_or_else(|| KinderError::IcsParse("missing UID".into()))?;

    let title = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    let dtstart = vevent
        .find_prop("DTSTART")
        .ok_or_else(|| KinderError::IcsParse(format!("event {} has no DTSTART", uid)))?;
    let start = DatePerhapsTime::try_from(dtstart).map_err(|_| {
        KinderError::IcsParse(format!(
            "event {} has an unreadable DTSTART '{}'",
            uid,
            dtstart.val.as_ref()
        ))
    })?;
    let date = to_event_time(start)?;

    let description = vevent.find_prop("DESCRIPTION").map(|p| p.val.to_string());

    Event::with_id(uid, &title, date, description)
}

/// Convert icalendar's DatePerhapsTime to our EventTime, keeping the zone
fn to_event_time(dpt: DatePerhapsTime) -> KinderResult<EventTime> {
    let time = match dpt {
        DatePerhapsTime::Date(d) => EventTime::Date(d),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => EventTime::DateTimeUtc(dt),
            CalendarDateTime::Floating(naive) => EventTime::DateTimeFloating(naive),
            CalendarDateTime::WithTimezone { date_time, tzid } => {
                let tz = tzid
                    .parse::<Tz>()
                    .map_err(|_| KinderError::IcsParse(format!("unknown TZID '{}'", tzid)))?;
                EventTime::DateTimeZoned {
                    datetime: date_time,
                    tz,
                }
            }
        },
    };
    Ok(time)
}
