//! Calendar event types.
//!
//! An `Event` is the unit the calendar works with. Its `date` is an
//! `EventTime`, which may or may not carry a time of day; the calendar only
//! compares the day it falls on, once viewed in the display timezone.

use std::fmt;

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{KinderError, KinderResult};

/// A calendar entry (announcement day, holiday, parent meeting, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: EventTime,
    pub description: Option<String>,
}

impl Event {
    /// Create an event with a freshly generated id.
    pub fn new(title: &str, date: EventTime, description: Option<String>) -> KinderResult<Self> {
        Self::with_id(uuid::Uuid::new_v4().to_string(), title, date, description)
    }

    /// Create an event with a caller-supplied id (e.g. when loading from the store).
    pub fn with_id(
        id: impl Into<String>,
        title: &str,
        date: EventTime,
        description: Option<String>,
    ) -> KinderResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(KinderError::EmptyTitle);
        }

        Ok(Event {
            id: id.into(),
            title: title.to_string(),
            date,
            description,
        })
    }

    /// The calendar day this event falls on, seen from `tz`.
    pub fn day_in<Z: TimeZone>(&self, tz: &Z) -> NaiveDate {
        self.date.date_in(tz)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventTime {
    /// All-day
    Date(NaiveDate),
    DateTimeUtc(DateTime<Utc>),
    /// Wall-clock time in whatever timezone the calendar is displayed in
    DateTimeFloating(NaiveDateTime),
    /// Wall-clock time in a named zone
    DateTimeZoned { datetime: NaiveDateTime, tz: Tz },
}

impl EventTime {
    /// Parse user or store input.
    ///
    /// Accepts `YYYY-MM-DD` (all-day), `YYYY-MM-DDTHH:MM[:SS]` or
    /// `YYYY-MM-DD HH:MM[:SS]` (floating) and RFC 3339 (UTC instant).
    pub fn parse(input: &str) -> KinderResult<Self> {
        let s = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(EventTime::Date(date));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(EventTime::DateTimeUtc(dt.with_timezone(&Utc)));
        }

        const FLOATING_FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%d %H:%M",
        ];
        FLOATING_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(EventTime::DateTimeFloating)
            .ok_or_else(|| {
                KinderError::InvalidDate(format!(
                    "'{}'. Expected YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339",
                    input
                ))
            })
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::Date(_))
    }

    /// Wall-clock time of this event as seen from `tz`. All-day events sit at midnight.
    pub fn local_datetime_in<Z: TimeZone>(&self, tz: &Z) -> NaiveDateTime {
        match self {
            EventTime::Date(d) => d.and_time(NaiveTime::MIN),
            EventTime::DateTimeFloating(dt) => *dt,
            EventTime::DateTimeUtc(dt) => dt.with_timezone(tz).naive_local(),
            EventTime::DateTimeZoned { datetime, tz: zone } => {
                resolve_local(zone, datetime).with_timezone(tz).naive_local()
            }
        }
    }

    /// Calendar day of this event as seen from `tz`.
    pub fn date_in<Z: TimeZone>(&self, tz: &Z) -> NaiveDate {
        match self {
            EventTime::Date(d) => *d,
            EventTime::DateTimeFloating(dt) => dt.date(),
            _ => self.local_datetime_in(tz).date(),
        }
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventTime::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventTime::DateTimeUtc(dt) => write!(f, "{} UTC", dt.format("%Y-%m-%d %H:%M")),
            EventTime::DateTimeFloating(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
            EventTime::DateTimeZoned { datetime, tz } => {
                write!(f, "{} ({})", datetime.format("%Y-%m-%d %H:%M"), tz.name())
            }
        }
    }
}

/// Pin a wall-clock time to `zone`.
///
/// Ambiguous times (DST fall-back) take the earlier instant; times inside a
/// DST gap are pushed forward by an hour.
fn resolve_local(zone: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    match zone.from_local_datetime(naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => zone
            .from_local_datetime(&(*naive + TimeDelta::hours(1)))
            .earliest()
            .unwrap_or_else(|| zone.from_utc_datetime(naive)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_only_is_all_day() {
        let parsed = EventTime::parse("2025-05-17").unwrap();
        assert_eq!(parsed, EventTime::Date(ymd(2025, 5, 17)));
        assert!(parsed.is_all_day());
    }

    #[test]
    fn test_parse_floating_and_rfc3339() {
        let floating = EventTime::parse("2025-05-17T09:30").unwrap();
        assert_eq!(
            floating,
            EventTime::DateTimeFloating(ymd(2025, 5, 17).and_hms_opt(9, 30, 0).unwrap())
        );

        let spaced = EventTime::parse("2025-05-17 09:30:15").unwrap();
        assert!(matches!(spaced, EventTime::DateTimeFloating(_)));

        let utc = EventTime::parse("2025-05-17T09:30:00+02:00").unwrap();
        assert_eq!(
            utc,
            EventTime::DateTimeUtc(Utc.with_ymd_and_hms(2025, 5, 17, 7, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "tomorrow", "2025-13-01", "2025-02-30", "17/05/2025"] {
            let err = EventTime::parse(input).unwrap_err();
            assert!(
                matches!(err, KinderError::InvalidDate(_)),
                "expected InvalidDate for {:?}, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_date_in_converts_instants_to_display_zone() {
        // 23:30 UTC on the 17th is still the 17th in UTC but the 18th in UTC+2
        let late = EventTime::DateTimeUtc(Utc.with_ymd_and_hms(2025, 5, 17, 23, 30, 0).unwrap());
        assert_eq!(late.date_in(&Utc), ymd(2025, 5, 17));
        assert_eq!(late.date_in(&FixedOffset::east_opt(2 * 3600).unwrap()), ymd(2025, 5, 18));
        assert_eq!(late.date_in(&FixedOffset::west_opt(5 * 3600).unwrap()), ymd(2025, 5, 17));
    }

    #[test]
    fn test_floating_and_all_day_ignore_display_zone() {
        let tz = FixedOffset::east_opt(14 * 3600).unwrap();
        let floating = EventTime::DateTimeFloating(ymd(2025, 5, 17).and_hms_opt(23, 0, 0).unwrap());
        assert_eq!(floating.date_in(&tz), ymd(2025, 5, 17));
        assert_eq!(EventTime::Date(ymd(2025, 5, 17)).date_in(&tz), ymd(2025, 5, 17));
    }

    #[test]
    fn test_zoned_time_converts_between_zones() {
        let zoned = EventTime::DateTimeZoned {
            datetime: ymd(2025, 5, 17).and_hms_opt(20, 0, 0).unwrap(),
            tz: chrono_tz::America::New_York,
        };
        // 20:00 EDT is 02:00 the next day in Madrid (CEST)
        assert_eq!(zoned.date_in(&chrono_tz::Europe::Madrid), ymd(2025, 5, 18));
        assert_eq!(zoned.date_in(&chrono_tz::America::New_York), ymd(2025, 5, 17));
    }

    #[test]
    fn test_zoned_time_in_dst_gap_moves_forward() {
        // 02:30 does not exist in New York on 2025-03-09
        let gap = ymd(2025, 3, 9).and_hms_opt(2, 30, 0).unwrap();
        let resolved = resolve_local(&chrono_tz::America::New_York, &gap);
        assert_eq!(resolved.naive_local(), ymd(2025, 3, 9).and_hms_opt(3, 30, 0).unwrap());
    }

    #[test]
    fn test_event_new_rejects_blank_title() {
        let date = EventTime::Date(ymd(2025, 5, 17));
        assert!(matches!(
            Event::new("   ", date.clone(), None),
            Err(KinderError::EmptyTitle)
        ));

        let event = Event::new("  Día del Niño ", date, None).unwrap();
        assert_eq!(event.title, "Día del Niño");
        assert!(uuid::Uuid::parse_str(&event.id).is_ok());
    }

    #[test]
    fn test_display() {
        let date = EventTime::Date(ymd(2025, 5, 17));
        assert_eq!(date.to_string(), "2025-05-17");

        let zoned = EventTime::DateTimeZoned {
            datetime: ymd(2025, 5, 17).and_hms_opt(9, 0, 0).unwrap(),
            tz: chrono_tz::Europe::Madrid,
        };
        assert_eq!(zoned.to_string(), "2025-05-17 09:00 (Europe/Madrid)");
    }
}
