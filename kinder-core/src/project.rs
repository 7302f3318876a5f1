//! Attaching events to grid cells and computing the upcoming list.
//!
//! Two dates match when they fall on the same calendar day in the display
//! timezone `tz`. Instants (UTC or zoned) are converted into `tz` first;
//! all-day and floating events keep their own date.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::event::Event;
use crate::grid::CalendarCell;

/// Set each day cell's `events` to the events falling on that day.
///
/// Overwrites whatever the cells held before, so projecting twice gives the
/// same result as projecting once. Blank cells end up with no events.
pub fn project_events<Z: TimeZone>(
    mut cells: Vec<CalendarCell>,
    events: &[Event],
    tz: &Z,
) -> Vec<CalendarCell> {
    let by_day = group_by_day(events, tz);

    for cell in &mut cells {
        cell.events = cell
            .date
            .and_then(|date| by_day.get(&date))
            .map(|day_events| day_events.iter().map(|e| (*e).clone()).collect())
            .unwrap_or_default();
    }

    cells
}

/// Events on `date`, in input order.
pub fn events_on<Z: TimeZone>(date: NaiveDate, events: &[Event], tz: &Z) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.day_in(tz) == date)
        .cloned()
        .collect()
}

/// Events dated today or later, earliest day first.
///
/// "Today" is `now`'s date in its own timezone, and an event counts as soon
/// as its day is today regardless of time of day. Only the day is compared:
/// events on the same day keep their input order, whatever their times.
pub fn upcoming_events<Z: TimeZone>(events: &[Event], now: &DateTime<Z>) -> Vec<Event> {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut upcoming: Vec<(NaiveDate, &Event)> = events
        .iter()
        .map(|e| (e.day_in(&tz), e))
        .filter(|(day, _)| *day >= today)
        .collect();

    // stable: equal days keep input order
    upcoming.sort_by_key(|(day, _)| *day);

    upcoming.into_iter().map(|(_, e)| e.clone()).collect()
}

fn group_by_day<'a, Z: TimeZone>(
    events: &'a [Event],
    tz: &Z,
) -> BTreeMap<NaiveDate, Vec<&'a Event>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        by_day.entry(event.day_in(tz)).or_default().push(event);
    }
    by_day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventTime;
    use crate::grid::build_grid;
    use chrono::{FixedOffset, Utc};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_event(id: &str, date: EventTime) -> Event {
        Event::with_id(id, &format!("Event {}", id), date, None).unwrap()
    }

    fn all_day(id: &str, y: i32, m: u32, d: u32) -> Event {
        make_event(id, EventTime::Date(ymd(y, m, d)))
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_project_attaches_to_matching_day_only() {
        let events = vec![all_day("a", 2025, 5, 17)];
        let cells = project_events(build_grid(ymd(2025, 5, 1), ymd(2025, 5, 1)), &events, &Utc);

        for cell in &cells {
            if cell.date == Some(ymd(2025, 5, 17)) {
                assert_eq!(ids(&cell.events), vec!["a"]);
            } else {
                assert!(cell.events.is_empty(), "unexpected events on {:?}", cell.date);
            }
        }
    }

    #[test]
    fn test_project_preserves_input_order_within_day() {
        let events = vec![
            make_event(
                "late",
                EventTime::DateTimeFloating(ymd(2025, 5, 17).and_hms_opt(18, 0, 0).unwrap()),
            ),
            all_day("other-day", 2025, 5, 18),
            all_day("all-day", 2025, 5, 17),
        ];
        let cells = project_events(build_grid(ymd(2025, 5, 1), ymd(2025, 5, 1)), &events, &Utc);
        let day17 = cells.iter().find(|c| c.date == Some(ymd(2025, 5, 17))).unwrap();

        assert_eq!(ids(&day17.events), vec!["late", "all-day"]);
    }

    #[test]
    fn test_project_is_idempotent() {
        let events = vec![all_day("a", 2025, 5, 17), all_day("b", 2025, 5, 17)];
        let once = project_events(build_grid(ymd(2025, 5, 1), ymd(2025, 5, 1)), &events, &Utc);
        let twice = project_events(once.clone(), &events, &Utc);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_project_replaces_stale_events() {
        let old = vec![all_day("old", 2025, 5, 3)];
        let new = vec![all_day("new", 2025, 5, 4)];
        let grid = build_grid(ymd(2025, 5, 1), ymd(2025, 5, 1));

        let cells = project_events(project_events(grid, &old, &Utc), &new, &Utc);
        let attached: Vec<&str> = cells.iter().flat_map(|c| ids(&c.events)).collect();
        assert_eq!(attached, vec!["new"]);
    }

    #[test]
    fn test_project_uses_display_timezone_for_instants() {
        // 23:30 UTC on the 17th is the 18th in UTC+2
        let events = vec![make_event(
            "late-utc",
            EventTime::DateTimeUtc(Utc.with_ymd_and_hms(2025, 5, 17, 23, 30, 0).unwrap()),
        )];
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let cells = project_events(build_grid(ymd(2025, 5, 1), ymd(2025, 5, 1)), &events, &tz);

        let with_events: Vec<_> = cells.iter().filter(|c| c.has_events()).collect();
        assert_eq!(with_events.len(), 1);
        assert_eq!(with_events[0].date, Some(ymd(2025, 5, 18)));
    }

    #[test]
    fn test_events_on() {
        let events = vec![
            all_day("a", 2025, 5, 17),
            all_day("b", 2025, 6, 17),
            all_day("c", 2025, 5, 17),
        ];
        assert_eq!(ids(&events_on(ymd(2025, 5, 17), &events, &Utc)), vec!["a", "c"]);
        assert!(events_on(ymd(2025, 5, 18), &events, &Utc).is_empty());
    }

    #[test]
    fn test_upcoming_drops_past_and_sorts() {
        let events = vec![
            all_day("may20", 2025, 5, 20),
            all_day("may17", 2025, 5, 17),
            all_day("jan26", 2026, 1, 2),
            all_day("may19", 2025, 5, 19),
        ];
        let now = Utc.with_ymd_and_hms(2025, 5, 18, 12, 0, 0).unwrap();

        assert_eq!(ids(&upcoming_events(&events, &now)), vec!["may19", "may20", "jan26"]);
    }

    #[test]
    fn test_upcoming_includes_start_of_today_and_earlier_times_today() {
        let events = vec![
            make_event(
                "midnight",
                EventTime::DateTimeFloating(ymd(2025, 5, 18).and_hms_opt(0, 0, 0).unwrap()),
            ),
            make_event(
                "morning",
                EventTime::DateTimeFloating(ymd(2025, 5, 18).and_hms_opt(8, 0, 0).unwrap()),
            ),
            make_event(
                "last-night",
                EventTime::DateTimeFloating(ymd(2025, 5, 17).and_hms_opt(23, 59, 59).unwrap()),
            ),
        ];
        let now = Utc.with_ymd_and_hms(2025, 5, 18, 15, 0, 0).unwrap();

        assert_eq!(ids(&upcoming_events(&events, &now)), vec!["midnight", "morning"]);
    }

    #[test]
    fn test_upcoming_ignores_time_of_day_within_a_day() {
        let at = |h| EventTime::DateTimeFloating(ymd(2025, 5, 20).and_hms_opt(h, 0, 0).unwrap());
        let events = vec![
            make_event("afternoon", at(15)),
            make_event("morning", at(8)),
            all_day("next-day", 2025, 5, 21),
            all_day("all-day", 2025, 5, 20),
        ];
        let now = Utc.with_ymd_and_hms(2025, 5, 18, 9, 0, 0).unwrap();

        assert_eq!(
            ids(&upcoming_events(&events, &now)),
            vec!["afternoon", "morning", "all-day", "next-day"]
        );
    }

    #[test]
    fn test_upcoming_is_stable_for_equal_dates() {
        let events = vec![
            all_day("b", 2025, 6, 1),
            all_day("a", 2025, 6, 1),
            all_day("first", 2025, 5, 30),
        ];
        let now = Utc.with_ymd_and_hms(2025, 5, 18, 0, 0, 0).unwrap();

        assert_eq!(ids(&upcoming_events(&events, &now)), vec!["first", "b", "a"]);
    }

    #[test]
    fn test_upcoming_today_is_local_to_now() {
        // 2025-05-18 01:00 in UTC+3 is still 2025-05-17 in UTC
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2025, 5, 18, 1, 0, 0).unwrap();
        let events = vec![all_day("yesterday-locally", 2025, 5, 17), all_day("today", 2025, 5, 18)];

        assert_eq!(ids(&upcoming_events(&events, &now)), vec!["today"]);
    }

    #[test]
    fn test_upcoming_empty() {
        let now = Utc.with_ymd_and_hms(2025, 5, 18, 0, 0, 0).unwrap();
        assert!(upcoming_events(&[], &now).is_empty());
        assert!(upcoming_events(&[all_day("old", 2020, 1, 1)], &now).is_empty());
    }
}
