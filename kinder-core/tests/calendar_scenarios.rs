use chrono::{Datelike, NaiveDate, TimeZone};
use chrono_tz::Tz;
use kinder_core::{
    CalendarViewModel, Event, EventTime, FixedClock, build_grid, project_events, shift_month,
    upcoming_events,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn all_day(id: &str, title: &str, date: NaiveDate) -> Event {
    Event::with_id(id, title, EventTime::Date(date), None).unwrap()
}

#[test]
fn test_may_2025_starts_on_thursday() {
    let cells = build_grid(ymd(2025, 5, 10), ymd(2025, 5, 10));

    let blanks = cells.iter().take_while(|c| c.is_blank()).count();
    assert_eq!(blanks, 3);
    assert_eq!(cells.len() - blanks, 31);
}

#[test]
fn test_upcoming_skips_yesterday() {
    let events = vec![
        all_day("20", "Feriado", ymd(2025, 5, 20)),
        all_day("17", "Día del Niño", ymd(2025, 5, 17)),
    ];
    let now = Tz::UTC.with_ymd_and_hms(2025, 5, 18, 9, 0, 0).unwrap();

    let upcoming = upcoming_events(&events, &now);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].date, EventTime::Date(ymd(2025, 5, 20)));
}

#[test]
fn test_upcoming_keeps_input_order_within_a_day() {
    let at = |h| EventTime::DateTimeFloating(ymd(2025, 5, 20).and_hms_opt(h, 0, 0).unwrap());
    let events = vec![
        Event::with_id("A", "Acto", at(15), None).unwrap(),
        Event::with_id("B", "Bienvenida", at(8), None).unwrap(),
    ];
    let now = Tz::UTC.with_ymd_and_hms(2025, 5, 18, 9, 0, 0).unwrap();

    let ids: Vec<_> = upcoming_events(&events, &now).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["A", "B"]);
}

#[test]
fn test_single_event_lands_on_its_day() {
    let events = vec![all_day("a", "A", ymd(2025, 5, 17))];
    let cells = project_events(build_grid(ymd(2025, 5, 1), ymd(2025, 5, 1)), &events, &Tz::UTC);

    for cell in &cells {
        let titles: Vec<_> = cell.events.iter().map(|e| e.title.as_str()).collect();
        if cell.date == Some(ymd(2025, 5, 17)) {
            assert_eq!(titles, vec!["A"]);
        } else {
            assert!(titles.is_empty());
        }
    }
}

#[test]
fn test_december_rolls_into_january() {
    let next = shift_month(ymd(2025, 12, 15), 1).unwrap();
    assert_eq!((next.year(), next.month()), (2026, 1));
}

#[test]
fn test_view_model_walks_a_school_year() {
    let clock = FixedClock(Tz::UTC.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).unwrap());
    let mut vm = CalendarViewModel::new(clock);
    vm.set_events(vec![
        all_day("inicio", "Inicio de clases", ymd(2025, 3, 3)),
        all_day("receso", "Receso invernal", ymd(2025, 7, 21)),
        all_day("fin", "Fin de clases", ymd(2025, 12, 19)),
    ])
    .unwrap();

    let mut seen = Vec::new();
    for _ in 0..10 {
        for cell in vm.grid() {
            seen.extend(cell.events.into_iter().map(|e| e.id));
        }
        vm.go_to_next_month().unwrap();
    }
    assert_eq!(seen, vec!["inicio", "receso", "fin"]);
    assert_eq!(vm.month().first_day(), ymd(2026, 1, 1));

    vm.go_to_today();
    assert_eq!(vm.month().first_day(), ymd(2025, 3, 1));

    let upcoming: Vec<_> = vm.upcoming().into_iter().map(|e| e.id).collect();
    assert_eq!(upcoming, vec!["inicio", "receso", "fin"]);
}
