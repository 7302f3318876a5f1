//! Terminal rendering of the month grid and event lists.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use kinder_core::grid::DAYS_PER_WEEK;
use kinder_core::locale::Locale;
use kinder_core::{CalendarCell, Event, MonthCursor};
use owo_colors::OwoColorize;

/// Width of one day column, including its separating space
const CELL_WIDTH: usize = 4;

/// Title line, e.g. "May 2025" or "mayo 2025"
pub fn render_month_title(month: MonthCursor, locale: Locale) -> String {
    format!("{} {}", locale.month_name(month.month()), month.year())
}

/// Monday-first grid. Days with events are highlighted, today is reversed.
pub fn render_grid(cells: &[CalendarCell], locale: Locale) -> String {
    let mut lines = Vec::new();

    let header: String = locale
        .weekday_initials()
        .iter()
        .map(|d| format!("{:>width$}", d, width = CELL_WIDTH))
        .collect();
    lines.push(header.dimmed().to_string());

    for week in cells.chunks(DAYS_PER_WEEK) {
        let line: String = week.iter().map(render_cell).collect();
        lines.push(line);
    }

    lines.join("\n")
}

fn render_cell(cell: &CalendarCell) -> String {
    let Some(date) = cell.date else {
        return " ".repeat(CELL_WIDTH);
    };

    let marker = if cell.has_events() { "*" } else { " " };
    let day = format!("{:>2}{}", date.day(), marker);

    let styled = match (cell.is_today, cell.has_events()) {
        (true, _) => day.reversed().to_string(),
        (false, true) => day.yellow().bold().to_string(),
        (false, false) => day,
    };

    format!(" {}", styled)
}

/// Per-day list of the events in the grid, in grid order.
pub fn render_month_events(cells: &[CalendarCell], tz: &Tz) -> Vec<String> {
    cells
        .iter()
        .filter_map(|cell| cell.date.map(|date| (date, &cell.events)))
        .flat_map(|(date, events)| {
            events.iter().map(move |event| {
                format!(
                    "  {:>2}  {} {}",
                    date.day(),
                    event.title,
                    format_time(event, tz).dimmed()
                )
            })
        })
        .collect()
}

/// Upcoming events grouped under a day label ("Today", "Tomorrow", "Saturday 17").
pub fn render_upcoming(events: &[Event], today: NaiveDate, tz: &Tz, locale: Locale) -> String {
    let mut lines = Vec::new();
    let mut current_label: Option<String> = None;

    for event in events {
        let label = format_date_label(event.day_in(tz), today, locale);

        if current_label.as_ref() != Some(&label) {
            if current_label.is_some() {
                lines.push(String::new());
            }
            lines.push(label.bold().to_string());
            current_label = Some(label);
        }

        let id = format!("[{}]", short_id(&event.id));
        lines.push(format!(
            "  {} {} {}",
            format_time(event, tz),
            event.title,
            id.dimmed()
        ));
    }

    lines.join("\n")
}

/// One event with all its fields, for confirmation prompts.
pub fn render_event_details(event: &Event) -> String {
    let mut lines = vec![
        event.title.bold().to_string(),
        format!("  {} {}", "id:  ".dimmed(), event.id),
        format!("  {} {}", "date:".dimmed(), event.date),
    ];
    if let Some(desc) = event.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("  {} {}", "note:".dimmed(), desc));
    }
    lines.join("\n")
}

fn format_date_label(date: NaiveDate, today: NaiveDate, locale: Locale) -> String {
    match (date - today).num_days() {
        0 => locale.today_label().to_string(),
        1 => locale.tomorrow_label().to_string(),
        2..=6 => format!("{} {}", locale.weekday_name(date.weekday()), date.day()),
        _ => format!(
            "{} {} {}",
            locale.weekday_name(date.weekday()),
            date.day(),
            locale.month_name(date.month())
        ),
    }
}

/// "all-day" or the local start time, padded to line up
fn format_time(event: &Event, tz: &Tz) -> String {
    if event.date.is_all_day() {
        return "all-day".to_string();
    }
    let time = event.date.local_datetime_in(tz).format("%H:%M").to_string();
    format!("{:>7}", time)
}

/// Enough of a UUID to type back into `update`/`delete`
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
