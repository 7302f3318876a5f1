//! Month grid construction.
//!
//! A grid is a flat list of cells: blank placeholders until the first day of
//! the month lines up with its Monday-first weekday column, then one cell per
//! day. The last week is not padded, so `cells.chunks(7)` yields the rows.

use chrono::NaiveDate;
use serde::Serialize;

use crate::event::Event;
use crate::month::MonthCursor;
use crate::view_model::Clock;

/// Number of columns in a grid row.
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarCell {
    /// `None` for leading blanks
    pub date: Option<NaiveDate>,
    pub is_current_month: bool,
    pub is_today: bool,
    pub events: Vec<Event>,
}

impl CalendarCell {
    pub fn blank() -> Self {
        CalendarCell {
            date: None,
            is_current_month: false,
            is_today: false,
            events: Vec::new(),
        }
    }

    pub fn day(date: NaiveDate, today: NaiveDate) -> Self {
        CalendarCell {
            date: Some(date),
            is_current_month: true,
            is_today: date == today,
            events: Vec::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.date.is_none()
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Cells for the month containing `month`, without events attached.
///
/// Depends only on the month and year of `month` plus the `today` marker.
pub fn build_grid(month: NaiveDate, today: NaiveDate) -> Vec<CalendarCell> {
    let cursor = MonthCursor::containing(month);
    let blanks = cursor.leading_blanks();

    let mut cells = Vec::with_capacity(blanks + cursor.days_in_month() as usize);
    cells.extend((0..blanks).map(|_| CalendarCell::blank()));
    cells.extend(cursor.days().map(|date| CalendarCell::day(date, today)));
    cells
}

/// `build_grid` with the today marker taken from `clock`.
pub fn build_grid_today(month: NaiveDate, clock: &impl Clock) -> Vec<CalendarCell> {
    build_grid(month, clock.today())
}
