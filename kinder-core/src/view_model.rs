//! Month navigation state for a calendar screen.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::collection::ensure_unique_ids;
use crate::error::KinderResult;
use crate::event::Event;
use crate::grid::{CalendarCell, build_grid_today};
use crate::month::MonthCursor;
use crate::project::{project_events, upcoming_events};

/// Source of "now" in the calendar's display timezone.
pub trait Clock {
    fn now(&self) -> DateTime<Tz>;

    fn timezone(&self) -> Tz {
        self.now().timezone()
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock viewed from a fixed display timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        SystemClock { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub DateTime<Tz>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.0
    }
}

/// Holds the displayed month and the current event snapshot; everything
/// else is derived on demand.
pub struct CalendarViewModel<C: Clock> {
    clock: C,
    month: MonthCursor,
    events: Vec<Event>,
}

impl<C: Clock> CalendarViewModel<C> {
    /// Start on the current month with no events.
    pub fn new(clock: C) -> Self {
        let month = MonthCursor::containing(clock.today());
        CalendarViewModel {
            clock,
            month,
            events: Vec::new(),
        }
    }

    pub fn with_month(mut self, month: MonthCursor) -> Self {
        self.month = month;
        self
    }

    pub fn month(&self) -> MonthCursor {
        self.month
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn timezone(&self) -> Tz {
        self.clock.timezone()
    }

    pub fn go_to_next_month(&mut self) -> KinderResult<()> {
        self.month = self.month.shift(1)?;
        Ok(())
    }

    pub fn go_to_previous_month(&mut self) -> KinderResult<()> {
        self.month = self.month.shift(-1)?;
        Ok(())
    }

    pub fn go_to_today(&mut self) {
        self.month = MonthCursor::containing(self.clock.today());
    }

    /// Replace the held events wholesale. Rejects collections with repeated ids
    /// and leaves the previous snapshot in place.
    pub fn set_events(&mut self, events: Vec<Event>) -> KinderResult<()> {
        ensure_unique_ids(&events)?;
        self.events = events;
        Ok(())
    }

    /// Render-ready cells for the displayed month.
    pub fn grid(&self) -> Vec<CalendarCell> {
        let cells = build_grid_today(self.month.first_day(), &self.clock);
        project_events(cells, &self.events, &self.clock.timezone())
    }

    /// Events from today on, across all months.
    pub fn upcoming(&self) -> Vec<Event> {
        upcoming_events(&self.events, &self.clock.now())
    }
}
