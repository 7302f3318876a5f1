//! Month cursor and month arithmetic.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{KinderError, KinderResult};

/// The month being displayed, held as its first day.
///
/// Any date inside the month can be used to build one; the day is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "NaiveDate")]
pub struct MonthCursor(NaiveDate);

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        MonthCursor(date - Days::new(u64::from(date.day0())))
    }

    /// Parse `YYYY-MM` or `YYYY-MM-DD`.
    pub fn parse(input: &str) -> KinderResult<Self> {
        let s = input.trim();

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d"))
            .map(Self::containing)
            .map_err(|_| {
                KinderError::InvalidDate(format!("'{}'. Expected YYYY-MM or YYYY-MM-DD", input))
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        match self
            .0
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
        {
            Some(last) => last,
            // December of the last representable year
            None => NaiveDate::MAX,
        }
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Blank cells before day 1 in a Monday-first week (0..=6).
    pub fn leading_blanks(&self) -> usize {
        monday_first_index(self.0.weekday()) as usize
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn shift(&self, delta: i32) -> KinderResult<Self> {
        shift_month(self.0, delta).map(Self::containing)
    }

    /// Every day of the month, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last = self.last_day();
        self.0.iter_days().take_while(move |d| *d <= last)
    }
}

impl From<NaiveDate> for MonthCursor {
    fn from(date: NaiveDate) -> Self {
        Self::containing(date)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

/// Weekday index with Monday = 0 .. Sunday = 6, remapped from Sunday-first numbering.
pub fn monday_first_index(weekday: Weekday) -> u32 {
    match weekday.num_days_from_sunday() {
        0 => 6,
        n => n - 1,
    }
}

/// Move `date` by `delta` whole calendar months.
///
/// The day of month clamps to the end of a shorter target month
/// (Jan 31 + 1 is Feb 28/29); only the resulting month and year matter to the grid.
pub fn shift_month(date: NaiveDate, delta: i32) -> KinderResult<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };

    shifted.ok_or_else(|| {
        KinderError::InvalidDate(format!("{} shifted by {} months is out of range", date, delta))
    })
}
