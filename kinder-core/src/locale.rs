//! Display labels for the calendar.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::KinderError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

impl Locale {
    /// Column headers for a Monday-first week.
    pub fn weekday_initials(&self) -> [&'static str; 7] {
        match self {
            Locale::English => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            Locale::Spanish => ["L", "M", "M", "J", "V", "S", "D"],
        }
    }

    /// Full month name for `month` in 1..=12.
    pub fn month_name(&self, month: u32) -> &'static str {
        let names = match self {
            Locale::English => &MONTHS_EN,
            Locale::Spanish => &MONTHS_ES,
        };
        names[(month.clamp(1, 12) - 1) as usize]
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match (self, weekday) {
            (Locale::English, Weekday::Mon) => "Monday",
            (Locale::English, Weekday::Tue) => "Tuesday",
            (Locale::English, Weekday::Wed) => "Wednesday",
            (Locale::English, Weekday::Thu) => "Thursday",
            (Locale::English, Weekday::Fri) => "Friday",
            (Locale::English, Weekday::Sat) => "Saturday",
            (Locale::English, Weekday::Sun) => "Sunday",
            (Locale::Spanish, Weekday::Mon) => "lunes",
            (Locale::Spanish, Weekday::Tue) => "martes",
            (Locale::Spanish, Weekday::Wed) => "miércoles",
            (Locale::Spanish, Weekday::Thu) => "jueves",
            (Locale::Spanish, Weekday::Fri) => "viernes",
            (Locale::Spanish, Weekday::Sat) => "sábado",
            (Locale::Spanish, Weekday::Sun) => "domingo",
        }
    }

    pub fn today_label(&self) -> &'static str {
        match self {
            Locale::English => "Today",
            Locale::Spanish => "hoy",
        }
    }

    pub fn tomorrow_label(&self) -> &'static str {
        match self {
            Locale::English => "Tomorrow",
            Locale::Spanish => "mañana",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }
}

impl FromStr for Locale {
    type Err = KinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "es" | "spanish" | "español" => Ok(Locale::Spanish),
            other => Err(KinderError::Config(format!(
                "Unknown locale '{}'. Expected 'en' or 'es'",
                other
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
