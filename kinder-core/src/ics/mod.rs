//! ICS file generation and parsing.
//!
//! Each stored event is a single-VEVENT calendar per RFC 5545.

mod generate;
mod parse;

pub use generate::generate_ics;
pub use parse::parse_event;
