//! Calendar core for KinderCRM.
//!
//! - `grid`, `month` and `project` are pure functions that build a
//!   Monday-first month grid and attach events to it
//! - `view_model` holds the displayed month and the event snapshot
//! - `store`, `service` and `notify` persist events per user and report
//!   the outcome of each change

pub mod collection;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod ics;
pub mod locale;
pub mod month;
pub mod notify;
pub mod project;
pub mod service;
pub mod store;
pub mod utils;
pub mod view_model;

pub use error::{KinderError, KinderResult};
pub use event::{Event, EventTime};
pub use grid::{CalendarCell, build_grid};
pub use month::{MonthCursor, shift_month};
pub use project::{project_events, upcoming_events};
pub use view_model::{CalendarViewModel, Clock, FixedClock, SystemClock};
