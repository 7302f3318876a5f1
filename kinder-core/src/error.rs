//! Error types for the KinderCRM calendar.

use thiserror::Error;

/// Errors that can occur in calendar operations.
#[derive(Error, Debug)]
pub enum KinderError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Event title must not be empty")]
    EmptyTitle,

    #[error("Duplicate event id: {0}")]
    DuplicateEventId(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calendar operations.
pub type KinderResult<T> = Result<T, KinderError>;
