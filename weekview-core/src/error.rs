//! Error types for the weekview engine.

use thiserror::Error;

/// Errors that can occur while loading a calendar.
#[derive(Error, Debug)]
pub enum WeekViewError {
    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Invalid recurrence rule: {0}")]
    Rrule(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for weekview operations.
pub type WeekViewResult<T> = Result<T, WeekViewError>;
