//! Error types for ics2dates.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a calendar into a date list.
#[derive(Error, Debug)]
pub enum Ics2DatesError {
    #[error("Failed to read calendar file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write dates file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Event {event} has no DTSTART")]
    MissingStart { event: String },

    #[error("Event {event} has an unreadable DTSTART '{value}'")]
    InvalidStart { event: String, value: String },

    #[error("Invalid date '{value}' on line {line}. Expected YYYY-MM-DD")]
    InvalidDateLine { line: usize, value: String },
}

/// Result type alias for ics2dates operations.
pub type Ics2DatesResult<T> = Result<T, Ics2DatesError>;
