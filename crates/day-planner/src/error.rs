//! Error types for day-planner operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid interval: start {start} is not before end {end}")]
    InvalidInterval { start: String, end: String },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}': expected HH:MM (24hr)")]
    InvalidTime(String),

    /// The wall-clock time falls inside a DST gap and the policy forbids shifting.
    #[error("Local time {0} does not exist in timezone {1}")]
    NonexistentLocalTime(String, String),

    #[error("Invalid RRULE: {0}")]
    InvalidRule(String),

    #[error("Malformed calendar event '{id}': {reason}")]
    MalformedEvent { id: String, reason: String },

    #[error("Invalid event number {number}: {available} event(s) listed")]
    InvalidSelection { number: usize, available: usize },

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Calendar JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Calendar I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
