//! Core error types for studyslot-core.
//!
//! Input problems are rejected before any scheduling attempt, storage
//! problems are propagated as hard failures. "No slot found" during a batch
//! is not an error at all; it is reported per task by the sequencer.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyslot-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed or out-of-range caller input
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Calendar, queue or roster file could not be read or written
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No committed task with this id
    #[error("Task not found: {id}")]
    NotFound { id: String },

    /// The lookahead window was exhausted for a single-task operation
    #[error("No free slot for task {task_id} within {max_days_ahead} days")]
    NoSlotFound { task_id: String, max_days_ahead: u32 },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a `YYYY-MM-DD` date
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Not a `HH:MM` wall-clock time
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    /// Interval with start >= end or past the end of the day
    #[error("Invalid time range: end ({end}) must be greater than start ({start}) and within the day")]
    InvalidTimeRange { start: u32, end: u32 },

    /// Unrecognised weekday name
    #[error("Unknown weekday '{0}'")]
    UnknownWeekday(String),

    /// The requested weekday occurrence does not exist in that month
    #[error("There is no week {ordinal} {weekday} in {year}-{month:02}")]
    NoSuchWeekday {
        weekday: String,
        ordinal: u32,
        month: u32,
        year: i32,
    },

    /// Numeric value outside its allowed range
    #[error("Value {value} for '{field}' is out of range ({min}..={max})")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A required text field was empty
    #[error("Field '{0}' must not be empty")]
    EmptyField(String),

    /// Neither an explicit date, a week spec nor a deadline was given
    #[error("A date, a week spec or a deadline is required")]
    MissingDate,

    /// Unrecognised task category
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read a data file
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a data file
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exists but does not contain what we expect
    #[error("Corrupt data in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Could not encode records
    #[error("Failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),

    /// Home directory unusable
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_into_core_error() {
        let err: CoreError = ValidationError::EmptyField("title".into()).into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Invalid input: Field 'title' must not be empty");
    }

    #[test]
    fn no_such_weekday_message_is_readable() {
        let err = ValidationError::NoSuchWeekday {
            weekday: "Monday".into(),
            ordinal: 5,
            month: 2,
            year: 2026,
        };
        assert_eq!(err.to_string(), "There is no week 5 Monday in 2026-02");
    }
}
