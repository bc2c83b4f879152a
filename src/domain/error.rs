use std::io;

use thiserror::Error;

/// Library-wide error type for tapctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file missing for a specifically requested tap.
    #[error("Tap config not found: {0}")]
    TapConfigMissing(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Schedule section error.
    #[error(transparent)]
    Schedule(#[from] crate::domain::schedule::ScheduleError),

    /// Injected evaluation timestamp could not be parsed.
    #[error("Invalid timestamp '{0}': expected RFC 3339, e.g. 2026-01-15T02:00:00Z")]
    InvalidTimestamp(String),

    /// Serialization or output plumbing failure.
    #[error("{0}")]
    InternalError(String),
}
