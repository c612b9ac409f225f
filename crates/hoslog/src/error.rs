//! Error types for hoslog.
//!
//! The projection and remarks engines are infallible. Everything that can go
//! wrong happens at the edges: parsing timestamps and dates out of a trip
//! document, loading configuration, and reading input files.

use thiserror::Error;

/// The main error type for hoslog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// A timestamp string could not be parsed into an instant.
    #[error("malformed timestamp in {field}: {value:?}: {source}")]
    MalformedTimestamp {
        /// Name of the field that held the timestamp.
        field: &'static str,
        /// The offending value, verbatim.
        value: String,
        /// The underlying parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// A calendar date string could not be parsed.
    #[error("invalid log date {value:?}: {source}")]
    InvalidDate {
        /// The offending value, verbatim.
        value: String,
        /// The underlying parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// An entry ends before it starts.
    #[error("entry ends before it starts: {start} > {end}")]
    InvertedInterval {
        /// The entry's start time as supplied.
        start: String,
        /// The entry's end time as supplied.
        end: String,
    },

    /// A requested day index is not present in the trip.
    #[error("day {index} requested but the trip has {available} daily log(s)")]
    DayOutOfRange {
        /// Zero-based index that was requested.
        index: usize,
        /// Number of daily logs available.
        available: usize,
    },

    /// A trip plan request cannot be scheduled.
    #[error("invalid trip request: {message}")]
    InvalidPlan {
        /// Description of the problem.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for hoslog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a malformed timestamp error for the named field.
    #[must_use]
    pub fn malformed_timestamp(
        field: &'static str,
        value: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        Self::MalformedTimestamp {
            field,
            value: value.into(),
            source,
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create an invalid trip request error.
    #[must_use]
    pub fn invalid_plan(message: impl Into<String>) -> Self {
        Self::InvalidPlan {
            message: message.into(),
        }
    }

    /// Check if this error came from parsing a timestamp.
    #[must_use]
    pub fn is_malformed_timestamp(&self) -> bool {
        matches!(self, Self::MalformedTimestamp { .. })
    }

    /// Check if this error is caused by bad input data rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedTimestamp { .. }
                | Self::InvalidDate { .. }
                | Self::InvertedInterval { .. }
                | Self::DayOutOfRange { .. }
                | Self::InvalidPlan { .. }
        )
    }
}
