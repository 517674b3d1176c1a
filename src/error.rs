//! Error types for the shift payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! reading shift datasets, and summarising shifts.

use thiserror::Error;

/// The main error type for the shift payroll engine.
///
/// Every fallible operation in the crate returns this error type. The weekly
/// summary entry point only ever returns [`EngineError::Processing`], which
/// wraps the underlying failure so callers can still tell a timestamp parse
/// failure apart from anything else.
///
/// # Example
///
/// ```
/// use shift_payroll::error::EngineError;
///
/// let error = EngineError::SourceNotFound {
///     path: "/missing/dataset.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift source not found: /missing/dataset.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured timezone is not a known IANA zone identifier.
    #[error("Unknown timezone: {zone}")]
    UnknownTimezone {
        /// The zone identifier that could not be resolved.
        zone: String,
    },

    /// The shift dataset file does not exist.
    #[error("Shift source not found: {path}")]
    SourceNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The shift dataset file exists but is not a valid shift list.
    #[error("Failed to parse shift source '{path}': {message}")]
    SourceParseError {
        /// The path to the dataset.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift timestamp could not be interpreted as an RFC 3339 date-time.
    #[error("Invalid {field} '{value}' on shift {shift_id}: {message}")]
    Parse {
        /// The ID of the shift carrying the bad timestamp.
        shift_id: i64,
        /// Which timestamp field was malformed (`StartTime` or `EndTime`).
        field: &'static str,
        /// The raw value as received.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A weekly summary run failed. The whole batch is aborted.
    #[error("Shift processing failed: {message}")]
    Processing {
        /// A description of the failure.
        message: String,
        /// The failure that aborted the run.
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// Wraps an error into [`EngineError::Processing`], keeping it as the source.
    pub fn processing(source: EngineError) -> Self {
        EngineError::Processing {
            message: source.to_string(),
            source: Box::new(source),
        }
    }

    /// Returns the innermost error, unwrapping any [`EngineError::Processing`] layers.
    pub fn root_cause(&self) -> &EngineError {
        match self {
            EngineError::Processing { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns true if this error is, or wraps, a timestamp parse failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(self.root_cause(), EngineError::Parse { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
