//! crates/logging/src/error.rs
//! Error types surfaced by the logger.

use thiserror::Error;

use crate::severity::Severity;

/// Errors reported by [`Logger`](crate::Logger) operations.
///
/// Every variant is also reported through the logger itself as an ERROR
/// diagnostic; the returned value only lets callers react programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoggerError {
    /// A runtime level above the compile-time ceiling was requested.
    #[error("Invalid log level: {}. Maximum allowed is: {}", requested.as_u8(), ceiling.as_u8())]
    LevelAboveCeiling {
        /// Level passed to `set_level`.
        requested: Severity,
        /// Compile-time ceiling in effect.
        ceiling: Severity,
    },

    /// A flag was released without having been added.
    #[error("Flag '{0}' could not be found in memory.")]
    FlagNotFound(String),

    /// The process-wide logger was initialised twice.
    #[error("the global logger has already been initialized")]
    AlreadyInitialized,
}

/// Error returned when text cannot be parsed into a [`Severity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity: {token}")]
pub struct ParseSeverityError {
    token: String,
}

impl ParseSeverityError {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}
