//! Error types for the message correlation library

use thiserror::Error;

/// Result type for correlation header operations
pub type CorrelationResult<T> = Result<T, CorrelationError>;

/// Errors that can occur while reading or writing correlation headers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    /// A required argument was empty (header key, or the correlation id
    /// value being set). The payload names the offending parameter.
    #[error("invalid argument: `{0}` must not be empty")]
    InvalidArgument(&'static str),
}

impl CorrelationError {
    /// Name of the parameter that failed validation
    pub fn parameter(&self) -> &'static str {
        match self {
            CorrelationError::InvalidArgument(name) => name,
        }
    }
}
