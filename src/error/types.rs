//! Error types for the student service
//!
//! Database failures pass through verbatim; validation and configuration
//! problems carry the field they refer to.

use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// MongoDB driver errors, surfaced verbatim to the caller
    #[error("{0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// Validation errors for request payloads
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Error message describing the validation failure
        message: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Mongo(..) => "database",
            Error::Config { .. } => "config",
            Error::Validation { .. } => "validation",
        }
    }
}
