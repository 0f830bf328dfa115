//! Error types for the mvckit framework.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//!
//! Registry lookups deliberately do not appear here: retrieving or removing a
//! component that was never registered yields `None`, not an error.

use thiserror::Error;

/// Errors that can occur when reading a typed value out of an opaque payload.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// The payload holds a value of a different type than requested
    #[error("payload holds {stored}, not {requested}")]
    TypeMismatch {
        stored: &'static str,
        requested: &'static str,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with PayloadError
pub type PayloadResult<T> = Result<T, PayloadError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
