//! Configuration for the framework's observability layer.
//!
//! The framework itself needs no configuration to run; what is configurable
//! is how much it says while running. Values load from environment
//! variables and are validated up front.

use std::env;

use crate::error::{ConfigError, ConfigResult};

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter directive (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MVCKIT_LOG_LEVEL`: tracing filter directive, e.g. `"debug"` or
    ///   `"mvckit=trace"` (default: `"error"`)
    pub fn from_env() -> ConfigResult<Self> {
        let log_level = env::var("MVCKIT_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        // Reject malformed directives here instead of at subscriber setup.
        tracing_subscriber::EnvFilter::try_new(&log_level).map_err(|e| {
            ConfigError::InvalidValue {
                var: "MVCKIT_LOG_LEVEL".to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Config { log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
        }
    }
}
