//! Observability: structured logging setup and framework metrics.

pub mod metrics;

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};

pub use metrics::{CoreMetrics, MetricsSummary};

static METRICS: Lazy<CoreMetrics> = Lazy::new(CoreMetrics::new);

/// The process-wide metrics instance the registries report into.
pub fn metrics() -> &'static CoreMetrics {
    &METRICS
}

/// Install a stderr tracing subscriber filtered by the configured level.
///
/// # Errors
///
/// Returns `ConfigError` when the filter directive is malformed or a
/// subscriber is already installed.
pub fn init_tracing(config: &Config) -> ConfigResult<()> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|e| ConfigError::InvalidValue {
        var: "MVCKIT_LOG_LEVEL".to_string(),
        reason: e.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConfigError::Other(e.to_string()))
}
