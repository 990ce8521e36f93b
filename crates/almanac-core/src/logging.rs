//! Tracing subscriber bootstrap for binaries and tools embedding the engine.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Builds the log filter, preferring `RUST_LOG` over the configured level.
///
/// ## Errors
/// Returns `CoreError::InvalidConfiguration` if the configured level is not a
/// valid filter directive.
pub fn env_filter(config: &LoggingConfig) -> CoreResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(config.level.trim()).map_err(|err| {
        CoreError::InvalidConfiguration(format!("invalid log level '{}': {err}", config.level))
    })
}

/// ## Summary
/// Installs the global `fmt` subscriber.
///
/// ## Errors
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    tracing::debug!(level = %config.level, "Tracing initialized");
    Ok(())
}
