//! Subscriber installation.
//!
//! A single global `tracing` subscriber: an `EnvFilter` built from the
//! configured level, and either a human-readable or a JSON `fmt` layer.

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber described by `config`.
///
/// Calling this more than once is harmless: if a global subscriber already
/// exists the call returns `Ok(false)` and leaves it in place.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` if `config.log_level` is not a
/// valid `EnvFilter` directive.
pub fn init_logging(config: &TelemetryConfig) -> Result<bool, TelemetryError> {
    let env_filter =
        EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::InvalidFilter {
            filter: config.log_level.clone(),
            reason: e.to_string(),
        })?;

    let installed = if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(
            service = %config.service_name,
            level = %config.log_level,
            json = config.json_logs,
            "Logging initialized"
        );
    }

    Ok(installed)
}

/// Quiet subscriber for tests: `warn` unless `RUST_LOG` says otherwise,
/// output captured by the test harness.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
