//! # Token Telemetry
//!
//! Structured logging for the bridge token and anything embedding it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use token_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config).expect("logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TOKEN_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `TOKEN_JSON_LOGS` | `false` | Emit JSON lines instead of human-readable text |
//! | `TOKEN_SERVICE_NAME` | `bridge-token` | Service name attached to the root span |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, init_test_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed.
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// Directive that failed to parse
        filter: String,
        /// Parser message
        reason: String,
    },
}
