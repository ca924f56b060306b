//! Version-gated initialization.
//!
//! The counter starts at 0 and only moves forward. Each initializer runs once
//! for the version it targets.

use crate::errors::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};

/// Version the first initializer sets.
pub const INITIAL_VERSION: u64 = 1;

/// Monotonic initialization counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializationGate {
    version: u64,
}

impl InitializationGate {
    /// Highest version initialized so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Fails with `AlreadyInitialized` unless `target` is above the counter.
    pub fn ensure_can_advance(&self, target: u64) -> TokenResult<()> {
        if self.version >= target {
            return Err(TokenError::AlreadyInitialized {
                current: self.version,
                target,
            });
        }
        Ok(())
    }

    /// Advances the counter to `target`.
    pub fn advance(&mut self, target: u64) -> TokenResult<()> {
        self.ensure_can_advance(target)?;
        self.version = target;
        Ok(())
    }
}
