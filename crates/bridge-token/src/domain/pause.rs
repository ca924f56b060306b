//! Global pause switch.
//!
//! Pausing an already-paused token fails with `ContractPaused`; unpausing a
//! running token fails with `NotPaused`.

use crate::errors::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};

/// Process-wide halt flag consulted by every ledger mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseSwitch {
    paused: bool,
}

impl PauseSwitch {
    /// Whether the token is halted.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fails with `ContractPaused` while halted.
    pub fn ensure_not_paused(&self) -> TokenResult<()> {
        if self.paused {
            return Err(TokenError::ContractPaused);
        }
        Ok(())
    }

    /// Halts the token.
    pub fn pause(&mut self) -> TokenResult<()> {
        self.ensure_not_paused()?;
        self.paused = true;
        Ok(())
    }

    /// Resumes the token.
    pub fn unpause(&mut self) -> TokenResult<()> {
        if !self.paused {
            return Err(TokenError::NotPaused);
        }
        self.paused = false;
        Ok(())
    }
}
