//! Bridge-gated supply control.
//!
//! After initialization, the only way supply changes is a mint or burn
//! issued by the bridge identity fixed at deploy time.

use crate::errors::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};
use shared_types::Address;

/// The trusted bridge and the origin-chain asset it mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeLink {
    bridge: Address,
    remote_token: Address,
}

impl BridgeLink {
    /// Links the token to `bridge`. Both identities are immutable afterwards.
    #[must_use]
    pub fn new(bridge: Address, remote_token: Address) -> Self {
        Self {
            bridge,
            remote_token,
        }
    }

    /// The only identity allowed to mint and burn.
    #[must_use]
    pub fn bridge(&self) -> Address {
        self.bridge
    }

    /// Counterpart asset on the origin chain (informational).
    #[must_use]
    pub fn remote_token(&self) -> Address {
        self.remote_token
    }

    /// Fails with `OnlyBridge` for any caller but the bridge.
    pub fn ensure_bridge(&self, caller: &Address) -> TokenResult<()> {
        if *caller != self.bridge {
            return Err(TokenError::OnlyBridge { caller: *caller });
        }
        Ok(())
    }
}
