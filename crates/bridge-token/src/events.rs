//! Events emitted by successful token calls.
//!
//! Events are buffered while a call runs and handed to the
//! [`EventSink`](crate::ports::outbound::EventSink) only after the call
//! commits, in emission order. Rejected calls emit nothing.

use crate::domain::value_objects::{Nonce, RoleId};
use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// Token event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum TokenEvent {
    /// Balance movement. Mints come from, and burns go to, the zero address.
    Transfer {
        from: Address,
        to: Address,
        value: U256,
    },
    /// Bridge mint.
    Mint { account: Address, amount: U256 },
    /// Bridge burn.
    Burn { account: Address, amount: U256 },
    RoleGranted {
        role: RoleId,
        account: Address,
        sender: Address,
    },
    RoleRevoked {
        role: RoleId,
        account: Address,
        sender: Address,
    },
    Paused { account: Address },
    Unpaused { account: Address },
    /// A signed authorization nonce was consumed.
    AuthorizationUsed { authorizer: Address, nonce: Nonce },
    /// Initialization counter advanced.
    Initialized { version: u64 },
    /// Typed-data domain name or version changed (ERC-5267).
    Eip712DomainChanged,
}

impl TokenEvent {
    /// Event name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transfer { .. } => "Transfer",
            Self::Mint { .. } => "Mint",
            Self::Burn { .. } => "Burn",
            Self::RoleGranted { .. } => "RoleGranted",
            Self::RoleRevoked { .. } => "RoleRevoked",
            Self::Paused { .. } => "Paused",
            Self::Unpaused { .. } => "Unpaused",
            Self::AuthorizationUsed { .. } => "AuthorizationUsed",
            Self::Initialized { .. } => "Initialized",
            Self::Eip712DomainChanged => "EIP712DomainChanged",
        }
    }
}
