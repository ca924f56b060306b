//! # Bridge Token
//!
//! State machine of an upgradeable, bridge-minted, capped-supply token.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      TokenService                            │
//! │   guards ─► effect ─► invariant check ─► events (one lock)   │
//! ├──────────────┬──────────────┬──────────────┬─────────────────┤
//! │ RoleRegistry │ PauseSwitch  │ Ledger       │ BridgeLink      │
//! │ NonceRegistry│ Eip712State  │ Initialization gate            │
//! └──────────────┴──────────────┴──────────────┴─────────────────┘
//!          ▲ ports::inbound::BridgedTokenApi
//!          ▼ ports::outbound::{Clock, EventSink}
//! ```
//!
//! ## Security Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | `sum(balances) == total_supply <= cap` | `domain/ledger.rs`, checked after every call in debug builds |
//! | Only the bridge mints or burns | `Guard::Bridge` |
//! | Paused token rejects every ledger mutation | `Guard::WhenNotPaused`, checked first |
//! | A signed authorization executes at most once | `domain/authorization.rs` nonce registry |
//! | Each initializer version runs once | `domain/upgrade.rs` |
//! | Rejected calls change nothing | staged balance overlay, guards before effects |

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::{
        check_storage, check_supply_invariants, compute_domain_separator, DeploymentContext,
        DomainInfo, Eip712DomainFields, InitParams, InvariantViolation, Nonce, Role, RoleId,
        TokenStorage, TransferAuthorization, DECIMALS, DEFAULT_ADMIN_ROLE,
    };

    // Ports
    pub use crate::ports::inbound::BridgedTokenApi;
    pub use crate::ports::outbound::{Clock, EventSink};

    // Adapters
    pub use crate::adapters::{InMemoryEventLog, ManualClock, SystemClock, TracingEventSink};

    // Config
    pub use crate::config::{ConfigError, NetworkPreset, TokenConfig, STANDARD_BRIDGE};

    // Errors and events
    pub use crate::errors::{ErrorKind, TokenError, TokenResult};
    pub use crate::events::TokenEvent;

    // Service
    pub use crate::service::{create_test_service, ServiceStats, TokenService};

    // Primitives
    pub use shared_crypto::{EcdsaSignature, Secp256k1KeyPair};
    pub use shared_types::{units, Address, Hash, U256};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
