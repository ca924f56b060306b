//! Domain layer: pure token state transitions with no I/O.

pub mod access_control;
pub mod authorization;
pub mod batch;
pub mod eip712;
pub mod gates;
pub mod invariants;
pub mod ledger;
pub mod pause;
pub mod storage;
pub mod supply;
pub mod upgrade;
pub mod value_objects;

pub use access_control::{RoleData, RoleRegistry};
pub use authorization::{
    check_validity_window, verify_signer, NonceRegistry, TransferAuthorization,
    TRANSFER_WITH_AUTHORIZATION_TYPE,
};
pub use batch::stage_batch;
pub use eip712::{
    compute_domain_separator, hash_typed_data, DomainInfo, Eip712DomainFields, Eip712State,
    EIP712_DOMAIN_TYPE,
};
pub use gates::{check_guards, Guard};
pub use invariants::{check_storage, check_supply_invariants, InvariantViolation};
pub use ledger::{BalanceOverlay, Ledger, StagedBalances};
pub use pause::PauseSwitch;
pub use storage::{InitParams, TokenMetadata, TokenStorage};
pub use supply::BridgeLink;
pub use upgrade::{InitializationGate, INITIAL_VERSION};
pub use value_objects::{DeploymentContext, Nonce, Role, RoleId, DECIMALS, DEFAULT_ADMIN_ROLE};
