//! Small value types shared across the token domain.

use serde::{Deserialize, Serialize};
use shared_crypto::keccak256;
use shared_types::Hash;

/// 32-byte role identifier.
pub type RoleId = Hash;

/// 32-byte authorization nonce chosen by the signer.
pub type Nonce = Hash;

/// Fixed token decimals.
pub const DECIMALS: u8 = 18;

/// The role every other role is administered by unless reassigned.
pub const DEFAULT_ADMIN_ROLE: RoleId = Hash::ZERO;

/// Roles the token assigns at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Administers every role by default.
    DefaultAdmin,
    /// May pause and unpause the token.
    Pauser,
    /// Reserved for delegated-transfer administration.
    TransferAuthorizer,
}

impl Role {
    /// All roles granted to the deployer.
    pub const ALL: [Role; 3] = [Role::DefaultAdmin, Role::Pauser, Role::TransferAuthorizer];

    /// Canonical role name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::DefaultAdmin => "DEFAULT_ADMIN_ROLE",
            Role::Pauser => "PAUSER_ROLE",
            Role::TransferAuthorizer => "TRANSFER_AUTHORIZER_ROLE",
        }
    }

    /// Role identifier: zero for the admin role, otherwise `keccak256(name)`.
    #[must_use]
    pub fn id(self) -> RoleId {
        match self {
            Role::DefaultAdmin => DEFAULT_ADMIN_ROLE,
            other => keccak256(other.name().as_bytes()),
        }
    }

    /// Looks up the named role for an identifier.
    #[must_use]
    pub fn from_id(id: &RoleId) -> Option<Role> {
        Self::ALL.into_iter().find(|role| role.id() == *id)
    }
}

/// Identity of the contract the ledger is deployed as.
///
/// Fixed at initialization and bound into every typed-data signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentContext {
    /// Chain the token lives on.
    pub chain_id: u64,
    /// Address of the (proxy) contract.
    pub contract: shared_types::Address,
}
