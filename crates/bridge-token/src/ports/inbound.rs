//! # Inbound Ports
//!
//! Public API of the token. Mutating calls take the `caller` identity
//! explicitly; every one is atomic and serialized with all other calls.

use crate::domain::{DomainInfo, Eip712DomainFields, Nonce, RoleId, TransferAuthorization};
use crate::errors::TokenResult;
use shared_crypto::EcdsaSignature;
use shared_types::{Address, Hash, U256};

/// Bridge-minted, capped-supply token.
pub trait BridgedTokenApi: Send + Sync {
    // === Metadata ===

    /// Token name.
    fn name(&self) -> String;

    /// Token symbol.
    fn symbol(&self) -> String;

    /// Decimal places (18).
    fn decimals(&self) -> u8;

    /// Current total supply.
    fn total_supply(&self) -> U256;

    /// Immutable supply cap.
    fn cap(&self) -> U256;

    /// Balance of `account`.
    fn balance_of(&self, account: &Address) -> U256;

    /// Bridge identity allowed to mint and burn.
    fn bridge(&self) -> Address;

    /// Alias of [`bridge`](Self::bridge).
    fn l2_bridge(&self) -> Address {
        self.bridge()
    }

    /// Counterpart asset on the origin chain.
    fn remote_token(&self) -> Address;

    /// Alias of [`remote_token`](Self::remote_token).
    fn l1_token(&self) -> Address {
        self.remote_token()
    }

    // === Ledger ===

    /// Moves `amount` from `caller` to `to`.
    fn transfer(&self, caller: Address, to: Address, amount: U256) -> TokenResult<()>;

    /// Pays every `(recipients[i], amounts[i])` from `caller`, all or nothing.
    fn transfer_batch(
        &self,
        caller: Address,
        recipients: &[Address],
        amounts: &[U256],
    ) -> TokenResult<()>;

    // === Bridge supply ===

    /// Mints `amount` to `to`. Bridge only.
    fn mint(&self, caller: Address, to: Address, amount: U256) -> TokenResult<()>;

    /// Burns `amount` from `from`. Bridge only.
    fn burn(&self, caller: Address, from: Address, amount: U256) -> TokenResult<()>;

    // === Pause ===

    /// Halts ledger mutations. Pauser only.
    fn pause(&self, caller: Address) -> TokenResult<()>;

    /// Resumes ledger mutations. Pauser only.
    fn unpause(&self, caller: Address) -> TokenResult<()>;

    /// Whether the token is halted.
    fn paused(&self) -> bool;

    // === Access control ===

    fn has_role(&self, role: &RoleId, account: &Address) -> bool;

    fn get_role_admin(&self, role: &RoleId) -> RoleId;

    fn get_role_member_count(&self, role: &RoleId) -> usize;

    fn get_role_member(&self, role: &RoleId, index: usize) -> Option<Address>;

    /// Grants `role` to `account`. Caller must hold the role's admin role.
    fn grant_role(&self, caller: Address, role: RoleId, account: Address) -> TokenResult<()>;

    /// Revokes `role` from `account`. Caller must hold the role's admin role.
    fn revoke_role(&self, caller: Address, role: RoleId, account: Address) -> TokenResult<()>;

    /// Drops the caller's own membership. `confirmation` must equal `caller`.
    fn renounce_role(
        &self,
        caller: Address,
        role: RoleId,
        confirmation: Address,
    ) -> TokenResult<()>;

    // === Signed authorization ===

    /// Executes a transfer signed by `auth.from`. Any caller may submit it.
    fn transfer_with_authorization(
        &self,
        caller: Address,
        auth: &TransferAuthorization,
        signature: &EcdsaSignature,
    ) -> TokenResult<()>;

    /// Split-signature form of
    /// [`transfer_with_authorization`](Self::transfer_with_authorization).
    fn transfer_with_authorization_vrs(
        &self,
        caller: Address,
        auth: &TransferAuthorization,
        v: u8,
        r: [u8; 32],
        s: [u8; 32],
    ) -> TokenResult<()> {
        self.transfer_with_authorization(caller, auth, &EcdsaSignature::from_vrs(v, r, s))
    }

    /// 65-byte `r || s || v` form of
    /// [`transfer_with_authorization`](Self::transfer_with_authorization).
    fn transfer_with_authorization_bytes(
        &self,
        caller: Address,
        auth: &TransferAuthorization,
        signature: &[u8],
    ) -> TokenResult<()>;

    /// Whether `nonce` was consumed for `authorizer`.
    fn authorization_state(&self, authorizer: &Address, nonce: &Nonce) -> bool;

    /// Cached typed-data domain separator.
    fn domain_separator(&self) -> Hash;

    /// ERC-5267 domain tuple.
    fn eip712_domain(&self) -> Eip712DomainFields;

    /// Name, version, chain id and contract address for off-line signing.
    fn domain_info(&self) -> DomainInfo;

    // === Upgrade ===

    /// Post-upgrade hook: sets the typed-data name and version and advances
    /// the initialization counter to `target_version`.
    fn reinitialize(
        &self,
        caller: Address,
        target_version: u64,
        name: &str,
        version: &str,
    ) -> TokenResult<()>;

    /// Highest initialization version run so far.
    fn initialized_version(&self) -> u64;
}
