//! Authorization guards.
//!
//! Each entry point lists the guards it needs; they run in order, before any
//! mutation, and the first failure wins.

use super::storage::TokenStorage;
use super::value_objects::RoleId;
use crate::errors::{TokenError, TokenResult};
use shared_types::Address;

/// A precondition over `(caller, storage)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// The token must not be paused.
    WhenNotPaused,
    /// Caller must be the bridge.
    Bridge,
    /// Caller must hold the role.
    Role(RoleId),
    /// Caller must hold the admin role of the given role.
    AdminOf(RoleId),
    /// Caller must be this account.
    Account(Address),
}

impl Guard {
    /// Fails with the guard's error kind if it does not hold.
    pub fn check(&self, storage: &TokenStorage, caller: &Address) -> TokenResult<()> {
        match self {
            Guard::WhenNotPaused => storage.pause.ensure_not_paused(),
            Guard::Bridge => storage.bridge.ensure_bridge(caller),
            Guard::Role(role) => storage.roles.check_role(role, caller),
            Guard::AdminOf(role) => {
                let admin = storage.roles.role_admin(role);
                storage.roles.check_role(&admin, caller)
            }
            Guard::Account(account) if account == caller => Ok(()),
            Guard::Account(_) => Err(TokenError::Unauthorized {
                account: *caller,
                detail: "can only renounce roles for self".to_string(),
            }),
        }
    }
}

/// Runs `guards` in order.
pub fn check_guards(guards: &[Guard], storage: &TokenStorage, caller: &Address) -> TokenResult<()> {
    guards.iter().try_for_each(|guard| guard.check(storage, caller))
}
