//! # Access Control
//!
//! Enumerable role registry. Each role keeps an ordered member list and an
//! admin role whose holders may grant and revoke it.
//!
//! ## Invariants
//!
//! - A role's member list never contains duplicates.
//! - Every role's admin is [`DEFAULT_ADMIN_ROLE`] unless reassigned.
//! - Granting a held role, or revoking an absent one, is a no-op.

use super::value_objects::{RoleId, DEFAULT_ADMIN_ROLE};
use crate::errors::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use shared_types::Address;
use std::collections::HashMap;

/// Membership and admin of a single role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleData {
    /// Role whose holders administer this one.
    pub admin_role: RoleId,
    /// Current members in grant order (swap-removed on revoke).
    pub members: Vec<Address>,
}

/// Role registry.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRegistry {
    #[serde_as(as = "Vec<(_, _)>")]
    roles: HashMap<RoleId, RoleData>,
}

impl RoleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `account` holds `role`.
    #[must_use]
    pub fn has_role(&self, role: &RoleId, account: &Address) -> bool {
        self.roles
            .get(role)
            .is_some_and(|data| data.members.contains(account))
    }

    /// Admin role of `role`.
    #[must_use]
    pub fn role_admin(&self, role: &RoleId) -> RoleId {
        self.roles
            .get(role)
            .map_or(DEFAULT_ADMIN_ROLE, |data| data.admin_role)
    }

    /// Number of members holding `role`.
    #[must_use]
    pub fn member_count(&self, role: &RoleId) -> usize {
        self.roles.get(role).map_or(0, |data| data.members.len())
    }

    /// Member at `index`, if any. Order changes when members are revoked.
    #[must_use]
    pub fn member(&self, role: &RoleId, index: usize) -> Option<Address> {
        self.roles
            .get(role)
            .and_then(|data| data.members.get(index).copied())
    }

    /// All members of `role`.
    #[must_use]
    pub fn members(&self, role: &RoleId) -> &[Address] {
        self.roles
            .get(role)
            .map_or(&[][..], |data| data.members.as_slice())
    }

    /// Fails with `Unauthorized` unless `account` holds `role`.
    pub fn check_role(&self, role: &RoleId, account: &Address) -> TokenResult<()> {
        if self.has_role(role, account) {
            Ok(())
        } else {
            Err(TokenError::missing_role(*account, *role))
        }
    }

    /// Adds `account` to `role`. Returns whether membership changed.
    pub fn grant(&mut self, role: RoleId, account: Address) -> bool {
        let data = self.roles.entry(role).or_insert_with(|| RoleData {
            admin_role: DEFAULT_ADMIN_ROLE,
            members: Vec::new(),
        });
        if data.members.contains(&account) {
            return false;
        }
        data.members.push(account);
        true
    }

    /// Removes `account` from `role`. Returns whether membership changed.
    pub fn revoke(&mut self, role: &RoleId, account: &Address) -> bool {
        let Some(data) = self.roles.get_mut(role) else {
            return false;
        };
        match data.members.iter().position(|member| member == account) {
            Some(index) => {
                data.members.swap_remove(index);
                true
            }
            None => false,
        }
    }
}
