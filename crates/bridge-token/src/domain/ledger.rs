//! # Ledger
//!
//! Balances, total supply and the immutable cap.
//!
//! ## Invariants
//!
//! - `sum(balances) == total_supply <= cap` after every successful call.
//! - A failed call leaves the ledger untouched: every debit and credit is
//!   staged in a [`BalanceOverlay`] and committed only once all checks pass.
//! - Zero balances are not stored.

use crate::errors::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use shared_types::{Address, U256};
use std::collections::HashMap;

/// Balance bookkeeping.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde_as(as = "Vec<(_, _)>")]
    balances: HashMap<Address, U256>,
    total_supply: U256,
    cap: U256,
}

impl Ledger {
    /// Creates an empty ledger with a fixed cap.
    #[must_use]
    pub fn new(cap: U256) -> Self {
        Self {
            balances: HashMap::new(),
            total_supply: U256::zero(),
            cap,
        }
    }

    /// Balance of `account` (zero if unknown).
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Current total supply.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Maximum total supply.
    #[must_use]
    pub fn cap(&self) -> U256 {
        self.cap
    }

    /// Accounts with a non-zero balance.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter()
    }

    /// Number of accounts with a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Starts a staged set of balance changes.
    #[must_use]
    pub fn stage(&self) -> BalanceOverlay<'_> {
        BalanceOverlay {
            ledger: self,
            staged: HashMap::new(),
        }
    }

    /// Commits staged balances produced by [`BalanceOverlay::into_staged`].
    ///
    /// Transfers never change the supply, so only balances are written.
    pub fn apply(&mut self, staged: StagedBalances) {
        for (account, balance) in staged.0 {
            self.set_balance(account, balance);
        }
    }

    /// Moves `amount` from `from` to `to`.
    pub fn transfer(&mut self, from: Address, to: Address, amount: U256) -> TokenResult<()> {
        let mut overlay = self.stage();
        overlay.transfer(from, to, amount)?;
        let staged = overlay.into_staged();
        self.apply(staged);
        Ok(())
    }

    /// Creates `amount` new units for `to`, bounded by the cap.
    pub fn mint(&mut self, to: Address, amount: U256) -> TokenResult<()> {
        if to.is_zero() {
            return Err(TokenError::InvalidReceiver(to));
        }
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        if new_supply > self.cap {
            return Err(TokenError::CapExceeded {
                cap: self.cap,
                would_be: new_supply,
            });
        }
        let new_balance = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.total_supply = new_supply;
        self.set_balance(to, new_balance);
        Ok(())
    }

    /// Destroys `amount` units held by `from`.
    pub fn burn(&mut self, from: Address, amount: U256) -> TokenResult<()> {
        if from.is_zero() {
            return Err(TokenError::InvalidSender(from));
        }
        let balance = self.balance_of(&from);
        if balance < amount {
            return Err(TokenError::InsufficientBalance {
                account: from,
                balance,
                needed: amount,
            });
        }
        let new_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(TokenError::Overflow)?;

        self.total_supply = new_supply;
        self.set_balance(from, balance - amount);
        Ok(())
    }

    fn set_balance(&mut self, account: Address, balance: U256) {
        if balance.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, balance);
        }
    }
}

/// Balances written by a [`BalanceOverlay`], ready to commit.
#[derive(Debug, Default)]
#[must_use = "staged balances do nothing until applied to the ledger"]
pub struct StagedBalances(HashMap<Address, U256>);

impl StagedBalances {
    /// Number of accounts touched.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read-through view of a ledger that records writes without applying them.
///
/// Each staged transfer sees the effect of the ones before it, so a sequence
/// of legs is validated exactly as if applied one by one.
pub struct BalanceOverlay<'a> {
    ledger: &'a Ledger,
    staged: HashMap<Address, U256>,
}

impl BalanceOverlay<'_> {
    /// Balance including staged writes.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.staged
            .get(account)
            .copied()
            .unwrap_or_else(|| self.ledger.balance_of(account))
    }

    /// Stages a transfer. On error nothing is staged for this leg.
    pub fn transfer(&mut self, from: Address, to: Address, amount: U256) -> TokenResult<()> {
        if from.is_zero() {
            return Err(TokenError::InvalidSender(from));
        }
        if to.is_zero() {
            return Err(TokenError::InvalidReceiver(to));
        }

        let from_balance = self.balance_of(&from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance {
                account: from,
                balance: from_balance,
                needed: amount,
            });
        }
        if from == to {
            return Ok(());
        }

        let to_balance = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.staged.insert(from, from_balance - amount);
        self.staged.insert(to, to_balance);
        Ok(())
    }

    /// Finishes staging.
    pub fn into_staged(self) -> StagedBalances {
        StagedBalances(self.staged)
    }
}
