//! # Storage Invariants
//!
//! Checks that must hold after every committed call:
//!
//! | Invariant | Check |
//! |-----------|-------|
//! | Supply accounting | `sum(balances) == total_supply` |
//! | Cap | `total_supply <= cap` |
//! | Domain cache | cached separator matches a fresh computation |

use super::eip712::compute_domain_separator;
use super::storage::TokenStorage;
use shared_types::{Hash, U256};
use thiserror::Error;

/// A broken storage invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("balances sum to {sum} but total supply is {total_supply}")]
    SupplyMismatch { sum: U256, total_supply: U256 },

    #[error("balance sum overflows")]
    SumOverflow,

    #[error("total supply {total_supply} exceeds cap {cap}")]
    CapExceeded { total_supply: U256, cap: U256 },

    #[error("cached domain separator {cached:?} is stale, expected {expected:?}")]
    StaleDomainSeparator { cached: Hash, expected: Hash },
}

/// Invariant: `sum(balances) == total_supply <= cap`.
pub fn check_supply_invariants(storage: &TokenStorage) -> Result<(), InvariantViolation> {
    let ledger = &storage.ledger;
    let sum = ledger
        .holders()
        .try_fold(U256::zero(), |acc, (_, balance)| acc.checked_add(*balance))
        .ok_or(InvariantViolation::SumOverflow)?;

    if sum != ledger.total_supply() {
        return Err(InvariantViolation::SupplyMismatch {
            sum,
            total_supply: ledger.total_supply(),
        });
    }
    if ledger.total_supply() > ledger.cap() {
        return Err(InvariantViolation::CapExceeded {
            total_supply: ledger.total_supply(),
            cap: ledger.cap(),
        });
    }
    Ok(())
}

/// Invariant: the cached separator is current.
pub fn check_domain_separator(storage: &TokenStorage) -> Result<(), InvariantViolation> {
    let expected = compute_domain_separator(
        storage.eip712.name(),
        storage.eip712.version(),
        &storage.deployment,
    );
    let cached = storage.eip712.separator();
    if cached != expected {
        return Err(InvariantViolation::StaleDomainSeparator { cached, expected });
    }
    Ok(())
}

/// Runs every check.
pub fn check_storage(storage: &TokenStorage) -> Result<(), InvariantViolation> {
    check_supply_invariants(storage)?;
    check_domain_separator(storage)
}
