//! Atomic multi-recipient transfer.

use super::ledger::{Ledger, StagedBalances};
use crate::errors::{TokenError, TokenResult};
use shared_types::{Address, U256};

/// Validates every leg of a batch in array order against a staged view of
/// `ledger`. Returns the staged balances only if all legs succeed.
///
/// The first failing leg's error is returned and the ledger is not touched.
pub fn stage_batch(
    ledger: &Ledger,
    from: Address,
    recipients: &[Address],
    amounts: &[U256],
) -> TokenResult<StagedBalances> {
    if recipients.len() != amounts.len() {
        return Err(TokenError::LengthMismatch {
            recipients: recipients.len(),
            amounts: amounts.len(),
        });
    }

    let mut overlay = ledger.stage();
    for (to, amount) in recipients.iter().zip(amounts) {
        overlay.transfer(from, *to, *amount)?;
    }
    Ok(overlay.into_staged())
}
