//! # Signed Transfer Authorization
//!
//! A signed [`TransferAuthorization`] is a one-shot capability: whoever holds
//! a valid signature from `from` may submit it, and the ledger debits `from`.
//!
//! Verification is stateless ([`verify_signer`], [`check_validity_window`]);
//! replay protection is the append-only [`NonceRegistry`].
//!
//! Window semantics: usable when `valid_after <= now < valid_before`.

use super::eip712::hash_typed_data;
use super::value_objects::Nonce;
use crate::errors::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use shared_crypto::{keccak256, keccak256_concat, recover_address, CryptoError, EcdsaSignature, Secp256k1KeyPair};
use shared_types::{u256_to_word, Address, Hash, U256};
use std::collections::{HashMap, HashSet};

/// Canonical struct type string.
pub const TRANSFER_WITH_AUTHORIZATION_TYPE: &str = "TransferWithAuthorization(address from,address to,uint256 value,uint256 validAfter,uint256 validBefore,bytes32 nonce)";

/// `keccak256(TRANSFER_WITH_AUTHORIZATION_TYPE)`.
#[must_use]
pub fn transfer_authorization_type_hash() -> Hash {
    keccak256(TRANSFER_WITH_AUTHORIZATION_TYPE.as_bytes())
}

// =============================================================================
// AUTHORIZATION MESSAGE
// =============================================================================

/// The structured message an authorizer signs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferAuthorization {
    /// Authorizer; the account debited.
    pub from: Address,
    /// Account credited.
    pub to: Address,
    /// Amount in base units.
    pub value: U256,
    /// Unix time (seconds) from which the authorization is usable.
    pub valid_after: U256,
    /// Unix time (seconds) at which the authorization expires.
    pub valid_before: U256,
    /// Signer-chosen one-time nonce.
    pub nonce: Nonce,
}

impl TransferAuthorization {
    /// `hashStruct` of the message.
    #[must_use]
    pub fn struct_hash(&self) -> Hash {
        keccak256_concat(&[
            transfer_authorization_type_hash().as_bytes(),
            &self.from.to_word(),
            &self.to.to_word(),
            &u256_to_word(self.value),
            &u256_to_word(self.valid_after),
            &u256_to_word(self.valid_before),
            self.nonce.as_bytes(),
        ])
    }

    /// Digest the authorizer signs under `domain_separator`.
    #[must_use]
    pub fn signing_digest(&self, domain_separator: &Hash) -> Hash {
        hash_typed_data(domain_separator, &self.struct_hash())
    }

    /// Signs the message with `key`.
    pub fn sign(
        &self,
        key: &Secp256k1KeyPair,
        domain_separator: &Hash,
    ) -> Result<EcdsaSignature, CryptoError> {
        key.sign_digest(&self.signing_digest(domain_separator))
    }
}

/// Fails with `InvalidSignature` unless `signature` was made by `auth.from`.
pub fn verify_signer(
    auth: &TransferAuthorization,
    signature: &EcdsaSignature,
    domain_separator: &Hash,
) -> TokenResult<()> {
    let digest = auth.signing_digest(domain_separator);
    let signer = recover_address(&digest, signature)?;
    if signer != auth.from {
        return Err(TokenError::InvalidSignature(format!(
            "signer {signer:?} is not authorizer {:?}",
            auth.from
        )));
    }
    Ok(())
}

/// Checks `valid_after <= now < valid_before`.
pub fn check_validity_window(auth: &TransferAuthorization, now: u64) -> TokenResult<()> {
    let current = U256::from(now);
    if current < auth.valid_after {
        return Err(TokenError::AuthorizationNotYetValid {
            now,
            valid_after: auth.valid_after,
        });
    }
    if current >= auth.valid_before {
        return Err(TokenError::ExpiredAuthorization {
            now,
            valid_before: auth.valid_before,
        });
    }
    Ok(())
}

// =============================================================================
// NONCE REGISTRY
// =============================================================================

/// Per-authorizer consumed nonces. Entries are never removed.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceRegistry {
    #[serde_as(as = "Vec<(_, _)>")]
    used: HashMap<Address, HashSet<Nonce>>,
}

impl NonceRegistry {
    /// Whether `nonce` was consumed for `authorizer`.
    #[must_use]
    pub fn is_used(&self, authorizer: &Address, nonce: &Nonce) -> bool {
        self.used
            .get(authorizer)
            .is_some_and(|nonces| nonces.contains(nonce))
    }

    /// Fails with `NonceAlreadyUsed` if consumed.
    pub fn ensure_unused(&self, authorizer: &Address, nonce: &Nonce) -> TokenResult<()> {
        if self.is_used(authorizer, nonce) {
            return Err(TokenError::NonceAlreadyUsed {
                authorizer: *authorizer,
                nonce: *nonce,
            });
        }
        Ok(())
    }

    /// Marks `nonce` consumed. Returns `false` if it already was.
    pub fn consume(&mut self, authorizer: Address, nonce: Nonce) -> bool {
        self.used.entry(authorizer).or_default().insert(nonce)
    }

    /// Total nonces consumed across all authorizers.
    #[must_use]
    pub fn consumed_count(&self) -> usize {
        self.used.values().map(HashSet::len).sum()
    }
}
