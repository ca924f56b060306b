//! # Keccak-256 Hashing
//!
//! The hash used for typed-data digests, role identifiers, and address
//! derivation.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Hash data with Keccak-256 (one-shot).
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    Hash::new(hasher.finalize().into())
}

/// Hash the concatenation of several inputs without allocating.
#[must_use]
pub fn keccak256_concat(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for input in inputs {
        hasher.update(input);
    }
    Hash::new(hasher.finalize().into())
}
