//! Crypto error types.

use thiserror::Error;

/// Failures while hashing, signing or recovering signers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Wrong length, or r/s zero or not below the curve order
    #[error("malformed signature encoding")]
    InvalidSignatureFormat,

    /// s in the upper half of the curve order (EIP-2)
    #[error("non-canonical signature: high S value")]
    MalleableSignature,

    /// v outside {0, 1, 27, 28}
    #[error("unsupported recovery id v={0}")]
    InvalidRecoveryId(u8),

    /// No public key recovers from this digest and signature
    #[error("signer recovery failed")]
    RecoveryFailed,

    /// Secret scalar is zero or not below the curve order
    #[error("secret key out of range")]
    InvalidPrivateKey,

    /// Backend refused to sign
    #[error("signing failed: {0}")]
    SigningFailed(String),
}
