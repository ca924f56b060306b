//! # ECDSA Signatures (secp256k1)
//!
//! Recoverable, Ethereum-compatible ECDSA signatures.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S only (EIP-2): high-S signatures are rejected on recovery and
//!   normalized on signing
//! - Signer identity is `keccak256(uncompressed_pubkey[1..])[12..]`

use crate::hashing::keccak256;
use crate::CryptoError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use shared_types::{Address, Hash};

/// Recoverable ECDSA signature in split form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl EcdsaSignature {
    /// Builds a signature from its split `(v, r, s)` parts.
    #[must_use]
    pub const fn from_vrs(v: u8, r: [u8; 32], s: [u8; 32]) -> Self {
        Self { r, s, v }
    }

    /// Decodes the 65-byte `r || s || v` wire form.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidSignatureFormat` unless `bytes` is 65 long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != 65 {
            return Err(CryptoError::InvalidSignatureFormat);
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }

    /// Encodes into the 65-byte `r || s || v` wire form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// Recover the signer's address from a signature over a 32-byte digest.
///
/// # Errors
///
/// - `InvalidRecoveryId` - v is not 0, 1, 27, or 28
/// - `InvalidSignatureFormat` - r or s is zero or not below the curve order
/// - `MalleableSignature` - s is in the upper half of the curve order
/// - `RecoveryFailed` - no public key matches
pub fn recover_address(digest: &Hash, signature: &EcdsaSignature) -> Result<Address, CryptoError> {
    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let sig = Signature::from_slice(&sig_bytes).map_err(|_| CryptoError::InvalidSignatureFormat)?;

    // normalize_s() only returns Some for high-S input
    if sig.normalize_s().is_some() {
        return Err(CryptoError::MalleableSignature);
    }

    let recovered_key = VerifyingKey::recover_from_prehash(digest.as_bytes(), &sig, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Derive the Ethereum-style address of a public key.
#[must_use]
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    // Skip the 0x04 uncompressed prefix
    let hash = keccak256(&pubkey_bytes.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash.as_bytes()[12..]);
    Address::new(address)
}

/// Parse recovery ID from v value.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(CryptoError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| CryptoError::InvalidRecoveryId(v))
}

/// secp256k1 keypair able to produce recoverable signatures.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    #[must_use]
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidPrivateKey` for a zero or out-of-range scalar.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Address controlled by this key.
    #[must_use]
    pub fn address(&self) -> Address {
        address_from_pubkey(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte digest, producing a low-S signature with `v` in {27, 28}.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::SigningFailed` if the backend rejects the digest.
    pub fn sign_digest(&self, digest: &Hash) -> Result<EcdsaSignature, CryptoError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(digest.as_bytes())
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        // Normalizing S mirrors the point, which flips the y-parity bit
        let (sig, parity) = match sig.normalize_s() {
            Some(normalized) => (normalized, recid.to_byte() ^ 1),
            None => (sig, recid.to_byte()),
        };

        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        Ok(EcdsaSignature {
            r,
            s,
            v: 27 + (parity & 1),
        })
    }
}
