//! # Shared Crypto
//!
//! Cryptographic primitives needed by the signed-authorization path.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | Typed-data hashing, role ids, address derivation |
//! | `ecdsa` | secp256k1 | Signer recovery for delegated transfers |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S only (EIP-2)
//! - **Recovery ids**: both `{0, 1}` and `{27, 28}` are accepted

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{address_from_pubkey, recover_address, EcdsaSignature, Secp256k1KeyPair};
pub use errors::CryptoError;
pub use hashing::{keccak256, keccak256_concat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
