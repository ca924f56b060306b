//! # Shared Types Crate
//!
//! Fixed-width primitives used by the token ledger and its collaborators.
//!
//! ## Design Principles
//!
//! - **Fixed width**: identities are exactly 20 bytes, words exactly 32 bytes.
//!   Constructing one from a slice of the wrong length is an error, never a
//!   silent truncation.
//! - **Amounts are `U256`**: the ledger stores raw base units; whole-token
//!   values are converted with [`units`].

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
