//! # Error Types
//!
//! Parsing errors for the fixed-width primitives.

use thiserror::Error;

/// Errors produced while decoding addresses and hashes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded byte length does not match the target type.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
