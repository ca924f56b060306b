//! # Error Types
//!
//! Every rejected call surfaces exactly one [`TokenError`]. A rejected call
//! has no observable effect on storage, and no events are emitted for it.
//!
//! [`TokenError::kind`] gives the machine-checkable kind; `Display` gives the
//! human-readable reason.

use crate::domain::value_objects::{Nonce, RoleId};
use shared_types::{Address, U256};
use thiserror::Error;

/// Result alias used by every fallible token operation.
pub type TokenResult<T> = Result<T, TokenError>;

// =============================================================================
// TOKEN ERRORS
// =============================================================================

/// Errors returned by token entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Caller lacks the role (or identity) the operation requires.
    #[error("unauthorized account {account:?}: {detail}")]
    Unauthorized { account: Address, detail: String },

    /// Operation rejected because the token is paused.
    #[error("contract is paused")]
    ContractPaused,

    /// Unpause requested while the token is running.
    #[error("contract is not paused")]
    NotPaused,

    /// Debited account holds less than the requested amount.
    #[error("insufficient balance for {account:?}: balance {balance}, needed {needed}")]
    InsufficientBalance {
        account: Address,
        balance: U256,
        needed: U256,
    },

    /// Mint would push total supply above the cap.
    #[error("cap exceeded: cap {cap}, resulting supply {would_be}")]
    CapExceeded { cap: U256, would_be: U256 },

    /// Batch arrays differ in length.
    #[error("length mismatch: {recipients} recipients, {amounts} amounts")]
    LengthMismatch { recipients: usize, amounts: usize },

    /// Credited identity is not valid (the zero address).
    #[error("invalid receiver: {0:?}")]
    InvalidReceiver(Address),

    /// Debited identity is not valid (the zero address).
    #[error("invalid sender: {0:?}")]
    InvalidSender(Address),

    /// Signature is malformed or was not produced by the authorizer.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Authorization used before its `validAfter` time.
    #[error("authorization is not yet valid: now {now}, valid after {valid_after}")]
    AuthorizationNotYetValid { now: u64, valid_after: U256 },

    /// Authorization used at or after its `validBefore` time.
    #[error("authorization is expired: now {now}, valid before {valid_before}")]
    ExpiredAuthorization { now: u64, valid_before: U256 },

    /// Nonce already consumed for this authorizer.
    #[error("authorization nonce {nonce:?} already used by {authorizer:?}")]
    NonceAlreadyUsed { authorizer: Address, nonce: Nonce },

    /// Initializer already ran at or beyond the requested version.
    #[error("already initialized: stored version {current}, requested {target}")]
    AlreadyInitialized { current: u64, target: u64 },

    /// First initialization was given unusable parameters.
    #[error("invalid initialization: {0}")]
    InvalidInitialization(String),

    /// Mint or burn attempted by anyone other than the bridge.
    #[error("only bridge can mint and burn")]
    OnlyBridge { caller: Address },

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Machine-checkable failure kind, one per [`TokenError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthorized,
    ContractPaused,
    NotPaused,
    InsufficientBalance,
    CapExceeded,
    LengthMismatch,
    InvalidReceiver,
    InvalidSender,
    InvalidSignature,
    AuthorizationNotYetValid,
    ExpiredAuthorization,
    NonceAlreadyUsed,
    AlreadyInitialized,
    InvalidInitialization,
    OnlyBridge,
    Overflow,
}

impl TokenError {
    /// The failure kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::ContractPaused => ErrorKind::ContractPaused,
            Self::NotPaused => ErrorKind::NotPaused,
            Self::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            Self::CapExceeded { .. } => ErrorKind::CapExceeded,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::InvalidReceiver(_) => ErrorKind::InvalidReceiver,
            Self::InvalidSender(_) => ErrorKind::InvalidSender,
            Self::InvalidSignature(_) => ErrorKind::InvalidSignature,
            Self::AuthorizationNotYetValid { .. } => ErrorKind::AuthorizationNotYetValid,
            Self::ExpiredAuthorization { .. } => ErrorKind::ExpiredAuthorization,
            Self::NonceAlreadyUsed { .. } => ErrorKind::NonceAlreadyUsed,
            Self::AlreadyInitialized { .. } => ErrorKind::AlreadyInitialized,
            Self::InvalidInitialization(_) => ErrorKind::InvalidInitialization,
            Self::OnlyBridge { .. } => ErrorKind::OnlyBridge,
            Self::Overflow => ErrorKind::Overflow,
        }
    }

    /// Human-readable reason.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Convenience constructor for a missing-role rejection.
    #[must_use]
    pub fn missing_role(account: Address, role: RoleId) -> Self {
        Self::Unauthorized {
            account,
            detail: format!("missing role {role:?}"),
        }
    }
}

impl From<shared_crypto::CryptoError> for TokenError {
    fn from(err: shared_crypto::CryptoError) -> Self {
        Self::InvalidSignature(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
