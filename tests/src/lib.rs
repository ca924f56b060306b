//! # Bridge Token Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Deployments, signers, signed authorizations
//! └── integration/      # Cross-crate flows
//!     ├── end_to_end.rs
//!     ├── authorization.rs
//!     ├── upgrade.rs
//!     └── concurrency.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p token-tests
//! cargo test -p token-tests integration::authorization
//! cargo bench -p token-tests
//! ```

pub mod fixtures;
