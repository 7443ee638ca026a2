//! # Phalanx Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Canonical army fixtures
//! - Search determinism harness
//! - Permutation coverage checks
//! - Advantage-table balance analysis
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod balance;
pub mod determinism;
pub mod fixtures;

/// Re-export proptest for convenience.
pub use proptest;
