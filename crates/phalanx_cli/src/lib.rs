//! Command-line battle arranger.
//!
//! This crate wraps [`phalanx_core`] in three user-facing surfaces:
//!
//! - **Interactive mode**: prompt for both armies on stdin, print the
//!   verdict on stdout
//! - **Self-test mode**: run the canonical battle and report the verdict
//!   through the exit code, for CI
//! - **Duel mode**: evaluate explicit armies or a scenario file, with an
//!   optional machine-readable JSON report
//!
//! All logging goes to stderr; stdout carries only program output, so
//! pipelines can consume reports without filtering.

pub mod interactive;
pub mod report;
pub mod scenario;

pub use interactive::InteractiveSession;
pub use report::{verdict_code, DuelReport, EXIT_EXHAUSTED, EXIT_FOUND, EXIT_NO_VERDICT};
pub use scenario::{Scenario, ScenarioError};
