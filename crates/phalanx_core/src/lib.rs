//! # Phalanx Core
//!
//! Deterministic battle-arrangement core for Phalanx.
//!
//! Two armies of `n` platoons face each other position by position: the
//! platoon at slot `i` on one side duels the platoon at slot `i` on the
//! other. The defender's order is fixed; the question the core answers is
//! whether the attacker can be reordered to win a majority of the `n`
//! pairings, and if so, in which order.
//!
//! This crate contains **only** deterministic logic:
//! - No IO
//! - No system randomness
//! - No floating-point math
//!
//! This separation enables:
//! - Headless CLI builds
//! - Reproducible search results (same inputs, same arrangement)
//! - Exhaustive property testing
//!
//! ## Crate Structure
//!
//! - [`class`] - unit classes and the advantage relation
//! - [`platoon`] - platoons and duel scoring
//! - [`army`] - ordered battle lines and their textual form
//! - [`permutation`] - lazy enumeration of orderings
//! - [`battle`] - validation, search loop, acceptance rule

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod army;
pub mod battle;
pub mod class;
pub mod error;
pub mod permutation;
pub mod platoon;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::army::Army;
    pub use crate::battle::{
        majority_threshold, Arrangement, BattleSimulator, SearchOutcome, SearchResult,
        SearchStats, DEFAULT_ARITY,
    };
    pub use crate::class::{ClassName, UnitClass};
    pub use crate::error::{BattleError, Result};
    pub use crate::permutation::{factorial, Permutations};
    pub use crate::platoon::{DuelOutcome, Platoon};
}
