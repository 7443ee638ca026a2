//! Determinism testing utilities.
//!
//! Provides harnesses for verifying that the arrangement search produces
//! identical results given identical inputs.
//!
//! # Testing Strategy
//!
//! The search promises that the first accepted ordering is reproducible
//! run to run. Sources of non-determinism to guard against include:
//!
//! - **Enumeration order**: the permutation iterator must replay the
//!   identical sequence every time it is constructed.
//! - **HashMap iteration order**: Rust's default hasher is randomized.
//!   Nothing on the search path may iterate a hash map.
//! - **Hidden state**: a simulator queried twice must not drift.
//!
//! # Test Levels
//!
//! 1. **Unit tests**: individual pieces (iterator replay, scoring)
//! 2. **Property tests**: random armies must still search deterministically
//! 3. **Coverage tests**: the iterator visits the whole n! population

use std::collections::BTreeSet;

use phalanx_core::prelude::*;

// ============================================================================
// Repeated-search agreement
// ============================================================================

/// Result of a repeated-search determinism check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAgreement {
    /// Whether all runs produced identical outcomes.
    pub is_deterministic: bool,
    /// Outcome from each run.
    pub outcomes: Vec<SearchOutcome>,
}

impl SearchAgreement {
    /// Assert that all searches agreed, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if any two runs produced different outcomes.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic {
            panic!(
                "Search is non-deterministic!\n\
                 Runs: {}\n\
                 Outcomes: {:#?}",
                self.outcomes.len(),
                self.outcomes
            );
        }
    }
}

/// Run the same search `runs` times on freshly built simulators and
/// compare the outcomes.
///
/// # Panics
///
/// Panics if `setup` builds a simulator that fails validation; harness
/// callers are expected to supply well-formed battles.
///
/// # Example
///
/// ```
/// use phalanx_test_utils::determinism::verify_search_determinism;
/// use phalanx_test_utils::fixtures;
///
/// let agreement = verify_search_determinism(3, fixtures::sample_battle);
/// agreement.assert_deterministic();
/// ```
pub fn verify_search_determinism<Setup>(runs: usize, setup: Setup) -> SearchAgreement
where
    Setup: Fn() -> BattleSimulator,
{
    let mut outcomes = Vec::with_capacity(runs);
    for _ in 0..runs {
        let outcome = setup()
            .find_winning_arrangement()
            .expect("harness battles must pass validation");
        outcomes.push(outcome);
    }

    let is_deterministic = outcomes.windows(2).all(|w| w[0] == w[1]);

    SearchAgreement {
        is_deterministic,
        outcomes,
    }
}

// ============================================================================
// Permutation coverage
// ============================================================================

/// Result of a permutation-coverage check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageResult {
    /// Orderings the iterator should produce.
    pub expected: u64,
    /// Orderings it actually produced.
    pub produced: u64,
    /// Distinct orderings among those produced.
    pub distinct: u64,
}

impl CoverageResult {
    /// Check that the full population was produced with no repeats.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.produced == self.expected && self.distinct == self.expected
    }

    /// Assert completeness with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if the enumeration skipped or repeated any ordering.
    pub fn assert_complete(&self) {
        if !self.is_complete() {
            panic!(
                "Permutation enumeration is incomplete!\n\
                 Expected: {}\n\
                 Produced: {}\n\
                 Distinct: {}",
                self.expected, self.produced, self.distinct
            );
        }
    }
}

/// Drain a fresh ordering iterator over `0..len` and tally coverage.
///
/// This materializes every ordering, so keep `len` small; coverage at
/// small lengths plus lazy-state unit tests covers the general case.
///
/// # Panics
///
/// Panics if `len!` does not fit in a `u64`.
#[must_use]
pub fn verify_permutation_coverage(len: usize) -> CoverageResult {
    let items: Vec<usize> = (0..len).collect();
    let mut produced = 0u64;
    let mut seen: BTreeSet<Vec<usize>> = BTreeSet::new();

    for ordering in Permutations::new(&items) {
        produced += 1;
        seen.insert(ordering);
    }

    CoverageResult {
        expected: factorial(len).expect("coverage checks use small lengths"),
        produced,
        distinct: seen.len() as u64,
    }
}

// ============================================================================
// Proptest strategies
// ============================================================================

/// Proptest strategies for battle inputs.
///
/// These generate random but reproducible armies for property-based
/// testing of the search.
pub mod strategies {
    use phalanx_core::prelude::*;
    use proptest::prelude::*;

    /// Generate one of the six known unit classes.
    pub fn arb_unit_class() -> impl Strategy<Value = UnitClass> {
        (0..UnitClass::COUNT).prop_map(|slot| UnitClass::ALL[slot])
    }

    /// Generate a class name outside the known roster.
    ///
    /// Restricted to one capital plus lowercase letters so the name
    /// survives the textual army form unchanged.
    pub fn arb_foreign_name() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{2,8}".prop_filter("name must not collide with a known class", |name| {
            UnitClass::from_name(name).is_none()
        })
    }

    /// Generate a class name, mostly known with the occasional foreigner.
    pub fn arb_class_name() -> impl Strategy<Value = ClassName> {
        prop_oneof![
            4 => arb_unit_class().prop_map(ClassName::from),
            1 => arb_foreign_name().prop_map(ClassName::Unknown),
        ]
    }

    /// Generate a platoon with a bounded head count.
    pub fn arb_platoon(max_soldiers: u32) -> impl Strategy<Value = Platoon> {
        (arb_class_name(), 0..=max_soldiers)
            .prop_map(|(class, soldiers)| Platoon::new(class, soldiers))
    }

    /// Generate an army of exactly `len` platoons.
    pub fn arb_army(len: usize, max_soldiers: u32) -> impl Strategy<Value = Army> {
        proptest::collection::vec(arb_platoon(max_soldiers), len).prop_map(Army::new)
    }

    /// Generate a well-formed battle at the given arity.
    pub fn arb_battle(arity: usize, max_soldiers: u32) -> impl Strategy<Value = BattleSimulator> {
        (arb_army(arity, max_soldiers), arb_army(arity, max_soldiers))
            .prop_map(move |(attacker, defender)| BattleSimulator::new(attacker, defender, arity))
    }
}
