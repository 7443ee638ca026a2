//! Battle orchestration: validation, the permutation search, and the
//! acceptance rule.
//!
//! The defender's order never changes. The search walks every ordering of
//! the attacker in a fixed enumeration order and accepts the first one
//! whose won pairings reach the majority threshold, so results are
//! reproducible run to run and the simulator can be queried repeatedly
//! without drift.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::army::Army;
use crate::error::{BattleError, Result};
use crate::permutation::Permutations;
use crate::platoon::DuelOutcome;

/// Platoons per side when no explicit arity is given.
///
/// Scenario files and the CLI can override this per battle.
pub const DEFAULT_ARITY: usize = 5;

/// Won pairings required to accept an arrangement: `ceil(arity / 2)`.
///
/// Only wins count toward the tally; a draw falls short just as a loss
/// does. With an even arity, exactly half the pairings reaches the
/// threshold.
#[must_use]
pub const fn majority_threshold(arity: usize) -> usize {
    arity.div_ceil(2)
}

// ============================================================================
// Search Results
// ============================================================================

/// Counters accumulated while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Orderings scored before the search stopped, the accepted one
    /// included.
    pub orderings_examined: u64,
}

/// A winning attacker ordering together with how it scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    /// The attacker's platoons in accepted order.
    pub ordering: Army,
    /// Pairings this ordering wins against the fixed defender.
    pub wins: usize,
}

/// What the search concluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchResult {
    /// The first ordering, in enumeration order, to reach the majority
    /// threshold.
    Found(Arrangement),
    /// Every ordering was scored and none reached the threshold. This is
    /// a conclusion, not an error: it proves the attacker has no chance.
    Exhausted,
}

impl SearchResult {
    /// Check whether a winning arrangement was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    /// The winning arrangement, if one was found.
    #[must_use]
    pub const fn arrangement(&self) -> Option<&Arrangement> {
        match self {
            SearchResult::Found(arrangement) => Some(arrangement),
            SearchResult::Exhausted => None,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Found(arrangement) => {
                write!(f, "winning arrangement: {}", arrangement.ordering)
            }
            SearchResult::Exhausted => f.write_str("no winning arrangement exists"),
        }
    }
}

/// Result of a completed search, with the work done to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// What the search concluded.
    pub result: SearchResult,
    /// Counters accumulated on the way.
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Check whether a winning arrangement was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.result.is_found()
    }

    /// The winning arrangement, if one was found.
    #[must_use]
    pub const fn arrangement(&self) -> Option<&Arrangement> {
        self.result.arrangement()
    }
}

// ============================================================================
// Battle Simulator
// ============================================================================

/// Exhaustive arranger for a single battle.
///
/// Owns both armies and the battle-line arity. All queries take `&self`:
/// a simulator holds no search state, so calling
/// [`find_winning_arrangement`](BattleSimulator::find_winning_arrangement)
/// twice performs the same search twice and returns identical outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSimulator {
    attacker: Army,
    defender: Army,
    arity: usize,
}

impl BattleSimulator {
    /// Create a simulator with an explicit battle-line arity.
    #[must_use]
    pub fn new(attacker: Army, defender: Army, arity: usize) -> Self {
        Self {
            attacker,
            defender,
            arity,
        }
    }

    /// Create a simulator with [`DEFAULT_ARITY`].
    #[must_use]
    pub fn with_default_arity(attacker: Army, defender: Army) -> Self {
        Self::new(attacker, defender, DEFAULT_ARITY)
    }

    /// The attacking army in its input order.
    #[must_use]
    pub fn attacker(&self) -> &Army {
        &self.attacker
    }

    /// The defending army in its fixed order.
    #[must_use]
    pub fn defender(&self) -> &Army {
        &self.defender
    }

    /// Platoons required per side.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Won pairings required to accept an arrangement.
    #[must_use]
    pub fn threshold(&self) -> usize {
        majority_threshold(self.arity)
    }

    /// Check that both armies field exactly `arity` platoons.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::ArmySize`] naming both actual counts when
    /// either side is off.
    pub fn validate(&self) -> Result<()> {
        if self.attacker.len() != self.arity || self.defender.len() != self.arity {
            return Err(BattleError::ArmySize {
                expected: self.arity,
                attackers: self.attacker.len(),
                defenders: self.defender.len(),
            });
        }
        Ok(())
    }

    /// Count the pairings `ordering` wins against the fixed defender.
    ///
    /// Slots are paired by position. Draws count for neither side.
    #[must_use]
    pub fn wins_against_defender(&self, ordering: &Army) -> usize {
        ordering
            .iter()
            .zip(self.defender.iter())
            .filter(|(attacker, defender)| attacker.outcome(defender) == DuelOutcome::Win)
            .count()
    }

    /// Search every ordering of the attacker for the first whose won
    /// pairings against the defender's fixed order reach the majority
    /// threshold.
    ///
    /// Orderings are generated lazily in lexicographic order of the
    /// attacker's input slots, so the search stops as soon as one is
    /// accepted. Exhausting all `arity!` orderings without an acceptance
    /// yields [`SearchResult::Exhausted`].
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::ArmySize`] if either army does not match
    /// the arity. No ordering is generated in that case.
    pub fn find_winning_arrangement(&self) -> Result<SearchOutcome> {
        self.validate()?;

        let threshold = self.threshold();
        let mut stats = SearchStats::default();

        tracing::debug!(
            arity = self.arity,
            threshold,
            "Starting arrangement search"
        );

        for ordering in Permutations::new(self.attacker.platoons()) {
            let candidate = Army::new(ordering);
            stats.orderings_examined += 1;
            let wins = self.wins_against_defender(&candidate);
            tracing::trace!(
                examined = stats.orderings_examined,
                wins,
                "Scored candidate ordering"
            );

            if wins >= threshold {
                tracing::debug!(
                    examined = stats.orderings_examined,
                    wins,
                    "Accepted arrangement"
                );
                return Ok(SearchOutcome {
                    result: SearchResult::Found(Arrangement {
                        ordering: candidate,
                        wins,
                    }),
                    stats,
                });
            }
        }

        tracing::debug!(
            examined = stats.orderings_examined,
            "Search space exhausted without an acceptable ordering"
        );
        Ok(SearchOutcome {
            result: SearchResult::Exhausted,
            stats,
        })
    }
}
