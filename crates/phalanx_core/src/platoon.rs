//! Platoons and duel scoring.
//!
//! A platoon is one slot of a battle line: a class name plus a head count.
//! Two platoons paired by position fight a duel scored on effective
//! strength, where class advantage doubles the attacker's count.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::class::ClassName;

/// Strength multiplier applied when the attacking class holds advantage.
pub const ADVANTAGE_MULTIPLIER: u64 = 2;

/// Outcome of a single positional pairing, from the attacker's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuelOutcome {
    /// Effective strength strictly exceeds the opposing head count.
    Win,
    /// Strengths are exactly equal. Draws do not count toward a majority.
    Draw,
    /// Effective strength falls short.
    Loss,
}

/// A single unit-class group with a soldier count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platoon {
    /// Declared class of the platoon.
    pub class: ClassName,
    /// Head count. Zero is legal; such a platoon can draw against another
    /// empty platoon but never win.
    pub soldiers: u32,
}

impl Platoon {
    /// Create a new platoon.
    #[must_use]
    pub fn new(class: impl Into<ClassName>, soldiers: u32) -> Self {
        Self {
            class: class.into(),
            soldiers,
        }
    }

    /// Parse one `ClassName#count` token of the textual army form.
    ///
    /// Tolerant and infallible:
    /// - both sides of the `#` are trimmed
    /// - a missing, non-numeric, or out-of-range count becomes 0
    /// - an unrecognized class name is kept as [`ClassName::Unknown`]
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let (name, count) = match token.split_once('#') {
            Some((name, count)) => (name, count),
            None => (token, ""),
        };
        Self {
            class: ClassName::parse(name.trim()),
            soldiers: count.trim().parse().unwrap_or(0),
        }
    }

    /// Effective strength of this platoon when attacking `opponent`.
    ///
    /// Doubles the head count when this platoon's class holds advantage
    /// over the opponent's. Only the attacker's side of the table applies
    /// here; an advantage the opponent holds shows up when the pairing is
    /// scored from the other army's perspective, never as a discount in
    /// this one.
    #[must_use]
    pub fn effective_strength(&self, opponent: &Platoon) -> u64 {
        let soldiers = u64::from(self.soldiers);
        if self.class.has_advantage_over(&opponent.class) {
            soldiers * ADVANTAGE_MULTIPLIER
        } else {
            soldiers
        }
    }

    /// Score this platoon's duel against `opponent`.
    ///
    /// Compares this side's effective strength against the opponent's raw
    /// head count. Strictly greater wins, exactly equal draws.
    #[must_use]
    pub fn outcome(&self, opponent: &Platoon) -> DuelOutcome {
        let strength = self.effective_strength(opponent);
        match strength.cmp(&u64::from(opponent.soldiers)) {
            Ordering::Greater => DuelOutcome::Win,
            Ordering::Equal => DuelOutcome::Draw,
            Ordering::Less => DuelOutcome::Loss,
        }
    }
}

impl fmt::Display for Platoon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class, self.soldiers)
    }
}
