//! Ordered battle lines and their textual form.
//!
//! An army is a sequence of platoons whose position is the pairing key:
//! slot `i` of one army duels slot `i` of the other. The textual form is
//! `;`-separated `ClassName#count` tokens, e.g.
//! `Spearmen#10;Militia#30;FootArcher#20;LightCavalry#1000;HeavyCavalry#120`.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::platoon::Platoon;

/// An ordered battle line.
///
/// Any length is accepted at construction. The battle-line arity is a
/// property of a battle, not of an army, so validation lives in
/// [`BattleSimulator`](crate::battle::BattleSimulator): an `Army` may
/// equally hold a full line, a candidate reordering of one, or malformed
/// input awaiting a size check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Army {
    platoons: Vec<Platoon>,
}

impl Army {
    /// Create an army from platoons in line order.
    #[must_use]
    pub fn new(platoons: Vec<Platoon>) -> Self {
        Self { platoons }
    }

    /// Parse the `;`-separated textual form.
    ///
    /// Tolerant and infallible: each token goes through
    /// [`Platoon::parse`], so junk counts become 0 and unrecognized class
    /// names are carried through as unknown. An empty token yields an
    /// unknown-class platoon of 0 soldiers rather than being skipped, so
    /// the platoon count always equals the separator count plus one.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self {
            platoons: input.split(';').map(Platoon::parse).collect(),
        }
    }

    /// The platoons in line order.
    #[must_use]
    pub fn platoons(&self) -> &[Platoon] {
        &self.platoons
    }

    /// Iterate over the platoons in line order.
    pub fn iter(&self) -> std::slice::Iter<'_, Platoon> {
        self.platoons.iter()
    }

    /// Number of platoons in the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.platoons.len()
    }

    /// Check whether the line is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platoons.is_empty()
    }
}

impl Index<usize> for Army {
    type Output = Platoon;

    fn index(&self, slot: usize) -> &Platoon {
        &self.platoons[slot]
    }
}

impl From<Vec<Platoon>> for Army {
    fn from(platoons: Vec<Platoon>) -> Self {
        Self::new(platoons)
    }
}

impl FromIterator<Platoon> for Army {
    fn from_iter<I: IntoIterator<Item = Platoon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Army {
    type Item = &'a Platoon;
    type IntoIter = std::slice::Iter<'a, Platoon>;

    fn into_iter(self) -> Self::IntoIter {
        self.platoons.iter()
    }
}

// Display emits the same `;`-separated token form `parse` accepts, with
// whitespace normalized away and counts printed explicitly.
impl fmt::Display for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, platoon) in self.platoons.iter().enumerate() {
            if slot > 0 {
                f.write_str(";")?;
            }
            write!(f, "{platoon}")?;
        }
        Ok(())
    }
}
