//! Advantage-table balance analysis.
//!
//! Tools for inspecting the class-advantage graph as a whole: which
//! classes counter which, how many counters each class holds, and how
//! many it suffers. Balance tests use these to pin the shape of the
//! table without restating every edge.

use phalanx_core::class::UnitClass;

/// One directed edge of the advantage graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvantageEdge {
    /// Class holding the advantage.
    pub attacker: UnitClass,
    /// Class suffering it.
    pub defender: UnitClass,
}

/// Per-class tally of advantage edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassBalance {
    /// The class being tallied.
    pub class: UnitClass,
    /// Classes this one holds advantage over (out-degree).
    pub beats: usize,
    /// Classes holding advantage over this one (in-degree).
    pub beaten_by: usize,
}

impl ClassBalance {
    /// Check that the class both counters something and is countered by
    /// something; a class failing either is degenerate.
    #[must_use]
    pub fn participates(&self) -> bool {
        self.beats > 0 && self.beaten_by > 0
    }
}

/// Enumerate every directed advantage edge, attacker-major in canonical
/// class order.
#[must_use]
pub fn advantage_edges() -> Vec<AdvantageEdge> {
    let mut edges = Vec::new();
    for attacker in UnitClass::ALL {
        for defender in UnitClass::ALL {
            if attacker.has_advantage_over(defender) {
                edges.push(AdvantageEdge { attacker, defender });
            }
        }
    }
    edges
}

/// Tally out-degree and in-degree for every class, in canonical order.
#[must_use]
pub fn class_balance() -> Vec<ClassBalance> {
    UnitClass::ALL
        .into_iter()
        .map(|class| ClassBalance {
            class,
            beats: UnitClass::ALL
                .into_iter()
                .filter(|&other| class.has_advantage_over(other))
                .count(),
            beaten_by: UnitClass::ALL
                .into_iter()
                .filter(|&other| other.has_advantage_over(class))
                .count(),
        })
        .collect()
}
