//! Test fixtures and helpers.
//!
//! Pre-built armies and battles for consistent testing across crates.

use phalanx_core::prelude::*;

/// The canonical winnable attacker, in its original input order.
///
/// Paired with [`sample_defender`], at least one of the 120 orderings
/// wins three of the five pairings.
#[must_use]
pub fn sample_attacker() -> Army {
    Army::parse("Spearmen#10;Militia#30;FootArcher#20;LightCavalry#1000;HeavyCavalry#120")
}

/// The canonical defender, in its fixed order.
#[must_use]
pub fn sample_defender() -> Army {
    Army::parse("Militia#10;Spearmen#10;FootArcher#1000;LightCavalry#120;CavalryArcher#100")
}

/// The canonical winnable battle at the default arity.
#[must_use]
pub fn sample_battle() -> BattleSimulator {
    BattleSimulator::with_default_arity(sample_attacker(), sample_defender())
}

/// A battle no ordering can win: five one-man militia platoons against
/// overwhelming numbers of classes militia hold no advantage over.
///
/// Searching it always sweeps all 120 orderings.
#[must_use]
pub fn hopeless_battle() -> BattleSimulator {
    let attacker = line(UnitClass::Militia, 1, DEFAULT_ARITY);
    let defender = Army::parse(
        "FootArcher#1000000;HeavyCavalry#1000000;CavalryArcher#1000000;FootArcher#1000000;Militia#1000000",
    );
    BattleSimulator::with_default_arity(attacker, defender)
}

/// A battle accepted at the very first ordering examined: the attacker
/// wins every pairing exactly as fielded.
#[must_use]
pub fn immediate_battle() -> BattleSimulator {
    let attacker =
        Army::parse("Spearmen#100;Militia#100;FootArcher#100;LightCavalry#100;HeavyCavalry#100");
    let defender =
        Army::parse("HeavyCavalry#150;Spearmen#50;CavalryArcher#50;FootArcher#50;Militia#50");
    BattleSimulator::with_default_arity(attacker, defender)
}

/// Build a uniform battle line: `len` platoons of the same class and
/// head count.
#[must_use]
pub fn line(class: UnitClass, soldiers: u32, len: usize) -> Army {
    (0..len).map(|_| Platoon::new(class, soldiers)).collect()
}
