//! End-to-end battle searches through the public API.
//!
//! These tests drive whole searches (parse, validate, permute, score)
//! rather than single modules, sharing fixtures and harnesses with the
//! rest of the workspace.

use phalanx_core::prelude::*;
use phalanx_test_utils::determinism::{verify_permutation_coverage, verify_search_determinism};
use phalanx_test_utils::fixtures;

// =============================================================================
// Canonical Duels
// =============================================================================

#[test]
fn test_canonical_duel_accepts_the_fielded_order() {
    let battle = fixtures::sample_battle();
    let outcome = battle.find_winning_arrangement().unwrap();

    // The attacker's input order already clears the threshold, so the
    // very first ordering examined is the one returned.
    let arrangement = outcome.arrangement().expect("duel is winnable");
    assert_eq!(arrangement.wins, 3);
    assert!(arrangement.wins >= battle.threshold());
    assert_eq!(outcome.stats.orderings_examined, 1);
    assert_eq!(&arrangement.ordering, battle.attacker());
}

#[test]
fn test_hopeless_duel_sweeps_the_full_space() {
    let battle = fixtures::hopeless_battle();
    let outcome = battle.find_winning_arrangement().unwrap();

    assert!(!outcome.is_found());
    assert_eq!(outcome.stats.orderings_examined, 120);
}

#[test]
fn test_dominant_attacker_wins_every_pairing() {
    let battle = fixtures::immediate_battle();
    let outcome = battle.find_winning_arrangement().unwrap();

    let arrangement = outcome.arrangement().expect("attacker dominates");
    assert_eq!(arrangement.wins, 5);
    assert_eq!(outcome.stats.orderings_examined, 1);
}

// =============================================================================
// Textual Tolerance
// =============================================================================

#[test]
fn test_tolerant_text_feeds_the_search() {
    // Junk counts, stray whitespace, a foreign class, and an empty token
    // all become platoons rather than errors.
    let attacker = Army::parse("Spearmen#lots; Militia # 30 ;WarElephant#5;;LightCavalry#7");
    assert_eq!(attacker.len(), 5);

    let defender = Army::parse("Militia#1;Militia#1;Militia#1;Militia#1;Militia#1");
    let battle = BattleSimulator::with_default_arity(attacker, defender);
    let outcome = battle.find_winning_arrangement().unwrap();

    // The three platoons with soldiers each beat a one-man militia line.
    let arrangement = outcome.arrangement().expect("three live platoons win");
    assert_eq!(arrangement.wins, 3);
}

#[test]
fn test_found_ordering_round_trips_through_text() {
    let battle = fixtures::sample_battle();
    let outcome = battle.find_winning_arrangement().unwrap();
    let ordering = &outcome.arrangement().expect("duel is winnable").ordering;

    let reparsed = Army::parse(&ordering.to_string());
    assert_eq!(&reparsed, ordering);
}

// =============================================================================
// Arity
// =============================================================================

#[test]
fn test_arity_is_a_simulator_parameter() {
    let attacker = Army::parse("Militia#10;Spearmen#10;FootArcher#10");
    let defender = Army::parse("Spearmen#1;Spearmen#1;Spearmen#1");

    // The same armies pass at their own arity and fail at the default.
    let sim = BattleSimulator::new(attacker.clone(), defender.clone(), 3);
    assert!(sim.validate().is_ok());
    assert!(sim.find_winning_arrangement().unwrap().is_found());

    let sim = BattleSimulator::with_default_arity(attacker, defender);
    assert_eq!(
        sim.validate(),
        Err(BattleError::ArmySize {
            expected: 5,
            attackers: 3,
            defenders: 3,
        })
    );
}

#[test]
fn test_even_arity_accepts_exactly_half() {
    // ceil(4/2) = 2: exactly half the pairings suffices at even arity.
    let attacker = Army::parse("Militia#10;Militia#10;Militia#1;Militia#1");
    let defender = Army::parse("Spearmen#1;Spearmen#1;FootArcher#1000;FootArcher#1000");

    let sim = BattleSimulator::new(attacker, defender, 4);
    assert_eq!(sim.threshold(), 2);

    let outcome = sim.find_winning_arrangement().unwrap();
    let arrangement = outcome.arrangement().expect("half the line wins");
    assert_eq!(arrangement.wins, 2);
}

// =============================================================================
// Shared Harnesses
// =============================================================================

#[test]
fn test_searches_are_reproducible() {
    verify_search_determinism(3, fixtures::sample_battle).assert_deterministic();
    verify_search_determinism(3, fixtures::hopeless_battle).assert_deterministic();
}

#[test]
fn test_permutation_coverage_at_search_sizes() {
    for len in 0..=5 {
        verify_permutation_coverage(len).assert_complete();
    }
}
