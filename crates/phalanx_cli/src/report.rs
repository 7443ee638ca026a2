//! Machine-readable duel verdicts: exit codes and JSON reports.
//!
//! With `--json`, duel mode prints exactly one JSON object on stdout (one
//! line), so scripted callers read the verdict without scraping the
//! human-readable text:
//!
//! ```text
//! {"type":"found","arrangement":"...","defender":"...","wins":3,"threshold":3,"orderings_examined":1}
//! {"type":"exhausted","defender":"...","threshold":3,"orderings_examined":120}
//! {"type":"error","message":"..."}
//! ```

use phalanx_core::battle::{BattleSimulator, SearchOutcome, SearchResult};
use serde::{Deserialize, Serialize};

/// Exit code: a winning arrangement was found and re-verified.
pub const EXIT_FOUND: i32 = 0;
/// Exit code: the full search proved no winning arrangement exists.
pub const EXIT_EXHAUSTED: i32 = 1;
/// Exit code: no trustworthy verdict could be produced.
pub const EXIT_NO_VERDICT: i32 = 2;

/// Map a completed search onto the process exit code.
///
/// A found arrangement is independently re-scored before exit code 0 is
/// granted. An arrangement whose recorded win count cannot be reproduced,
/// or falls short of the threshold, yields [`EXIT_NO_VERDICT`] instead.
pub fn verdict_code(battle: &BattleSimulator, outcome: &SearchOutcome) -> i32 {
    match outcome.arrangement() {
        Some(arrangement) => {
            let rescored = battle.wins_against_defender(&arrangement.ordering);
            if rescored == arrangement.wins && rescored >= battle.threshold() {
                EXIT_FOUND
            } else {
                tracing::warn!(
                    rescored,
                    recorded = arrangement.wins,
                    threshold = battle.threshold(),
                    "Found arrangement failed its re-check"
                );
                EXIT_NO_VERDICT
            }
        }
        None => EXIT_EXHAUSTED,
    }
}

/// One-line verdict emitted by duel mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DuelReport {
    /// A winning arrangement was found.
    Found {
        /// The attacker's platoons in accepted order, textual form.
        arrangement: String,
        /// The defender's fixed order, included for independent re-scoring.
        defender: String,
        /// Pairings the arrangement wins.
        wins: usize,
        /// Wins required for acceptance.
        threshold: usize,
        /// Orderings scored before the search stopped.
        orderings_examined: u64,
    },

    /// Every ordering was scored and none reached the threshold.
    Exhausted {
        /// The defender's fixed order.
        defender: String,
        /// Wins required for acceptance.
        threshold: usize,
        /// Orderings scored, always the full factorial of the arity.
        orderings_examined: u64,
    },

    /// The duel could not produce a verdict.
    Error {
        /// Human-readable cause.
        message: String,
    },
}

impl DuelReport {
    /// Build a report from a completed search.
    pub fn from_outcome(battle: &BattleSimulator, outcome: &SearchOutcome) -> Self {
        match &outcome.result {
            SearchResult::Found(arrangement) => Self::Found {
                arrangement: arrangement.ordering.to_string(),
                defender: battle.defender().to_string(),
                wins: arrangement.wins,
                threshold: battle.threshold(),
                orderings_examined: outcome.stats.orderings_examined,
            },
            SearchResult::Exhausted => Self::Exhausted {
                defender: battle.defender().to_string(),
                threshold: battle.threshold(),
                orderings_examined: outcome.stats.orderings_examined,
            },
        }
    }

    /// Create an error report.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Serialize to JSON line (with newline).
    pub fn to_json_line(&self) -> String {
        let mut json = serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"type":"error","message":"Serialization failed: {}"}}"#,
                e
            )
        });
        json.push('\n');
        json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phalanx_test_utils::fixtures;

    #[test]
    fn test_found_report_json() {
        let battle = fixtures::sample_battle();
        let outcome = battle.find_winning_arrangement().unwrap();
        let json = DuelReport::from_outcome(&battle, &outcome).to_json_line();

        assert!(json.contains(r#""type":"found""#));
        assert!(json.contains(r#""wins":3"#));
        assert!(json.contains(r#""threshold":3"#));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_exhausted_report_json() {
        let battle = fixtures::hopeless_battle();
        let outcome = battle.find_winning_arrangement().unwrap();
        let json = DuelReport::from_outcome(&battle, &outcome).to_json_line();

        assert!(json.contains(r#""type":"exhausted""#));
        assert!(json.contains(r#""orderings_examined":120"#));
    }

    #[test]
    fn test_error_report_round_trips() {
        let json = DuelReport::error("armies must field 5 platoons").to_json_line();
        assert!(json.contains(r#""type":"error""#));

        let parsed: DuelReport = serde_json::from_str(json.trim()).unwrap();
        assert!(matches!(
            parsed,
            DuelReport::Error { message } if message == "armies must field 5 platoons"
        ));
    }

    #[test]
    fn test_exit_codes_cover_both_verdicts() {
        let battle = fixtures::sample_battle();
        let outcome = battle.find_winning_arrangement().unwrap();
        assert_eq!(verdict_code(&battle, &outcome), EXIT_FOUND);

        let hopeless = fixtures::hopeless_battle();
        let outcome = hopeless.find_winning_arrangement().unwrap();
        assert_eq!(verdict_code(&hopeless, &outcome), EXIT_EXHAUSTED);
    }

    #[test]
    fn test_untrustworthy_arrangement_is_refused() {
        use phalanx_core::battle::{Arrangement, SearchStats};

        // A fabricated outcome whose recorded win count cannot be
        // reproduced against the actual defender.
        let battle = fixtures::hopeless_battle();
        let outcome = SearchOutcome {
            result: SearchResult::Found(Arrangement {
                ordering: battle.attacker().clone(),
                wins: 5,
            }),
            stats: SearchStats::default(),
        };
        assert_eq!(verdict_code(&battle, &outcome), EXIT_NO_VERDICT);
    }
}
