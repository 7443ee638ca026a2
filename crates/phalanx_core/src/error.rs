//! Error types for battle evaluation.

use thiserror::Error;

/// Result type alias using [`BattleError`].
pub type Result<T> = std::result::Result<T, BattleError>;

/// Top-level error type for battle evaluation.
///
/// Malformed textual input never reaches this type: army parsing is
/// tolerant (junk counts become 0, unrecognized classes are carried
/// through), which leaves army size as the one precondition the search
/// enforces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// One or both armies do not match the battle-line arity.
    #[error(
        "Army size mismatch: expected {expected} platoons per side, got {attackers} attacking and {defenders} defending"
    )]
    ArmySize {
        /// Platoons required per side.
        expected: usize,
        /// Platoons the attacker fielded.
        attackers: usize,
        /// Platoons the defender fielded.
        defenders: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_army_size_message_names_both_sides() {
        let err = BattleError::ArmySize {
            expected: 5,
            attackers: 4,
            defenders: 6,
        };
        let message = err.to_string();
        assert!(message.contains("expected 5"));
        assert!(message.contains("4 attacking"));
        assert!(message.contains("6 defending"));
    }
}
