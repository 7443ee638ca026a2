//! Scenario loading and configuration.
//!
//! Scenarios pin down a duel as data: both armies in marching order and
//! the number of platoons each side must field. A scenario file lets CI
//! runs and bug reports replay the exact same battle.

use std::path::Path;

use phalanx_core::army::Army;
use phalanx_core::battle::{BattleSimulator, DEFAULT_ARITY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for scenario operations.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// File not found.
    #[error("Scenario file not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] ron::error::SpannedError),
}

fn default_arity() -> usize {
    DEFAULT_ARITY
}

/// A complete duel configuration.
///
/// Armies are stored in their textual form so scenario files stay
/// hand-editable; parsing happens in [`Scenario::to_battle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Attacking army, e.g. `"Spearmen#10;Militia#30;..."`.
    pub attacker: String,
    /// Defending army in its fixed order.
    pub defender: String,
    /// Platoons each side must field. Defaults to [`DEFAULT_ARITY`].
    #[serde(default = "default_arity")]
    pub arity: usize,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::sample_duel()
    }
}

impl Scenario {
    /// Load a scenario from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScenarioError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let scenario: Scenario = ron::from_str(&contents)?;
        Ok(scenario)
    }

    /// Load from a RON string (useful for embedded scenarios).
    pub fn from_ron_str(ron: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = ron::from_str(ron)?;
        Ok(scenario)
    }

    /// The standard self-test duel.
    ///
    /// Winnable at exactly the majority threshold: the attacker's input
    /// order already takes three of the five pairings, with a draw at the
    /// spear slot and a loss against the massed foot archers.
    #[must_use]
    pub fn sample_duel() -> Self {
        Self {
            name: "Standard Duel".to_string(),
            description: "Canonical five-platoon matchup for self-tests".to_string(),
            attacker: "Spearmen#10;Militia#30;FootArcher#20;LightCavalry#1000;HeavyCavalry#120"
                .to_string(),
            defender: "Militia#10;Spearmen#10;FootArcher#1000;LightCavalry#120;CavalryArcher#100"
                .to_string(),
            arity: DEFAULT_ARITY,
        }
    }

    /// Build the battle this scenario describes.
    ///
    /// Army parsing is tolerant and never fails; size validation is left
    /// to the search itself.
    #[must_use]
    pub fn to_battle(&self) -> BattleSimulator {
        BattleSimulator::new(
            Army::parse(&self.attacker),
            Army::parse(&self.defender),
            self.arity,
        )
    }
}
