//! Unit classes and the class-advantage relation.
//!
//! This module implements the combat vocabulary:
//! - Six unit classes with a static directed advantage table
//! - Advantage doubles the attacker's effective strength in a pairing
//! - Tolerant class names that carry unrecognized input through unchanged
//!
//! The advantage relation is intentionally neither symmetric nor total.
//! Spearmen beat heavy cavalry while the reverse does not hold, and some
//! pairs (Militia and Cavalry Archers) hold no advantage in either
//! direction. No class has advantage over itself.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Unit Classes
// ============================================================================

/// The six combat archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    /// Irregular foot troops.
    Militia,
    /// Polearm infantry.
    Spearmen,
    /// Fast unarmored cavalry.
    LightCavalry,
    /// Armored shock cavalry.
    HeavyCavalry,
    /// Mounted archers.
    CavalryArcher,
    /// Ranged foot troops.
    FootArcher,
}

impl UnitClass {
    /// Number of known unit classes.
    pub const COUNT: usize = 6;

    /// All classes in canonical order.
    ///
    /// The interactive prompt walks this order when a battle line is
    /// shorter than the full class list.
    pub const ALL: [UnitClass; UnitClass::COUNT] = [
        UnitClass::Militia,
        UnitClass::Spearmen,
        UnitClass::LightCavalry,
        UnitClass::HeavyCavalry,
        UnitClass::CavalryArcher,
        UnitClass::FootArcher,
    ];

    /// Get the canonical name of this class, as used in the textual army
    /// form (`Spearmen#10;...`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            UnitClass::Militia => "Militia",
            UnitClass::Spearmen => "Spearmen",
            UnitClass::LightCavalry => "LightCavalry",
            UnitClass::HeavyCavalry => "HeavyCavalry",
            UnitClass::CavalryArcher => "CavalryArcher",
            UnitClass::FootArcher => "FootArcher",
        }
    }

    /// Look up a class by its exact canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        UnitClass::ALL.into_iter().find(|class| class.name() == name)
    }

    /// Check whether this class holds advantage over `defender`.
    ///
    /// An attacking platoon with advantage fights at double strength.
    /// The table is directed: `a` beating `b` says nothing about `b`
    /// against `a`.
    #[must_use]
    pub const fn has_advantage_over(self, defender: UnitClass) -> bool {
        match self {
            // Militia overwhelm unarmored opponents
            UnitClass::Militia => matches!(
                defender,
                UnitClass::Spearmen | UnitClass::LightCavalry
            ),
            // Spears are set against cavalry charges
            UnitClass::Spearmen => matches!(
                defender,
                UnitClass::LightCavalry | UnitClass::HeavyCavalry
            ),
            // Light cavalry runs down archers before they can volley
            UnitClass::LightCavalry => matches!(
                defender,
                UnitClass::FootArcher | UnitClass::CavalryArcher
            ),
            // Heavy cavalry tramples foot troops of every kind
            UnitClass::HeavyCavalry => matches!(
                defender,
                UnitClass::Militia | UnitClass::FootArcher | UnitClass::LightCavalry
            ),
            // Cavalry archers skirmish around slow formations
            UnitClass::CavalryArcher => matches!(
                defender,
                UnitClass::Spearmen | UnitClass::HeavyCavalry
            ),
            // Foot archers volley into dense, slow targets
            UnitClass::FootArcher => matches!(
                defender,
                UnitClass::Militia | UnitClass::CavalryArcher
            ),
        }
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Tolerant Class Names
// ============================================================================

/// A platoon's declared class, known or not.
///
/// Army input is accepted from outside the program, so the class slot is
/// tolerant: a name outside the six archetypes is carried through
/// unchanged and round-trips back out in the textual form, but it holds
/// advantage in neither direction. Strength comparison still applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassName {
    /// One of the six archetypes in the advantage table.
    Known(UnitClass),
    /// A name the advantage table does not list.
    Unknown(String),
}

impl ClassName {
    /// Interpret a class name, falling back to [`ClassName::Unknown`] for
    /// anything outside the table. Never fails.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match UnitClass::from_name(name) {
            Some(class) => ClassName::Known(class),
            None => ClassName::Unknown(name.to_string()),
        }
    }

    /// Get the name as it appears in the textual army form.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ClassName::Known(class) => class.name(),
            ClassName::Unknown(name) => name,
        }
    }

    /// The underlying archetype, if this name is in the table.
    #[must_use]
    pub const fn as_known(&self) -> Option<UnitClass> {
        match self {
            ClassName::Known(class) => Some(*class),
            ClassName::Unknown(_) => None,
        }
    }

    /// Check whether this class holds advantage over `defender`.
    ///
    /// Unknown classes neither grant nor suffer advantage; the lookup
    /// yields nothing rather than an error.
    #[must_use]
    pub fn has_advantage_over(&self, defender: &ClassName) -> bool {
        match (self, defender) {
            (ClassName::Known(attacker), ClassName::Known(defender)) => {
                attacker.has_advantage_over(*defender)
            }
            _ => false,
        }
    }
}

impl From<UnitClass> for ClassName {
    fn from(class: UnitClass) -> Self {
        ClassName::Known(class)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Serialized as a bare string so reports and scenario files show
// `"Spearmen"` rather than an enum wrapper, and so unknown names survive
// a round trip through either representation.
impl Serialize for ClassName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ClassName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ClassNameVisitor;

        impl Visitor<'_> for ClassNameVisitor {
            type Value = ClassName;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a unit class name string")
            }

            fn visit_str<E>(self, value: &str) -> Result<ClassName, E>
            where
                E: de::Error,
            {
                Ok(ClassName::parse(value))
            }
        }

        deserializer.deserialize_str(ClassNameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected advantage targets per class, straight from the design table.
    const EXPECTED: [(UnitClass, &[UnitClass]); 6] = [
        (
            UnitClass::Militia,
            &[UnitClass::Spearmen, UnitClass::LightCavalry],
        ),
        (
            UnitClass::Spearmen,
            &[UnitClass::LightCavalry, UnitClass::HeavyCavalry],
        ),
        (
            UnitClass::LightCavalry,
            &[UnitClass::FootArcher, UnitClass::CavalryArcher],
        ),
        (
            UnitClass::HeavyCavalry,
            &[
                UnitClass::Militia,
                UnitClass::FootArcher,
                UnitClass::LightCavalry,
            ],
        ),
        (
            UnitClass::CavalryArcher,
            &[UnitClass::Spearmen, UnitClass::HeavyCavalry],
        ),
        (
            UnitClass::FootArcher,
            &[UnitClass::Militia, UnitClass::CavalryArcher],
        ),
    ];

    #[test]
    fn test_advantage_table_exact() {
        for (attacker, targets) in EXPECTED {
            for defender in UnitClass::ALL {
                assert_eq!(
                    attacker.has_advantage_over(defender),
                    targets.contains(&defender),
                    "{attacker} vs {defender} disagrees with the design table"
                );
            }
        }
    }

    #[test]
    fn test_no_class_beats_itself() {
        for class in UnitClass::ALL {
            assert!(!class.has_advantage_over(class));
        }
    }

    #[test]
    fn test_advantage_is_not_symmetric() {
        // Spearmen beat heavy cavalry; the reverse direction does not hold.
        assert!(UnitClass::Spearmen.has_advantage_over(UnitClass::HeavyCavalry));
        assert!(!UnitClass::HeavyCavalry.has_advantage_over(UnitClass::Spearmen));

        // No pair beats each other both ways.
        for a in UnitClass::ALL {
            for b in UnitClass::ALL {
                assert!(
                    !(a.has_advantage_over(b) && b.has_advantage_over(a)),
                    "{a} and {b} hold advantage over each other"
                );
            }
        }

        // Not total either: militia and cavalry archers hold no advantage
        // in either direction.
        assert!(!UnitClass::Militia.has_advantage_over(UnitClass::CavalryArcher));
        assert!(!UnitClass::CavalryArcher.has_advantage_over(UnitClass::Militia));
    }

    #[test]
    fn test_every_class_beats_something() {
        for class in UnitClass::ALL {
            let beats = UnitClass::ALL
                .into_iter()
                .filter(|&other| class.has_advantage_over(other))
                .count();
            assert!(beats >= 2, "{class} should beat at least two classes");
        }
    }

    #[test]
    fn test_name_round_trip() {
        for class in UnitClass::ALL {
            assert_eq!(UnitClass::from_name(class.name()), Some(class));
        }
        assert_eq!(UnitClass::from_name("Catapult"), None);
        // Lookup is exact, not case-insensitive.
        assert_eq!(UnitClass::from_name("militia"), None);
    }

    #[test]
    fn test_class_name_parse() {
        assert_eq!(
            ClassName::parse("Spearmen"),
            ClassName::Known(UnitClass::Spearmen)
        );
        assert_eq!(
            ClassName::parse("WarElephant"),
            ClassName::Unknown("WarElephant".to_string())
        );
        assert_eq!(ClassName::parse("").name(), "");
    }

    #[test]
    fn test_unknown_class_has_no_advantage() {
        let elephant = ClassName::parse("WarElephant");
        for class in UnitClass::ALL {
            let known = ClassName::Known(class);
            assert!(!elephant.has_advantage_over(&known));
            assert!(!known.has_advantage_over(&elephant));
        }
        assert!(!elephant.has_advantage_over(&elephant));
    }

    #[test]
    fn test_class_name_serde_is_a_bare_string() {
        let known = ClassName::Known(UnitClass::FootArcher);
        let json = serde_json::to_string(&known).unwrap();
        assert_eq!(json, "\"FootArcher\"");
        assert_eq!(serde_json::from_str::<ClassName>(&json).unwrap(), known);

        let unknown = ClassName::Unknown("WarElephant".to_string());
        let json = serde_json::to_string(&unknown).unwrap();
        assert_eq!(json, "\"WarElephant\"");
        assert_eq!(serde_json::from_str::<ClassName>(&json).unwrap(), unknown);
    }
}
