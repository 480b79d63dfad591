//! Parsed actor record.
//!
//! The output of a statblock parse. Serializes to camelCase JSON with
//! custom stats flattened into the top level, matching what actor builders
//! consume.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::dice::Die;

// ============================================================================
// Types
// ============================================================================

/// A trait rolled with a single die.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub die: Die,
}

impl From<Die> for Trait {
    fn from(die: Die) -> Self {
        Self { die }
    }
}

/// Smarts carries an extra flag for animal intelligence ("d6 (A)").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartsTrait {
    pub die: Die,
    pub animal: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub agility: Trait,
    pub smarts: SmartsTrait,
    pub spirit: Trait,
    pub strength: Trait,
    pub vigor: Trait,
}

/// Toughness as printed: "7 (1)" is value 7 including 1 point of armor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toughness {
    pub value: i32,
    pub modifier: i32,
    pub armor: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rof: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<String>,
    /// Any other "Key value" pair from the parenthetical, key lowercased.
    #[serde(flatten)]
    pub other: IndexMap<String, String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArmorDetail {
    pub armor_bonus: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShieldDetail {
    pub parry: i32,
    pub cover: i32,
}

/// Classified equipment stats. Variant order is the deserialization
/// priority: the strict shapes go first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GearDetail {
    Armor(ArmorDetail),
    Shield(ShieldDetail),
    Weapon(WeaponDetail),
}

/// Value of a registered custom stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomStatValue {
    Number(i64),
    Die(Die),
    Text(String),
}

/// Structured result of parsing one statblock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedActor {
    pub name: String,
    pub biography: Option<String>,
    pub attributes: Attributes,
    /// Lowercased skill name to die.
    pub skills: IndexMap<String, Die>,
    /// `None` when the statblock has no Pace line.
    pub pace: Option<i32>,
    pub parry: Option<i32>,
    pub toughness: Toughness,
    pub power_points: Option<i32>,
    pub hindrances: Vec<String>,
    pub edges: Vec<String>,
    pub powers: Vec<String>,
    pub special_abilities: IndexMap<String, String>,
    pub super_powers: IndexMap<String, String>,
    /// Item name to stats; `None` for plain gear.
    pub gear: IndexMap<String, Option<GearDetail>>,
    pub size: i32,
    #[serde(flatten)]
    pub custom_stats: IndexMap<String, CustomStatValue>,
}

impl ParsedActor {
    /// Expand a `"Guard | Guard Captain"` style name into one actor per
    /// name. Names without `|` yield a single copy.
    pub fn named_copies(&self) -> Vec<ParsedActor> {
        if !self.name.contains('|') {
            return vec![self.clone()];
        }

        self.name
            .split('|')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| ParsedActor {
                name: name.to_string(),
                ..self.clone()
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
