//! Label Table Module
//!
//! Maps logical statblock fields to the literal label text used by a
//! rulebook's language. Every extractor resolves labels through a
//! [`LabelTable`] rather than hardcoding English, so the grammar stays
//! language-agnostic and can be tested against synthetic label sets.
//!
//! The English table is built in. Other languages are supplied as a
//! `[labels]` table in the importer configuration, where any field left
//! out keeps its English default.

use serde::{Deserialize, Serialize};

// ============================================================================
// Types
// ============================================================================

/// Logical label identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    // Section labels
    Attributes,
    Skills,
    Hindrances,
    Edges,
    Powers,
    Pace,
    Parry,
    Toughness,
    PowerPoints,
    Gear,
    SpecialAbilities,
    SuperPowers,
    Conviction,
    // Attribute names
    Agility,
    Smarts,
    Spirit,
    Strength,
    Vigor,
    // Keywords used inside sections
    Size,
    Str,
    Shots,
    Shield,
    Armor,
    Cover,
    Dice,
}

impl Label {
    /// Labels that open a statblock section, in discovery order.
    pub const SECTIONS: [Label; 13] = [
        Label::Attributes,
        Label::Skills,
        Label::Hindrances,
        Label::Edges,
        Label::Powers,
        Label::Pace,
        Label::Parry,
        Label::Toughness,
        Label::PowerPoints,
        Label::Gear,
        Label::SpecialAbilities,
        Label::SuperPowers,
        Label::Conviction,
    ];
}

/// Localized literal for every [`Label`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelTable {
    pub attributes: String,
    pub skills: String,
    pub hindrances: String,
    pub edges: String,
    pub powers: String,
    pub pace: String,
    pub parry: String,
    pub toughness: String,
    pub power_points: String,
    pub gear: String,
    pub special_abilities: String,
    pub super_powers: String,
    pub conviction: String,
    pub agility: String,
    pub smarts: String,
    pub spirit: String,
    pub strength: String,
    pub vigor: String,
    pub size: String,
    pub str: String,
    pub shots: String,
    pub shield: String,
    pub armor: String,
    pub cover: String,
    /// Die symbol ("d" in "d8").
    pub dice: String,
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::english()
    }
}

impl LabelTable {
    /// The built-in English labels.
    pub fn english() -> Self {
        Self {
            attributes: "Attributes".into(),
            skills: "Skills".into(),
            hindrances: "Hindrances".into(),
            edges: "Edges".into(),
            powers: "Powers".into(),
            pace: "Pace".into(),
            parry: "Parry".into(),
            toughness: "Toughness".into(),
            power_points: "Power Points".into(),
            gear: "Gear".into(),
            special_abilities: "Special Abilities".into(),
            super_powers: "Super Powers".into(),
            conviction: "Conviction".into(),
            agility: "Agility".into(),
            smarts: "Smarts".into(),
            spirit: "Spirit".into(),
            strength: "Strength".into(),
            vigor: "Vigor".into(),
            size: "Size".into(),
            str: "Str".into(),
            shots: "Shots".into(),
            shield: "Shield".into(),
            armor: "Armor".into(),
            cover: "Cover".into(),
            dice: "d".into(),
        }
    }

    /// Resolve a label to its literal text.
    pub fn get(&self, label: Label) -> &str {
        match label {
            Label::Attributes => &self.attributes,
            Label::Skills => &self.skills,
            Label::Hindrances => &self.hindrances,
            Label::Edges => &self.edges,
            Label::Powers => &self.powers,
            Label::Pace => &self.pace,
            Label::Parry => &self.parry,
            Label::Toughness => &self.toughness,
            Label::PowerPoints => &self.power_points,
            Label::Gear => &self.gear,
            Label::SpecialAbilities => &self.special_abilities,
            Label::SuperPowers => &self.super_powers,
            Label::Conviction => &self.conviction,
            Label::Agility => &self.agility,
            Label::Smarts => &self.smarts,
            Label::Spirit => &self.spirit,
            Label::Strength => &self.strength,
            Label::Vigor => &self.vigor,
            Label::Size => &self.size,
            Label::Str => &self.str,
            Label::Shots => &self.shots,
            Label::Shield => &self.shield,
            Label::Armor => &self.armor,
            Label::Cover => &self.cover,
            Label::Dice => &self.dice,
        }
    }

    /// The literal that opens a section: the label followed by a colon.
    pub fn section_literal(&self, label: Label) -> String {
        format!("{}:", self.get(label).trim())
    }
}
