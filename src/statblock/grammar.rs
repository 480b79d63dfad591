//! Compiled, label-dependent patterns shared by the extractors.
//!
//! Everything that depends on the label table or parser configuration is
//! compiled once here. Fixed patterns live as `Lazy` statics in the
//! extractor that uses them.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::config::{CustomStat, ParserConfig};

use super::dice::DieNotation;
use super::error::Result;
use super::labels::{Label, LabelTable};
use super::sections::Sectionizer;

/// Glyph used when the configured bullet alternation is empty.
const DEFAULT_BULLET: &str = "•";

static DEFAULT_BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_BULLET).expect("Failed to compile bullet regex"));

// ============================================================================
// Bonus Pattern
// ============================================================================

/// Finds a signed number attached to a label, on either side:
/// "+2 Armor", "Armor +2", "Parry: -1".
#[derive(Debug, Clone)]
pub struct BonusPattern {
    pattern: Regex,
}

impl BonusPattern {
    pub fn new(label: &str) -> Result<Self> {
        let label = regex::escape(label.trim());
        let pattern = RegexBuilder::new(&format!(
            r"([+\-]?\d+)\s*{label}|{label}:?\s*([+\-]?\d+)"
        ))
        .case_insensitive(true)
        .build()?;
        Ok(Self { pattern })
    }

    /// The first bonus in `text`, if any.
    pub fn value_in(&self, text: &str) -> Option<i32> {
        let caps = self.pattern.captures(text)?;
        caps.get(1)
            .or_else(|| caps.get(2))
            .and_then(|m| m.as_str().parse().ok())
    }
}

// ============================================================================
// Grammar
// ============================================================================

/// Every pattern a parse needs, compiled for one label table and config.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub labels: LabelTable,
    pub modified_abilities: bool,
    pub custom_stats: Vec<CustomStat>,
    pub sectionizer: Sectionizer,
    pub dice: DieNotation,
    /// End of the name/biography preamble: the Attributes section literal.
    pub preamble_end: Regex,
    /// Bullet glyphs separating special abilities.
    pub bullets: Regex,
    /// A signed number next to the Parry word, marking a shield.
    pub parry_delta: Regex,
    /// Parenthetical content that marks a weapon.
    pub weapon_marker: Regex,
    /// Str-based melee damage phrase.
    pub melee_damage: Regex,
    /// The Shots word of a weapon stat, any case.
    pub shots: Regex,
    pub parry_bonus: BonusPattern,
    pub cover_bonus: BonusPattern,
    pub armor_bonus: BonusPattern,
    pub power_points_bonus: BonusPattern,
}

impl Grammar {
    pub fn new(labels: &LabelTable, config: &ParserConfig) -> Result<Self> {
        let custom: Vec<String> = config
            .custom_stats
            .iter()
            .map(|stat| stat.label.clone())
            .collect();

        let escaped = |label: Label| regex::escape(labels.get(label).trim());

        let preamble_end =
            RegexBuilder::new(&regex::escape(&labels.section_literal(Label::Attributes)))
                .case_insensitive(true)
                .build()?;
        let shots = RegexBuilder::new(&escaped(Label::Shots))
            .case_insensitive(true)
            .build()?;

        let parry = escaped(Label::Parry);
        let parry_delta = RegexBuilder::new(&format!(
            r"[+\-]\d+\s*{parry}|{parry}:?\s*[+\-]\d+"
        ))
        .case_insensitive(true)
        .build()?;

        let str_label = escaped(Label::Str);
        let weapon_marker = RegexBuilder::new(&format!(r"\b{str_label}\b|damage|range"))
            .case_insensitive(true)
            .build()?;
        let melee_damage = RegexBuilder::new(&format!(
            r"\b{str_label}\b\.?(?:\s*[+\-]\s*(?:\d*{die}\d+|\d+))?",
            die = escaped(Label::Dice),
        ))
        .case_insensitive(true)
        .build()?;

        Ok(Self {
            labels: labels.clone(),
            modified_abilities: config.use_modified_special_abilities,
            custom_stats: config.custom_stats.clone(),
            sectionizer: Sectionizer::new(labels, &custom)?,
            dice: DieNotation::new(labels.get(Label::Dice).trim())?,
            preamble_end,
            bullets: bullet_pattern(&config.bullet_delimiter),
            parry_delta,
            weapon_marker,
            melee_damage,
            shots,
            parry_bonus: BonusPattern::new(labels.get(Label::Parry))?,
            cover_bonus: BonusPattern::new(labels.get(Label::Cover))?,
            armor_bonus: BonusPattern::new(labels.get(Label::Armor))?,
            power_points_bonus: BonusPattern::new(labels.get(Label::PowerPoints))?,
        })
    }

    /// Shorthand for the label table lookup.
    pub fn label(&self, label: Label) -> &str {
        self.labels.get(label).trim()
    }
}

/// Compile the bullet alternation. Empty alternatives are dropped; if the
/// remainder is not a valid regex, each alternative is matched literally.
fn bullet_pattern(delimiter: &str) -> Regex {
    let alternatives: Vec<&str> = delimiter.split('|').filter(|alt| !alt.is_empty()).collect();
    let alternatives = if alternatives.is_empty() {
        vec![DEFAULT_BULLET]
    } else {
        alternatives
    };

    Regex::new(&alternatives.join("|")).unwrap_or_else(|err| {
        log::warn!(
            "Bullet delimiter '{}' is not a valid pattern ({}), matching it literally",
            delimiter,
            err
        );
        let literal = alternatives
            .iter()
            .map(|alt| regex::escape(alt))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&literal).unwrap_or_else(|_| DEFAULT_BULLET_RE.clone())
    })
}
