//! Derived numeric stats: Pace, Parry, Power Points, Toughness and Size.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::abilities::grants_powers;
use super::actor::Toughness;
use super::grammar::Grammar;
use super::labels::Label;
use super::sections::Sections;
use super::text::leading_int;

static TOUGHNESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+\-]?\d+)\s*(?:\(([+\-]?\d+)\))?\s*;?")
        .expect("Failed to compile toughness regex")
});

static ABILITY_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(?:sa|[aehw])?").expect("Failed to compile ability tag regex"));

/// Body of a section after its first colon.
fn after_colon(sections: &Sections, label: Label) -> Option<&str> {
    let section = sections.get(label)?;
    Some(
        section
            .text
            .split_once(':')
            .map(|(_, rest)| rest)
            .unwrap_or_else(|| section.body())
            .trim(),
    )
}

/// Leading integer of a single-number section such as "Pace: 6;".
///
/// `None` when the label is absent, `Some(0)` when present but unreadable.
pub fn number(sections: &Sections, label: Label) -> Option<i32> {
    let body = after_colon(sections, label)?;
    Some(
        leading_int(body)
            .and_then(|value| i32::try_from(value).ok())
            .unwrap_or(0),
    )
}

/// "Toughness: 7 (1)" gives value 7 with 1 armor. Anything unreadable is
/// all zero.
pub fn toughness(sections: &Sections) -> Toughness {
    let Some(body) = after_colon(sections, Label::Toughness) else {
        return Toughness::default();
    };
    let Some(caps) = TOUGHNESS_RE.captures(body) else {
        return Toughness::default();
    };

    let value = caps
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    let armor = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    Toughness {
        value,
        modifier: 0,
        armor,
    }
}

/// Size from the first special ability whose name mentions the Size word,
/// as in "Size -1" or "@sa Size +2". No such ability means size 0.
pub fn size(special_abilities: &IndexMap<String, String>, grammar: &Grammar) -> i32 {
    let size_word = grammar.label(Label::Size).to_lowercase();

    special_abilities
        .keys()
        .find(|name| name.to_lowercase().contains(&size_word))
        .map(|name| {
            let untagged = ABILITY_TAG_RE.replace(name.trim(), "");
            untagged
                .split_whitespace()
                .nth(1)
                .and_then(leading_int)
                .and_then(|value| i32::try_from(value).ok())
                .unwrap_or(0)
        })
        .unwrap_or(0)
}

/// Power Points granted by the first special ability that grants powers
/// and states a Power Points amount.
pub fn power_points_from_abilities(
    special_abilities: &IndexMap<String, String>,
    grammar: &Grammar,
) -> Option<i32> {
    special_abilities
        .values()
        .filter(|description| grants_powers(description, grammar))
        .find_map(|description| grammar.power_points_bonus.value_in(description))
}

// ============================================================================
// Tests
// ============================================================================
