//! Attribute and skill extraction.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::actor::{Attributes, SmartsTrait, Trait};
use super::dice::Die;
use super::grammar::Grammar;
use super::labels::Label;
use super::sections::Sections;
use super::text::split_and_trim;

static ANIMAL_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(A\)").expect("Failed to compile animal marker regex"));

// ============================================================================
// Attributes
// ============================================================================

/// Extract the five attributes. Attributes missing from the section, or a
/// missing section, resolve to zero dice.
pub fn attributes(sections: &Sections, grammar: &Grammar) -> Attributes {
    let Some(body) = sections.body(Label::Attributes) else {
        return Attributes::default();
    };

    let animal = ANIMAL_MARKER_RE.is_match(body);
    let body = ANIMAL_MARKER_RE.replace_all(body, "");
    let tokens = split_and_trim(&body, ',');

    let die_for = |label: Label| -> Die {
        let name = grammar.label(label).to_lowercase();
        tokens
            .iter()
            .find(|token| token.to_lowercase().starts_with(&name))
            .map(|token| grammar.dice.parse(token))
            .unwrap_or(Die::ZERO)
    };

    Attributes {
        agility: Trait::from(die_for(Label::Agility)),
        smarts: SmartsTrait {
            die: die_for(Label::Smarts),
            animal,
        },
        spirit: Trait::from(die_for(Label::Spirit)),
        strength: Trait::from(die_for(Label::Strength)),
        vigor: Trait::from(die_for(Label::Vigor)),
    }
}

// ============================================================================
// Skills
// ============================================================================

/// Extract skills keyed by lowercased name. Entries without a die or
/// without a name are logged and skipped.
pub fn skills(sections: &Sections, grammar: &Grammar) -> IndexMap<String, Die> {
    let mut skills = IndexMap::new();
    let Some(body) = sections.body(Label::Skills) else {
        return skills;
    };

    for token in split_and_trim(body, ',') {
        let Some(found) = grammar.dice.find(&token) else {
            log::warn!("Skipping skill without a die: '{}'", token);
            continue;
        };

        let name = token[..found.span.start]
            .trim()
            .trim_end_matches([':', '.'])
            .trim()
            .replace(" )", ")")
            .to_lowercase();

        if name.is_empty() {
            log::warn!("Skipping skill without a name: '{}'", token);
            continue;
        }

        skills.insert(name, found.die);
    }

    skills
}

// ============================================================================
// Tests
// ============================================================================
