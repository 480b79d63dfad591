//! Ability Map Extraction
//!
//! Special Abilities and Super Powers are name-to-description maps. In the
//! default mode entries are separated by bullet glyphs:
//!
//! ```text
//! Special Abilities: • Infravision: Halve penalties for dark. • Size -1: Small.
//! ```
//!
//! In modified mode every entry starts with `@`, optionally followed by a
//! one- or two-letter tag that tells the item builder what to create
//! (`@w` weapon, `@a` armor, `@e` edge, `@h` hindrance, `@sa` special
//! ability):
//!
//! ```text
//! Special Abilities: @w Bite: Str+d6. @sa Fear: Fear aura.
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::grammar::Grammar;
use super::labels::Label;
use super::lists;
use super::sections::Sections;
use super::text::{collapse_whitespace, has_letter};

// ============================================================================
// Ability Tags
// ============================================================================

/// The item kind a modified-mode ability name asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityTag {
    Weapon,
    Armor,
    Edge,
    Hindrance,
    SpecialAbility,
}

impl AbilityTag {
    /// Split a tagged name ("@w Bite") into its tag and the clean name.
    ///
    /// Untagged names, including bare `@Name`, return `None` with the `@`
    /// stripped.
    pub fn classify(name: &str) -> (Option<AbilityTag>, String) {
        let Some(rest) = name.trim().strip_prefix('@') else {
            return (None, name.trim().to_string());
        };

        let (prefix, clean) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let tag = match prefix.to_lowercase().as_str() {
            "w" => Some(AbilityTag::Weapon),
            "a" => Some(AbilityTag::Armor),
            "e" => Some(AbilityTag::Edge),
            "h" => Some(AbilityTag::Hindrance),
            "sa" => Some(AbilityTag::SpecialAbility),
            _ => None,
        };

        match tag {
            Some(tag) => (Some(tag), clean.trim().to_string()),
            None => (None, rest.trim().to_string()),
        }
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Special Abilities as a name-to-description map.
pub fn special_abilities(sections: &Sections, grammar: &Grammar) -> IndexMap<String, String> {
    sections
        .body(Label::SpecialAbilities)
        .map(|body| ability_map(body, grammar))
        .unwrap_or_default()
}

/// Super Powers. A body with bullets, colons or (modified mode) `@` is an
/// ability map; a plain comma list maps every power to an empty
/// description.
pub fn super_powers(sections: &Sections, grammar: &Grammar) -> IndexMap<String, String> {
    let Some(body) = sections.body(Label::SuperPowers) else {
        return IndexMap::new();
    };

    let structured = grammar.bullets.is_match(body)
        || body.contains(':')
        || (grammar.modified_abilities && body.contains('@'));

    if structured {
        ability_map(body, grammar)
    } else {
        lists::tokenize(body.trim_end_matches('.'))
            .into_iter()
            .map(|power| (power, String::new()))
            .collect()
    }
}

fn ability_map(body: &str, grammar: &Grammar) -> IndexMap<String, String> {
    let chunks: Vec<&str> = if grammar.modified_abilities {
        body.split('@').collect()
    } else {
        grammar.bullets.split(body).collect()
    };

    let mut abilities = IndexMap::new();
    for chunk in chunks.into_iter().filter(|chunk| has_letter(chunk)) {
        let (name, description) = match chunk.split_once(':') {
            Some((name, rest)) => (name.trim(), collapse_whitespace(rest)),
            None => {
                let last_word = chunk.split_whitespace().last().unwrap_or_default();
                (chunk.trim(), last_word.to_string())
            }
        };

        if name.is_empty() {
            continue;
        }

        let name = if grammar.modified_abilities {
            format!("@{name}")
        } else {
            name.to_string()
        };
        abilities.insert(name, description);
    }

    abilities
}

/// True when an ability description hands out powers, i.e. it mentions the
/// Power Points or Powers label as written.
pub fn grants_powers(description: &str, grammar: &Grammar) -> bool {
    description.contains(grammar.label(Label::PowerPoints))
        || description.contains(grammar.label(Label::Powers))
}

/// Melee damage of an ability description as a roll formula against the
/// Strength attribute: "Str + 2d8." becomes `@str+2d8`.
///
/// Whitespace and a trailing period are dropped and the phrase is
/// lowercased. `None` when the description has no Str phrase.
pub fn melee_damage(description: &str, grammar: &Grammar) -> Option<String> {
    let phrase = grammar.melee_damage.find(description)?;
    let damage: String = phrase.as_str().split_whitespace().collect();
    Some(format!("@{}", damage.trim_end_matches('.').to_lowercase()))
}

// ============================================================================
// Tests
// ============================================================================
