//! Gear Extraction
//!
//! Splits the Gear section into items and classifies each parenthetical as
//! weapon, shield or armor stats:
//!
//! ```text
//! Gear: Long sword (Str+d8), bow (Range 12/24/48, Damage 2d6), leather armor (+1).
//! ```
//!
//! Weapon wins over shield and shield over armor. Items without a
//! parenthetical are plain gear with no stats.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::actor::{ArmorDetail, GearDetail, ShieldDetail, WeaponDetail};
use super::grammar::Grammar;
use super::labels::Label;
use super::sections::Sections;
use super::text::has_letter;

// ============================================================================
// Regex Patterns
// ============================================================================

/// One item: a name, an optional parenthetical, an optional comma.
static GEAR_ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}0-9 .'’\-]+(?:\([^()]+\))?,?").expect("Failed to compile gear item regex")
});

/// An explicit armor modifier such as "+1".
static ARMOR_MOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+(\d+)").expect("Failed to compile armor modifier regex"));

/// Leading word of a weapon stat: "Range" in "Range 12/24/48".
static STAT_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}+").expect("Failed to compile weapon stat regex"));

// ============================================================================
// Extraction
// ============================================================================

/// Extract gear keyed by item name. Later duplicates overwrite earlier ones.
pub fn extract(sections: &Sections, grammar: &Grammar) -> IndexMap<String, Option<GearDetail>> {
    let mut gear = IndexMap::new();
    let Some(body) = sections.body(Label::Gear) else {
        return gear;
    };

    let mut tokens: Vec<&str> = GEAR_ITEM_RE
        .find_iter(body)
        .map(|m| m.as_str())
        .filter(|token| has_letter(token))
        .collect();
    if tokens.is_empty() && has_letter(body) {
        tokens.push(body);
    }

    for token in tokens {
        let (name, detail) = classify_item(token, grammar);
        if name.is_empty() {
            continue;
        }
        gear.insert(name, detail);
    }

    gear
}

/// Resolve one gear token into its name and stats.
pub fn classify_item(token: &str, grammar: &Grammar) -> (String, Option<GearDetail>) {
    let token = token.trim().trim_end_matches(',').trim();

    let Some((name, rest)) = token.split_once('(') else {
        return (clean_name(token), None);
    };
    let name = clean_name(name);
    let qualifier = rest.split(')').next().unwrap_or_default().trim();

    if grammar.weapon_marker.is_match(qualifier) {
        return (name, Some(GearDetail::Weapon(weapon(qualifier, grammar))));
    }

    let lower_name = name.to_lowercase();
    if grammar.parry_delta.is_match(qualifier)
        || lower_name.contains(&grammar.label(Label::Shield).to_lowercase())
    {
        let shield = ShieldDetail {
            parry: grammar.parry_bonus.value_in(qualifier).unwrap_or(0),
            cover: grammar.cover_bonus.value_in(qualifier).unwrap_or(0),
        };
        return (name, Some(GearDetail::Shield(shield)));
    }

    if ARMOR_MOD_RE.is_match(qualifier)
        || lower_name.contains(&grammar.label(Label::Armor).to_lowercase())
    {
        let armor_bonus = grammar
            .armor_bonus
            .value_in(qualifier)
            .or_else(|| {
                ARMOR_MOD_RE
                    .captures(qualifier)
                    .and_then(|caps| caps.get(1))
                    .and_then(|m| m.as_str().parse().ok())
            })
            .unwrap_or(0);
        return (name, Some(GearDetail::Armor(ArmorDetail { armor_bonus })));
    }

    (format!("{name} ({qualifier})"), None)
}

fn clean_name(name: &str) -> String {
    name.trim().trim_end_matches(['.', ',']).trim().to_string()
}

fn weapon(qualifier: &str, grammar: &Grammar) -> WeaponDetail {
    let str_label = grammar.label(Label::Str).to_lowercase();

    let mut detail = WeaponDetail::default();
    for part in qualifier.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if part.to_lowercase().starts_with(&str_label) {
            detail.damage = Some(part.to_string());
            continue;
        }

        if grammar.shots.is_match(part) {
            let value = grammar.shots.replace_all(part, "");
            detail.shots = Some(value.trim().trim_start_matches(':').trim().to_string());
            continue;
        }

        let Some(key) = STAT_KEY_RE.find(part) else {
            continue;
        };
        let value = part[key.end()..]
            .trim()
            .trim_start_matches(':')
            .trim()
            .to_string();

        match key.as_str().to_lowercase().as_str() {
            "damage" => detail.damage = Some(value),
            "range" => detail.range = Some(value),
            "rof" => detail.rof = Some(value),
            "ap" => detail.ap = Some(value),
            other => {
                detail.other.insert(other.to_string(), value);
            }
        }
    }

    detail
}

// ============================================================================
// Tests
// ============================================================================
