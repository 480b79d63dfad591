//! Registered custom stats ("Sanity: 4", "Strain: d6").

use indexmap::IndexMap;

use crate::config::StatType;

use super::actor::CustomStatValue;
use super::grammar::Grammar;
use super::sections::Sections;
use super::text::leading_int;

/// Coerce every registered stat found in the statblock. Stats without a
/// section are left out.
pub fn extract(sections: &Sections, grammar: &Grammar) -> IndexMap<String, CustomStatValue> {
    let mut stats = IndexMap::new();

    for stat in &grammar.custom_stats {
        let Some(section) = sections.custom(&stat.label) else {
            continue;
        };

        let raw = section
            .text
            .split_once(':')
            .map(|(_, rest)| rest)
            .unwrap_or_default()
            .replace(';', "");
        let raw = raw.trim();

        let value = match stat.dtype {
            StatType::String => CustomStatValue::Text(raw.to_string()),
            StatType::Number => CustomStatValue::Number(leading_int(raw).unwrap_or(0)),
            StatType::Die => CustomStatValue::Die(grammar.dice.parse(raw)),
        };
        stats.insert(stat.label.clone(), value);
    }

    stats
}
