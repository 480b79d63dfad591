//! Test Fixtures
//!
//! Statblock texts and parser constructors shared by the in-crate tests.

use crate::config::{CustomStat, ParserConfig, StatType};
use crate::statblock::labels::LabelTable;
use crate::statblock::parser::StatBlockParser;

// =============================================================================
// Statblock Texts
// =============================================================================

/// A complete statblock touching every section, plus three custom stats.
pub const TEST_NPC: &str = "Test NPC
A test NPC for integration testing. He is just a random thing cobbled
together to test the parser.
Attributes: Agility d8, Smarts d6, Spirit d6, Strength d8+2, Vigor d6
Skills: Fighting d8, Shooting d6, Notice d6
Pace: 6; Parry: 6; Toughness: 7 (1)
Edges: Alertness, Quick
Hindrances: Arrogant, Evil Bastard
Powers: Bolt (2d6). Power Points: 10
Gear: Long sword (Str+d8), bow (Range
12/24/48, Damage 2d6), leather armor (+1).
num Stat: 99
text Stat: some text for testing
die Stat: d6+5
Special Abilities: • Infravision: Halve penalties for
Illumination when attacking warm
targets. • Size −1: Goblins are the size of small
children.";

// =============================================================================
// Parser Fixtures
// =============================================================================

/// The custom stats `TEST_NPC` carries.
pub fn test_custom_stats() -> Vec<CustomStat> {
    vec![
        CustomStat::new("num Stat", StatType::Number),
        CustomStat::new("text Stat", StatType::String),
        CustomStat::new("die Stat", StatType::Die),
    ]
}

/// English parser with the given config.
pub fn create_parser(config: ParserConfig) -> StatBlockParser {
    StatBlockParser::new(&LabelTable::english(), &config).expect("Failed to build parser")
}

/// English parser that knows the `TEST_NPC` custom stats.
pub fn create_test_parser() -> StatBlockParser {
    create_parser(ParserConfig {
        custom_stats: test_custom_stats(),
        ..Default::default()
    })
}
