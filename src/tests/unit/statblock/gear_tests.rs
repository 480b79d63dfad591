//! Gear Classification Tests
//!
//! Table-driven cases for the weapon / shield / armor / plain gear split.

use rstest::rstest;

use crate::config::ParserConfig;
use crate::statblock::actor::{ArmorDetail, GearDetail, ShieldDetail, WeaponDetail};
use crate::statblock::gear::classify_item;
use crate::statblock::grammar::Grammar;
use crate::statblock::labels::LabelTable;
use crate::tests::common::create_parser;

fn grammar() -> Grammar {
    Grammar::new(&LabelTable::english(), &ParserConfig::default()).unwrap()
}

fn weapon(damage: &str) -> Option<GearDetail> {
    Some(GearDetail::Weapon(WeaponDetail {
        damage: Some(damage.to_string()),
        ..Default::default()
    }))
}

// ============================================================================
// Single Items
// ============================================================================

#[rstest]
#[case("Great Axe (Str+d10, -1 Parry, 2 hands)", "Great Axe", weapon("Str+d10"))]
#[case("Dagger (Str+d4)", "Dagger", weapon("Str+d4"))]
#[case("Club (str+d6).", "Club", weapon("str+d6"))]
#[case(
    "Leather Armor (+2 Armor)",
    "Leather Armor",
    Some(GearDetail::Armor(ArmorDetail { armor_bonus: 2 }))
)]
#[case(
    "Chain mail (+3)",
    "Chain mail",
    Some(GearDetail::Armor(ArmorDetail { armor_bonus: 3 }))
)]
#[case(
    "Plate armor (heavy)",
    "Plate armor",
    Some(GearDetail::Armor(ArmorDetail { armor_bonus: 0 }))
)]
#[case(
    "Wooden Shield (+2 Cover, -1 Parry)",
    "Wooden Shield",
    Some(GearDetail::Shield(ShieldDetail { parry: -1, cover: 2 }))
)]
#[case(
    "Buckler (+1 Parry)",
    "Buckler",
    Some(GearDetail::Shield(ShieldDetail { parry: 1, cover: 0 }))
)]
#[case("Rope", "Rope", None)]
#[case("Rope.", "Rope", None)]
#[case("Lantern (oil)", "Lantern (oil)", None)]
fn test_classify_item(
    #[case] token: &str,
    #[case] expected_name: &str,
    #[case] expected: Option<GearDetail>,
) {
    let (name, detail) = classify_item(token, &grammar());
    assert_eq!(name, expected_name);
    assert_eq!(detail, expected);
}

// ============================================================================
// Whole Gear Lines
// ============================================================================

#[rstest]
#[case("Gear: Great Axe (Str+d10, -1 Parry, 2 hands), Healing Kit", &["Great Axe", "Healing Kit"])]
#[case("Gear: Flashlight, Bedroll, Rope", &["Flashlight", "Bedroll", "Rope"])]
#[case("Gear: Sword (Str+d8), Sword (Str+d6)", &["Sword"])]
#[case("Gear: Knife", &["Knife"])]
fn test_gear_line_item_names(#[case] text: &str, #[case] expected: &[&str]) {
    let actor = create_parser(ParserConfig::default())
        .parse(text)
        .unwrap();
    let names: Vec<&str> = actor.gear.keys().map(String::as_str).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_duplicate_gear_overwrites() {
    let actor = create_parser(ParserConfig::default())
        .parse("Gear: Sword (Str+d8), Sword (Str+d6)")
        .unwrap();
    assert_eq!(actor.gear["Sword"], weapon("Str+d6"));
}

#[rstest]
#[case("Pistol (Range 12/24/48, Damage 2d6, Shots 6)")]
#[case("Pistol (Range 12/24/48, Damage 2d6, shots 6)")]
#[case("Pistol (Range 12/24/48, Damage 2d6, SHOTS: 6)")]
fn test_shots_label_any_case(#[case] token: &str) {
    let (name, detail) = classify_item(token, &grammar());
    assert_eq!(name, "Pistol");
    match detail {
        Some(GearDetail::Weapon(pistol)) => {
            assert_eq!(pistol.shots.as_deref(), Some("6"));
            assert!(pistol.other.is_empty());
        }
        other => panic!("expected weapon, got {other:?}"),
    }
}
