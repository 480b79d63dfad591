//! Full Statblock Tests
//!
//! Parses the shared `TEST_NPC` fixture and checks every field of the
//! resulting actor, then the JSON shape actor builders consume.

use serde_json::json;

use crate::statblock::actor::{ArmorDetail, CustomStatValue, GearDetail, Toughness};
use crate::statblock::dice::Die;
use crate::statblock::ParsedActor;
use crate::tests::common::{create_test_parser, TEST_NPC};

fn parse_test_npc() -> ParsedActor {
    create_test_parser()
        .parse(TEST_NPC)
        .expect("TEST_NPC should parse")
}

// ============================================================================
// Field Tests
// ============================================================================

#[test]
fn test_name_and_biography() {
    let actor = parse_test_npc();
    assert_eq!(actor.name, "Test Npc");
    assert_eq!(
        actor.biography.as_deref(),
        Some(
            "A test NPC for integration testing. He is just a random thing cobbled \
             together to test the parser.<br/>"
        )
    );
}

#[test]
fn test_attributes() {
    let attrs = parse_test_npc().attributes;
    assert_eq!(attrs.agility.die, Die::new(8, 0));
    assert_eq!(attrs.smarts.die, Die::new(6, 0));
    assert!(!attrs.smarts.animal);
    assert_eq!(attrs.spirit.die, Die::new(6, 0));
    assert_eq!(attrs.strength.die, Die::new(8, 2));
    assert_eq!(attrs.vigor.die, Die::new(6, 0));
}

#[test]
fn test_skills() {
    let skills = parse_test_npc().skills;
    assert_eq!(skills.len(), 3);
    assert_eq!(skills["fighting"], Die::new(8, 0));
    assert_eq!(skills["shooting"], Die::new(6, 0));
    assert_eq!(skills["notice"], Die::new(6, 0));
}

#[test]
fn test_derived_stats() {
    let actor = parse_test_npc();
    assert_eq!(actor.pace, Some(6));
    assert_eq!(actor.parry, Some(6));
    assert_eq!(actor.power_points, Some(10));
    assert_eq!(
        actor.toughness,
        Toughness {
            value: 7,
            modifier: 0,
            armor: 1
        }
    );
    assert_eq!(actor.size, -1);
}

#[test]
fn test_lists() {
    let actor = parse_test_npc();
    assert_eq!(actor.edges, vec!["Alertness", "Quick"]);
    assert_eq!(actor.hindrances, vec!["Arrogant", "Evil Bastard"]);
    assert_eq!(actor.powers, vec!["Bolt (2d6)"]);
}

#[test]
fn test_special_abilities() {
    let actor = parse_test_npc();
    assert_eq!(actor.special_abilities.len(), 2);
    assert_eq!(
        actor.special_abilities["Infravision"],
        "Halve penalties for Illumination when attacking warm targets."
    );
    assert_eq!(
        actor.special_abilities["Size -1"],
        "Goblins are the size of small children."
    );
    assert!(actor.super_powers.is_empty());
}

#[test]
fn test_gear() {
    let gear = parse_test_npc().gear;
    assert_eq!(gear.len(), 3);

    match &gear["Long sword"] {
        Some(GearDetail::Weapon(sword)) => assert_eq!(sword.damage.as_deref(), Some("Str+d8")),
        other => panic!("expected weapon, got {other:?}"),
    }
    match &gear["bow"] {
        Some(GearDetail::Weapon(bow)) => {
            assert_eq!(bow.range.as_deref(), Some("12/24/48"));
            assert_eq!(bow.damage.as_deref(), Some("2d6"));
        }
        other => panic!("expected weapon, got {other:?}"),
    }
    assert_eq!(
        gear["leather armor"],
        Some(GearDetail::Armor(ArmorDetail { armor_bonus: 1 }))
    );
}

#[test]
fn test_custom_stats() {
    let stats = parse_test_npc().custom_stats;
    assert_eq!(stats["num Stat"], CustomStatValue::Number(99));
    assert_eq!(
        stats["text Stat"],
        CustomStatValue::Text("some text for testing".into())
    );
    assert_eq!(stats["die Stat"], CustomStatValue::Die(Die::new(6, 5)));
}

// ============================================================================
// JSON Shape
// ============================================================================

#[test]
fn test_json_output() {
    let value = serde_json::to_value(parse_test_npc()).unwrap();

    assert_eq!(value["name"], json!("Test Npc"));
    assert_eq!(value["powerPoints"], json!(10));
    assert_eq!(value["toughness"], json!({ "value": 7, "modifier": 0, "armor": 1 }));
    assert_eq!(
        value["gear"],
        json!({
            "Long sword": { "damage": "Str+d8" },
            "bow": { "range": "12/24/48", "damage": "2d6" },
            "leather armor": { "armorBonus": 1 },
        })
    );
    assert_eq!(value["superPowers"], json!({}));
    assert_eq!(value["num Stat"], json!(99));
    assert_eq!(value["die Stat"], json!({ "sides": 6, "modifier": 5 }));
}

#[test]
fn test_json_round_trip() {
    let actor = parse_test_npc();
    let json = serde_json::to_string(&actor).unwrap();
    let back: ParsedActor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, actor);
}
