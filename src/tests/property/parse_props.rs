//! Property-based tests for the full statblock parser
//!
//! Tests invariants:
//! - Parsing arbitrary text never panics; it fails only without labels
//! - Attribute dice are recovered whatever order the entries come in
//! - Multi-actor parsing accounts for every block exactly once

use proptest::prelude::*;

use crate::config::ParserConfig;
use crate::statblock::dice::Die;
use crate::statblock::error::StatBlockError;

use crate::tests::common::create_parser;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_die() -> impl Strategy<Value = Die> {
    (
        prop_oneof![Just(4u32), Just(6), Just(8), Just(10), Just(12)],
        -2i32..=2,
    )
        .prop_map(|(sides, modifier)| Die::new(sides, modifier))
}

/// Five attribute dice in a random entry order.
fn arb_attribute_line() -> impl Strategy<Value = ([Die; 5], Vec<usize>)> {
    (
        [arb_die(), arb_die(), arb_die(), arb_die(), arb_die()],
        Just(vec![0usize, 1, 2, 3, 4]).prop_shuffle(),
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: the parser never panics, and only label-free text fails
    #[test]
    fn prop_parse_never_panics(text in "\\PC{0,200}") {
        let parser = create_parser(ParserConfig::default());
        match parser.parse(&text) {
            Ok(_) => {}
            Err(StatBlockError::NotAValidStatblock) => {}
            Err(other) => prop_assert!(false, "Unexpected error: {other}"),
        }
    }

    /// Property: attribute order does not matter
    #[test]
    fn prop_attributes_in_any_order((dice, order) in arb_attribute_line()) {
        let names = ["Agility", "Smarts", "Spirit", "Strength", "Vigor"];
        let entries: Vec<String> = order
            .iter()
            .map(|&i| format!("{} {}", names[i], dice[i]))
            .collect();
        let text = format!("Npc\nAttributes: {}\nPace: 6", entries.join(", "));

        let actor = create_parser(ParserConfig::default()).parse(&text).unwrap();
        prop_assert_eq!(actor.attributes.agility.die, dice[0]);
        prop_assert_eq!(actor.attributes.smarts.die, dice[1]);
        prop_assert_eq!(actor.attributes.spirit.die, dice[2]);
        prop_assert_eq!(actor.attributes.strength.die, dice[3]);
        prop_assert_eq!(actor.attributes.vigor.die, dice[4]);
    }

    /// Property: every block ends up as an actor or a failure, in order
    #[test]
    fn prop_batch_accounts_for_every_block(valid in prop::collection::vec(any::<bool>(), 1..8)) {
        let blocks: Vec<String> = valid
            .iter()
            .enumerate()
            .map(|(i, &ok)| {
                if ok {
                    format!("Npc {i}\nPace: {i}")
                } else {
                    format!("garbage {i}")
                }
            })
            .collect();
        let input = blocks.join("\n---\n");

        let batch = create_parser(ParserConfig::default())
            .parse_multiple(&input, "---")
            .unwrap();

        let expected_ok = valid.iter().filter(|&&ok| ok).count();
        prop_assert_eq!(batch.actors.len(), expected_ok);
        prop_assert_eq!(batch.failures.len(), valid.len() - expected_ok);

        let paces: Vec<Option<i32>> = batch.actors.iter().map(|a| a.pace).collect();
        let expected: Vec<Option<i32>> = valid
            .iter()
            .enumerate()
            .filter(|&(_, &ok)| ok)
            .map(|(i, _)| Some(i as i32))
            .collect();
        prop_assert_eq!(paces, expected);
    }
}
