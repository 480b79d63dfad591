//! Property-based tests for die notation
//!
//! Tests invariants:
//! - Standard dice survive a format/parse round trip
//! - Strings without a die symbol parse to the zero die
//! - Parsing arbitrary text never panics and yields standard sides or zero

use proptest::prelude::*;

use crate::statblock::dice::{Die, DieNotation, STANDARD_DIE_SIDES};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Trait-die sides used in statblocks.
fn arb_sides() -> impl Strategy<Value = u32> {
    prop_oneof![Just(4u32), Just(6), Just(8), Just(10), Just(12)]
}

fn arb_modifier() -> impl Strategy<Value = i32> {
    -4i32..=4
}

/// Text that cannot contain a die notation.
fn arb_non_die_text() -> impl Strategy<Value = String> {
    "[a-ce-zA-CE-Z0-9 ,.;:()+\\-]{0,40}"
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: "d{sides}{+/-}{modifier}" parses back to the same die
    #[test]
    fn prop_die_round_trip(sides in arb_sides(), modifier in arb_modifier()) {
        let text = Die::new(sides, modifier).to_string();
        prop_assert_eq!(Die::parse(&text), Die::new(sides, modifier));
    }

    /// Property: the round trip also holds inside surrounding text
    #[test]
    fn prop_die_round_trip_in_context(
        sides in arb_sides(),
        modifier in arb_modifier(),
        prefix in "[A-Za-z]{1,12}"
    ) {
        let text = format!("{} {}, Notice d4", prefix, Die::new(sides, modifier));
        prop_assert_eq!(Die::parse(&text), Die::new(sides, modifier));
    }

    /// Property: strings without the die symbol parse to zero
    #[test]
    fn prop_non_die_text_is_zero(text in arb_non_die_text()) {
        prop_assert_eq!(Die::parse(&text), Die::ZERO);
    }

    /// Property: any text parses to a standard die or to zero
    #[test]
    fn prop_parse_yields_standard_or_zero(text in "\\PC{0,60}") {
        let die = Die::parse(&text);
        prop_assert!(die.is_zero() || STANDARD_DIE_SIDES.contains(&die.sides));
    }

    /// Property: a localized symbol round-trips the same way
    #[test]
    fn prop_localized_round_trip(sides in arb_sides(), modifier in arb_modifier()) {
        let notation = DieNotation::new("w").unwrap();
        let text = Die::new(sides, modifier).to_string().replacen('d', "W", 1);
        prop_assert_eq!(notation.parse(&text), Die::new(sides, modifier));
    }
}
