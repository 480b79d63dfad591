//! Die Notation Module
//!
//! Recognizes Savage Worlds trait-die notation ("d8", "d6+2", "2d6", "d10 - 1")
//! and resolves it into a `Die` (sides, modifier) pair.
//!
//! Parsing is permissive: text without a recognizable die, or a die with
//! non-standard sides, yields `Die::ZERO` instead of an error.
//!
//! # Example
//!
//! ```ignore
//! use statblock_importer::statblock::dice::Die;
//!
//! let die = Die::parse("Strength d8+2");
//! assert_eq!(die, Die::new(8, 2));
//! assert_eq!(Die::parse("no dice here"), Die::ZERO);
//! ```

use std::fmt;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// Types
// ============================================================================

/// Polyhedral die sizes accepted as trait dice. Anything else parses to zero.
pub const STANDARD_DIE_SIDES: &[u32] = &[4, 6, 8, 10, 12, 20, 100];

/// A trait die: number of sides plus a flat modifier.
///
/// `sides == 0` means "absent or unparseable".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    pub sides: u32,
    pub modifier: i32,
}

impl Die {
    /// The "no die" value returned for missing or malformed notation.
    pub const ZERO: Die = Die {
        sides: 0,
        modifier: 0,
    };

    /// Create a die without validation.
    pub fn new(sides: u32, modifier: i32) -> Self {
        Self { sides, modifier }
    }

    /// Parse the first die notation found in `text` with the default `d` symbol.
    pub fn parse(text: &str) -> Self {
        DEFAULT_NOTATION.parse(text)
    }

    /// True when no die was recognized.
    pub fn is_zero(&self) -> bool {
        self.sides == 0
    }

    /// Check if this uses a standard die size.
    pub fn is_standard(&self) -> bool {
        STANDARD_DIE_SIDES.contains(&self.sides)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            0 => write!(f, "d{}", self.sides),
            m if m > 0 => write!(f, "d{}+{}", self.sides, m),
            m => write!(f, "d{}{}", self.sides, m),
        }
    }
}

/// A die located inside a larger string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DieMatch {
    pub die: Die,
    /// Byte range of the whole notation, dice count included.
    pub span: Range<usize>,
}

// ============================================================================
// Grammar
// ============================================================================

static DEFAULT_NOTATION: Lazy<DieNotation> = Lazy::new(|| {
    DieNotation::new("d").expect("Failed to compile default die notation regex")
});

/// Compiled die grammar for one die symbol ("d" in English, "w" in German
/// rulebooks, and so on).
#[derive(Debug, Clone)]
pub struct DieNotation {
    pattern: Regex,
}

impl DieNotation {
    /// Compile the grammar for a die symbol. The symbol is matched literally
    /// and case-insensitively.
    pub fn new(symbol: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"(?ix)
            \b
            (?P<count>\d+)?                 # Optional dice count, ignored
            {symbol}
            (?P<sides>\d+)
            (?:
                \s*
                (?P<sign>[+\-−–])           # Modifier sign (various dash types)
                \s*
                (?P<modifier>\d+)
            )?
            ",
            symbol = regex::escape(symbol),
        ))?;
        Ok(Self { pattern })
    }

    /// Parse the first die in `text`, or `Die::ZERO`.
    pub fn parse(&self, text: &str) -> Die {
        self.find(text).map(|m| m.die).unwrap_or(Die::ZERO)
    }

    /// Locate the first die notation in `text`.
    ///
    /// A notation with non-standard sides is still located (so callers can
    /// split around it) but resolves to `Die::ZERO`.
    pub fn find(&self, text: &str) -> Option<DieMatch> {
        let caps = self.pattern.captures(text)?;
        let whole = caps.get(0)?;

        let sides: u32 = caps
            .name("sides")
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        let modifier: i32 = match (caps.name("sign"), caps.name("modifier")) {
            (Some(sign), Some(value)) => {
                let val: i32 = value.as_str().parse().unwrap_or(0);
                if sign.as_str() == "+" {
                    val
                } else {
                    -val
                }
            }
            _ => 0,
        };

        let die = if STANDARD_DIE_SIDES.contains(&sides) {
            Die::new(sides, modifier)
        } else {
            Die::ZERO
        };

        Some(DieMatch {
            die,
            span: whole.start()..whole.end(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
