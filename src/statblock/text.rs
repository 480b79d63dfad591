//! Shared text helpers for statblock parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\n|\r").expect("Failed to compile line break regex"));

static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+\-]?\d+").expect("Failed to compile leading integer regex"));

/// Soft hyphen, left behind by PDF copy-paste.
const SOFT_HYPHEN: char = '\u{00AD}';

/// Minus sign, en dash and em dash all mean "-" in a statblock.
const DASHES: &[char] = &['\u{2212}', '\u{2013}', '\u{2014}'];

/// Normalize raw statblock text for sectionizing.
///
/// Line breaks become single spaces, soft hyphens are dropped, dash glyphs
/// become ASCII hyphens and `"/ "` collapses to `"/"` (a slash before a
/// deliberate line break picks up a stray space).
pub fn normalize_statblock(raw: &str) -> String {
    normalize_glyphs(&LINE_BREAK_RE.replace_all(raw, " ").replace("/ ", "/"))
}

/// Drop soft hyphens and turn dash glyphs into ASCII hyphens. Line breaks
/// are kept.
pub fn normalize_glyphs(text: &str) -> String {
    text.replace(SOFT_HYPHEN, "").replace(DASHES, "-")
}

/// Replace every line break with a single space.
pub fn collapse_line_breaks(text: &str) -> String {
    LINE_BREAK_RE.replace_all(text, " ").into_owned()
}

/// Collapse every whitespace run to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(text.trim(), " ").into_owned()
}

/// Split text into physical lines, honoring `\r\n`, `\n` and `\r`.
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK_RE.split(text).collect()
}

/// True when the string holds at least one letter.
pub fn has_letter(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
}

/// Split on a character, trim every piece and keep only pieces that carry
/// at least one letter.
pub fn split_and_trim(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(|piece| collapse_line_breaks(piece).trim().to_string())
        .filter(|piece| has_letter(piece))
        .collect()
}

/// Parse the signed integer at the start of `text` (after leading
/// whitespace), ignoring anything that follows it. "6;" gives 6, "+2" gives
/// 2, "abc" gives `None`.
pub fn leading_int(text: &str) -> Option<i64> {
    LEADING_INT_RE
        .find(text.trim_start())
        .and_then(|m| m.as_str().trim_start_matches('+').parse().ok())
}

/// Capitalize every word: each word is lowercased, then the first letter
/// and any letter following whitespace, `-`, `(` or `)` is uppercased.
///
/// "half-orc (chief)" becomes "Half-Orc (Chief)".
pub fn capitalize_every_word(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut boundary = true;

    for c in text.chars() {
        if boundary {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        boundary = c.is_whitespace() || matches!(c, '-' | '(' | ')');
    }

    out
}
