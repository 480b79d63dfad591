//! Comma-list extraction for Hindrances, Edges and Powers.

use once_cell::sync::Lazy;
use regex::Regex;

use super::labels::Label;
use super::sections::Sections;

/// One list entry, optionally with a parenthetical qualifier:
/// "Vengeful (Minor)", "Arcane Background (Magic)", "Improved Frenzy".
static LIST_ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}0-9!'’\- ]+(?:\([^)]+\))?").expect("Failed to compile list item regex")
});

/// Entries of a list section in source order. A missing section, or one
/// whose body is a single character, gives an empty list.
pub fn extract(sections: &Sections, label: Label) -> Vec<String> {
    sections
        .body(label)
        .map(|body| tokenize(body.trim_end_matches('.')))
        .unwrap_or_default()
}

/// Split a comma list into trimmed entries, keeping qualifiers verbatim.
pub fn tokenize(body: &str) -> Vec<String> {
    let body = body.trim();
    if body.chars().count() <= 1 {
        return Vec::new();
    }

    LIST_ITEM_RE
        .find_iter(body)
        .map(|m| m.as_str().trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
