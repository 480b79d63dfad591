//! Sectionizer Module
//!
//! Splits a normalized statblock into labeled sections. Boundaries are the
//! positions where a known label literal ("Skills:", "Power Points:", or a
//! registered custom stat label) occurs.
//!
//! Labels are matched longest first and each takes its leftmost occurrence
//! that does not overlap a label already accepted. "Powers:" therefore never
//! binds to the tail of "Super Powers:", yet a later standalone "Powers:" is
//! still found.
//!
//! # Example
//!
//! ```ignore
//! use statblock_importer::statblock::labels::{Label, LabelTable};
//! use statblock_importer::statblock::sections::Sectionizer;
//!
//! let sectionizer = Sectionizer::new(&LabelTable::english(), &[])?;
//! let sections = sectionizer.sectionize("Orc\nAttributes: Agility d6\nPace: 6")?;
//! assert_eq!(sections.get(Label::Pace).unwrap().body(), "6");
//! ```

use std::ops::Range;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::error::{Result, StatBlockError};
use super::labels::{Label, LabelTable};
use super::text::normalize_statblock;

// ============================================================================
// Types
// ============================================================================

/// What opened a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Builtin(Label),
    /// A registered custom stat, keyed by its configured label.
    Custom(String),
}

/// One labeled span of the normalized statblock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    /// The label literal, colon included, as registered.
    pub label: String,
    /// Byte offset of the label in the normalized text.
    pub start: usize,
    /// Byte length of the label as it occurs in the text.
    pub label_len: usize,
    /// Label plus body, trimmed.
    pub text: String,
}

impl Section {
    /// Text after the label literal, trimmed.
    pub fn body(&self) -> &str {
        self.text.get(self.label_len..).unwrap_or_default().trim()
    }
}

/// The sections of one statblock, ordered by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub normalized: String,
    pub sections: Vec<Section>,
}

impl Sections {
    /// The section opened by a builtin label.
    pub fn get(&self, label: Label) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.kind == SectionKind::Builtin(label))
    }

    /// Body of a builtin section, if present.
    pub fn body(&self, label: Label) -> Option<&str> {
        self.get(label).map(Section::body)
    }

    /// The section opened by a custom stat label.
    pub fn custom(&self, label: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| matches!(&s.kind, SectionKind::Custom(l) if l == label))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Start offsets of every section.
    pub fn boundaries(&self) -> Vec<usize> {
        self.sections.iter().map(|s| s.start).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ============================================================================
// Sectionizer
// ============================================================================

#[derive(Debug, Clone)]
struct Candidate {
    kind: SectionKind,
    literal: String,
    pattern: Regex,
}

/// Compiled label matcher. Build once per label table and reuse.
#[derive(Debug, Clone)]
pub struct Sectionizer {
    /// Longest literal first; ties keep discovery order.
    candidates: Vec<Candidate>,
}

impl Sectionizer {
    /// Compile the builtin section labels plus the given custom stat labels.
    ///
    /// Empty labels are skipped and a label whose literal repeats an earlier
    /// one (ignoring case) is registered only once.
    pub fn new(labels: &LabelTable, custom: &[String]) -> Result<Self> {
        let builtin = Label::SECTIONS
            .iter()
            .map(|&label| (SectionKind::Builtin(label), labels.get(label)));
        let custom = custom
            .iter()
            .map(|label| (SectionKind::Custom(label.clone()), label.as_str()));

        let mut seen: Vec<String> = Vec::new();
        let mut candidates = Vec::new();

        for (kind, text) in builtin.chain(custom) {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            let literal = format!("{text}:");
            let folded = literal.to_lowercase();
            if seen.contains(&folded) {
                log::warn!("Duplicate section label '{}' ignored", literal);
                continue;
            }
            seen.push(folded);

            let pattern = RegexBuilder::new(&regex::escape(&literal))
                .case_insensitive(true)
                .build()?;
            candidates.push(Candidate {
                kind,
                literal,
                pattern,
            });
        }

        candidates.sort_by(|a, b| b.literal.chars().count().cmp(&a.literal.chars().count()));

        Ok(Self { candidates })
    }

    /// Split raw statblock text into sections.
    ///
    /// Fails with [`StatBlockError::NotAValidStatblock`] when no label
    /// occurs at all.
    pub fn sectionize(&self, raw: &str) -> Result<Sections> {
        let normalized = normalize_statblock(raw);

        let mut accepted: Vec<(Range<usize>, &Candidate)> = Vec::new();
        for candidate in &self.candidates {
            let hit = candidate
                .pattern
                .find_iter(&normalized)
                .map(|m| m.range())
                .find(|range| !accepted.iter().any(|(taken, _)| overlaps(taken, range)));
            if let Some(range) = hit {
                accepted.push((range, candidate));
            }
        }

        if accepted.is_empty() {
            return Err(StatBlockError::NotAValidStatblock);
        }

        accepted.sort_by_key(|(range, _)| range.start);

        let sections = accepted
            .iter()
            .enumerate()
            .map(|(i, (range, candidate))| {
                let end = accepted
                    .get(i + 1)
                    .map(|(next, _)| next.start)
                    .unwrap_or(normalized.len());
                Section {
                    kind: candidate.kind.clone(),
                    label: candidate.literal.clone(),
                    start: range.start,
                    label_len: range.len(),
                    text: normalized[range.start..end].trim().to_string(),
                }
            })
            .collect();

        Ok(Sections {
            normalized,
            sections,
        })
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

// ============================================================================
// Tests
// ============================================================================
