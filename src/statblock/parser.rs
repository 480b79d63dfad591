//! Statblock Parser
//!
//! Runs the sectionizer and every field extractor over one statblock and
//! assembles the [`ParsedActor`].
//!
//! # Example
//!
//! ```ignore
//! use statblock_importer::config::ParserConfig;
//! use statblock_importer::statblock::{labels::LabelTable, parser::StatBlockParser};
//!
//! let parser = StatBlockParser::new(&LabelTable::english(), &ParserConfig::default())?;
//! let actor = parser.parse("Goblin\nAttributes: Agility d8, Smarts d6\nPace: 6")?;
//! assert_eq!(actor.pace, Some(6));
//! ```

use std::fmt;

use crate::config::ParserConfig;

use super::actor::ParsedActor;
use super::error::Result;
use super::grammar::Grammar;
use super::labels::{Label, LabelTable};
use super::{abilities, derived, gear, lists, name_bio, system_stats, traits};

/// Progress of a single parse, logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    Start,
    Sectionized,
    FieldsExtracted,
    DerivedValuesResolved,
    Done,
    Failed,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseStage::Start => "start",
            ParseStage::Sectionized => "sectionized",
            ParseStage::FieldsExtracted => "fields extracted",
            ParseStage::DerivedValuesResolved => "derived values resolved",
            ParseStage::Done => "done",
            ParseStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Parser for one label table and configuration.
///
/// All label-dependent patterns are compiled in [`StatBlockParser::new`];
/// `parse` only reads them, so one parser can be shared across threads.
#[derive(Debug, Clone)]
pub struct StatBlockParser {
    grammar: Grammar,
}

impl StatBlockParser {
    pub fn new(labels: &LabelTable, config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            grammar: Grammar::new(labels, config)?,
        })
    }

    /// Parser with English labels and default settings.
    pub fn english() -> Result<Self> {
        Self::new(&LabelTable::english(), &ParserConfig::default())
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Parse one statblock.
    ///
    /// Fails only when the text holds no section label at all; every field
    /// that cannot be read falls back to its default.
    pub fn parse(&self, raw: &str) -> Result<ParsedActor> {
        let grammar = &self.grammar;
        stage(ParseStage::Start);

        let sections = match grammar.sectionizer.sectionize(raw) {
            Ok(sections) => sections,
            Err(e) => {
                stage(ParseStage::Failed);
                return Err(e);
            }
        };
        stage(ParseStage::Sectionized);

        let name_bio = name_bio::extract(raw, &sections, grammar);
        let special_abilities = abilities::special_abilities(&sections, grammar);

        let mut actor = ParsedActor {
            name: name_bio.name,
            biography: name_bio.biography,
            attributes: traits::attributes(&sections, grammar),
            skills: traits::skills(&sections, grammar),
            pace: derived::number(&sections, Label::Pace),
            parry: derived::number(&sections, Label::Parry),
            toughness: derived::toughness(&sections),
            power_points: derived::number(&sections, Label::PowerPoints),
            hindrances: lists::extract(&sections, Label::Hindrances),
            edges: lists::extract(&sections, Label::Edges),
            powers: lists::extract(&sections, Label::Powers),
            super_powers: abilities::super_powers(&sections, grammar),
            gear: gear::extract(&sections, grammar),
            custom_stats: system_stats::extract(&sections, grammar),
            special_abilities,
            size: 0,
        };
        stage(ParseStage::FieldsExtracted);

        actor.size = derived::size(&actor.special_abilities, grammar);
        if actor.power_points.is_none() {
            actor.power_points =
                derived::power_points_from_abilities(&actor.special_abilities, grammar);
        }
        stage(ParseStage::DerivedValuesResolved);

        log::info!(
            "Parsed statblock '{}': {} sections, {} skills, {} gear items, {} special abilities",
            actor.name,
            sections.len(),
            actor.skills.len(),
            actor.gear.len(),
            actor.special_abilities.len()
        );
        stage(ParseStage::Done);

        Ok(actor)
    }
}

fn stage(stage: ParseStage) {
    log::debug!("Statblock parse stage: {}", stage);
}

// ============================================================================
// Tests
// ============================================================================
