//! Statblock Import
//!
//! Turns copy-pasted Savage Worlds NPC statblocks into [`ParsedActor`]
//! records. The pipeline is label driven: a [`LabelTable`] names every
//! section, the sectionizer cuts the text at those labels, and one small
//! extractor per field reads its section.
//!
//! # Example
//!
//! ```ignore
//! use statblock_importer::config::ParserConfig;
//! use statblock_importer::statblock::{self, LabelTable};
//!
//! let actor = statblock::parse(text, &LabelTable::english(), &ParserConfig::default())?;
//! println!("{} has Parry {:?}", actor.name, actor.parry);
//! ```

pub mod abilities;
pub mod actor;
pub mod batch;
pub mod derived;
pub mod dice;
pub mod error;
pub mod gear;
pub mod grammar;
pub mod labels;
pub mod lists;
pub mod name_bio;
pub mod parser;
pub mod sections;
pub mod system_stats;
pub mod text;
pub mod traits;

pub use abilities::AbilityTag;
pub use actor::{
    ArmorDetail, Attributes, CustomStatValue, GearDetail, ParsedActor, ShieldDetail, SmartsTrait,
    Toughness, Trait, WeaponDetail,
};
pub use batch::{BatchParse, BlockFailure};
pub use dice::{Die, DieNotation};
pub use error::{Result, StatBlockError};
pub use labels::{Label, LabelTable};
pub use parser::{ParseStage, StatBlockParser};
pub use sections::{Section, SectionKind, Sections, Sectionizer};

use crate::config::ParserConfig;

/// Parse one statblock.
pub fn parse(raw: &str, labels: &LabelTable, config: &ParserConfig) -> Result<ParsedActor> {
    StatBlockParser::new(labels, config)?.parse(raw)
}

/// Parse several statblocks separated by `delimiter`.
pub fn parse_multiple(
    raw: &str,
    delimiter: &str,
    labels: &LabelTable,
    config: &ParserConfig,
) -> Result<BatchParse> {
    StatBlockParser::new(labels, config)?.parse_multiple(raw, delimiter)
}
