/// Statblock Importer - Savage Worlds NPC statblock parser
///
/// Turns copy-pasted NPC statblocks into structured actor records:
/// attributes, skills, derived stats, edges, hindrances, powers, gear,
/// special abilities and game-system custom stats.

pub mod config;
pub mod logging;
pub mod statblock;


pub use statblock::{parse, parse_multiple, ParsedActor, StatBlockError, StatBlockParser};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
