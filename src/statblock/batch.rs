//! Multi-actor input: several statblocks separated by a delimiter line.
//!
//! A block that fails to parse is recorded and skipped; the rest of the
//! batch still comes back.

use serde::Serialize;

use super::actor::ParsedActor;
use super::error::{Result, StatBlockError};
use super::parser::StatBlockParser;

/// A block that could not be parsed.
#[derive(Debug, Serialize)]
pub struct BlockFailure {
    /// Zero-based position among the non-empty blocks.
    pub index: usize,
    pub block: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: StatBlockError,
}

/// Outcome of a multi-actor parse, in source order.
#[derive(Debug, Default, Serialize)]
pub struct BatchParse {
    pub actors: Vec<ParsedActor>,
    pub failures: Vec<BlockFailure>,
}

impl BatchParse {
    /// True when at least one block was given and none parsed.
    pub fn all_failed(&self) -> bool {
        self.actors.is_empty() && !self.failures.is_empty()
    }
}

fn serialize_error<S: serde::Serializer>(
    error: &StatBlockError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Split `raw` on `delimiter` into trimmed, non-empty blocks.
pub fn split_blocks<'a>(raw: &'a str, delimiter: &str) -> Vec<&'a str> {
    let blocks: Box<dyn Iterator<Item = &'a str>> = if delimiter.is_empty() {
        Box::new(std::iter::once(raw))
    } else {
        Box::new(raw.split(delimiter))
    };

    blocks
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

impl StatBlockParser {
    /// Parse every block of a multi-actor input.
    ///
    /// Fails with [`StatBlockError::EmptyInput`] when there is no block at
    /// all. Per-block failures are logged and collected.
    pub fn parse_multiple(&self, raw: &str, delimiter: &str) -> Result<BatchParse> {
        let blocks = split_blocks(raw, delimiter);
        if blocks.is_empty() {
            return Err(StatBlockError::EmptyInput);
        }

        let mut batch = BatchParse::default();
        for (index, block) in blocks.into_iter().enumerate() {
            match self.parse(block) {
                Ok(actor) => batch.actors.push(actor),
                Err(error) => {
                    log::error!(
                        "Failed to parse statblock #{}: {}\n{}",
                        index + 1,
                        error,
                        block
                    );
                    batch.failures.push(BlockFailure {
                        index,
                        block: block.to_string(),
                        error,
                    });
                }
            }
        }

        log::info!(
            "Parsed {} of {} statblocks",
            batch.actors.len(),
            batch.actors.len() + batch.failures.len()
        );
        Ok(batch)
    }
}
