//! Error types for statblock parsing.
//!
//! Parsing degrades to defaults almost everywhere. The variants below are
//! the few conditions that leave nothing usable to return.

use thiserror::Error;

/// Result type alias for statblock operations.
pub type Result<T> = std::result::Result<T, StatBlockError>;

#[derive(Error, Debug)]
pub enum StatBlockError {
    /// No known section label occurs anywhere in the text.
    #[error("Not a valid statblock: no section labels found")]
    NotAValidStatblock,

    /// The multi-actor input held no non-empty blocks.
    #[error("No statblocks found in input")]
    EmptyInput,

    /// A label-derived pattern failed to compile. Only reachable through
    /// user-supplied labels.
    #[error("Invalid label pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
