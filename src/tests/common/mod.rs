//! Common Test Utilities
//!
//! Shared statblock fixtures and parser constructors used across test
//! modules.

pub mod fixtures;

pub use fixtures::*;
