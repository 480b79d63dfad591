//! Statblock Parser Unit Tests
//!
//! This module contains unit tests that run the whole parser:
//! - Full statblock: every field of a complete NPC
//! - Gear: classification cases for weapons, armor, shields and plain gear
//! - Degradation: malformed sections fall back to defaults instead of failing

mod full_statblock_tests;
mod gear_tests;
