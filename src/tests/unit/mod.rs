//! Unit Tests
//!
//! Cross-module tests that need the shared fixtures in `tests::common`.

mod statblock;
