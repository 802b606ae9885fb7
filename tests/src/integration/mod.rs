//! Cross-operation integration tests.

mod disputes;
pub mod fixtures;
