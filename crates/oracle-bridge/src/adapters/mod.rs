//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound port traits against in-memory doubles of the
//! external collaborators.

mod arbiter;
mod chain;
mod staking;

pub use arbiter::MockArbiter;
pub use chain::{InMemoryChain, LOOKBACK_BLOCKS};
pub use staking::InMemoryStaking;
