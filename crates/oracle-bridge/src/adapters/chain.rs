//! In-Memory Chain Source
//!
//! Implements the `ChainSource` port against a simulated chain head with the
//! bounded 256-block hash lookback a real host ledger provides. In production
//! this would sit on the ledger execution environment itself.

use crate::domain::{keccak256, Hash};
use crate::ports::outbound::ChainSource;
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

/// Trailing window of block numbers whose hashes remain resolvable.
pub const LOOKBACK_BLOCKS: u64 = 256;

/// Simulated chain with deterministic block hashes.
pub struct InMemoryChain {
    head: RwLock<u64>,
}

impl InMemoryChain {
    /// Create a chain at the given head.
    pub fn new(head: u64) -> Self {
        Self {
            head: RwLock::new(head),
        }
    }

    /// Advance the head by `blocks`.
    pub fn advance(&self, blocks: u64) {
        let mut head = self.head.write();
        *head = head.saturating_add(blocks);
        debug!("[chain] head advanced to {}", *head);
    }

    /// Move the head to an absolute block number.
    pub fn advance_to(&self, block_number: u64) {
        *self.head.write() = block_number;
    }

    /// Deterministic hash of a block number, shared with test fixtures.
    pub fn block_hash(block_number: u64) -> Hash {
        keccak256(&block_number.to_be_bytes())
    }
}

#[async_trait]
impl ChainSource for InMemoryChain {
    async fn head_number(&self) -> u64 {
        *self.head.read()
    }

    async fn hash_at(&self, block_number: u64) -> Option<Hash> {
        let head = *self.head.read();
        if block_number >= head || head - block_number > LOOKBACK_BLOCKS {
            return None;
        }
        Some(Self::block_hash(block_number))
    }
}
