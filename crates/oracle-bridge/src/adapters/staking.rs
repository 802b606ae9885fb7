//! In-Memory Staking Registry
//!
//! Implements the `StakingRegistry` port over a plain stake table. In
//! production this would query the staking contract's slashable balances.

use crate::domain::Address;
use crate::ports::outbound::StakingRegistry;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Stake table keyed by indexer address.
#[derive(Default)]
pub struct InMemoryStaking {
    stakes: RwLock<HashMap<Address, u128>>,
}

impl InMemoryStaking {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an indexer's slashable balance.
    pub fn set_stake(&self, indexer: Address, stake: u128) {
        debug!("[staking] stake of {} set to {}", hex::encode(indexer), stake);
        self.stakes.write().insert(indexer, stake);
    }
}

#[async_trait]
impl StakingRegistry for InMemoryStaking {
    async fn stake_of(&self, indexer: &Address) -> u128 {
        self.stakes.read().get(indexer).copied().unwrap_or(0)
    }
}
