//! # Outbound Ports
//!
//! Traits for the external collaborators the bridge consumes: the staking
//! registry, the dispute arbiter, and the host chain. They are untrusted
//! re-entrant callers; the service only invokes them once its own state is
//! fully consistent.

use crate::domain::{Address, Attestation, DisputeId, Hash};
use async_trait::async_trait;

/// Staking registry - outbound port.
#[async_trait]
pub trait StakingRegistry: Send + Sync {
    /// Slashable balance currently backing an indexer.
    async fn stake_of(&self, indexer: &Address) -> u128;
}

/// Dispute arbiter - outbound port.
///
/// The arbiter independently verifies attestation signatures; the bridge
/// carries signature fields structurally and never checks them itself.
#[async_trait]
pub trait DisputeArbiter: Send + Sync {
    /// Indexer that signed an attestation.
    async fn attested_indexer(&self, attestation: &Attestation) -> Address;

    /// Open a conflict between two attestations over the same request.
    /// Returns the pair of dispute identifiers the arbiter issued.
    async fn open_conflict(
        &self,
        attestation_a: &[u8],
        attestation_b: &[u8],
    ) -> (DisputeId, DisputeId);

    /// True while a dispute is still open at the arbiter.
    async fn is_dispute_active(&self, dispute_id: &DisputeId) -> bool;
}

/// Host chain view - outbound port.
///
/// Stands in for the ledger execution environment: current head and the
/// bounded trailing window of historical block hashes it can still resolve.
#[async_trait]
pub trait ChainSource: Send + Sync {
    /// Current head block number.
    async fn head_number(&self) -> u64;

    /// Hash of a historical block, or `None` outside the lookback window.
    async fn hash_at(&self, block_number: u64) -> Option<Hash>;
}
