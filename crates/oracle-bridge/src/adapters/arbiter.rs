//! Mock Dispute Arbiter
//!
//! Implements the `DisputeArbiter` port with deterministic signer derivation
//! and locally minted dispute identifiers. The production adapter would call
//! the arbiter contract, which recovers signers cryptographically and
//! adjudicates conflicts; here disputes stay open until resolved by hand.

use crate::domain::{keccak256, Address, Attestation, DisputeId};
use crate::ports::outbound::DisputeArbiter;
use async_trait::async_trait;
use parking_lot::RwLock;
use sha3::{Digest, Keccak256};
use std::collections::HashMap;
use tracing::{debug, info};

/// Arbiter double that mints dispute ids and tracks their liveness.
#[derive(Default)]
pub struct MockArbiter {
    disputes: RwLock<HashMap<DisputeId, bool>>,
    next_nonce: RwLock<u64>,
}

impl MockArbiter {
    /// Fresh arbiter with no disputes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexer address this mock recovers from an attestation's signature
    /// fields: the trailing 20 bytes of `keccak256(r || s || v)`. Test
    /// fixtures use the same derivation to fund the right indexer.
    pub fn derive_indexer(attestation: &Attestation) -> Address {
        let mut hasher = Keccak256::new();
        hasher.update(attestation.sig_r);
        hasher.update(attestation.sig_s);
        hasher.update([attestation.sig_v]);
        let digest = hasher.finalize();
        let mut address = [0u8; 20];
        address.copy_from_slice(&digest[12..32]);
        address
    }

    /// Mark one dispute resolved.
    pub fn resolve(&self, dispute_id: &DisputeId) {
        if let Some(open) = self.disputes.write().get_mut(dispute_id) {
            *open = false;
            info!("[arbiter] dispute {} resolved", hex::encode(dispute_id));
        }
    }

    /// Mark every dispute resolved.
    pub fn resolve_all(&self) {
        for open in self.disputes.write().values_mut() {
            *open = false;
        }
    }

    /// Number of conflicts opened so far.
    pub fn conflicts_opened(&self) -> u64 {
        *self.next_nonce.read()
    }
}

#[async_trait]
impl DisputeArbiter for MockArbiter {
    async fn attested_indexer(&self, attestation: &Attestation) -> Address {
        Self::derive_indexer(attestation)
    }

    async fn open_conflict(
        &self,
        attestation_a: &[u8],
        attestation_b: &[u8],
    ) -> (DisputeId, DisputeId) {
        let nonce = {
            let mut next = self.next_nonce.write();
            let nonce = *next;
            *next += 1;
            nonce
        };

        let mut seed = Vec::with_capacity(attestation_a.len() + attestation_b.len() + 8);
        seed.extend_from_slice(attestation_a);
        seed.extend_from_slice(attestation_b);
        seed.extend_from_slice(&nonce.to_be_bytes());
        let id_a = keccak256(&seed);
        seed.push(0xFF);
        let id_b = keccak256(&seed);

        let mut disputes = self.disputes.write();
        disputes.insert(id_a, true);
        disputes.insert(id_b, true);
        debug!(
            "[arbiter] conflict {} opened: {} / {}",
            nonce,
            hex::encode(id_a),
            hex::encode(id_b)
        );
        (id_a, id_b)
    }

    async fn is_dispute_active(&self, dispute_id: &DisputeId) -> bool {
        self.disputes.read().get(dispute_id).copied().unwrap_or(false)
    }
}
