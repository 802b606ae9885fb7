//! # Domain Entities
//!
//! Bridge configuration and proposal entities.

use super::value_objects::{DatasetId, Hash, ResponseCid, ResponseKind};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

/// A registered query bridge: a query template plus dispute/finalization policy.
///
/// Identity is the content fingerprint of all fields ([`BridgeConfig::fingerprint`]),
/// so two configs with identical fields collapse to one bridge. Immutable once
/// registered; distinct configs are wholly independent bridges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Query text up to where the block hash is spliced in.
    pub query_prefix: Vec<u8>,
    /// Query text from the end of the block hash to the end of the query.
    pub query_suffix: Vec<u8>,
    /// Dataset the query runs against.
    pub dataset_id: DatasetId,
    /// Shape of the answer extracted from the response text.
    pub response_kind: ResponseKind,
    /// Byte offset into the response text where the answer begins.
    pub response_offset: usize,
    /// Blocks a request must age, undisputed, before finalization.
    pub freeze_period: u64,
    /// Slashable stake a response must strictly exceed to finalize.
    pub minimum_stake: u128,
}

impl BridgeConfig {
    /// Content fingerprint identifying this bridge.
    ///
    /// Keccak-256 over a length-prefixed encoding of every field, so configs
    /// differing in any field (including prefix/suffix boundary placement)
    /// never collide under the hash's collision resistance.
    pub fn fingerprint(&self) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update((self.query_prefix.len() as u64).to_be_bytes());
        hasher.update(&self.query_prefix);
        hasher.update((self.query_suffix.len() as u64).to_be_bytes());
        hasher.update(&self.query_suffix);
        hasher.update(self.dataset_id);
        hasher.update([match self.response_kind {
            ResponseKind::Address => 0u8,
            ResponseKind::Bytes32 => 1u8,
            ResponseKind::Uint => 2u8,
        }]);
        hasher.update((self.response_offset as u64).to_be_bytes());
        hasher.update(self.freeze_period.to_be_bytes());
        hasher.update(self.minimum_stake.to_be_bytes());
        hasher.finalize().into()
    }
}

/// One recorded proposal: a candidate answer for a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseProposal {
    /// Fingerprint of the proposed response text.
    pub response_cid: ResponseCid,
    /// Raw 161-byte attestation as submitted, kept for dispute filing.
    pub attestation_bytes: Vec<u8>,
    /// Block number anchoring the request's freeze window. Fixed at the
    /// request's first proposal and identical on every later entry.
    pub anchor_block: u64,
}
