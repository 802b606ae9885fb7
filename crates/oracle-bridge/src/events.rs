//! # Outgoing Events
//!
//! Payloads emitted on every successful state transition. They carry enough
//! data for an external watcher to reconstruct bridge state without
//! re-reading all persistent storage.

use crate::domain::{BridgeConfig, BridgeId, DatasetId, DisputeId, RequestCid};
use serde::{Deserialize, Serialize};

/// Event emitted by the bridge service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeEvent {
    /// A bridge config was registered (re-registration of an identical
    /// config emits again; stored state is unchanged).
    BridgeRegistered {
        /// Content fingerprint identifying the bridge.
        bridge_id: BridgeId,
        /// Full config, so watchers need no separate lookup.
        config: BridgeConfig,
    },
    /// A response proposal was accepted.
    ResponseAdded {
        /// Bridge the proposal targets.
        bridge_id: BridgeId,
        /// Dataset named in the attestation.
        dataset_id: DatasetId,
        /// Fingerprint of the reconstructed query.
        request_cid: RequestCid,
        /// Raw response text as submitted.
        response: String,
        /// Raw 161-byte attestation.
        attestation_bytes: Vec<u8>,
        /// First block at which the request can finalize.
        unlocks_at: u64,
    },
    /// The arbiter issued a dispute for a pair of conflicting attestations.
    DisputeOpened {
        /// Bridge the conflicting proposals target.
        bridge_id: BridgeId,
        /// Request the dispute is recorded against.
        request_cid: RequestCid,
        /// Identifier issued by the arbiter.
        dispute_id: DisputeId,
    },
    /// A canonical answer was extracted and stored.
    ResultFinalized {
        /// Bridge whose latest-value pointer was overwritten.
        bridge_id: BridgeId,
        /// Request that finalized.
        request_cid: RequestCid,
        /// Raw response text the answer was extracted from.
        response: String,
    },
}
