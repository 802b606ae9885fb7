//! # Inbound Ports
//!
//! The public API of the bridge subsystem. Each operation is atomic: it
//! either fully commits or fails with a precondition error and no observable
//! effect.

use crate::domain::{BridgeConfig, BridgeId, BridgeResult, Hash, RequestCid, RequestState};
use async_trait::async_trait;

/// Oracle bridge API - inbound port.
#[async_trait]
pub trait BridgeApi: Send + Sync {
    /// Register a bridge config; returns its content fingerprint.
    ///
    /// Registering an identical config again is a no-op overwrite yielding
    /// the same identifier.
    async fn register_bridge(&self, config: BridgeConfig) -> BridgeId;

    /// Submit an attested response proposal for a pinned block.
    ///
    /// Pins the block on demand if not yet pinned. Returns the block at
    /// which the request's freeze window unlocks.
    async fn submit_response(
        &self,
        block_number: u64,
        bridge_id: BridgeId,
        response: String,
        attestation_bytes: Vec<u8>,
    ) -> BridgeResult<u64>;

    /// Finalize an undisputed, sufficiently staked response once the freeze
    /// window has elapsed.
    async fn finalize(
        &self,
        bridge_id: BridgeId,
        response: String,
        attestation_bytes: Vec<u8>,
    ) -> BridgeResult<()>;

    /// Pin a recent block's hash, write-once, within the lookback window.
    async fn pin_block(&self, block_number: u64) -> BridgeResult<()>;

    /// True while the arbiter reports any of the request's recorded disputes
    /// as still open. A request with zero recorded disputes is never active.
    async fn is_disputed(&self, request_cid: RequestCid) -> bool;

    /// Finalized value most recently certified for the bridge.
    fn latest_value(&self, bridge_id: &BridgeId) -> Option<Vec<u8>>;

    /// Finalized value for one (bridge, request) pair.
    fn value_for(&self, bridge_id: &BridgeId, request_cid: &RequestCid) -> Option<Vec<u8>>;

    /// Hash pinned for a block number.
    fn pinned_hash(&self, block_number: u64) -> BridgeResult<Hash>;

    /// Lifecycle position of a (bridge, request) pair.
    async fn request_state(&self, bridge_id: &BridgeId, request_cid: &RequestCid) -> RequestState;
}
