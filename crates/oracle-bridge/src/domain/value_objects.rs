//! # Domain Value Objects
//!
//! Immutable value types for the oracle bridge.

use serde::{Deserialize, Serialize};

/// 32-byte content fingerprint (Keccak-256 digest).
pub type Hash = [u8; 32];

/// 20-byte account address.
pub type Address = [u8; 20];

/// Identifier of a registered bridge: the Keccak-256 fingerprint of its config.
pub type BridgeId = Hash;

/// Fingerprint of a fully reconstructed query string.
pub type RequestCid = Hash;

/// Fingerprint of a raw response text.
pub type ResponseCid = Hash;

/// Identifier issued by the external dispute arbiter.
pub type DisputeId = Hash;

/// Identifier of the external indexed dataset a bridge queries.
pub type DatasetId = Hash;

/// Shape of the typed answer extracted from a response text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseKind {
    /// 20 raw bytes packed big-endian into an address.
    Address,
    /// 64 hexadecimal characters decoded into 32 bytes.
    Bytes32,
    /// ASCII decimal digits up to a delimiter, packed as a 32-byte big-endian integer.
    Uint,
}

/// Lifecycle of a (bridge, request) pair.
///
/// Transitions are one-directional; a request may be disputed while proposed,
/// and a disputed request can never finalize while any dispute is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestState {
    /// No proposal recorded yet.
    #[default]
    Empty,
    /// At least one proposal recorded, freeze window running.
    Proposed,
    /// Freeze window elapsed, eligible for finalization.
    FreezeExpired,
    /// Canonical answer extracted and stored.
    Finalized,
}
