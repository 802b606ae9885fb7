//! # Domain Errors
//!
//! Error taxonomy for the oracle bridge. Every variant is a precondition
//! failure: public operations either fully commit or leave no observable
//! effect, so there is no partial-write recovery path.

use super::value_objects::{Address, BridgeId, RequestCid};
use thiserror::Error;

/// Result alias used throughout the bridge.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Oracle bridge error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Block number is outside the trailing window the chain can still resolve.
    #[error("block {requested} outside lookback window (head {head})")]
    BlockOutOfLookbackWindow {
        /// Block number requested for pinning.
        requested: u64,
        /// Current chain head.
        head: u64,
    },

    /// Block number already has a pinned hash (write-once).
    #[error("block {0} already pinned")]
    BlockAlreadyPinned(u64),

    /// Block number has no pinned hash.
    #[error("block {0} not pinned")]
    BlockNotPinned(u64),

    /// No bridge registered under this identifier.
    #[error("bridge {} not found", hex::encode(.0))]
    BridgeNotFound(BridgeId),

    /// Attestation is not exactly 161 bytes.
    #[error("attestation must be 161 bytes, got {got}")]
    InvalidAttestationLength {
        /// Length of the rejected input.
        got: usize,
    },

    /// Recomputed requestCID does not match the attestation.
    #[error("requestCID does not match attestation")]
    RequestMismatch,

    /// Recomputed responseCID does not match the attestation.
    #[error("responseCID does not match attestation")]
    ResponseMismatch,

    /// Bridge's dataset does not match the attestation.
    #[error("datasetID does not match attestation")]
    DatasetMismatch,

    /// Attesting indexer has no slashable stake.
    #[error("indexer {} has no slashable stake", hex::encode(.0))]
    IndexerHasNoStake(Address),

    /// Request has at least one dispute the arbiter still reports open.
    #[error("request {} currently disputed", hex::encode(.0))]
    RequestCurrentlyDisputed(RequestCid),

    /// No proposal recorded for the request.
    #[error("no proposals recorded for request")]
    NoProposalsYet,

    /// Freeze window has not elapsed since the request's first proposal.
    #[error("proposal still frozen until block {unlocks_at} (current {current})")]
    StillFrozen {
        /// First block at which finalization becomes possible.
        unlocks_at: u64,
        /// Chain head at the time of the attempt.
        current: u64,
    },

    /// Stake behind the response does not strictly exceed the bridge minimum.
    #[error("stake {got} does not exceed required minimum {required}")]
    InsufficientStake {
        /// Stake recorded behind the response.
        got: u128,
        /// Bridge's minimum stake threshold.
        required: u128,
    },

    /// Scanner hit a character that is neither a digit nor a delimiter.
    #[error("invalid character 0x{byte:02x} at offset {offset}")]
    InvalidScanCharacter {
        /// Offending byte.
        byte: u8,
        /// Position within the response text.
        offset: usize,
    },

    /// Extraction would read past the end of the response text.
    #[error("read past end of response: offset {offset}, length {len}")]
    OutOfBounds {
        /// First byte the extractor needed.
        offset: usize,
        /// Length of the response text.
        len: usize,
    },

    /// Scanned decimal run does not fit in a u128.
    #[error("unsigned integer overflow while scanning at offset {offset}")]
    UintOverflow {
        /// Offset where scanning began.
        offset: usize,
    },
}
