//! # Oracle Bridge
//!
//! An optimistic oracle bridge: economically staked indexers submit
//! cryptographically attested claims about the result of a parameterized
//! query against an external indexed dataset. Stake aggregates behind each
//! distinct claimed answer, and - absent a dispute - exactly one canonical
//! answer finalizes once a freeze window elapses and enough stake backs it.
//! Conflicting claims open disputes with an external arbiter.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Trust model
//!
//! | Guarantee | Mechanism |
//! |-----------|-----------|
//! | No wrong answer finalizes cheaply | per-answer stake must strictly exceed the bridge minimum |
//! | No premature finalization | freeze window anchored to the *first* proposal |
//! | Conflicts never slip through | every differing prior proposal opens an arbiter dispute |
//! | Deterministic queries | block hash pinned write-once inside the lookback window |
//!
//! Signature cryptography, stake accounting, and dispute adjudication live
//! with external collaborators behind outbound ports; this crate only parses
//! signatures structurally and aggregates reported stake.
//!
//! ## Module Structure
//!
//! ```text
//! oracle-bridge/
//! ├── domain/          # configs, attestation codec, extractor, ledgers, errors
//! ├── ports/           # BridgeApi; StakingRegistry, DisputeArbiter, ChainSource
//! ├── adapters/        # in-memory collaborator doubles
//! ├── events.rs        # outgoing watcher events
//! └── service.rs       # BridgeService orchestrator
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryChain, InMemoryStaking, MockArbiter, LOOKBACK_BLOCKS};
pub use domain::{
    keccak256, request_cid_for, Address, Attestation, BridgeConfig, BridgeError, BridgeId,
    BridgeResult, DatasetId, DisputeId, Hash, RequestCid, RequestState, ResponseCid,
    ResponseKind, ATTESTATION_SIZE_BYTES,
};
pub use events::BridgeEvent;
pub use ports::{BridgeApi, ChainSource, DisputeArbiter, StakingRegistry};
pub use service::BridgeService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
