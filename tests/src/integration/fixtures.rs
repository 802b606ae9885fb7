//! Shared fixtures: a wired service plus attestation crafting that mirrors
//! what an indexer produces off-chain.

use oracle_bridge::{
    keccak256, request_cid_for, Address, Attestation, BridgeConfig, BridgeService, Hash,
    InMemoryChain, InMemoryStaking, MockArbiter, ResponseKind,
};
use std::sync::Arc;

/// Wired service handle with direct access to the collaborator doubles.
pub struct Harness {
    pub service: BridgeService,
    pub staking: Arc<InMemoryStaking>,
    pub arbiter: Arc<MockArbiter>,
    pub chain: Arc<InMemoryChain>,
}

/// Service over fresh in-memory collaborators at the given chain head.
pub fn harness_at(head: u64) -> Harness {
    let staking = Arc::new(InMemoryStaking::new());
    let arbiter = Arc::new(MockArbiter::new());
    let chain = Arc::new(InMemoryChain::new(head));
    let service = BridgeService::new(staking.clone(), arbiter.clone(), chain.clone());
    Harness {
        service,
        staking,
        arbiter,
        chain,
    }
}

/// A bridge over a GraphQL-style numeric response.
///
/// Offset 17 points at the first digit of `{"data":{"total":12345}}`.
pub fn uint_config() -> BridgeConfig {
    BridgeConfig {
        query_prefix: b"{\"query\":\"{ total(block: \\\"".to_vec(),
        query_suffix: b"\\\") }\"}".to_vec(),
        dataset_id: [7u8; 32],
        response_kind: ResponseKind::Uint,
        response_offset: 17,
        freeze_period: 10,
        minimum_stake: 1_000,
    }
}

/// Craft the attestation an indexer identified by `signer_tag` would sign for
/// `response` against `config` at `block_hash`. Returns the 161-byte wire
/// form and the indexer address the mock arbiter recovers from it.
pub fn attest(
    config: &BridgeConfig,
    block_hash: &Hash,
    response: &str,
    signer_tag: u8,
) -> (Vec<u8>, Address) {
    let attestation = Attestation {
        request_cid: request_cid_for(block_hash, config),
        response_cid: keccak256(response.as_bytes()),
        dataset_id: config.dataset_id,
        sig_r: [signer_tag; 32],
        sig_s: [signer_tag.wrapping_add(1); 32],
        sig_v: 27,
    };
    let indexer = MockArbiter::derive_indexer(&attestation);
    (attestation.to_bytes(), indexer)
}
