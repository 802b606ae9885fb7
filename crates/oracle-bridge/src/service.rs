//! Bridge Service - orchestration of the public operations
//!
//! Owns every keyed table (bridge configs, pinned blocks, proposal records,
//! dispute sets, finalized values) behind one lock. Each operation brings
//! local state fully consistent before any outward collaborator call and
//! never holds the lock across an `.await`, so a collaborator that
//! transitively re-invokes the bridge only ever observes committed state.

use crate::domain::extractor;
use crate::domain::{
    keccak256, Attestation, BridgeConfig, BridgeError, BridgeId, BridgeResult, DisputeRegistry,
    Hash, ProposalLedger, RequestCid, RequestState,
};
use crate::events::BridgeEvent;
use crate::ports::inbound::BridgeApi;
use crate::ports::outbound::{ChainSource, DisputeArbiter, StakingRegistry};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Keyed tables the service mutates on behalf of callers.
#[derive(Default)]
struct BridgeState {
    /// bridgeID → registered config.
    bridges: HashMap<BridgeId, BridgeConfig>,
    /// blockNumber → pinned hash, write-once.
    pinned_blocks: HashMap<u64, Hash>,
    /// Proposal records across all bridges.
    proposals: ProposalLedger,
    /// requestCID → issued dispute ids.
    disputes: DisputeRegistry,
    /// (bridgeID, requestCID) → finalized value bytes.
    finalized: HashMap<(BridgeId, RequestCid), Vec<u8>>,
    /// bridgeID → most recently finalized value.
    latest: HashMap<BridgeId, Vec<u8>>,
    /// Outgoing events in transition order, drained by watchers.
    events: Vec<BridgeEvent>,
}

/// The bridge subsystem's orchestrator; implements [`BridgeApi`].
pub struct BridgeService {
    staking: Arc<dyn StakingRegistry>,
    arbiter: Arc<dyn DisputeArbiter>,
    chain: Arc<dyn ChainSource>,
    state: RwLock<BridgeState>,
}

impl BridgeService {
    /// Wire the service to its collaborators.
    pub fn new(
        staking: Arc<dyn StakingRegistry>,
        arbiter: Arc<dyn DisputeArbiter>,
        chain: Arc<dyn ChainSource>,
    ) -> Self {
        Self {
            staking,
            arbiter,
            chain,
            state: RwLock::new(BridgeState::default()),
        }
    }

    /// Drain the event log in emission order.
    pub fn take_events(&self) -> Vec<BridgeEvent> {
        std::mem::take(&mut self.state.write().events)
    }

    /// Fetch a block hash still inside the chain's lookback window.
    async fn resolve_recent_hash(&self, block_number: u64) -> BridgeResult<Hash> {
        let head = self.chain.head_number().await;
        self.chain.hash_at(block_number).await.ok_or(
            BridgeError::BlockOutOfLookbackWindow {
                requested: block_number,
                head,
            },
        )
    }

    /// Ask the arbiter whether any recorded dispute is still open.
    async fn any_dispute_active(&self, request_cid: &RequestCid) -> bool {
        let ids = self.state.read().disputes.ids_for(request_cid).to_vec();
        for id in ids {
            if self.arbiter.is_dispute_active(&id).await {
                return true;
            }
        }
        false
    }
}

#[async_trait]
impl BridgeApi for BridgeService {
    async fn register_bridge(&self, config: BridgeConfig) -> BridgeId {
        let bridge_id = config.fingerprint();
        let mut state = self.state.write();
        state.bridges.insert(bridge_id, config.clone());
        state.events.push(BridgeEvent::BridgeRegistered { bridge_id, config });
        info!("[bridge] registered bridge {}", hex::encode(bridge_id));
        bridge_id
    }

    async fn submit_response(
        &self,
        block_number: u64,
        bridge_id: BridgeId,
        response: String,
        attestation_bytes: Vec<u8>,
    ) -> BridgeResult<u64> {
        // Resolve the hash without committing the pin: a submission rejected
        // by any check below must leave the block unpinned.
        let pinned = self.state.read().pinned_blocks.get(&block_number).copied();
        let block_hash = match pinned {
            Some(hash) => hash,
            None => self.resolve_recent_hash(block_number).await?,
        };

        let config = self
            .state
            .read()
            .bridges
            .get(&bridge_id)
            .cloned()
            .ok_or(BridgeError::BridgeNotFound(bridge_id))?;

        let attestation = Attestation::parse(&attestation_bytes)?;
        attestation.verify_match(&block_hash, &config, &response)?;

        let indexer = self.arbiter.attested_indexer(&attestation).await;
        let stake = self.staking.stake_of(&indexer).await;
        if stake == 0 {
            return Err(BridgeError::IndexerHasNoStake(indexer));
        }

        let head = self.chain.head_number().await;
        let request_cid = attestation.request_cid;

        // Local commit first: the pin, the proposal and its stake are all
        // recorded before any outward call, so a re-entrant collaborator sees
        // them. A concurrent pin wins and its hash is reused.
        let (outcome, unlocks_at) = {
            let mut state = self.state.write();
            state.pinned_blocks.entry(block_number).or_insert(block_hash);
            let outcome = state.proposals.submit(
                bridge_id,
                request_cid,
                attestation.response_cid,
                attestation_bytes.clone(),
                indexer,
                stake,
                head,
            );
            let unlocks_at = outcome.anchor_block.saturating_add(config.freeze_period);
            (outcome, unlocks_at)
        };

        debug!(
            "[bridge] proposal for request {} by {} with stake {} (first: {}, new answer: {}), {} conflict(s)",
            hex::encode(request_cid),
            hex::encode(indexer),
            stake,
            outcome.first_proposal,
            outcome.new_answer,
            outcome.conflicting.len()
        );

        let mut issued = Vec::with_capacity(outcome.conflicting.len());
        for prior in &outcome.conflicting {
            issued.push(self.arbiter.open_conflict(prior, &attestation_bytes).await);
        }

        let mut state = self.state.write();
        for ids in issued {
            state.disputes.record_conflict(request_cid, ids);
            for dispute_id in [ids.0, ids.1] {
                state.events.push(BridgeEvent::DisputeOpened {
                    bridge_id,
                    request_cid,
                    dispute_id,
                });
            }
        }
        state.events.push(BridgeEvent::ResponseAdded {
            bridge_id,
            dataset_id: attestation.dataset_id,
            request_cid,
            response,
            attestation_bytes,
            unlocks_at,
        });
        Ok(unlocks_at)
    }

    async fn finalize(
        &self,
        bridge_id: BridgeId,
        response: String,
        attestation_bytes: Vec<u8>,
    ) -> BridgeResult<()> {
        let attestation = Attestation::parse(&attestation_bytes)?;
        let request_cid = attestation.request_cid;

        if self.any_dispute_active(&request_cid).await {
            return Err(BridgeError::RequestCurrentlyDisputed(request_cid));
        }

        let config = self
            .state
            .read()
            .bridges
            .get(&bridge_id)
            .cloned()
            .ok_or(BridgeError::BridgeNotFound(bridge_id))?;

        let head = self.chain.head_number().await;

        let extracted = {
            let state = self.state.read();
            let record = state
                .proposals
                .record(&bridge_id, &request_cid)
                .ok_or(BridgeError::NoProposalsYet)?;
            let anchor_block = record.anchor_block().ok_or(BridgeError::NoProposalsYet)?;

            let unlocks_at = anchor_block.saturating_add(config.freeze_period);
            if unlocks_at > head {
                return Err(BridgeError::StillFrozen {
                    unlocks_at,
                    current: head,
                });
            }

            let response_cid = keccak256(response.as_bytes());
            let got = record.stake_behind(&response_cid);
            if got <= config.minimum_stake {
                return Err(BridgeError::InsufficientStake {
                    got,
                    required: config.minimum_stake,
                });
            }

            extractor::extract(config.response_kind, response.as_bytes(), config.response_offset)?
        };

        let mut state = self.state.write();
        state
            .finalized
            .insert((bridge_id, request_cid), extracted.clone());
        state.latest.insert(bridge_id, extracted);
        state.events.push(BridgeEvent::ResultFinalized {
            bridge_id,
            request_cid,
            response,
        });
        info!(
            "[bridge] finalized request {} on bridge {}",
            hex::encode(request_cid),
            hex::encode(bridge_id)
        );
        Ok(())
    }

    async fn pin_block(&self, block_number: u64) -> BridgeResult<()> {
        if self.state.read().pinned_blocks.contains_key(&block_number) {
            return Err(BridgeError::BlockAlreadyPinned(block_number));
        }
        let hash = self.resolve_recent_hash(block_number).await?;

        let mut state = self.state.write();
        if state.pinned_blocks.contains_key(&block_number) {
            return Err(BridgeError::BlockAlreadyPinned(block_number));
        }
        state.pinned_blocks.insert(block_number, hash);
        debug!("[bridge] pinned block {} -> {}", block_number, hex::encode(hash));
        Ok(())
    }

    async fn is_disputed(&self, request_cid: RequestCid) -> bool {
        self.any_dispute_active(&request_cid).await
    }

    fn latest_value(&self, bridge_id: &BridgeId) -> Option<Vec<u8>> {
        self.state.read().latest.get(bridge_id).cloned()
    }

    fn value_for(&self, bridge_id: &BridgeId, request_cid: &RequestCid) -> Option<Vec<u8>> {
        self.state
            .read()
            .finalized
            .get(&(*bridge_id, *request_cid))
            .cloned()
    }

    fn pinned_hash(&self, block_number: u64) -> BridgeResult<Hash> {
        self.state
            .read()
            .pinned_blocks
            .get(&block_number)
            .copied()
            .ok_or(BridgeError::BlockNotPinned(block_number))
    }

    async fn request_state(&self, bridge_id: &BridgeId, request_cid: &RequestCid) -> RequestState {
        let head = self.chain.head_number().await;
        let state = self.state.read();
        if state.finalized.contains_key(&(*bridge_id, *request_cid)) {
            return RequestState::Finalized;
        }
        let Some(record) = state.proposals.record(bridge_id, request_cid) else {
            return RequestState::Empty;
        };
        let Some(anchor_block) = record.anchor_block() else {
            return RequestState::Empty;
        };
        let freeze_period = state
            .bridges
            .get(bridge_id)
            .map_or(0, |config| config.freeze_period);
        if anchor_block.saturating_add(freeze_period) <= head {
            RequestState::FreezeExpired
        } else {
            RequestState::Proposed
        }
    }
}
