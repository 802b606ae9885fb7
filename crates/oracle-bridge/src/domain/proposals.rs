//! # Proposal Ledger
//!
//! Per (bridge, request) aggregation of candidate answers and the stake
//! backing each one. The freeze-window clock anchors to the request's first
//! proposal, so flooding later proposals can never reset the window.

use super::entities::ResponseProposal;
use super::value_objects::{Address, BridgeId, RequestCid, ResponseCid};
use std::collections::HashMap;

/// Stake recorded behind one candidate answer.
#[derive(Clone, Debug, Default)]
pub struct StakeEntry {
    /// Running total for this responseCID.
    pub total: u128,
    /// Last observed slashable stake per indexer.
    pub by_indexer: HashMap<Address, u128>,
}

/// Everything recorded for one (bridge, requestCID) pair.
#[derive(Clone, Debug, Default)]
pub struct ProposalRecord {
    /// Ordered proposals as submitted.
    pub proposals: Vec<ResponseProposal>,
    /// Stake ledger keyed by candidate answer.
    pub stake: HashMap<ResponseCid, StakeEntry>,
    /// Stake across all candidate answers.
    pub total_stake: u128,
    /// Number of distinct responseCIDs seen (not submission count).
    pub proposal_count: u64,
}

impl ProposalRecord {
    /// Freeze-window anchor: the block observed at the first proposal.
    pub fn anchor_block(&self) -> Option<u64> {
        self.proposals.first().map(|p| p.anchor_block)
    }

    /// Total stake currently recorded behind one candidate answer.
    pub fn stake_behind(&self, response_cid: &ResponseCid) -> u128 {
        self.stake.get(response_cid).map_or(0, |entry| entry.total)
    }
}

/// What one submission changed, for the orchestrator to act on.
#[derive(Clone, Debug)]
pub struct SubmitOutcome {
    /// Anchor block of the request (fixed at the first proposal).
    pub anchor_block: u64,
    /// True if this submission created the record.
    pub first_proposal: bool,
    /// True if this responseCID had never been seen for this request.
    pub new_answer: bool,
    /// Raw attestation bytes of every prior entry whose responseCID differs
    /// from the one just submitted, in submission order. One dispute is
    /// opened per entry, so repeated same-answer submissions each count.
    pub conflicting: Vec<Vec<u8>>,
}

/// Keyed table of proposal records across all bridges.
#[derive(Debug, Default)]
pub struct ProposalLedger {
    records: HashMap<(BridgeId, RequestCid), ProposalRecord>,
}

impl ProposalLedger {
    /// Record for a (bridge, request) pair, if any proposal exists.
    pub fn record(&self, bridge_id: &BridgeId, request_cid: &RequestCid) -> Option<&ProposalRecord> {
        self.records.get(&(*bridge_id, *request_cid))
    }

    /// Record a proposal and the indexer's stake behind it.
    ///
    /// The per-indexer entry is overwritten with the freshly observed stake,
    /// but both running totals add unconditionally. An indexer resubmitting
    /// the same attestation therefore inflates the totals; this reproduces
    /// the reference behavior and is tracked as an open question in
    /// DESIGN.md rather than silently fixed here.
    pub fn submit(
        &mut self,
        bridge_id: BridgeId,
        request_cid: RequestCid,
        response_cid: ResponseCid,
        attestation_bytes: Vec<u8>,
        indexer: Address,
        indexer_stake: u128,
        current_block: u64,
    ) -> SubmitOutcome {
        let record = self.records.entry((bridge_id, request_cid)).or_default();

        let new_answer = record.stake_behind(&response_cid) == 0;
        if new_answer {
            record.proposal_count += 1;
        }

        let first_proposal = record.proposals.is_empty();
        let anchor_block = record.anchor_block().unwrap_or(current_block);

        record.proposals.push(ResponseProposal {
            response_cid,
            attestation_bytes,
            anchor_block,
        });

        let entry = record.stake.entry(response_cid).or_default();
        entry.by_indexer.insert(indexer, indexer_stake);
        entry.total = entry.total.saturating_add(indexer_stake);
        record.total_stake = record.total_stake.saturating_add(indexer_stake);

        let conflicting = record
            .proposals
            .iter()
            .filter(|p| p.response_cid != response_cid)
            .map(|p| p.attestation_bytes.clone())
            .collect();

        SubmitOutcome {
            anchor_block,
            first_proposal,
            new_answer,
            conflicting,
        }
    }
}
