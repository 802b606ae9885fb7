//! # Dispute Flows
//!
//! Conflict detection across submissions and arbiter-gated finalization.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{attest, harness_at, uint_config};
    use oracle_bridge::{Attestation, BridgeApi, BridgeError, BridgeEvent, InMemoryChain};

    const ANSWER_A: &str = r#"{"data":{"total":12345}}"#;
    const ANSWER_B: &str = r#"{"data":{"total":99999}}"#;

    #[tokio::test]
    async fn same_answer_never_disputes() {
        let h = harness_at(100);
        let bridge_id = h.service.register_bridge(uint_config()).await;
        let block_hash = InMemoryChain::block_hash(99);

        for tag in 1..=3u8 {
            let (att, indexer) = attest(&uint_config(), &block_hash, ANSWER_A, tag);
            h.staking.set_stake(indexer, 500);
            h.service
                .submit_response(99, bridge_id, ANSWER_A.into(), att)
                .await
                .unwrap();
        }

        assert_eq!(h.arbiter.conflicts_opened(), 0);
        let (att, _) = attest(&uint_config(), &block_hash, ANSWER_A, 1);
        let request_cid = Attestation::parse(&att).unwrap().request_cid;
        assert!(!h.service.is_disputed(request_cid).await);
    }

    #[tokio::test]
    async fn conflicting_answer_disputes_every_prior_entry() {
        let h = harness_at(100);
        let bridge_id = h.service.register_bridge(uint_config()).await;
        let block_hash = InMemoryChain::block_hash(99);

        // Submissions [A, A, B]: the B submission scans both prior A entries,
        // opening one conflict per entry (not per distinct answer).
        for tag in [1u8, 2] {
            let (att, indexer) = attest(&uint_config(), &block_hash, ANSWER_A, tag);
            h.staking.set_stake(indexer, 600);
            h.service
                .submit_response(99, bridge_id, ANSWER_A.into(), att)
                .await
                .unwrap();
        }
        let (att_b, indexer_b) = attest(&uint_config(), &block_hash, ANSWER_B, 3);
        h.staking.set_stake(indexer_b, 600);
        h.service
            .submit_response(99, bridge_id, ANSWER_B.into(), att_b.clone())
            .await
            .unwrap();

        assert_eq!(h.arbiter.conflicts_opened(), 2);

        // The arbiter issues a pair of ids per conflict; all are recorded.
        let dispute_events: Vec<_> = h
            .service
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, BridgeEvent::DisputeOpened { .. }))
            .collect();
        assert_eq!(dispute_events.len(), 4);

        let request_cid = Attestation::parse(&att_b).unwrap().request_cid;
        assert!(h.service.is_disputed(request_cid).await);
    }

    #[tokio::test]
    async fn disputed_request_cannot_finalize_until_resolved() {
        let h = harness_at(100);
        let bridge_id = h.service.register_bridge(uint_config()).await;
        let block_hash = InMemoryChain::block_hash(99);

        let (att_a, indexer_a) = attest(&uint_config(), &block_hash, ANSWER_A, 1);
        let (att_a2, indexer_a2) = attest(&uint_config(), &block_hash, ANSWER_A, 2);
        let (att_b, indexer_b) = attest(&uint_config(), &block_hash, ANSWER_B, 3);
        h.staking.set_stake(indexer_a, 600);
        h.staking.set_stake(indexer_a2, 600);
        h.staking.set_stake(indexer_b, 600);

        h.service
            .submit_response(99, bridge_id, ANSWER_A.into(), att_a.clone())
            .await
            .unwrap();
        h.service
            .submit_response(99, bridge_id, ANSWER_A.into(), att_a2)
            .await
            .unwrap();
        h.service
            .submit_response(99, bridge_id, ANSWER_B.into(), att_b.clone())
            .await
            .unwrap();

        let request_cid = Attestation::parse(&att_a).unwrap().request_cid;
        h.chain.advance_to(200);

        assert_eq!(
            h.service
                .finalize(bridge_id, ANSWER_A.into(), att_a.clone())
                .await
                .unwrap_err(),
            BridgeError::RequestCurrentlyDisputed(request_cid)
        );

        // The arbiter resolving every dispute unblocks the staked answer.
        h.arbiter.resolve_all();
        assert!(!h.service.is_disputed(request_cid).await);
        h.service
            .finalize(bridge_id, ANSWER_A.into(), att_a)
            .await
            .unwrap();

        // The thinly staked conflicting answer still cannot finalize.
        assert_eq!(
            h.service
                .finalize(bridge_id, ANSWER_B.into(), att_b)
                .await
                .unwrap_err(),
            BridgeError::InsufficientStake {
                got: 600,
                required: 1_000
            }
        );
    }

    #[tokio::test]
    async fn disputes_are_scoped_to_their_request() {
        let h = harness_at(100);
        let bridge_id = h.service.register_bridge(uint_config()).await;
        let block_hash = InMemoryChain::block_hash(99);

        let (att_a, indexer_a) = attest(&uint_config(), &block_hash, ANSWER_A, 1);
        let (att_b, indexer_b) = attest(&uint_config(), &block_hash, ANSWER_B, 2);
        h.staking.set_stake(indexer_a, 600);
        h.staking.set_stake(indexer_b, 600);
        h.service
            .submit_response(99, bridge_id, ANSWER_A.into(), att_a)
            .await
            .unwrap();
        h.service
            .submit_response(99, bridge_id, ANSWER_B.into(), att_b)
            .await
            .unwrap();

        assert_eq!(h.arbiter.conflicts_opened(), 1);
        assert!(!h.service.is_disputed([42u8; 32]).await);
    }
}
