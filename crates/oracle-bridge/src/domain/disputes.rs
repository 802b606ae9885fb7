//! # Dispute Registry
//!
//! Bookkeeping of dispute identifiers opened for a request. Adjudication
//! lives entirely with the external arbiter; this registry only remembers
//! which identifiers were issued so liveness can be queried later.

use super::value_objects::{DisputeId, RequestCid};
use std::collections::HashMap;

/// requestCID → ordered dispute identifiers issued by the arbiter.
#[derive(Debug, Default)]
pub struct DisputeRegistry {
    disputes: HashMap<RequestCid, Vec<DisputeId>>,
}

impl DisputeRegistry {
    /// Record both identifiers the arbiter returned for one conflict.
    pub fn record_conflict(&mut self, request_cid: RequestCid, ids: (DisputeId, DisputeId)) {
        let entry = self.disputes.entry(request_cid).or_default();
        entry.push(ids.0);
        entry.push(ids.1);
    }

    /// Dispute identifiers recorded for a request, in issue order.
    pub fn ids_for(&self, request_cid: &RequestCid) -> &[DisputeId] {
        self.disputes.get(request_cid).map_or(&[], Vec::as_slice)
    }

    /// True if any dispute was ever recorded for the request.
    pub fn has_disputes(&self, request_cid: &RequestCid) -> bool {
        !self.ids_for(request_cid).is_empty()
    }
}
