//! # Attestation Codec
//!
//! Parsing and structural verification of the fixed-length binary attestation
//! an indexer signs over a (query, response) pair.
//!
//! No cryptographic check happens here: signature fields are carried through
//! structurally for the external dispute arbiter, which recovers the signer
//! when adjudicating a conflict.

use super::errors::{BridgeError, BridgeResult};
use super::entities::BridgeConfig;
use super::value_objects::{DatasetId, Hash, RequestCid, ResponseCid};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

/// Receipt portion: three 32-byte fields.
pub const RECEIPT_SIZE_BYTES: usize = 96;
/// Signature portion: r(32) || s(32) || v(1).
pub const SIG_SIZE_BYTES: usize = 65;
/// Full wire size of an attestation.
pub const ATTESTATION_SIZE_BYTES: usize = RECEIPT_SIZE_BYTES + SIG_SIZE_BYTES;

/// A signed claim binding a query fingerprint to a response fingerprint and
/// dataset identifier. Produced off-chain by an indexer; only parsed and
/// validated here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// Fingerprint of the fully reconstructed query string.
    pub request_cid: RequestCid,
    /// Fingerprint of the raw response text.
    pub response_cid: ResponseCid,
    /// Dataset the indexer served the query against.
    pub dataset_id: DatasetId,
    /// ECDSA signature r component (structural only).
    pub sig_r: [u8; 32],
    /// ECDSA signature s component (structural only).
    pub sig_s: [u8; 32],
    /// ECDSA recovery byte (structural only).
    pub sig_v: u8,
}

impl Attestation {
    /// Parse the 161-byte wire form:
    /// `requestCID(32) || responseCID(32) || datasetID(32) || r(32) || s(32) || v(1)`.
    ///
    /// Any other length fails with [`BridgeError::InvalidAttestationLength`].
    pub fn parse(data: &[u8]) -> BridgeResult<Self> {
        if data.len() != ATTESTATION_SIZE_BYTES {
            return Err(BridgeError::InvalidAttestationLength { got: data.len() });
        }

        let mut request_cid = [0u8; 32];
        let mut response_cid = [0u8; 32];
        let mut dataset_id = [0u8; 32];
        let mut sig_r = [0u8; 32];
        let mut sig_s = [0u8; 32];

        request_cid.copy_from_slice(&data[0..32]);
        response_cid.copy_from_slice(&data[32..64]);
        dataset_id.copy_from_slice(&data[64..96]);
        sig_r.copy_from_slice(&data[96..128]);
        sig_s.copy_from_slice(&data[128..160]);

        Ok(Self {
            request_cid,
            response_cid,
            dataset_id,
            sig_r,
            sig_s,
            sig_v: data[160],
        })
    }

    /// Re-serialize to the exact 161-byte wire form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(ATTESTATION_SIZE_BYTES);
        out.extend_from_slice(&self.request_cid);
        out.extend_from_slice(&self.response_cid);
        out.extend_from_slice(&self.dataset_id);
        out.extend_from_slice(&self.sig_r);
        out.extend_from_slice(&self.sig_s);
        out.push(self.sig_v);
        out
    }

    /// Check this attestation against what the bridge itself can recompute.
    ///
    /// Rebuilds the expected requestCID from the bridge's query template and
    /// the pinned block hash, rehashes the response text, and compares both
    /// plus the dataset identifier. Each mismatch fails with its own variant
    /// so callers can distinguish causes.
    pub fn verify_match(
        &self,
        block_hash: &Hash,
        config: &BridgeConfig,
        response: &str,
    ) -> BridgeResult<()> {
        let expected_request = request_cid_for(block_hash, config);
        if self.request_cid != expected_request {
            return Err(BridgeError::RequestMismatch);
        }
        if self.response_cid != keccak256(response.as_bytes()) {
            return Err(BridgeError::ResponseMismatch);
        }
        if self.dataset_id != config.dataset_id {
            return Err(BridgeError::DatasetMismatch);
        }
        Ok(())
    }
}

/// Keccak-256 content fingerprint, the hash behind every CID in the system.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Fingerprint of the query an indexer would have served for `block_hash`:
/// `keccak256(prefix || hex64(blockHash) || suffix)`.
pub fn request_cid_for(block_hash: &Hash, config: &BridgeConfig) -> RequestCid {
    let mut query = Vec::with_capacity(
        config.query_prefix.len() + 64 + config.query_suffix.len(),
    );
    query.extend_from_slice(&config.query_prefix);
    query.extend_from_slice(hex64(block_hash).as_bytes());
    query.extend_from_slice(&config.query_suffix);
    keccak256(&query)
}

/// Lowercase fixed-width hexadecimal text of a 32-byte hash: 64 characters,
/// no separators. Used only to rebuild the exact query text an indexer sent.
pub fn hex64(hash: &Hash) -> String {
    hex::encode(hash)
}
