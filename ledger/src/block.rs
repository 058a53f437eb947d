//! # Block Structure
//!
//! A block is one ledger entry: a position, a creation time, an arbitrary
//! payload, a link to the predecessor's digest, and its own digest over
//! all of the above.
//!
//! ## Block Layout
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │  Block                                         │
//! │  ├── index: u64           (0 = genesis)        │
//! │  ├── timestamp: DateTime<Utc>                  │
//! │  ├── payload: serde_json::Value                │
//! │  ├── previous_digest: [u8; 32]  (zeros = none) │
//! │  └── digest: [u8; 32]     (SHA-256 of above)   │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! ## Digest Computation
//!
//! The digest covers `index || timestamp || canonical(payload) ||
//! previous_digest`, with the integer fields as little-endian bytes, the
//! timestamp as epoch milliseconds, and the payload in its canonical
//! sorted-key JSON form (see [`crate::payload`]). The digest itself is
//! obviously not part of its own preimage.
//!
//! ## Mutability
//!
//! Committed blocks *can* be mutated through the explicitly named tamper
//! hooks ([`Block::tamper_payload`], [`Block::resync_digest`],
//! [`Chain::block_mut`](crate::chain::Chain::block_mut)). This is
//! deliberate: the whole demonstration is that mutation happens and gets
//! caught. Real deployments should treat committed blocks as append-only
//! and keep the hooks out of production call paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{DIGEST_LENGTH, GENESIS_PARENT_DIGEST, GENESIS_PAYLOAD};
use crate::crypto::sha256_multi;
use crate::error::LedgerError;
use crate::payload::{canonical_json, to_canonical_value};

/// One ledger entry.
///
/// Freshly constructed blocks carry provisional linkage: index 0 and a
/// zeroed `previous_digest`. [`Chain::append`](crate::chain::Chain::append)
/// overwrites both with the chain-assigned authoritative values and
/// recomputes the digest before storing the block; only the payload and
/// timestamp survive as the caller provided them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain (0-indexed, genesis = 0).
    pub(crate) index: u64,
    /// Creation time, captured at construction. Included in the digest
    /// preimage as epoch milliseconds; not required to be unique or
    /// monotonic.
    pub(crate) timestamp: DateTime<Utc>,
    /// Arbitrary structured payload, opaque to the chain algorithm.
    pub(crate) payload: Value,
    /// Digest of the predecessor block. All zeros for genesis.
    pub(crate) previous_digest: [u8; DIGEST_LENGTH],
    /// SHA-256 digest of this block's canonical content.
    pub(crate) digest: [u8; DIGEST_LENGTH],
}

impl Block {
    /// Construct a new provisional block around a payload.
    ///
    /// The block is born with index 0 and a zeroed predecessor digest;
    /// its digest is computed immediately so the self-consistency
    /// invariant holds from the first instant. Append it to a
    /// [`Chain`](crate::chain::Chain) to receive authoritative linkage.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::PayloadSerialization`] if the payload has
    /// no JSON representation — rejected here so an unhashable payload
    /// can never reach the chain.
    pub fn new<T: Serialize>(payload: T) -> Result<Self, LedgerError> {
        Ok(Self::from_value(to_canonical_value(payload)?))
    }

    /// Construct the genesis block.
    ///
    /// Index 0, zeroed predecessor digest, and the well-known sentinel
    /// payload. The timestamp is captured at construction like any other
    /// block, so genesis digests differ across runs — harmless, because
    /// genesis is the trust anchor and is never digest-checked.
    pub fn genesis() -> Self {
        Self::from_value(Value::String(GENESIS_PAYLOAD.to_string()))
    }

    /// Infallible constructor over an already-normalized payload.
    fn from_value(payload: Value) -> Self {
        let mut block = Block {
            index: 0,
            timestamp: Utc::now(),
            payload,
            previous_digest: GENESIS_PARENT_DIGEST,
            digest: [0u8; DIGEST_LENGTH],
        };
        block.digest = block.compute_digest();
        block
    }

    /// Recompute the digest from the block's current field values.
    ///
    /// Pure and deterministic: unchanged fields reproduce the same digest
    /// on every call. This referential transparency is the entire
    /// security property of the ledger — validation works by comparing
    /// the stored digest against this function's output.
    pub fn compute_digest(&self) -> [u8; DIGEST_LENGTH] {
        let canonical_payload = canonical_json(&self.payload);
        sha256_multi(&[
            &self.index.to_le_bytes(),
            &self.timestamp.timestamp_millis().to_le_bytes(),
            canonical_payload.as_bytes(),
            &self.previous_digest,
        ])
    }

    /// Whether this block sits at the genesis position with no recorded
    /// predecessor.
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.previous_digest == GENESIS_PARENT_DIGEST
    }

    /// Position in the chain.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Creation time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The payload, in its normalized JSON form.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// The recorded predecessor digest. All zeros for genesis.
    pub fn previous_digest(&self) -> [u8; DIGEST_LENGTH] {
        self.previous_digest
    }

    /// The committed digest.
    pub fn digest(&self) -> [u8; DIGEST_LENGTH] {
        self.digest
    }

    /// Return the digest as a hex string.
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Return the predecessor digest as a hex string.
    pub fn previous_digest_hex(&self) -> String {
        hex::encode(self.previous_digest)
    }

    // -----------------------------------------------------------------------
    // Tamper hooks
    // -----------------------------------------------------------------------

    /// Overwrite the payload *without* recomputing the digest.
    ///
    /// Tamper-demonstration hook. The block is left self-inconsistent on
    /// purpose, which is exactly what validation exists to catch. Keep
    /// this out of production call paths.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::PayloadSerialization`] if the replacement
    /// payload has no JSON representation.
    pub fn tamper_payload<T: Serialize>(&mut self, payload: T) -> Result<(), LedgerError> {
        self.payload = to_canonical_value(payload)?;
        Ok(())
    }

    /// Re-sync the stored digest to the block's current fields.
    ///
    /// Tamper-demonstration hook: the move an attacker makes after
    /// editing a payload, hoping to slip past the self-consistency check.
    /// It restores self-consistency but breaks the successor's link —
    /// which is why the chain still catches it.
    pub fn resync_digest(&mut self) {
        self.digest = self.compute_digest();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_block_is_self_consistent() {
        let block = Block::new(json!({"amount": 10})).unwrap();
        assert_eq!(block.digest(), block.compute_digest());
    }

    #[test]
    fn genesis_block_properties() {
        let genesis = Block::genesis();
        assert_eq!(genesis.index(), 0);
        assert_eq!(genesis.previous_digest(), GENESIS_PARENT_DIGEST);
        assert_eq!(genesis.payload(), &json!(GENESIS_PAYLOAD));
        assert!(genesis.is_genesis());
    }

    #[test]
    fn genesis_is_self_consistent() {
        let genesis = Block::genesis();
        assert_eq!(genesis.digest(), genesis.compute_digest());
    }

    #[test]
    fn compute_digest_is_deterministic() {
        let block = Block::new(json!({"amount": 30})).unwrap();
        assert_eq!(block.compute_digest(), block.compute_digest());
    }

    #[test]
    fn digest_depends_on_payload() {
        let mut block = Block::new(json!({"amount": 10})).unwrap();
        let before = block.compute_digest();
        block.tamper_payload(json!({"amount": 200})).unwrap();
        assert_ne!(before, block.compute_digest());
    }

    #[test]
    fn tamper_breaks_self_consistency_until_resync() {
        let mut block = Block::new(json!({"amount": 10})).unwrap();
        block.tamper_payload(json!({"amount": 200})).unwrap();
        assert_ne!(block.digest(), block.compute_digest());

        block.resync_digest();
        assert_eq!(block.digest(), block.compute_digest());
    }

    #[test]
    fn structurally_equal_payloads_hash_identically() {
        // Two blocks can't share a timestamp reliably, so compare preimage
        // sensitivity the other way: same block, payload rebuilt with a
        // different key insertion order, digest unchanged.
        let mut block = Block::new(json!({"a": 1, "b": 2})).unwrap();
        let before = block.compute_digest();

        let mut reordered = serde_json::Map::new();
        reordered.insert("b".to_string(), json!(2));
        reordered.insert("a".to_string(), json!(1));
        block.tamper_payload(Value::Object(reordered)).unwrap();

        assert_eq!(before, block.compute_digest());
    }

    #[test]
    fn unserializable_payload_is_rejected() {
        use std::collections::BTreeMap;
        let mut map: BTreeMap<Vec<u8>, u64> = BTreeMap::new();
        map.insert(vec![1], 10);
        assert!(Block::new(&map).is_err());
    }

    #[test]
    fn block_serialization_roundtrip() {
        let block = Block::new(json!({"amount": 10})).unwrap();
        let encoded = serde_json::to_string(&block).expect("serialize");
        let recovered: Block = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(block, recovered);
    }
}
