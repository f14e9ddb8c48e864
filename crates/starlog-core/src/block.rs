//! Block: one entry in the ledger.
//!
//! A block is finalized exactly once, at append time. Its hash commits
//! to every other field, so a finalized block must never be mutated:
//! the stored hash is the integrity witness that chain audits check.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::hash::Sha256Hash;
use crate::payload::decode_payload;

/// A block holding only its payload, before it has been appended.
///
/// Height, timestamp, predecessor link, and hash are assigned by the
/// chain's append primitive via [`PendingBlock::finalize`].
#[derive(Debug, Clone)]
pub struct PendingBlock {
    payload: String,
}

impl PendingBlock {
    /// Create a pending block from an already-encoded payload.
    pub fn new(payload: String) -> Self {
        Self { payload }
    }

    /// Finalize into a full [`Block`], computing its hash over the
    /// now-complete field values.
    pub fn finalize(self, height: u64, timestamp: i64, prev_hash: Option<Sha256Hash>) -> Block {
        let hash = Sha256Hash::hash(&digest_input(
            height,
            timestamp,
            prev_hash.as_ref(),
            &self.payload,
        ));
        Block {
            height,
            timestamp,
            payload: self.payload,
            prev_hash,
            hash,
        }
    }
}

/// One finalized ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain. 0 is reserved for the genesis block.
    pub height: u64,

    /// Epoch seconds, assigned at append time.
    pub timestamp: i64,

    /// The encoded payload (hex of JSON). See [`crate::payload`].
    pub payload: String,

    /// Hash of the predecessor. `None` only at height 0.
    pub prev_hash: Option<Sha256Hash>,

    /// SHA-256 over this block's own finalized fields.
    pub hash: Sha256Hash,
}

impl Block {
    /// Recompute the hash from the block's current field values.
    ///
    /// Deterministic and side-effect free. Equal to `self.hash` iff the
    /// block has not been tampered with since finalization.
    pub fn compute_hash(&self) -> Sha256Hash {
        Sha256Hash::hash(&digest_input(
            self.height,
            self.timestamp,
            self.prev_hash.as_ref(),
            &self.payload,
        ))
    }

    /// Block-level tamper check: does the stored hash still match the
    /// recomputed one? Linkage to the predecessor is the chain's job.
    pub fn validate(&self) -> bool {
        self.compute_hash() == self.hash
    }

    /// Decode the stored payload back to its structured form.
    pub fn decode_payload<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        decode_payload(&self.payload)
    }

    /// Whether this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.height == 0
    }
}

/// The byte string the block hash commits to.
///
/// Layout: height LE || timestamp LE || prev_hash (absent at genesis,
/// which is unambiguous because height is committed first) || payload.
fn digest_input(
    height: u64,
    timestamp: i64,
    prev_hash: Option<&Sha256Hash>,
    payload: &str,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + 8 + 32 + payload.len());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&timestamp.to_le_bytes());
    if let Some(prev) = prev_hash {
        bytes.extend_from_slice(prev.as_bytes());
    }
    bytes.extend_from_slice(payload.as_bytes());
    bytes
}
