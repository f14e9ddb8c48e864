//! Chain: the ordered, append-only sequence of blocks.
//!
//! The chain owns all mutation. Blocks are finalized inside
//! [`Chain::append`] and never touched again; every read walks the
//! sequence as-is. Callers needing shared access wrap the chain in the
//! registry's lock — the chain itself is deliberately single-owner.

use tracing::warn;

use starlog_core::{genesis_payload, Block, PendingBlock, Sha256Hash, StarData, StarEntry};

use crate::error::{AppendError, ChainViolation};

/// The ledger: blocks indexed by height, genesis at 0.
#[derive(Debug, Clone)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain with its genesis block already appended.
    ///
    /// Genesis is created synchronously here, so no caller can ever
    /// observe a chain without one.
    pub fn new(now: i64) -> Self {
        let genesis = PendingBlock::new(genesis_payload()).finalize(0, now, None);
        Self {
            blocks: vec![genesis],
        }
    }

    /// Height of the chain tip: `len - 1`, or -1 for an empty chain
    /// (never observable through the public constructor).
    pub fn height(&self) -> i64 {
        self.blocks.len() as i64 - 1
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Read-only view of the whole sequence, in height order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append primitive: finalize a pending block onto the tip.
    ///
    /// Assigns height and timestamp, captures the predecessor hash,
    /// computes the block hash over the finalized fields, and pushes.
    /// On failure the chain is left unmutated; failure itself signals a
    /// corrupted sequence, not a caller mistake.
    pub fn append(&mut self, pending: PendingBlock, now: i64) -> Result<&Block, AppendError> {
        let height = self.blocks.len() as u64;
        let prev_hash = if height == 0 {
            None
        } else {
            let prev = self
                .blocks
                .get(height as usize - 1)
                .ok_or(AppendError::MissingPredecessor { height })?;
            Some(prev.hash)
        };

        let block = pending.finalize(height, now, prev_hash);
        self.blocks.push(block);
        Ok(self.blocks.last().expect("pushed just above"))
    }

    /// The first block (by ascending height) with the given hash, if any.
    pub fn find_by_hash(&self, hash: &Sha256Hash) -> Option<&Block> {
        self.blocks.iter().find(|b| b.hash == *hash)
    }

    /// The block at the given height, if in range.
    pub fn find_by_height(&self, height: u64) -> Option<&Block> {
        self.blocks.get(height as usize)
    }

    /// All stars registered by `address`, in ascending height order.
    ///
    /// Sequential scan of every non-genesis block. An undecodable
    /// payload is skipped with a warning rather than aborting the scan;
    /// the audit in [`Chain::audit`] is the place that reports damage.
    pub fn entries_by_owner(&self, address: &str) -> Vec<StarData> {
        let mut stars = Vec::new();
        for block in self.blocks.iter().skip(1) {
            match block.decode_payload::<StarEntry>() {
                Ok(entry) => {
                    if entry.owner == address {
                        stars.push(entry.star);
                    }
                }
                Err(err) => {
                    warn!(height = block.height, %err, "skipping undecodable block in owner scan");
                }
            }
        }
        stars
    }

    /// Diagnostic scan of the whole chain.
    ///
    /// Checks every block's self-hash, and for each non-genesis block
    /// its linkage to the predecessor. Accumulates every violation in
    /// height order instead of short-circuiting; an empty report means
    /// the chain is valid. Read-only, single pass.
    pub fn audit(&self) -> Vec<ChainViolation> {
        let mut violations = Vec::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if !block.validate() {
                violations.push(ChainViolation::HashMismatch {
                    height: block.height,
                });
            }
            if i > 0 && block.prev_hash != Some(self.blocks[i - 1].hash) {
                violations.push(ChainViolation::BrokenLink {
                    height: block.height,
                });
            }
        }
        violations
    }
}
