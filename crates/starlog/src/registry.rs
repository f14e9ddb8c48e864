//! The star registry: the public, thread-safe face of the ledger.
//!
//! Wraps the chain in a lock so each append runs as one critical
//! section (height assignment through push), and readers only ever see
//! fully finalized blocks.

use std::sync::RwLock;

use starlog_core::{encode_payload, Block, PendingBlock, Sha256Hash, StarData, StarEntry};

use crate::challenge::{self, PROOF_WINDOW_SECS};
use crate::chain::Chain;
use crate::clock::{Clock, SystemClock};
use crate::error::{ChainViolation, RegistryError, Result};
use crate::wallet::{Ed25519Verifier, WalletVerify};

/// The registry over an in-memory [`Chain`].
///
/// Generic over the signature-verification and clock seams; production
/// callers use [`StarRegistry::new`], tests inject a fixed clock or a
/// stub verifier.
pub struct StarRegistry<V = Ed25519Verifier, C = SystemClock> {
    chain: RwLock<Chain>,
    verifier: V,
    clock: C,
}

impl StarRegistry {
    /// Create a registry with the default Ed25519 verifier and the
    /// system clock. The genesis block exists before this returns.
    pub fn new() -> Self {
        Self::with_parts(Ed25519Verifier, SystemClock)
    }
}

impl Default for StarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: WalletVerify, C: Clock> StarRegistry<V, C> {
    /// Create a registry with explicit seams.
    pub fn with_parts(verifier: V, clock: C) -> Self {
        let now = clock.now();
        Self {
            chain: RwLock::new(Chain::new(now)),
            verifier,
            clock,
        }
    }

    /// Access the clock seam (tests drive a [`crate::clock::FixedClock`]
    /// through this).
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current chain height (0 right after construction).
    pub fn height(&self) -> i64 {
        self.chain.read().expect("chain lock poisoned").height()
    }

    /// Step one of the ownership proof: issue a challenge for an
    /// address. Stateless — the issue time lives in the message itself.
    pub fn request_proof_message(&self, address: &str) -> String {
        challenge::proof_message(address, self.clock.now())
    }

    /// Step two of the ownership proof: verify and register.
    ///
    /// Rejects if the challenge is malformed, older than the proof
    /// window (inclusive boundary: exactly 300s still passes), or the
    /// signature does not prove control of `address`. On any rejection
    /// the chain is untouched. On success the star is appended as a
    /// [`StarEntry`] owned by `address` and the finalized block is
    /// returned.
    pub fn submit_entry(
        &self,
        address: &str,
        message: &str,
        signature: &str,
        star: StarData,
    ) -> Result<Block> {
        let now = self.clock.now();

        let issued_at = challenge::embedded_timestamp(message)?;
        let elapsed = now - issued_at;
        if elapsed > PROOF_WINDOW_SECS {
            return Err(RegistryError::ProofWindowExpired {
                elapsed,
                window: PROOF_WINDOW_SECS,
            });
        }

        if !self.verifier.verify(message, address, signature) {
            return Err(RegistryError::SignatureInvalid(address.to_string()));
        }

        let entry = StarEntry {
            owner: address.to_string(),
            star,
        };
        let payload = encode_payload(&entry)?;

        let mut chain = self.chain.write().expect("chain lock poisoned");
        let block = chain.append(PendingBlock::new(payload), now)?;
        Ok(block.clone())
    }

    /// The first block with the given hash; `None` for unknown hashes.
    pub fn find_by_hash(&self, hash: &Sha256Hash) -> Option<Block> {
        self.chain
            .read()
            .expect("chain lock poisoned")
            .find_by_hash(hash)
            .cloned()
    }

    /// The block at the given height; `None` if out of range.
    pub fn find_by_height(&self, height: u64) -> Option<Block> {
        self.chain
            .read()
            .expect("chain lock poisoned")
            .find_by_height(height)
            .cloned()
    }

    /// All stars registered by `address`, in ascending height order.
    pub fn entries_by_owner(&self, address: &str) -> Vec<StarData> {
        self.chain
            .read()
            .expect("chain lock poisoned")
            .entries_by_owner(address)
    }

    /// Audit the whole chain; empty report means valid.
    pub fn audit(&self) -> Vec<ChainViolation> {
        self.chain.read().expect("chain lock poisoned").audit()
    }
}
