//! # Starlog Core
//!
//! Pure primitives for the Starlog ledger: blocks, hashing, and the
//! payload codec.
//!
//! This crate contains no I/O and no clock. It is pure computation over
//! hash-linked data structures. The chain itself, the ownership-proof
//! workflow, and the wallet seam live in the `starlog` crate.
//!
//! ## Key Types
//!
//! - [`Block`] - One ledger entry, hash-linked to its predecessor
//! - [`PendingBlock`] - A block with only its payload set, before append
//! - [`Sha256Hash`] - 32-byte content digest
//! - [`StarEntry`] - The ownership-proven payload (`owner` + [`StarData`])
//!
//! ## Payload encoding
//!
//! Payloads are stored as the hex encoding of their JSON form and decode
//! back to typed structs. See [`payload`].

pub mod block;
pub mod error;
pub mod hash;
pub mod payload;

pub use block::{Block, PendingBlock};
pub use error::{DecodeError, EncodeError};
pub use hash::Sha256Hash;
pub use payload::{
    decode_payload, encode_payload, genesis_payload, GenesisPayload, StarData, StarEntry,
};
