//! # Starlog
//!
//! An append-only, tamper-evident in-memory ledger of hash-linked
//! blocks, with a wallet-signature workflow for registering
//! ownership-proven star entries.
//!
//! ## Overview
//!
//! - **Chain**: blocks indexed by height, each committing to its
//!   predecessor's hash. Genesis (height 0) is created at construction.
//! - **Ownership proof**: a two-step challenge/response. The registry
//!   issues `"<address>:<epochSeconds>:starRegistry"`; the caller signs
//!   it with the wallet key and submits the signature together with the
//!   star data. A valid proof inside the 300-second window appends a
//!   [`StarEntry`] block.
//! - **Audit**: [`StarRegistry::audit`] walks the whole chain and
//!   reports every self-hash or linkage violation, never just the first.
//!
//! Single-writer, single-process, nothing persisted: the chain lives
//! and dies with the owning [`StarRegistry`]. Consensus, persistence,
//! and network exposure are explicitly out of scope; an API layer
//! serializes these operations to whatever transport it wants.
//!
//! ## Usage
//!
//! ```rust
//! use starlog::{StarRegistry, StarData, Wallet};
//!
//! let registry = StarRegistry::new();
//! let wallet = Wallet::generate();
//!
//! let message = registry.request_proof_message(&wallet.address());
//! let signature = wallet.sign(&message);
//!
//! let star = StarData {
//!     ra: "16h 29m 1.0s".to_string(),
//!     dec: "-26° 29' 24.9\"".to_string(),
//!     story: "our first star".to_string(),
//! };
//! let block = registry
//!     .submit_entry(&wallet.address(), &message, &signature, star)
//!     .unwrap();
//!
//! assert_eq!(block.height, 1);
//! assert!(registry.audit().is_empty());
//! ```

pub mod challenge;
pub mod chain;
pub mod clock;
pub mod error;
pub mod registry;
pub mod wallet;

pub use challenge::PROOF_WINDOW_SECS;
pub use chain::Chain;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AppendError, ChainViolation, RegistryError, Result};
pub use registry::StarRegistry;
pub use wallet::{Ed25519Verifier, Wallet, WalletVerify};

// Re-export the core primitives callers handle directly.
pub use starlog_core::{Block, DecodeError, PendingBlock, Sha256Hash, StarData, StarEntry};
