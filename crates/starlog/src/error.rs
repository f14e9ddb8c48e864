//! Error types for the Starlog ledger.

use starlog_core::EncodeError;
use thiserror::Error;

/// Internal invariant violation during append.
///
/// Never part of normal control flow: an append on a correctly
/// operating chain cannot fail, so seeing one of these means the
/// sequence itself is corrupt.
#[derive(Debug, Error)]
pub enum AppendError {
    #[error("chain is non-contiguous: no predecessor below height {height}")]
    MissingPredecessor { height: u64 },
}

/// Errors from the registry workflow.
///
/// Each variant is one failure kind; callers match on the variant, not
/// on message text. Lookups are not represented here — an absent block
/// is a normal `None`, never an error.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The challenge string is missing its colon-delimited timestamp
    /// field, or the field is not an integer.
    #[error("malformed challenge message: {0}")]
    MalformedChallenge(String),

    /// More than the proof window's 300 seconds elapsed since the
    /// challenge was issued.
    #[error("proof window expired: {elapsed}s elapsed, window is {window}s")]
    ProofWindowExpired { elapsed: i64, window: i64 },

    /// The wallet signature did not verify against the message.
    #[error("signature verification failed for address {0}")]
    SignatureInvalid(String),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Append(#[from] AppendError),
}

/// One violation found by a chain audit.
///
/// The audit accumulates every violation in height order rather than
/// stopping at the first; the `Display` form is the report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainViolation {
    #[error("block {height} fails self-hash validation")]
    HashMismatch { height: u64 },

    #[error("block {height} previous-hash linkage broken")]
    BrokenLink { height: u64 },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
