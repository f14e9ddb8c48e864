//! Error types for Starlog core primitives.

use thiserror::Error;

/// A stored payload could not be decoded back to its structured form.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A structured payload could not be serialized for storage.
#[derive(Debug, Error)]
#[error("payload encoding failed: {0}")]
pub struct EncodeError(#[from] serde_json::Error);
