//! Typed payloads and the hex-of-JSON codec.
//!
//! Every block stores its payload encoded: the JSON form of a typed
//! struct, hex-encoded. The codec is the inverse pair
//! [`encode_payload`] / [`decode_payload`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, EncodeError};

/// The fixed genesis payload, pre-encoded.
///
/// Kept as literal bytes so chain initialization has no fallible step.
const GENESIS_JSON: &[u8] = br#"{"data":"Genesis Block"}"#;

/// The sentinel payload of the genesis block (height 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisPayload {
    pub data: String,
}

/// Astronomical coordinates and the registrant's story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarData {
    /// Right ascension, e.g. `"16h 29m 1.0s"`.
    pub ra: String,
    /// Declination, e.g. `"-26° 29' 24.9\""`.
    pub dec: String,
    pub story: String,
}

/// The payload of every non-genesis block: a star bound to the wallet
/// address that proved ownership at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarEntry {
    pub owner: String,
    pub star: StarData,
}

/// Encode a structured payload to its stored form (hex of JSON).
pub fn encode_payload<T: Serialize>(value: &T) -> Result<String, EncodeError> {
    Ok(hex::encode(serde_json::to_vec(value)?))
}

/// Decode a stored payload back to its structured form.
pub fn decode_payload<T: DeserializeOwned>(payload: &str) -> Result<T, DecodeError> {
    let raw = hex::decode(payload)?;
    Ok(serde_json::from_slice(&raw)?)
}

/// The encoded genesis payload.
pub fn genesis_payload() -> String {
    hex::encode(GENESIS_JSON)
}
