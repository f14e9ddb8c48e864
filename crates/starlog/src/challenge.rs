//! The ownership-proof challenge message.
//!
//! Format: `"<address>:<epochSeconds>:starRegistry"`. The challenge is
//! stateless — the issue time is embedded in the message itself, so its
//! validity is re-derived entirely from the message at submission time.

use crate::error::RegistryError;

/// Validity period of a signed challenge, in seconds. The boundary is
/// inclusive: exactly `PROOF_WINDOW_SECS` elapsed still passes.
pub const PROOF_WINDOW_SECS: i64 = 300;

/// Trailing tag identifying the challenge purpose.
pub const CHALLENGE_TAG: &str = "starRegistry";

/// Build the challenge string for an address at the given time.
pub fn proof_message(address: &str, now: i64) -> String {
    format!("{address}:{now}:{CHALLENGE_TAG}")
}

/// Extract the issue time embedded in a challenge message (the second
/// colon-delimited field).
pub fn embedded_timestamp(message: &str) -> Result<i64, RegistryError> {
    let field = message.split(':').nth(1).ok_or_else(|| {
        RegistryError::MalformedChallenge("missing timestamp field".to_string())
    })?;
    field.parse().map_err(|_| {
        RegistryError::MalformedChallenge(format!("timestamp field is not an integer: {field:?}"))
    })
}
