//! Wallet signing and the signature-verification seam.
//!
//! An address is the hex form of an Ed25519 public key; a signature is
//! the hex form of the 64-byte Ed25519 signature over the raw message
//! bytes. The ledger consumes verification only through [`WalletVerify`],
//! so the scheme stays swappable at the boundary.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use std::fmt;

/// The opaque verification boundary:
/// `verify(message, address, signature) -> bool`.
pub trait WalletVerify: Send + Sync {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool;
}

/// Default verifier: hex address as Ed25519 public key, hex signature
/// as 64-byte Ed25519 signature.
///
/// Anything that fails to parse verifies as `false` — a garbled address
/// or signature is indistinguishable from a forged one at this seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl WalletVerify for Ed25519Verifier {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool {
        let Ok(pk_bytes) = hex::decode(address) else {
            return false;
        };
        let Ok(pk_bytes) = <[u8; 32]>::try_from(pk_bytes) else {
            return false;
        };
        let Ok(verifying_key) = VerifyingKey::from_bytes(&pk_bytes) else {
            return false;
        };

        let Ok(sig_bytes) = hex::decode(signature) else {
            return false;
        };
        let Ok(sig_bytes) = <[u8; 64]>::try_from(sig_bytes) else {
            return false;
        };
        let sig = Signature::from_bytes(&sig_bytes);

        verifying_key.verify(message.as_bytes(), &sig).is_ok()
    }
}

/// The signing side of the ownership proof.
///
/// Callers hold a wallet, request a challenge for its address, sign the
/// challenge, and submit the signature. The private key never crosses
/// the ledger boundary.
#[derive(Clone)]
pub struct Wallet {
    signing_key: SigningKey,
}

impl Wallet {
    /// Generate a new random wallet.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            signing_key: SigningKey::generate(&mut rng),
        }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// The wallet address: hex of the Ed25519 public key.
    pub fn address(&self) -> String {
        hex::encode(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a message, returning the hex signature.
    pub fn sign(&self, message: &str) -> String {
        hex::encode(self.signing_key.sign(message.as_bytes()).to_bytes())
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wallet({}...)", &self.address()[..16])
    }
}
