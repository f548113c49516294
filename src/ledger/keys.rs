//! ED25519 key material in the ledger's wire encodings.
//!
//! Keys travel as hex strings, either raw (64 hex chars) or wrapped in the
//! fixed DER prefixes the ledger tooling prints. Display always produces the
//! DER form; parsing accepts both.

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// DER prefix for a PKCS#8-wrapped ED25519 private key, as hex.
pub const PRIVATE_KEY_DER_PREFIX: &str = "302e020100300506032b657004220420";

/// DER prefix for an X.509-wrapped ED25519 public key, as hex.
pub const PUBLIC_KEY_DER_PREFIX: &str = "302a300506032b6570032100";

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("key is not valid hex")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("key must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("bytes do not form a valid ED25519 key: {0}")]
    InvalidKey(String),
}

/// An ED25519 private key. Never logged or displayed except through the
/// explicit [`Display`](fmt::Display) impl.
#[derive(Clone)]
pub struct PrivateKey {
    signing: SigningKey,
}

impl PrivateKey {
    /// Generate a fresh keypair from the system CSPRNG.
    pub fn generate_ed25519() -> Self {
        Self {
            signing: SigningKey::generate(&mut OsRng),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            verifying: self.signing.verifying_key(),
        }
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            PRIVATE_KEY_DER_PREFIX,
            hex::encode(self.signing.to_bytes())
        )
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Deliberately redacted.
        f.write_str("PrivateKey(..)")
    }
}

impl FromStr for PrivateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_key_hex(s, PRIVATE_KEY_DER_PREFIX)?;
        Ok(Self {
            signing: SigningKey::from_bytes(&bytes),
        })
    }
}

/// An ED25519 public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    verifying: VerifyingKey,
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            PUBLIC_KEY_DER_PREFIX,
            hex::encode(self.verifying.to_bytes())
        )
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_key_hex(s, PUBLIC_KEY_DER_PREFIX)?;
        let verifying = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| KeyError::InvalidKey(e.to_string()))?;
        Ok(Self { verifying })
    }
}

fn decode_key_hex(s: &str, der_prefix: &str) -> Result<[u8; 32], KeyError> {
    let s = s.trim();
    let raw = s.strip_prefix(der_prefix).unwrap_or(s);
    let bytes = hex::decode(raw)?;
    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| KeyError::InvalidLength {
            expected: 32,
            actual,
        })
}
