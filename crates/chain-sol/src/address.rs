//! Solana address handling.
//!
//! Solana addresses are simply Base58-encoded 32-byte Ed25519 public keys.
//! There is no hashing or checksum step (unlike Bitcoin or Ethereum), so
//! validation amounts to decoding and checking the length. `SolAddress`
//! keeps the decoded form; display re-encodes on demand.

use std::fmt;
use std::str::FromStr;

use crate::error::SolError;

/// A decoded Solana address (32-byte Ed25519 public key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolAddress(pub [u8; 32]);

impl SolAddress {
    /// Returns the raw 32-byte public key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for SolAddress {
    type Err = SolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

        let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            SolError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
        })?;

        Ok(SolAddress(arr))
    }
}

impl fmt::Display for SolAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(&self.0).into_string())
    }
}
