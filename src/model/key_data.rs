use serde::Serialize;
use std::fmt;

use super::key::{KeyHash, KeyType};

/// Public key material and metadata extracted from the HSM
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyData {
    #[serde(rename = "type")]
    pub key_type: KeyType,
    /// Key length in bits
    pub length: u32,
    pub hash: KeyHash,
    /// Raw exported public key bytes
    #[serde(with = "hex::serde")]
    pub pubkey: Vec<u8>,
}

impl KeyData {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for KeyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "type: {}", self.key_type)?;
        writeln!(f, "length: {}", self.length)?;
        writeln!(f, "hash: {}", self.hash)?;
        write!(f, "pubkey: {}", hex::encode(&self.pubkey))
    }
}
