use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::key_ident::KeyIdent;

/// Opaque, encrypted key representation as stored by the Security World
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.0.len())
    }
}

/// Result of looking a key up by identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    pub ident: KeyIdent,
    pub pubblob: Option<Blob>,
}

impl KeyInfo {
    /// Public blob, if the key has a non-empty one
    pub fn public_blob(&self) -> Option<&Blob> {
        self.pubblob.as_ref().filter(|b| !b.is_empty())
    }
}

/// Handle (`idka`) of a key object loaded onto a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyHandle(u32);

impl KeyHandle {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Public key algorithm tag as reported by `GetKeyInfoEx`
///
/// Tags outside the known set are carried through verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KeyType {
    RsaPublic,
    DsaPublic,
    DhPublic,
    EcPublic,
    EcdsaPublic,
    EcdhPublic,
    Ed25519Public,
    X25519Public,
    Other(String),
}

impl KeyType {
    pub fn as_str(&self) -> &str {
        match self {
            KeyType::RsaPublic => "RSAPublic",
            KeyType::DsaPublic => "DSAPublic",
            KeyType::DhPublic => "DHPublic",
            KeyType::EcPublic => "ECPublic",
            KeyType::EcdsaPublic => "ECDSAPublic",
            KeyType::EcdhPublic => "ECDHPublic",
            KeyType::Ed25519Public => "Ed25519Public",
            KeyType::X25519Public => "X25519Public",
            KeyType::Other(name) => name.as_str(),
        }
    }
}

impl From<&str> for KeyType {
    fn from(name: &str) -> Self {
        match name {
            "RSAPublic" => KeyType::RsaPublic,
            "DSAPublic" => KeyType::DsaPublic,
            "DHPublic" => KeyType::DhPublic,
            "ECPublic" => KeyType::EcPublic,
            "ECDSAPublic" => KeyType::EcdsaPublic,
            "ECDHPublic" => KeyType::EcdhPublic,
            "Ed25519Public" => KeyType::Ed25519Public,
            "X25519Public" => KeyType::X25519Public,
            other => KeyType::Other(other.to_string()),
        }
    }
}

impl From<String> for KeyType {
    fn from(name: String) -> Self {
        KeyType::from(name.as_str())
    }
}

impl From<KeyType> for String {
    fn from(key_type: KeyType) -> Self {
        match key_type {
            KeyType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const HASH_LENGTH: usize = 20;

/// NFKM key hash (SHA-1 sized)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeyHash(#[serde(with = "hex::serde")] [u8; HASH_LENGTH]);

impl KeyHash {
    pub const LENGTH: usize = HASH_LENGTH;

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, KeyHashError> {
        let bytes = hex::decode(hex_str).map_err(|e| KeyHashError::InvalidHex {
            reason: e.to_string(),
        })?;
        Self::try_from(bytes.as_slice())
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl TryFrom<&[u8]> for KeyHash {
    type Error = KeyHashError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; Self::LENGTH] =
            bytes
                .try_into()
                .map_err(|_| KeyHashError::InvalidLength {
                    expected: Self::LENGTH,
                    actual: bytes.len(),
                })?;
        Ok(Self(array))
    }
}

impl fmt::Display for KeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for KeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyHash({})", self.to_hex())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyHashError {
    #[error("Key hash must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Key hash is not valid hex: {reason}")]
    InvalidHex { reason: String },
}
