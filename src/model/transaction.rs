use std::fmt;

use super::key::{Blob, KeyHandle, KeyHash, KeyType};
use super::world::ModuleId;

/// Command names, used for logging and error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    LoadBlob,
    GetKeyInfoEx,
    Export,
    Destroy,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A command sent to the key-management service in a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load a key blob onto a module
    LoadBlob { module: ModuleId, blob: Blob },
    /// Query type, length and hash of a loaded key
    GetKeyInfoEx { key: KeyHandle },
    /// Export the public material of a loaded key
    Export { key: KeyHandle },
    /// Unload a key object from its module
    Destroy { key: KeyHandle },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::LoadBlob { .. } => CommandKind::LoadBlob,
            Command::GetKeyInfoEx { .. } => CommandKind::GetKeyInfoEx,
            Command::Export { .. } => CommandKind::Export,
            Command::Destroy { .. } => CommandKind::Destroy,
        }
    }
}

/// Transaction status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,
    InvalidData,
    UnknownId,
    NotAvailable,
    AccessDenied,
    HardwareFailed,
    Other(String),
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Ok => "OK",
            Status::InvalidData => "InvalidData",
            Status::UnknownId => "UnknownID",
            Status::NotAvailable => "NotAvailable",
            Status::AccessDenied => "AccessDenied",
            Status::HardwareFailed => "HardwareFailed",
            Status::Other(name) => name.as_str(),
        }
    }
}

impl From<&str> for Status {
    fn from(name: &str) -> Self {
        match name {
            "OK" => Status::Ok,
            "InvalidData" => Status::InvalidData,
            "UnknownID" => Status::UnknownId,
            "NotAvailable" => Status::NotAvailable,
            "AccessDenied" => Status::AccessDenied,
            "HardwareFailed" => Status::HardwareFailed,
            other => Status::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GetKeyInfoEx` reply payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfoEx {
    pub key_type: KeyType,
    /// Key length in bits
    pub length: u32,
    pub hash: KeyHash,
}

/// Command-specific reply payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    /// No payload; carried by every non-OK reply
    Empty,
    LoadBlob { idka: KeyHandle },
    GetKeyInfoEx(KeyInfoEx),
    Export { data: Vec<u8> },
    Destroy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: Status,
    pub body: ReplyBody,
}

impl Reply {
    pub fn ok(body: ReplyBody) -> Self {
        Self {
            status: Status::Ok,
            body,
        }
    }

    pub fn failed(status: Status) -> Self {
        Self {
            status,
            body: ReplyBody::Empty,
        }
    }
}
