//! Error types for keydata library
//!
//! This module defines the error hierarchy for all key extraction operations.
//! Errors are organized hierarchically and use thiserror for implementation.

use thiserror::Error;

use crate::model::{CommandKind, Status};

/// Result type alias for keydata operations
///
/// This is a convenience alias for `Result<T, KeydataError>`.
pub type KeydataResult<T> = Result<T, KeydataError>;

/// Top-level error type for all keydata operations
#[derive(Error, Debug)]
pub enum KeydataError {
    /// Key-management service connection errors
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Security World and key lookup errors
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Module selection errors
    #[error("Module error: {0}")]
    Module(#[from] ModuleError),

    /// Transaction errors
    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    /// Domain validation errors
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),
}

/// Errors talking to the key-management service itself
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// No service available to connect to
    #[error("Key-management service unavailable: {reason}")]
    Unavailable { reason: String },

    /// World file could not be read or parsed
    #[error("Failed to load world file {path}: {reason}")]
    WorldFile { path: String, reason: String },

    /// A transaction could not be delivered or its reply was lost
    #[error("Transport failure during {command}: {reason}")]
    Transport { command: CommandKind, reason: String },
}

/// Security World and key lookup errors
#[derive(Error, Debug)]
pub enum LookupError {
    /// Security World info could not be fetched
    #[error("Failed to fetch Security World info: {reason}")]
    WorldInfo { reason: String },

    /// No key with this identity exists
    #[error("Key does not exist: app {appname} ident {ident}")]
    KeyNotFound { appname: String, ident: String },

    /// Key exists but has no public blob (e.g. a symmetric key)
    #[error("Key has no public half: app {appname} ident {ident}")]
    NoPublicHalf { appname: String, ident: String },
}

/// Module selection errors
#[derive(Error, Debug)]
pub enum ModuleError {
    /// None of the modules in the Security World is usable
    #[error("No usable module in Security World ({modules} modules present)")]
    NoUsableModule { modules: usize },
}

/// Transaction errors
#[derive(Error, Debug)]
pub enum TransactionError {
    /// The service replied with a non-OK status
    #[error("{command} failed with status {status}")]
    Failed { command: CommandKind, status: Status },

    /// The reply body does not belong to the command that was sent
    #[error("Unexpected reply to {command}")]
    UnexpectedReply { command: CommandKind },
}

/// Domain validation errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Key identity error
    #[error("Key identity error: {0}")]
    KeyIdent(#[from] crate::model::KeyIdentError),

    /// Key hash error
    #[error("Key hash error: {0}")]
    KeyHash(#[from] crate::model::KeyHashError),
}

impl From<crate::model::KeyIdentError> for KeydataError {
    fn from(err: crate::model::KeyIdentError) -> Self {
        KeydataError::Domain(DomainError::KeyIdent(err))
    }
}

impl From<crate::model::KeyHashError> for KeydataError {
    fn from(err: crate::model::KeyHashError) -> Self {
        KeydataError::Domain(DomainError::KeyHash(err))
    }
}
