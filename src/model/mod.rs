//! Domain types for key extraction
//!
//! Newtypes over primitives enforce invariants at construction and keep
//! identifiers, handles and hashes from being mixed up.

mod key;
mod key_data;
mod key_ident;
mod transaction;
mod world;

pub use key::{Blob, KeyHandle, KeyHash, KeyHashError, KeyInfo, KeyType};
pub use key_data::KeyData;
pub use key_ident::{AppName, Ident, KeyIdent, KeyIdentError};
pub use transaction::{Command, CommandKind, KeyInfoEx, Reply, ReplyBody, Status};
pub use world::{ModuleId, ModuleInfo, ModuleState, WorldInfo};
