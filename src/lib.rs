//! Public key extraction from a Security World HSM
//!
//! Looks a key up by application name and identifier, loads its public half
//! onto the first usable module, and returns the key's type, length, hash
//! and exported public key bytes.

mod adapters;
pub mod api;
pub mod error;
pub mod model;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use error::{KeydataError, KeydataResult};
pub use model::{KeyData, KeyIdent};

// Re-export public API
pub use adapters::{KeyObject, SimulatedWorld, WorldFileConnection, WorldFileConnector};
pub use api::extract_keydata;
