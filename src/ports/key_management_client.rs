//! KeyManagementClient trait - an open session with the key-management service

use crate::error::KeydataResult;
use crate::model::{Command, KeyIdent, KeyInfo, Reply, WorldInfo};

/// Operations available on an open key-management connection
pub trait KeyManagementClient {
    /// Fetch a snapshot of the modules in the Security World
    ///
    /// # Errors
    ///
    /// Returns `KeydataError::Lookup(LookupError::WorldInfo)` if the Security
    /// World cannot be read
    fn world_info(&mut self) -> KeydataResult<WorldInfo>;

    /// Look up a key by application name and identifier
    ///
    /// # Returns
    ///
    /// `None` if no such key exists in the Security World
    fn find_key(&mut self, key: &KeyIdent) -> KeydataResult<Option<KeyInfo>>;

    /// Run a single command and wait for its reply
    ///
    /// A command that the service rejects is reported through the reply's
    /// status, not as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns `KeydataError::Connection(ConnectionError::Transport)` if the
    /// transaction could not be completed at all
    fn transact(&mut self, command: &Command) -> KeydataResult<Reply>;
}
