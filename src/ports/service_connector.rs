use super::KeyManagementClient;
use crate::error::KeydataResult;

/// Capability to open a session with the key-management service
pub trait ServiceConnector {
    /// The connection handle returned; released when dropped
    type Connection: KeyManagementClient;

    /// Open a new connection
    ///
    /// # Errors
    ///
    /// Returns `KeydataError::Connection` if the service cannot be reached
    fn connect(&self) -> KeydataResult<Self::Connection>;
}
