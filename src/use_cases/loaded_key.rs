//! Scoped handle to a key object loaded onto a module
//!
//! The object is destroyed when the guard drops, whichever way the caller
//! leaves its scope.

use tracing::{debug, warn};

use crate::error::{KeydataResult, TransactionError};
use crate::model::{Blob, Command, KeyHandle, KeyInfoEx, ModuleId, ReplyBody};
use crate::ports::KeyManagementClient;

/// Send `command` and return the reply body if the status is OK
pub(crate) fn transact_ok<C>(conn: &mut C, command: &Command) -> KeydataResult<ReplyBody>
where
    C: KeyManagementClient + ?Sized,
{
    let kind = command.kind();
    debug!("Transact {}", kind);

    let reply = conn.transact(command)?;
    if !reply.status.is_ok() {
        debug!("{} replied {}", kind, reply.status);
        return Err(TransactionError::Failed {
            command: kind,
            status: reply.status,
        }
        .into());
    }
    Ok(reply.body)
}

pub(crate) struct LoadedKey<'c, C: KeyManagementClient + ?Sized> {
    conn: &'c mut C,
    handle: KeyHandle,
}

impl<'c, C: KeyManagementClient + ?Sized> LoadedKey<'c, C> {
    /// Load `blob` onto `module`
    pub(crate) fn load(conn: &'c mut C, module: ModuleId, blob: &Blob) -> KeydataResult<Self> {
        let command = Command::LoadBlob {
            module,
            blob: blob.clone(),
        };
        match transact_ok(conn, &command)? {
            ReplyBody::LoadBlob { idka } => {
                debug!("Key loaded on module {} as {}", module, idka);
                Ok(Self { conn, handle: idka })
            }
            _ => Err(TransactionError::UnexpectedReply {
                command: command.kind(),
            }
            .into()),
        }
    }

    pub(crate) fn handle(&self) -> KeyHandle {
        self.handle
    }

    pub(crate) fn key_info(&mut self) -> KeydataResult<KeyInfoEx> {
        let command = Command::GetKeyInfoEx { key: self.handle };
        match transact_ok(self.conn, &command)? {
            ReplyBody::GetKeyInfoEx(info) => Ok(info),
            _ => Err(TransactionError::UnexpectedReply {
                command: command.kind(),
            }
            .into()),
        }
    }

    pub(crate) fn export(&mut self) -> KeydataResult<Vec<u8>> {
        let command = Command::Export { key: self.handle };
        match transact_ok(self.conn, &command)? {
            ReplyBody::Export { data } => Ok(data),
            _ => Err(TransactionError::UnexpectedReply {
                command: command.kind(),
            }
            .into()),
        }
    }
}

impl<C: KeyManagementClient + ?Sized> Drop for LoadedKey<'_, C> {
    fn drop(&mut self) {
        match transact_ok(self.conn, &Command::Destroy { key: self.handle }) {
            Ok(_) => debug!("Destroyed key object {}", self.handle),
            Err(e) => warn!("Failed to destroy key object {}: {}", self.handle, e),
        }
    }
}
