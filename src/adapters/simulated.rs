//! In-memory Security World
//!
//! Implements the key-management contract over plain collections: modules
//! with states, keys indexed by identity, and the key objects their public
//! blobs decode to. Loaded objects get fresh handles and live until
//! destroyed.

use std::collections::HashMap;
use tracing::debug;

use crate::error::KeydataResult;
use crate::model::{
    Blob, Command, KeyHandle, KeyIdent, KeyInfo, KeyInfoEx, ModuleId, ModuleInfo, ModuleState,
    Reply, ReplyBody, Status, WorldInfo,
};
use crate::ports::KeyManagementClient;

/// Public key object a blob loads into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyObject {
    pub info: KeyInfoEx,
    /// Exported public key bytes
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct SimulatedWorld {
    modules: Vec<ModuleInfo>,
    keys: HashMap<KeyIdent, Option<Blob>>,
    objects: HashMap<Blob, KeyObject>,
    loaded: HashMap<KeyHandle, Blob>,
    next_handle: u32,
}

impl SimulatedWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, module: ModuleId, state: ModuleState) -> Self {
        self.modules.push(ModuleInfo { module, state });
        self
    }

    /// Register a key; `pubblob` is `None` for keys without a public half
    pub fn with_key(mut self, ident: KeyIdent, pubblob: Option<Blob>) -> Self {
        self.keys.insert(ident, pubblob);
        self
    }

    pub fn with_object(mut self, blob: Blob, object: KeyObject) -> Self {
        self.objects.insert(blob, object);
        self
    }

    /// Number of key objects currently loaded
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    fn load_blob(&mut self, module: ModuleId, blob: &Blob) -> Reply {
        let Some(info) = self.modules.iter().find(|m| m.module == module) else {
            return Reply::failed(Status::UnknownId);
        };
        if !info.state.is_usable() {
            return Reply::failed(Status::NotAvailable);
        }
        if !self.objects.contains_key(blob) {
            return Reply::failed(Status::InvalidData);
        }

        self.next_handle += 1;
        let idka = KeyHandle::new(self.next_handle);
        self.loaded.insert(idka, blob.clone());
        debug!("Loaded {:?} on module {} as {}", blob, module, idka);
        Reply::ok(ReplyBody::LoadBlob { idka })
    }

    fn object(&self, key: KeyHandle) -> Option<&KeyObject> {
        self.loaded.get(&key).and_then(|blob| self.objects.get(blob))
    }
}

impl KeyManagementClient for SimulatedWorld {
    fn world_info(&mut self) -> KeydataResult<WorldInfo> {
        Ok(WorldInfo::new(self.modules.clone()))
    }

    fn find_key(&mut self, key: &KeyIdent) -> KeydataResult<Option<KeyInfo>> {
        Ok(self.keys.get(key).map(|pubblob| KeyInfo {
            ident: key.clone(),
            pubblob: pubblob.clone(),
        }))
    }

    fn transact(&mut self, command: &Command) -> KeydataResult<Reply> {
        let reply = match command {
            Command::LoadBlob { module, blob } => self.load_blob(*module, blob),
            Command::GetKeyInfoEx { key } => match self.object(*key) {
                Some(object) => Reply::ok(ReplyBody::GetKeyInfoEx(object.info.clone())),
                None => Reply::failed(Status::UnknownId),
            },
            Command::Export { key } => match self.object(*key) {
                Some(object) => Reply::ok(ReplyBody::Export {
                    data: object.data.clone(),
                }),
                None => Reply::failed(Status::UnknownId),
            },
            Command::Destroy { key } => match self.loaded.remove(key) {
                Some(_) => Reply::ok(ReplyBody::Destroy),
                None => Reply::failed(Status::UnknownId),
            },
        };
        Ok(reply)
    }
}
