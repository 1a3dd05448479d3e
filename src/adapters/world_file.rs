//! Key-management service backed by a Security World snapshot file
//!
//! The file is JSON describing modules, keys and the key objects their
//! public blobs load into. Each connection reads the file afresh and keeps
//! its own loaded-object table, so nothing is written back.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::simulated::{KeyObject, SimulatedWorld};
use crate::error::{ConnectionError, DomainError, KeydataResult};
use crate::model::{
    Blob, Command, KeyHash, KeyIdent, KeyInfo, KeyInfoEx, KeyType, ModuleInfo, Reply, WorldInfo,
};
use crate::ports::{KeyManagementClient, ServiceConnector};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorldFile {
    #[serde(default)]
    modules: Vec<ModuleInfo>,
    #[serde(default)]
    keys: Vec<KeyEntry>,
    #[serde(default)]
    objects: Vec<ObjectEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeyEntry {
    appname: String,
    ident: String,
    #[serde(default, with = "optional_hex")]
    pubblob: Option<Vec<u8>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ObjectEntry {
    #[serde(with = "hex::serde")]
    blob: Vec<u8>,
    #[serde(rename = "type")]
    key_type: KeyType,
    length: u32,
    hash: String,
    #[serde(with = "hex::serde")]
    data: Vec<u8>,
}

mod optional_hex {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| hex::decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

impl WorldFile {
    fn parse(path: &Path, json: &str) -> KeydataResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            ConnectionError::WorldFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn into_world(self) -> Result<SimulatedWorld, DomainError> {
        let mut world = SimulatedWorld::new();
        for module in self.modules {
            world = world.with_module(module.module, module.state);
        }
        for key in self.keys {
            let ident = KeyIdent::parse(&key.appname, &key.ident)?;
            world = world.with_key(ident, key.pubblob.map(Blob::new));
        }
        for object in self.objects {
            let info = KeyInfoEx {
                key_type: object.key_type,
                length: object.length,
                hash: KeyHash::from_hex(&object.hash)?,
            };
            world = world.with_object(
                Blob::new(object.blob),
                KeyObject {
                    info,
                    data: object.data,
                },
            );
        }
        Ok(world)
    }
}

/// Connects to the Security World described by a JSON file
#[derive(Debug, Clone)]
pub struct WorldFileConnector {
    path: PathBuf,
}

impl WorldFileConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ServiceConnector for WorldFileConnector {
    type Connection = WorldFileConnection;

    fn connect(&self) -> KeydataResult<Self::Connection> {
        let json = fs::read_to_string(&self.path).map_err(|e| ConnectionError::WorldFile {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let connection = WorldFileConnection::from_json(&self.path, &json)?;
        debug!("Connected to Security World at {}", self.path.display());
        Ok(connection)
    }
}

/// Open connection to a world file; released on drop
#[derive(Debug)]
pub struct WorldFileConnection {
    path: PathBuf,
    world: SimulatedWorld,
}

impl WorldFileConnection {
    fn from_json(path: &Path, json: &str) -> KeydataResult<Self> {
        let world = WorldFile::parse(path, json)?
            .into_world()
            .map_err(|e| ConnectionError::WorldFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            world,
        })
    }
}

impl KeyManagementClient for WorldFileConnection {
    fn world_info(&mut self) -> KeydataResult<WorldInfo> {
        self.world.world_info()
    }

    fn find_key(&mut self, key: &KeyIdent) -> KeydataResult<Option<KeyInfo>> {
        self.world.find_key(key)
    }

    fn transact(&mut self, command: &Command) -> KeydataResult<Reply> {
        self.world.transact(command)
    }
}

impl Drop for WorldFileConnection {
    fn drop(&mut self) {
        if self.world.loaded_count() > 0 {
            debug!(
                "Closing connection with {} key objects still loaded",
                self.world.loaded_count()
            );
        }
        debug!("Disconnected from Security World at {}", self.path.display());
    }
}
