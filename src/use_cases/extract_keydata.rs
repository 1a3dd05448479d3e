//! Extract keydata use case
//!
//! Loads the public half of a Security World key onto a usable module and
//! reads back its metadata and public key material.

use tracing::{debug, info};

use super::loaded_key::LoadedKey;
use crate::error::{KeydataResult, LookupError, ModuleError};
use crate::model::{KeyData, KeyIdent};
use crate::ports::{KeyManagementClient, ServiceConnector};

/// Retrieve public key material and metadata for a key
///
/// This function orchestrates the complete extraction workflow:
/// 1. Connect to the key-management service
/// 2. Fetch Security World info and look the key up
/// 3. Load the key's public blob onto the first usable module
/// 4. Query key type, length and hash, then export the public key
///
/// The loaded key object is destroyed and the connection closed before
/// returning, on success and on every error path.
///
/// # Errors
///
/// Returns errors if:
/// - The service cannot be reached
/// - The key does not exist or has no public half
/// - No module is usable
/// - Any transaction replies with a non-OK status
pub fn extract_keydata<S>(connector: &S, key: &KeyIdent) -> KeydataResult<KeyData>
where
    S: ServiceConnector,
{
    let mut conn = connector.connect()?;
    let world = conn.world_info()?;

    let keyinfo = conn
        .find_key(key)?
        .ok_or_else(|| LookupError::KeyNotFound {
            appname: key.appname.to_string(),
            ident: key.ident.to_string(),
        })?;
    let pubblob = keyinfo
        .public_blob()
        .ok_or_else(|| LookupError::NoPublicHalf {
            appname: key.appname.to_string(),
            ident: key.ident.to_string(),
        })?;

    let module = world
        .first_usable()
        .ok_or(ModuleError::NoUsableModule {
            modules: world.modules.len(),
        })?
        .module;
    info!("Using module {} for {}", module, key);

    let mut loaded = LoadedKey::load(&mut conn, module, pubblob)?;
    let key_info = loaded.key_info()?;
    debug!(
        "{} is {} {} bits, hash {}",
        loaded.handle(),
        key_info.key_type,
        key_info.length,
        key_info.hash
    );
    let pubkey = loaded.export()?;

    info!("Exported {} bytes of public key data", pubkey.len());
    Ok(KeyData {
        key_type: key_info.key_type,
        length: key_info.length,
        hash: key_info.hash,
        pubkey,
    })
}
