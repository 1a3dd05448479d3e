use std::path::Path;

use crate::adapters::WorldFileConnector;
use crate::error::KeydataResult;
use crate::use_cases::extract_keydata as extract_keydata_use_case;

pub use crate::model::*;

/// Extract keydata for `appname`/`ident` from the Security World in `world`
pub fn extract_keydata(
    world: impl AsRef<Path>,
    appname: &str,
    ident: &str,
) -> KeydataResult<KeyData> {
    let key = KeyIdent::parse(appname, ident)?;
    let connector = WorldFileConnector::new(world.as_ref());
    extract_keydata_use_case(&connector, &key)
}
