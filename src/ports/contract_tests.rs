#[macro_export]
macro_rules! contract_tests_for {
      (
          $mod_name:ident,
          make = $make:expr,
          tests = {
            $( $test_name:ident => $tmpl:path ),+ $(,)?
        }
      ) => {
          mod $mod_name {
              use super::*;

              $(
                  #[test]
                  fn $test_name() {
                      let op = ($make)();
                      $tmpl(op);
                  }
              )+
          }
      };
  }

/// Shared Security World every contract implementation is built from
#[cfg(test)]
pub mod fixture {
    use crate::adapters::{KeyObject, SimulatedWorld};
    use crate::model::{Blob, KeyHash, KeyIdent, KeyInfoEx, KeyType, ModuleId, ModuleState};

    pub const APPNAME: &str = "pkcs11";
    pub const IDENT: &str = "uada174c9f8c05edceeac194a19c3c57a529bb1cf2";
    pub const SYMMETRIC_IDENT: &str = "aes128key";

    pub const UNUSABLE_MODULE: ModuleId = ModuleId::new(1);
    pub const USABLE_MODULE: ModuleId = ModuleId::new(2);

    pub const KEY_HASH: KeyHash = KeyHash::new([
        0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67,
        0x89, 0xab, 0xcd, 0xef, 0x01,
    ]);

    pub fn key_ident() -> KeyIdent {
        KeyIdent::parse(APPNAME, IDENT).unwrap()
    }

    pub fn symmetric_ident() -> KeyIdent {
        KeyIdent::parse("simple", SYMMETRIC_IDENT).unwrap()
    }

    pub fn missing_ident() -> KeyIdent {
        KeyIdent::parse(APPNAME, "doesnotexist").unwrap()
    }

    pub fn pubblob() -> Blob {
        Blob::new(b"pubblob:rsa-2048".to_vec())
    }

    pub fn key_info_ex() -> KeyInfoEx {
        KeyInfoEx {
            key_type: KeyType::RsaPublic,
            length: 2048,
            hash: KEY_HASH,
        }
    }

    pub fn public_data() -> Vec<u8> {
        vec![0x30, 0x82, 0x01, 0x0a, 0x02, 0x82, 0x01, 0x01, 0x00]
    }

    pub fn simulated_world() -> SimulatedWorld {
        SimulatedWorld::new()
            .with_module(UNUSABLE_MODULE, ModuleState::PreInitMode)
            .with_module(USABLE_MODULE, ModuleState::Usable)
            .with_key(key_ident(), Some(pubblob()))
            .with_key(symmetric_ident(), None)
            .with_object(
                pubblob(),
                KeyObject {
                    info: key_info_ex(),
                    data: public_data(),
                },
            )
    }
}

#[cfg(test)]
pub mod key_management_contract {
    use super::fixture;

    use crate::model::{Blob, Command, KeyHandle, ReplyBody, Status};
    use crate::ports::KeyManagementClient;

    fn load(client: &mut impl KeyManagementClient) -> KeyHandle {
        let reply = client
            .transact(&Command::LoadBlob {
                module: fixture::USABLE_MODULE,
                blob: fixture::pubblob(),
            })
            .expect("LoadBlob transport failed");
        assert_eq!(reply.status, Status::Ok);
        match reply.body {
            ReplyBody::LoadBlob { idka } => idka,
            other => panic!("unexpected LoadBlob reply: {other:?}"),
        }
    }

    pub(crate) fn test_world_info_lists_modules(mut client: impl KeyManagementClient) {
        let world = client.world_info().expect("world info failed");
        assert_eq!(world.modules.len(), 2);
        assert_eq!(
            world.first_usable().map(|m| m.module),
            Some(fixture::USABLE_MODULE)
        );
    }

    pub(crate) fn test_find_key_success(mut client: impl KeyManagementClient) {
        let info = client
            .find_key(&fixture::key_ident())
            .expect("lookup failed")
            .expect("key should exist");
        assert_eq!(info.ident, fixture::key_ident());
        assert_eq!(info.public_blob(), Some(&fixture::pubblob()));
    }

    pub(crate) fn test_find_key_missing(mut client: impl KeyManagementClient) {
        let result = client.find_key(&fixture::missing_ident());
        assert!(matches!(result, Ok(None)), "got {result:?}");
    }

    pub(crate) fn test_find_key_without_public_half(mut client: impl KeyManagementClient) {
        let info = client
            .find_key(&fixture::symmetric_ident())
            .expect("lookup failed")
            .expect("key should exist");
        assert!(info.public_blob().is_none());
    }

    pub(crate) fn test_load_query_export(mut client: impl KeyManagementClient) {
        let idka = load(&mut client);

        let reply = client.transact(&Command::GetKeyInfoEx { key: idka }).unwrap();
        assert_eq!(reply.status, Status::Ok);
        assert_eq!(reply.body, ReplyBody::GetKeyInfoEx(fixture::key_info_ex()));

        let reply = client.transact(&Command::Export { key: idka }).unwrap();
        assert_eq!(reply.status, Status::Ok);
        assert_eq!(
            reply.body,
            ReplyBody::Export {
                data: fixture::public_data()
            }
        );
    }

    pub(crate) fn test_load_on_unusable_module(mut client: impl KeyManagementClient) {
        let reply = client
            .transact(&Command::LoadBlob {
                module: fixture::UNUSABLE_MODULE,
                blob: fixture::pubblob(),
            })
            .unwrap();
        assert!(!reply.status.is_ok());
        assert_eq!(reply.body, ReplyBody::Empty);
    }

    pub(crate) fn test_load_unknown_blob(mut client: impl KeyManagementClient) {
        let reply = client
            .transact(&Command::LoadBlob {
                module: fixture::USABLE_MODULE,
                blob: Blob::new(b"garbage".to_vec()),
            })
            .unwrap();
        assert_eq!(reply.status, Status::InvalidData);
    }

    pub(crate) fn test_unknown_handle(mut client: impl KeyManagementClient) {
        let bogus = KeyHandle::new(0xdead_beef);
        for command in [
            Command::GetKeyInfoEx { key: bogus },
            Command::Export { key: bogus },
            Command::Destroy { key: bogus },
        ] {
            let reply = client.transact(&command).unwrap();
            assert!(!reply.status.is_ok(), "{:?} should fail", command.kind());
        }
    }

    pub(crate) fn test_destroy_releases_handle(mut client: impl KeyManagementClient) {
        let idka = load(&mut client);

        let reply = client.transact(&Command::Destroy { key: idka }).unwrap();
        assert_eq!(reply.status, Status::Ok);

        let reply = client.transact(&Command::Export { key: idka }).unwrap();
        assert!(!reply.status.is_ok());
    }
}
