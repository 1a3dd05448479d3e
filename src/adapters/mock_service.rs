//! Mock key-management service for testing the extraction procedure
//!
//! Wraps the in-memory Security World with scripted failures and a shared
//! journal recording every command sent and every connection closed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::simulated::SimulatedWorld;
use crate::error::{ConnectionError, KeydataError, KeydataResult, LookupError};
use crate::model::{Command, CommandKind, KeyIdent, KeyInfo, Reply, Status, WorldInfo};
use crate::ports::{KeyManagementClient, ServiceConnector};

#[derive(Debug, Default)]
pub struct Journal {
    pub commands: Vec<Command>,
    pub connections_closed: usize,
}

impl Journal {
    pub fn kinds(&self) -> Vec<CommandKind> {
        self.commands.iter().map(Command::kind).collect()
    }
}

#[derive(Debug, Clone)]
pub struct MockService {
    pub world: SimulatedWorld,
    /// Commands that reply with this status instead of running
    pub statuses: HashMap<CommandKind, Status>,
    /// Commands answered with this reply instead of running
    pub replies: HashMap<CommandKind, Reply>,
    /// Commands whose transaction fails outright
    pub transport_failures: Vec<CommandKind>,
    pub world_info_fails: bool,
    pub lookup_fails: bool,
    pub journal: Rc<RefCell<Journal>>,
}

impl MockService {
    pub fn new(world: SimulatedWorld) -> Self {
        Self {
            world,
            statuses: HashMap::new(),
            replies: HashMap::new(),
            transport_failures: Vec::new(),
            world_info_fails: false,
            lookup_fails: false,
            journal: Rc::new(RefCell::new(Journal::default())),
        }
    }

    pub fn with_status(mut self, command: CommandKind, status: Status) -> Self {
        self.statuses.insert(command, status);
        self
    }

    pub fn with_reply(mut self, command: CommandKind, reply: Reply) -> Self {
        self.replies.insert(command, reply);
        self
    }
}

impl KeyManagementClient for MockService {
    fn world_info(&mut self) -> KeydataResult<WorldInfo> {
        if self.world_info_fails {
            return Err(LookupError::WorldInfo {
                reason: "Security World not initialised".to_string(),
            }
            .into());
        }
        self.world.world_info()
    }

    fn find_key(&mut self, key: &KeyIdent) -> KeydataResult<Option<KeyInfo>> {
        if self.lookup_fails {
            return Err(KeydataError::Connection(ConnectionError::Unavailable {
                reason: "kmdata directory unreadable".to_string(),
            }));
        }
        self.world.find_key(key)
    }

    fn transact(&mut self, command: &Command) -> KeydataResult<Reply> {
        self.journal.borrow_mut().commands.push(command.clone());

        let kind = command.kind();
        if self.transport_failures.contains(&kind) {
            return Err(ConnectionError::Transport {
                command: kind,
                reason: "connection reset".to_string(),
            }
            .into());
        }
        if let Some(status) = self.statuses.get(&kind) {
            return Ok(Reply::failed(status.clone()));
        }
        if let Some(reply) = self.replies.get(&kind) {
            return Ok(reply.clone());
        }
        self.world.transact(command)
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        self.journal.borrow_mut().connections_closed += 1;
    }
}

pub struct MockConnector {
    pub service: Option<MockService>,
}

impl ServiceConnector for MockConnector {
    type Connection = MockService;

    fn connect(&self) -> KeydataResult<Self::Connection> {
        self.service.clone().ok_or_else(|| {
            KeydataError::Connection(ConnectionError::Unavailable {
                reason: "hardserver not running".to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract_tests_for;
    use crate::ports::contract_tests::{fixture, key_management_contract};

    contract_tests_for!(
        mock_service_contract,
        make = || MockService::new(fixture::simulated_world()),
        tests = {
            test_world_info_lists_modules => key_management_contract::test_world_info_lists_modules,
            test_find_key_success => key_management_contract::test_find_key_success,
            test_find_key_missing => key_management_contract::test_find_key_missing,
            test_load_query_export => key_management_contract::test_load_query_export,
            test_unknown_handle => key_management_contract::test_unknown_handle,
            test_destroy_releases_handle => key_management_contract::test_destroy_releases_handle,
        }
    );

    #[test]
    fn test_scripted_status_overrides_world() {
        let mut service = MockService::new(fixture::simulated_world())
            .with_status(CommandKind::LoadBlob, Status::from("Error"));
        let reply = service
            .transact(&Command::LoadBlob {
                module: fixture::USABLE_MODULE,
                blob: fixture::pubblob(),
            })
            .unwrap();
        assert_eq!(reply.status, Status::Other("Error".to_string()));
        assert_eq!(service.journal.borrow().kinds(), vec![CommandKind::LoadBlob]);
    }

    #[test]
    fn test_drop_counts_closed_connections() {
        let service = MockService::new(fixture::simulated_world());
        let journal = Rc::clone(&service.journal);
        let connector = MockConnector {
            service: Some(service),
        };
        drop(connector.connect().unwrap());
        assert_eq!(journal.borrow().connections_closed, 1);
    }
}
