//! Ports (traits) for the key-management service
//!
//! The extraction procedure depends on these abstractions rather than on a
//! particular service binding, so the service can be swapped for a test
//! double or a different backend.

pub mod contract_tests;
mod key_management_client;
mod service_connector;

pub use key_management_client::KeyManagementClient;
pub use service_connector::ServiceConnector;
