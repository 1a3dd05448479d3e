//! Adapters - concrete implementations of ports (traits)

mod simulated;
mod world_file;

#[cfg(test)]
pub mod mock_service;

// Re-export for convenience
pub use simulated::{KeyObject, SimulatedWorld};
pub use world_file::{WorldFileConnection, WorldFileConnector};
