//! Use cases (orchestration)
//!
//! This module contains use cases that orchestrate operations across the ports.

mod extract_keydata;
mod loaded_key;

pub use extract_keydata::extract_keydata;
