//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Input events (key names to game commands)

pub mod input;
pub mod storage;

pub use input::{Command, command_for_key, command_for_speed_attr};
pub use storage::{KeyValueStore, MemoryStore, StorageError};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
