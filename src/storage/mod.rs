//! Durable key-value media for the entity store.
//!
//! Each collection is persisted as one JSON document under its own key,
//! so any backend that can get and set strings by key is enough.

mod memory_kv;
mod sqlite_kv;

pub use memory_kv::MemoryKv;
pub use sqlite_kv::SqliteKv;

use crate::error::Result;

/// Default namespace prepended to every collection key.
pub const DEFAULT_KEY_PREFIX: &str = "app:";

pub const PROJECTS_KEY: &str = "projects";
pub const MEMBERS_KEY: &str = "members";
pub const TASKS_KEY: &str = "tasks";
pub const SETTINGS_KEY: &str = "settings";

/// A string-to-string store with last-write-wins semantics.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
