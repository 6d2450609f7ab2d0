pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod storage;
pub mod store;

pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use storage::{KeyValueStore, MemoryKv, SqliteKv};
pub use store::EntityStore;
