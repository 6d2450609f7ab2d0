use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::Result;

/// SQLite-backed key-value table, the on-disk medium for the CLI
pub struct SqliteKv {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteKv {
    /// Open or create the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        let kv = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        kv.init_schema()?;
        Ok(kv)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        let kv = Self { conn, path: None };
        kv.init_schema()?;
        Ok(kv)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Database file path, `None` when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key() {
        let kv = SqliteKv::open_in_memory().unwrap();
        assert_eq!(kv.get("app:projects").unwrap(), None);
        assert!(kv.path().is_none());
    }

    #[test]
    fn test_set_replaces_value() {
        let mut kv = SqliteKv::open_in_memory().unwrap();
        kv.set("app:settings", "{}").unwrap();
        kv.set("app:settings", r#"{"itemsPerPage":10}"#).unwrap();

        assert_eq!(
            kv.get("app:settings").unwrap().as_deref(),
            Some(r#"{"itemsPerPage":10}"#)
        );
    }

    #[test]
    fn test_values_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("storage.db");

        {
            let mut kv = SqliteKv::open(&path).unwrap();
            kv.set("app:tasks", "[]").unwrap();
        }

        let kv = SqliteKv::open(&path).unwrap();
        assert_eq!(kv.get("app:tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(kv.path(), Some(path.as_path()));
    }
}
