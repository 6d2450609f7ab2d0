use std::collections::BTreeMap;

use super::KeyValueStore;
use crate::error::Result;

/// In-process backend. Nothing outlives the value itself.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backend pre-populated with the given entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            writes: 0,
        }
    }

    /// Number of successful `set` calls since creation
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut kv = MemoryKv::new();
        kv.set("app:tasks", "[]").unwrap();

        assert_eq!(kv.get("app:tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(kv.get("app:members").unwrap(), None);
        assert_eq!(kv.write_count(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let mut kv = MemoryKv::with_entries([("k", "old")]);
        kv.set("k", "new").unwrap();

        assert_eq!(kv.raw("k"), Some("new"));
        assert_eq!(kv.write_count(), 1);
    }
}
