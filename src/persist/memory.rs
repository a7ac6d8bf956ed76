//! In-process key-value store, used in tests and for throwaway sessions.

use hashbrown::HashMap;

use super::{KvStore, PersistResult};

/// [`KvStore`] backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: HashMap<String, Vec<u8>>,
    writes: usize,
}

impl MemoryKv {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` with raw bytes, bypassing serialization.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> PersistResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> PersistResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        self.writes += 1;
        Ok(())
    }
}
