//! In-memory key-value store
//!
//! Used in contexts without durable storage (and in tests). Contents live
//! for the process lifetime only.

use crate::error::Result;
use crate::store::KeyValueStore;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Key-value store held entirely in memory
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<String>>> {
        let entries = self.entries.lock();
        Ok(keys.iter().map(|k| entries.get(*k).cloned()).collect())
    }

    async fn multi_set(&self, pairs: &[(&str, &str)]) -> Result<()> {
        let mut entries = self.entries.lock();
        for (key, value) in pairs {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<()> {
        let mut entries = self.entries.lock();
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}
