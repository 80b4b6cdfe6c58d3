//! File-backed key-value store
//!
//! Persists all entries as a single JSON object in the platform data
//! directory with atomic writes (temp file + rename) to prevent corruption.

use crate::error::Result;
use crate::store::KeyValueStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Key-value store backed by one JSON file
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file; the file is created lazily
    /// on the first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default storage file location
    ///
    /// Returns `<data dir>/BadgeBuster/storage.json`, falling back to the
    /// current directory when the platform exposes no data directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("BadgeBuster")
            .join("storage.json")
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full entry map from disk
    ///
    /// A missing file yields an empty map. A corrupt file is logged and
    /// treated as empty; the next write starts fresh.
    async fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = tokio::fs::read_to_string(&self.path).await?;
        match serde_json::from_str(&json) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Storage file corrupt, starting fresh: {}", e);
                Ok(BTreeMap::new())
            }
        }
    }

    /// Write the full entry map to disk atomically
    ///
    /// Writes to a temp file in the same directory, then renames over the
    /// target so readers never observe a half-written file.
    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&temp_path, json).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    async fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<String>>> {
        let entries = self.read_entries().await?;
        Ok(keys.iter().map(|k| entries.get(*k).cloned()).collect())
    }

    async fn multi_set(&self, pairs: &[(&str, &str)]) -> Result<()> {
        let mut entries = self.read_entries().await?;
        for (key, value) in pairs {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        self.write_entries(&entries).await
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<()> {
        let mut entries = self.read_entries().await?;
        for key in keys {
            entries.remove(*key);
        }
        self.write_entries(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let store = FileStore::new(dir.path().join("storage.json"));
        (dir, store)
    }

    #[tokio::test]
    async fn test_missing_file_yields_absent_values() {
        let (_dir, store) = test_store();
        let values = store.multi_get(&["a", "b"]).await.unwrap();
        assert_eq!(values, vec![None, None]);
    }

    #[tokio::test]
    async fn test_set_then_get_preserves_order() {
        let (_dir, store) = test_store();
        store
            .multi_set(&[("count", "3"), ("timestamp", "1700000000000")])
            .await
            .unwrap();

        let values = store
            .multi_get(&["timestamp", "missing", "count"])
            .await
            .unwrap();
        assert_eq!(
            values,
            vec![
                Some("1700000000000".to_string()),
                None,
                Some("3".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_remove_is_batched_and_tolerant() {
        let (_dir, store) = test_store();
        store.multi_set(&[("count", "1")]).await.unwrap();

        // Removing an absent key alongside a present one succeeds
        store.multi_remove(&["count", "timestamp"]).await.unwrap();

        let values = store.multi_get(&["count"]).await.unwrap();
        assert_eq!(values, vec![None]);
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("storage.json");

        let store = FileStore::new(&path);
        store.multi_set(&[("count", "7")]).await.unwrap();
        drop(store);

        let reopened = FileStore::new(&path);
        let values = reopened.multi_get(&["count"]).await.unwrap();
        assert_eq!(values, vec![Some("7".to_string())]);
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_fresh() {
        let (_dir, store) = test_store();
        tokio::fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(store.path(), "{not json")
            .await
            .unwrap();

        let values = store.multi_get(&["count"]).await.unwrap();
        assert_eq!(values, vec![None]);

        // Writing after corruption works and replaces the file
        store.multi_set(&[("count", "1")]).await.unwrap();
        let values = store.multi_get(&["count"]).await.unwrap();
        assert_eq!(values, vec![Some("1".to_string())]);
    }
}
