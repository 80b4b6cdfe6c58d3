//! Durable key-value storage
//!
//! The controller persists three logical keys: the clear count, the
//! last-cleared timestamp, and the settings blob. All access goes through
//! the [`KeyValueStore`] trait so the controller never knows whether it is
//! talking to a file, memory, or nothing at all.
//!
//! Keys that change together are read and written together (batched
//! operations) to reduce the chance of partial application. No rollback is
//! provided if a batch partially fails; a failed batch means "state unknown
//! for that batch" and is corrected at the next load.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use std::future::Future;

/// Storage key for the string-encoded clear count
pub const KEY_COUNT: &str = "badgesClearedCount";
/// Storage key for the string-encoded epoch-ms timestamp of the last clear
pub const KEY_TIMESTAMP: &str = "lastClearedTimestamp";
/// Storage key for the JSON-encoded settings blob
pub const KEY_SETTINGS: &str = "appSettings";

/// Batched string key-value storage
///
/// Values are plain strings; callers own encoding (integers as decimal
/// strings, settings as JSON). `multi_get` returns one entry per requested
/// key, `None` where the key is absent.
pub trait KeyValueStore: Send + Sync {
    /// Read several keys in one batch, preserving request order
    fn multi_get(
        &self,
        keys: &[&str],
    ) -> impl Future<Output = Result<Vec<Option<String>>>> + Send;

    /// Write several key-value pairs in one batch
    fn multi_set(&self, entries: &[(&str, &str)]) -> impl Future<Output = Result<()>> + Send;

    /// Remove several keys in one batch; removing an absent key is not an error
    fn multi_remove(&self, keys: &[&str]) -> impl Future<Output = Result<()>> + Send;
}
