//! Key-value backends
//!
//! Provides byte storage under string keys:
//! - [`MemoryStore`]: process-local map
//! - [`DirectoryStore`]: one file per key

use crate::error::StorageError;
use std::sync::Arc;

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

/// Flat byte store keyed by string
///
/// Implement this trait to plug in a platform store (preferences, keychain,
/// browser storage). Missing keys are `Ok(None)`, never an error.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Read the bytes stored under `key`
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the bytes stored under `key`
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key succeeds
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
