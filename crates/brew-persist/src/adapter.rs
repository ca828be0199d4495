//! Persistence adapter - JSON values over a key-value backend

use crate::backend::KeyValueStore;
use crate::error::PersistError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Serializes values to JSON and stores them under fixed keys
///
/// Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct PersistenceAdapter {
    backend: Arc<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    /// Create adapter over backend
    #[inline]
    #[must_use]
    pub fn new(backend: impl KeyValueStore) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create adapter over an already shared backend
    #[inline]
    #[must_use]
    pub fn from_shared(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Encode `value` and write it under `key`
    ///
    /// # Errors
    /// - `PersistError::Encode` if serialization fails
    /// - `PersistError::Storage` if the backend write fails
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), PersistError> {
        let bytes = serde_json::to_vec(value).map_err(|e| PersistError::encode(key, e))?;
        self.backend.set(key, &bytes)?;
        tracing::debug!(key, bytes = bytes.len(), "saved");
        Ok(())
    }

    /// Read and decode the value under `key`
    ///
    /// # Returns
    /// `Ok(None)` when the key has never been written
    ///
    /// # Errors
    /// - `PersistError::Decode` if the stored bytes are not a valid `T`
    /// - `PersistError::Storage` if the backend read fails
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistError> {
        let Some(bytes) = self.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| PersistError::decode(key, e))
    }

    /// Load `key`, substituting `fallback()` when it is missing or unreadable
    ///
    /// Failures are logged, never returned.
    pub fn load_or_else<T, F>(&self, key: &str, fallback: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!(key, "no stored value, using fallback");
                fallback()
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to load, using fallback");
                fallback()
            }
        }
    }

    /// Delete `key`
    ///
    /// # Errors
    /// - `PersistError::Storage` if the backend delete fails
    pub fn remove(&self, key: &str) -> Result<(), PersistError> {
        self.backend.remove(key)?;
        Ok(())
    }
}

impl fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceAdapter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use crate::keys;

    #[test]
    fn missing_key_loads_as_none() {
        let adapter = PersistenceAdapter::new(MemoryStore::new());
        let loaded: Option<Vec<String>> = adapter.load(keys::HISTORY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupt_bytes_are_a_decode_error() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::PEOPLE, b"{not json").unwrap();
        let adapter = PersistenceAdapter::from_shared(store);

        let err = adapter.load::<Vec<String>>(keys::PEOPLE).unwrap_err();
        assert!(err.is_corrupt_data());
    }

    #[test]
    fn wrong_shape_falls_back() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::FAVORITES, br#"{"a": 1}"#).unwrap();
        let adapter = PersistenceAdapter::from_shared(store);

        let value: Vec<u32> = adapter.load_or_else(keys::FAVORITES, || vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn remove_clears_value() {
        let adapter = PersistenceAdapter::new(MemoryStore::new());
        adapter.save(keys::HISTORY, &[1, 2, 3]).unwrap();
        adapter.remove(keys::HISTORY).unwrap();
        assert!(adapter.load::<Vec<u8>>(keys::HISTORY).unwrap().is_none());
    }
}
