//! Error types for persistence
//!
//! Two layers:
//! - [`StorageError`]: the key-value backend failed to read or write bytes
//! - [`PersistError`]: encoding, decoding, or a wrapped storage failure

use std::path::PathBuf;

/// Backend read/write failures
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// IO error on a key's backing file
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto the backend
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),

    /// Backend-specific failure
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Save/load failures
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Value could not be serialized
    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored bytes could not be deserialized
    #[error("failed to decode '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PersistError {
    /// Create encode error for key
    pub fn encode(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encode {
            key: key.into(),
            source,
        }
    }

    /// Create decode error for key
    pub fn decode(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            key: key.into(),
            source,
        }
    }

    /// Check if stored data was unreadable (as opposed to unreachable)
    #[inline]
    #[must_use]
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
