//! Brew Persistence
//!
//! The boundary between in-memory stores and durable storage.
//!
//! # Core Operations
//!
//! - **Save**: serialize a value to JSON and write it under a fixed key
//! - **Load**: read a key and deserialize it, reporting absence separately
//!   from failure so the owning store can pick its fallback
//!
//! # Architecture
//!
//! ```text
//! Store → PersistenceAdapter → JSON codec → KeyValueStore (memory | directory)
//! ```
//!
//! # Example
//!
//! ```rust
//! use brew_persist::{keys, MemoryStore, PersistenceAdapter};
//!
//! let adapter = PersistenceAdapter::new(MemoryStore::new());
//! adapter.save(keys::FAVORITES, &vec!["latte".to_string()]).unwrap();
//!
//! let loaded: Option<Vec<String>> = adapter.load(keys::FAVORITES).unwrap();
//! assert_eq!(loaded, Some(vec!["latte".to_string()]));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod adapter;
pub mod backend;
pub mod error;
pub mod keys;

// Re-exports for convenience
pub use adapter::PersistenceAdapter;
pub use backend::{DirectoryStore, KeyValueStore, MemoryStore};
pub use error::{PersistError, StorageError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
