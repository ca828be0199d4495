//! Brew Stores
//!
//! In-memory state for a coffee run, mirrored to key-value persistence.
//!
//! # Core Concepts
//!
//! - [`OrderStore`]: roster of people, per-person drafts, favorites and last
//!   submitted orders. Roster changes are written after a quiet period
//!   ([`DebouncedWriter`]).
//! - [`CurrentRunStore`]: session cart of [`PersonOrder`]s; never persisted.
//! - [`SavedOrdersStore`]: durable favorites and day-bucketed history, written
//!   on every change.
//! - [`Published`]: a value plus change notification; every collection above
//!   is exposed through one so presentation can subscribe instead of polling.
//!
//! Mutators never fail because of persistence. Persistence errors are logged
//! and the in-memory state stays authoritative.
//!
//! # Example
//!
//! ```rust,ignore
//! use brew_persist::{MemoryStore, PersistenceAdapter};
//! use brew_store::{OrderStore, RosterOptions};
//!
//! # async fn example() {
//! let store = OrderStore::load(PersistenceAdapter::new(MemoryStore::new()), RosterOptions::default());
//! let alice = store.add_person("Alice").unwrap();
//!
//! let mut draft = store.draft_order(alice);
//! draft.sugars = 2;
//! store.update_draft(alice, draft);
//! store.submit_order(alice).unwrap();
//! # }
//! ```
//!
//! [`PersonOrder`]: brew_model::PersonOrder

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod clock;
pub mod current_run;
pub mod debounce;
pub mod error;
mod offsets;
pub mod published;
pub mod roster;
pub mod saved;

// Re-exports for convenience
pub use clock::{Clock, SystemClock};
pub use current_run::CurrentRunStore;
pub use debounce::DebouncedWriter;
pub use error::RosterError;
pub use published::Published;
pub use roster::{OrderStore, RosterOptions, DEFAULT_DEBOUNCE, DEFAULT_ROSTER};
pub use saved::SavedOrdersStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the stores
    pub use crate::{
        Clock, CurrentRunStore, OrderStore, Published, RosterError, RosterOptions,
        SavedOrdersStore, SystemClock,
    };
    pub use brew_model::{CoffeeRunDay, Order, OrderId, Person, PersonId, PersonOrder};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
