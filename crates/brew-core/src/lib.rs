//! Brew Core - application context for coffee runs
//!
//! Wires the workspace together:
//! - Loads [`BrewConfig`] from TOML
//! - Initialises `tracing` output ([`logging::init`])
//! - Opens storage and builds every store into one [`AppContext`]
//! - Implements the run workflow (add to run, place, reorder)
//!
//! # Example
//!
//! ```rust,ignore
//! use brew_core::{logging, AppContext, BrewConfig};
//!
//! # fn example() -> Result<(), brew_core::BrewError> {
//! let config = BrewConfig::load("brew.toml")?;
//! logging::init(&config.logging)?;
//!
//! let ctx = AppContext::open(config)?;
//! let abdul = ctx.roster().people()[0].id;
//! let draft = ctx.roster().draft_order(abdul);
//! ctx.roster().update_draft(abdul, draft);
//! ctx.roster().submit_order(abdul)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod context;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use config::{
    BrewConfig, ConfigError, LoggingConfig, PersistenceConfig, RosterConfig, StorageConfig,
    TimerConfig,
};
pub use context::AppContext;
pub use error::{BrewError, RunError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building and driving an [`AppContext`](crate::AppContext)
    pub use crate::{AppContext, BrewConfig, BrewError, RunError};
    pub use brew_model::{Order, OrderId, Person, PersonId, PersonOrder, RunCupSize, RunDrink};
    pub use brew_store::{Clock, SystemClock};
    pub use brew_timer::{CountdownDriver, ExpiryNotifier, TimerSnapshot, TimerState};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
