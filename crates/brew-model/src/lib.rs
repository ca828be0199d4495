//! Brew Model
//!
//! Plain value records for a team coffee run.
//!
//! # Core Concepts
//!
//! - [`Order`] / [`Person`]: the roster model. Each person carries an optional
//!   favorite and an optional last submitted order.
//! - [`PersonOrder`] / [`CoffeeRunDay`]: the run model. Orders are collected
//!   into a run, kept as favorites, and committed to day-bucketed history.
//! - [`PersonId`], [`OrderId`], [`DayId`]: UUID-backed identifiers.
//!
//! None of these types perform I/O. Serialization follows the persisted JSON
//! shape (camelCase fields, enum values by display name).
//!
//! # Example
//!
//! ```rust
//! use brew_model::{CupSize, DrinkType, Order};
//!
//! let order = Order::new()
//!     .with_drink(DrinkType::Latte)
//!     .with_size(CupSize::Large)
//!     .with_sugars(2);
//!
//! assert_eq!(order.summary(), "Large • Latte • 2x sugar");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod drink;
mod error;
mod format;
mod id;
mod order;
mod run;

pub use drink::{CupSize, DrinkType, RunCupSize, RunDrink};
pub use error::ModelError;
pub use format::{roster_share_text, SHARE_TITLE};
pub use id::{DayId, OrderId, PersonId};
pub use order::{Order, Person, MAX_ADDINS};
pub use run::{CoffeeRunDay, PersonOrder, MAX_SUGAR, MILK_OPTIONS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
