//! Brew Timer
//!
//! Countdown for the coffee run ("order closes in 10 minutes").
//!
//! ```text
//! idle ──start──► running ──pause──► paused
//!                   │   ▲              │
//!                   │   └───resume─────┘
//!                   ▼
//!                expired      (reset / preset: any state ──► idle)
//! ```
//!
//! # Core Concepts
//!
//! - [`Countdown`]: the state machine itself, plain data
//! - [`Timer`]: a countdown shared behind a lock, publishing [`TimerSnapshot`]s
//! - [`CountdownDriver`]: tokio task ticking a [`Timer`] once per second and
//!   firing an [`ExpiryNotifier`]
//!
//! # Example
//!
//! ```rust,ignore
//! use brew_timer::{Countdown, CountdownDriver, LogNotifier, Timer};
//! use std::sync::Arc;
//!
//! let timer = Arc::new(Timer::new(Countdown::new(600)));
//! let _driver = CountdownDriver::spawn(Arc::clone(&timer), Arc::new(LogNotifier));
//! timer.start()?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod countdown;
pub mod driver;
pub mod error;
pub mod state;
pub mod timer;

pub use countdown::{Countdown, Tick, TimerSnapshot, DEFAULT_DURATION_SECS, DEFAULT_PRESETS_SECS};
pub use driver::{CountdownDriver, ExpiryNotifier, LogNotifier, TICK};
pub use error::TimerError;
pub use state::{allowed_transitions, validate_transition, TimerState};
pub use timer::Timer;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
