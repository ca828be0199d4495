//! Error types for the application context
//!
//! [`BrewError`] aggregates the errors of every workspace crate; only
//! configuration and storage set-up errors stop the application from
//! starting.

use crate::config::ConfigError;
use brew_persist::StorageError;
use brew_store::RosterError;
use brew_timer::TimerError;

/// Main brew error type
#[derive(Debug, thiserror::Error)]
pub enum BrewError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage could not be opened
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Roster command did nothing
    #[error("roster: {0}")]
    Roster(#[from] RosterError),

    /// Timer command rejected
    #[error("timer: {0}")]
    Timer(#[from] TimerError),

    /// Run workflow command did nothing
    #[error("run: {0}")]
    Run(#[from] RunError),
}

impl BrewError {
    /// Check if the error prevents start-up
    #[inline]
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Storage(_))
    }
}

/// Run workflow failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// Placing a run with no orders in it
    #[error("the current run has no orders")]
    EmptyRun,

    /// Placing a run while the countdown is still running or paused
    #[error("the order window is still open ({remaining_secs}s left)")]
    WindowOpen {
        /// Seconds left on the countdown
        remaining_secs: u32,
    },
}

impl RunError {
    /// Check if retrying after the countdown expires can succeed
    #[inline]
    #[must_use]
    pub fn is_window_open(&self) -> bool {
        matches!(self, Self::WindowOpen { .. })
    }
}
