//! Timer errors

use crate::state::TimerState;

/// Timer command failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimerError {
    /// Command not valid in the current state
    #[error("illegal timer transition: {from} -> {to}")]
    IllegalTransition {
        /// State the timer was in
        from: TimerState,
        /// State the command would have entered
        to: TimerState,
    },

    /// Duration is not one of the configured presets
    #[error("no preset of {0} seconds")]
    UnknownPreset(u32),

    /// Expiry notification could not be delivered
    #[error("expiry notification failed: {0}")]
    Notify(String),
}

impl TimerError {
    /// Create notification error
    #[inline]
    pub fn notify(reason: impl Into<String>) -> Self {
        Self::Notify(reason.into())
    }

    /// Check if the command was rejected by the state machine
    #[inline]
    #[must_use]
    pub fn is_illegal_transition(&self) -> bool {
        matches!(self, Self::IllegalTransition { .. })
    }
}
