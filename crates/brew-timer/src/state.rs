//! Timer states and the transition table

use crate::error::TimerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Countdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Not started, or reset
    #[default]
    Idle,
    /// Counting down
    Running,
    /// Counting suspended
    Paused,
    /// Reached zero; stays here until reset
    Expired,
}

impl TimerState {
    /// All states
    pub const ALL: [Self; 4] = [Self::Idle, Self::Running, Self::Paused, Self::Expired];

    /// Lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Expired => "expired",
        }
    }

    /// Check if only a reset leaves this state
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Expired)
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// States reachable from `from`
///
/// The edges into [`TimerState::Idle`] are taken by reset and preset
/// selection, which also apply from `Idle` itself and so skip this check.
#[must_use]
pub fn allowed_transitions(from: TimerState) -> &'static [TimerState] {
    use TimerState::{Expired, Idle, Paused, Running};
    match from {
        Idle => &[Running],
        Running => &[Paused, Expired, Idle],
        Paused => &[Running, Idle],
        Expired => &[Idle],
    }
}

/// Check a transition against the table
///
/// # Errors
/// - `TimerError::IllegalTransition` if `to` is not reachable from `from`
pub fn validate_transition(from: TimerState, to: TimerState) -> Result<(), TimerError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(TimerError::IllegalTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_only_leaves_through_idle() {
        assert_eq!(allowed_transitions(TimerState::Expired), &[TimerState::Idle]);
        for to in [TimerState::Running, TimerState::Paused] {
            assert!(validate_transition(TimerState::Expired, to).is_err());
        }
    }

    #[test]
    fn idle_cannot_pause() {
        let err = validate_transition(TimerState::Idle, TimerState::Paused).unwrap_err();
        assert_eq!(
            err,
            TimerError::IllegalTransition {
                from: TimerState::Idle,
                to: TimerState::Paused
            }
        );
    }

    #[test]
    fn paused_resumes_to_running() {
        assert!(validate_transition(TimerState::Paused, TimerState::Running).is_ok());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&TimerState::Expired).unwrap();
        assert_eq!(json, "\"expired\"");
    }
}
