//! Countdown state machine
//!
//! [`Countdown`] is plain data: commands check the transition table, ticks
//! decrement the remaining seconds. Nothing here knows about wall time; a
//! [`CountdownDriver`](crate::CountdownDriver) supplies the ticks.

use crate::error::TimerError;
use crate::state::{validate_transition, TimerState};
use serde::{Deserialize, Serialize};

/// Default countdown length (10 minutes)
pub const DEFAULT_DURATION_SECS: u32 = 600;

/// Default presets: 5, 10 and 15 minutes
pub const DEFAULT_PRESETS_SECS: [u32; 3] = [300, 600, 900];

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Timer was not running
    Ignored,
    /// Still counting; seconds left
    Counting(u32),
    /// This tick reached zero
    Expired,
}

/// Point-in-time view of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    /// Current state
    pub state: TimerState,
    /// Seconds left
    pub remaining_secs: u32,
    /// Length the countdown was last reset to
    pub duration_secs: u32,
}

impl TimerSnapshot {
    /// Remaining time as `MM:SS`
    #[must_use]
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }
}

/// Countdown timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    state: TimerState,
    remaining_secs: u32,
    duration_secs: u32,
    presets_secs: Vec<u32>,
}

impl Countdown {
    /// Create an idle countdown of `duration_secs`
    #[must_use]
    pub fn new(duration_secs: u32) -> Self {
        Self {
            state: TimerState::Idle,
            remaining_secs: duration_secs,
            duration_secs,
            presets_secs: DEFAULT_PRESETS_SECS.to_vec(),
        }
    }

    /// With preset lengths
    #[must_use]
    pub fn with_presets(mut self, presets_secs: impl Into<Vec<u32>>) -> Self {
        self.presets_secs = presets_secs.into();
        self
    }

    /// Begin counting down
    ///
    /// With nothing left on the clock the countdown expires at once.
    ///
    /// # Errors
    /// - `TimerError::IllegalTransition` unless idle
    pub fn start(&mut self) -> Result<TimerState, TimerError> {
        if self.state != TimerState::Idle {
            return Err(TimerError::IllegalTransition {
                from: self.state,
                to: TimerState::Running,
            });
        }
        self.transition(TimerState::Running)?;
        if self.remaining_secs == 0 {
            self.transition(TimerState::Expired)?;
        }
        Ok(self.state)
    }

    /// Suspend counting
    ///
    /// # Errors
    /// - `TimerError::IllegalTransition` unless running
    pub fn pause(&mut self) -> Result<TimerState, TimerError> {
        self.transition(TimerState::Paused)?;
        Ok(self.state)
    }

    /// Continue after a pause
    ///
    /// # Errors
    /// - `TimerError::IllegalTransition` unless paused
    pub fn resume(&mut self) -> Result<TimerState, TimerError> {
        if self.state != TimerState::Paused {
            return Err(TimerError::IllegalTransition {
                from: self.state,
                to: TimerState::Running,
            });
        }
        self.transition(TimerState::Running)?;
        Ok(self.state)
    }

    /// Advance one second
    ///
    /// Ignored unless running. Reaching zero moves to [`TimerState::Expired`].
    pub fn tick(&mut self) -> Tick {
        if self.state != TimerState::Running {
            return Tick::Ignored;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return Tick::Counting(self.remaining_secs);
        }
        self.state = TimerState::Expired;
        Tick::Expired
    }

    /// Return to idle with the last duration; allowed from any state
    pub fn reset(&mut self) {
        self.reset_to(self.duration_secs);
    }

    /// Return to idle with a new duration; allowed from any state
    pub fn reset_to(&mut self, duration_secs: u32) {
        self.state = TimerState::Idle;
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
    }

    /// Reset to one of the configured presets
    ///
    /// # Errors
    /// - `TimerError::UnknownPreset` if `secs` is not a preset
    pub fn select_preset(&mut self, secs: u32) -> Result<(), TimerError> {
        if !self.presets_secs.contains(&secs) {
            return Err(TimerError::UnknownPreset(secs));
        }
        self.reset_to(secs);
        Ok(())
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Seconds left
    #[inline]
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Length the countdown was last reset to
    #[inline]
    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Configured preset lengths
    #[inline]
    #[must_use]
    pub fn presets_secs(&self) -> &[u32] {
        &self.presets_secs
    }

    /// Remaining time as `MM:SS`
    #[must_use]
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }

    /// Point-in-time view
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            state: self.state,
            remaining_secs: self.remaining_secs,
            duration_secs: self.duration_secs,
        }
    }

    fn transition(&mut self, to: TimerState) -> Result<(), TimerError> {
        validate_transition(self.state, to)?;
        tracing::debug!(from = %self.state, %to, remaining = self.remaining_secs, "timer transition");
        self.state = to;
        Ok(())
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

fn format_mm_ss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::allowed_transitions;
    use proptest::prelude::*;

    #[test]
    fn counts_down_to_expiry() {
        let mut timer = Countdown::new(2);
        timer.start().unwrap();

        assert_eq!(timer.tick(), Tick::Counting(1));
        assert_eq!(timer.tick(), Tick::Expired);
        assert_eq!(timer.state(), TimerState::Expired);
        assert_eq!(timer.tick(), Tick::Ignored);
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn zero_duration_expires_on_start() {
        let mut timer = Countdown::new(0);
        assert_eq!(timer.start().unwrap(), TimerState::Expired);
    }

    #[test]
    fn ticks_while_paused_are_ignored() {
        let mut timer = Countdown::new(60);
        timer.start().unwrap();
        timer.tick();
        timer.pause().unwrap();

        assert_eq!(timer.tick(), Tick::Ignored);
        assert_eq!(timer.remaining_secs(), 59);

        timer.resume().unwrap();
        assert_eq!(timer.tick(), Tick::Counting(58));
    }

    #[test]
    fn expired_needs_reset() {
        let mut timer = Countdown::new(1);
        timer.start().unwrap();
        timer.tick();

        assert!(timer.start().unwrap_err().is_illegal_transition());
        assert!(timer.resume().is_err());

        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 1);
    }

    #[test]
    fn start_while_paused_is_illegal() {
        let mut timer = Countdown::new(10);
        timer.start().unwrap();
        timer.pause().unwrap();
        assert_eq!(
            timer.start(),
            Err(TimerError::IllegalTransition {
                from: TimerState::Paused,
                to: TimerState::Running
            })
        );
        assert_eq!(timer.state(), TimerState::Paused);
        assert!(timer.pause().is_err());
    }

    #[test]
    fn start_while_running_is_illegal() {
        let mut timer = Countdown::new(10);
        timer.start().unwrap();
        assert!(timer.start().unwrap_err().is_illegal_transition());
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn preset_selection_resets_from_any_state() {
        let mut timer = Countdown::default();
        timer.start().unwrap();
        timer.tick();

        timer.select_preset(300).unwrap();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 300);
        assert_eq!(timer.display(), "05:00");

        assert_eq!(timer.select_preset(42), Err(TimerError::UnknownPreset(42)));
        assert_eq!(timer.remaining_secs(), 300);
    }

    #[test]
    fn display_pads_minutes_and_seconds() {
        assert_eq!(Countdown::new(0).display(), "00:00");
        assert_eq!(Countdown::new(65).display(), "01:05");
        assert_eq!(Countdown::new(900).display(), "15:00");
    }

    #[derive(Debug, Clone)]
    enum Command {
        Start,
        Pause,
        Resume,
        Tick,
        Reset,
    }

    fn command() -> impl Strategy<Value = Command> {
        prop_oneof![
            1 => Just(Command::Start),
            1 => Just(Command::Pause),
            1 => Just(Command::Resume),
            4 => Just(Command::Tick),
            1 => Just(Command::Reset),
        ]
    }

    proptest! {
        #[test]
        fn prop_commands_follow_transition_table(
            duration in 0u32..8,
            commands in prop::collection::vec(command(), 0..40),
        ) {
            let mut timer = Countdown::new(duration);
            for cmd in commands {
                let before = timer.state();
                let ok = match cmd {
                    Command::Start => timer.start().is_ok(),
                    Command::Pause => timer.pause().is_ok(),
                    Command::Resume => timer.resume().is_ok(),
                    Command::Tick => { timer.tick(); true }
                    Command::Reset => { timer.reset(); true }
                };
                let after = timer.state();

                prop_assert!(timer.remaining_secs() <= timer.duration_secs());
                if !ok {
                    prop_assert_eq!(before, after);
                }
                if before != after && !matches!(cmd, Command::Reset) {
                    let direct = allowed_transitions(before).contains(&after);
                    let via_running = allowed_transitions(TimerState::Running).contains(&after);
                    prop_assert!(direct || via_running);
                }
                if after == TimerState::Expired {
                    prop_assert_eq!(timer.remaining_secs(), 0);
                }
            }
        }
    }
}
