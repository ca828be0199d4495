//! Shared, observable countdown

use crate::countdown::{Countdown, Tick, TimerSnapshot};
use crate::error::TimerError;
use crate::state::TimerState;
use parking_lot::Mutex;
use tokio::sync::watch;

/// A [`Countdown`] shared between the UI and the driver
///
/// Every command publishes a fresh [`TimerSnapshot`] when it changes
/// anything.
#[derive(Debug)]
pub struct Timer {
    countdown: Mutex<Countdown>,
    tx: watch::Sender<TimerSnapshot>,
}

impl Timer {
    /// Wrap a countdown
    #[must_use]
    pub fn new(countdown: Countdown) -> Self {
        let (tx, _rx) = watch::channel(countdown.snapshot());
        Self {
            countdown: Mutex::new(countdown),
            tx,
        }
    }

    /// Begin counting down
    ///
    /// # Errors
    /// - `TimerError::IllegalTransition` unless idle
    pub fn start(&self) -> Result<TimerState, TimerError> {
        self.apply(Countdown::start)
    }

    /// Suspend counting
    ///
    /// # Errors
    /// - `TimerError::IllegalTransition` unless running
    pub fn pause(&self) -> Result<TimerState, TimerError> {
        self.apply(Countdown::pause)
    }

    /// Continue after a pause
    ///
    /// # Errors
    /// - `TimerError::IllegalTransition` unless paused
    pub fn resume(&self) -> Result<TimerState, TimerError> {
        self.apply(Countdown::resume)
    }

    /// Advance one second
    pub fn tick(&self) -> Tick {
        self.apply(Countdown::tick)
    }

    /// Return to idle with the last duration
    pub fn reset(&self) {
        self.apply(Countdown::reset);
    }

    /// Reset to a configured preset
    ///
    /// # Errors
    /// - `TimerError::UnknownPreset` if `secs` is not a preset
    pub fn select_preset(&self, secs: u32) -> Result<(), TimerError> {
        self.apply(|c| c.select_preset(secs))
    }

    /// Current snapshot
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> TimerSnapshot {
        *self.tx.borrow()
    }

    /// Configured preset lengths
    #[must_use]
    pub fn presets_secs(&self) -> Vec<u32> {
        self.countdown.lock().presets_secs().to_vec()
    }

    /// Subscribe to snapshot changes
    #[inline]
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.tx.subscribe()
    }

    fn apply<R>(&self, f: impl FnOnce(&mut Countdown) -> R) -> R {
        let mut countdown = self.countdown.lock();
        let out = f(&mut countdown);
        let snapshot = countdown.snapshot();
        self.tx.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
        out
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(Countdown::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_publish_snapshots() {
        let timer = Timer::new(Countdown::new(5));
        let mut rx = timer.subscribe();

        timer.start().unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().state, TimerState::Running);

        timer.tick();
        assert_eq!(rx.borrow_and_update().remaining_secs, 4);
    }

    #[test]
    fn start_does_not_resume_a_paused_timer() {
        let timer = Timer::new(Countdown::new(5));
        timer.start().unwrap();
        timer.pause().unwrap();
        let rx = timer.subscribe();

        assert!(timer.start().unwrap_err().is_illegal_transition());
        assert_eq!(timer.snapshot().state, TimerState::Paused);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn rejected_commands_do_not_publish() {
        let timer = Timer::default();
        let rx = timer.subscribe();

        assert!(timer.pause().is_err());
        assert_eq!(timer.tick(), Tick::Ignored);
        assert!(!rx.has_changed().unwrap());
    }
}
