//! Countdown driver
//!
//! Ticks a shared [`Timer`] once per second while it runs and tells an
//! [`ExpiryNotifier`] when it expires.
//!
//! - The tick schedule restarts whenever the timer (re)enters `running`, so
//!   a resume waits a full second before the next tick.
//! - The notifier fires once per expiry. A reset followed by another run can
//!   fire it again.
//! - Notification is best effort: failures are logged.

use crate::countdown::TimerSnapshot;
use crate::error::TimerError;
use crate::state::TimerState;
use crate::timer::Timer;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Tick period
pub const TICK: Duration = Duration::from_secs(1);

/// Receives expiry notifications
#[async_trait]
pub trait ExpiryNotifier: Send + Sync + 'static {
    /// Called once when the timer reaches `expired`
    async fn notify(&self, snapshot: TimerSnapshot) -> Result<(), TimerError>;
}

/// Notifier that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl ExpiryNotifier for LogNotifier {
    async fn notify(&self, snapshot: TimerSnapshot) -> Result<(), TimerError> {
        tracing::info!(duration_secs = snapshot.duration_secs, "coffee run timer expired");
        Ok(())
    }
}

/// Background task ticking a [`Timer`]
///
/// Dropping the driver stops the task.
#[derive(Debug)]
pub struct CountdownDriver {
    task: JoinHandle<()>,
}

impl CountdownDriver {
    /// Spawn on the current tokio runtime
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn(timer: Arc<Timer>, notifier: Arc<dyn ExpiryNotifier>) -> Self {
        let task = tokio::spawn(run(timer, notifier));
        Self { task }
    }

    /// Check if the task has exited
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop ticking
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for CountdownDriver {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(timer: Arc<Timer>, notifier: Arc<dyn ExpiryNotifier>) {
    let mut rx = timer.subscribe();
    let mut ticks = interval_at(Instant::now() + TICK, TICK);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut last = TimerState::Idle;
    loop {
        let current = *rx.borrow_and_update();
        if current.state == TimerState::Running && last != TimerState::Running {
            ticks.reset();
        }
        if current.state == TimerState::Expired && last != TimerState::Expired {
            if let Err(e) = notifier.notify(current).await {
                tracing::warn!(error = %e, "expiry notification failed");
            }
        }
        last = current.state;

        let running = current.state == TimerState::Running;
        tokio::select! {
            _ = ticks.tick(), if running => {
                timer.tick();
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    return;
                }
            }
        }
    }
}
