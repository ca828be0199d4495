//! Trailing debounced writer
//!
//! Watches a [`Published`](crate::Published) value and hands the latest
//! snapshot to a sink once the value has been quiet for `delay`. Each change
//! inside the window restarts it, so a burst of edits costs one write.
//!
//! When the publishing side is dropped with a change still pending, that
//! change is flushed before the task exits.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle to a running debounce task
///
/// Dropping the handle detaches the task; it stops on its own when the
/// watched value's sender goes away.
#[derive(Debug)]
pub struct DebouncedWriter {
    task: JoinHandle<()>,
    delay: Duration,
}

impl DebouncedWriter {
    /// Spawn on the current tokio runtime
    ///
    /// # Returns
    /// `None` when called outside a runtime; the caller is expected to fall
    /// back to writing synchronously.
    pub fn spawn<T, F>(rx: watch::Receiver<T>, delay: Duration, sink: F) -> Option<Self>
    where
        T: Clone + Send + Sync + 'static,
        F: FnMut(T) + Send + 'static,
    {
        let handle = Handle::try_current().ok()?;
        let task = handle.spawn(run(rx, delay, sink));
        Some(Self { task, delay })
    }

    /// Quiet period before a write
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Check if the task has exited
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the task to exit
    ///
    /// Completes once the watched sender is dropped and any pending change
    /// has been flushed.
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "debounced writer task failed");
        }
    }
}

async fn run<T, F>(mut rx: watch::Receiver<T>, delay: Duration, mut sink: F)
where
    T: Clone + Send + Sync + 'static,
    F: FnMut(T) + Send + 'static,
{
    while rx.changed().await.is_ok() {
        let closed = loop {
            tokio::select! {
                () = tokio::time::sleep(delay) => break false,
                changed = rx.changed() => {
                    if changed.is_err() {
                        break true;
                    }
                    tracing::trace!("change inside quiet window, restarting");
                }
            }
        };

        let snapshot = rx.borrow_and_update().clone();
        tracing::debug!(?delay, closed, "debounce window elapsed, flushing");
        sink(snapshot);

        if closed {
            return;
        }
    }
}
