//! Observable values
//!
//! [`Published<T>`] owns a value and notifies subscribers when it changes.
//! Backed by a `tokio::sync::watch` channel, so a subscriber always sees the
//! latest value and never a backlog of intermediate ones.

use tokio::sync::watch;

/// A value with change notification
#[derive(Debug)]
pub struct Published<T> {
    tx: watch::Sender<T>,
}

impl<T> Published<T> {
    /// Create with initial value
    #[inline]
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Subscribe to changes
    ///
    /// The receiver starts with the current value marked as seen;
    /// `changed().await` resolves on the next modification.
    #[inline]
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Read the current value
    ///
    /// Must not call back into [`Published::modify_if`] on the same value
    /// from inside `f`.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Mutate in place
    ///
    /// `f` returns whether it changed anything; subscribers are only notified
    /// when it did.
    #[inline]
    pub fn modify_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }
}

impl<T: Clone> Published<T> {
    /// Clone of the current value
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Published<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
