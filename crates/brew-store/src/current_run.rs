//! Current run
//!
//! The session cart: orders collected for the run being assembled right now.
//! Held in memory only; placing the run moves its orders into history.

use crate::offsets::remove_offsets;
use crate::published::Published;
use brew_model::PersonOrder;
use tokio::sync::watch;

/// Ordered list of orders for the run in progress
///
/// Index-based commands ignore out-of-range indices and say so through their
/// return value.
#[derive(Debug, Default)]
pub struct CurrentRunStore {
    orders: Published<Vec<PersonOrder>>,
}

impl CurrentRunStore {
    /// Create an empty run
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one order
    pub fn add(&self, order: PersonOrder) {
        tracing::debug!(id = %order.id, name = %order.name, "adding to run");
        self.orders.modify_if(|orders| {
            orders.push(order);
            true
        });
    }

    /// Append several orders, keeping their order
    pub fn add_many(&self, new_orders: impl IntoIterator<Item = PersonOrder>) {
        self.orders.modify_if(|orders| {
            let before = orders.len();
            orders.extend(new_orders);
            orders.len() != before
        });
    }

    /// Remove the order at `index`
    pub fn remove_at(&self, index: usize) -> Option<PersonOrder> {
        let mut removed = None;
        self.orders.modify_if(|orders| {
            if index >= orders.len() {
                tracing::warn!(index, len = orders.len(), "ignoring out-of-range run index");
                return false;
            }
            removed = Some(orders.remove(index));
            true
        });
        removed
    }

    /// Remove the orders at `offsets`
    ///
    /// # Returns
    /// The removed orders, in run order
    pub fn remove_offsets(&self, offsets: &[usize]) -> Vec<PersonOrder> {
        let mut removed = Vec::new();
        self.orders.modify_if(|orders| {
            removed = remove_offsets(orders, offsets, "current run");
            !removed.is_empty()
        });
        removed
    }

    /// Replace the order at `index`
    ///
    /// # Returns
    /// The previous order, or `None` if `index` is out of range (nothing is
    /// inserted in that case)
    pub fn replace(&self, index: usize, order: PersonOrder) -> Option<PersonOrder> {
        let mut previous = None;
        self.orders.modify_if(|orders| {
            let Some(slot) = orders.get_mut(index) else {
                tracing::warn!(index, len = orders.len(), "ignoring out-of-range run index");
                return false;
            };
            previous = Some(std::mem::replace(slot, order));
            true
        });
        previous
    }

    /// Remove every order
    pub fn clear(&self) {
        self.orders.modify_if(|orders| {
            let changed = !orders.is_empty();
            orders.clear();
            changed
        });
    }

    /// Remove and return every order
    pub fn take_all(&self) -> Vec<PersonOrder> {
        let mut taken = Vec::new();
        self.orders.modify_if(|orders| {
            taken = std::mem::take(orders);
            !taken.is_empty()
        });
        taken
    }

    /// Snapshot of the run
    #[inline]
    #[must_use]
    pub fn orders(&self) -> Vec<PersonOrder> {
        self.orders.snapshot()
    }

    /// Order at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<PersonOrder> {
        self.orders.with(|orders| orders.get(index).cloned())
    }

    /// Number of orders
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.with(Vec::len)
    }

    /// Check if the run is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.with(Vec::is_empty)
    }

    /// Subscribe to run changes
    #[inline]
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<PersonOrder>> {
        self.orders.subscribe()
    }
}
