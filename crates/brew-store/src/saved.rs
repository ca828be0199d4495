//! Saved orders
//!
//! Durable favorites and day-bucketed order history. Every mutating call
//! writes both collections straight away under [`keys::FAVORITES`] and
//! [`keys::HISTORY`]; write failures are logged and the in-memory state is
//! kept.

use crate::clock::Clock;
use crate::published::Published;
use brew_model::{CoffeeRunDay, DayId, OrderId, PersonOrder};
use brew_persist::{keys, PersistenceAdapter};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::watch;

/// Favorites and history
#[derive(Debug)]
pub struct SavedOrdersStore {
    favorites: Published<Vec<PersonOrder>>,
    /// Newest day first
    history: Published<Vec<CoffeeRunDay>>,
    persistence: PersistenceAdapter,
    clock: Arc<dyn Clock>,
}

impl SavedOrdersStore {
    /// Load favorites and history from persistence
    ///
    /// Missing or unreadable collections start out empty.
    #[must_use]
    pub fn load(persistence: PersistenceAdapter, clock: Arc<dyn Clock>) -> Self {
        let favorites: Vec<PersonOrder> = persistence.load_or_else(keys::FAVORITES, Vec::new);
        let history: Vec<CoffeeRunDay> = persistence.load_or_else(keys::HISTORY, Vec::new);
        tracing::info!(
            favorites = favorites.len(),
            days = history.len(),
            "saved orders loaded"
        );

        Self {
            favorites: Published::new(favorites),
            history: Published::new(history),
            persistence,
            clock,
        }
    }

    /// Insert a favorite, or replace the one with the same ID in place
    ///
    /// Appended favorites are always flagged `is_favorite`.
    pub fn upsert_favorite(&self, order: PersonOrder) {
        self.favorites.modify_if(|favorites| {
            if let Some(existing) = favorites.iter_mut().find(|f| f.id == order.id) {
                if *existing == order {
                    return false;
                }
                *existing = order;
            } else {
                favorites.push(order.with_favorite(true));
            }
            true
        });
        self.persist();
    }

    /// Remove every favorite with `id`
    ///
    /// # Returns
    /// Number of favorites removed
    pub fn remove_favorite(&self, id: OrderId) -> usize {
        let mut removed = 0;
        self.favorites.modify_if(|favorites| {
            let before = favorites.len();
            favorites.retain(|f| f.id != id);
            removed = before - favorites.len();
            removed > 0
        });
        self.persist();
        removed
    }

    /// Record `orders` under today's history entry
    ///
    /// Appends to the newest entry when it falls on the current local day,
    /// otherwise starts a new entry at the front.
    ///
    /// # Returns
    /// ID of the day the orders were recorded under, or `None` if `orders`
    /// was empty
    pub fn add_to_today(&self, orders: Vec<PersonOrder>) -> Option<DayId> {
        if orders.is_empty() {
            tracing::debug!("no orders to record");
            return None;
        }

        let now = self.clock.now();
        let count = orders.len();
        let mut day_id = None;
        self.history.modify_if(|history| {
            match history.first_mut() {
                Some(today) if today.is_same_day(&now) => {
                    today.orders.extend(orders);
                    day_id = Some(today.id);
                }
                _ => {
                    let day = CoffeeRunDay::new(now.with_timezone(&Utc), orders);
                    day_id = Some(day.id);
                    history.insert(0, day);
                }
            }
            true
        });

        tracing::info!(count, day = ?day_id, "orders added to history");
        self.persist();
        day_id
    }

    /// Snapshot of favorites
    #[inline]
    #[must_use]
    pub fn favorites(&self) -> Vec<PersonOrder> {
        self.favorites.snapshot()
    }

    /// Favorite with `id`
    #[must_use]
    pub fn favorite(&self, id: OrderId) -> Option<PersonOrder> {
        self.favorites
            .with(|favorites| favorites.iter().find(|f| f.id == id).cloned())
    }

    /// Snapshot of history, newest day first
    #[inline]
    #[must_use]
    pub fn history(&self) -> Vec<CoffeeRunDay> {
        self.history.snapshot()
    }

    /// History entry with `id`
    #[must_use]
    pub fn day(&self, id: DayId) -> Option<CoffeeRunDay> {
        self.history
            .with(|history| history.iter().find(|d| d.id == id).cloned())
    }

    /// Subscribe to favorite changes
    #[inline]
    #[must_use]
    pub fn subscribe_favorites(&self) -> watch::Receiver<Vec<PersonOrder>> {
        self.favorites.subscribe()
    }

    /// Subscribe to history changes
    #[inline]
    #[must_use]
    pub fn subscribe_history(&self) -> watch::Receiver<Vec<CoffeeRunDay>> {
        self.history.subscribe()
    }

    fn persist(&self) {
        self.favorites.with(|favorites| {
            if let Err(e) = self.persistence.save(keys::FAVORITES, favorites) {
                tracing::warn!(error = %e, "failed to save favorites");
            }
        });
        self.history.with(|history| {
            if let Err(e) = self.persistence.save(keys::HISTORY, history) {
                tracing::warn!(error = %e, "failed to save history");
            }
        });
    }
}
