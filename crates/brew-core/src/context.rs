//! Application context
//!
//! One [`AppContext`] is built at start-up and shared through `Arc`. It owns
//! every store plus the countdown and implements the run workflow on top of
//! them:
//!
//! ```text
//! add_to_run ─► current run ─► place_order ─► today's history
//!                   ▲                              │
//!                   └──── reorder / reorder_day ◄──┘
//! ```

use crate::config::BrewConfig;
use crate::error::{BrewError, RunError};
use brew_model::{DayId, OrderId, PersonOrder};
use brew_persist::{DirectoryStore, KeyValueStore, MemoryStore, PersistenceAdapter};
use brew_store::{Clock, CurrentRunStore, OrderStore, SavedOrdersStore, SystemClock};
use brew_timer::{CountdownDriver, ExpiryNotifier, Timer, TimerState};
use std::sync::Arc;

/// Every store of the application
#[derive(Debug)]
pub struct AppContext {
    config: BrewConfig,
    roster: OrderStore,
    run: CurrentRunStore,
    saved: SavedOrdersStore,
    timer: Arc<Timer>,
}

impl AppContext {
    /// Build from configuration
    ///
    /// Uses a [`DirectoryStore`] when `storage.dir` is set, otherwise an
    /// in-memory store.
    ///
    /// # Errors
    /// - `BrewError::Config` if the configuration is invalid
    /// - `BrewError::Storage` if the storage directory cannot be created
    pub fn open(config: BrewConfig) -> Result<Self, BrewError> {
        config.validate()?;
        let backend: Arc<dyn KeyValueStore> = match &config.storage.dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "using directory storage");
                Arc::new(DirectoryStore::open(dir)?)
            }
            None => {
                tracing::info!("using in-memory storage");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::with_backend(config, backend, Arc::new(SystemClock)))
    }

    /// Build over an explicit backend and clock
    #[must_use]
    pub fn with_backend(
        config: BrewConfig,
        backend: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let persistence = PersistenceAdapter::from_shared(backend);
        let roster = OrderStore::load(persistence.clone(), config.roster_options());
        let saved = SavedOrdersStore::load(persistence, clock);
        let timer = Arc::new(Timer::new(config.countdown()));

        Self {
            config,
            roster,
            run: CurrentRunStore::new(),
            saved,
            timer,
        }
    }

    /// Configuration the context was built with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &BrewConfig {
        &self.config
    }

    /// Roster store
    #[inline]
    #[must_use]
    pub fn roster(&self) -> &OrderStore {
        &self.roster
    }

    /// Current run
    #[inline]
    #[must_use]
    pub fn run(&self) -> &CurrentRunStore {
        &self.run
    }

    /// Favorites and history
    #[inline]
    #[must_use]
    pub fn saved(&self) -> &SavedOrdersStore {
        &self.saved
    }

    /// Countdown
    #[inline]
    #[must_use]
    pub fn timer(&self) -> &Arc<Timer> {
        &self.timer
    }

    // ------------------------------------------------------------------
    // Run workflow
    // ------------------------------------------------------------------

    /// Add an order to the current run, optionally saving it as a favorite
    pub fn add_to_run(&self, order: PersonOrder, mark_favorite: bool) -> OrderId {
        let order = order.with_favorite(mark_favorite);
        let id = order.id;
        if mark_favorite {
            self.saved.upsert_favorite(order.clone());
        }
        self.run.add(order);
        id
    }

    /// Move the current run into today's history and reset the countdown
    ///
    /// Allowed once the countdown has expired, or when it was never started.
    /// The run is left untouched on error.
    ///
    /// # Errors
    /// - `RunError::WindowOpen` while the countdown is running or paused
    /// - `RunError::EmptyRun` if there is nothing to place
    pub fn place_order(&self) -> Result<DayId, RunError> {
        let timer = self.timer.snapshot();
        if matches!(timer.state, TimerState::Running | TimerState::Paused) {
            tracing::debug!(
                state = %timer.state,
                remaining = timer.remaining_secs,
                "order window still open"
            );
            return Err(RunError::WindowOpen {
                remaining_secs: timer.remaining_secs,
            });
        }

        let orders = self.run.take_all();
        let count = orders.len();
        let day = self.saved.add_to_today(orders).ok_or(RunError::EmptyRun)?;
        self.timer.reset();
        tracing::info!(count, %day, "run placed");
        Ok(day)
    }

    /// Copy a past order into the current run under a fresh ID
    pub fn reorder(&self, order: &PersonOrder) -> OrderId {
        let copy = order.duplicate();
        let id = copy.id;
        self.run.add(copy);
        id
    }

    /// Copy every order of a past day into the current run
    ///
    /// # Returns
    /// Number of orders added; `0` for an unknown day
    pub fn reorder_day(&self, day: DayId) -> usize {
        let Some(entry) = self.saved.day(day) else {
            tracing::debug!(%day, "reorder of unknown day ignored");
            return 0;
        };
        let count = entry.orders.len();
        self.run.add_many(entry.orders.iter().map(PersonOrder::duplicate));
        count
    }

    /// Copy of a favorite for editing
    ///
    /// Upserting the edited copy replaces the favorite in place.
    #[must_use]
    pub fn apply_favorite(&self, id: OrderId) -> Option<PersonOrder> {
        self.saved.favorite(id)
    }

    /// Start ticking the countdown on the current tokio runtime
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn_timer(&self, notifier: Arc<dyn ExpiryNotifier>) -> CountdownDriver {
        CountdownDriver::spawn(Arc::clone(&self.timer), notifier)
    }

    /// Write pending roster changes
    pub fn shutdown(&self) {
        self.roster.flush();
        tracing::info!("context shut down");
    }
}
