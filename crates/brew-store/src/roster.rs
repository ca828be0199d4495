//! Roster store
//!
//! Single source of truth for the people on a coffee run and the lifecycle of
//! their orders:
//!
//! ```text
//! draft_order ─► update_draft ─► submit_order ─► last_order
//!                     │                              │
//!                clear_draft                  clear_last_order
//! ```
//!
//! The roster is persisted under [`keys::PEOPLE`] after a quiet period.
//! Drafts live only in memory.

use crate::debounce::DebouncedWriter;
use crate::error::RosterError;
use crate::offsets::remove_offsets;
use crate::published::Published;
use brew_model::{roster_share_text, Order, Person, PersonId};
use brew_persist::{keys, PersistenceAdapter};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::watch;

/// Quiet period before the roster is written
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Names seeded when nothing usable is stored
pub const DEFAULT_ROSTER: [&str; 3] = ["Abdul", "Michael", "Doug"];

/// Roster store options
#[derive(Debug, Clone)]
pub struct RosterOptions {
    /// Quiet period before a roster write; zero writes on every change
    pub debounce: Duration,
    /// Names used when no roster is stored or it cannot be read
    pub default_names: Vec<String>,
}

impl RosterOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With debounce period
    #[inline]
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// With fallback roster names
    #[inline]
    #[must_use]
    pub fn with_default_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_names = names.into_iter().map(Into::into).collect();
        self
    }

    fn default_roster(&self) -> Vec<Person> {
        self.default_names
            .iter()
            .filter_map(|name| Person::new(name).ok())
            .collect()
    }
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            default_names: DEFAULT_ROSTER.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Roster of people and their orders
///
/// Commands that cannot apply (unknown person, missing draft, blank name)
/// leave the state untouched and report why through [`RosterError`]; callers
/// are free to ignore it.
#[derive(Debug)]
pub struct OrderStore {
    people: Published<Vec<Person>>,
    drafts: Published<HashMap<PersonId, Order>>,
    persistence: PersistenceAdapter,
    /// `None` means write-through on every roster change
    writer: Option<DebouncedWriter>,
}

impl OrderStore {
    /// Load the roster from persistence
    ///
    /// Falls back to `options.default_names` when nothing is stored or the
    /// stored roster cannot be decoded.
    #[must_use]
    pub fn load(persistence: PersistenceAdapter, options: RosterOptions) -> Self {
        let people = persistence.load_or_else(keys::PEOPLE, || options.default_roster());
        tracing::info!(count = people.len(), "roster loaded");
        Self::with_people(persistence, people, &options)
    }

    /// Create with an explicit roster, ignoring anything stored
    #[must_use]
    pub fn with_people(
        persistence: PersistenceAdapter,
        people: Vec<Person>,
        options: &RosterOptions,
    ) -> Self {
        let people = Published::new(people);

        let writer = if options.debounce.is_zero() {
            None
        } else {
            let sink_persistence = persistence.clone();
            let writer = DebouncedWriter::spawn(people.subscribe(), options.debounce, move |roster| {
                save_roster(&sink_persistence, &roster);
            });
            if writer.is_none() {
                tracing::debug!("no async runtime, roster writes are synchronous");
            }
            writer
        };

        Self {
            people,
            drafts: Published::default(),
            persistence,
            writer,
        }
    }

    // ------------------------------------------------------------------
    // Roster
    // ------------------------------------------------------------------

    /// Append a person
    ///
    /// # Errors
    /// - `RosterError::EmptyName` if `name` is blank after trimming
    pub fn add_person(&self, name: &str) -> Result<PersonId, RosterError> {
        let person = Person::new(name).map_err(|_| RosterError::EmptyName)?;
        let id = person.id;
        tracing::info!(%id, name = %person.name, "adding person");

        self.mutate_people(|people| {
            people.push(person);
            true
        });
        Ok(id)
    }

    /// Remove the people at `offsets`
    ///
    /// Their drafts are discarded too. Duplicate and out-of-range offsets are
    /// ignored.
    ///
    /// # Returns
    /// The removed people, in roster order
    pub fn delete_people(&self, offsets: &[usize]) -> Vec<Person> {
        let mut removed = Vec::new();
        self.mutate_people(|people| {
            removed = remove_offsets(people, offsets, "roster");
            !removed.is_empty()
        });

        if !removed.is_empty() {
            self.drafts.modify_if(|drafts| {
                let before = drafts.len();
                for person in &removed {
                    drafts.remove(&person.id);
                }
                drafts.len() != before
            });
            tracing::info!(count = removed.len(), "removed people");
        }
        removed
    }

    // ------------------------------------------------------------------
    // Drafts
    // ------------------------------------------------------------------

    /// Order to start composing from
    ///
    /// Resolution: in-progress draft, then favorite, then last submitted
    /// order, then a fresh default order. Never mutates.
    #[must_use]
    pub fn draft_order(&self, id: PersonId) -> Order {
        if let Some(draft) = self.draft(id) {
            return draft;
        }
        self.people
            .with(|people| {
                people
                    .iter()
                    .find(|p| p.id == id)
                    .and_then(|p| p.favorite.clone().or_else(|| p.last_order.clone()))
            })
            .unwrap_or_default()
    }

    /// Insert or replace the draft for a person
    pub fn update_draft(&self, id: PersonId, order: Order) {
        self.drafts.modify_if(|drafts| {
            if drafts.get(&id) == Some(&order) {
                return false;
            }
            drafts.insert(id, order);
            true
        });
    }

    /// Discard the draft for a person
    ///
    /// # Returns
    /// The discarded draft, if there was one
    pub fn clear_draft(&self, id: PersonId) -> Option<Order> {
        let mut cleared = None;
        self.drafts.modify_if(|drafts| {
            cleared = drafts.remove(&id);
            cleared.is_some()
        });
        cleared
    }

    // ------------------------------------------------------------------
    // Saved orders
    // ------------------------------------------------------------------

    /// Store `order` as the person's favorite
    ///
    /// # Errors
    /// - `RosterError::PersonNotFound` if the person was removed meanwhile
    pub fn save_favorite(&self, id: PersonId, order: Order) -> Result<(), RosterError> {
        let mut outcome = Err(RosterError::PersonNotFound(id));
        self.mutate_people(|people| {
            let Some(person) = people.iter_mut().find(|p| p.id == id) else {
                return false;
            };
            person.favorite = Some(order);
            outcome = Ok(());
            true
        });
        outcome
    }

    /// Submit the person's draft as their last order and discard the draft
    ///
    /// # Returns
    /// The submitted order
    ///
    /// # Errors
    /// - `RosterError::PersonNotFound` if the person is not on the roster
    /// - `RosterError::NoDraft` if nothing is being composed for them
    pub fn submit_order(&self, id: PersonId) -> Result<Order, RosterError> {
        if !self.contains(id) {
            return Err(RosterError::PersonNotFound(id));
        }
        let order = self.draft(id).ok_or(RosterError::NoDraft(id))?;

        let mut outcome = Err(RosterError::PersonNotFound(id));
        self.mutate_people(|people| {
            let Some(person) = people.iter_mut().find(|p| p.id == id) else {
                return false;
            };
            person.last_order = Some(order.clone());
            outcome = Ok(order);
            true
        });

        if outcome.is_ok() {
            self.clear_draft(id);
            tracing::info!(%id, "order submitted");
        }
        outcome
    }

    /// Forget the person's last submitted order
    ///
    /// Favorite and draft are left alone.
    ///
    /// # Errors
    /// - `RosterError::PersonNotFound` if the person is not on the roster
    pub fn clear_last_order(&self, id: PersonId) -> Result<(), RosterError> {
        let mut outcome = Err(RosterError::PersonNotFound(id));
        self.mutate_people(|people| {
            let Some(person) = people.iter_mut().find(|p| p.id == id) else {
                return false;
            };
            outcome = Ok(());
            person.last_order.take().is_some()
        });
        outcome
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Snapshot of the roster
    #[inline]
    #[must_use]
    pub fn people(&self) -> Vec<Person> {
        self.people.snapshot()
    }

    /// Look up one person
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<Person> {
        self.people
            .with(|people| people.iter().find(|p| p.id == id).cloned())
    }

    /// Check if the person is on the roster
    #[must_use]
    pub fn contains(&self, id: PersonId) -> bool {
        self.people.with(|people| people.iter().any(|p| p.id == id))
    }

    /// Number of people on the roster
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.with(Vec::len)
    }

    /// Check if the roster is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.with(Vec::is_empty)
    }

    /// In-progress draft for a person
    #[must_use]
    pub fn draft(&self, id: PersonId) -> Option<Order> {
        self.drafts.with(|drafts| drafts.get(&id).cloned())
    }

    /// Snapshot of all drafts
    #[inline]
    #[must_use]
    pub fn drafts(&self) -> HashMap<PersonId, Order> {
        self.drafts.snapshot()
    }

    /// Shareable plain-text roster of submitted orders
    #[must_use]
    pub fn share_text(&self) -> String {
        self.people.with(|people| roster_share_text(people))
    }

    /// Subscribe to roster changes
    #[inline]
    #[must_use]
    pub fn subscribe_people(&self) -> watch::Receiver<Vec<Person>> {
        self.people.subscribe()
    }

    /// Subscribe to draft changes
    #[inline]
    #[must_use]
    pub fn subscribe_drafts(&self) -> watch::Receiver<HashMap<PersonId, Order>> {
        self.drafts.subscribe()
    }

    /// Whether roster writes are debounced
    #[inline]
    #[must_use]
    pub fn is_debounced(&self) -> bool {
        self.writer.is_some()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Write the roster now, bypassing the debounce
    pub fn flush(&self) {
        let people = self.people.snapshot();
        save_roster(&self.persistence, &people);
    }

    fn mutate_people(&self, f: impl FnOnce(&mut Vec<Person>) -> bool) -> bool {
        let changed = self.people.modify_if(f);
        if changed && self.writer.is_none() {
            self.flush();
        }
        changed
    }
}

fn save_roster(persistence: &PersistenceAdapter, people: &[Person]) {
    if let Err(e) = persistence.save(keys::PEOPLE, people) {
        tracing::warn!(error = %e, count = people.len(), "failed to save roster");
    }
}
