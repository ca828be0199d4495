//! Error types for the stores
//!
//! Every variant describes a no-op: the store state is left untouched and the
//! caller may ignore the error.

use brew_model::PersonId;

/// Reasons a roster command did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// Name was empty after trimming
    #[error("person name is empty")]
    EmptyName,

    /// Person is not (or no longer) on the roster
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    /// No draft is being composed for the person
    #[error("no draft for person: {0}")]
    NoDraft(PersonId),
}

impl RosterError {
    /// Check if the target person is missing
    #[inline]
    #[must_use]
    pub fn is_missing_person(&self) -> bool {
        matches!(self, Self::PersonNotFound(_))
    }
}
