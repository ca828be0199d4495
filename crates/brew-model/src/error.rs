//! Error types for the model

/// Model-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Text did not name a known menu entry
    #[error("unknown {kind}: '{value}'")]
    UnknownVariant {
        /// Which menu was searched
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// Person name was empty after trimming
    #[error("person name is empty")]
    EmptyName,
}

impl ModelError {
    /// Create unknown-variant error
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}
