//! Roster model: orders and people
//!
//! A [`Person`] holds two independent snapshots, `favorite` and
//! `last_order`. Both are copies; changing one never touches the other.

use crate::drink::{CupSize, DrinkType};
use crate::error::ModelError;
use crate::id::{OrderId, PersonId};
use serde::{Deserialize, Serialize};

/// Upper bound for sugars and milks set through the builders
pub const MAX_ADDINS: u32 = 6;

/// A drink order on the roster menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID
    pub id: OrderId,
    /// Drink
    pub drink: DrinkType,
    /// Cup size
    pub size: CupSize,
    /// Sugar count
    pub sugars: u32,
    /// Milk/cream count
    pub milks: u32,
    /// Decaffeinated
    pub decaf: bool,
    /// Served iced
    pub iced: bool,
    /// Free-form notes
    pub notes: String,
}

impl Order {
    /// Create order with default choices (medium coffee, nothing added)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With drink
    #[inline]
    #[must_use]
    pub fn with_drink(mut self, drink: DrinkType) -> Self {
        self.drink = drink;
        self
    }

    /// With size
    #[inline]
    #[must_use]
    pub fn with_size(mut self, size: CupSize) -> Self {
        self.size = size;
        self
    }

    /// With sugars, clamped to [`MAX_ADDINS`]
    #[inline]
    #[must_use]
    pub fn with_sugars(mut self, sugars: u32) -> Self {
        self.sugars = sugars.min(MAX_ADDINS);
        self
    }

    /// With milks, clamped to [`MAX_ADDINS`]
    #[inline]
    #[must_use]
    pub fn with_milks(mut self, milks: u32) -> Self {
        self.milks = milks.min(MAX_ADDINS);
        self
    }

    /// With decaf flag
    #[inline]
    #[must_use]
    pub fn with_decaf(mut self, decaf: bool) -> Self {
        self.decaf = decaf;
        self
    }

    /// With iced flag
    #[inline]
    #[must_use]
    pub fn with_iced(mut self, iced: bool) -> Self {
        self.iced = iced;
        self
    }

    /// With notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// One-line summary, e.g. `Large • Latte • Decaf • 2x sugar • [oat]`
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = vec![self.size.to_string(), self.drink.to_string()];
        if self.decaf {
            parts.push("Decaf".to_string());
        }
        if self.iced {
            parts.push("Iced".to_string());
        }
        if self.sugars > 0 {
            parts.push(format!("{}x sugar", self.sugars));
        }
        if self.milks > 0 {
            parts.push(format!("{}x milk", self.milks));
        }
        if !self.notes.is_empty() {
            parts.push(format!("[{}]", self.notes));
        }
        parts.join(" • ")
    }
}

impl Default for Order {
    fn default() -> Self {
        Self {
            id: OrderId::new(),
            drink: DrinkType::default(),
            size: CupSize::default(),
            sugars: 0,
            milks: 0,
            decaf: false,
            iced: false,
            notes: String::new(),
        }
    }
}

/// A team member on the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Person ID
    pub id: PersonId,
    /// Display name, never empty
    pub name: String,
    /// Saved favorite order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<Order>,
    /// Last submitted order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order: Option<Order>,
}

impl Person {
    /// Create person from a name, trimming surrounding whitespace
    ///
    /// # Errors
    /// - `ModelError::EmptyName` if nothing is left after trimming
    pub fn new(name: &str) -> Result<Self, ModelError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self {
            id: PersonId::new(),
            name: trimmed.to_string(),
            favorite: None,
            last_order: None,
        })
    }

    /// Whether an order has been submitted for this person
    #[inline]
    #[must_use]
    pub fn has_submitted(&self) -> bool {
        self.last_order.is_some()
    }
}
