//! Run model: per-person orders and day-bucketed history

use crate::drink::{RunCupSize, RunDrink};
use crate::id::{DayId, OrderId};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Highest sugar count a run order can carry
pub const MAX_SUGAR: u8 = 4;

/// Standard milk choices offered when composing a run order
pub const MILK_OPTIONS: [&str; 8] = [
    "No milk",
    "Cream",
    "Whole milk",
    "2% milk",
    "Skim",
    "Almond",
    "Oat",
    "Soy",
];

/// One person's order within a coffee run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonOrder {
    /// Order ID (also the favorite key)
    pub id: OrderId,
    /// Who the drink is for
    pub name: String,
    /// Drink
    pub drink: RunDrink,
    /// Cup size
    pub size: RunCupSize,
    /// Milk choice, usually one of [`MILK_OPTIONS`]
    pub milk: String,
    /// Teaspoons of sugar, `0..=MAX_SUGAR`
    #[serde(deserialize_with = "clamp_sugar")]
    pub sugar: u8,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Marked as a favorite when composed
    #[serde(default)]
    pub is_favorite: bool,
}

impl PersonOrder {
    /// Create order with a fresh ID; sugar is clamped to [`MAX_SUGAR`]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        drink: RunDrink,
        size: RunCupSize,
        milk: impl Into<String>,
        sugar: u8,
    ) -> Self {
        Self {
            id: OrderId::new(),
            name: name.into(),
            drink,
            size,
            milk: milk.into(),
            sugar: sugar.min(MAX_SUGAR),
            notes: String::new(),
            is_favorite: false,
        }
    }

    /// With notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// With favorite flag
    #[inline]
    #[must_use]
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Copy of this order under a fresh ID
    ///
    /// Used when reordering from history so the run never holds two entries
    /// sharing an ID.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: OrderId::new(),
            ..self.clone()
        }
    }

    /// `Name — Size Drink`
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} — {} {}", self.name, self.size, self.drink)
    }

    /// `S{sugar} • {milk}`, followed by ` • {notes}` when present
    #[must_use]
    pub fn details(&self) -> String {
        if self.notes.is_empty() {
            format!("S{} • {}", self.sugar, self.milk)
        } else {
            format!("S{} • {} • {}", self.sugar, self.milk, self.notes)
        }
    }
}

fn clamp_sugar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(u8::deserialize(deserializer)?.min(MAX_SUGAR))
}

/// All orders submitted on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeRunDay {
    /// Day ID
    pub id: DayId,
    /// When the first run of the day was placed
    pub date: DateTime<Utc>,
    /// Orders in submission order
    pub orders: Vec<PersonOrder>,
}

impl CoffeeRunDay {
    /// Create a day entry
    #[must_use]
    pub fn new(date: DateTime<Utc>, orders: Vec<PersonOrder>) -> Self {
        Self {
            id: DayId::new(),
            date,
            orders,
        }
    }

    /// Whether this entry falls on the same local calendar day as `now`
    #[must_use]
    pub fn is_same_day(&self, now: &DateTime<Local>) -> bool {
        self.date.with_timezone(&Local).date_naive() == now.date_naive()
    }

    /// Section title, e.g. `Mar 14, 2026`
    #[must_use]
    pub fn title(&self) -> String {
        self.date.with_timezone(&Local).format("%b %-d, %Y").to_string()
    }
}
