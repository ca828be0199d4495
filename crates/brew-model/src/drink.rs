//! Drink and cup-size enumerations
//!
//! Two menus exist: the roster menu ([`DrinkType`], [`CupSize`]) and the
//! shorter run menu ([`RunDrink`], [`RunCupSize`]). Values serialize as their
//! display names.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drink on the roster menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrinkType {
    /// Drip coffee
    #[default]
    Coffee,
    /// Steeped tea
    Tea,
    /// Espresso with steamed milk
    Latte,
    /// Coffee over ice
    #[serde(rename = "Iced Coffee")]
    IcedCoffee,
    /// Sweet vanilla cappuccino
    #[serde(rename = "French Vanilla")]
    FrenchVanilla,
    /// Cocoa, no caffeine
    #[serde(rename = "Hot Chocolate")]
    HotChocolate,
    /// Single shot
    Espresso,
}

impl DrinkType {
    /// Every drink, in menu order
    pub const ALL: [DrinkType; 7] = [
        DrinkType::Coffee,
        DrinkType::Tea,
        DrinkType::Latte,
        DrinkType::IcedCoffee,
        DrinkType::FrenchVanilla,
        DrinkType::HotChocolate,
        DrinkType::Espresso,
    ];

    /// Display name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkType::Coffee => "Coffee",
            DrinkType::Tea => "Tea",
            DrinkType::Latte => "Latte",
            DrinkType::IcedCoffee => "Iced Coffee",
            DrinkType::FrenchVanilla => "French Vanilla",
            DrinkType::HotChocolate => "Hot Chocolate",
            DrinkType::Espresso => "Espresso",
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrinkType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::unknown_variant("drink", s))
    }
}

/// Cup size on the roster menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CupSize {
    /// Small cup
    Small,
    /// Medium cup
    #[default]
    Medium,
    /// Large cup
    Large,
    /// Extra large cup
    #[serde(rename = "Extra Large")]
    ExtraLarge,
}

impl CupSize {
    /// Every size, smallest first
    pub const ALL: [CupSize; 4] = [
        CupSize::Small,
        CupSize::Medium,
        CupSize::Large,
        CupSize::ExtraLarge,
    ];

    /// Display name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CupSize::Small => "Small",
            CupSize::Medium => "Medium",
            CupSize::Large => "Large",
            CupSize::ExtraLarge => "Extra Large",
        }
    }
}

impl fmt::Display for CupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CupSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::unknown_variant("size", s))
    }
}

/// Drink on the run menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunDrink {
    /// Drip coffee
    Coffee,
    /// Espresso with steamed milk
    Latte,
    /// Espresso with foamed milk
    Cappuccino,
    /// Steeped tea
    Tea,
    /// Coffee over ice
    #[serde(rename = "Iced Coffee")]
    IcedCoffee,
}

impl RunDrink {
    /// Every drink, in menu order
    pub const ALL: [RunDrink; 5] = [
        RunDrink::Coffee,
        RunDrink::Latte,
        RunDrink::Cappuccino,
        RunDrink::Tea,
        RunDrink::IcedCoffee,
    ];

    /// Display name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RunDrink::Coffee => "Coffee",
            RunDrink::Latte => "Latte",
            RunDrink::Cappuccino => "Cappuccino",
            RunDrink::Tea => "Tea",
            RunDrink::IcedCoffee => "Iced Coffee",
        }
    }
}

impl fmt::Display for RunDrink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunDrink {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::unknown_variant("drink", s))
    }
}

/// Cup size on the run menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunCupSize {
    /// Small cup
    Small,
    /// Medium cup
    Medium,
    /// Large cup
    Large,
}

impl RunCupSize {
    /// Every size, smallest first
    pub const ALL: [RunCupSize; 3] = [RunCupSize::Small, RunCupSize::Medium, RunCupSize::Large];

    /// Display name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RunCupSize::Small => "Small",
            RunCupSize::Medium => "Medium",
            RunCupSize::Large => "Large",
        }
    }
}

impl fmt::Display for RunCupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunCupSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::unknown_variant("size", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_round_trip_through_from_str() {
        for drink in DrinkType::ALL {
            assert_eq!(drink.as_str().parse::<DrinkType>().unwrap(), drink);
        }
        for size in CupSize::ALL {
            assert_eq!(size.to_string().parse::<CupSize>().unwrap(), size);
        }
        for drink in RunDrink::ALL {
            assert_eq!(drink.as_str().parse::<RunDrink>().unwrap(), drink);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("iced coffee".parse::<DrinkType>().unwrap(), DrinkType::IcedCoffee);
        assert_eq!(" large ".parse::<RunCupSize>().unwrap(), RunCupSize::Large);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "Mocha".parse::<RunDrink>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownVariant { kind: "drink", .. }));
    }

    #[test]
    fn serializes_by_display_name() {
        assert_eq!(
            serde_json::to_string(&DrinkType::HotChocolate).unwrap(),
            "\"Hot Chocolate\""
        );
        assert_eq!(
            serde_json::to_string(&CupSize::ExtraLarge).unwrap(),
            "\"Extra Large\""
        );
    }

    #[test]
    fn defaults_match_fresh_order() {
        assert_eq!(DrinkType::default(), DrinkType::Coffee);
        assert_eq!(CupSize::default(), CupSize::Medium);
    }
}
