//! # Catalog
//!
//! The fixed menu: drink bases, sizes, milks and the flat add-on prices.
//!
//! ## Price Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Base          Price   │  Size     Multiplier  │  Milk     Price       │
//! │  ───────────── ─────   │  ──────── ──────────  │  ──────── ─────       │
//! │  espresso        200   │  small        1.0     │  none         0       │
//! │  americano       250   │  medium       1.2     │  whole       30       │
//! │  latte           300   │  large        1.4     │  skim        30       │
//! │  cappuccino      320   │                       │  oat         60       │
//! │                        │                       │  soy         50       │
//! │                                                                         │
//! │  Syrup: 40 each (max 4 distinct)   Iced: +20   Sugar: 0..=5 tsp        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is read-only. Hosts read it to populate choice menus
//! (see [`menu`]); the [`OrderBuilder`](crate::builder::OrderBuilder)
//! validates against it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::OrderError;
use crate::price::Price;

/// Flat price of each distinct syrup.
pub const SYRUP_PRICE: Price = Price::new(40.0);

/// Flat surcharge for serving the drink cold.
pub const ICED_SURCHARGE: Price = Price::new(20.0);

/// Maximum number of distinct syrups in one drink.
pub const MAX_SYRUPS: usize = 4;

/// Accepted teaspoons of sugar, inclusive.
pub const SUGAR_RANGE: RangeInclusive<u8> = 0..=5;

// =============================================================================
// Base
// =============================================================================

/// The underlying drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    Espresso,
    Americano,
    Latte,
    Cappuccino,
}

impl Base {
    /// Every base, in menu order.
    pub const ALL: [Base; 4] = [Base::Espresso, Base::Americano, Base::Latte, Base::Cappuccino];

    /// Catalog name, as accepted by `set_base`.
    pub const fn name(&self) -> &'static str {
        match self {
            Base::Espresso => "espresso",
            Base::Americano => "americano",
            Base::Latte => "latte",
            Base::Cappuccino => "cappuccino",
        }
    }

    /// Price of a small serving.
    pub const fn price(&self) -> Price {
        match self {
            Base::Espresso => Price::new(200.0),
            Base::Americano => Price::new(250.0),
            Base::Latte => Price::new(300.0),
            Base::Cappuccino => Price::new(320.0),
        }
    }
}

// =============================================================================
// Size
// =============================================================================

/// Serving size, applied to the base price as a multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub const fn name(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    pub const fn multiplier(&self) -> f64 {
        match self {
            Size::Small => 1.0,
            Size::Medium => 1.2,
            Size::Large => 1.4,
        }
    }
}

// =============================================================================
// Milk
// =============================================================================

/// Milk added to the drink. `None` is a real menu entry priced at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Milk {
    #[default]
    None,
    Whole,
    Skim,
    Oat,
    Soy,
}

impl Milk {
    pub const ALL: [Milk; 5] = [Milk::None, Milk::Whole, Milk::Skim, Milk::Oat, Milk::Soy];

    pub const fn name(&self) -> &'static str {
        match self {
            Milk::None => "none",
            Milk::Whole => "whole",
            Milk::Skim => "skim",
            Milk::Oat => "oat",
            Milk::Soy => "soy",
        }
    }

    pub const fn price(&self) -> Price {
        match self {
            Milk::None => Price::new(0.0),
            Milk::Whole | Milk::Skim => Price::new(30.0),
            Milk::Oat => Price::new(60.0),
            Milk::Soy => Price::new(50.0),
        }
    }

    /// True for every choice except `none`.
    pub const fn is_some(&self) -> bool {
        !matches!(self, Milk::None)
    }
}

// =============================================================================
// Name parsing / display
// =============================================================================

/// Shared lookup for the three catalogs: exact, case-sensitive name match.
macro_rules! catalog_names {
    ($ty:ident, $field:literal) => {
        impl $ty {
            /// Catalog names, in menu order.
            pub fn names() -> Vec<&'static str> {
                Self::ALL.iter().map(|item| item.name()).collect()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = OrderError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|item| item.name() == s)
                    .ok_or_else(|| OrderError::InvalidSelection {
                        field: $field,
                        value: s.to_string(),
                        allowed: Self::names(),
                    })
            }
        }
    };
}

catalog_names!(Base, "base");
catalog_names!(Size, "size");
catalog_names!(Milk, "milk");

// =============================================================================
// Menu snapshot
// =============================================================================

/// A named catalog entry with its price contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuEntry {
    pub name: String,
    /// Price for bases and milks, multiplier for sizes.
    pub value: f64,
}

/// Read-only copy of the whole catalog, shaped for a host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Menu {
    pub bases: Vec<MenuEntry>,
    pub sizes: Vec<MenuEntry>,
    pub milks: Vec<MenuEntry>,
    pub syrup_price: f64,
    pub iced_surcharge: f64,
    pub max_syrups: usize,
    pub sugar_min: u8,
    pub sugar_max: u8,
}

/// Builds the menu snapshot from the catalog constants.
///
/// ```rust
/// use brew_core::catalog::menu;
///
/// let menu = menu();
/// assert_eq!(menu.bases.len(), 4);
/// assert_eq!(menu.milks[0].name, "none");
/// ```
pub fn menu() -> Menu {
    fn entry(name: &str, value: f64) -> MenuEntry {
        MenuEntry {
            name: name.to_string(),
            value,
        }
    }

    Menu {
        bases: Base::ALL.iter().map(|b| entry(b.name(), b.price().amount())).collect(),
        sizes: Size::ALL.iter().map(|s| entry(s.name(), s.multiplier())).collect(),
        milks: Milk::ALL.iter().map(|m| entry(m.name(), m.price().amount())).collect(),
        syrup_price: SYRUP_PRICE.amount(),
        iced_surcharge: ICED_SURCHARGE.amount(),
        max_syrups: MAX_SYRUPS,
        sugar_min: *SUGAR_RANGE.start(),
        sugar_max: *SUGAR_RANGE.end(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("latte".parse::<Base>().unwrap(), Base::Latte);
        assert_eq!("large".parse::<Size>().unwrap(), Size::Large);
        assert_eq!("none".parse::<Milk>().unwrap(), Milk::None);
        assert_eq!("oat".parse::<Milk>().unwrap(), Milk::Oat);
    }

    #[test]
    fn test_parse_unknown_name_lists_allowed() {
        let err = "mocha".parse::<Base>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid base: mocha. Allowed: espresso, americano, latte, cappuccino"
        );

        let err = "almond".parse::<Milk>().unwrap_err();
        assert!(matches!(err, OrderError::InvalidSelection { field: "milk", .. }));
        assert!(err.to_string().contains("almond"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("Latte".parse::<Base>().is_err());
        assert!(" small".parse::<Size>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        for base in Base::ALL {
            assert_eq!(base.to_string(), base.name());
            assert_eq!(base.name().parse::<Base>().unwrap(), base);
        }
    }

    #[test]
    fn test_serde_uses_catalog_names() {
        assert_eq!(serde_json::to_string(&Milk::Oat).unwrap(), "\"oat\"");
        assert_eq!(serde_json::to_string(&Size::Medium).unwrap(), "\"medium\"");
        let base: Base = serde_json::from_str("\"cappuccino\"").unwrap();
        assert_eq!(base, Base::Cappuccino);
    }

    #[test]
    fn test_milk_default_is_none() {
        assert_eq!(Milk::default(), Milk::None);
        assert!(!Milk::None.is_some());
        assert!(Milk::Soy.is_some());
    }

    #[test]
    fn test_menu_mirrors_constants() {
        let menu = menu();
        assert_eq!(menu.sizes[1].name, "medium");
        assert_eq!(menu.sizes[1].value, 1.2);
        assert_eq!(menu.syrup_price, 40.0);
        assert_eq!(menu.iced_surcharge, 20.0);
        assert_eq!(menu.max_syrups, 4);
        assert_eq!((menu.sugar_min, menu.sugar_max), (0, 5));
    }
}
