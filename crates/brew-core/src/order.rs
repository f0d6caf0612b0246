//! # Order
//!
//! The immutable result of [`OrderBuilder::finalize`](crate::builder::OrderBuilder::finalize).
//!
//! Price and description are frozen when the order is created, the same way a
//! cart line freezes its unit price: later builder changes never reach a
//! finished order.

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

use crate::catalog::{Base, Milk, Size};
use crate::price::Price;

/// A priced, described drink.
///
/// Fields are private; the only way to get an `Order` is to finalize a
/// builder, so price and description always agree with the selection.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Order {
    base: Base,
    size: Size,
    milk: Milk,
    /// Distinct syrups, sorted lexicographically.
    syrups: Vec<String>,
    sugar: u8,
    iced: bool,
    price: Price,
    description: String,
}

impl Order {
    /// Assembles an order. Callers are responsible for `syrups` being sorted
    /// and deduplicated and for `price`/`description` matching the selection.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        base: Base,
        size: Size,
        milk: Milk,
        syrups: Vec<String>,
        sugar: u8,
        iced: bool,
        price: Price,
        description: String,
    ) -> Self {
        Order {
            base,
            size,
            milk,
            syrups,
            sugar,
            iced,
            price,
            description,
        }
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn milk(&self) -> Milk {
        self.milk
    }

    pub fn syrups(&self) -> &[String] {
        &self.syrups
    }

    pub fn sugar(&self) -> u8 {
        self.sugar
    }

    pub fn is_iced(&self) -> bool {
        self.iced
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The description, or `Price: <amount>` if the description is empty.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "Price: {}", self.price)
        } else {
            f.write_str(&self.description)
        }
    }
}
