//! # Order Builder
//!
//! The fluent configurator that turns step-by-step choices into an [`Order`].
//!
//! ## Builder Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    OrderBuilder Operations                              │
//! │                                                                         │
//! │  Call                    Validation              State Change           │
//! │  ────                    ──────────              ────────────           │
//! │  set_base("latte") ────► base catalog ─────────► base = Some(Latte)     │
//! │  set_size("medium") ───► size catalog ─────────► size = Some(Medium)    │
//! │  set_milk("oat") ──────► milk catalog ─────────► milk = Oat             │
//! │  add_syrup("vanilla") ─► capacity (4) ─────────► syrups ∪ {vanilla}     │
//! │  set_sugar(2) ─────────► 0..=5 ────────────────► sugar = 2              │
//! │  set_iced(true) ───────► (none) ───────────────► iced = true            │
//! │                                                                         │
//! │  finalize() ───────────► base & size set? ─────► new Order (snapshot)   │
//! │                                                                         │
//! │  A rejected call returns Err and changes nothing.                       │
//! │  finalize() reads the builder; it never clears it.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use brew_core::OrderBuilder;
//!
//! # fn main() -> Result<(), brew_core::OrderError> {
//! let order = OrderBuilder::new()
//!     .set_base("latte")?
//!     .set_size("medium")?
//!     .set_milk("oat")?
//!     .add_syrup("vanilla")
//!     .set_sugar(2)?
//!     .make_iced()
//!     .finalize()?;
//!
//! assert_eq!(order.price().amount(), 480.0);
//! assert_eq!(order.to_string(), "medium latte with oat milk + vanilla (iced) 2 tsp sugar");
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//! Mutation needs `&mut self`; a host sharing one builder across threads wraps
//! it in its own lock.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::{Base, Milk, Size, ICED_SURCHARGE, MAX_SYRUPS, SYRUP_PRICE};
use crate::error::{OrderError, OrderResult};
use crate::order::Order;
use crate::price::Price;
use crate::validation::validate_sugar;

/// Accumulates a drink configuration.
///
/// ## Invariants
/// - Every stored field is individually valid
/// - `syrups.len() <= MAX_SYRUPS`
/// - `base` and `size` may be unset until `finalize`
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    base: Option<Base>,
    size: Option<Size>,
    milk: Milk,
    syrups: HashSet<String>,
    sugar: u8,
    iced: bool,
}

fn rejected(err: OrderError) -> OrderError {
    debug!(error = %err, "Selection rejected");
    err
}

impl OrderBuilder {
    /// Creates an empty builder: no base, no size, no extras.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Required selections
    // =========================================================================

    /// Selects the drink base by catalog name.
    ///
    /// ## Errors
    /// `InvalidSelection` if `name` is not a catalog base.
    pub fn set_base(&mut self, name: &str) -> OrderResult<&mut Self> {
        let base: Base = name.parse().map_err(rejected)?;
        debug!(base = %base, "Base selected");
        self.base = Some(base);
        Ok(self)
    }

    /// Selects the serving size by catalog name.
    ///
    /// ## Errors
    /// `InvalidSelection` if `name` is not a catalog size.
    pub fn set_size(&mut self, name: &str) -> OrderResult<&mut Self> {
        let size: Size = name.parse().map_err(rejected)?;
        debug!(size = %size, "Size selected");
        self.size = Some(size);
        Ok(self)
    }

    // =========================================================================
    // Extras
    // =========================================================================

    /// Selects the milk by catalog name. `"none"` removes milk.
    ///
    /// ## Errors
    /// `InvalidSelection` if `name` is not a catalog milk.
    pub fn set_milk(&mut self, name: &str) -> OrderResult<&mut Self> {
        let milk: Milk = name.parse().map_err(rejected)?;
        debug!(milk = %milk, "Milk selected");
        self.milk = milk;
        Ok(self)
    }

    /// Adds a syrup by name.
    ///
    /// ## Behavior
    /// - Already [`MAX_SYRUPS`] syrups: ignored, no error
    /// - Name already present: ignored (set semantics)
    /// - Otherwise: added
    pub fn add_syrup(&mut self, name: &str) -> &mut Self {
        if self.syrups.len() >= MAX_SYRUPS {
            debug!(syrup = %name, max = MAX_SYRUPS, "Syrup limit reached, ignoring");
            return self;
        }
        if self.syrups.insert(name.to_string()) {
            debug!(syrup = %name, count = self.syrups.len(), "Syrup added");
        }
        self
    }

    /// Sets the teaspoons of sugar.
    ///
    /// ## Errors
    /// `OutOfRange` if `teaspoons` is outside 0..=5.
    pub fn set_sugar(&mut self, teaspoons: i32) -> OrderResult<&mut Self> {
        let sugar = validate_sugar(teaspoons).map_err(rejected)?;
        debug!(sugar, "Sugar set");
        self.sugar = sugar;
        Ok(self)
    }

    /// Sets whether the drink is served cold.
    pub fn set_iced(&mut self, iced: bool) -> &mut Self {
        self.iced = iced;
        self
    }

    /// Shorthand for `set_iced(true)`.
    pub fn make_iced(&mut self) -> &mut Self {
        self.set_iced(true)
    }

    /// Resets milk, syrups, sugar and iced. Base and size are kept.
    pub fn clear_extras(&mut self) -> &mut Self {
        self.milk = Milk::None;
        self.syrups.clear();
        self.sugar = 0;
        self.iced = false;
        self
    }

    /// Resets every field, including base and size.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    // =========================================================================
    // Current selection
    // =========================================================================

    pub fn base(&self) -> Option<Base> {
        self.base
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn milk(&self) -> Milk {
        self.milk
    }

    pub fn syrup_count(&self) -> usize {
        self.syrups.len()
    }

    pub fn has_syrup(&self, name: &str) -> bool {
        self.syrups.contains(name)
    }

    /// How many more distinct syrups `add_syrup` will accept.
    pub fn remaining_syrup_slots(&self) -> usize {
        MAX_SYRUPS - self.syrups.len()
    }

    pub fn sugar(&self) -> u8 {
        self.sugar
    }

    pub fn is_iced(&self) -> bool {
        self.iced
    }

    // =========================================================================
    // Finalize
    // =========================================================================

    /// Prices and describes the current selection as a new [`Order`].
    ///
    /// The builder is left as-is and can be changed and finalized again;
    /// earlier orders are unaffected.
    ///
    /// ## Errors
    /// `MissingRequiredField` naming every unset field among base and size.
    pub fn finalize(&self) -> OrderResult<Order> {
        let (base, size) = match (self.base, self.size) {
            (Some(base), Some(size)) => (base, size),
            (base, size) => {
                let mut fields = Vec::new();
                if base.is_none() {
                    fields.push("base");
                }
                if size.is_none() {
                    fields.push("size");
                }
                return Err(rejected(OrderError::MissingRequiredField { fields }));
            }
        };

        let mut syrups: Vec<String> = self.syrups.iter().cloned().collect();
        syrups.sort();

        let price = price_of(base, size, self.milk, syrups.len(), self.iced);
        let description = describe(base, size, self.milk, &syrups, self.sugar, self.iced);

        debug!(price = %price, description = %description, "Order finalized");

        Ok(Order::new(
            base,
            size,
            self.milk,
            syrups,
            self.sugar,
            self.iced,
            price,
            description,
        ))
    }
}

/// Total price. The operation order is fixed so totals are reproducible.
fn price_of(base: Base, size: Size, milk: Milk, syrup_count: usize, iced: bool) -> Price {
    let mut price = base.price() * size.multiplier();
    price += milk.price();
    price += SYRUP_PRICE.times(syrup_count);
    if iced {
        price += ICED_SURCHARGE;
    }
    price
}

/// `"<size> <base>[ with <milk> milk][ + <syrups>][ (iced)][ <n> tsp sugar]"`
fn describe(base: Base, size: Size, milk: Milk, syrups: &[String], sugar: u8, iced: bool) -> String {
    let mut description = format!("{size} {base}");
    if milk.is_some() {
        description.push_str(&format!(" with {milk} milk"));
    }
    if !syrups.is_empty() {
        description.push_str(" + ");
        description.push_str(&syrups.join(", "));
    }
    if iced {
        description.push_str(" (iced)");
    }
    if sugar > 0 {
        description.push_str(&format!(" {sugar} tsp sugar"));
    }
    description
}

// =============================================================================
// Unit Tests
// =============================================================================
