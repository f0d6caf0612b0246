//! # Price Module
//!
//! Provides the `Price` type for drink totals.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SIZE MULTIPLIERS ARE FRACTIONAL                                        │
//! │                                                                         │
//! │    latte (300) × medium (1.2) = 360.0                                   │
//! │    americano (250) × large (1.4) = 350.0                                │
//! │                                                                         │
//! │  Totals are computed with f64 in a FIXED operation order:               │
//! │    base × size, then + milk, then + syrups, then + iced                 │
//! │  so the same selection always yields the bit-identical total.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::price::Price;
//!
//! let base = Price::new(300.0);
//! let total = base * 1.2 + Price::new(60.0);
//! assert_eq!(total.amount(), 420.0);
//! assert_eq!(total.to_string(), "420.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

/// A monetary amount in menu units.
///
/// ## Design Decisions
/// - **f64**: size multipliers are fractional, totals follow them
/// - **Single field tuple struct**: zero-cost wrapper, serializes as a bare number
/// - **No Eq/Ord**: floats only get `PartialEq`/`PartialOrd`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Price(f64);

impl Price {
    /// Creates a price from a raw amount.
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Price(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Zero price.
    #[inline]
    pub const fn zero() -> Self {
        Price(0.0)
    }

    /// Checks if the price is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Multiplies a unit price by a count (e.g. syrups).
    ///
    /// ```rust
    /// use brew_core::price::Price;
    ///
    /// assert_eq!(Price::new(40.0).times(3).amount(), 120.0);
    /// ```
    #[inline]
    pub fn times(&self, count: usize) -> Self {
        Price(count as f64 * self.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two decimal places, no currency symbol (the menu has no currency).
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Scaling by a size multiplier.
impl Mul<f64> for Price {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Price(self.0 * factor)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
