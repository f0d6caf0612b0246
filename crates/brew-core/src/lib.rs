//! # brew-core: Pure Drink Configuration Logic
//!
//! Configures, validates and prices a single customizable drink.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Brew Order Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host (kiosk / cashier UI)                    │   │
//! │  │    Menu ──► choose base/size ──► extras ──► confirm             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brew-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  builder  │  │   order   │  │   price   │  │   │
//! │  │   │ Base/Size │  │ OrderBuil │  │   Order   │  │   Price   │  │   │
//! │  │   │   Milk    │  │   -der    │  │ (frozen)  │  │   (f64)   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO PAYMENT • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Fixed menu: bases, sizes, milks, add-on prices, limits
//! - [`builder`] - The fluent [`OrderBuilder`]
//! - [`order`] - The immutable [`Order`] record
//! - [`price`] - `Price` newtype
//! - [`validation`] - Range checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use brew_core::OrderBuilder;
//!
//! # fn main() -> Result<(), brew_core::OrderError> {
//! let mut builder = OrderBuilder::new();
//! let order = builder
//!     .set_base("americano")?
//!     .set_size("large")?
//!     .add_syrup("caramel")
//!     .finalize()?;
//!
//! // 250 × 1.4 + 40
//! assert_eq!(order.price().amount(), 390.0);
//! assert_eq!(order.to_string(), "large americano + caramel");
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod catalog;
pub mod error;
pub mod order;
pub mod price;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use builder::OrderBuilder;
pub use catalog::{Base, Milk, Size};
pub use error::{OrderError, OrderResult};
pub use order::Order;
pub use price::Price;
