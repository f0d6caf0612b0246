//! # Error Types
//!
//! Domain-specific error types for brew-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         OrderError                                      │
//! │                                                                         │
//! │  set_base / set_size / set_milk ──► InvalidSelection                   │
//! │  set_sugar ───────────────────────► OutOfRange                         │
//! │  finalize ────────────────────────► MissingRequiredField               │
//! │                                                                         │
//! │  add_syrup, set_iced, clear_extras, reset never fail                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (offending value, allowed set)
//! 3. Errors are enum variants, never String
//! 4. A rejected call leaves the builder untouched

use thiserror::Error;

/// Errors raised while configuring or finalizing an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// A setter received a value outside its catalog.
    ///
    /// ## When This Occurs
    /// - `set_base("mocha")`: mocha is not on the menu
    /// - `set_milk("almond")`: almond milk is not stocked
    #[error("Invalid {field}: {value}. Allowed: {}", .allowed.join(", "))]
    InvalidSelection {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// Numeric value is outside its inclusive range.
    #[error("{field} must be between {min} and {max} teaspoons")]
    OutOfRange {
        field: &'static str,
        min: u8,
        max: u8,
    },

    /// `finalize` was called before every required field was chosen.
    ///
    /// All missing fields are reported at once, in declaration order
    /// (base before size).
    #[error("{} must be set", .fields.join(" and "))]
    MissingRequiredField { fields: Vec<&'static str> },
}

impl OrderError {
    /// Returns true if `field` is among the fields this error complains about.
    pub fn concerns(&self, field: &str) -> bool {
        match self {
            OrderError::InvalidSelection { field: f, .. } | OrderError::OutOfRange { field: f, .. } => {
                *f == field
            }
            OrderError::MissingRequiredField { fields } => fields.contains(&field),
        }
    }
}

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================
