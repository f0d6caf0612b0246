//! # Validation Module
//!
//! Range checks that don't fit a catalog lookup.
//!
//! Catalog names (base, size, milk) are validated by their `FromStr`
//! impls in [`catalog`](crate::catalog). Numeric inputs land here.
//!
//! ## Usage
//! ```rust
//! use brew_core::validation::validate_sugar;
//!
//! assert_eq!(validate_sugar(2).unwrap(), 2);
//! assert!(validate_sugar(6).is_err());
//! ```

use crate::catalog::SUGAR_RANGE;
use crate::error::OrderError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, OrderError>;

/// Validates a sugar amount in teaspoons.
///
/// ## Rules
/// - Must be within [`SUGAR_RANGE`] (0 to 5, inclusive)
///
/// ## Returns
/// The amount narrowed to `u8`.
pub fn validate_sugar(teaspoons: i32) -> ValidationResult<u8> {
    u8::try_from(teaspoons)
        .ok()
        .filter(|t| SUGAR_RANGE.contains(t))
        .ok_or(OrderError::OutOfRange {
            field: "sugar",
            min: *SUGAR_RANGE.start(),
            max: *SUGAR_RANGE.end(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sugar_bounds() {
        for t in 0..=5 {
            assert_eq!(validate_sugar(t).unwrap(), t as u8);
        }

        assert!(validate_sugar(-1).is_err());
        assert!(validate_sugar(6).is_err());
        assert!(validate_sugar(10).is_err());
        assert!(validate_sugar(256).is_err());
        assert!(validate_sugar(i32::MIN).is_err());
    }

    #[test]
    fn test_validate_sugar_message_states_bounds() {
        let err = validate_sugar(10).unwrap_err();
        assert!(err.to_string().starts_with("sugar must be between 0 and 5"));
    }
}
