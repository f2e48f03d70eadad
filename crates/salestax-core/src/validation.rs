//! # Validation Module
//!
//! Input validation for product construction.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: receipt-cli prompts                                          │
//! │  ├── Re-prompt until the value parses and is in range                  │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Product::new                                                 │
//! │  └── THIS MODULE: every Product, whether typed in or parsed from       │
//! │      order text, passes these checks                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salestax_core::validation::{validate_product_name, validate_quantity};
//!
//! validate_product_name("music CD").unwrap();
//! validate_quantity(1).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_NAME_LENGTH, MAX_PRICE, MAX_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_NAME_LENGTH` characters
///
/// ## Example
/// ```rust
/// use salestax_core::validation::validate_product_name;
///
/// assert!(validate_product_name("box of imported chocolates").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - At most `MAX_QUANTITY`
///
/// ## User Workflow
/// ```text
/// "0 book at 12.49"
///       │
///       ▼
/// validate_quantity(0) ← THIS FUNCTION
///       │
///       ├── qty <= 0? → Error: "quantity must be positive"
///       ├── qty > MAX_QUANTITY? → Error: "quantity must be between 1 and 1000000"
///       │
///       └── OK → Product is built
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - At most `MAX_PRICE`
///
/// ## Example
/// ```rust
/// use salestax_core::money::Money;
/// use salestax_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1249)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_PRICE.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("book").is_ok());
        assert!(validate_product_name("  packet of headache pills  ").is_ok());

        assert!(matches!(
            validate_product_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_product_name("   ").is_err());
        assert!(matches!(
            validate_product_name(&"A".repeat(MAX_NAME_LENGTH + 1)),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(validate_product_name(&"A".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());

        assert!(validate_quantity(MAX_QUANTITY).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_quantity_ceiling() {
        let err = validate_quantity(MAX_QUANTITY + 1).unwrap_err();
        assert_eq!(err.to_string(), "quantity must be between 1 and 1000000");
        assert!(validate_quantity(9_999_999_999).is_err());
        assert!(validate_quantity(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(2799)).is_ok());
        assert!(validate_price("0.125".parse().unwrap()).is_ok());
        assert!(validate_price(MAX_PRICE).is_ok());

        let err = validate_price(Money::from_cents(-1)).unwrap_err();
        assert_eq!(err, ValidationError::MustNotBeNegative { field: "price".to_string() });
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validate_price_ceiling() {
        let err = validate_price(MAX_PRICE + Money::from_cents(1)).unwrap_err();
        assert_eq!(err.to_string(), "price must be at most 1000000000.00");
        assert!(validate_price(Money::from_cents(i64::MAX - 10)).is_err());
    }
}
