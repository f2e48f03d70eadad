//! # Error Types
//!
//! Domain-specific error types for salestax-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salestax-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - Product construction failures                  │
//! │  ├── ParseError       - One order-line occurrence could not be used    │
//! │  └── MoneyParseError  - Amount text is not an exact decimal            │
//! │                                                                         │
//! │  receipt-cli errors (separate crate)                                   │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: MoneyParseError → ParseError → CoreError::MalformedOrder        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, offending text)
//! 3. Errors are enum variants, never String
//! 4. Tax computation and aggregation have no error type: they cannot fail

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order text contained occurrences that could not be turned into
    /// products, and the caller asked for a strict cart.
    ///
    /// ## When This Occurs
    /// ```text
    /// "0 book at 12.49, 1 music CD at 14.99"
    ///      │
    ///      ▼
    /// ParseReport: [Err(InvalidProduct(quantity)), Ok(music CD)]
    ///      │
    ///      ▼
    /// into_cart_strict() → MalformedOrder { failed: 1, total: 2, .. }
    /// ```
    #[error("{failed} of {total} order lines could not be parsed; first: '{first_text}': {first_error}")]
    MalformedOrder {
        failed: usize,
        total: usize,
        first_text: String,
        first_error: ParseError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Parse error (wraps ParseError).
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when a `Product` would break its invariants (empty name,
/// quantity or price outside the accepted range).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Amount is above the accepted ceiling.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: String },
}

// =============================================================================
// Parse Error
// =============================================================================

/// Why a single matched order-line occurrence produced no product.
///
/// The scanner keeps going after any of these; they are reported per
/// occurrence so the caller decides whether to surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The quantity token is not a representable integer.
    #[error("invalid quantity '{raw}': {reason}")]
    InvalidQuantity { raw: String, reason: String },

    /// The price token is not an exact decimal amount.
    #[error("invalid price '{raw}': {source}")]
    InvalidPrice {
        raw: String,
        #[source]
        source: MoneyParseError,
    },

    /// Tokens parsed, but the resulting product is invalid.
    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ValidationError),
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Failures when parsing decimal text into `Money`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("'{input}' is not a decimal amount")]
    InvalidDigit { input: String },

    #[error("'{input}' has too many digits to store exactly")]
    TooPrecise { input: String },

    #[error("'{input}' is too large")]
    Overflow { input: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseError::InvalidPrice {
            raw: "1.2.3".to_string(),
            source: MoneyParseError::InvalidDigit {
                input: "1.2.3".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid price '1.2.3': '1.2.3' is not a decimal amount"
        );
    }

    #[test]
    fn test_range_error_messages() {
        let err = ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");

        let err = ValidationError::TooLarge {
            field: "price".to_string(),
            max: "1000000000.00".to_string(),
        };
        assert_eq!(err.to_string(), "price must be at most 1000000000.00");
    }

    #[test]
    fn test_malformed_order_message() {
        let err = CoreError::MalformedOrder {
            failed: 1,
            total: 2,
            first_text: "0 book at 12.49".to_string(),
            first_error: ParseError::InvalidProduct(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }),
        };
        assert_eq!(
            err.to_string(),
            "1 of 2 order lines could not be parsed; first: '0 book at 12.49': invalid product: quantity must be positive"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_validation_converts_to_parse_error() {
        let parse_err: ParseError = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into();
        assert!(matches!(parse_err, ParseError::InvalidProduct(_)));
    }
}
