//! # Domain Types
//!
//! Core domain types shared by the manual-entry and order-text pipelines.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Product      │   │    TaxRate      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  name           │   │  bps (u32)      │                             │
//! │  │  quantity (≥1)  │   │  1000 = 10%     │                             │
//! │  │  price (≥0)     │   │   500 =  5%     │                             │
//! │  │  is_imported    │   └─────────────────┘                             │
//! │  │  is_exempt      │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::ops::Add;

use crate::money::Money;
use crate::validation::{validate_price, validate_product_name, validate_quantity, ValidationResult};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (basic levy), 500 bps = 5% (import duty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Rates stack additively: 10% levy + 5% duty = 15%.
impl Add for TaxRate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TaxRate(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Product
// =============================================================================

/// One purchased line: what was bought, how many, and at what unit price.
///
/// Fields are private so a `Product` can only exist in a valid state:
/// non-empty name, quantity in `1..=MAX_QUANTITY`, price in `0..=MAX_PRICE`.
/// Once built it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    quantity: i64,
    price: Money,
    is_imported: bool,
    is_exempt: bool,
}

impl Product {
    /// Builds a validated product. The name is stored trimmed.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::{Money, Product};
    ///
    /// let cd = Product::new("music CD", 1, Money::from_cents(1499), false, false).unwrap();
    /// assert_eq!(cd.name(), "music CD");
    ///
    /// assert!(Product::new("book", 0, Money::from_cents(1249), false, true).is_err());
    /// assert!(Product::new("book", 1, Money::from_cents(-1), false, true).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        price: Money,
        is_imported: bool,
        is_exempt: bool,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_quantity(quantity)?;
        validate_price(price)?;

        Ok(Product {
            name: name.trim().to_string(),
            quantity,
            price,
            is_imported,
            is_exempt,
        })
    }

    /// Display name shown on the receipt.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of units purchased (always ≥ 1).
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price, tax exclusive (always ≥ 0).
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Whether import duty applies.
    #[inline]
    pub fn is_imported(&self) -> bool {
        self.is_imported
    }

    /// Whether the product is excused from the basic levy.
    #[inline]
    pub fn is_exempt(&self) -> bool {
        self.is_exempt
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::{MAX_PRICE, MAX_QUANTITY};

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!(!rate.is_zero());
        assert!(TaxRate::default().is_zero());
    }

    #[test]
    fn test_tax_rates_stack() {
        let combined = TaxRate::from_bps(1000) + TaxRate::from_bps(500);
        assert_eq!(combined.bps(), 1500);
    }

    #[test]
    fn test_product_accessors() {
        let product = Product::new(
            "  imported bottle of perfume ",
            2,
            Money::from_cents(2799),
            true,
            false,
        )
        .unwrap();

        assert_eq!(product.name(), "imported bottle of perfume");
        assert_eq!(product.quantity(), 2);
        assert_eq!(product.price(), Money::from_cents(2799));
        assert!(product.is_imported());
        assert!(!product.is_exempt());
    }

    #[test]
    fn test_product_free_item_allowed() {
        assert!(Product::new("sample", 1, Money::zero(), false, false).is_ok());
    }

    #[test]
    fn test_product_rejects_invalid_input() {
        assert!(matches!(
            Product::new("", 1, Money::from_cents(100), false, false),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Product::new("book", 0, Money::from_cents(100), false, true),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            Product::new("book", -3, Money::from_cents(100), false, true),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            Product::new("book", 1, Money::from_cents(-100), false, true),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
    }

    #[test]
    fn test_product_rejects_amounts_past_the_ceilings() {
        assert!(matches!(
            Product::new("book", 9_999_999_999, Money::from_cents(1249), false, true),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            Product::new("perfume", 1, Money::from_cents(i64::MAX - 10), false, false),
            Err(ValidationError::TooLarge { .. })
        ));
        assert!(Product::new("perfume", MAX_QUANTITY, MAX_PRICE, true, false).is_ok());
    }
}
