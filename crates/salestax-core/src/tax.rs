//! # Tax Calculation
//!
//! Per-unit sales tax for a single product.
//!
//! ## Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          calculate_tax                                  │
//! │                                                                         │
//! │   rate = 0                                                              │
//! │   not exempt?  → rate += 10%   (basic levy)                            │
//! │   imported?    → rate +=  5%   (import duty, exemption does not apply) │
//! │                                                                         │
//! │   tax  = ceiling(price × rate × 20) / 20    (next 0.05, exact math)    │
//! │                                                                         │
//! │   book            12.49   exempt              → 0.00                   │
//! │   music CD        14.99   10%      1.499      → 1.50                   │
//! │   imported choc.  10.00   5%       0.50       → 0.50                   │
//! │   imported perf.  47.50   15%      7.125      → 7.15                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity plays no role: the result is a per-unit amount.

use crate::money::Money;
use crate::types::{Product, TaxRate};
use crate::{BASIC_LEVY_BPS, IMPORT_DUTY_BPS, TAX_ROUNDING_INCREMENT};

/// Returns the combined rate that applies to `product`.
pub fn applicable_rate(product: &Product) -> TaxRate {
    let mut rate = TaxRate::zero();

    if !product.is_exempt() {
        rate = rate + TaxRate::from_bps(BASIC_LEVY_BPS);
    }

    if product.is_imported() {
        rate = rate + TaxRate::from_bps(IMPORT_DUTY_BPS);
    }

    rate
}

/// Computes the per-unit tax for a product, rounded up to the next 0.05.
///
/// Pure and infallible for any `Product` (its constructor already
/// guarantees a price between zero and `MAX_PRICE`).
///
/// ## Example
/// ```rust
/// use salestax_core::{calculate_tax, Money, Product};
///
/// let perfume = Product::new("imported bottle of perfume", 1, Money::from_cents(4750), true, false).unwrap();
/// assert_eq!(calculate_tax(&perfume).to_string(), "7.15");
/// ```
pub fn calculate_tax(product: &Product) -> Money {
    product
        .price()
        .apply_rate_rounded_up(applicable_rate(product), TAX_ROUNDING_INCREMENT)
}

// =============================================================================
// Unit Tests
// =============================================================================
