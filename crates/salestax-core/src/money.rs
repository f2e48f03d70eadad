//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    14.99 × 0.10 = 1.4990000000000001  ❌                                │
//! │    ceil(1.4990000000000001 × 20) / 20 = 1.50  (happens to be right)    │
//! │    ceil(0.5000000000000001 × 20) / 20 = 0.55  ❌ WRONG!                 │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 fixed point (rust_decimal)                       │
//! │    14.99 × 0.1000 = 1.499000 (exact)                                   │
//! │    ceil(1.499000 / 0.05) × 0.05 = 1.50                                 │
//! │    0.125 stays 0.125: no cents truncation on input                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salestax_core::money::Money;
//!
//! // Create from cents
//! let price = Money::from_cents(1249); // 12.49
//!
//! // Or parse order text exactly (no float round-trip)
//! let parsed: Money = "12.49".parse().unwrap();
//! assert_eq!(price, parsed);
//!
//! // Display always uses two decimals
//! assert_eq!(Money::from_cents(150).to_string(), "1.50");
//! assert_eq!("0.125".parse::<Money>().unwrap().to_string(), "0.13");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

use crate::error::MoneyParseError;
use crate::types::TaxRate;

/// Basis points carry four decimal places (10000 bps = 1.0000).
const BPS_SCALE: u32 = 4;

/// Receipt amounts are printed with this many decimals.
const DISPLAY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents an exact monetary amount in base-10 fixed point.
///
/// ## Design Decisions
/// - **Decimal, not cents**: prices like `0.125` keep every digit until the
///   receipt is printed; only `Display` rounds
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Serde**: serializes as a decimal string (`"29.83"`)
/// - **Saturating arithmetic**: `Add` and `Mul<i64>` clamp at the `Decimal`
///   range instead of panicking. `Product` validation keeps every receipt
///   far inside that range
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Order text "at 27.99" ──► Product.price ──┬──► calculate_tax ──► tax  │
/// │                                            │                           │
/// │                                            └──► ReceiptItem.total      │
/// │                                                                         │
/// │  Receipt.total_taxes / Receipt.total_price ──► "Total: 74.68"          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        let magnitude = cents.unsigned_abs();
        Money(Decimal::from_parts(
            magnitude as u32,
            (magnitude >> 32) as u32,
            0,
            cents < 0,
            2,
        ))
    }

    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact amount, with every stored decimal place.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1649);
    /// assert_eq!(unit_price.multiply_quantity(2), Money::from_cents(3298));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(Decimal::from(qty)))
    }

    /// Applies a rate and rounds the result UP to the next multiple of
    /// `increment`.
    ///
    /// This is `ceiling(amount × rate / increment) × increment`, evaluated in
    /// decimal so values sitting exactly on a boundary (0.50, 1.00) are left
    /// untouched instead of being nudged to the next step by float noise.
    ///
    /// ## Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  CEILING TO 0.05 (increment = 5 cents)                              │
    /// │                                                                     │
    /// │    1.499   → 1.50     (next step up)                               │
    /// │    7.125   → 7.15                                                   │
    /// │    0.5625  → 0.60                                                   │
    /// │    0.0125  → 0.05     (sub-cent prices are taxed too)              │
    /// │    0.50    → 0.50     (already on a step: unchanged)               │
    /// │    0.00    → 0.00                                                   │
    /// │                                                                     │
    /// │  NOT round-half-up: 1.01 → 1.05, never 1.00                        │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// A non-positive `increment` is treated as one cent.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    /// use salestax_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(1499);          // 14.99
    /// let rate = TaxRate::from_bps(1000);           // 10%
    /// let tax = price.apply_rate_rounded_up(rate, Money::from_cents(5));
    /// assert_eq!(tax, Money::from_cents(150));      // 1.499 → 1.50
    /// ```
    pub fn apply_rate_rounded_up(&self, rate: TaxRate, increment: Money) -> Money {
        let increment = if increment.0 > Decimal::ZERO {
            increment.0
        } else {
            Decimal::new(1, 2)
        };

        let rate = Decimal::new(i64::from(rate.bps()), BPS_SCALE);
        let exact = self.0.saturating_mul(rate);
        let steps = exact.checked_div(increment).unwrap_or(Decimal::MAX).ceil();

        Money(steps.saturating_mul(increment))
    }

    /// The amount as printed on a receipt: two decimals, midpoints away
    /// from zero.
    pub fn rounded_for_display(&self) -> Money {
        let rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            Money::zero()
        } else {
            Money(rounded)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount with exactly two decimals and no currency symbol.
///
/// This is the receipt format: `1.50`, never `1.5`. Amounts with more
/// decimals are rounded half away from zero (`0.125` → `0.13`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded_for_display().0)
    }
}

/// Parses a plain decimal amount such as `12.49`, `0.125` or `7`.
///
/// ## Rules
/// - Optional leading `-` or `+`
/// - ASCII digits, optional `.` followed by fraction digits
/// - Any number of fraction digits, as long as the value is stored
///   exactly (never silently rounded)
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (major, minor) = body.split_once('.').unwrap_or((body, ""));

        if major.is_empty() && minor.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major) || !all_digits(minor) {
            return Err(MoneyParseError::InvalidDigit {
                input: s.to_string(),
            });
        }

        let major = if major.is_empty() { "0" } else { major };
        let sign = if negative { "-" } else { "" };
        let normalized = if minor.is_empty() {
            format!("{sign}{major}")
        } else {
            format!("{sign}{major}.{minor}")
        };

        let amount = Decimal::from_str_exact(&normalized).map_err(|_| {
            // the digits are valid, so either the whole part is out of
            // range or the fraction cannot be kept without rounding
            if Decimal::from_str_exact(major).is_err() {
                MoneyParseError::Overflow {
                    input: s.to_string(),
                }
            } else {
                MoneyParseError::TooPrecise {
                    input: s.to_string(),
                }
            }
        })?;

        Ok(Money(amount))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
