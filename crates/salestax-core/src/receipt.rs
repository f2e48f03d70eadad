//! # Receipts
//!
//! `ReceiptItem` pairs a product with its per-unit tax; `Receipt` is an
//! immutable snapshot of a cart with its totals.
//!
//! ## Output Format
//! ```text
//! 1 imported box of chocolates: 10.50
//! 1 imported bottle of perfume: 54.65
//! Sales Taxes: 7.65
//! Total: 65.15
//! ```
//! Every amount is printed with exactly two decimals. Amounts are kept
//! exact underneath; only printing rounds.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::money::Money;
use crate::tax::calculate_tax;
use crate::types::Product;

// =============================================================================
// Receipt Item
// =============================================================================

/// A product together with the tax computed for one unit of it.
///
/// The tax is computed once, when the item is created, and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptItem {
    product: Product,
    tax: Money,
    total_price: Money,
}

impl ReceiptItem {
    /// Computes the tax for `product` and wraps both.
    pub fn from_product(product: Product) -> Self {
        let tax = calculate_tax(&product);
        let total_price = (product.price() + tax).multiply_quantity(product.quantity());

        ReceiptItem {
            product,
            tax,
            total_price,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Per-unit tax.
    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Tax for the whole line: quantity × tax.
    pub fn total_tax(&self) -> Money {
        self.tax.multiply_quantity(self.product.quantity())
    }

    /// quantity × (price + tax).
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// The receipt row for this item: `"<quantity> <name>: <total>"`.
    pub fn line(&self) -> String {
        format!(
            "{} {}: {}",
            self.product.quantity(),
            self.product.name(),
            self.total_price
        )
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Snapshot of a cart at the moment it was generated.
///
/// ## Invariants
/// - `items` keep insertion order
/// - `total_taxes` = Σ quantity × tax
/// - `total_price` = Σ quantity × (price + tax)
/// - Totals are computed once, in [`Receipt::new`]
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    items: Vec<ReceiptItem>,
    total_taxes: Money,
    total_price: Money,
    generated_at: DateTime<Utc>,
}

impl Receipt {
    /// Builds a receipt from owned items and computes its totals.
    pub fn new(items: Vec<ReceiptItem>) -> Self {
        let total_taxes = items.iter().map(ReceiptItem::total_tax).sum();
        let total_price = items.iter().map(ReceiptItem::total_price).sum();

        Receipt {
            items,
            total_taxes,
            total_price,
            generated_at: Utc::now(),
        }
    }

    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    pub fn total_taxes(&self) -> Money {
        self.total_taxes
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// When this snapshot was taken.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Display rows: one per item, then the tax and grand totals.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::{Money, Product, ShoppingCart};
    ///
    /// let mut cart = ShoppingCart::new();
    /// cart.add_product(Product::new("music CD", 1, Money::from_cents(1499), false, false).unwrap());
    ///
    /// let lines = cart.generate_receipt().lines();
    /// assert_eq!(lines, vec!["1 music CD: 16.49", "Sales Taxes: 1.50", "Total: 16.49"]);
    /// ```
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.items.iter().map(ReceiptItem::line).collect();
        lines.push(format!("Sales Taxes: {}", self.total_taxes));
        lines.push(format!("Total: {}", self.total_price));
        lines
    }
}

/// Writes [`Receipt::lines`] separated by newlines (no trailing newline).
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_PRICE, MAX_QUANTITY};
    use rust_decimal::Decimal;

    fn item(name: &str, quantity: i64, price_cents: i64, imported: bool, exempt: bool) -> ReceiptItem {
        ReceiptItem::from_product(
            Product::new(name, quantity, Money::from_cents(price_cents), imported, exempt).unwrap(),
        )
    }

    #[test]
    fn test_item_totals() {
        let cd = item("music CD", 2, 1499, false, false);
        assert_eq!(cd.tax(), Money::from_cents(150));
        assert_eq!(cd.total_tax(), Money::from_cents(300));
        assert_eq!(cd.total_price(), Money::from_cents(3298));
        assert_eq!(cd.line(), "2 music CD: 32.98");
    }

    #[test]
    fn test_receipt_totals() {
        let receipt = Receipt::new(vec![
            item("imported box of chocolates", 1, 1000, true, true),
            item("imported bottle of perfume", 1, 4750, true, false),
        ]);

        assert_eq!(receipt.total_taxes().to_string(), "7.65");
        assert_eq!(receipt.total_price().to_string(), "65.15");
    }

    #[test]
    fn test_receipt_totals_multiply_quantity() {
        let receipt = Receipt::new(vec![
            item("music CD", 3, 1499, false, false),
            item("book", 2, 1249, false, true),
        ]);

        // 3 × 1.50
        assert_eq!(receipt.total_taxes(), Money::from_cents(450));
        // 3 × 16.49 + 2 × 12.49
        assert_eq!(receipt.total_price(), Money::from_cents(4947 + 2498));
    }

    #[test]
    fn test_sub_cent_price_keeps_exact_total_until_printed() {
        let widget = ReceiptItem::from_product(
            Product::new("widget", 3, "0.125".parse().unwrap(), false, false).unwrap(),
        );

        // 3 × (0.125 + 0.05) = 0.525
        assert_eq!(widget.total_price().amount(), Decimal::new(525, 3));
        assert_eq!(widget.line(), "3 widget: 0.53");
    }

    #[test]
    fn test_largest_items_total_exactly() {
        let receipt = Receipt::new(vec![
            ReceiptItem::from_product(
                Product::new("imported perfume", MAX_QUANTITY, MAX_PRICE, true, false).unwrap(),
            ),
            ReceiptItem::from_product(
                Product::new("imported perfume", MAX_QUANTITY, MAX_PRICE, true, false).unwrap(),
            ),
        ]);

        // per unit 1000000000.00 + 150000000.00, × 1000000, × 2 lines
        assert_eq!(receipt.total_taxes().to_string(), "300000000000000.00");
        assert_eq!(receipt.total_price().to_string(), "2300000000000000.00");
        assert_eq!(
            receipt.items()[0].line(),
            "1000000 imported perfume: 1150000000000000.00"
        );
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = Receipt::new(Vec::new());
        assert!(receipt.is_empty());
        assert!(receipt.total_taxes().is_zero());
        assert!(receipt.total_price().is_zero());
        assert_eq!(receipt.lines(), vec!["Sales Taxes: 0.00", "Total: 0.00"]);
    }

    #[test]
    fn test_display_matches_lines() {
        let receipt = Receipt::new(vec![
            item("book", 1, 1249, false, true),
            item("music CD", 1, 1499, false, false),
            item("chocolate bar", 1, 85, false, true),
        ]);

        assert_eq!(
            receipt.to_string(),
            "1 book: 12.49\n\
             1 music CD: 16.49\n\
             1 chocolate bar: 0.85\n\
             Sales Taxes: 1.50\n\
             Total: 29.83"
        );
    }

    #[test]
    fn test_receipt_serializes_totals_as_decimals() {
        let receipt = Receipt::new(vec![item("music CD", 1, 1499, false, false)]);
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["total_taxes"], "1.50");
        assert_eq!(json["total_price"], "16.49");
        assert_eq!(json["items"][0]["product"]["name"], "music CD");
        assert_eq!(json["items"][0]["tax"], "1.50");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_item() -> impl Strategy<Value = ReceiptItem> {
            (
                1i64..=MAX_QUANTITY,
                0i64..=100_000_000_000,
                any::<bool>(),
                any::<bool>(),
            )
                .prop_map(|(qty, price, imported, exempt)| item("item", qty, price, imported, exempt))
        }

        proptest! {
            /// Property: receipt totals equal the per-item sums, all the way
            /// up to the largest accepted quantity and price.
            #[test]
            fn totals_are_sums(items in proptest::collection::vec(arb_item(), 0..20)) {
                let quantity = |i: &ReceiptItem| Decimal::from(i.product().quantity());
                let expected_tax: Decimal = items
                    .iter()
                    .map(|i| quantity(i) * i.tax().amount())
                    .sum();
                let expected_total: Decimal = items
                    .iter()
                    .map(|i| quantity(i) * (i.product().price().amount() + i.tax().amount()))
                    .sum();

                let receipt = Receipt::new(items);
                prop_assert_eq!(receipt.total_taxes().amount(), expected_tax);
                prop_assert_eq!(receipt.total_price().amount(), expected_total);
            }
        }
    }
}
