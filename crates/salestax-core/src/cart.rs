//! # Shopping Cart
//!
//! Accumulates receipt items, computing each product's tax as it arrives.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller                   Method                  Cart Change           │
//! │  ──────                   ──────                  ───────────           │
//! │                                                                         │
//! │  Manual entry ──────────► add_product() ────────► items.push(item)     │
//! │                                                                         │
//! │  Parsed order text ─────► add_products() ───────► items.push(..) × n   │
//! │                                                                         │
//! │  Print receipt ─────────► generate_receipt() ───► (read only, clone)   │
//! │                                                                         │
//! │  NOTE: items are never removed or modified once added.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::receipt::{Receipt, ReceiptItem};
use crate::types::Product;

/// An append-only shopping cart.
///
/// ## Invariants
/// - Items keep the order they were added in
/// - Each item's tax is computed exactly once, on insertion
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    items: Vec<ReceiptItem>,
    created_at: DateTime<Utc>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        ShoppingCart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Taxes `product` and appends it.
    pub fn add_product(&mut self, product: Product) {
        self.items.push(ReceiptItem::from_product(product));
    }

    /// Taxes and appends every product, in iteration order.
    pub fn add_products<I>(&mut self, products: I)
    where
        I: IntoIterator<Item = Product>,
    {
        self.items
            .extend(products.into_iter().map(ReceiptItem::from_product));
    }

    /// Snapshots the current items into a receipt.
    ///
    /// The receipt owns copies of the items, so adding more products to this
    /// cart afterwards leaves the receipt unchanged.
    pub fn generate_receipt(&self) -> Receipt {
        let receipt = Receipt::new(self.items.clone());
        debug!(
            items = receipt.items().len(),
            total_taxes = %receipt.total_taxes(),
            total = %receipt.total_price(),
            "Receipt generated"
        );
        receipt
    }

    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    /// Returns the number of lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.product().quantity()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Product> for ShoppingCart {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut cart = ShoppingCart::new();
        cart.add_products(iter);
        cart
    }
}
