//! # salestax-core: Pure Business Logic for Sales Tax Receipts
//!
//! This crate computes sales tax and itemized receipts for a cart of goods,
//! and builds carts from free-form order text. It has zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sales Tax Receipts                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-cli                                  │   │
//! │  │    manual entry prompts   │   order text input   │   printing   │   │
//! │  └──────────────┬────────────┴───────────┬──────────┴──────────────┘   │
//! │                 │                        │                              │
//! │  ┌──────────────▼────────────────────────▼─────────────────────────┐   │
//! │  │               ★ salestax-core (THIS CRATE) ★                     │   │
//! │  │                                                                  │   │
//! │  │   parser ──► classify ──► types::Product                         │   │
//! │  │                               │                                  │   │
//! │  │                               ▼                                  │   │
//! │  │   cart::ShoppingCart ──► tax::calculate_tax ──► receipt::Receipt │   │
//! │  │                                                                  │   │
//! │  │   NO I/O • NO FLOATS • PURE FUNCTIONS                            │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`types`] - Product and TaxRate
//! - [`tax`] - Per-unit tax with round-up to 0.05
//! - [`receipt`] - ReceiptItem and Receipt
//! - [`cart`] - ShoppingCart
//! - [`classify`] - Name → imported/exempt heuristics
//! - [`parser`] - Order text scanning
//! - [`error`] - Domain error types
//! - [`validation`] - Product invariants
//!
//! ## Example Usage
//!
//! ```rust
//! use salestax_core::parse_order_text;
//!
//! let cart = parse_order_text(
//!     "1 imported box of chocolates at 10.00\n1 imported bottle of perfume at 47.50",
//! )
//! .into_cart_strict()
//! .unwrap();
//!
//! let receipt = cart.generate_receipt();
//! assert_eq!(receipt.total_taxes().to_string(), "7.65");
//! assert_eq!(receipt.total_price().to_string(), "65.15");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod classify;
pub mod error;
pub mod money;
pub mod parser;
pub mod receipt;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::ShoppingCart;
pub use classify::{Classification, KeywordClassifier, ProductClassifier};
pub use error::{CoreError, CoreResult, MoneyParseError, ParseError, ValidationError};
pub use money::Money;
pub use parser::{parse_order_text, OrderTextParser, ParseReport, ParsedOccurrence};
pub use receipt::{Receipt, ReceiptItem};
pub use tax::calculate_tax;
pub use types::{Product, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Basic levy: 10%, waived for exempt products.
pub const BASIC_LEVY_BPS: u32 = 1000;

/// Import duty: 5%, applies to every imported product.
pub const IMPORT_DUTY_BPS: u32 = 500;

/// Taxes are rounded up to a multiple of this amount.
pub const TAX_ROUNDING_INCREMENT: Money = Money::from_cents(5);

/// Largest accepted quantity on one product line.
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Largest accepted unit price (one billion).
///
/// With [`MAX_QUANTITY`] this caps a line total near 1.15e15, so even
/// billions of receipt lines sum well inside the `Decimal` range.
pub const MAX_PRICE: Money = Money::from_cents(100_000_000_000);

/// Longest accepted product name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// Name fragment that marks a product as imported.
pub const IMPORTED_KEYWORD: &str = "imported";

/// Name fragments that stand in for the exempt categories (food, books,
/// medical products).
pub const EXEMPT_KEYWORDS: [&str; 3] = ["chocolate", "book", "pills"];
