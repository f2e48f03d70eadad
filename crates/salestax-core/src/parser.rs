//! # Order Text Parser
//!
//! Turns free-form order text into products.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "1 imported bottle of perfume at 27.99, 1 book at 12.49"               │
//! │        │                                                                │
//! │        ▼  scan: (\d+) ([\w\s]+) at (\d+\.\d+), case-insensitive, global │
//! │                                                                         │
//! │  occurrence 1: qty "1", name "imported bottle of perfume", "27.99"     │
//! │  occurrence 2: qty "1", name "book", price "12.49"                      │
//! │        │                                                                │
//! │        ▼  parse tokens + classify name                                  │
//! │                                                                         │
//! │  ParseReport [ Ok(Product{imported, taxable}), Ok(Product{exempt}) ]   │
//! │        │                                                                │
//! │        ├──► into_cart()         failures logged and dropped            │
//! │        └──► into_cart_strict()  any failure → CoreError::MalformedOrder │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scanning never fails as a whole. Each matched occurrence carries its own
//! `Result`, so one bad line cannot hide the others, and text with no
//! matches is simply an empty report.

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::cart::ShoppingCart;
use crate::classify::{KeywordClassifier, ProductClassifier};
use crate::error::{CoreError, CoreResult, ParseError};
use crate::money::Money;
use crate::types::Product;

/// `<quantity> <name words> at <price>`; the name may not contain `.`.
pub const ORDER_LINE_PATTERN: &str = r"(?i)(\d+) ([\w\s]+) at (\d+\.\d+)";

static ORDER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ORDER_LINE_PATTERN).expect("order line pattern is valid"));

// =============================================================================
// Parse Results
// =============================================================================

/// One pattern match in the input and what became of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOccurrence {
    /// The matched text, verbatim.
    pub text: String,
    /// Byte range of the match within the input.
    pub span: Range<usize>,
    pub result: Result<Product, ParseError>,
}

impl ParsedOccurrence {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn product(&self) -> Option<&Product> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.result.as_ref().err()
    }
}

/// Every occurrence found in one input, in match order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    occurrences: Vec<ParsedOccurrence>,
}

impl ParseReport {
    pub fn occurrences(&self) -> &[ParsedOccurrence] {
        &self.occurrences
    }

    /// Number of matched occurrences, successful or not.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// True when the input held no order lines at all.
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.occurrences.iter().filter_map(ParsedOccurrence::product)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ParsedOccurrence> {
        self.occurrences.iter().filter(|o| !o.is_ok())
    }

    pub fn has_failures(&self) -> bool {
        self.occurrences.iter().any(|o| !o.is_ok())
    }

    /// Keeps the successful products; failed occurrences are logged at
    /// `warn` and dropped.
    pub fn into_products(self) -> Vec<Product> {
        self.occurrences
            .into_iter()
            .filter_map(|occurrence| match occurrence.result {
                Ok(product) => Some(product),
                Err(error) => {
                    warn!(text = %occurrence.text, %error, "Dropping malformed order line");
                    None
                }
            })
            .collect()
    }

    /// Lenient cart: see [`ParseReport::into_products`].
    pub fn into_cart(self) -> ShoppingCart {
        self.into_products().into_iter().collect()
    }

    /// Strict cart: fails if any occurrence could not be parsed.
    ///
    /// An input with no occurrences is `Ok` with an empty cart.
    pub fn into_cart_strict(self) -> CoreResult<ShoppingCart> {
        let total = self.occurrences.len();
        let failed = self.failures().count();

        if let Some(first) = self.occurrences.iter().find(|o| !o.is_ok()) {
            if let Err(error) = &first.result {
                return Err(CoreError::MalformedOrder {
                    failed,
                    total,
                    first_text: first.text.clone(),
                    first_error: error.clone(),
                });
            }
        }

        Ok(self.into_cart())
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Scans text for order lines and classifies each product by name.
///
/// ## Example
/// ```rust
/// use salestax_core::OrderTextParser;
///
/// let report = OrderTextParser::new().parse("1 imported bottle of perfume at 27.99");
/// let product = report.products().next().unwrap();
///
/// assert_eq!(product.name(), "imported bottle of perfume");
/// assert!(product.is_imported());
/// assert!(!product.is_exempt());
/// assert_eq!(product.price().to_string(), "27.99");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderTextParser<C = KeywordClassifier> {
    classifier: C,
}

impl OrderTextParser<KeywordClassifier> {
    /// Parser using the default keyword heuristic.
    pub fn new() -> Self {
        OrderTextParser {
            classifier: KeywordClassifier::default(),
        }
    }
}

impl<C: ProductClassifier> OrderTextParser<C> {
    /// Parser using a custom classifier.
    pub fn with_classifier(classifier: C) -> Self {
        OrderTextParser { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Finds every non-overlapping order line in `text`.
    pub fn parse(&self, text: &str) -> ParseReport {
        let occurrences: Vec<ParsedOccurrence> = ORDER_LINE
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let result = self.parse_occurrence(&caps);

                match &result {
                    Ok(product) => debug!(
                        name = product.name(),
                        quantity = product.quantity(),
                        price = %product.price(),
                        imported = product.is_imported(),
                        exempt = product.is_exempt(),
                        "Parsed order line"
                    ),
                    Err(error) => debug!(text = whole.as_str(), %error, "Unparseable order line"),
                }

                Some(ParsedOccurrence {
                    text: whole.as_str().to_string(),
                    span: whole.range(),
                    result,
                })
            })
            .collect();

        ParseReport { occurrences }
    }

    fn parse_occurrence(&self, caps: &Captures<'_>) -> Result<Product, ParseError> {
        let quantity_raw = caps.get(1).map_or("", |m| m.as_str());
        let name_raw = caps.get(2).map_or("", |m| m.as_str());
        let price_raw = caps.get(3).map_or("", |m| m.as_str());

        let quantity: i64 = quantity_raw
            .parse()
            .map_err(|e: std::num::ParseIntError| ParseError::InvalidQuantity {
                raw: quantity_raw.to_string(),
                reason: e.to_string(),
            })?;

        let price: Money = price_raw.parse().map_err(|source| ParseError::InvalidPrice {
            raw: price_raw.to_string(),
            source,
        })?;

        let name = name_raw.trim();
        let classification = self.classifier.classify(name);

        Ok(Product::new(
            name,
            quantity,
            price,
            classification.is_imported,
            classification.is_exempt,
        )?)
    }
}

/// Parses with the default keyword classifier.
pub fn parse_order_text(text: &str) -> ParseReport {
    OrderTextParser::new().parse(text)
}

/// Renders a product back into the order-line form the parser reads.
///
/// The price keeps every stored digit (at least two decimals), so the
/// line parses back to the same product.
///
/// ```rust
/// use salestax_core::{parser::to_order_line, Money, Product};
///
/// let book = Product::new("book", 2, Money::from_cents(1249), false, true).unwrap();
/// assert_eq!(to_order_line(&book), "2 book at 12.49");
///
/// let widget = Product::new("widget", 1, "0.125".parse().unwrap(), false, false).unwrap();
/// assert_eq!(to_order_line(&widget), "1 widget at 0.125");
/// ```
pub fn to_order_line(product: &Product) -> String {
    let price = product.price().amount();
    let places = price.scale().max(2) as usize;
    format!(
        "{} {} at {:.places$}",
        product.quantity(),
        product.name(),
        price
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
