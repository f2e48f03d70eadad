//! # Product Classification
//!
//! Infers tax attributes from a product name.
//!
//! The default [`KeywordClassifier`] is a heuristic: a closed keyword list
//! stands in for the food, book and medical categories. Anything that
//! implements [`ProductClassifier`] (including a plain closure) can replace
//! it without touching the order-text scanner.
//!
//! ```text
//! "box of imported chocolates"
//!        │
//!        ▼
//!  contains "imported"?                      → is_imported = true
//!  contains "chocolate" | "book" | "pills"?  → is_exempt   = true
//! ```

use serde::Serialize;

use crate::{EXEMPT_KEYWORDS, IMPORTED_KEYWORD};

/// Tax attributes inferred from a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Classification {
    pub is_imported: bool,
    /// A hit here GRANTS the exemption from the basic levy.
    pub is_exempt: bool,
}

/// Maps a product name to its tax attributes.
pub trait ProductClassifier {
    fn classify(&self, name: &str) -> Classification;
}

impl<F> ProductClassifier for F
where
    F: Fn(&str) -> Classification,
{
    fn classify(&self, name: &str) -> Classification {
        self(name)
    }
}

/// Case-insensitive substring matching against fixed keyword lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClassifier {
    imported_keyword: String,
    exempt_keywords: Vec<String>,
}

impl KeywordClassifier {
    /// Builds a classifier from custom keywords. Matching ignores case.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::classify::{KeywordClassifier, ProductClassifier};
    ///
    /// let classifier = KeywordClassifier::new("foreign", ["bread", "aspirin"]);
    /// let c = classifier.classify("Foreign Aspirin");
    /// assert!(c.is_imported && c.is_exempt);
    /// ```
    pub fn new<I, S>(imported_keyword: &str, exempt_keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        KeywordClassifier {
            imported_keyword: imported_keyword.to_lowercase(),
            exempt_keywords: exempt_keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Adds one more exempt keyword.
    pub fn with_exempt_keyword(mut self, keyword: &str) -> Self {
        let keyword = keyword.to_lowercase();
        if !keyword.is_empty() && !self.exempt_keywords.contains(&keyword) {
            self.exempt_keywords.push(keyword);
        }
        self
    }

    pub fn exempt_keywords(&self) -> &[String] {
        &self.exempt_keywords
    }

    pub fn is_imported(&self, name: &str) -> bool {
        !self.imported_keyword.is_empty() && name.to_lowercase().contains(&self.imported_keyword)
    }

    pub fn is_exempt(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.exempt_keywords.iter().any(|k| name.contains(k.as_str()))
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        KeywordClassifier::new(IMPORTED_KEYWORD, EXEMPT_KEYWORDS)
    }
}

impl ProductClassifier for KeywordClassifier {
    fn classify(&self, name: &str) -> Classification {
        Classification {
            is_imported: self.is_imported(name),
            is_exempt: self.is_exempt(name),
        }
    }
}
