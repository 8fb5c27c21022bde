//! Products
//!
//! Catalog data as the cart consumes it: validated snapshots of the records
//! served by the storefront API. The catalog owns the product lifecycle; this
//! side only ever reads.

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Size label carried by line items of products without size variants.
pub const ONE_SIZE: &str = "Único";

/// Product Id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a product id from its raw catalog value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw catalog value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

/// Category Id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i64);

impl CategoryId {
    /// Creates a category id from its raw catalog value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw catalog value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

/// Product snapshot
///
/// Line items hold an owned copy taken at add-time, so a cart never observes
/// catalog updates (price included) made after the item was added.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Catalog id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Unit price in pesos
    pub price: Money<'static, Currency>,

    /// Image reference: an upload URL or an inline data URI
    pub image: Option<String>,

    /// Size labels in display order; empty for one-size products
    pub sizes: SmallVec<[String; 5]>,

    /// Colour tokens (hex strings) in display order
    pub colors: SmallVec<[String; 5]>,

    /// Units in stock
    pub stock: u32,

    /// Owning category
    pub category_id: CategoryId,

    /// Whether the product is visible in the storefront
    pub active: bool,

    /// Category name joined in by the listing endpoint
    pub category_name: Option<String>,
}

impl Product {
    /// Whether a colour must be chosen before this product can be added to
    /// the cart.
    #[must_use]
    pub fn requires_color(&self) -> bool {
        !self.colors.is_empty()
    }

    /// The size pre-selected for this product: its first size label, or
    /// [`ONE_SIZE`] when it has no size variants.
    #[must_use]
    pub fn default_size(&self) -> &str {
        self.sizes.first().map_or(ONE_SIZE, String::as_str)
    }
}

/// Category
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Catalog id
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Image reference
    pub image: Option<String>,

    /// Whether the category is visible in the storefront
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use crate::money::pesos;

    use super::*;

    fn product(id: i64, name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: None,
            price: pesos(price),
            image: None,
            sizes: smallvec!["S".to_string(), "M".to_string(), "L".to_string()],
            colors: SmallVec::new(),
            stock: 10,
            category_id: CategoryId::new(1),
            active: true,
            category_name: None,
        }
    }

    #[test]
    fn requires_color_only_with_colour_variants() {
        let plain = product(1, "Remera", 1_000);
        let mut coloured = product(2, "Campera", 9_000);
        coloured.colors = smallvec!["#000000".to_string(), "#ff0000".to_string()];

        assert!(!plain.requires_color());
        assert!(coloured.requires_color());
    }

    #[test]
    fn default_size_prefers_first_label() {
        let sized = product(1, "Remera", 1_000);

        assert_eq!(sized.default_size(), "S");
    }

    #[test]
    fn default_size_falls_back_to_one_size() {
        let mut unsized_product = product(1, "Gorra", 4_000);
        unsized_product.sizes = SmallVec::new();

        assert_eq!(unsized_product.default_size(), ONE_SIZE);
    }
}
