//! Line items

use rusty_money::{Money, iso::Currency};

use crate::products::{Product, ProductId};

/// One row in the cart: a product variant and its quantity.
///
/// Line items are keyed by `(product, size)`. The colour is carried for
/// display and for the order message, but it does not distinguish lines:
/// adding the same product and size again merges into the existing row.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    product: Product,
    size: String,
    color: Option<String>,
    quantity: u32,
}

impl LineItem {
    pub(crate) fn new(product: Product, size: String, color: Option<String>, quantity: u32) -> Self {
        Self {
            product,
            size,
            color,
            quantity,
        }
    }

    /// Returns the product snapshot captured when the item was added.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the size label for this row.
    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Returns the chosen colour, if the product has colour variants.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the quantity of this row.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether this row is the one keyed by `(product, size)`.
    #[must_use]
    pub fn matches(&self, product: ProductId, size: &str) -> bool {
        self.product.id == product && self.size == size
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money<'static, Currency> {
        let minor = self.product.price.to_minor_units() * i64::from(self.quantity);

        Money::from_minor(minor, self.product.price.currency())
    }

    pub(crate) fn increment(&mut self, quantity: u32) {
        self.quantity += quantity;
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
