//! Cart
//!
//! In-memory cart for one browsing session. The embedding UI constructs one
//! cart per session and passes it by reference to whatever needs it; nothing
//! here is a hidden singleton, and nothing is persisted across reloads.
//!
//! All operations are synchronous and run to completion; the cart performs no
//! I/O and cannot fail for network reasons.

use rusty_money::{
    Money,
    iso::{self, Currency},
};

use crate::{
    customers::Customer,
    items::LineItem,
    money::pesos,
    products::{Product, ProductId},
    shipping,
};

/// Cart state: line items in insertion order, the drawer-open flag, the
/// shipping inputs, and the checkout customer record.
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<LineItem>,
    open: bool,
    zip_code: String,
    shipping_cost: Money<'static, Currency>,
    customer: Customer,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            open: false,
            zip_code: String::new(),
            shipping_cost: pesos(0),
            customer: Customer::default(),
        }
    }

    /// Adds `quantity` units of a product variant and opens the drawer.
    ///
    /// When a row keyed by `(product, size)` already exists its quantity is
    /// incremented and its colour left untouched; the supplied colour only
    /// applies to a freshly appended row. A zero quantity is a no-op.
    pub fn add_item(&mut self, product: &Product, size: &str, quantity: u32, color: Option<&str>) {
        if quantity == 0 {
            return;
        }

        match self.items.iter_mut().find(|i| i.matches(product.id, size)) {
            Some(existing) => existing.increment(quantity),
            None => self.items.push(LineItem::new(
                product.clone(),
                size.to_string(),
                color.map(str::to_string),
                quantity,
            )),
        }

        self.open = true;
    }

    /// Removes the row keyed by `(product, size)`; no-op if absent.
    pub fn remove_item(&mut self, product: ProductId, size: &str) {
        self.items.retain(|i| !i.matches(product, size));
    }

    /// Replaces the quantity of the row keyed by `(product, size)`.
    ///
    /// A zero quantity removes the row. No-op if the row is absent.
    pub fn update_quantity(&mut self, product: ProductId, size: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product, size);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.matches(product, size)) {
            item.set_quantity(quantity);
        }
    }

    /// Empties the line items. Customer and shipping state are kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Stores the postal code and the shipping cost quoted for it.
    ///
    /// An empty postal code resets the cost to zero. Quoting the same code
    /// twice just overwrites the stored values.
    pub fn calculate_shipping(&mut self, zip: &str) {
        self.zip_code = zip.to_string();
        self.shipping_cost = shipping::quote(zip);
    }

    /// Replaces the checkout customer record.
    pub fn set_customer(&mut self, customer: Customer) {
        self.customer = customer;
    }

    /// Opens or closes the cart drawer.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The stored postal code; empty until shipping has been calculated.
    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// The stored shipping cost; zero until shipping has been calculated.
    #[must_use]
    pub fn shipping_cost(&self) -> Money<'static, Currency> {
        self.shipping_cost
    }

    /// The checkout customer record.
    #[must_use]
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Sum of quantities across all line items, computed fresh on each read.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(LineItem::quantity).sum()
    }

    /// Sum of line totals, computed fresh on each read.
    #[must_use]
    pub fn total_price(&self) -> Money<'static, Currency> {
        let minor: i64 = self
            .items
            .iter()
            .map(|item| item.line_total().to_minor_units())
            .sum();

        Money::from_minor(minor, iso::ARS)
    }

    /// Total price plus shipping cost.
    #[must_use]
    pub fn grand_total(&self) -> Money<'static, Currency> {
        let minor = self.total_price().to_minor_units() + self.shipping_cost.to_minor_units();

        Money::from_minor(minor, iso::ARS)
    }
}
