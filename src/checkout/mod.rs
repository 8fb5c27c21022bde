//! Checkout
//!
//! Thin orchestration over the cart: gate submission on the required
//! customer name, then hand back the WhatsApp deep link. Opening the link in
//! a new browsing context belongs to the embedding UI, not to this crate.

use thiserror::Error;

use crate::{cart::Cart, config::StoreInfo};

mod message;

pub use message::{order_message, order_url};

/// Errors surfaced while confirming an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The customer name is required before an order can be sent.
    #[error("customer name is required")]
    MissingCustomerName,
}

/// Validates the cart and returns the order deep link.
///
/// The gate lives here, not in the message builder: the builder happily
/// renders a message without a customer line.
///
/// # Errors
///
/// Returns [`CheckoutError::MissingCustomerName`] while `customer.name` is
/// empty.
#[tracing::instrument(skip_all, fields(items = cart.total_items()))]
pub fn confirm(cart: &Cart, store: &StoreInfo) -> Result<String, CheckoutError> {
    if !cart.customer().has_name() {
        return Err(CheckoutError::MissingCustomerName);
    }

    let url = order_url(cart, store);

    tracing::debug!(zip = cart.zip_code(), "order link built");

    Ok(url)
}

#[cfg(test)]
mod tests {
    use smallvec::SmallVec;
    use testresult::TestResult;

    use crate::{
        customers::Customer,
        money::pesos,
        products::{CategoryId, Product, ProductId},
    };

    use super::*;

    fn cart_with_one_item() -> Cart {
        let product = Product {
            id: ProductId::new(1),
            name: "Remera".to_string(),
            description: None,
            price: pesos(1_000),
            image: None,
            sizes: SmallVec::new(),
            colors: SmallVec::new(),
            stock: 5,
            category_id: CategoryId::new(1),
            active: true,
            category_name: None,
        };

        let mut cart = Cart::new();
        cart.add_item(&product, "M", 1, None);
        cart
    }

    #[test]
    fn confirm_refuses_without_a_customer_name() {
        let cart = cart_with_one_item();

        let result = confirm(&cart, &StoreInfo::default());

        assert_eq!(result, Err(CheckoutError::MissingCustomerName));
    }

    #[test]
    fn confirm_returns_the_deep_link_once_named() -> TestResult {
        let mut cart = cart_with_one_item();
        cart.set_customer(Customer {
            name: "Ana López".to_string(),
            address: String::new(),
        });

        let url = confirm(&cart, &StoreInfo::default())?;

        assert!(url.starts_with("https://wa.me/5492302462479?text="));

        Ok(())
    }
}
