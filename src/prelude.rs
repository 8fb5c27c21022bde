//! PazSport prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::Cart,
    catalog::{CatalogError, CatalogService, HttpCatalog, ProductFilter},
    checkout::{CheckoutError, confirm, order_message, order_url},
    config::{PaymentInfo, StoreInfo},
    customers::Customer,
    items::LineItem,
    money::{format_ars, pesos},
    products::{Category, CategoryId, ONE_SIZE, Product, ProductId},
    shipping::{FREE_PICKUP_ZIP, ShippingZone, quote},
};
