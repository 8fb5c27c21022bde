//! PazSport
//!
//! Storefront core for the PazSport shop: read-only catalog access, a per-session
//! shopping cart with shipping quotes, and WhatsApp order checkout.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod customers;
pub mod items;
pub mod money;
pub mod prelude;
pub mod products;
pub mod shipping;
