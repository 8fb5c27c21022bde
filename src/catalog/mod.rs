//! Catalog client
//!
//! Read-only access to the product and category catalog served by the
//! storefront API. Responses are validated here, at the collaborator
//! boundary, so arbitrary wire shapes never reach the cart.

use async_trait::async_trait;
use mockall::automock;

use crate::products::{Category, CategoryId, Product, ProductId};

mod errors;
mod http;
mod records;

pub use errors::CatalogError;
pub use http::HttpCatalog;
pub use records::{CategoryRecord, ProductRecord};

/// Filters accepted by the product listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Restrict to one category
    pub category: Option<CategoryId>,

    /// Restrict by the active flag
    pub active: Option<bool>,
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieve products, optionally filtered.
    async fn products(&self, filter: ProductFilter) -> Result<Vec<Product>, CatalogError>;

    /// Retrieve a single product.
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Retrieve all categories.
    async fn categories(&self) -> Result<Vec<Category>, CatalogError>;
}
