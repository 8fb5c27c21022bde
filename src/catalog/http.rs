//! HTTP catalog client.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::{
    catalog::{
        CatalogError, CatalogService, ProductFilter,
        records::{CategoryRecord, ProductRecord},
    },
    products::{Category, Product, ProductId},
};

/// Catalog client backed by the storefront HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    client: Client,
}

impl HttpCatalog {
    /// Creates a client for the API mounted at `base_url`
    /// (for example `http://localhost:3001/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        HttpCatalog {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    #[tracing::instrument(skip(self))]
    async fn products(&self, filter: ProductFilter) -> Result<Vec<Product>, CatalogError> {
        let mut request = self.client.get(self.url("/products"));

        if let Some(category) = filter.category {
            request = request.query(&[("categoryId", category.get())]);
        }

        if let Some(active) = filter.active {
            request = request.query(&[("active", active)]);
        }

        let response = check_status(request.send().await?)?;
        let records: Vec<ProductRecord> = response.json().await?;

        tracing::debug!(count = records.len(), "fetched products");

        records.into_iter().map(Product::try_from).collect()
    }

    #[tracing::instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let request = self.client.get(self.url(&format!("/products/{id}")));

        let response = check_status(request.send().await?)?;
        let record: ProductRecord = response.json().await?;

        record.try_into()
    }

    #[tracing::instrument(skip(self))]
    async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        let request = self.client.get(self.url("/categories"));

        let response = check_status(request.send().await?)?;
        let records: Vec<CategoryRecord> = response.json().await?;

        tracing::debug!(count = records.len(), "fetched categories");

        Ok(records.into_iter().map(Category::from).collect())
    }
}

fn check_status(response: Response) -> Result<Response, CatalogError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(CatalogError::NotFound),
        status if !status.is_success() => Err(CatalogError::UnexpectedStatus(status)),
        _ => Ok(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let catalog = HttpCatalog::new("http://localhost:3001/api/");

        assert_eq!(
            catalog.url("/products"),
            "http://localhost:3001/api/products"
        );
    }
}
