//! Catalog wire records
//!
//! JSON shapes as the storefront API serves them, camelCase keys included.
//! Conversion into domain types is where response validation happens.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    catalog::CatalogError,
    products::{Category, CategoryId, Product, ProductId},
};

/// Product as served by `GET /products` and `GET /products/{id}`.
///
/// `price` accepts both JSON numbers and numeric strings: the backend's SQL
/// driver serialises decimal columns as strings. `sizes` and `colors` may be
/// absent on older rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sizes: SmallVec<[String; 5]>,
    #[serde(default)]
    pub colors: SmallVec<[String; 5]>,
    #[serde(default)]
    pub stock: i64,
    pub category_id: CategoryId,
    pub is_active: bool,
    #[serde(default)]
    pub category_name: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        if record.price.is_sign_negative() {
            return Err(CatalogError::NegativePrice);
        }

        let stock = u32::try_from(record.stock)?;

        Ok(Product {
            id: ProductId::new(record.id),
            name: record.name,
            description: record.description,
            price: Money::from_decimal(record.price, iso::ARS),
            image: record.image,
            sizes: record.sizes,
            colors: record.colors,
            stock,
            category_id: record.category_id,
            active: record.is_active,
            category_name: record.category_name,
        })
    }
}

/// Category as served by `GET /categories`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub is_active: bool,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Category {
            id: CategoryId::new(record.id),
            name: record.name,
            image: record.image,
            active: record.is_active,
        }
    }
}
