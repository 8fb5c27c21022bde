//! Catalog client errors.

use std::num::TryFromIntError;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found")]
    NotFound,

    #[error("unexpected response status: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("negative price in catalog response")]
    NegativePrice,

    #[error("invalid stock value")]
    InvalidStock(#[from] TryFromIntError),

    #[error("transport error")]
    Http(#[from] reqwest::Error),
}
