//! Error types for product operations.

use registry::RegistryError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product data provided is invalid (e.g. empty name, non-positive price).
    #[error("Product validation error: {0}")]
    Validation(String),

    /// The search parameters are out of range.
    #[error("Invalid product query: {0}")]
    InvalidQuery(String),
}

impl From<RegistryError> for ProductError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::NotFound { id, .. } => ProductError::NotFound(id),
        }
    }
}
