use thiserror::Error;

use crate::catalog::ProductError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl RepositoryError {
    /// Shorthand for a missing product.
    pub fn product_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Product",
            id: id.to_string(),
        }
    }

    /// Returns true for the `NotFound` kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<ProductError> for RepositoryError {
    fn from(err: ProductError) -> Self {
        Self::ValidationFailed(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
