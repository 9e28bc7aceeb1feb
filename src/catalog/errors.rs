//! Catalog error types

use thiserror::Error;

use crate::storage::StoreError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures raised by catalog and quiz operations
///
/// `NotFound` is the read-side "nothing to show"; `Unprocessable` is the
/// write-side "cannot act on this". Deleting an unknown id is `Unprocessable`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Query produced no rows
    #[error("not found: {0}")]
    NotFound(String),

    /// Write request cannot be carried out
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// Gateway failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub fn not_found(reason: impl Into<String>) -> Self {
        CatalogError::NotFound(reason.into())
    }

    pub fn unprocessable(reason: impl Into<String>) -> Self {
        CatalogError::Unprocessable(reason.into())
    }
}
