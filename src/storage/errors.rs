//! Storage error types

use thiserror::Error;

/// Result type for gateway operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by a [`TriviaStore`](super::TriviaStore)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backing state is unusable (e.g. a poisoned lock)
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store refused a value it cannot represent in a column
    #[error("column `{column}` rejected value: {reason}")]
    Rejected { column: &'static str, reason: String },

    /// Seed data could not be read or parsed
    #[error("seed error: {0}")]
    Seed(String),
}

impl StoreError {
    pub fn rejected(column: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Rejected {
            column,
            reason: reason.into(),
        }
    }
}
