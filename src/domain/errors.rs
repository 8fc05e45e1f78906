use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Order item not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(e: validator::ValidationErrors) -> Self {
        DomainError::InvalidInput(e.to_string())
    }
}
