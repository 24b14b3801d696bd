//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid quote payload: {0}")]
    InvalidQuote(String),

    #[error("Invalid startup query: {0}")]
    InvalidStartupQuery(String),
}

impl DomainError {
    /// Check if this error came from parsing a quote payload
    pub fn is_invalid_quote(&self) -> bool {
        matches!(self, DomainError::InvalidQuote(_))
    }
}
