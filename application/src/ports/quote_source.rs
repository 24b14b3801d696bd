//! Quote source port
//!
//! Defines the interface for fetching a random quote from a remote source.

use async_trait::async_trait;
use quotebox_domain::{DomainError, Quote};
use thiserror::Error;

/// Errors that can occur while fetching from a quote source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Timeout")]
    Timeout,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<DomainError> for SourceError {
    fn from(e: DomainError) -> Self {
        SourceError::InvalidResponse(e.to_string())
    }
}

/// Source of random quotes
///
/// Implementations (adapters) live in the infrastructure layer. A single call
/// is a single request: no retries at this level.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch one random quote
    async fn fetch_random(&self) -> Result<Quote, SourceError>;

    /// Human-readable description, used in logs
    fn describe(&self) -> String {
        "quote source".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_maps_to_invalid_response() {
        let err: SourceError = DomainError::InvalidQuote("missing quote text".into()).into();
        assert_eq!(
            err.to_string(),
            "Invalid response: Invalid quote payload: missing quote text"
        );
    }

    #[test]
    fn test_http_status_display() {
        assert_eq!(SourceError::HttpStatus { status: 503 }.to_string(), "HTTP 503");
    }
}
