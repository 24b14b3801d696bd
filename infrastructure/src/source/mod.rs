//! Quote source adapters.
//!
//! Provides [`HttpQuoteSource`], a reqwest-backed implementation of the
//! [`QuoteSource`](quotebox_application::QuoteSource) port.

mod http;

pub use http::HttpQuoteSource;
