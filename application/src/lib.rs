//! Application layer for quotebox
//!
//! This crate contains the quote session use case, its port definitions and
//! its configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    presentation::{PresentationSurface, SharedSurface, SurfaceSnapshot},
    quote_source::{QuoteSource, SourceError},
};
pub use use_cases::quote_session::{FetchFailure, QuoteSessionController};
