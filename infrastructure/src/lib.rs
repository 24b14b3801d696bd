//! Infrastructure layer for quotebox
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading and logging setup.

pub mod config;
pub mod logging;
pub mod source;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_QUOTE_URL, FileConfig, FileDisplayConfig,
    FileSessionConfig, FileSourceConfig,
};
pub use logging::{LogTarget, default_log_path, init_logging, level_for_verbosity};
pub use source::HttpQuoteSource;
