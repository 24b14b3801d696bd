//! Configuration file loading for quotebox
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUOTEBOX_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quotebox.toml` or `./.quotebox.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quotebox/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_QUOTE_URL, FileConfig, FileDisplayConfig, FileSessionConfig,
    FileSourceConfig,
};
pub use loader::ConfigLoader;
