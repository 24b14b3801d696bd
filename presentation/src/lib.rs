//! Presentation layer for quotebox
//!
//! This crate contains the CLI definition, the full-screen terminal view,
//! and the plain console surface used for one-shot runs.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::{ConsoleFormatter, ConsoleSurface};
pub use tui::QuoteTuiApp;
