//! Application-level configuration.
//!
//! - [`SessionConfig`] - fetch timeout, auto-mode period, cache sizing, retry cap

pub mod session_config;

pub use session_config::SessionConfig;
