//! Domain layer for quotebox
//!
//! This crate contains the core business rules: what a quote is, how loosely
//! shaped payloads map onto it, how recently shown quotes are remembered, and
//! what the status slot says. It has no dependencies on I/O, async runtimes
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Recent-quote cache
//!
//! A bounded FIFO set of identifiers. Freshly fetched quotes whose identifier
//! is already in the cache are considered repeats and may be re-fetched a
//! bounded number of times.
//!
//! ## Controls
//!
//! - **New Quote** (`N`): fetch one quote now
//! - **Stop** (`S`): leave auto mode

pub mod cache;
pub mod core;
pub mod quote;
pub mod session;

// Re-export commonly used types
pub use cache::recent::{DEFAULT_CACHE_CAPACITY, RecentQuoteCache};
pub use core::{error::DomainError, string::truncate};
pub use quote::{
    entities::{Quote, QuoteId, UNKNOWN_AUTHOR},
    parser::{parse_quote, parse_quote_value},
};
pub use session::{
    control::Control,
    startup::StartupOptions,
    status::{PLACEHOLDER_PROMPT, StatusMessage, StatusTone},
};
