//! Recent-quote cache.
//!
//! - [`recent::RecentQuoteCache`] - bounded FIFO set of recently shown identifiers

pub mod recent;
