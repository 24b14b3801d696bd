//! Quote subdomain.
//!
//! - [`entities::Quote`] - a single quote as shown to the user
//! - [`entities::QuoteId`] - identifier used for repeat avoidance
//! - [`parser`] - mapping of loosely-shaped JSON payloads onto [`entities::Quote`]

pub mod entities;
pub mod parser;
