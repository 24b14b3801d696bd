//! Application use cases
//!
//! - [`quote_session`] - the quote session controller

pub mod quote_session;
