//! Quote session domain.
//!
//! - [`status::StatusMessage`] - what the status slot shows, with its tone
//! - [`control::Control`] - the two user controls and their keyboard shortcuts
//! - [`startup::StartupOptions`] - options read once when the session starts

pub mod control;
pub mod startup;
pub mod status;
