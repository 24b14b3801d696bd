//! TUI (Text User Interface) module for quotebox
//!
//! A full-screen quote view built on ratatui: the quote card, the two
//! controls, and a status bar colored by the status tone.

mod app;
mod keys;
mod view;
mod widgets;

pub use app::{QuoteTuiApp, draw};
pub use keys::{KeyAction, handle_key_event};
pub use view::ViewModel;
