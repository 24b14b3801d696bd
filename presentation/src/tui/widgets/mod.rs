//! TUI widgets - ratatui components for the quote view
//!
//! Layout:
//! ┌── Header (1) ──────────────────────────┐
//! ├── Quote card (flex) ───────────────────┤
//! ├── Controls (1) ────────────────────────┤
//! └── StatusBar (1) ───────────────────────┘

pub mod controls;
pub mod header;
pub mod quote_card;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions of the quote view
pub struct QuoteLayout {
    pub header: Rect,
    pub card: Rect,
    pub controls: Rect,
    pub status_bar: Rect,
}

impl QuoteLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            card: chunks[1],
            controls: chunks[2],
            status_bar: chunks[3],
        }
    }
}
