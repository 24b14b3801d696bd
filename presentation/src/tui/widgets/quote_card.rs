//! Quote card widget - quote text, author and tags

use crate::tui::view::ViewModel;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

pub struct QuoteCardWidget<'a> {
    view: &'a ViewModel,
}

impl<'a> QuoteCardWidget<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }
}

impl Widget for QuoteCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = &self.view.snapshot;

        let mut lines = vec![Line::from(Span::styled(
            snapshot.text.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::ITALIC),
        ))];

        if !snapshot.author.is_empty() {
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    snapshot.author.as_str(),
                    Style::default().fg(Color::Yellow),
                ))
                .alignment(Alignment::Right),
            );
        }

        if !snapshot.tags.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                snapshot.tags.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Quote ")
            .padding(Padding::horizontal(1))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
