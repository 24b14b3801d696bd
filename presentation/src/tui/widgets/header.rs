//! Header widget - app name and auto-mode badge

use crate::tui::view::ViewModel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct HeaderWidget<'a> {
    view: &'a ViewModel,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("❝ ", Style::default().fg(Color::Green)),
            Span::styled(
                "quotebox",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ];

        if self.view.auto_running {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                " AUTO ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
