//! Status bar widget - status message by tone, last update time, key hints

use crate::tui::view::ViewModel;
use quotebox_domain::StatusTone;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const KEY_HINTS: &str = "n:new  a:auto  s:stop  q:quit";

pub struct StatusBarWidget<'a> {
    view: &'a ViewModel,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }

    fn tone_color(tone: StatusTone) -> Color {
        match tone {
            StatusTone::Neutral => Color::Blue,
            StatusTone::Success => Color::Green,
            StatusTone::Error => Color::Red,
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let status = &self.view.snapshot.status;
        let mut text = status.text().to_string();
        if self.view.is_loading() {
            text = format!("{} {}", self.view.spinner(), text);
        }
        if let Some(at) = self.view.last_loaded {
            text = format!("{}  (updated {})", text, at.format("%H:%M:%S"));
        }

        let status_style = Style::default()
            .fg(Color::Black)
            .bg(Self::tone_color(status.tone()))
            .add_modifier(Modifier::BOLD);
        let status_line = Line::from(Span::styled(format!(" {} ", text), status_style));
        let status_width = (text.chars().count() as u16 + 2).min(area.width);
        buf.set_line(area.x, area.y, &status_line, status_width);

        // Key hints, right-aligned when they fit
        let hints_width = KEY_HINTS.len() as u16;
        let hints_x = area.right().saturating_sub(hints_width + 1);
        if hints_x > area.x + status_width {
            let hints = Line::from(Span::styled(KEY_HINTS, bg_style));
            buf.set_line(hints_x, area.y, &hints, hints_width + 1);
        }
    }
}
