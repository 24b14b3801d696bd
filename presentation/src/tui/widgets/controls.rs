//! Controls widget - the two buttons, dimmed while disabled

use crate::tui::view::ViewModel;
use quotebox_domain::Control;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct ControlsWidget<'a> {
    view: &'a ViewModel,
}

impl<'a> ControlsWidget<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }

    fn button(control: Control, enabled: bool) -> Span<'static> {
        let style = if enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" [{}] {} ", control.shortcut(), control.label()), style)
    }
}

impl Widget for ControlsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = &self.view.snapshot;
        let line = Line::from(vec![
            Self::button(Control::NewQuote, snapshot.new_quote_enabled),
            Span::raw("  "),
            Self::button(Control::Stop, snapshot.stop_enabled),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
