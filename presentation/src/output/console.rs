//! Console surface and formatter for one-shot runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quotebox_application::{PresentationSurface, SurfaceSnapshot};
use quotebox_domain::{Control, StatusMessage, StatusTone};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Presentation surface for plain terminal output
///
/// Slots are buffered; a spinner runs on stderr while the status says a
/// fetch is loading. The caller prints the result with [`ConsoleFormatter`].
pub struct ConsoleSurface {
    slots: Mutex<SurfaceSnapshot>,
    spinner: Mutex<Option<ProgressBar>>,
    show_spinner: bool,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SurfaceSnapshot::default()),
            spinner: Mutex::new(None),
            show_spinner: true,
        }
    }

    /// Disable the loading spinner (e.g. when stderr is not a terminal)
    pub fn without_spinner(mut self) -> Self {
        self.show_spinner = false;
        self
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.slots().clone()
    }

    fn slots(&self) -> MutexGuard<'_, SurfaceSnapshot> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn update_spinner(&self, status: &StatusMessage) {
        let mut spinner = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if *status == StatusMessage::loading() {
            if self.show_spinner && spinner.is_none() {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message(status.text().to_string());
                pb.enable_steady_tick(Duration::from_millis(100));
                *spinner = Some(pb);
            }
        } else if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSurface for ConsoleSurface {
    fn set_status(&self, status: &StatusMessage) {
        self.update_spinner(status);
        self.slots().status = status.clone();
    }

    fn set_text(&self, text: &str) {
        self.slots().text = text.to_string();
    }

    fn set_author(&self, author: &str) {
        self.slots().author = author.to_string();
    }

    fn set_tags(&self, tags: &str) {
        self.slots().tags = tags.to_string();
    }

    fn set_control_enabled(&self, control: Control, enabled: bool) {
        let mut slots = self.slots();
        match control {
            Control::NewQuote => slots.new_quote_enabled = enabled,
            Control::Stop => slots.stop_enabled = enabled,
        }
    }

    fn is_control_enabled(&self, control: Control) -> bool {
        self.slots().is_enabled(control)
    }
}

/// Formats surface contents for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Quote text, author and tags
    pub fn format_quote(snapshot: &SurfaceSnapshot) -> String {
        let mut output = format!("\n  {}\n", snapshot.text.italic());
        if !snapshot.author.is_empty() {
            output.push_str(&format!("\n    {}\n", snapshot.author.yellow()));
        }
        if !snapshot.tags.is_empty() {
            output.push_str(&format!("    {}\n", snapshot.tags.dimmed()));
        }
        output
    }

    /// Status line colored by tone
    pub fn format_status(status: &StatusMessage) -> String {
        let text = status.text();
        match status.tone() {
            StatusTone::Neutral => text.cyan().to_string(),
            StatusTone::Success => format!("{} {}", "v".green(), text),
            StatusTone::Error => format!("{} {}", "x".red(), text.red()),
        }
    }
}
