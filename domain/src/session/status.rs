//! Status slot messages

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Prompt shown in the quote slot before anything has been fetched
pub const PLACEHOLDER_PROMPT: &str = "Press N to fetch a quote.";

/// Visual tone of the status slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    #[default]
    Neutral,
    Success,
    Error,
}

impl StatusTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Neutral => "neutral",
            StatusTone::Success => "success",
            StatusTone::Error => "error",
        }
    }
}

/// A message for the status slot (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    text: String,
    tone: StatusTone,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn ready() -> Self {
        Self::new("Ready", StatusTone::Neutral)
    }

    pub fn loading() -> Self {
        Self::new("Loading...", StatusTone::Neutral)
    }

    pub fn loaded() -> Self {
        Self::new("Quote loaded", StatusTone::Success)
    }

    pub fn timed_out() -> Self {
        Self::new("Request timed out", StatusTone::Error)
    }

    pub fn fetch_error(detail: &str) -> Self {
        Self::new(format!("Error fetching quote: {}", detail), StatusTone::Error)
    }

    pub fn auto_running(interval: Duration) -> Self {
        Self::new(
            format!("Auto mode: new quote every {}s", interval.as_secs_f64()),
            StatusTone::Neutral,
        )
    }

    pub fn auto_stopped() -> Self {
        Self::new("Auto mode stopped", StatusTone::Neutral)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tone(&self) -> StatusTone {
        self.tone
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
