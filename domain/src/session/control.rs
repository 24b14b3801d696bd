//! User controls and their keyboard shortcuts

use serde::{Deserialize, Serialize};

/// The two controls on the presentation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Fetch a quote now
    NewQuote,
    /// Stop auto mode
    Stop,
}

impl Control {
    /// Resolve a keyboard shortcut (case-insensitive `N` / `S`)
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'n' => Some(Control::NewQuote),
            's' => Some(Control::Stop),
            _ => None,
        }
    }

    /// The shortcut shown next to the control
    pub fn shortcut(&self) -> char {
        match self {
            Control::NewQuote => 'N',
            Control::Stop => 'S',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Control::NewQuote => "New Quote",
            Control::Stop => "Stop",
        }
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
