//! Key mapping for the quote view

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Control shortcut, resolved by the session (`n`, `s`)
    Shortcut(char),
    /// Start auto mode
    StartAuto,
    /// Leave the application
    Quit,
    /// No action
    None,
}

/// Map a terminal key event to an action
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    // Some platforms report releases and repeats as well
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, _) => KeyAction::Quit,
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
            match c.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'a' => KeyAction::StartAuto,
                'n' | 's' => KeyAction::Shortcut(c),
                _ => KeyAction::None,
            }
        }
        _ => KeyAction::None,
    }
}
