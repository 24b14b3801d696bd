//! Presentation surface port
//!
//! Defines the slots the session controller writes to. The controller only
//! ever reads back the enabled state of the two controls.

use quotebox_domain::{Control, StatusMessage};
use tokio::sync::watch;

/// Output slots of the quote display
///
/// Implementations live in the presentation layer (terminal UI, console)
/// and may be called from any task, so they must be `Send + Sync`.
pub trait PresentationSurface: Send + Sync {
    /// Update the status slot
    fn set_status(&self, status: &StatusMessage);

    /// Update the quote text slot
    fn set_text(&self, text: &str);

    /// Update the author slot (already formatted)
    fn set_author(&self, author: &str);

    /// Update the tags slot (already formatted)
    fn set_tags(&self, tags: &str);

    /// Enable or disable a control
    fn set_control_enabled(&self, control: Control, enabled: bool);

    /// Whether a control is currently enabled
    fn is_control_enabled(&self, control: Control) -> bool;
}

/// Plain copy of every slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    pub status: StatusMessage,
    pub text: String,
    pub author: String,
    pub tags: String,
    pub new_quote_enabled: bool,
    pub stop_enabled: bool,
}

impl Default for SurfaceSnapshot {
    fn default() -> Self {
        Self {
            status: StatusMessage::new("", Default::default()),
            text: String::new(),
            author: String::new(),
            tags: String::new(),
            new_quote_enabled: true,
            stop_enabled: false,
        }
    }
}

impl SurfaceSnapshot {
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::NewQuote => self.new_quote_enabled,
            Control::Stop => self.stop_enabled,
        }
    }
}

/// In-memory surface that publishes every change on a watch channel
///
/// Renderers subscribe and redraw when the snapshot changes; the controller
/// never has to know who is watching.
pub struct SharedSurface {
    tx: watch::Sender<SurfaceSnapshot>,
}

impl SharedSurface {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SurfaceSnapshot::default());
        Self { tx }
    }

    /// Receive a notification on every slot change
    pub fn subscribe(&self) -> watch::Receiver<SurfaceSnapshot> {
        self.tx.subscribe()
    }

    /// Copy of the current slots
    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.tx.borrow().clone()
    }
}

impl Default for SharedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSurface for SharedSurface {
    fn set_status(&self, status: &StatusMessage) {
        self.tx.send_modify(|s| s.status = status.clone());
    }

    fn set_text(&self, text: &str) {
        self.tx.send_modify(|s| s.text = text.to_string());
    }

    fn set_author(&self, author: &str) {
        self.tx.send_modify(|s| s.author = author.to_string());
    }

    fn set_tags(&self, tags: &str) {
        self.tx.send_modify(|s| s.tags = tags.to_string());
    }

    fn set_control_enabled(&self, control: Control, enabled: bool) {
        self.tx.send_modify(|s| match control {
            Control::NewQuote => s.new_quote_enabled = enabled,
            Control::Stop => s.stop_enabled = enabled,
        });
    }

    fn is_control_enabled(&self, control: Control) -> bool {
        self.tx.borrow().is_enabled(control)
    }
}
