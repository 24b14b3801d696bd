//! View model: everything one frame needs, derived from the surface snapshot

use chrono::{DateTime, Local};
use quotebox_application::SurfaceSnapshot;
use quotebox_domain::{StatusMessage, StatusTone};

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Per-frame view state
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    pub snapshot: SurfaceSnapshot,
    pub auto_running: bool,
    pub last_loaded: Option<DateTime<Local>>,
    pub tick: usize,
}

impl ViewModel {
    /// Take a new snapshot, stamping the time when a quote finished loading
    pub fn update(&mut self, snapshot: SurfaceSnapshot, auto_running: bool) {
        let became_success = snapshot.status.tone() == StatusTone::Success
            && self.snapshot.status != snapshot.status;
        if became_success {
            self.last_loaded = Some(Local::now());
        }
        self.snapshot = snapshot;
        self.auto_running = auto_running;
    }

    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Whether a fetch is visibly in progress
    pub fn is_loading(&self) -> bool {
        self.snapshot.status == StatusMessage::loading()
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }
}
