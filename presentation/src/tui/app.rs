//! TUI application - main loop
//!
//! ```text
//! QuoteTuiApp (select! loop)
//!   ├─ crossterm EventStream ──> KeyAction ──> QuoteSessionController
//!   ├─ surface updates (watch::Receiver<SurfaceSnapshot>)
//!   └─ tick_interval (spinner, clock)
//! ```
//!
//! The controller writes to a [`SharedSurface`]; this loop only redraws
//! whatever the surface currently holds.

use super::keys::{KeyAction, handle_key_event};
use super::view::ViewModel;
use super::widgets::{
    QuoteLayout, controls::ControlsWidget, header::HeaderWidget, quote_card::QuoteCardWidget,
    status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use quotebox_application::{QuoteSessionController, QuoteSource, SharedSurface};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::panic::PanicHookInfo;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Redraw period while idle (spinner and clock)
const TICK: Duration = Duration::from_millis(120);

/// Render one frame of the quote view
pub fn draw(frame: &mut Frame, view: &ViewModel) {
    let layout = QuoteLayout::compute(frame.area());
    frame.render_widget(HeaderWidget::new(view), layout.header);
    frame.render_widget(QuoteCardWidget::new(view), layout.card);
    frame.render_widget(ControlsWidget::new(view), layout.controls);
    frame.render_widget(StatusBarWidget::new(view), layout.status_bar);
}

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static;

/// Leave raw mode and the alternate screen so a panic message is readable
fn leave_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Chains `cleanup` in front of the current panic hook while alive and puts
/// the previous hook back on drop.
struct PanicHookGuard {
    previous: Arc<PanicHook>,
}

impl PanicHookGuard {
    fn install(cleanup: fn()) -> Self {
        let previous: Arc<PanicHook> = Arc::from(std::panic::take_hook());
        let chained = Arc::clone(&previous);
        std::panic::set_hook(Box::new(move |info| {
            cleanup();
            chained(info);
        }));
        Self { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // The hook cannot be swapped from a panicking thread
        if std::thread::panicking() {
            return;
        }
        let _ = std::panic::take_hook();
        let previous = Arc::clone(&self.previous);
        std::panic::set_hook(Box::new(move |info| previous(info)));
    }
}

/// Full-screen quote viewer
pub struct QuoteTuiApp<S: QuoteSource + 'static> {
    controller: QuoteSessionController<S, SharedSurface>,
    surface: Arc<SharedSurface>,
}

impl<S: QuoteSource + 'static> QuoteTuiApp<S> {
    /// Create the app around a controller that writes to `surface`
    pub fn new(
        controller: QuoteSessionController<S, SharedSurface>,
        surface: Arc<SharedSurface>,
    ) -> Self {
        Self {
            controller,
            surface,
        }
    }

    /// Run until the user quits
    pub async fn run(&self, startup_query: Option<&str>) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let panic_guard = PanicHookGuard::install(leave_terminal);

        let result = self.event_loop(&mut terminal, startup_query).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        drop(panic_guard);

        self.controller.stop_auto_mode();
        result
    }

    async fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        startup_query: Option<&str>,
    ) -> io::Result<()> {
        let mut updates = self.surface.subscribe();
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(TICK);
        let mut view = ViewModel::default();

        self.controller.initialize_from_query(startup_query);
        info!("Quote view started");

        loop {
            let snapshot = updates.borrow_and_update().clone();
            view.update(snapshot, self.controller.is_auto_running());
            terminal.draw(|frame| draw(frame, &view))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        if self.apply(handle_key_event(key)) {
                            break;
                        }
                    }
                    // Resize and other events just trigger a redraw
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e),
                    None => break,
                },
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = tick.tick() => view.advance(),
            }
        }

        info!("Quote view closed");
        Ok(())
    }

    /// Apply an action; returns true when the app should exit
    fn apply(&self, action: KeyAction) -> bool {
        match action {
            KeyAction::Shortcut(key) => {
                if !self.controller.handle_key(key) {
                    debug!(%key, "Shortcut had no effect");
                }
                false
            }
            KeyAction::StartAuto => {
                self.controller.start_auto_mode();
                false
            }
            KeyAction::Quit => true,
            KeyAction::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebox_application::SurfaceSnapshot;
    use quotebox_domain::StatusMessage;
    use ratatui::backend::TestBackend;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CLEANUP_CALLS: AtomicUsize = AtomicUsize::new(0);
    static PREVIOUS_HOOK_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn count_cleanup() {
        CLEANUP_CALLS.fetch_add(1, Ordering::SeqCst);
    }

    fn render_to_text(view: &ViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| draw(frame, view)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_quote_slots() {
        let view = ViewModel {
            snapshot: SurfaceSnapshot {
                status: StatusMessage::loaded(),
                text: "X marks the spot".into(),
                author: "— Y".into(),
                tags: "Tags: a, b".into(),
                new_quote_enabled: true,
                stop_enabled: false,
            },
            ..Default::default()
        };
        let screen = render_to_text(&view);
        assert!(screen.contains("X marks the spot"));
        assert!(screen.contains("— Y"));
        assert!(screen.contains("Tags: a, b"));
        assert!(screen.contains("Quote loaded"));
        assert!(screen.contains("[N] New Quote"));
        assert!(!screen.contains("AUTO"));
    }

    #[test]
    fn test_renders_auto_badge() {
        let view = ViewModel {
            auto_running: true,
            ..Default::default()
        };
        assert!(render_to_text(&view).contains("AUTO"));
    }

    #[test]
    fn test_panic_hook_restored_when_guard_drops() {
        std::panic::set_hook(Box::new(|_| {
            PREVIOUS_HOOK_CALLS.fetch_add(1, Ordering::SeqCst);
        }));

        let guard = PanicHookGuard::install(count_cleanup);
        let _ = std::panic::catch_unwind(|| panic!("inside the view"));
        assert_eq!(CLEANUP_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(PREVIOUS_HOOK_CALLS.load(Ordering::SeqCst), 1);

        drop(guard);
        let _ = std::panic::catch_unwind(|| panic!("after the view closed"));
        assert_eq!(CLEANUP_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(PREVIOUS_HOOK_CALLS.load(Ordering::SeqCst), 2);

        let _ = std::panic::take_hook();
    }
}
