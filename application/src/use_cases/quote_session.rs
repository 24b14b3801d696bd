//! Quote session use case
//!
//! Owns the session state (auto-mode flag, its scheduled task, the
//! recent-quote cache) and drives the presentation surface.
//!
//! All state lives behind one `std::sync::Mutex` that is never held across
//! an `.await`; every mutation happens in a single step between suspension
//! points. Fetches are not mutually excluded: overlapping fetches each update
//! the surface when they complete.

use crate::config::SessionConfig;
use crate::ports::presentation::PresentationSurface;
use crate::ports::quote_source::{QuoteSource, SourceError};
use quotebox_domain::{
    Control, PLACEHOLDER_PROMPT, Quote, RecentQuoteCache, StartupOptions, StatusMessage, truncate,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Longest error detail shown in the status slot
const MAX_DETAIL_LEN: usize = 120;

/// User-visible failure of a single fetch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The GET did not complete within the configured window
    #[error("Request timed out")]
    Timeout,

    /// Any other transport, status or parse failure
    #[error("Fetch failed: {0}")]
    Fetch(String),
}

impl FetchFailure {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchFailure::Timeout)
    }

    /// Message for the status slot
    pub fn status_message(&self) -> StatusMessage {
        match self {
            FetchFailure::Timeout => StatusMessage::timed_out(),
            FetchFailure::Fetch(detail) => {
                StatusMessage::fetch_error(&truncate(detail, MAX_DETAIL_LEN))
            }
        }
    }
}

impl From<SourceError> for FetchFailure {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::Timeout => FetchFailure::Timeout,
            other => FetchFailure::Fetch(other.to_string()),
        }
    }
}

/// Scheduled auto-mode task, consumed by stop
struct AutoModeHandle {
    token: CancellationToken,
    ticker: JoinHandle<()>,
}

impl AutoModeHandle {
    fn cancel(self) {
        self.token.cancel();
        drop(self.ticker);
    }
}

/// Mutable session state
struct SessionState {
    auto: Option<AutoModeHandle>,
    cache: RecentQuoteCache,
    /// Sequence number of the fetch whose quote is on screen (0 = none)
    displayed_seq: u64,
}

struct Inner<S: QuoteSource, P: PresentationSurface> {
    source: Arc<S>,
    surface: Arc<P>,
    config: SessionConfig,
    state: Mutex<SessionState>,
    next_seq: AtomicU64,
}

/// Re-enables the "new quote" control when a fetch ends, however it ends
struct NewQuoteReenable<'a, P: PresentationSurface> {
    surface: &'a P,
}

impl<P: PresentationSurface> Drop for NewQuoteReenable<'_, P> {
    fn drop(&mut self) {
        self.surface.set_control_enabled(Control::NewQuote, true);
    }
}

/// Controller for a single quote session
///
/// Cheap to clone; clones share the same session. Methods that schedule work
/// (`start_auto_mode`, `trigger_fetch`, `handle_key`) must be called from
/// within a tokio runtime.
pub struct QuoteSessionController<S: QuoteSource + 'static, P: PresentationSurface + 'static> {
    inner: Arc<Inner<S, P>>,
}

impl<S: QuoteSource + 'static, P: PresentationSurface + 'static> Clone
    for QuoteSessionController<S, P>
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: QuoteSource + 'static, P: PresentationSurface + 'static> QuoteSessionController<S, P> {
    pub fn new(source: Arc<S>, surface: Arc<P>, config: SessionConfig) -> Self {
        let cache = RecentQuoteCache::new(config.cache_capacity);
        Self {
            inner: Arc::new(Inner {
                source,
                surface,
                config,
                state: Mutex::new(SessionState {
                    auto: None,
                    cache,
                    displayed_seq: 0,
                }),
                next_seq: AtomicU64::new(0),
            }),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // ==================== Startup ====================

    /// Write the initial display and honor the startup options
    pub fn initialize(&self, options: StartupOptions) {
        let surface = &self.inner.surface;
        surface.set_status(&StatusMessage::ready());
        surface.set_text(PLACEHOLDER_PROMPT);
        surface.set_author("");
        surface.set_tags("");
        surface.set_control_enabled(Control::NewQuote, true);
        surface.set_control_enabled(Control::Stop, false);

        if options.auto {
            info!("Auto mode requested at startup");
            self.start_auto_mode();
        }
    }

    /// Like [`initialize`](Self::initialize), parsing a URL-style query.
    ///
    /// Malformed queries are treated as absent.
    pub fn initialize_from_query(&self, query: Option<&str>) {
        let options = match query {
            Some(query) => {
                let (options, error) = StartupOptions::from_query_or_default(query);
                if let Some(e) = error {
                    debug!("Ignoring startup query {:?}: {}", query, e);
                }
                options
            }
            None => StartupOptions::default(),
        };
        self.initialize(options);
    }

    // ==================== Fetch ====================

    /// Fetch one quote and display it
    ///
    /// On failure the previous quote stays on screen and the failure is shown
    /// in the status slot. The "new quote" control is re-enabled on every
    /// exit path, including when this future is dropped mid-flight.
    pub async fn fetch_quote(&self) -> Result<Quote, FetchFailure> {
        let seq = self.inner.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let surface = self.inner.surface.as_ref();

        surface.set_status(&StatusMessage::loading());
        surface.set_control_enabled(Control::NewQuote, false);
        let _reenable = NewQuoteReenable { surface };

        match self.fetch_fresh(seq).await {
            Ok(quote) => {
                self.display(seq, &quote);
                Ok(quote)
            }
            Err(failure) => {
                warn!(seq, "Quote fetch failed: {}", failure);
                surface.set_status(&failure.status_message());
                Err(failure)
            }
        }
    }

    /// Spawn a fetch whose outcome is only reported on the surface
    pub fn trigger_fetch(&self) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            // Failures are already logged and displayed by fetch_quote
            let _ = controller.fetch_quote().await;
        })
    }

    /// Fetch until the result is not a recent repeat, up to `max_attempts` GETs
    async fn fetch_fresh(&self, seq: u64) -> Result<Quote, FetchFailure> {
        let max_attempts = self.inner.config.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let quote = self.fetch_once().await?;

            let repeated = quote
                .id()
                .is_some_and(|id| self.state().cache.contains(id.as_str()));

            if !repeated {
                return Ok(quote);
            }
            if attempt >= max_attempts {
                debug!(seq, attempt, "Accepting repeated quote after {} attempts", attempt);
                return Ok(quote);
            }
            debug!(seq, attempt, id = ?quote.id(), "Recent repeat, fetching again");
        }
    }

    /// A single GET raced against the fetch timeout
    ///
    /// When the timer wins the request future is dropped, which aborts it;
    /// whatever the transport would have reported afterwards is never seen.
    async fn fetch_once(&self) -> Result<Quote, FetchFailure> {
        let timeout = self.inner.config.fetch_timeout;
        match tokio::time::timeout(timeout, self.inner.source.fetch_random()).await {
            Ok(result) => result.map_err(FetchFailure::from),
            Err(_) => {
                debug!(
                    "Request to {} exceeded {:?}",
                    self.inner.source.describe(),
                    timeout
                );
                Err(FetchFailure::Timeout)
            }
        }
    }

    fn display(&self, seq: u64, quote: &Quote) {
        let token = quote
            .id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| format!("local-{}", seq));

        let stale = {
            let mut state = self.state();
            if let Some(evicted) = state.cache.insert(token) {
                debug!(%evicted, "Recent-quote cache full, evicted oldest");
            }
            if self.inner.config.discard_stale_responses && seq < state.displayed_seq {
                true
            } else {
                state.displayed_seq = seq;
                false
            }
        };

        let surface = &self.inner.surface;
        if stale {
            debug!(seq, "Discarding result older than the displayed quote");
        } else {
            surface.set_text(quote.text());
            surface.set_author(&quote.author_line());
            surface.set_tags(&quote.tags_line());
        }
        surface.set_status(&StatusMessage::loaded());
        info!(seq, author = quote.author(), "Quote displayed");
    }

    // ==================== Auto mode ====================

    /// Whether auto mode is running
    pub fn is_auto_running(&self) -> bool {
        self.state().auto.is_some()
    }

    /// Start auto mode; returns false if it was already running
    ///
    /// Fetches once immediately, then every `auto_interval` until stopped.
    pub fn start_auto_mode(&self) -> bool {
        {
            let mut state = self.state();
            if state.auto.is_some() {
                debug!("Auto mode already running");
                return false;
            }
            let token = CancellationToken::new();
            let ticker = tokio::spawn(self.clone().run_auto_ticks(token.clone()));
            state.auto = Some(AutoModeHandle { token, ticker });
        }

        let surface = &self.inner.surface;
        surface.set_control_enabled(Control::NewQuote, false);
        surface.set_control_enabled(Control::Stop, true);
        surface.set_status(&StatusMessage::auto_running(self.inner.config.auto_interval));
        info!(interval = ?self.inner.config.auto_interval, "Auto mode started");

        self.trigger_fetch();
        true
    }

    /// Stop auto mode; returns false if it was not running
    ///
    /// Only the schedule is cancelled: a fetch already in flight still
    /// completes and updates the display.
    pub fn stop_auto_mode(&self) -> bool {
        let Some(handle) = self.state().auto.take() else {
            debug!("Auto mode not running");
            return false;
        };
        handle.cancel();

        let surface = &self.inner.surface;
        surface.set_control_enabled(Control::NewQuote, true);
        surface.set_control_enabled(Control::Stop, false);
        surface.set_status(&StatusMessage::auto_stopped());
        info!("Auto mode stopped");
        true
    }

    async fn run_auto_ticks(self, token: CancellationToken) {
        let period = self.inner.config.auto_interval;
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = ticker.tick() => {
                    debug!("Auto mode tick");
                    self.trigger_fetch();
                }
            }
        }
    }

    // ==================== Keyboard ====================

    /// Apply a keyboard shortcut; returns whether it was acted on
    ///
    /// `N` fetches only while "new quote" is enabled, `S` stops only while
    /// "stop" is enabled. Other keys are ignored.
    pub fn handle_key(&self, key: char) -> bool {
        let Some(control) = Control::from_key(key) else {
            return false;
        };
        if !self.inner.surface.is_control_enabled(control) {
            debug!(%control, "Shortcut ignored, control disabled");
            return false;
        }
        match control {
            Control::NewQuote => {
                self.trigger_fetch();
            }
            Control::Stop => {
                self.stop_auto_mode();
            }
        }
        true
    }

    // ==================== Introspection ====================

    /// Cached identifiers, oldest first
    pub fn recent_ids(&self) -> Vec<String> {
        self.state().cache.iter().map(str::to_string).collect()
    }
}
