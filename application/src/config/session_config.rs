//! Session parameters - timing and cache sizing for the quote session.
//!
//! [`SessionConfig`] groups the static parameters that control
//! [`QuoteSessionController`](crate::use_cases::quote_session::QuoteSessionController).
//! They are application-layer concerns: the domain only knows about quotes
//! and the cache, not about how often or how patiently we ask for them.

use quotebox_domain::DEFAULT_CACHE_CAPACITY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-attempt request timeout
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(8000);

/// Default auto-mode period
pub const DEFAULT_AUTO_INTERVAL: Duration = Duration::from_millis(8000);

/// Default number of GET attempts per fetch (first try plus repeat-avoidance retries)
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Quote session control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Timeout for a single GET against the quote source.
    pub fetch_timeout: Duration,
    /// Period between auto-mode fetches.
    pub auto_interval: Duration,
    /// Number of identifiers remembered by the recent-quote cache.
    pub cache_capacity: usize,
    /// Maximum GET attempts per fetch while the result keeps repeating.
    pub max_attempts: usize,
    /// Drop results that complete after a newer fetch was already displayed.
    pub discard_stale_responses: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            auto_interval: DEFAULT_AUTO_INTERVAL,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            discard_stale_responses: false,
        }
    }
}

impl SessionConfig {
    // ==================== Builder Methods ====================

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_auto_interval(mut self, interval: Duration) -> Self {
        self.auto_interval = interval;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_discard_stale_responses(mut self, discard: bool) -> Self {
        self.discard_stale_responses = discard;
        self
    }
}
