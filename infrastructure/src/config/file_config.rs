//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! after validation.

use quotebox_application::SessionConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Quote source used when nothing else is configured
pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("source.url cannot be empty")]
    EmptyUrl,

    #[error("source.url is not a valid http(s) URL: {0}")]
    InvalidUrl(String),

    #[error("source.timeout_ms cannot be 0")]
    InvalidTimeout,

    #[error("session.auto_interval_ms cannot be 0")]
    InvalidInterval,

    #[error("session.max_attempts cannot be 0")]
    InvalidMaxAttempts,
}

/// Raw quote source configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// Endpoint returning one random quote as JSON
    pub url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_QUOTE_URL.to_string(),
            timeout_ms: 8000,
            user_agent: format!("quotebox/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Auto mode period in milliseconds
    pub auto_interval_ms: u64,
    /// Recent-quote cache capacity
    pub cache_capacity: usize,
    /// GET attempts per fetch while results keep repeating
    pub max_attempts: usize,
    /// Ignore results older than the quote already on screen
    pub discard_stale_responses: bool,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            auto_interval_ms: 8000,
            cache_capacity: 20,
            max_attempts: 5,
            discard_stale_responses: false,
        }
    }
}

/// Raw display configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDisplayConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Log file used while the full-screen UI owns the terminal
    pub log_file: Option<String>,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_file: None,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub source: FileSourceConfig,
    pub session: FileSessionConfig,
    pub display: FileDisplayConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.source.url.trim();
        if url.is_empty() {
            return Err(ConfigValidationError::EmptyUrl);
        }
        match reqwest::Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => return Err(ConfigValidationError::InvalidUrl(url.to_string())),
        }
        if self.source.timeout_ms == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.session.auto_interval_ms == 0 {
            return Err(ConfigValidationError::InvalidInterval);
        }
        if self.session.max_attempts == 0 {
            return Err(ConfigValidationError::InvalidMaxAttempts);
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.source.timeout_ms)
    }

    /// Convert to the application's session parameters
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_fetch_timeout(self.fetch_timeout())
            .with_auto_interval(Duration::from_millis(self.session.auto_interval_ms))
            .with_cache_capacity(self.session.cache_capacity)
            .with_max_attempts(self.session.max_attempts)
            .with_discard_stale_responses(self.session.discard_stale_responses)
    }

    /// Render as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.source.url, DEFAULT_QUOTE_URL);
        assert!(config.source.user_agent.starts_with("quotebox/"));
    }

    #[test]
    fn test_session_config_conversion() {
        let config = FileConfig {
            source: FileSourceConfig {
                timeout_ms: 2500,
                ..Default::default()
            },
            session: FileSessionConfig {
                auto_interval_ms: 15_000,
                cache_capacity: 7,
                max_attempts: 2,
                discard_stale_responses: true,
            },
            ..Default::default()
        };
        let session = config.session_config();
        assert_eq!(session.fetch_timeout, Duration::from_millis(2500));
        assert_eq!(session.auto_interval, Duration::from_secs(15));
        assert_eq!(session.cache_capacity, 7);
        assert_eq!(session.max_attempts, 2);
        assert!(session.discard_stale_responses);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = FileConfig::default();
        config.source.url = "  ".into();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyUrl));

        config.source.url = "ftp://example.com/quote".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidUrl(_))
        ));

        let mut config = FileConfig::default();
        config.source.timeout_ms = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = FileConfig::default();
        config.session.auto_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidInterval));

        let mut config = FileConfig::default();
        config.session.max_attempts = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxAttempts)
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [session]
            cache_capacity = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.session.cache_capacity, 50);
        assert_eq!(config.session.max_attempts, 5);
        assert_eq!(config.source.url, DEFAULT_QUOTE_URL);
    }

    #[test]
    fn test_to_toml_round_trips_sections() {
        let text = FileConfig::default().to_toml().unwrap();
        assert!(text.contains("[source]"));
        assert!(text.contains("[session]"));
        assert!(text.contains("auto_interval_ms = 8000"));
    }
}
