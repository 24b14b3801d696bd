//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quotebox
#[derive(Parser, Debug)]
#[command(name = "quotebox")]
#[command(author, version, about = "Random quotes in your terminal, with auto-refresh")]
#[command(long_about = r#"
quotebox fetches a random quote from a JSON HTTP API and shows it in a
full-screen terminal view.

Keys:
  n   new quote (when not in auto mode)
  a   start auto mode
  s   stop auto mode
  q   quit (also Esc, Ctrl+C)

Configuration files are loaded from (in priority order):
1. QUOTEBOX_* environment variables (e.g. QUOTEBOX_SOURCE__URL)
2. --config <path>     Explicit config file
3. ./quotebox.toml     Project-level config
4. ~/.config/quotebox/config.toml   Global config

Example:
  quotebox
  quotebox --auto --interval-ms 15000
  quotebox --once --url https://api.quotable.io/random
"#)]
pub struct Cli {
    /// Quote source URL (returns one quote as JSON)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Auto mode period in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Number of recent quotes remembered to avoid repeats
    #[arg(long, value_name = "N")]
    pub cache_capacity: Option<usize>,

    /// Start in auto mode
    #[arg(short, long)]
    pub auto: bool,

    /// Startup options as a query string, e.g. "auto=true"
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Fetch a single quote, print it and exit
    #[arg(long, conflicts_with_all = ["auto", "query"])]
    pub once: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log file used by the full-screen view
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and effective settings, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Startup query handed to the session: `--auto` wins over `--query`
    pub fn startup_query(&self) -> Option<String> {
        if self.auto {
            Some("auto=true".to_string())
        } else {
            self.query.clone()
        }
    }
}
