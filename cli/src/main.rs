//! CLI entrypoint for quotebox
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quotebox_application::{QuoteSessionController, SharedSurface};
use quotebox_infrastructure::{
    ConfigLoader, FileConfig, HttpQuoteSource, LogTarget, default_log_path, init_logging,
};
use quotebox_presentation::{Cli, ConsoleFormatter, ConsoleSurface, QuoteTuiApp};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("invalid configuration")?;

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
        println!();
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    if cli.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    // === Logging ===
    let log_target = if cli.once {
        LogTarget::Stderr
    } else {
        match log_file(&cli, &config) {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Stderr,
        }
    };
    let _log_guard = init_logging(cli.verbose, &log_target).context("failed to set up logging")?;

    info!(url = %config.source.url, "Starting quotebox");

    // === Dependency Injection ===
    let source = Arc::new(
        HttpQuoteSource::new(
            config.source.url.clone(),
            &config.source.user_agent,
            config.fetch_timeout(),
        )
        .context("failed to build HTTP client")?,
    );
    let session_config = config.session_config();

    if cli.once {
        let surface = if std::io::stderr().is_terminal() {
            ConsoleSurface::new()
        } else {
            ConsoleSurface::new().without_spinner()
        };
        let surface = Arc::new(surface);
        let controller = QuoteSessionController::new(source, Arc::clone(&surface), session_config);

        let outcome = controller.fetch_quote().await;
        let snapshot = surface.snapshot();
        match outcome {
            Ok(_) => {
                println!("{}", ConsoleFormatter::format_quote(&snapshot));
                return Ok(());
            }
            Err(_) => {
                eprintln!("{}", ConsoleFormatter::format_status(&snapshot.status));
                bail!("no quote fetched");
            }
        }
    }

    let surface = Arc::new(SharedSurface::new());
    let controller = QuoteSessionController::new(source, Arc::clone(&surface), session_config);
    let app = QuoteTuiApp::new(controller, surface);
    app.run(cli.startup_query().as_deref()).await?;

    Ok(())
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.source.url = url.clone();
    }
    if let Some(timeout) = cli.timeout_ms {
        config.source.timeout_ms = timeout;
    }
    if let Some(interval) = cli.interval_ms {
        config.session.auto_interval_ms = interval;
    }
    if let Some(capacity) = cli.cache_capacity {
        config.session.cache_capacity = capacity;
    }
}

fn log_file(cli: &Cli, config: &FileConfig) -> Option<PathBuf> {
    cli.log_file
        .clone()
        .or_else(|| config.display.log_file.as_ref().map(PathBuf::from))
        .or_else(default_log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "quotebox",
            "--url",
            "http://localhost:1/q",
            "--timeout-ms",
            "100",
            "--interval-ms",
            "200",
            "--cache-capacity",
            "4",
        ]);
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.source.url, "http://localhost:1/q");
        assert_eq!(config.source.timeout_ms, 100);
        assert_eq!(config.session.auto_interval_ms, 200);
        assert_eq!(config.session.cache_capacity, 4);
    }

    #[test]
    fn test_log_file_precedence() {
        let cli = Cli::parse_from(["quotebox", "--log-file", "/tmp/a.log"]);
        let mut config = FileConfig::default();
        config.display.log_file = Some("/tmp/b.log".into());
        assert_eq!(log_file(&cli, &config), Some(PathBuf::from("/tmp/a.log")));

        let cli = Cli::parse_from(["quotebox"]);
        assert_eq!(log_file(&cli, &config), Some(PathBuf::from("/tmp/b.log")));
    }
}
