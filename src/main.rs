// Folio - a portfolio page for the terminal
//
// Renders a single-page portfolio (hero, statistics, services, projects,
// testimonials, contact form) as a scrollable terminal UI.
//
// Architecture:
// - Carousel: two-phase testimonial slider driven by deadlines
// - Effects: hero typing loop and statistic count-ups
// - TUI (ratatui): page canvas, navigation, modal and form
// - Config/content: TOML files merged with env and built-in defaults

mod carousel;
mod cli;
mod config;
mod content;
mod effects;
mod logging;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, LogRotation};
use content::Content;
use logging::{LogBuffer, TuiLogLayer};
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    if cli::handle_command(cli.command.as_ref())? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env()?;
    let log_buffer = LogBuffer::new();

    // Keep the guard alive so buffered file logs flush on exit
    let _file_guard = init_tracing(&config, &log_buffer);

    let content_path = cli.content.as_deref().or(config.content_path.as_deref());
    let content = Content::load(content_path).context("Failed to load page content")?;
    tracing::debug!(
        projects = content.projects.len(),
        testimonials = content.testimonials.len(),
        "content loaded"
    );

    if config.enable_tui {
        tracing::info!("Starting TUI");
        if let Err(e) = tui::run_tui(content, config, log_buffer).await {
            tracing::error!("TUI error: {:?}", e);
            return Err(e);
        }
    } else {
        tracing::info!("TUI disabled, running page timers headless");
        run_headless(content, &config, log_buffer).await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Initialize tracing with conditional output
///
/// In TUI mode logs are captured to the in-memory buffer (writing to stdout
/// would garble the display); headless they go to stdout. File logging adds
/// a rolling JSON writer on top of either.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("folio={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = config
        .enable_tui
        .then(|| TuiLogLayer::new(log_buffer.clone()));
    let stdout_layer = (!config.enable_tui).then(tracing_subscriber::fmt::layer);

    let mut guard = None;
    let file_layer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };
                let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
                guard = Some(file_guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}

/// Drive the page's timers without a terminal until Ctrl+C, so carousel
/// transitions show up in the logs.
async fn run_headless(content: Content, config: &Config, log_buffer: LogBuffer) -> Result<()> {
    let mut app = App::new(content, config, log_buffer, Instant::now());
    let mut tick_interval =
        tokio::time::interval(Duration::from_millis(config.tick_rate_ms.max(1)));

    loop {
        tokio::select! {
            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl+C")?;
                break;
            }
        }
    }

    app.shutdown();
    Ok(())
}
