//! Configuration for the showcase
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod carousel;
mod features;
mod observability;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use carousel::{CarouselConfig, FileCarousel};
pub use features::{Features, FileFeatures};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bounds for the redraw tick; below 10ms we spin, above 200ms the
/// typing effect visibly stutters
const MIN_TICK_MS: u64 = 10;
const MAX_TICK_MS: u64 = 200;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme name: "ember", "midnight", "paper", "nord"
    pub theme: String,

    /// Redraw / timer resolution in milliseconds
    pub tick_rate_ms: u64,

    /// Optional content file replacing the built-in page content
    pub content_path: Option<PathBuf>,

    /// Whether to enable the TUI (can be disabled for headless mode)
    pub enable_tui: bool,

    /// Feature flags for optional effects
    pub features: Features,

    /// Testimonial carousel settings
    pub carousel: CarouselConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "ember".to_string(),
            tick_rate_ms: 50,
            content_path: None,
            enable_tui: true,
            features: Features::default(),
            carousel: CarouselConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub tick_rate_ms: Option<u64>,
    pub content_path: Option<String>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [carousel] section
    pub carousel: Option<FileCarousel>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read
    /// or parsed is an error: a broken config should fail fast instead of
    /// silently falling back while the user debugs the wrong thing.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).with_context(|| {
                format!(
                    "Failed to parse config file {} (check quotes, true/false values and section names)",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources<F>(file: FileConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("FOLIO_THEME").or(file.theme).unwrap_or(defaults.theme);

        // Tick rate: file > default, clamped to a sane range
        let tick_rate_ms = file
            .tick_rate_ms
            .unwrap_or(defaults.tick_rate_ms)
            .clamp(MIN_TICK_MS, MAX_TICK_MS);

        // Content file: env > file > built-in
        let content_path = env("FOLIO_CONTENT")
            .or(file.content_path)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("FOLIO_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        Self {
            theme,
            tick_rate_ms,
            content_path,
            enable_tui,
            features: Features::from_file(file.features),
            carousel: CarouselConfig::from_file(file.carousel),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
