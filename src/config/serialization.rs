//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        let content_path = match &self.content_path {
            Some(path) => format!("content_path = {:?}", path.display().to_string()),
            None => "# content_path = \"~/portfolio.toml\"".to_string(),
        };

        format!(
            r#"# folio configuration

# Theme: ember, midnight, paper, nord
theme = "{theme}"

# Redraw and timer resolution in milliseconds (10-200)
tick_rate_ms = {tick}

# Page content (testimonials, projects, services...). Built-in when unset.
{content_path}

# Optional page effects
[features]
typing = {typing}
counters = {counters}
reveal = {reveal}

# Testimonial carousel
[carousel]
autoplay = {autoplay}
auto_advance_ms = {auto_ms}
# Minimum horizontal drag, in pixels (one terminal cell = 8px wide)
swipe_threshold = {swipe:.1}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            tick = self.tick_rate_ms,
            content_path = content_path,
            typing = self.features.typing,
            counters = self.features.counters,
            reveal = self.features.reveal,
            autoplay = self.carousel.autoplay,
            auto_ms = self.carousel.auto_advance_ms,
            swipe = self.carousel.swipe_threshold,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
