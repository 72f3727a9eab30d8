//! Feature flags configuration
//!
//! Feature flags for optional page effects (opt-out: default enabled).

use serde::Deserialize;

/// Feature flags for optional page effects (opt-out: default enabled)
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    /// Typing effect in the hero section
    pub typing: bool,

    /// Count-up animation for statistics
    pub counters: bool,

    /// Fade sections in as they scroll into view
    pub reveal: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            typing: true,
            counters: true,
            reveal: true,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub typing: Option<bool>,
    pub counters: Option<bool>,
    pub reveal: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            typing: file.typing.unwrap_or(true),
            counters: file.counters.unwrap_or(true),
            reveal: file.reveal.unwrap_or(true),
        }
    }
}
