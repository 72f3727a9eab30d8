//! Carousel configuration
//!
//! Only the user-facing tunables live here. Transition timings are fixed
//! constants of the controller.

use crate::carousel::{CarouselSettings, AUTO_ADVANCE_PERIOD, SWIPE_THRESHOLD};
use serde::Deserialize;
use std::time::Duration;

/// Smallest accepted auto-advance period; anything shorter would start a
/// new slide before the previous transition finished
const MIN_AUTO_ADVANCE_MS: u64 = 1000;

/// Carousel settings
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Auto-advance through testimonials
    pub autoplay: bool,
    /// Auto-advance period in milliseconds
    pub auto_advance_ms: u64,
    /// Minimum horizontal swipe distance in pixels
    pub swipe_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            auto_advance_ms: AUTO_ADVANCE_PERIOD.as_millis() as u64,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

/// Carousel settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileCarousel {
    pub autoplay: Option<bool>,
    pub auto_advance_ms: Option<u64>,
    pub swipe_threshold: Option<f32>,
}

impl CarouselConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileCarousel>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            autoplay: file.autoplay.unwrap_or(defaults.autoplay),
            auto_advance_ms: file
                .auto_advance_ms
                .map(|ms| ms.max(MIN_AUTO_ADVANCE_MS))
                .unwrap_or(defaults.auto_advance_ms),
            swipe_threshold: file
                .swipe_threshold
                .filter(|t| t.is_finite() && *t >= 0.0)
                .unwrap_or(defaults.swipe_threshold),
        }
    }

    /// Controller settings derived from this config
    pub fn settings(&self) -> CarouselSettings {
        CarouselSettings {
            autoplay: self.autoplay,
            period: Duration::from_millis(self.auto_advance_ms),
            swipe_threshold: self.swipe_threshold,
        }
    }
}
