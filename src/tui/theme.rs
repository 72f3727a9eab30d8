// Theme system for the TUI
//
// Color themes that can be switched at runtime (press 't').
// Each theme defines colors for every page element.

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Ember,
    Midnight,
    Paper,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Ember,
            ThemeKind::Midnight,
            ThemeKind::Paper,
            ThemeKind::Nord,
        ]
    }

    /// Look a theme up by (case-insensitive) name, defaulting to Ember
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Ember => "ember",
            ThemeKind::Midnight => "midnight",
            ThemeKind::Paper => "paper",
            ThemeKind::Nord => "nord",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Ember => Theme::ember(),
            ThemeKind::Midnight => Theme::midnight(),
            ThemeKind::Paper => Theme::paper(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all page colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,

    // Brand
    pub accent: Color,
    pub heading: Color,

    // Navigation
    pub nav_link: Color,
    pub nav_active: Color,
    pub nav_scrolled_bg: Color,

    // Interaction
    pub highlight: Color,
    pub selected_bg: Color,

    // Feedback
    pub success: Color,
    pub error: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ember()
    }
}

impl Theme {
    /// Dark background with the signature orange accent
    pub fn ember() -> Self {
        Self {
            kind: ThemeKind::Ember,
            background: Color::Rgb(17, 17, 20),
            foreground: Color::Rgb(235, 235, 235),
            muted: Color::Rgb(120, 120, 128),
            border: Color::Rgb(60, 60, 68),
            border_type: BorderType::Rounded,

            accent: Color::Rgb(255, 107, 53),
            heading: Color::White,

            nav_link: Color::White,
            nav_active: Color::Rgb(251, 146, 60),
            nav_scrolled_bg: Color::Rgb(30, 30, 36),

            highlight: Color::Rgb(255, 107, 53),
            selected_bg: Color::Rgb(45, 45, 52),

            success: Color::Rgb(34, 197, 94),
            error: Color::Rgb(239, 68, 68),

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    /// Terminal-native dark palette
    pub fn midnight() -> Self {
        Self {
            kind: ThemeKind::Midnight,
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_type: BorderType::Plain,

            accent: Color::Cyan,
            heading: Color::LightCyan,

            nav_link: Color::White,
            nav_active: Color::Cyan,
            nav_scrolled_bg: Color::Black,

            highlight: Color::Yellow,
            selected_bg: Color::DarkGray,

            success: Color::Green,
            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    /// Light theme
    pub fn paper() -> Self {
        Self {
            kind: ThemeKind::Paper,
            background: Color::Rgb(250, 249, 246),
            foreground: Color::Rgb(31, 41, 55),
            muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(209, 213, 219),
            border_type: BorderType::Rounded,

            accent: Color::Rgb(234, 88, 12),
            heading: Color::Rgb(17, 24, 39),

            nav_link: Color::Rgb(31, 41, 55),
            nav_active: Color::Rgb(234, 88, 12),
            nav_scrolled_bg: Color::Rgb(243, 244, 246),

            highlight: Color::Rgb(234, 88, 12),
            selected_bg: Color::Rgb(229, 231, 235),

            success: Color::Rgb(22, 163, 74),
            error: Color::Rgb(220, 38, 38),

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            kind: ThemeKind::Nord,
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            muted: Color::Rgb(129, 161, 193),
            border: Color::Rgb(76, 86, 106),
            border_type: BorderType::Rounded,

            accent: Color::Rgb(136, 192, 208),
            heading: Color::Rgb(236, 239, 244),

            nav_link: Color::Rgb(216, 222, 233),
            nav_active: Color::Rgb(136, 192, 208),
            nav_scrolled_bg: Color::Rgb(59, 66, 82),

            highlight: Color::Rgb(235, 203, 139),
            selected_bg: Color::Rgb(67, 76, 94),

            success: Color::Rgb(163, 190, 140),
            error: Color::Rgb(191, 97, 106),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn log_style(&self, level: LogLevel) -> Style {
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug | LogLevel::Trace => self.log_debug,
        };
        Style::default().fg(color)
    }
}
