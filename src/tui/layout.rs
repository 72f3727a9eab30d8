//! Responsive breakpoints for the page layout.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

/// Width below which the nav links collapse into a toggleable menu
pub const COMPACT_BELOW: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: collapsed nav, terse status bar
    Compact,
    /// 60-99 cols: inline nav
    Normal,
    /// 100+ cols: inline nav, statistics on one row
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            w if w < COMPACT_BELOW => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Statistics shown side by side
    pub fn stat_columns(&self) -> u16 {
        match self {
            Breakpoint::Compact | Breakpoint::Normal => 2,
            Breakpoint::Wide => 4,
        }
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}
