// Collapsible navigation menu for narrow terminals
//
// Below the compact breakpoint the nav links fold into a dropdown opened
// with 'm' (or a click on the toggle). The menu closes when an entry is
// chosen, on Esc, on a click anywhere outside it, and when the terminal
// grows back past the breakpoint.

use super::layout::COMPACT_BELOW;
use super::page::Section;
use super::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    open: bool,
    selected: usize,
    chosen: Option<Section>,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// State advertised on the toggle button
    pub fn is_expanded(&self) -> bool {
        self.open
    }

    /// State advertised on the menu itself
    pub fn is_hidden(&self) -> bool {
        !self.open
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "nav menu toggled");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick an entry: remembers it for the App and folds the menu
    pub fn choose(&mut self, section: Section) {
        self.chosen = Some(section);
        self.close();
    }

    /// The entry chosen since the last call, if any
    pub fn take_choice(&mut self) -> Option<Section> {
        self.chosen.take()
    }

    /// Widening past the breakpoint shows the inline links again
    pub fn on_resize(&mut self, width: u16) {
        if width >= COMPACT_BELOW {
            self.close();
        }
    }
}

impl Interactive for NavMenu {
    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> Handled {
        if !self.open {
            return Handled::No;
        }

        let last = Section::ALL.len() - 1;
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => {
                self.close();
                Handled::Yes
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.checked_sub(1).unwrap_or(last);
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = if self.selected >= last {
                    0
                } else {
                    self.selected + 1
                };
                Handled::Yes
            }
            KeyCode::Enter => {
                self.choose(Section::ALL[self.selected]);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:choose  Enter:go  Esc:close")
    }
}
