//! Interactive trait for widgets that handle keyboard input

use crossterm::event::KeyEvent;
use std::time::Instant;

/// Result of handling a key event
///
/// Tells the App whether the widget consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the widget
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Widgets that take keyboard focus
pub trait Interactive {
    /// Handle a key event at `now`
    ///
    /// Returns `Handled::Yes` if the widget consumed the event,
    /// `Handled::No` if it should bubble up to the App.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Handled;

    /// Keybind hints for the status bar while this widget has focus
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
