// Modal overlays
//
// Self-contained dialogs that handle their own input and return actions.
// App just holds Option<Modal>; input routing acts on the returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, nothing else to do
    None,
    /// Close the modal
    Close,
}

/// Available modal types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard and mouse reference
    Help,
    /// Portfolio entry detail, by index into the project list
    Project(usize),
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn project(index: usize) -> Self {
        Modal::Project(index)
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match (self, key) {
            (_, KeyCode::Esc | KeyCode::Char('q')) => ModalAction::Close,
            (Modal::Help, KeyCode::Char('?')) => ModalAction::Close,
            (Modal::Project(_), KeyCode::Enter) => ModalAction::Close,
            _ => ModalAction::None,
        }
    }
}
