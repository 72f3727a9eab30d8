//! Input contracts for page widgets
//!
//! Widgets that own keyboard focus (the nav menu, the contact form) decide
//! for themselves which keys they consume. The App routes a key to the
//! focused widget first and falls back to page-level handling when the
//! widget reports [`Handled::No`].
//!
//! ```text
//! KeyEvent
//!    │
//!    ▼
//! Modal (captures everything while open)
//!    │
//!    ▼
//! Focused widget (Interactive::handle_key)
//!    │ Handled::No
//!    ▼
//! Global shortcuts, then page scrolling / carousel arrows
//! ```

mod interactive;

pub use interactive::{Handled, Interactive};
