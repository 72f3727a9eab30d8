// Tick-driven text effects
//
// Small state machines that the event loop advances with the current time:
// - Typing: types, pauses, deletes and cycles through phrases
// - Counter: counts a statistic up once its section is revealed

pub mod counter;
pub mod typing;

pub use counter::Counter;
pub use typing::TypingEffect;
