// Typing effect - types a phrase, holds it, deletes it, moves to the next
//
// Each step is scheduled relative to the previous step's due time, so a
// late tick catches up on every missed keystroke instead of slowing down.

use crate::carousel::Deadline;
use std::time::{Duration, Instant};

/// Delay before the first keystroke
pub const START_DELAY: Duration = Duration::from_millis(1500);
/// Time between typed characters
pub const TYPE_INTERVAL: Duration = Duration::from_millis(150);
/// Time between deleted characters
pub const DELETE_INTERVAL: Duration = Duration::from_millis(75);
/// How long a fully typed phrase stays on screen
pub const HOLD_DURATION: Duration = Duration::from_millis(2000);
/// Pause on an empty line before the next phrase
pub const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(500);
/// Half-period of the cursor blink
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    /// Characters of the current phrase on screen
    shown: usize,
    deleting: bool,
    next_step: Deadline,
    /// When the cursor appeared (None until the effect starts)
    started_at: Option<Instant>,
    start_at: Instant,
}

impl TypingEffect {
    /// Build the effect; None when there is nothing to type
    pub fn new<S: AsRef<str>>(phrases: &[S], now: Instant) -> Option<Self> {
        let phrases: Vec<Vec<char>> = phrases
            .iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .filter(|p| !p.is_empty())
            .collect();
        if phrases.is_empty() {
            return None;
        }

        let mut next_step = Deadline::unarmed();
        next_step.arm(now, START_DELAY);
        Some(Self {
            phrases,
            phrase: 0,
            shown: 0,
            deleting: false,
            next_step,
            started_at: None,
            start_at: now + START_DELAY,
        })
    }

    /// Currently visible text
    pub fn text(&self) -> String {
        self.phrases[self.phrase][..self.shown].iter().collect()
    }

    /// Index of the phrase being typed or deleted
    #[cfg(test)]
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    #[cfg(test)]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Whether the cursor bar is drawn at `now`
    pub fn cursor_visible(&self, now: Instant) -> bool {
        let Some(started) = self.started_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started).as_millis();
        (elapsed / CURSOR_BLINK.as_millis()) % 2 == 0
    }

    /// Run every step due at `now`; returns true if the text changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(at) = self.next_step.due_at() {
            if at > now {
                break;
            }
            self.next_step.cancel();
            if self.started_at.is_none() {
                self.started_at = Some(self.start_at);
            }
            self.step(at);
            changed = true;
        }
        changed
    }

    fn step(&mut self, at: Instant) {
        let len = self.phrases[self.phrase].len();

        if !self.deleting {
            self.shown += 1;
            if self.shown == len {
                // Hold, then the next step starts deleting
                self.deleting = true;
                self.next_step.arm(at, HOLD_DURATION);
            } else {
                self.next_step.arm(at, TYPE_INTERVAL);
            }
        } else {
            self.shown -= 1;
            if self.shown == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                self.next_step.arm(at, NEXT_PHRASE_DELAY);
            } else {
                self.next_step.arm(at, DELETE_INTERVAL);
            }
        }
    }
}
