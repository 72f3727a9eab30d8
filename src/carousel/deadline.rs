// Single-shot deadline - the one scheduling primitive the carousel uses
//
// Both the auto-advance timer and the transition phases are expressed as a
// Deadline that the owner polls with the current time. Nothing runs on its
// own: the event loop calls `tick(now)` and due deadlines fire there.

use std::time::{Duration, Instant};

/// An optional point in time at which something should happen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// A deadline that is not scheduled
    pub const fn unarmed() -> Self {
        Self { at: None }
    }

    /// Schedule (or reschedule) for `now + after`
    ///
    /// Re-arming replaces the previous instant, so a deadline can never be
    /// pending twice.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.at = Some(now + after);
    }

    /// Drop the pending instant, if any
    pub fn cancel(&mut self) {
        self.at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// When the deadline fires, if armed
    pub fn due_at(&self) -> Option<Instant> {
        self.at
    }

    /// Returns true exactly once when `now` has reached the deadline,
    /// disarming it in the process
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        self.take_due(now).is_some()
    }

    /// Like `fire_if_due`, but hands back the instant the deadline was set
    /// for, so follow-up work can be scheduled from it rather than from a
    /// late `now`
    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        match self.at {
            Some(at) if now >= at => {
                self.at = None;
                Some(at)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_due() {
        let t0 = Instant::now();
        let mut deadline = Deadline::unarmed();
        deadline.arm(t0, Duration::from_millis(100));

        assert!(!deadline.fire_if_due(t0 + Duration::from_millis(99)));
        assert!(deadline.fire_if_due(t0 + Duration::from_millis(100)));
        assert!(!deadline.is_armed());
        assert!(!deadline.fire_if_due(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn rearm_replaces_pending_instant() {
        let t0 = Instant::now();
        let mut deadline = Deadline::unarmed();
        deadline.arm(t0, Duration::from_millis(100));
        deadline.arm(t0, Duration::from_millis(300));

        assert_eq!(deadline.due_at(), Some(t0 + Duration::from_millis(300)));
        assert!(!deadline.fire_if_due(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn cancel_disarms() {
        let t0 = Instant::now();
        let mut deadline = Deadline::unarmed();
        deadline.arm(t0, Duration::ZERO);
        deadline.cancel();

        assert!(!deadline.fire_if_due(t0 + Duration::from_secs(1)));
    }
}
