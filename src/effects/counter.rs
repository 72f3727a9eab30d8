// Count-up animation for a statistic
//
// The value climbs in 100 equal increments, one every 20ms, and then sits
// on the target. Percentages (target of exactly 100) get a '%' suffix,
// everything else a '+'.

use std::time::{Duration, Instant};

/// Number of increments from zero to target
pub const STEPS: u32 = 100;
/// Time between increments
pub const STEP_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    target: u32,
    started_at: Option<Instant>,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            started_at: None,
        }
    }

    /// Begin counting; later calls are ignored so it only ever runs once
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    #[cfg(test)]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Displayed value at `now`
    pub fn value(&self, now: Instant) -> u32 {
        let Some(started) = self.started_at else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(started);
        let steps = (elapsed.as_millis() / STEP_INTERVAL.as_millis()).min(STEPS as u128) as u32;
        // Integer form of floor(target / STEPS * steps)
        let current = u64::from(self.target) * u64::from(steps) / u64::from(STEPS);
        (current as u32).min(self.target)
    }

    #[cfg(test)]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.value(now) >= self.target && self.is_started()
    }

    /// Value with its suffix, e.g. "150+" or "100%"
    pub fn label(&self, now: Instant) -> String {
        self.format(self.value(now))
    }

    /// Label of the finished count, for when the animation is switched off
    pub fn final_label(&self) -> String {
        self.format(self.target)
    }

    fn format(&self, value: u32) -> String {
        let suffix = if self.target == 100 { "%" } else { "+" };
        format!("{}{}", value, suffix)
    }
}
