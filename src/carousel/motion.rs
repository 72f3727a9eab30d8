// Slide poses and eased motion between them
//
// A pose is where a slide sits horizontally (percent of the viewport width,
// negative = left) and how opaque it is. A motion interpolates between two
// poses over a duration; a zero duration is an instant jump.

use std::time::{Duration, Instant};

/// Visual placement of one slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Horizontal offset in percent of viewport width (-100.0..=100.0)
    pub offset: f32,
    /// 0.0 = invisible, 1.0 = fully visible
    pub opacity: f32,
}

impl Pose {
    /// Centered and fully visible
    pub const SHOWN: Pose = Pose {
        offset: 0.0,
        opacity: 1.0,
    };

    /// Invisible, parked off-screen on the right
    pub const PARKED_RIGHT: Pose = Pose {
        offset: 100.0,
        opacity: 0.0,
    };

    /// Invisible at `offset`
    pub fn hidden_at(offset: f32) -> Self {
        Self {
            offset,
            opacity: 0.0,
        }
    }

    fn lerp(self, to: Pose, t: f32) -> Pose {
        Pose {
            offset: self.offset + (to.offset - self.offset) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }
}

/// Ease-in-out cubic, close to `cubic-bezier(0.4, 0, 0.2, 1)` for our purposes
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Interpolation from one pose to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    from: Pose,
    to: Pose,
    started_at: Instant,
    duration: Duration,
}

impl Motion {
    /// A motion that is already at rest
    pub fn still(pose: Pose, now: Instant) -> Self {
        Self {
            from: pose,
            to: pose,
            started_at: now,
            duration: Duration::ZERO,
        }
    }

    /// Start moving toward `to`, beginning wherever this motion is at `now`
    pub fn retarget(&self, to: Pose, now: Instant, duration: Duration) -> Self {
        Self {
            from: self.sample(now),
            to,
            started_at: now,
            duration,
        }
    }

    /// Linear progress in 0.0..=1.0
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased pose at `now`
    pub fn sample(&self, now: Instant) -> Pose {
        self.from.lerp(self.to, ease_in_out(self.progress(now)))
    }
}
