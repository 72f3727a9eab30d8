//! Testimonial carousel controller
//!
//! Keeps exactly one of N slides active, animates between them and
//! auto-advances on a fixed period unless paused by user interaction.
//!
//! # State machine
//!
//! ```text
//!            request(j, dir)              entry delay               transition duration
//!  Idle(i) ─────────────────▶ AnimatingOut ───────────▶ AnimatingIn ────────────────────▶ Idle(j)
//!     ▲                        (i → j)                   (i → j)                            │
//!     └─────────────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every phase change is driven by one [`Deadline`] polled from [`Carousel::tick`].
//! While a transition is in flight every navigation request is ignored, so
//! rapid input can neither drop nor duplicate a transition.
//!
//! The controller never reads the clock itself: every operation takes the
//! current `Instant`, which keeps it deterministic under test.

mod deadline;
mod gesture;
mod motion;

pub use deadline::Deadline;
pub use gesture::{GestureTracker, Point, SwipeIntent, SWIPE_THRESHOLD};
pub use motion::{Motion, Pose};

use std::time::{Duration, Instant};

/// Default auto-advance period
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(5000);

/// Delay between the outgoing slide leaving and the incoming slide starting
pub const ENTRY_DELAY: Duration = Duration::from_millis(100);

/// Length of a slide's slide-in / slide-out animation
pub const TRANSITION_DURATION: Duration = Duration::from_millis(800);

/// Length of an indicator's highlight animation
pub const INDICATOR_TRANSITION: Duration = Duration::from_millis(300);

/// Which way the slides travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Incoming slide enters from the right, outgoing exits left
    Forward,
    /// Incoming slide enters from the left, outgoing exits right
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward
    fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Where the controller is in its state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resting on the current slide
    Idle,
    /// Outgoing slide is leaving, incoming slide is staged off-screen
    AnimatingOut {
        from: usize,
        to: usize,
        direction: Direction,
    },
    /// Incoming slide is moving into place
    AnimatingIn {
        from: usize,
        to: usize,
        direction: Direction,
    },
}

/// Status marker for one slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub active: bool,
    /// When `active` last flipped (drives the highlight animation)
    pub changed_at: Instant,
}

impl Indicator {
    /// Highlight strength in 0.0..=1.0 at `now`
    pub fn highlight(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.changed_at);
        let t = (elapsed.as_secs_f32() / INDICATOR_TRANSITION.as_secs_f32()).min(1.0);
        if self.active {
            t
        } else {
            1.0 - t
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Slide {
    active: bool,
    motion: Motion,
}

/// Tunables that are allowed to come from configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    /// Whether the auto-advance timer runs at all
    pub autoplay: bool,
    /// Auto-advance period
    pub period: Duration,
    /// Minimum horizontal swipe travel, in pixels
    pub swipe_threshold: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            period: AUTO_ADVANCE_PERIOD,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

/// The carousel controller
///
/// Construct with [`Carousel::mount`]; an empty carousel is never built, so
/// callers hold an `Option<Carousel>` and an absent carousel is simply inert.
#[derive(Debug)]
pub struct Carousel {
    slides: Vec<Slide>,
    indicators: Vec<Indicator>,
    current: usize,
    phase: Phase,
    /// Next phase change of an in-flight transition
    phase_deadline: Deadline,
    /// Next auto-advance
    auto_advance: Deadline,
    settings: CarouselSettings,
}

impl Carousel {
    /// Build a carousel over `slides` slides with `indicators` indicators
    ///
    /// Returns None when there is nothing to show or the two collections
    /// disagree in length. The first slide is shown and auto-advance starts.
    pub fn mount(
        slides: usize,
        indicators: usize,
        settings: CarouselSettings,
        now: Instant,
    ) -> Option<Self> {
        if slides == 0 {
            tracing::debug!("Carousel has no slides, staying inert");
            return None;
        }
        if slides != indicators {
            tracing::warn!(
                "Carousel has {} slides but {} indicators, staying inert",
                slides,
                indicators
            );
            return None;
        }

        let mut carousel = Self {
            slides: (0..slides)
                .map(|i| Slide {
                    active: i == 0,
                    motion: Motion::still(
                        if i == 0 { Pose::SHOWN } else { Pose::PARKED_RIGHT },
                        now,
                    ),
                })
                .collect(),
            indicators: (0..indicators)
                .map(|i| Indicator {
                    active: i == 0,
                    changed_at: now,
                })
                .collect(),
            current: 0,
            phase: Phase::Idle,
            phase_deadline: Deadline::unarmed(),
            auto_advance: Deadline::unarmed(),
            settings,
        };
        carousel.resume(now);

        tracing::debug!("Carousel mounted with {} slides", slides);
        Some(carousel)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    #[cfg(test)]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Index of the visible (or incoming) slide
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Whether an auto-advance is scheduled
    pub fn is_auto_advance_active(&self) -> bool {
        self.auto_advance.is_armed()
    }

    /// When the next auto-advance fires
    pub fn next_auto_advance(&self) -> Option<Instant> {
        self.auto_advance.due_at()
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Whether slide `index` carries the active marker
    #[cfg(test)]
    pub fn is_slide_active(&self, index: usize) -> bool {
        self.slides.get(index).is_some_and(|s| s.active)
    }

    /// Where slide `index` is drawn at `now`
    pub fn slide_pose(&self, index: usize, now: Instant) -> Option<Pose> {
        self.slides.get(index).map(|s| s.motion.sample(now))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Start a transition to `to`
    ///
    /// Ignored while a transition is in flight, when `to` is the current
    /// slide, or when `to` is out of range. Returns whether it was accepted.
    fn request(&mut self, to: usize, direction: Direction, now: Instant) -> bool {
        if self.is_transitioning() || to == self.current || to >= self.slides.len() {
            return false;
        }

        let from = self.current;
        let sign = direction.sign();

        // Stage the incoming slide on the side it enters from
        let incoming = &mut self.slides[to];
        incoming.motion = Motion::still(Pose::hidden_at(100.0 * sign), now);

        // Send the outgoing slide halfway out the opposite side
        let outgoing = &mut self.slides[from];
        outgoing.motion = outgoing.motion.retarget(
            Pose::hidden_at(-50.0 * sign),
            now,
            TRANSITION_DURATION,
        );
        outgoing.active = false;

        self.current = to;
        self.phase = Phase::AnimatingOut {
            from,
            to,
            direction,
        };
        self.phase_deadline.arm(now, ENTRY_DELAY);
        self.refresh_indicators(now);

        tracing::debug!("Carousel transition {} -> {} ({:?})", from, to, direction);
        true
    }

    /// Mark the indicator of the current slide, and only that one, active
    fn refresh_indicators(&mut self, now: Instant) {
        let current = self.current;
        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            let active = i == current;
            if indicator.active != active {
                indicator.active = active;
                indicator.changed_at = now;
            }
        }
    }

    /// Jump to `index`, travelling forward if it lies after the current slide
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        let direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.go_to_with(index, direction, now)
    }

    /// Jump to `index` with an explicit travel direction
    pub fn go_to_with(&mut self, index: usize, direction: Direction, now: Instant) -> bool {
        self.request(index, direction, now)
    }

    /// Show the next slide, wrapping to the first
    pub fn advance(&mut self, now: Instant) -> bool {
        let next = (self.current + 1) % self.slides.len();
        self.request(next, Direction::Forward, now)
    }

    /// Show the previous slide, wrapping to the last
    pub fn retreat(&mut self, now: Instant) -> bool {
        let n = self.slides.len();
        let prev = (self.current + n - 1) % n;
        self.request(prev, Direction::Backward, now)
    }

    /// Run a user-initiated action with auto-advance suspended around it
    ///
    /// The timer restarts afterwards, so auto-advance never fires right
    /// after the user navigated.
    pub fn interact<F>(&mut self, now: Instant, action: F) -> bool
    where
        F: FnOnce(&mut Self, Instant) -> bool,
    {
        self.pause();
        let accepted = action(self, now);
        self.resume(now);
        accepted
    }

    /// Act on a recognized swipe
    pub fn swipe(&mut self, intent: SwipeIntent, now: Instant) -> bool {
        self.interact(now, |c, now| match intent {
            SwipeIntent::Advance => c.advance(now),
            SwipeIntent::Retreat => c.retreat(now),
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Auto-advance
    // ─────────────────────────────────────────────────────────────────────

    /// Cancel the auto-advance timer (in-flight transitions still complete)
    pub fn pause(&mut self) {
        if self.auto_advance.is_armed() {
            tracing::trace!("Carousel auto-advance paused");
        }
        self.auto_advance.cancel();
    }

    /// Schedule the auto-advance timer if it is not already scheduled
    pub fn resume(&mut self, now: Instant) {
        if self.settings.autoplay && !self.auto_advance.is_armed() {
            self.auto_advance.arm(now, self.settings.period);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Time
    // ─────────────────────────────────────────────────────────────────────

    /// Fire every deadline that is due at `now`
    ///
    /// Returns true if the visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        // Each phase starts when the previous one was due, so a coarse
        // tick may run both phases at once
        while let Some(due) = self.phase_deadline.take_due(now) {
            self.step_phase(due);
            changed = true;
        }

        if self.auto_advance.fire_if_due(now) {
            // Interval semantics: the next period starts now either way
            self.auto_advance.arm(now, self.settings.period);
            if !self.is_transitioning() {
                changed |= self.advance(now);
            }
        }

        changed
    }

    fn step_phase(&mut self, at: Instant) {
        match self.phase {
            Phase::Idle => {}
            Phase::AnimatingOut {
                from,
                to,
                direction,
            } => {
                let incoming = &mut self.slides[to];
                incoming.motion = incoming
                    .motion
                    .retarget(Pose::SHOWN, at, TRANSITION_DURATION);
                incoming.active = true;

                self.phase = Phase::AnimatingIn {
                    from,
                    to,
                    direction,
                };
                self.phase_deadline.arm(at, TRANSITION_DURATION);
            }
            Phase::AnimatingIn {
                from,
                to,
                direction,
            } => {
                // Park the outgoing slide fully off-screen on its exit side
                let outgoing = &mut self.slides[from];
                outgoing.motion = Motion::still(Pose::hidden_at(-100.0 * direction.sign()), at);

                self.phase = Phase::Idle;
                tracing::debug!("Carousel settled on slide {}", to);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Re-apply resting poses after the viewport changed size
    ///
    /// Slides taking part in an in-flight transition keep animating.
    /// Safe to call any number of times.
    pub fn relayout(&mut self, now: Instant) {
        let busy = match self.phase {
            Phase::Idle => None,
            Phase::AnimatingOut { from, to, .. } | Phase::AnimatingIn { from, to, .. } => {
                Some((from, to))
            }
        };

        for (i, slide) in self.slides.iter_mut().enumerate() {
            if busy.is_some_and(|(from, to)| i == from || i == to) {
                continue;
            }
            let pose = if i == self.current {
                Pose::SHOWN
            } else {
                Pose::PARKED_RIGHT
            };
            slide.motion = Motion::still(pose, now);
            slide.active = i == self.current;
        }
        self.refresh_indicators(now);
    }

    /// Stop all timers before the carousel goes away
    pub fn destroy(&mut self) {
        self.pause();
        tracing::debug!("Carousel destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn mount(n: usize, t0: Instant) -> Carousel {
        Carousel::mount(n, n, CarouselSettings::default(), t0).expect("non-empty carousel")
    }

    /// Let a transition started at `at` run to completion
    fn settle(c: &mut Carousel, at: Instant) -> Instant {
        let done = at + ENTRY_DELAY + TRANSITION_DURATION;
        c.tick(at + ENTRY_DELAY);
        c.tick(done);
        done
    }

    fn active_slides(c: &Carousel) -> usize {
        (0..c.slide_count()).filter(|&i| c.is_slide_active(i)).count()
    }

    fn active_indicators(c: &Carousel) -> Vec<usize> {
        c.indicators()
            .iter()
            .enumerate()
            .filter(|(_, ind)| ind.active)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn empty_or_mismatched_collections_stay_inert() {
        let t0 = Instant::now();
        assert!(Carousel::mount(0, 0, CarouselSettings::default(), t0).is_none());
        assert!(Carousel::mount(3, 2, CarouselSettings::default(), t0).is_none());
    }

    #[test]
    fn mount_shows_first_slide_and_schedules_auto_advance() {
        let t0 = Instant::now();
        let c = mount(3, t0);

        assert_eq!(c.current_index(), 0);
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.is_slide_active(0));
        assert_eq!(active_indicators(&c), vec![0]);
        assert_eq!(c.next_auto_advance(), Some(t0 + AUTO_ADVANCE_PERIOD));
        assert_eq!(c.slide_pose(0, t0), Some(Pose::SHOWN));
        assert_eq!(c.slide_pose(1, t0), Some(Pose::PARKED_RIGHT));
    }

    #[test]
    fn go_to_later_index_travels_forward_with_optimistic_indicator() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);

        assert!(c.go_to(2, t0));
        assert_eq!(c.current_index(), 2);
        assert_eq!(
            c.phase(),
            Phase::AnimatingOut {
                from: 0,
                to: 2,
                direction: Direction::Forward
            }
        );
        // Indicator flips on acceptance, before any animation completes
        assert_eq!(active_indicators(&c), vec![2]);
        // Incoming slide staged on the right
        assert_eq!(c.slide_pose(2, t0), Some(Pose::hidden_at(100.0)));

        let done = settle(&mut c, t0);
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.is_slide_active(2));
        assert_eq!(active_slides(&c), 1);
        assert_eq!(c.slide_pose(2, done), Some(Pose::SHOWN));
        // Outgoing slide parked on the left (its exit side)
        assert_eq!(c.slide_pose(0, done), Some(Pose::hidden_at(-100.0)));
    }

    #[test]
    fn go_to_earlier_index_travels_backward() {
        let t0 = Instant::now();
        let mut c = mount(4, t0);
        c.go_to(3, t0);
        let t1 = settle(&mut c, t0);

        assert!(c.go_to(1, t1));
        assert_eq!(
            c.phase(),
            Phase::AnimatingOut {
                from: 3,
                to: 1,
                direction: Direction::Backward
            }
        );
        assert_eq!(c.slide_pose(1, t1), Some(Pose::hidden_at(-100.0)));
        let t2 = settle(&mut c, t1);
        assert_eq!(c.slide_pose(3, t2), Some(Pose::hidden_at(100.0)));
    }

    #[test]
    fn explicit_direction_overrides_index_comparison() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);
        assert!(c.go_to_with(2, Direction::Backward, t0));
        assert_eq!(
            c.phase(),
            Phase::AnimatingOut {
                from: 0,
                to: 2,
                direction: Direction::Backward
            }
        );
    }

    #[test]
    fn invalid_requests_are_ignored() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);

        assert!(!c.go_to(0, t0), "same index");
        assert!(!c.go_to(3, t0), "out of range");
        assert!(!c.go_to(usize::MAX, t0), "far out of range");
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn requests_during_transition_change_nothing() {
        let t0 = Instant::now();
        let mut c = mount(5, t0);
        c.advance(t0);

        let deadline = c.next_auto_advance();
        let indicators = active_indicators(&c);
        let mid = t0 + ms(50);

        assert!(!c.go_to(3, mid));
        assert!(!c.advance(mid));
        assert!(!c.retreat(mid));

        // Still locked in the second phase
        c.tick(t0 + ENTRY_DELAY);
        let late = t0 + ms(500);
        assert!(!c.advance(late));
        assert!(!c.go_to(4, late));

        assert_eq!(c.current_index(), 1);
        assert_eq!(c.next_auto_advance(), deadline);
        assert_eq!(active_indicators(&c), indicators);
        assert!(matches!(c.phase(), Phase::AnimatingIn { from: 0, to: 1, .. }));
    }

    #[test]
    fn advancing_n_times_is_cyclic() {
        let t0 = Instant::now();
        let n = 4;
        let mut c = mount(n, t0);

        let mut now = t0;
        for _ in 0..n {
            assert!(c.advance(now));
            now = settle(&mut c, now);
        }
        assert_eq!(c.current_index(), 0);
        assert_eq!(active_slides(&c), 1);
    }

    #[test]
    fn retreat_wraps_to_last_slide() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);
        assert!(c.retreat(t0));
        assert_eq!(c.current_index(), 2);
        assert!(matches!(
            c.phase(),
            Phase::AnimatingOut {
                direction: Direction::Backward,
                ..
            }
        ));
    }

    #[test]
    fn single_slide_never_transitions() {
        let t0 = Instant::now();
        let mut c = mount(1, t0);
        assert!(!c.advance(t0));
        assert!(!c.retreat(t0));
        assert!(!c.tick(t0 + AUTO_ADVANCE_PERIOD));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn index_stays_in_range_under_mixed_input() {
        let t0 = Instant::now();
        let n = 5;
        let mut c = mount(n, t0);

        // Deterministic pseudo-random sequence of targets and instants
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut now = t0;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            now += ms(seed % 400);
            match seed % 4 {
                0 => {
                    c.go_to((seed as usize >> 8) % (n + 2), now);
                }
                1 => {
                    c.advance(now);
                }
                2 => {
                    c.retreat(now);
                }
                _ => {
                    c.tick(now);
                }
            }
            assert!(c.current_index() < n);
            assert_eq!(active_indicators(&c), vec![c.current_index()]);
            if !c.is_transitioning() {
                assert_eq!(active_slides(&c), 1);
                assert!(c.is_slide_active(c.current_index()));
            }
        }
    }

    #[test]
    fn pause_resume_keeps_a_single_timer() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);

        for step in 1..=10 {
            let now = t0 + ms(step * 10);
            c.pause();
            c.resume(now);
        }
        assert!(c.is_auto_advance_active());
        assert_eq!(c.next_auto_advance(), Some(t0 + ms(100) + AUTO_ADVANCE_PERIOD));

        // Idempotent in both directions
        c.resume(t0 + ms(999));
        assert_eq!(c.next_auto_advance(), Some(t0 + ms(100) + AUTO_ADVANCE_PERIOD));
        c.pause();
        c.pause();
        assert!(!c.is_auto_advance_active());
    }

    #[test]
    fn auto_advance_fires_on_period_and_rearms() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);

        assert!(!c.tick(t0 + AUTO_ADVANCE_PERIOD - ms(1)));
        assert_eq!(c.current_index(), 0);

        let fire = t0 + AUTO_ADVANCE_PERIOD;
        assert!(c.tick(fire));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.next_auto_advance(), Some(fire + AUTO_ADVANCE_PERIOD));
    }

    #[test]
    fn paused_carousel_does_not_auto_advance() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);
        c.pause();
        assert!(!c.tick(t0 + AUTO_ADVANCE_PERIOD * 3));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn pause_does_not_cancel_in_flight_transition() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);
        c.advance(t0);
        c.pause();
        settle(&mut c, t0);
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.is_slide_active(1));
    }

    #[test]
    fn interaction_restarts_the_period() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);

        let click = t0 + ms(4900);
        assert!(c.interact(click, |c, now| c.go_to(2, now)));
        assert_eq!(c.next_auto_advance(), Some(click + AUTO_ADVANCE_PERIOD));

        // Old deadline passes without firing
        c.tick(t0 + AUTO_ADVANCE_PERIOD);
        c.tick(click + ENTRY_DELAY + TRANSITION_DURATION);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn swipe_maps_to_navigation() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);
        assert!(c.swipe(SwipeIntent::Retreat, t0));
        assert_eq!(c.current_index(), 2);
        let t1 = settle(&mut c, t0);
        assert!(c.swipe(SwipeIntent::Advance, t1));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn autoplay_off_never_schedules() {
        let t0 = Instant::now();
        let settings = CarouselSettings {
            autoplay: false,
            ..CarouselSettings::default()
        };
        let mut c = Carousel::mount(3, 3, settings, t0).expect("carousel");
        assert!(!c.is_auto_advance_active());
        c.resume(t0);
        assert!(!c.is_auto_advance_active());
    }

    #[test]
    fn coarse_tick_runs_both_phases() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);
        c.advance(t0);
        // One tick long after both deadlines settles the transition
        let late = t0 + ms(2000);
        assert!(c.tick(late));
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.slide_pose(1, late), Some(Pose::SHOWN));
    }

    #[test]
    fn relayout_is_idempotent_and_spares_transition() {
        let t0 = Instant::now();
        let mut c = mount(4, t0);
        c.go_to(2, t0);
        let mid = t0 + ms(300);
        c.tick(t0 + ENTRY_DELAY);

        let incoming = c.slide_pose(2, mid);
        c.relayout(mid);
        c.relayout(mid);
        assert_eq!(c.slide_pose(2, mid), incoming);
        assert_eq!(c.slide_pose(3, mid), Some(Pose::PARKED_RIGHT));
        assert_eq!(active_indicators(&c), vec![2]);

        let done = t0 + ENTRY_DELAY + TRANSITION_DURATION;
        c.tick(done);
        c.relayout(done);
        assert_eq!(c.slide_pose(2, done), Some(Pose::SHOWN));
        assert_eq!(c.slide_pose(0, done), Some(Pose::PARKED_RIGHT));
        assert_eq!(active_slides(&c), 1);
    }

    #[test]
    fn destroy_cancels_auto_advance() {
        let t0 = Instant::now();
        let mut c = mount(3, t0);
        c.destroy();
        assert!(!c.is_auto_advance_active());
    }

    #[test]
    fn indicator_highlight_animates() {
        let t0 = Instant::now();
        let mut c = mount(2, t0);
        c.advance(t0);
        let ind = c.indicators()[1];
        assert_eq!(ind.highlight(t0), 0.0);
        assert_eq!(ind.highlight(t0 + INDICATOR_TRANSITION), 1.0);
        assert_eq!(c.indicators()[0].highlight(t0 + INDICATOR_TRANSITION), 0.0);
    }
}
