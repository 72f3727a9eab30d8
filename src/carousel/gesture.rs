// Swipe gesture recognition
//
// A gesture is captured as a start point and an end point. It only counts as
// navigation when the horizontal travel beats both the threshold and the
// vertical travel; anything else is a vertical scroll and is discarded.

/// Minimum horizontal travel (in pixels) for a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// A pointer position in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What a recognized swipe asks the carousel to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Dragged left: show the next slide
    Advance,
    /// Dragged right: show the previous slide
    Retreat,
}

impl SwipeIntent {
    /// Classify a displacement measured as `start - end`
    pub fn from_displacement(dx: f32, dy: f32, threshold: f32) -> Option<Self> {
        if dx.abs() > dy.abs() && dx.abs() > threshold {
            if dx > 0.0 {
                Some(Self::Advance)
            } else {
                Some(Self::Retreat)
            }
        } else {
            None
        }
    }
}

/// Tracks one press-drag-release sequence
#[derive(Debug, Default)]
pub struct GestureTracker {
    start: Option<Point>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down
    pub fn begin(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Whether a gesture is in progress
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Pointer went up - classify the gesture and reset
    ///
    /// Returns None for a release without a matching press, or for a
    /// gesture that is not a horizontal swipe.
    pub fn finish(&mut self, at: Point, threshold: f32) -> Option<SwipeIntent> {
        let start = self.start.take()?;
        let dx = start.x - at.x;
        let dy = start.y - at.y;
        SwipeIntent::from_displacement(dx, dy, threshold)
    }

    /// Abandon the gesture (pointer left the surface)
    pub fn cancel(&mut self) {
        self.start = None;
    }
}
