// Page model - section geometry, scrolling and visibility
//
// The page is a fixed stack of sections drawn onto a tall canvas; the body
// area of the terminal is a window onto it. All coordinates here are rows:
// page rows (from the top of the canvas) or window rows (from the top of the
// body area).

use std::time::{Duration, Instant};

/// Rows scrolled per wheel notch / arrow key
pub const SCROLL_STEP: u16 = 3;

/// How far below the window top the active-section probe sits
/// (about 100px at 16px per row)
const NAV_PROBE_OFFSET: u16 = 6;

/// Scroll distance after which the nav bar switches to its "scrolled" style
/// (about 50px at 16px per row)
const NAV_SCROLLED_AFTER: u16 = 3;

/// Rows trimmed from the window bottom when deciding whether a section has
/// scrolled into view
const REVEAL_MARGIN: u16 = 3;

/// How long a revealed section takes to fade in
pub const REVEAL_FADE: Duration = Duration::from_millis(600);

/// Page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Stats,
    Services,
    Portfolio,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Stats,
        Section::Services,
        Section::Portfolio,
        Section::Testimonials,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Stats => "Stats",
            Section::Services => "Services",
            Section::Portfolio => "Portfolio",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }

    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }
}

/// Whether a block spanning window rows `top..bottom` shows in a window of
/// `window_height` rows: its top is above the window bottom and its bottom
/// is below the window top
pub fn intersects_window(top: i32, bottom: i32, window_height: i32) -> bool {
    top < window_height && bottom > 0
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Reveal {
    Hidden,
    FadingSince(Instant),
    Shown,
}

/// Section geometry, scroll position and per-section reveal state
#[derive(Debug, Clone)]
pub struct Page {
    heights: [u16; 6],
    scroll: u16,
    viewport: u16,
    animate_reveal: bool,
    reveal: [Reveal; 6],
}

impl Page {
    /// New page scrolled to the top. `heights` holds the row count of each
    /// section in `Section::ALL` order; with `animate_reveal` off sections
    /// are drawn at full strength even before they are revealed.
    pub fn new(heights: [u16; 6], animate_reveal: bool) -> Self {
        Self {
            heights,
            scroll: 0,
            viewport: 0,
            animate_reveal,
            reveal: [Reveal::Hidden; 6],
        }
    }

    pub fn height(&self, section: Section) -> u16 {
        self.heights[section.index()]
    }

    /// First page row of a section
    pub fn top(&self, section: Section) -> u16 {
        self.heights[..section.index()].iter().sum()
    }

    /// One past the last page row of a section
    pub fn bottom(&self, section: Section) -> u16 {
        self.top(section) + self.height(section)
    }

    pub fn total_height(&self) -> u16 {
        self.heights.iter().sum()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport)
    }

    /// Record the window height; keeps the scroll position in range
    pub fn set_viewport(&mut self, rows: u16) {
        self.viewport = rows;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = target as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.viewport.max(1)));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.viewport.max(1)));
    }

    /// Bring a section's top to the window top (as far as the page allows)
    pub fn scroll_to_section(&mut self, section: Section) {
        self.scroll = self.top(section).min(self.max_scroll());
    }

    /// Scroll the least amount that makes page rows `top..bottom` visible
    pub fn ensure_visible(&mut self, top: u16, bottom: u16) {
        if top < self.scroll {
            self.scroll = top;
        } else if bottom > self.scroll + self.viewport {
            self.scroll = bottom.saturating_sub(self.viewport).min(self.max_scroll());
        }
    }

    /// Nav bar uses its compact "scrolled" look
    pub fn is_scrolled(&self) -> bool {
        self.scroll > NAV_SCROLLED_AFTER
    }

    /// Section under the probe line just below the window top
    pub fn active_section(&self) -> Section {
        let probe = self.scroll + NAV_PROBE_OFFSET;
        Section::ALL
            .iter()
            .copied()
            .find(|s| probe >= self.top(*s) && probe < self.bottom(*s))
            .unwrap_or(Section::Contact)
    }

    /// Whether page rows `top..bottom` intersect the window
    pub fn rows_visible(&self, top: u16, bottom: u16) -> bool {
        let scroll = i32::from(self.scroll);
        intersects_window(
            i32::from(top) - scroll,
            i32::from(bottom) - scroll,
            i32::from(self.viewport),
        )
    }

    pub fn section_visible(&self, section: Section) -> bool {
        self.rows_visible(self.top(section), self.bottom(section))
    }

    /// Mark sections that have scrolled into view; returns the ones
    /// revealed by this call
    pub fn reveal(&mut self, now: Instant) -> Vec<Section> {
        let window = self.viewport.saturating_sub(REVEAL_MARGIN).max(1);
        let scroll = i32::from(self.scroll);
        let mut newly = Vec::new();

        for (i, section) in Section::ALL.iter().enumerate() {
            let visible = intersects_window(
                i32::from(self.top(*section)) - scroll,
                i32::from(self.bottom(*section)) - scroll,
                i32::from(window),
            );
            if visible && self.reveal[i] == Reveal::Hidden {
                self.reveal[i] = if self.animate_reveal {
                    Reveal::FadingSince(now)
                } else {
                    Reveal::Shown
                };
                newly.push(*section);
            }
        }
        newly
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.reveal[section.index()] != Reveal::Hidden
    }

    /// Fade-in progress in 0.0..=1.0
    pub fn reveal_progress(&self, section: Section, now: Instant) -> f32 {
        if !self.animate_reveal {
            return 1.0;
        }
        match self.reveal[section.index()] {
            Reveal::Hidden => 0.0,
            Reveal::Shown => 1.0,
            Reveal::FadingSince(at) => {
                let elapsed = now.saturating_duration_since(at).as_secs_f32();
                (elapsed / REVEAL_FADE.as_secs_f32()).min(1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHTS: [u16; 6] = [11, 7, 10, 12, 12, 16];

    fn page_with_viewport(rows: u16) -> Page {
        let mut page = Page::new(HEIGHTS, true);
        page.set_viewport(rows);
        page
    }

    #[test]
    fn sections_stack_without_gaps() {
        let page = page_with_viewport(20);
        let mut expected_top = 0;
        for section in Section::ALL {
            assert_eq!(page.top(section), expected_top);
            expected_top = page.bottom(section);
        }
        assert_eq!(expected_top, page.total_height());
        assert_eq!(page.top(Section::Portfolio), 28);
    }

    #[test]
    fn window_intersection_edges() {
        // Entirely below the window
        assert!(!intersects_window(20, 30, 20));
        // Entirely above the window
        assert!(!intersects_window(-10, 0, 20));
        // Straddling either edge
        assert!(intersects_window(19, 30, 20));
        assert!(intersects_window(-10, 1, 20));
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut page = page_with_viewport(20);
        page.scroll_by(-5);
        assert_eq!(page.scroll(), 0);
        page.scroll_by(10_000);
        assert_eq!(page.scroll(), page.total_height() - 20);

        // Growing the window pulls the scroll back in range
        page.set_viewport(page.total_height());
        assert_eq!(page.scroll(), 0);
    }

    #[test]
    fn active_section_follows_probe() {
        let mut page = page_with_viewport(20);
        assert_eq!(page.active_section(), Section::Home);

        page.scroll_to_section(Section::Portfolio);
        assert_eq!(page.active_section(), Section::Portfolio);

        // Probe still inside Services just before Portfolio starts
        page.scroll_by(-(i32::from(NAV_PROBE_OFFSET) + 1));
        assert_eq!(page.active_section(), Section::Services);
    }

    #[test]
    fn nav_switches_style_after_threshold() {
        let mut page = page_with_viewport(20);
        page.scroll_by(i32::from(NAV_SCROLLED_AFTER));
        assert!(!page.is_scrolled());
        page.scroll_by(1);
        assert!(page.is_scrolled());
    }

    #[test]
    fn reveal_happens_once() {
        let t0 = Instant::now();
        let mut page = page_with_viewport(20);

        let first = page.reveal(t0);
        assert!(first.contains(&Section::Home));
        assert!(!first.contains(&Section::Contact));
        assert!(page.reveal(t0).is_empty());

        page.scroll_to_bottom();
        let later = page.reveal(t0);
        assert!(later.contains(&Section::Contact));
        assert!(!later.contains(&Section::Home));
    }

    #[test]
    fn reveal_fades_in() {
        let t0 = Instant::now();
        let mut page = page_with_viewport(20);
        page.reveal(t0);
        assert_eq!(page.reveal_progress(Section::Home, t0), 0.0);
        assert_eq!(page.reveal_progress(Section::Home, t0 + REVEAL_FADE), 1.0);
        assert_eq!(page.reveal_progress(Section::Contact, t0), 0.0);
    }

    #[test]
    fn reveal_disabled_still_reports_visibility() {
        let t0 = Instant::now();
        let mut page = Page::new(HEIGHTS, false);
        page.set_viewport(20);
        for section in Section::ALL {
            assert_eq!(page.reveal_progress(section, t0), 1.0);
        }

        assert!(page.reveal(t0).contains(&Section::Stats));
        assert!(page.is_revealed(Section::Stats));
        assert!(!page.is_revealed(Section::Contact));
    }

    #[test]
    fn ensure_visible_scrolls_minimally() {
        let mut page = page_with_viewport(10);
        page.ensure_visible(15, 18);
        assert_eq!(page.scroll(), 8);
        page.ensure_visible(12, 14);
        assert_eq!(page.scroll(), 8);
        page.ensure_visible(2, 4);
        assert_eq!(page.scroll(), 2);
    }
}
