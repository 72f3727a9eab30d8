// TUI application state
//
// App owns every piece of page state: the carousel controller, the hero and
// statistics effects, scroll position, menu, contact form and modal. All
// mutation happens on the event-loop task through `&mut App`, and every
// time-dependent method takes the current instant.

use super::components;
use super::form::{ContactForm, FormSlot};
use super::hit::{HitMap, HitTarget};
use super::input::InputHandler;
use super::layout::Breakpoint;
use super::menu::NavMenu;
use super::modal::Modal;
use super::page::{Page, Section, SCROLL_STEP};
use super::theme::{Theme, ThemeKind};
use crate::carousel::{Carousel, GestureTracker, Point, SwipeIntent};
use crate::config::{Config, Features};
use crate::content::Content;
use crate::effects::{Counter, TypingEffect};
use crate::logging::LogBuffer;
use crossterm::event::KeyCode;
use std::time::Instant;
use tracing::{debug, info};

/// Nominal pixel size of one terminal cell, for swipe distances
const CELL_WIDTH_PX: f32 = 8.0;
const CELL_HEIGHT_PX: f32 = 16.0;

/// Convert a terminal cell to the pixel coordinates a swipe is measured in
pub fn cell_to_point(column: u16, row: u16) -> Point {
    Point::new(
        f32::from(column) * CELL_WIDTH_PX,
        f32::from(row) * CELL_HEIGHT_PX,
    )
}

/// Something that can hold keyboard focus on the page, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStop {
    Project(usize),
    Form(FormSlot),
}

/// Main application state for the TUI
pub struct App {
    pub content: Content,
    pub theme: Theme,
    pub features: Features,

    pub page: Page,
    /// None when there are no testimonials
    pub carousel: Option<Carousel>,
    /// None when typing is disabled or there are no phrases
    pub typing: Option<TypingEffect>,
    /// One per statistic, in content order
    pub counters: Vec<Counter>,

    pub menu: NavMenu,
    pub form: ContactForm,
    pub modal: Option<Modal>,
    pub focused_project: Option<usize>,

    /// Clickable regions from the last draw
    pub hits: HitMap,

    pub log_buffer: LogBuffer,
    pub show_logs: bool,
    pub should_quit: bool,

    /// Terminal width as of the last draw or resize
    pub width: u16,
    /// Time of the last tick; rendering samples animations at this instant
    pub now: Instant,

    swipe_threshold: f32,
    gesture: GestureTracker,
    /// Target under the pointer when the left button went down
    pressed: Option<HitTarget>,
    hovering_carousel: bool,
    input_handler: InputHandler,
}

impl App {
    pub fn new(content: Content, config: &Config, log_buffer: LogBuffer, now: Instant) -> Self {
        let heights = components::section_heights(&content);
        let settings = config.carousel.settings();

        let typing = if config.features.typing {
            TypingEffect::new(&content.phrases, now)
        } else {
            None
        };
        let slides = content.testimonials.len();
        let carousel = Carousel::mount(slides, slides, settings, now);
        let counters = content.stats.iter().map(|s| Counter::new(s.target)).collect();

        info!(
            testimonials = slides,
            projects = content.projects.len(),
            "page mounted"
        );

        Self {
            theme: ThemeKind::from_name(&config.theme).theme(),
            features: config.features.clone(),
            page: Page::new(heights, config.features.reveal),
            carousel,
            typing,
            counters,
            menu: NavMenu::new(),
            form: ContactForm::new(),
            modal: None,
            focused_project: None,
            hits: HitMap::new(),
            log_buffer,
            show_logs: false,
            should_quit: false,
            width: 0,
            now,
            swipe_threshold: settings.swipe_threshold,
            gesture: GestureTracker::new(),
            pressed: None,
            hovering_carousel: false,
            input_handler: InputHandler::default(),
            content,
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.width)
    }

    /// Advance every timer to `now`. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.now = now;
        let mut changed = false;

        if let Some(carousel) = self.carousel.as_mut() {
            changed |= carousel.tick(now);
        }
        if let Some(typing) = self.typing.as_mut() {
            changed |= typing.tick(now);
        }
        changed |= self.form.tick(now);

        // Nothing is on screen until the first draw sized the window
        if self.page.viewport() > 0 {
            for section in self.page.reveal(now) {
                debug!(section = section.title(), "section revealed");
                if section == Section::Stats && self.features.counters {
                    for counter in &mut self.counters {
                        counter.start(now);
                    }
                }
                changed = true;
            }
        }

        changed
    }

    /// Tear down timers before exit
    pub fn shutdown(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.destroy();
        }
        info!("page unmounted");
    }

    pub fn handle_key_press(&mut self, key: KeyCode, now: Instant) -> bool {
        self.input_handler.handle_key_press(key, now)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Page actions
    // ─────────────────────────────────────────────────────────────────────

    pub fn next_theme(&mut self) {
        self.theme = self.theme.kind.next().theme();
        debug!(theme = self.theme.kind.name(), "theme switched");
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn scroll_lines(&mut self, lines: i32) {
        self.page.scroll_by(lines * i32::from(SCROLL_STEP));
    }

    /// Scroll a section to the top of the window
    pub fn jump_to(&mut self, section: Section) {
        self.page.scroll_to_section(section);
        self.menu.close();
        debug!(section = section.title(), "jumped to section");
    }

    /// Menu toggle only exists while the nav is collapsed
    pub fn toggle_menu(&mut self) {
        if self.breakpoint() == Breakpoint::Compact {
            self.menu.toggle();
        }
    }

    /// Apply an entry the menu has chosen, if any
    pub fn follow_menu_choice(&mut self) {
        if let Some(section) = self.menu.take_choice() {
            self.jump_to(section);
        }
    }

    pub fn on_resize(&mut self, width: u16, now: Instant) {
        self.width = width;
        self.menu.on_resize(width);
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.relayout(now);
        }
    }

    pub fn open_project(&mut self, index: usize) {
        if index < self.content.projects.len() {
            self.show_modal(Modal::project(index));
            debug!(project = index, "project opened");
        }
    }

    pub fn open_help(&mut self) {
        self.show_modal(Modal::help());
    }

    /// A modal takes over the pointer, so a drag begun under it is dropped
    fn show_modal(&mut self, modal: Modal) {
        self.gesture.cancel();
        self.pressed = None;
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn submit_form(&mut self, now: Instant) {
        self.form.submit(now);
        self.page.scroll_to_section(Section::Contact);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Carousel
    // ─────────────────────────────────────────────────────────────────────

    /// Arrow keys only drive the carousel while its slide viewport is on screen
    pub fn carousel_visible(&self) -> bool {
        let top = self.page.top(Section::Testimonials);
        let (start, end) = components::testimonials::viewport_rows();
        self.carousel.is_some() && self.page.rows_visible(top + start, top + end)
    }

    pub fn carousel_next(&mut self, now: Instant) -> bool {
        self.carousel
            .as_mut()
            .is_some_and(|c| c.interact(now, |c, t| c.advance(t)))
    }

    pub fn carousel_prev(&mut self, now: Instant) -> bool {
        self.carousel
            .as_mut()
            .is_some_and(|c| c.interact(now, |c, t| c.retreat(t)))
    }

    pub fn carousel_go_to(&mut self, index: usize, now: Instant) -> bool {
        self.carousel
            .as_mut()
            .is_some_and(|c| c.interact(now, |c, t| c.go_to(index, t)))
    }

    fn carousel_swipe(&mut self, intent: SwipeIntent, now: Instant) -> bool {
        self.carousel.as_mut().is_some_and(|c| c.swipe(intent, now))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────

    pub fn focus(&self) -> Option<FocusStop> {
        match self.form.focused() {
            Some(slot) => Some(FocusStop::Form(slot)),
            None => self.focused_project.map(FocusStop::Project),
        }
    }

    fn focus_stops(&self) -> Vec<FocusStop> {
        (0..self.content.projects.len())
            .map(FocusStop::Project)
            .chain(FormSlot::ALL.iter().copied().map(FocusStop::Form))
            .collect()
    }

    pub fn set_focus(&mut self, stop: Option<FocusStop>) {
        self.focused_project = None;
        self.form.blur();
        match stop {
            Some(FocusStop::Project(i)) => self.focused_project = Some(i),
            Some(FocusStop::Form(slot)) => self.form.focus(slot),
            None => {}
        }
        if let Some(stop) = stop {
            let (top, bottom) = self.focus_rows(stop);
            self.page.ensure_visible(top, bottom);
        }
    }

    /// Page rows occupied by a focus stop
    fn focus_rows(&self, stop: FocusStop) -> (u16, u16) {
        let (section, (top, bottom)) = match stop {
            FocusStop::Project(i) => (Section::Portfolio, components::portfolio::card_rows(i)),
            FocusStop::Form(slot) => (Section::Contact, components::contact::slot_rows(slot)),
        };
        let base = self.page.top(section);
        (base + top, base + bottom)
    }

    pub fn focus_next(&mut self) {
        let stops = self.focus_stops();
        let next = match self.focus().and_then(|f| stops.iter().position(|s| *s == f)) {
            Some(i) => stops[(i + 1) % stops.len()],
            None => stops[0],
        };
        self.set_focus(Some(next));
    }

    pub fn focus_prev(&mut self) {
        let stops = self.focus_stops();
        let prev = match self.focus().and_then(|f| stops.iter().position(|s| *s == f)) {
            Some(0) | None => stops[stops.len() - 1],
            Some(i) => stops[i - 1],
        };
        self.set_focus(Some(prev));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mouse
    // ─────────────────────────────────────────────────────────────────────

    pub fn mouse_down(&mut self, column: u16, row: u16) {
        let target = self.hits.target_at(column, row);
        self.pressed = target;
        if self.modal.is_none()
            && matches!(target, Some(HitTarget::Carousel | HitTarget::Indicator(_)))
        {
            self.gesture.begin(cell_to_point(column, row));
        }
    }

    /// Release of the left button: a horizontal drag over the carousel is a
    /// swipe, otherwise a press and release on the same target is a click
    pub fn mouse_up(&mut self, column: u16, row: u16, now: Instant) {
        let pressed = self.pressed.take();

        if self.gesture.is_active() {
            if let Some(intent) = self
                .gesture
                .finish(cell_to_point(column, row), self.swipe_threshold)
            {
                debug!(?intent, "swipe");
                self.carousel_swipe(intent, now);
                return;
            }
        }

        let released = self.hits.target_at(column, row);
        if pressed == released {
            self.click(released, now);
        }
    }

    fn click(&mut self, target: Option<HitTarget>, now: Instant) {
        if self.modal.is_some() {
            if target != Some(HitTarget::ModalBody) {
                self.close_modal();
            }
            return;
        }

        if self.menu.is_open()
            && !matches!(
                target,
                Some(HitTarget::MenuToggle | HitTarget::MenuEntry(_))
            )
        {
            self.menu.close();
            return;
        }

        match target {
            Some(HitTarget::NavLink(section)) => self.jump_to(section),
            Some(HitTarget::MenuToggle) => self.toggle_menu(),
            Some(HitTarget::MenuEntry(section)) => {
                self.menu.choose(section);
                self.follow_menu_choice();
            }
            Some(HitTarget::Indicator(i)) => {
                self.carousel_go_to(i, now);
            }
            Some(HitTarget::Project(i)) => {
                self.set_focus(Some(FocusStop::Project(i)));
                self.open_project(i);
            }
            Some(HitTarget::Form(slot)) => {
                self.set_focus(Some(FocusStop::Form(slot)));
                if slot == FormSlot::Submit {
                    self.submit_form(now);
                }
            }
            Some(HitTarget::Carousel) | Some(HitTarget::ModalBody) => {}
            None => self.set_focus(None),
        }
    }

    /// Pointer moved: entering the carousel pauses autoplay, leaving resumes it
    pub fn mouse_moved(&mut self, column: u16, row: u16, now: Instant) {
        let over = self.hits.is_over(HitTarget::Carousel, column, row);
        if over == self.hovering_carousel {
            return;
        }
        self.hovering_carousel = over;
        if let Some(carousel) = self.carousel.as_mut() {
            if over {
                carousel.pause();
            } else {
                carousel.resume(now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{ENTRY_DELAY, TRANSITION_DURATION};
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn app(now: Instant) -> App {
        let mut app = App::new(
            Content::default(),
            &Config::default(),
            LogBuffer::new(),
            now,
        );
        app.width = 100;
        app.page.set_viewport(30);
        app
    }

    fn settle() -> Duration {
        ENTRY_DELAY + TRANSITION_DURATION
    }

    #[test]
    fn mounts_carousel_from_testimonials() {
        let t0 = Instant::now();
        let app = app(t0);
        let carousel = app.carousel.as_ref().map(|c| c.slide_count());
        assert_eq!(carousel, Some(Content::default().testimonials.len()));
    }

    #[test]
    fn no_testimonials_leaves_carousel_inert() {
        let t0 = Instant::now();
        let mut content = Content::default();
        content.testimonials.clear();
        let mut config = Config::default();
        config.features.typing = false;
        let mut app = App::new(content, &config, LogBuffer::new(), t0);

        assert!(app.carousel.is_none());
        assert!(!app.carousel_next(t0));
        assert!(!app.tick(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn counters_start_when_stats_scroll_into_view() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.page.set_viewport(5);
        app.tick(t0);
        assert!(!app.counters[0].is_started());

        app.jump_to(Section::Stats);
        app.tick(t0 + Duration::from_millis(50));
        assert!(app.counters.iter().all(|c| c.is_started()));
    }

    #[test]
    fn counters_disabled_never_start() {
        let t0 = Instant::now();
        let mut config = Config::default();
        config.features.counters = false;
        let mut app = App::new(Content::default(), &config, LogBuffer::new(), t0);
        app.page.set_viewport(40);
        app.tick(t0);
        assert!(app.counters.iter().all(|c| !c.is_started()));
    }

    #[test]
    fn swipe_left_over_carousel_retreats() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.hits.push(Rect::new(0, 5, 80, 8), HitTarget::Carousel);

        // Drag 10 cells to the right = 80px, finger travels right
        app.mouse_down(10, 8);
        app.mouse_up(20, 9, t0);

        let carousel = app.carousel.as_ref().map(|c| c.current_index());
        assert_eq!(carousel, Some(Content::default().testimonials.len() - 1));
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.hits.push(Rect::new(0, 5, 80, 8), HitTarget::Carousel);

        app.mouse_down(10, 8);
        app.mouse_up(13, 8, t0);
        assert_eq!(app.carousel.as_ref().map(|c| c.current_index()), Some(0));
    }

    #[test]
    fn opening_modal_drops_drag_in_progress() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.hits.push(Rect::new(0, 5, 80, 8), HitTarget::Carousel);

        app.mouse_down(10, 8);
        app.open_help();
        app.mouse_up(30, 8, t0);

        assert_eq!(app.carousel.as_ref().map(|c| c.current_index()), Some(0));
        assert_eq!(app.modal, Some(Modal::Help));
    }

    #[test]
    fn hover_pauses_and_leaving_resumes() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.hits.push(Rect::new(0, 5, 80, 8), HitTarget::Carousel);

        app.mouse_moved(3, 6, t0);
        assert_eq!(
            app.carousel.as_ref().map(|c| c.is_auto_advance_active()),
            Some(false)
        );

        // Long hover: nothing advances
        app.tick(t0 + Duration::from_secs(20));
        assert_eq!(app.carousel.as_ref().map(|c| c.current_index()), Some(0));

        let t1 = t0 + Duration::from_secs(20);
        app.mouse_moved(3, 20, t1);
        assert_eq!(
            app.carousel.as_ref().and_then(|c| c.next_auto_advance()),
            Some(t1 + crate::carousel::AUTO_ADVANCE_PERIOD)
        );
    }

    #[test]
    fn indicator_click_jumps_to_slide() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.hits.push(Rect::new(40, 14, 1, 1), HitTarget::Indicator(2));

        app.mouse_down(40, 14);
        app.mouse_up(40, 14, t0);
        app.tick(t0 + settle());
        assert_eq!(app.carousel.as_ref().map(|c| c.current_index()), Some(2));
    }

    #[test]
    fn click_outside_closes_menu_without_acting() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.width = 50;
        app.toggle_menu();
        assert!(app.menu.is_open());

        app.hits.push(Rect::new(0, 10, 20, 5), HitTarget::Project(0));
        app.mouse_down(2, 11);
        app.mouse_up(2, 11, t0);

        assert!(!app.menu.is_open());
        assert!(app.modal.is_none());
    }

    #[test]
    fn menu_toggle_needs_compact_width() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.toggle_menu();
        assert!(!app.menu.is_open());

        app.on_resize(50, t0);
        app.toggle_menu();
        assert!(app.menu.is_open());
        app.on_resize(80, t0);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn modal_closes_on_click_outside_only() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.open_project(1);
        app.hits.push(Rect::new(10, 5, 30, 10), HitTarget::ModalBody);

        app.mouse_down(12, 6);
        app.mouse_up(12, 6, t0);
        assert_eq!(app.modal, Some(Modal::project(1)));

        app.mouse_down(1, 1);
        app.mouse_up(1, 1, t0);
        assert!(app.modal.is_none());
    }

    #[test]
    fn tab_order_runs_through_projects_then_form() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let projects = app.content.projects.len();

        app.focus_next();
        assert_eq!(app.focus(), Some(FocusStop::Project(0)));
        for _ in 0..projects {
            app.focus_next();
        }
        assert_eq!(app.focus(), Some(FocusStop::Form(FormSlot::ALL[0])));
        // Focusing the form scrolls it into view
        assert!(app.page.section_visible(Section::Contact));

        app.set_focus(None);
        app.focus_prev();
        assert_eq!(app.focus(), Some(FocusStop::Form(FormSlot::Submit)));
    }

    #[test]
    fn cell_conversion_uses_nominal_cell_size() {
        let p = cell_to_point(10, 2);
        assert_eq!(p, Point::new(80.0, 32.0));
    }
}
