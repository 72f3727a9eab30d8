// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard, mouse, resize, timer ticks)
// - Routing input through the modal, menu, form and page layers

pub mod app;
pub mod components;
pub mod form;
pub mod hit;
pub mod input;
pub mod layout;
pub mod menu;
pub mod modal;
pub mod page;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::content::Content;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, FocusStop};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use page::Section;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use traits::{Handled, Interactive};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(content: Content, config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(content, &config, log_buffer, Instant::now());
    if let Ok(size) = terminal.size() {
        app.on_resize(size.width, Instant::now());
    }

    let result = run_event_loop(&mut terminal, &mut app, config.tick_rate_ms).await;
    app.shutdown();

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Terminal input and the animation ticker race in `tokio::select!`. Every
/// pass advances the page's timers to the current instant and redraws, so
/// carousel phases and fades move even when no input arrives.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate_ms: u64,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(tick_rate_ms.max(1)));

    loop {
        app.tick(Instant::now());
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    let now = Instant::now();
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event, now),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event, now),
                        Ok(Event::Resize(width, _)) => app.on_resize(width, now),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Menu → Form → Global → Page
fn handle_key_event(app: &mut App, key_event: KeyEvent, now: Instant) {
    if handle_modal_input(app, &key_event, now) {
        return;
    }

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        match key_event.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('s') => {
                if app.handle_key_press(key_event.code, now) {
                    app.submit_form(now);
                }
            }
            _ => {}
        }
        return;
    }

    // The open menu owns navigation keys
    if app.menu.is_open() && app.menu.handle_key(key_event, now).was_handled() {
        app.follow_menu_choice();
        return;
    }

    // Typing goes straight to the focused field, without debounce
    let tabbing = matches!(key_event.code, KeyCode::Tab | KeyCode::BackTab);
    if app.form.focused().is_some()
        && !tabbing
        && app.form.handle_key(key_event, now) == Handled::Yes
    {
        return;
    }

    if key_event.kind != KeyEventKind::Press && key_event.kind != KeyEventKind::Repeat {
        return;
    }
    if !app.handle_key_press(key_event.code, now) {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }
    handle_page_keys(app, &key_event, now);
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent, now: Instant) -> bool {
    let Some(modal) = app.modal else {
        return false;
    };

    // Releases still reach the input handler so keys don't stick after close
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return true;
    }
    if !app.handle_key_press(key_event.code, now) {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
    }
    true
}

/// Global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Esc => {
            if app.focus().is_some() {
                app.set_focus(None);
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('t') => app.next_theme(),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            app.jump_to(Section::ALL[index]);
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        _ => return false,
    }
    true
}

/// Page keys: scrolling, carousel arrows, opening the focused project
fn handle_page_keys(app: &mut App, key_event: &KeyEvent, now: Instant) {
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_lines(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_lines(1),
        KeyCode::PageUp => app.page.page_up(),
        KeyCode::PageDown => app.page.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.page.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.page.scroll_to_bottom(),
        KeyCode::Left if app.carousel_visible() => {
            app.carousel_prev(now);
        }
        KeyCode::Right if app.carousel_visible() => {
            app.carousel_next(now);
        }
        KeyCode::Enter => {
            if let Some(FocusStop::Project(index)) = app.focus() {
                app.open_project(index);
            }
        }
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent, now: Instant) {
    let (column, row) = (mouse_event.column, mouse_event.row);
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => app.mouse_down(column, row),
        MouseEventKind::Up(MouseButton::Left) => app.mouse_up(column, row, now),
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            app.mouse_moved(column, row, now)
        }
        MouseEventKind::ScrollUp if app.modal.is_none() => app.scroll_lines(-1),
        MouseEventKind::ScrollDown if app.modal.is_none() => app.scroll_lines(1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::form::{Field, FormSlot};
    use crate::tui::modal::Modal;
    use ratatui::backend::TestBackend;

    fn app(now: Instant) -> App {
        let mut app = App::new(Content::default(), &Config::default(), LogBuffer::new(), now);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        terminal.draw(|f| ui::draw(f, &mut app)).expect("draw");
        app
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn release(app: &mut App, code: KeyCode, now: Instant) {
        let mut event = KeyEvent::new(code, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        handle_key_event(app, event, now);
    }

    #[test]
    fn number_keys_jump_to_sections() {
        let t0 = Instant::now();
        let mut app = app(t0);
        press(&mut app, KeyCode::Char('3'), t0);
        assert_eq!(app.page.scroll(), app.page.top(Section::Services));
        assert_eq!(app.page.active_section(), Section::Services);
        press(&mut app, KeyCode::Char('1'), t0 + Duration::from_millis(200));
        assert_eq!(app.page.scroll(), 0);
    }

    #[test]
    fn arrows_drive_carousel_only_when_visible() {
        let t0 = Instant::now();
        let mut app = app(t0);
        press(&mut app, KeyCode::Right, t0);
        assert_eq!(app.carousel.as_ref().map(|c| c.current_index()), Some(0));

        app.jump_to(Section::Testimonials);
        let t1 = t0 + Duration::from_millis(500);
        press(&mut app, KeyCode::Right, t1);
        assert_eq!(app.carousel.as_ref().map(|c| c.current_index()), Some(1));
    }

    #[test]
    fn arrows_ignore_carousel_while_only_heading_shows() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let top = app.page.top(Section::Testimonials);
        let (start, _) = components::testimonials::viewport_rows();
        let viewport = app.page.viewport();

        // Heading row is the last row of the window, slides are below it
        app.page.scroll_to_top();
        app.page.scroll_by(i32::from(top) - i32::from(viewport) + 1);
        assert!(app.page.section_visible(Section::Testimonials));
        press(&mut app, KeyCode::Right, t0);
        assert_eq!(app.carousel.as_ref().map(|c| c.current_index()), Some(0));

        // First slide row just enters the window
        app.page.scroll_by(i32::from(start));
        release(&mut app, KeyCode::Right, t0);
        press(&mut app, KeyCode::Right, t0 + Duration::from_millis(100));
        assert_eq!(app.carousel.as_ref().map(|c| c.current_index()), Some(1));
    }

    #[test]
    fn modal_swallows_keys_until_closed() {
        let t0 = Instant::now();
        let mut app = app(t0);
        press(&mut app, KeyCode::Char('?'), t0);
        assert_eq!(app.modal, Some(Modal::Help));

        press(&mut app, KeyCode::Char('6'), t0 + Duration::from_millis(200));
        assert_eq!(app.page.scroll(), 0);

        press(&mut app, KeyCode::Esc, t0 + Duration::from_millis(400));
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn focused_field_receives_typing() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.set_focus(Some(FocusStop::Form(FormSlot::Field(Field::FirstName))));
        for c in "Ann".chars() {
            press(&mut app, KeyCode::Char(c), t0);
        }
        // 'q' is text here, not quit
        press(&mut app, KeyCode::Char('q'), t0);
        assert_eq!(app.form.value(Field::FirstName), "Annq");
        assert!(!app.should_quit);
    }

    #[test]
    fn held_key_is_debounced_until_release() {
        let t0 = Instant::now();
        let mut app = app(t0);
        press(&mut app, KeyCode::Char('t'), t0);
        let first = app.theme.kind;
        press(&mut app, KeyCode::Char('t'), t0 + Duration::from_millis(20));
        assert_eq!(app.theme.kind, first);

        release(&mut app, KeyCode::Char('t'), t0 + Duration::from_millis(30));
        press(&mut app, KeyCode::Char('t'), t0 + Duration::from_millis(400));
        assert_ne!(app.theme.kind, first);
    }

    #[test]
    fn escape_quits_without_focus() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.set_focus(Some(FocusStop::Project(0)));
        press(&mut app, KeyCode::Esc, t0);
        assert!(app.focus().is_none());
        assert!(!app.should_quit);

        release(&mut app, KeyCode::Esc, t0);
        press(&mut app, KeyCode::Esc, t0 + Duration::from_millis(400));
        assert!(app.should_quit);
    }

    #[test]
    fn wheel_scrolls_page() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, wheel, t0);
        assert!(app.page.scroll() > 0);
    }
}
