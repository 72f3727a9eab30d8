// Status bar component
//
// One line at the bottom: key hints on the left (those of the focused
// widget when it has any), carousel and theme state on the right.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};

const HINTS_FULL: &str = " ↑↓ scroll  ←→ testimonials  Tab focus  m menu  t theme  l logs  ? help  q quit";
const HINTS_COMPACT: &str = " ↑↓ ←→ Tab ? q";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let focus_hint = if app.menu.is_open() {
        app.menu.focus_hint()
    } else {
        app.form.focus_hint()
    };
    let hints = match focus_hint {
        Some(hint) => format!(" {}", hint),
        None if bp.at_least(Breakpoint::Normal) => HINTS_FULL.to_string(),
        None => HINTS_COMPACT.to_string(),
    };

    let autoplay = match &app.carousel {
        Some(c) if c.is_auto_advance_active() => "▶ autoplay",
        Some(_) => "⏸ paused",
        None => "",
    };
    let state = if bp.at_least(Breakpoint::Wide) {
        format!(
            "{}  │ {} │ {} ",
            autoplay,
            app.page.active_section().title(),
            theme.kind.name()
        )
    } else {
        format!("{} ", autoplay)
    };

    f.render_widget(Paragraph::new(hints).style(theme.muted_style()), area);
    f.render_widget(
        Paragraph::new(state)
            .style(theme.muted_style())
            .alignment(Alignment::Right),
        area,
    );
}
