// Frame composition
//
// ┌──────────────────────────────┐
// │ nav bar                      │
// ├──────────────────────────────┤
// │ page window (scrolls)        │
// │                              │
// ├──────────────────────────────┤
// │ log strip (optional)         │
// │ status bar                   │
// └──────────────────────────────┘
//
// Sections are drawn onto a canvas as tall as the whole page, then the rows
// under the window are copied into the frame. Overlays (nav menu, modal)
// come last so they sit on top of the page.

use super::app::App;
use super::components::{self, log_strip, nav_bar, status_bar};
use super::hit::HitMap;
use super::page::Section;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Block,
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.width = area.width;

    let log_rows = if app.show_logs { log_strip::HEIGHT } else { 0 };
    let [nav, body, logs, status] = Layout::vertical([
        Constraint::Length(nav_bar::HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(log_rows),
        Constraint::Length(1),
    ])
    .areas(area);

    app.page.set_viewport(body.height);
    app.hits = render_all(f, [area, nav, body, logs, status], app);
}

fn render_all(f: &mut Frame, [area, nav, body, logs, status]: [Rect; 5], app: &App) -> HitMap {
    let mut hits = HitMap::new();

    f.render_widget(Block::default().style(app.theme.base_style()), area);
    nav_bar::render(f, nav, app, &mut hits);
    render_page(f, body, app, &mut hits);
    if app.show_logs {
        log_strip::render(f, logs, app);
    }
    status_bar::render(f, status, app);

    nav_bar::render_menu(f, body, app, &mut hits);
    if let Some(modal) = app.modal {
        components::modal::render(f, area, app, modal, &mut hits);
    }
    hits
}

fn render_page(f: &mut Frame, body: Rect, app: &App, hits: &mut HitMap) {
    if body.is_empty() {
        return;
    }
    let page = &app.page;
    let mut canvas = Buffer::empty(Rect::new(0, 0, body.width, page.total_height()));
    canvas.set_style(canvas.area, app.theme.base_style());
    let mut canvas_hits = HitMap::new();

    for section in Section::ALL {
        let (top, bottom) = (page.top(section), page.bottom(section));
        if !page.rows_visible(top, bottom) {
            continue;
        }
        let area = Rect::new(0, top, body.width, bottom - top);
        components::render_section(section, &mut canvas, area, app, &mut canvas_hits);
    }

    let frame = f.buffer_mut();
    for y in 0..body.height {
        let source_row = page.scroll() + y;
        if source_row >= canvas.area.height {
            break;
        }
        for x in 0..body.width {
            if let (Some(cell), Some(out)) = (
                canvas.cell((x, source_row)),
                frame.cell_mut((body.x + x, body.y + y)),
            ) {
                *out = cell.clone();
            }
        }
    }

    hits.extend_from_canvas(canvas_hits, page.scroll(), body);
}
