// Components module - page sections and screen chrome
//
// Page sections draw onto the scrollable page canvas (a `Buffer`), so their
// render functions take `&mut Buffer`:
// - Hero: name, typing effect, call-to-action buttons
// - Stats: count-up statistics
// - Services / Portfolio: card grids
// - Testimonials: the carousel
// - Contact: form and status banner
//
// Chrome is drawn straight onto the frame around and over the canvas:
// nav bar, nav menu, status bar, log strip and modal.

pub mod contact;
pub mod hero;
pub mod log_strip;
pub mod modal;
pub mod nav_bar;
pub mod portfolio;
pub mod services;
pub mod stats;
pub mod status_bar;
pub mod testimonials;

use crate::content::Content;
use crate::tui::app::App;
use crate::tui::hit::HitMap;
use crate::tui::page::Section;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Cards per row in the card grids
pub const GRID_COLUMNS: usize = 2;

/// Rows above the first card: heading and a spacer
pub const SECTION_HEADER_ROWS: u16 = 2;

fn grid_rows(items: usize) -> u16 {
    items.div_ceil(GRID_COLUMNS) as u16
}

/// Row count of every section in `Section::ALL` order, for this content
pub fn section_heights(content: &Content) -> [u16; 6] {
    Section::ALL.map(|section| match section {
        Section::Home => hero::HEIGHT,
        Section::Stats => 1 + grid_rows(content.stats.len()) * stats::STAT_ROWS,
        Section::Services => {
            SECTION_HEADER_ROWS + grid_rows(content.services.len()) * services::CARD_ROWS
        }
        Section::Portfolio => {
            SECTION_HEADER_ROWS + grid_rows(content.projects.len()) * portfolio::CARD_ROWS
        }
        Section::Testimonials => testimonials::HEIGHT,
        Section::Contact => contact::HEIGHT,
    })
}

/// Draw one section into the page canvas
pub fn render_section(
    section: Section,
    buf: &mut Buffer,
    area: Rect,
    app: &App,
    hits: &mut HitMap,
) {
    match section {
        Section::Home => hero::render(buf, area, app, hits),
        Section::Stats => stats::render(buf, area, app),
        Section::Services => services::render(buf, area, app),
        Section::Portfolio => portfolio::render(buf, area, app, hits),
        Section::Testimonials => testimonials::render(buf, area, app, hits),
        Section::Contact => contact::render(buf, area, app, hits),
    }

    // Sections still fading in are drawn dimmed
    if app.page.reveal_progress(section, app.now) < 1.0 {
        buf.set_style(area, app.theme.muted_style().add_modifier(Modifier::DIM));
    }
}

/// Centered section heading on the first row of `area`
pub fn render_heading(buf: &mut Buffer, area: Rect, text: &str, theme: &Theme) {
    let row = Rect { height: 1, ..area };
    Paragraph::new(Line::styled(text.to_string(), theme.heading_style()))
        .alignment(Alignment::Center)
        .render(row, buf);
}

/// Cell rectangles of a grid with `GRID_COLUMNS` columns, row-major
pub fn grid_cells(area: Rect, count: usize, cell_height: u16) -> Vec<Rect> {
    let columns = GRID_COLUMNS as u16;
    let cell_width = area.width / columns;
    (0..count)
        .map(|i| {
            let col = i as u16 % columns;
            let row = i as u16 / columns;
            Rect::new(
                area.x + col * cell_width,
                area.y + row * cell_height,
                cell_width,
                cell_height,
            )
            .intersection(area)
        })
        .collect()
}

/// Copy `src` into `dst` shifted `dx` columns to the right, clipped to `area`
pub fn blit(src: &Buffer, dst: &mut Buffer, area: Rect, dx: i32, extra: Modifier) {
    let src_area = src.area;
    for y in 0..src_area.height.min(area.height) {
        for x in 0..src_area.width {
            let target_x = i32::from(area.x) + i32::from(x) + dx;
            if target_x < i32::from(area.x) || target_x >= i32::from(area.right()) {
                continue;
            }
            let (Some(cell), Some(out)) = (
                src.cell((src_area.x + x, src_area.y + y)),
                dst.cell_mut((target_x as u16, area.y + y)),
            ) else {
                continue;
            };
            *out = cell.clone();
            if !extra.is_empty() {
                out.modifier.insert(extra);
            }
        }
    }
}
