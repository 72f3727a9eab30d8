// Services section: a grid of bordered cards

use super::{grid_cells, render_heading, SECTION_HEADER_ROWS};
use crate::tui::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const CARD_ROWS: u16 = 4;

pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
    let theme = &app.theme;
    render_heading(buf, area, "What I Do", theme);

    let grid = Rect {
        y: area.y + SECTION_HEADER_ROWS,
        height: area.height.saturating_sub(SECTION_HEADER_ROWS),
        ..area
    };
    let services = &app.content.services;

    for (service, cell) in services.iter().zip(grid_cells(grid, services.len(), CARD_ROWS)) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(false))
            .title(Line::styled(format!(" {} ", service.title), theme.accent_style()));

        Paragraph::new(service.blurb.as_str())
            .style(theme.muted_style())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(cell, buf);
    }
}
