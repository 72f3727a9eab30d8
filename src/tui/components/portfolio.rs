// Portfolio section: selectable project cards that open a modal

use super::{grid_cells, render_heading, GRID_COLUMNS, SECTION_HEADER_ROWS};
use crate::tui::app::App;
use crate::tui::hit::{HitMap, HitTarget};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const CARD_ROWS: u16 = 5;

/// Rows of card `index`, relative to the section top
pub fn card_rows(index: usize) -> (u16, u16) {
    let top = SECTION_HEADER_ROWS + (index / GRID_COLUMNS) as u16 * CARD_ROWS;
    (top, top + CARD_ROWS)
}

pub fn render(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    render_heading(buf, area, "Portfolio", theme);

    let grid = Rect {
        y: area.y + SECTION_HEADER_ROWS,
        height: area.height.saturating_sub(SECTION_HEADER_ROWS),
        ..area
    };
    let projects = &app.content.projects;

    for (i, (project, cell)) in projects
        .iter()
        .zip(grid_cells(grid, projects.len(), CARD_ROWS))
        .enumerate()
    {
        let focused = app.focused_project == Some(i);
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(Line::styled(format!(" {} ", project.title), theme.heading_style()));
        if focused {
            block = block.style(Style::default().bg(theme.selected_bg));
        }

        Paragraph::new(vec![
            Line::styled(project.category.clone(), Style::default().fg(theme.accent)),
            Line::styled("Enter or click to view", theme.muted_style()),
        ])
        .block(block)
        .render(cell, buf);

        hits.push(cell, HitTarget::Project(i));
    }
}
