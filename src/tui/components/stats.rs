// Statistics section: counters that count up once the section is seen

use crate::tui::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Rows per statistic: value, label, spacer
pub const STAT_ROWS: u16 = 3;

pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
    let theme = &app.theme;
    let columns = app.breakpoint().stat_columns().max(1);
    let body = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };
    let cell_width = body.width / columns;

    for (i, (stat, counter)) in app.content.stats.iter().zip(&app.counters).enumerate() {
        let col = i as u16 % columns;
        let row = i as u16 / columns;
        let cell = Rect::new(
            body.x + col * cell_width,
            body.y + row * STAT_ROWS,
            cell_width,
            STAT_ROWS,
        )
        .intersection(body);
        if cell.is_empty() {
            continue;
        }

        let value = if app.features.counters {
            counter.label(app.now)
        } else {
            counter.final_label()
        };

        Paragraph::new(vec![
            Line::styled(value, theme.accent_style()),
            Line::styled(stat.label.clone(), theme.muted_style()),
        ])
        .alignment(Alignment::Center)
        .render(cell, buf);
    }
}
