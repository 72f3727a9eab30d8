// Log strip - the most recent tracing events, toggled with 'l'

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const HEIGHT: u16 = 7;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style(false))
        .title(Span::styled(" Logs ", theme.muted_style()));
    let rows = block.inner(area).height as usize;

    let lines: Vec<Line> = app
        .log_buffer
        .recent(rows)
        .into_iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    theme.muted_style(),
                ),
                Span::styled(
                    format!("{:<5} ", entry.level.as_str()),
                    theme.log_style(entry.level),
                ),
                Span::styled(format!("{} ", entry.target), theme.muted_style()),
                Span::raw(entry.message),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .style(theme.base_style())
            .block(block),
        area,
    );
}
