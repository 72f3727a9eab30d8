// Modal overlay rendering
//
// Centered box drawn over everything else. The box itself is registered as
// a hit region so clicks inside it keep it open and clicks outside close it.

use crate::tui::app::App;
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP: &[(&str, &str)] = &[
    ("↑ ↓ / j k", "scroll the page"),
    ("PgUp PgDn Home End", "scroll by pages / to the ends"),
    ("← →", "previous / next testimonial (when visible)"),
    ("1-6", "jump to a section"),
    ("Tab / Shift+Tab", "move focus through projects and the form"),
    ("Enter", "open project / next field / send"),
    ("Ctrl+S", "send the contact form"),
    ("m", "toggle the menu (narrow terminals)"),
    ("t", "next theme"),
    ("l", "toggle the log strip"),
    ("q / Esc", "quit / close"),
];

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

pub fn render(f: &mut Frame, area: Rect, app: &App, modal: Modal, hits: &mut HitMap) {
    let theme = &app.theme;

    let (title, lines) = match modal {
        Modal::Help => {
            let lines = HELP
                .iter()
                .map(|(keys, action)| {
                    Line::from(vec![
                        Span::styled(format!("{:<20}", keys), theme.accent_style()),
                        Span::raw(*action),
                    ])
                })
                .collect::<Vec<_>>();
            (" Keys ".to_string(), lines)
        }
        Modal::Project(index) => {
            let Some(project) = app.content.projects.get(index) else {
                return;
            };
            let lines = vec![
                Line::styled(project.category.clone(), Style::default().fg(theme.accent)),
                Line::default(),
                Line::raw(project.description()),
                Line::default(),
                Line::styled("Esc to close", theme.muted_style()),
            ];
            (format!(" {} ", project.title), lines)
        }
    };

    let width = (area.width * 3 / 4).clamp(20.min(area.width), 76);
    let height = (lines.len() as u16 + 6).min(area.height);
    let rect = centered(area, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(true))
        .title(Line::styled(title, theme.heading_style()))
        .style(theme.base_style());

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
    hits.push(rect, HitTarget::ModalBody);
}
