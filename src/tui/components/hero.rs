// Hero section: name, typed role and call-to-action buttons

use crate::tui::app::App;
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::page::Section;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub const HEIGHT: u16 = 11;

const CONTACT_LABEL: &str = "[ Contact Me ]";
const PORTFOLIO_LABEL: &str = "[ View Portfolio ]";

pub fn render(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    let [_, greeting, role, _, tagline, _, buttons, _] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    Paragraph::new(Line::from(vec![
        Span::styled("Hi, I'm ", theme.heading_style()),
        Span::styled(app.content.name.clone(), theme.accent_style()),
    ]))
    .alignment(Alignment::Center)
    .render(greeting, buf);

    // Without the effect the first phrase sits there, fully typed
    let role_line = match &app.typing {
        Some(typing) => {
            let cursor = if typing.cursor_visible(app.now) { "▌" } else { " " };
            Line::from(vec![
                Span::styled(typing.text(), Style::default().fg(theme.foreground)),
                Span::styled(cursor, Style::default().fg(theme.accent)),
            ])
        }
        None => Line::styled(
            app.content.phrases.first().cloned().unwrap_or_default(),
            Style::default().fg(theme.foreground),
        ),
    };
    Paragraph::new(role_line)
        .alignment(Alignment::Center)
        .render(role, buf);

    Paragraph::new(app.content.tagline.as_str())
        .style(theme.muted_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(tagline, buf);

    let [_, contact, _, portfolio, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(CONTACT_LABEL.width() as u16),
        Constraint::Length(3),
        Constraint::Length(PORTFOLIO_LABEL.width() as u16),
        Constraint::Fill(1),
    ])
    .areas(buttons);

    let button = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    Paragraph::new(CONTACT_LABEL).style(button).render(contact, buf);
    Paragraph::new(PORTFOLIO_LABEL)
        .style(Style::default().fg(theme.foreground))
        .render(portfolio, buf);

    hits.push(contact, HitTarget::NavLink(Section::Contact));
    hits.push(portfolio, HitTarget::NavLink(Section::Portfolio));
}
