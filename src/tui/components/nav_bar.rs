// Navigation bar and the collapsed-nav dropdown
//
// Wide terminals get inline section links with the active section
// highlighted. Compact ones get a single menu toggle; the dropdown it opens
// is drawn over the page by `render_menu`.

use crate::tui::app::App;
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::layout::Breakpoint;
use crate::tui::page::Section;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Gap between inline links
const LINK_GAP: u16 = 2;

pub const HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    let mut block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style(false));
    if app.page.is_scrolled() {
        block = block.style(Style::default().bg(theme.nav_scrolled_bg));
    }
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let row = Rect {
        y: inner.y + inner.height.saturating_sub(1) / 2,
        height: 1,
        ..inner
    };

    let brand = format!(" {}", app.content.name);
    f.render_widget(
        Paragraph::new(Line::styled(brand, theme.accent_style())),
        row,
    );

    if app.breakpoint() == Breakpoint::Compact {
        let label = if app.menu.is_expanded() {
            "✕ Close "
        } else {
            "☰ Menu "
        };
        let width = label.width() as u16;
        let toggle = Rect {
            x: row.right().saturating_sub(width),
            width: width.min(row.width),
            ..row
        };
        f.render_widget(
            Paragraph::new(label).style(Style::default().fg(theme.nav_link)),
            toggle,
        );
        hits.push(toggle, HitTarget::MenuToggle);
        return;
    }

    let active = app.page.active_section();
    let total: u16 = Section::ALL
        .iter()
        .map(|s| s.title().width() as u16 + LINK_GAP)
        .sum();
    let mut x = row.right().saturating_sub(total);

    for section in Section::ALL {
        let width = section.title().width() as u16;
        let style = if section == active {
            Style::default()
                .fg(theme.nav_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.nav_link)
        };
        let link = Rect {
            x,
            width,
            ..row
        }
        .intersection(row);
        f.render_widget(Paragraph::new(Span::styled(section.title(), style)), link);
        hits.push(link, HitTarget::NavLink(section));
        x += width + LINK_GAP;
    }
}

/// Dropdown under the nav bar, right-aligned over the page
pub fn render_menu(f: &mut Frame, below: Rect, app: &App, hits: &mut HitMap) {
    if app.menu.is_hidden() {
        return;
    }
    let theme = &app.theme;

    let width = Section::ALL
        .iter()
        .map(|s| s.title().width() as u16)
        .max()
        .unwrap_or(0)
        + 6;
    let height = Section::ALL.len() as u16 + 2;
    let area = Rect {
        x: below.right().saturating_sub(width),
        y: below.y,
        width: width.min(below.width),
        height: height.min(below.height),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(true))
        .style(theme.base_style());
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let active = app.page.active_section();
    for (i, section) in Section::ALL.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let mut style = if *section == active {
            Style::default().fg(theme.nav_active)
        } else {
            Style::default().fg(theme.nav_link)
        };
        if i == app.menu.selected() {
            style = style.bg(theme.selected_bg).add_modifier(Modifier::BOLD);
        }
        let entry = Rect {
            y,
            height: 1,
            ..inner
        };
        f.render_widget(
            Paragraph::new(format!(" {}", section.title())).style(style),
            entry,
        );
        hits.push(entry, HitTarget::MenuEntry(*section));
    }
}
