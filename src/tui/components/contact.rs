// Contact section: status banner, form fields and submit button

use super::render_heading;
use crate::tui::app::App;
use crate::tui::form::{BannerKind, Field, FormSlot};
use crate::tui::hit::{HitMap, HitTarget};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const HEIGHT: u16 = 16;

const BANNER_TOP: u16 = 1;
const BOX_ROWS: u16 = 3;

/// Rows of a form slot, relative to the section top
pub fn slot_rows(slot: FormSlot) -> (u16, u16) {
    let index = FormSlot::ALL
        .iter()
        .position(|s| *s == slot)
        .unwrap_or_default() as u16;
    let top = BANNER_TOP + BOX_ROWS + index * BOX_ROWS;
    (top, top + BOX_ROWS)
}

fn row_area(area: Rect, (top, bottom): (u16, u16)) -> Rect {
    Rect::new(area.x, area.y + top, area.width, bottom - top).intersection(area)
}

pub fn render(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    render_heading(buf, area, "Get In Touch", theme);

    let form = &app.form;
    if let Some(banner) = form.banner() {
        let opacity = banner.opacity(app.now);
        if opacity > 0.0 {
            let color = match banner.kind {
                BannerKind::Success => theme.success,
                BannerKind::Error => theme.error,
            };
            let mut style = Style::default().fg(color);
            if opacity < 0.5 {
                style = style.add_modifier(Modifier::DIM);
            }
            Paragraph::new(banner.text.as_str())
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(theme.border_type)
                        .border_style(style),
                )
                .render(row_area(area, (BANNER_TOP, BANNER_TOP + BOX_ROWS)), buf);
        }
    }

    let focused = form.focused();
    for field in Field::ALL {
        let slot = FormSlot::Field(field);
        let rect = row_area(area, slot_rows(slot));
        let has_focus = focused == Some(slot);

        let mut value = form.value(field).to_string();
        if has_focus {
            value.push('▏');
        }
        // Keep the tail of long input in view
        let inner_width = rect.width.saturating_sub(2) as usize;
        let chars = value.chars().count();
        if chars > inner_width {
            value = value.chars().skip(chars - inner_width).collect();
        }

        Paragraph::new(value)
            .style(Style::default().fg(theme.foreground))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(theme.border_style(has_focus))
                    .title(Line::styled(format!(" {} ", field.label()), theme.muted_style())),
            )
            .render(rect, buf);
        hits.push(rect, HitTarget::Form(slot));
    }

    let button = row_area(area, slot_rows(FormSlot::Submit));
    let button_focused = focused == Some(FormSlot::Submit);
    let label_style = if form.is_sending() {
        theme.muted_style()
    } else {
        theme.accent_style()
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(button_focused));
    if button_focused {
        block = block.style(Style::default().bg(theme.selected_bg));
    }
    Paragraph::new(Line::styled(form.button_label(), label_style))
        .alignment(Alignment::Center)
        .block(block)
        .render(button, buf);
    hits.push(button, HitTarget::Form(FormSlot::Submit));
}
