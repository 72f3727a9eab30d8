// Testimonials section: the carousel viewport and its indicators
//
// Each slide is laid out off-screen at full width, then copied into the
// viewport shifted by its pose offset. Slides below a visibility floor are
// skipped, half-faded ones are dimmed. The more opaque slide is drawn last
// so it wins where two slides overlap mid-transition.

use super::{blit, render_heading};
use crate::content::Testimonial;
use crate::tui::app::App;
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const HEIGHT: u16 = 12;

/// Rows taken by the bordered slide viewport
const VIEWPORT_ROWS: u16 = 8;

/// Rows above the slide viewport: heading and a spacer
const VIEWPORT_TOP: u16 = 2;

/// Section-relative rows `start..end` of the slide viewport
pub fn viewport_rows() -> (u16, u16) {
    (VIEWPORT_TOP, VIEWPORT_TOP + VIEWPORT_ROWS)
}

/// Below this opacity a slide is not drawn at all
const VISIBLE_FLOOR: f32 = 0.05;

fn slide_paragraph<'a>(testimonial: &'a Testimonial, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::styled(
            format!("\u{201c}{}\u{201d}", testimonial.quote),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled(testimonial.author.as_str(), theme.accent_style()),
            Span::styled(format!(" · {}", testimonial.role), theme.muted_style()),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}

pub fn render(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    render_heading(buf, area, "What Clients Say", theme);

    let viewport =
        Rect::new(area.x, area.y + VIEWPORT_TOP, area.width, VIEWPORT_ROWS).intersection(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(false));
    let inner = block.inner(viewport);
    block.render(viewport, buf);
    hits.push(viewport, HitTarget::Carousel);

    let Some(carousel) = app.carousel.as_ref() else {
        Paragraph::new("No testimonials yet.")
            .style(theme.muted_style())
            .alignment(Alignment::Center)
            .render(inner, buf);
        return;
    };

    let mut visible: Vec<_> = app
        .content
        .testimonials
        .iter()
        .enumerate()
        .filter_map(|(i, t)| {
            carousel
                .slide_pose(i, app.now)
                .filter(|pose| pose.opacity > VISIBLE_FLOOR)
                .map(|pose| (t, pose))
        })
        .collect();
    visible.sort_by(|a, b| a.1.opacity.total_cmp(&b.1.opacity));

    for (testimonial, pose) in visible {
        let mut slide = Buffer::empty(Rect::new(0, 0, inner.width, inner.height));
        // Vertical breathing room above the quote
        let text_area = Rect {
            y: 1.min(inner.height),
            height: inner.height.saturating_sub(1),
            ..slide.area
        };
        slide_paragraph(testimonial, theme).render(text_area, &mut slide);

        let dx = (pose.offset / 100.0 * f32::from(inner.width)).round() as i32;
        let dim = if pose.opacity < 0.5 {
            Modifier::DIM
        } else {
            Modifier::empty()
        };
        blit(&slide, buf, inner, dx, dim);
    }

    render_indicators(buf, area, app, hits);
}

fn render_indicators(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let Some(carousel) = app.carousel.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let row = area.y + viewport_rows().1;
    if row >= area.bottom() {
        return;
    }

    // "● ○ ○": one cell per dot, one cell gap
    let count = carousel.indicators().len() as u16;
    let width = (count * 2).saturating_sub(1);
    let start = area.x + area.width.saturating_sub(width) / 2;

    for (i, indicator) in carousel.indicators().iter().enumerate() {
        let x = start + i as u16 * 2;
        if x >= area.right() {
            break;
        }
        // Shape flips at once, colour follows the highlight animation
        let symbol = if indicator.active { "●" } else { "○" };
        let style = if indicator.highlight(app.now) >= 0.5 {
            Style::default().fg(theme.accent)
        } else {
            theme.muted_style()
        };
        buf.set_string(x, row, symbol, style);
        hits.push(Rect::new(x, row, 1, 1), HitTarget::Indicator(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::Content;
    use crate::logging::LogBuffer;
    use std::time::{Duration, Instant};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn shows_current_slide_and_dots() {
        let t0 = Instant::now();
        let app = App::new(Content::default(), &Config::default(), LogBuffer::new(), t0);
        let area = Rect::new(0, 0, 100, HEIGHT);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();

        render(&mut buf, area, &app, &mut hits);

        let text: String = (0..HEIGHT).map(|y| row_text(&buf, y)).collect();
        assert!(text.contains("Sarah Johnson"));
        assert!(!text.contains("Michael Chen"));
        assert!(row_text(&buf, 10).contains("● ○ ○"));
        assert_eq!(hits.target_at(50, 4), Some(HitTarget::Carousel));
    }

    #[test]
    fn settled_transition_shows_next_slide() {
        let t0 = Instant::now();
        let mut app = App::new(Content::default(), &Config::default(), LogBuffer::new(), t0);
        app.carousel_next(t0);
        app.tick(t0 + Duration::from_secs(2));

        let area = Rect::new(0, 0, 100, HEIGHT);
        let mut buf = Buffer::empty(area);
        render(&mut buf, area, &app, &mut HitMap::new());

        let text: String = (0..HEIGHT).map(|y| row_text(&buf, y)).collect();
        assert!(text.contains("Michael Chen"));
        assert!(!text.contains("Sarah Johnson"));
        assert!(row_text(&buf, 10).contains("○ ● ○"));
    }
}
