// Mouse hit testing
//
// Rendering records the screen rectangle of every clickable element; the
// mouse handler asks which element sits under the pointer. Regions pushed
// later are drawn later, so they win over earlier ones.

use super::form::FormSlot;
use super::page::Section;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Inline nav link or hero call-to-action
    NavLink(Section),
    MenuToggle,
    MenuEntry(Section),
    /// The slide viewport (hover pauses autoplay, drags swipe)
    Carousel,
    Indicator(usize),
    Project(usize),
    Form(FormSlot),
    ModalBody,
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Move regions recorded on the page canvas into screen space: shift up
    /// by the scroll offset, place inside `body` and clip to it
    pub fn extend_from_canvas(&mut self, canvas: HitMap, scroll: u16, body: Rect) {
        for (area, target) in canvas.regions {
            let top = i32::from(area.y) - i32::from(scroll) + i32::from(body.y);
            let bottom = top + i32::from(area.height);
            let clipped_top = top.max(i32::from(body.y));
            let clipped_bottom = bottom.min(i32::from(body.bottom()));
            if clipped_bottom <= clipped_top {
                continue;
            }
            let screen = Rect::new(
                body.x + area.x,
                clipped_top as u16,
                area.width,
                (clipped_bottom - clipped_top) as u16,
            )
            .intersection(body);
            self.push(screen, target);
        }
    }

    /// Topmost target under a screen cell
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    /// Whether a cell lies anywhere inside a target's region
    pub fn is_over(&self, target: HitTarget, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .any(|(area, t)| *t == target && area.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_regions_win() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 10, 10), HitTarget::Carousel);
        hits.push(Rect::new(2, 2, 2, 1), HitTarget::Indicator(1));

        assert_eq!(hits.target_at(2, 2), Some(HitTarget::Indicator(1)));
        assert_eq!(hits.target_at(5, 5), Some(HitTarget::Carousel));
        assert_eq!(hits.target_at(20, 20), None);
        assert!(hits.is_over(HitTarget::Carousel, 2, 2));
    }

    #[test]
    fn canvas_regions_are_scrolled_and_clipped() {
        let mut canvas = HitMap::new();
        // Fully scrolled away
        canvas.push(Rect::new(0, 0, 5, 3), HitTarget::Project(0));
        // Straddles the window top
        canvas.push(Rect::new(0, 8, 5, 4), HitTarget::Project(1));
        // Inside the window
        canvas.push(Rect::new(0, 20, 5, 2), HitTarget::Project(2));

        let body = Rect::new(0, 3, 40, 20);
        let mut hits = HitMap::new();
        hits.extend_from_canvas(canvas, 10, body);

        assert_eq!(hits.target_at(1, 3), Some(HitTarget::Project(1)));
        assert_eq!(hits.target_at(1, 4), Some(HitTarget::Project(1)));
        assert_eq!(hits.target_at(1, 5), None);
        assert_eq!(hits.target_at(1, 13), Some(HitTarget::Project(2)));
        assert!(!hits.regions.iter().any(|(_, t)| *t == HitTarget::Project(0)));
    }
}
