//! # NavDots Component
//!
//! Vertical column of diamonds, one per slide, centered on the right edge.
//! The active slide's diamond is filled. Each row is a click target.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::navbar::NavTarget;
use crate::tui::theme;

const FILLED: &str = "◆";
const HOLLOW: &str = "◇";
/// Rows between dots (1 = a blank row between each).
const SPACING: u16 = 1;

pub struct NavDots {
    pub count: usize,
    pub current: usize,
}

impl NavDots {
    pub fn new(count: usize, current: usize) -> Self {
        Self { count, current }
    }

    /// One full-width row per dot, stacked and centered in `area`.
    ///
    /// Dots that don't fit in a short terminal are omitted from the bottom.
    pub fn targets(&self, area: Rect) -> Vec<NavTarget> {
        if self.count == 0 || area.height == 0 {
            return Vec::new();
        }
        let stride = 1 + SPACING;
        let column_height = (self.count as u16).saturating_mul(stride) - SPACING;
        let top = area.y + area.height.saturating_sub(column_height) / 2;

        (0..self.count)
            .map(|index| NavTarget {
                area: Rect::new(area.x, top + index as u16 * stride, area.width, 1),
                index,
            })
            .filter(|target| target.area.y < area.bottom())
            .collect()
    }
}

impl Component for NavDots {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for target in self.targets(area) {
            let span = if target.index == self.current {
                Span::styled(FILLED, theme::accent())
            } else {
                Span::styled(HOLLOW, theme::border())
            };
            frame.render_widget(
                Paragraph::new(span).alignment(Alignment::Center),
                target.area,
            );
        }
    }
}
