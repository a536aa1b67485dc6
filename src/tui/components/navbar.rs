//! # Navbar Component
//!
//! Top bar with the owner's initials on the left and one link per slide on
//! the right. Clicking a link (or the initials, which go back to the first
//! slide) is a direct navigation.
//!
//! When the links don't fit, the bar collapses to the logo plus the active
//! slide's title, and only the logo stays clickable.
//!
//! Link positions come from [`Navbar::targets`], which the renderer and the
//! mouse hit test both call, so what you see is what you click.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme;

/// Columns between adjacent links.
const LINK_GAP: u16 = 3;
/// Blank column kept at each edge of the bar.
const EDGE_PAD: u16 = 1;

/// A clickable region and the slide it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTarget {
    pub area: Rect,
    pub index: usize,
}

pub struct Navbar<'a> {
    pub initials: &'a str,
    pub titles: &'a [String],
    pub current: usize,
}

impl<'a> Navbar<'a> {
    pub fn new(initials: &'a str, titles: &'a [String], current: usize) -> Self {
        Self {
            initials,
            titles,
            current,
        }
    }

    fn logo_width(&self) -> u16 {
        // Initials plus the trailing accent dot
        self.initials.width() as u16 + 1
    }

    fn link_label(title: &str) -> String {
        title.to_uppercase()
    }

    fn links_width(&self) -> u16 {
        let labels: u16 = self
            .titles
            .iter()
            .map(|t| Self::link_label(t).width() as u16)
            .sum();
        labels + LINK_GAP * (self.titles.len().saturating_sub(1) as u16)
    }

    /// Whether the full link list doesn't fit next to the logo.
    pub fn is_compact(&self, area: Rect) -> bool {
        let needed = EDGE_PAD * 2 + self.logo_width() + LINK_GAP + self.links_width();
        needed > area.width
    }

    /// Every clickable region of the bar, left to right.
    pub fn targets(&self, area: Rect) -> Vec<NavTarget> {
        let mut targets = vec![NavTarget {
            area: Rect::new(area.x + EDGE_PAD, area.y, self.logo_width(), 1).intersection(area),
            index: 0,
        }];

        if self.is_compact(area) {
            return targets;
        }

        let mut x = area.right() - EDGE_PAD - self.links_width();
        for (index, title) in self.titles.iter().enumerate() {
            let width = Self::link_label(title).width() as u16;
            targets.push(NavTarget {
                area: Rect::new(x, area.y, width, 1),
                index,
            });
            x += width + LINK_GAP;
        }
        targets
    }
}

impl Component for Navbar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let logo = Line::from(vec![
            Span::styled(self.initials.to_string(), theme::heading()),
            Span::styled(".", theme::accent()),
        ]);
        let logo_area =
            Rect::new(area.x + EDGE_PAD, area.y, self.logo_width(), 1).intersection(area);
        frame.render_widget(Paragraph::new(logo), logo_area);

        if self.is_compact(area) {
            if let Some(title) = self.titles.get(self.current) {
                let label = Paragraph::new(Span::styled(title.clone(), theme::accent()))
                    .alignment(Alignment::Right);
                let label_area = Rect::new(
                    area.x,
                    area.y,
                    area.width.saturating_sub(EDGE_PAD),
                    1,
                );
                frame.render_widget(label, label_area);
            }
            return;
        }

        for target in self.targets(area).into_iter().skip(1) {
            let style = if target.index == self.current {
                theme::active()
            } else {
                theme::body()
            };
            let label = Self::link_label(&self.titles[target.index]);
            frame.render_widget(Paragraph::new(Span::styled(label, style)), target.area);
        }
    }
}
