//! # About Panel
//!
//! Introduction column (badge, heading, bio paragraphs, contact links) with a
//! profile card beside it on wide terminals.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::content::{Portfolio, Slide};
use crate::tui::component::Component;
use crate::tui::components::layout::{center_vertically, wrap_line_count};
use crate::tui::components::slide::heading_line;
use crate::tui::theme;

/// Below this width the profile card is hidden.
const CARD_MIN_WIDTH: u16 = 80;
const CARD_HEIGHT: u16 = 7;
const CARD_MAX_WIDTH: u16 = 40;

pub struct About<'a> {
    slide: &'a Slide,
    badge: Option<&'a str>,
    paragraphs: &'a [String],
    portfolio: &'a Portfolio,
}

impl<'a> About<'a> {
    pub fn new(
        slide: &'a Slide,
        badge: Option<&'a str>,
        paragraphs: &'a [String],
        portfolio: &'a Portfolio,
    ) -> Self {
        Self {
            slide,
            badge,
            paragraphs,
            portfolio,
        }
    }

    fn intro_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        if let Some(badge) = self.badge {
            lines.push(Line::from(Span::styled(
                format!(" {} ", badge.to_uppercase()),
                theme::accent().add_modifier(Modifier::REVERSED),
            )));
            lines.push(Line::default());
        }
        lines.push(heading_line(self.slide));
        lines.push(Line::default());
        for paragraph in self.paragraphs {
            lines.push(Line::from(Span::styled(paragraph.as_str(), theme::body())));
            lines.push(Line::default());
        }
        for link in &self.portfolio.links {
            lines.push(Line::from(vec![
                Span::styled(format!("→ {}", link.label), theme::accent()),
                Span::raw("  "),
                Span::styled(link.url.as_str(), theme::muted()),
            ]));
        }
        lines
    }

    /// Rendered height of the intro column at `width`.
    fn intro_height(&self, lines: &[Line], width: u16) -> u16 {
        lines
            .iter()
            .map(|line| wrap_line_count(&line.to_string(), width))
            .sum()
    }

    fn render_card(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(CARD_MAX_WIDTH);
        let card = center_vertically(Rect::new(area.x, area.y, width, area.height), CARD_HEIGHT);

        let block = Block::bordered()
            .border_style(theme::border())
            .padding(Padding::vertical(1));
        let lines = vec![
            Line::from(Span::styled(self.portfolio.owner.as_str(), theme::heading())),
            Line::from(Span::styled(
                self.portfolio.role.to_uppercase(),
                theme::muted(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            card,
        );
    }
}

impl Component for About<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (intro_area, card_area) = if area.width >= CARD_MIN_WIDTH {
            let [intro, _, card] = Layout::horizontal([
                Constraint::Percentage(60),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .areas(area);
            (intro, Some(card))
        } else {
            (area, None)
        };

        let lines = self.intro_lines();
        let height = self.intro_height(&lines, intro_area.width);
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            center_vertically(intro_area, height),
        );

        if let Some(card_area) = card_area {
            self.render_card(frame, card_area);
        }
    }
}
