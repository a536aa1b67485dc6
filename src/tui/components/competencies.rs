//! # Competencies Panel
//!
//! Grid of skill cards: title in the border, description inside.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::content::Skill;
use crate::tui::component::Component;
use crate::tui::components::layout::{card_height, card_width, grid_columns, grid_rects};
use crate::tui::theme;

pub struct Competencies<'a> {
    skills: &'a [Skill],
}

impl<'a> Competencies<'a> {
    pub fn new(skills: &'a [Skill]) -> Self {
        Self { skills }
    }
}

impl Component for Competencies<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cols = grid_columns(area.width, 3);
        let width = card_width(area.width, cols);
        let heights: Vec<u16> = self
            .skills
            .iter()
            .map(|skill| card_height(&[skill.desc.as_str()], 0, width))
            .collect();

        for (skill, rect) in self.skills.iter().zip(grid_rects(area, &heights, cols)) {
            if rect.is_empty() {
                continue;
            }
            let block = Block::bordered()
                .border_style(theme::border())
                .title(Span::styled(format!(" {} ", skill.title), theme::heading()))
                .padding(Padding::horizontal(1));
            frame.render_widget(
                Paragraph::new(skill.desc.as_str())
                    .style(theme::body())
                    .block(block)
                    .wrap(Wrap { trim: true }),
                rect,
            );
        }
    }
}
