//! # Slide Panel
//!
//! Picks the right body renderer for a slide and draws its heading.
//!
//! Every body renders into the area below the heading; the heading itself is
//! `heading accent`, with the accent word highlighted.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::content::{Portfolio, Slide, SlideBody};
use crate::tui::component::Component;
use crate::tui::components::{About, Competencies, Experience, Projects};
use crate::tui::theme;

pub struct SlidePanel<'a> {
    pub slide: &'a Slide,
    pub portfolio: &'a Portfolio,
}

impl<'a> SlidePanel<'a> {
    pub fn new(slide: &'a Slide, portfolio: &'a Portfolio) -> Self {
        Self { slide, portfolio }
    }
}

/// `heading accent` as a single line.
pub fn heading_line(slide: &Slide) -> Line<'static> {
    let mut spans = vec![Span::styled(slide.heading.clone(), theme::heading())];
    if !slide.accent.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(slide.accent.clone(), theme::accent()));
    }
    Line::from(spans)
}

impl Component for SlidePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // About draws its own heading inside the intro column
        if let SlideBody::About { badge, paragraphs } = &self.slide.body {
            About::new(self.slide, badge.as_deref(), paragraphs, self.portfolio)
                .render(frame, area);
            return;
        }

        let [heading_area, _, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
                .areas(area);

        let alignment = match self.slide.body {
            SlideBody::Competencies { .. } => Alignment::Left,
            _ => Alignment::Center,
        };
        frame.render_widget(
            Paragraph::new(heading_line(self.slide)).alignment(alignment),
            heading_area,
        );

        match &self.slide.body {
            SlideBody::Competencies { skills } => {
                Competencies::new(skills).render(frame, body_area)
            }
            SlideBody::Experience { jobs } => Experience::new(jobs).render(frame, body_area),
            SlideBody::Projects { projects } => Projects::new(projects).render(frame, body_area),
            SlideBody::About { .. } => {}
        }
    }
}
