//! # Experience Panel
//!
//! Timeline of jobs down a central rule. On wide terminals the dates sit
//! opposite the cards and the sides alternate; on narrow ones the date moves
//! into the card and everything hangs off the left edge.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::content::Job;
use crate::tui::component::Component;
use crate::tui::components::layout::{card_height, center_vertically};
use crate::tui::theme;

/// Below this width the timeline collapses to one column.
const SPLIT_MIN_WIDTH: u16 = 70;
const RULE_WIDTH: u16 = 3;
const MARKER: &str = "◆";
const RULE: &str = "│";

pub struct Experience<'a> {
    jobs: &'a [Job],
}

impl<'a> Experience<'a> {
    pub fn new(jobs: &'a [Job]) -> Self {
        Self { jobs }
    }

    fn card(job: &Job, show_date: bool) -> Paragraph<'_> {
        let mut lines = Vec::new();
        if show_date {
            lines.push(Line::from(Span::styled(job.date.as_str(), theme::accent())));
        }
        lines.push(Line::from(Span::styled(job.role.as_str(), theme::heading())));
        lines.push(Line::from(Span::styled(
            job.company.to_uppercase(),
            theme::muted(),
        )));
        lines.push(Line::from(Span::styled(job.desc.as_str(), theme::body())));

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_style(theme::border())
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: true })
    }

    fn card_rows(job: &Job, width: u16, show_date: bool) -> u16 {
        let header_lines = if show_date { 3 } else { 2 };
        card_height(&[job.desc.as_str()], header_lines, width)
    }
}

impl Component for Experience<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let split = area.width >= SPLIT_MIN_WIDTH;
        let card_width = if split {
            area.width.saturating_sub(RULE_WIDTH) / 2
        } else {
            area.width.saturating_sub(RULE_WIDTH)
        };

        let heights: Vec<u16> = self
            .jobs
            .iter()
            .map(|job| Self::card_rows(job, card_width, !split))
            .collect();
        let total: u16 = heights.iter().sum::<u16>() + heights.len().saturating_sub(1) as u16;
        let timeline = center_vertically(area, total);

        // Central rule, drawn first so markers and cards sit on top
        let rule_x = if split {
            timeline.x + card_width + 1
        } else {
            timeline.x + 1
        };
        for y in timeline.top()..timeline.bottom() {
            frame.render_widget(
                Span::styled(RULE, theme::border()),
                Rect::new(rule_x, y, 1, 1).intersection(area),
            );
        }

        let mut y = timeline.y;
        for (index, (job, height)) in self.jobs.iter().zip(heights).enumerate() {
            let row = Rect::new(timeline.x, y, timeline.width, height).intersection(area);
            if row.is_empty() {
                break;
            }

            if split {
                let [left, rule, right] = Layout::horizontal([
                    Constraint::Length(card_width),
                    Constraint::Length(RULE_WIDTH),
                    Constraint::Min(0),
                ])
                .areas(row);

                // Even entries put the card on the right, odd ones on the left
                let (date_area, card_area, date_alignment) = if index % 2 == 0 {
                    (left, right, Alignment::Right)
                } else {
                    (right, left, Alignment::Left)
                };
                let date_line = Rect::new(date_area.x, date_area.y + 1, date_area.width, 1)
                    .intersection(row);
                frame.render_widget(
                    Paragraph::new(Span::styled(job.date.as_str(), theme::accent()))
                        .alignment(date_alignment),
                    date_line,
                );
                frame.render_widget(
                    Paragraph::new(Span::styled(MARKER, theme::accent()))
                        .alignment(Alignment::Center),
                    Rect::new(rule.x, rule.y + 1, rule.width, 1).intersection(row),
                );
                frame.render_widget(Self::card(job, false), card_area);
            } else {
                let [rule, card_area] =
                    Layout::horizontal([Constraint::Length(RULE_WIDTH), Constraint::Min(0)])
                        .areas(row);
                frame.render_widget(
                    Paragraph::new(Span::styled(MARKER, theme::accent()))
                        .alignment(Alignment::Center),
                    Rect::new(rule.x, rule.y + 1, rule.width, 1).intersection(row),
                );
                frame.render_widget(Self::card(job, true), card_area);
            }

            y = y.saturating_add(height + 1);
        }
    }
}
