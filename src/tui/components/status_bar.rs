//! # StatusBar Component
//!
//! Bottom line: slide position on the left, key hints on the right.
//!
//! ## Conditional Formatting
//!
//! 1. **Transitioning**: `"2 / 4 · …"` while the lock is held
//! 2. **Idle**: `"2 / 4"`
//!
//! Hints are dropped first when the terminal is too narrow for both.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme;

const HINTS: &str = "←↑ prev · ↓→ next · 1-9 jump · q quit ";

/// Stateless status line. All fields are props.
pub struct StatusBar {
    pub current: usize,
    pub total: usize,
    pub transitioning: bool,
}

impl StatusBar {
    pub fn new(current: usize, total: usize, transitioning: bool) -> Self {
        Self {
            current,
            total,
            transitioning,
        }
    }

    pub fn position_text(&self) -> String {
        let position = format!(" {} / {}", self.current + 1, self.total);
        if self.transitioning {
            format!("{position} · …")
        } else {
            position
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let position = self.position_text();
        frame.render_widget(
            Paragraph::new(Span::styled(position.clone(), theme::accent())),
            area,
        );

        let needed = u16::try_from(position.width() + HINTS.width()).unwrap_or(u16::MAX);
        if needed < area.width {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(HINTS, theme::muted())))
                    .alignment(Alignment::Right),
                area,
            );
        }
    }
}
