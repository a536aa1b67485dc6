//! Palette shared by every component.
//!
//! Lavender accents on the terminal's own background, so the slides stay
//! readable on both dark and light themes.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0x9B, 0x8A, 0xC4);
pub const ACCENT_STRONG: Color = Color::Rgb(0x6B, 0x5B, 0x9C);
pub const MUTED: Color = Color::DarkGray;

pub fn heading() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn body() -> Style {
    Style::default()
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn border() -> Style {
    Style::default().fg(ACCENT_STRONG)
}

pub fn active() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}
