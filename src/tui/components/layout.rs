//! Pure sizing helpers for card-based panels.
//!
//! Cards are measured before they are drawn so a grid row can be as tall as
//! its tallest card. Wrapping uses `textwrap` with the same options as
//! Ratatui's `Paragraph` wrapping so the prediction matches the render.

use ratatui::layout::Rect;

/// Border (2) + padding (2) consumed horizontally by a card block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Blank columns between cards in a grid row
pub(super) const GUTTER: u16 = 2;

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Count wrapped lines for `text` at `width` columns. Never less than 1.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }
    (textwrap::wrap(text, wrap_options(width)).len() as u16).max(1)
}

/// Height of a bordered card of `card_width` columns holding `paragraphs`,
/// plus `extra_lines` of single-line content.
pub(super) fn card_height(paragraphs: &[&str], extra_lines: u16, card_width: u16) -> u16 {
    let inner = card_width.saturating_sub(HORIZONTAL_OVERHEAD);
    let text: u16 = paragraphs.iter().map(|p| wrap_line_count(p, inner)).sum();
    text + extra_lines + VERTICAL_OVERHEAD
}

/// How many card columns fit in `width`, capped at `max`.
pub(super) fn grid_columns(width: u16, max: usize) -> usize {
    let cols = match width {
        0..=69 => 1,
        70..=119 => 2,
        _ => 3,
    };
    cols.min(max).max(1)
}

/// Width of each card when `cols` cards share `width` columns.
pub(super) fn card_width(width: u16, cols: usize) -> u16 {
    let cols = cols.max(1) as u16;
    width.saturating_sub(GUTTER * (cols - 1)) / cols
}

/// Lay cards out left-to-right, top-to-bottom. Each row is as tall as its
/// tallest card. Cards that fall outside `area` are clipped or dropped.
pub(super) fn grid_rects(area: Rect, heights: &[u16], cols: usize) -> Vec<Rect> {
    let cols = cols.max(1);
    let width = card_width(area.width, cols);
    let mut rects = Vec::with_capacity(heights.len());
    let mut y = area.y;

    for row in heights.chunks(cols) {
        let row_height = row.iter().copied().max().unwrap_or(0);
        for (col, _) in row.iter().enumerate() {
            let x = area.x + col as u16 * (width + GUTTER);
            let rect = Rect::new(x, y, width, row_height).intersection(area);
            rects.push(rect);
        }
        y = y.saturating_add(row_height + 1);
    }

    rects
}

/// Rect of `height` rows centered vertically in `area` (clamped to `area`).
pub(super) fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = (area.height - height) / 2;
    Rect::new(area.x, area.y + top, area.width, height)
}
