use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;

use crate::core::content::Portfolio;
use crate::core::state::Deck;
use crate::tui::component::Component;
use crate::tui::components::{NavDots, Navbar, SlidePanel, StatusBar};
use crate::tui::theme;

/// Width of the nav dot column on the right edge.
const DOTS_WIDTH: u16 = 4;
/// Blank columns left of the slide.
const SLIDE_MARGIN: u16 = 2;
/// Fraction of the slide height the incoming panel travels during a transition.
const SLIDE_TRAVEL: f32 = 0.3;

/// Fixed screen regions, recomputed from the frame size on every draw and hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub navbar: Rect,
    pub slide: Rect,
    pub dots: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [navbar, _, body, status] =
        Layout::vertical([Length(1), Length(1), Min(0), Length(1)]).areas(area);
    let [_, slide, dots] =
        Layout::horizontal([Length(SLIDE_MARGIN), Min(0), Length(DOTS_WIDTH)]).areas(body);
    ScreenLayout {
        navbar,
        slide,
        dots,
        status,
    }
}

pub fn draw_ui(
    frame: &mut Frame,
    deck: &Deck,
    portfolio: &Portfolio,
    titles: &[String],
    now: Instant,
) {
    let layout = screen_layout(frame.area());
    let current = deck.current();

    if let Some(slide) = portfolio.slides.get(current) {
        let area = transition_area(layout.slide, deck, now);
        SlidePanel::new(slide, portfolio).render(frame, area);
    }
    draw_watermark(frame, layout.slide, current);

    Navbar::new(&portfolio.initials, titles, current).render(frame, layout.navbar);
    NavDots::new(deck.slide_count, current).render(frame, layout.dots);
    StatusBar::new(current, deck.slide_count, deck.is_locked()).render(frame, layout.status);
}

/// Hit test: given a screen cell, find which slide (if any) a click there selects.
pub fn hit_test(
    position: Position,
    frame_area: Rect,
    initials: &str,
    titles: &[String],
    slide_count: usize,
) -> Option<usize> {
    let layout = screen_layout(frame_area);

    let navbar = Navbar::new(initials, titles, 0);
    let dots = NavDots::new(slide_count, 0);
    navbar
        .targets(layout.navbar)
        .into_iter()
        .chain(dots.targets(layout.dots))
        .find(|target| target.area.contains(position))
        .map(|target| target.index)
}

/// Where the current slide is drawn while its transition plays.
///
/// Moving forward, the panel rises from below; moving back, it drops in
/// from above. Once idle it fills the slide area.
fn transition_area(area: Rect, deck: &Deck, now: Instant) -> Rect {
    let progress = ease_in_out(deck.transition_progress(now));
    let offset = ((1.0 - progress) * area.height as f32 * SLIDE_TRAVEL) as u16;
    if offset == 0 {
        return area;
    }
    let height = area.height.saturating_sub(offset);
    if deck.current() >= deck.previous_index {
        Rect::new(area.x, area.y + offset, area.width, height)
    } else {
        Rect::new(area.x, area.y, area.width, height)
    }
}

/// Cubic ease-in-out on `[0, 1]`.
fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Faint two-digit slide number in the bottom-right corner of the slide area.
fn draw_watermark(frame: &mut Frame, area: Rect, index: usize) {
    let label = format!("{:02}", index + 1);
    let width = label.len() as u16;
    if area.width < width || area.height == 0 {
        return;
    }
    let cell = Rect::new(area.right() - width, area.bottom() - 1, width, 1);
    frame.render_widget(
        Span::styled(label, theme::muted().add_modifier(Modifier::DIM)),
        cell,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Command, update};
    use crate::test_support::{test_deck, test_portfolio};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn screen_text(deck: &Deck, width: u16, height: u16) -> String {
        let portfolio = test_portfolio();
        let titles = portfolio.titles();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| draw_ui(f, deck, &portfolio, &titles, Instant::now()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_screen_layout() {
        let layout = screen_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.navbar, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.status, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.slide, Rect::new(2, 2, 94, 27));
        assert_eq!(layout.dots, Rect::new(96, 2, 4, 27));
    }

    #[test]
    fn test_draw_ui_first_slide() {
        let deck = test_deck();
        let text = screen_text(&deck, 120, 40);
        assert!(text.contains("SK."));
        assert!(text.contains("ABOUT ME"));
        assert!(text.contains("INTRODUCTION"));
        assert!(text.contains("01"));
        assert!(text.contains("1 / 4"));
    }

    #[test]
    fn test_draw_ui_follows_current_slide() {
        let mut deck = test_deck();
        update(&mut deck, Action::Navigate(Command::GoTo(2)));
        update(&mut deck, Action::TransitionElapsed);
        let text = screen_text(&deck, 120, 40);
        assert!(text.contains("Professional"));
        assert!(text.contains("03"));
        assert!(!text.contains("INTRODUCTION"));
    }

    #[test]
    fn test_draw_ui_tiny_terminal() {
        let deck = test_deck();
        screen_text(&deck, 5, 3);
    }

    #[test]
    fn test_hit_test_navbar_links_and_logo() {
        let portfolio = test_portfolio();
        let titles = portfolio.titles();
        let area = Rect::new(0, 0, 100, 30);
        let hit = |x, y| hit_test(Position::new(x, y), area, "SK", &titles, 4);

        // Links occupy the right end of row 0 (see Navbar::targets)
        assert_eq!(hit(1, 0), Some(0));
        assert_eq!(hit(47, 0), Some(0));
        assert_eq!(hit(60, 0), Some(1));
        assert_eq!(hit(80, 0), Some(2));
        assert_eq!(hit(95, 0), Some(3));
        assert_eq!(hit(20, 0), None);
    }

    #[test]
    fn test_hit_test_dots() {
        let portfolio = test_portfolio();
        let titles = portfolio.titles();
        let area = Rect::new(0, 0, 100, 30);
        let layout = screen_layout(area);
        let dots = NavDots::new(4, 0).targets(layout.dots);

        for target in dots {
            let position = Position::new(layout.dots.x + 1, target.area.y);
            assert_eq!(
                hit_test(position, area, "SK", &titles, 4),
                Some(target.index)
            );
        }
        // Slide body is not a target
        assert_eq!(hit_test(Position::new(40, 15), area, "SK", &titles, 4), None);
    }

    #[test]
    fn test_transition_area_slides_in() {
        let mut deck = test_deck();
        let area = Rect::new(0, 0, 80, 30);
        let now = Instant::now();
        assert_eq!(transition_area(area, &deck, now), area);

        update(&mut deck, Action::Navigate(Command::Next));
        deck.transition_started = Some(now);
        let start = transition_area(area, &deck, now);
        assert_eq!(start.y, 9);
        assert_eq!(start.height, 21);

        let done = transition_area(area, &deck, now + Duration::from_millis(800));
        assert_eq!(done, area);
    }

    #[test]
    fn test_transition_area_backward_keeps_top() {
        let mut deck = test_deck();
        update(&mut deck, Action::Navigate(Command::GoTo(2)));
        update(&mut deck, Action::TransitionElapsed);
        update(&mut deck, Action::Navigate(Command::Previous));
        let now = Instant::now();
        deck.transition_started = Some(now);

        let area = Rect::new(0, 0, 80, 30);
        let rect = transition_area(area, &deck, now);
        assert_eq!(rect.y, 0);
        assert_eq!(rect.height, 21);
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }
}
