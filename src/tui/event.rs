use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::core::input::NavKey;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit, // Ctrl+C

    // Raw gestures, run through the input adapters
    Key(NavKey),
    /// Wheel notches: positive scrolls down, negative scrolls up.
    Wheel(i32),
    PointerDown(u16, u16),
    PointerUp(u16, u16),

    Resize,
}

/// Poll for an event, waiting up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a crossterm event to a `TuiEvent`. Unhandled events map to `None`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => translate_mouse(mouse_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report release/repeat; only presses navigate
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Down) => Some(TuiEvent::Key(NavKey::ArrowDown)),
        (_, KeyCode::Right) => Some(TuiEvent::Key(NavKey::ArrowRight)),
        (_, KeyCode::Up) => Some(TuiEvent::Key(NavKey::ArrowUp)),
        (_, KeyCode::Left) => Some(TuiEvent::Key(NavKey::ArrowLeft)),
        (_, KeyCode::PageDown) => Some(TuiEvent::Key(NavKey::PageDown)),
        (_, KeyCode::PageUp) => Some(TuiEvent::Key(NavKey::PageUp)),
        (_, KeyCode::Home) => Some(TuiEvent::Key(NavKey::Home)),
        (_, KeyCode::End) => Some(TuiEvent::Key(NavKey::End)),
        (_, KeyCode::Char(' ')) => Some(TuiEvent::Key(NavKey::Space)),
        (_, KeyCode::Char(c)) => c
            .to_digit(10)
            .map(|d| TuiEvent::Key(NavKey::Digit(d as u8))),
        _ => None,
    }
}

fn translate_mouse(mouse_event: MouseEvent) -> Option<TuiEvent> {
    match mouse_event.kind {
        MouseEventKind::ScrollDown => Some(TuiEvent::Wheel(1)),
        MouseEventKind::ScrollUp => Some(TuiEvent::Wheel(-1)),
        MouseEventKind::Down(MouseButton::Left) => {
            Some(TuiEvent::PointerDown(mouse_event.column, mouse_event.row))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            Some(TuiEvent::PointerUp(mouse_event.column, mouse_event.row))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(translate(press(KeyCode::Down)), Some(TuiEvent::Key(NavKey::ArrowDown)));
        assert_eq!(translate(press(KeyCode::Right)), Some(TuiEvent::Key(NavKey::ArrowRight)));
        assert_eq!(translate(press(KeyCode::Up)), Some(TuiEvent::Key(NavKey::ArrowUp)));
        assert_eq!(translate(press(KeyCode::Left)), Some(TuiEvent::Key(NavKey::ArrowLeft)));
    }

    #[test]
    fn test_digits_and_quit() {
        assert_eq!(
            translate(press(KeyCode::Char('3'))),
            Some(TuiEvent::Key(NavKey::Digit(3)))
        );
        assert_eq!(translate(press(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(translate(press(KeyCode::Esc)), Some(TuiEvent::Quit));
        assert_eq!(translate(press(KeyCode::Char('x'))), None);
        assert_eq!(
            translate(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_mouse_events() {
        assert_eq!(translate(mouse(MouseEventKind::ScrollDown, 0, 0)), Some(TuiEvent::Wheel(1)));
        assert_eq!(translate(mouse(MouseEventKind::ScrollUp, 0, 0)), Some(TuiEvent::Wheel(-1)));
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left), 4, 9)),
            Some(TuiEvent::PointerDown(4, 9))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Up(MouseButton::Left), 4, 2)),
            Some(TuiEvent::PointerUp(4, 2))
        );
        assert_eq!(translate(mouse(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(translate(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
