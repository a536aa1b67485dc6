//! # Input Adapters
//!
//! Thin translators from one input modality to a navigation `Command`.
//! Adapters never look at the deck: they only decide whether a gesture is
//! strong enough to count, and in which direction. Whether the command is
//! accepted is up to `update()`.
//!
//! ```text
//! wheel delta ──► WheelAdapter ──┐
//! touch start/end ► TouchAdapter ─┤
//! key ──────────► KeyboardAdapter ┼──► Command ──► update()
//! click target ─► DirectAdapter ──┘
//! ```
//!
//! Units are abstract. The TUI feeds wheel notches as `±wheel_step` and
//! pointer rows scaled by `cell_height`, so thresholds keep their meaning.

use crate::core::action::Command;

pub const DEFAULT_WHEEL_THRESHOLD: i32 = 50;
pub const DEFAULT_TOUCH_THRESHOLD: i32 = 50;

/// Each wheel event is judged on its own; nothing carries over between events.
#[derive(Debug, Clone, Copy)]
pub struct WheelAdapter {
    pub threshold: i32,
}

impl Default for WheelAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_WHEEL_THRESHOLD)
    }
}

impl WheelAdapter {
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }

    pub fn on_wheel(&self, delta_y: i32) -> Option<Command> {
        if delta_y > self.threshold {
            Some(Command::Next)
        } else if delta_y < self.threshold.saturating_neg() {
            Some(Command::Previous)
        } else {
            None
        }
    }
}

/// Vertical swipe detection. Swiping up (start below end) advances.
#[derive(Debug, Clone, Copy)]
pub struct TouchAdapter {
    pub threshold: i32,
    start_y: Option<i32>,
}

impl Default for TouchAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_THRESHOLD)
    }
}

impl TouchAdapter {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            start_y: None,
        }
    }

    pub fn on_touch_start(&mut self, y: i32) {
        self.start_y = Some(y);
    }

    /// Consumes the recorded start. An end without a start is ignored.
    pub fn on_touch_end(&mut self, y: i32) -> Option<Command> {
        let start = self.start_y.take()?;
        let diff = start.saturating_sub(y);
        if diff.saturating_abs() <= self.threshold {
            return None;
        }
        if diff > 0 {
            Some(Command::Next)
        } else {
            Some(Command::Previous)
        }
    }

    /// Forget a swipe whose release never arrived.
    pub fn cancel(&mut self) {
        self.start_y = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start_y.is_some()
    }
}

/// Keys the presenter understands, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Space,
    Home,
    End,
    Digit(u8),
}

#[derive(Debug, Clone, Copy)]
pub struct KeyboardAdapter {
    slide_count: usize,
}

impl KeyboardAdapter {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count: slide_count.max(1),
        }
    }

    pub fn on_key(&self, key: NavKey) -> Option<Command> {
        match key {
            NavKey::ArrowDown | NavKey::ArrowRight | NavKey::PageDown | NavKey::Space => {
                Some(Command::Next)
            }
            NavKey::ArrowUp | NavKey::ArrowLeft | NavKey::PageUp => Some(Command::Previous),
            NavKey::Home => Some(Command::GoTo(0)),
            NavKey::End => Some(Command::GoTo(self.slide_count - 1)),
            // "1" is the first slide; "0" has no slide
            NavKey::Digit(d) if d >= 1 => Some(Command::GoTo(d as usize - 1)),
            NavKey::Digit(_) => None,
        }
    }
}

/// Nav dot, menu link, or logo click carrying an explicit slide index.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAdapter;

impl DirectAdapter {
    pub fn on_select(&self, index: usize) -> Command {
        Command::GoTo(index)
    }
}

/// All four adapters, sharing one deck through the commands they emit.
#[derive(Debug, Clone, Copy)]
pub struct InputAdapters {
    pub wheel: WheelAdapter,
    pub touch: TouchAdapter,
    pub keyboard: KeyboardAdapter,
    pub direct: DirectAdapter,
}

impl InputAdapters {
    pub fn new(slide_count: usize, wheel_threshold: i32, touch_threshold: i32) -> Self {
        Self {
            wheel: WheelAdapter::new(wheel_threshold),
            touch: TouchAdapter::new(touch_threshold),
            keyboard: KeyboardAdapter::new(slide_count),
            direct: DirectAdapter,
        }
    }
}
