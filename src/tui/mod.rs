//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the deck,
//! and turns raw keyboard and mouse events into core::Action values via
//! the input adapters.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Terminal Stand-ins
//!
//! A terminal has no pixel wheel deltas and no touch screen, so:
//!
//! - Each wheel notch counts as `wheel_step` units of scroll (default 100,
//!   comfortably past the 50-unit threshold).
//! - A left-button drag is a swipe. Rows are scaled by `cell_height` so the
//!   touch threshold keeps its pixel meaning: with 20 units per row, a drag
//!   of three rows or more navigates.
//! - A press that lands on a navbar link, the logo, or a nav dot is a direct
//!   selection instead of the start of a swipe.
//!
//! ## Redraw Strategy
//!
//! - **Transitioning**: draws every ~33ms so the slide-in plays smoothly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
pub mod event;
mod theme;
pub mod timer;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::{Position, Rect, Size};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::content::Portfolio;
use crate::core::input::InputAdapters;
use crate::core::state::Deck;
use crate::tui::component::EventHandler;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::timer::TransitionTimer;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Mouse capture for the lifetime of the presentation.
///
/// Created once when the deck is mounted and released on drop, so the
/// wheel/drag/click listeners are attached and detached exactly once.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Routes terminal events through the four input adapters.
///
/// Holds the only mutable adapter state (the pending swipe start). Everything
/// it emits goes through `update`, which decides whether it is accepted.
pub struct InputRouter {
    adapters: InputAdapters,
    wheel_step: i32,
    cell_height: i32,
    initials: String,
    titles: Vec<String>,
    slide_count: usize,
    /// Props: the current frame size, synced by the event loop before dispatch.
    pub frame_area: Rect,
}

impl InputRouter {
    pub fn new(config: &ResolvedConfig, portfolio: &Portfolio) -> Self {
        let slide_count = portfolio.slide_count();
        Self {
            adapters: InputAdapters::new(
                slide_count,
                config.wheel_threshold,
                config.touch_threshold,
            ),
            wheel_step: config.wheel_step,
            cell_height: config.cell_height,
            initials: portfolio.initials.clone(),
            titles: portfolio.titles(),
            slide_count,
            frame_area: Rect::default(),
        }
    }

    fn row_to_y(&self, row: u16) -> i32 {
        i32::from(row).saturating_mul(self.cell_height)
    }
}

impl EventHandler for InputRouter {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let command = match *event {
            TuiEvent::Quit | TuiEvent::ForceQuit => return Some(Action::Quit),
            TuiEvent::Resize => return None,
            TuiEvent::Key(key) => self.adapters.keyboard.on_key(key),
            TuiEvent::Wheel(notches) => self
                .adapters
                .wheel
                .on_wheel(notches.saturating_mul(self.wheel_step)),
            TuiEvent::PointerDown(column, row) => {
                let hit = ui::hit_test(
                    Position::new(column, row),
                    self.frame_area,
                    &self.initials,
                    &self.titles,
                    self.slide_count,
                );
                match hit {
                    Some(index) => {
                        // A click is never the end of an earlier, unfinished swipe
                        self.adapters.touch.cancel();
                        Some(self.adapters.direct.on_select(index))
                    }
                    None => {
                        self.adapters.touch.on_touch_start(self.row_to_y(row));
                        None
                    }
                }
            }
            TuiEvent::PointerUp(_, row) => {
                self.adapters.touch.on_touch_end(self.row_to_y(row))
            }
        };
        command.map(Action::Navigate)
    }
}

/// The frame area clicks in `events` should be hit-tested against.
///
/// The last drawn frame is stale once the batch contains a resize, since the
/// new size only reaches the layout on the next draw.
fn hit_test_area(
    events: &[TuiEvent],
    drawn: Rect,
    size: impl FnOnce() -> std::io::Result<Size>,
) -> std::io::Result<Rect> {
    if events.contains(&TuiEvent::Resize) {
        let size = size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    } else {
        Ok(drawn)
    }
}

/// Apply an action and carry out the timer side of its effect.
pub fn dispatch(deck: &mut Deck, timer: &mut TransitionTimer, action: Action) -> Effect {
    let effect = update(deck, action);
    if let Effect::ScheduleUnlock(after) = effect {
        timer.schedule(after);
    }
    effect
}

/// Mount the deck and run until the user quits. Must be called inside a tokio runtime.
pub fn run(config: ResolvedConfig, portfolio: Portfolio) -> std::io::Result<()> {
    let mut deck = Deck::new(portfolio.slide_count(), config.transition);
    let titles = portfolio.titles();
    let mut router = InputRouter::new(&config, &portfolio);

    // Channel for actions from timer tasks
    let (tx, rx) = mpsc::channel();
    let mut timer = TransitionTimer::new(tx);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };
    info!(
        "Presenting {} slides, transition {}ms",
        deck.slide_count,
        deck.transition.as_millis()
    );

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        let animating = deck.is_locked();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let drawn =
                terminal.draw(|f| ui::draw_ui(f, &deck, &portfolio, &titles, Instant::now()));
            if let Err(e) = drawn {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating { FRAME_INTERVAL } else { IDLE_POLL };
        let mut events = match poll_event_timeout(timeout) {
            Ok(first) => first.into_iter().collect::<Vec<_>>(),
            Err(e) => break Err(e),
        };
        // Drain everything pending before the next draw
        loop {
            match poll_event_immediate() {
                Ok(Some(event)) => events.push(event),
                Ok(None) => break,
                Err(e) => {
                    debug!("Stopped draining events: {}", e);
                    break;
                }
            }
        }

        if !events.is_empty() {
            needs_redraw = true;
            let drawn = terminal.get_frame().area();
            match hit_test_area(&events, drawn, || terminal.size()) {
                Ok(area) => router.frame_area = area,
                Err(e) => break Err(e),
            }
        }

        let mut should_quit = false;
        for event in &events {
            if let Some(action) = router.handle_event(event) {
                should_quit |= dispatch(&mut deck, &mut timer, action) == Effect::Quit;
            }
        }

        // Lock releases from the timer
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            should_quit |= dispatch(&mut deck, &mut timer, action) == Effect::Quit;
        }

        if should_quit {
            break Ok(());
        }
    };

    timer.cancel_all();
    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Deck unmounted at slide {}", deck.current());
    result
}
