//! # Application State
//!
//! Core presentation state for Folio. This module contains domain logic only -
//! no TUI-specific types. Layout and hit-test caches live in the `tui` module.
//!
//! ```text
//! Deck
//! ├── nav: NavigationState            // current slide + transition lock
//! ├── slide_count: usize              // N, fixed for the lifetime of the deck
//! ├── transition: Duration            // D, how long the lock is held
//! ├── previous_index: usize           // slide we came from (slide-in direction)
//! └── transition_started: Option      // when the current lock was taken
//! ```
//!
//! State changes only happen through `update(deck, action)` in action.rs.

use std::time::{Duration, Instant};

/// Which half of the controller's two-state machine we're in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting navigation.
    Idle,
    /// A transition is animating; navigation is dropped until the lock clears.
    Transitioning,
}

/// The single source of truth for which slide is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_index: usize,
    pub locked: bool,
}

impl NavigationState {
    pub fn phase(&self) -> Phase {
        if self.locked {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }
}

pub struct Deck {
    pub nav: NavigationState,
    pub slide_count: usize,
    pub transition: Duration,
    pub previous_index: usize,
    /// Set when a transition is accepted, cleared when the lock releases.
    pub transition_started: Option<Instant>,
}

impl Deck {
    /// Create a deck at slide 0, unlocked.
    ///
    /// `slide_count` is clamped to at least one slide so the index range is never empty.
    pub fn new(slide_count: usize, transition: Duration) -> Self {
        Self {
            nav: NavigationState::default(),
            slide_count: slide_count.max(1),
            transition,
            previous_index: 0,
            transition_started: None,
        }
    }

    pub fn current(&self) -> usize {
        self.nav.current_index
    }

    pub fn is_locked(&self) -> bool {
        self.nav.locked
    }

    pub fn last_index(&self) -> usize {
        self.slide_count - 1
    }

    /// Fraction of the current transition that has elapsed, in `[0.0, 1.0]`.
    ///
    /// Returns 1.0 when idle. The renderer uses this for the slide-in offset;
    /// the controller itself never reads it.
    pub fn transition_progress(&self, now: Instant) -> f32 {
        match self.transition_started {
            Some(started) if !self.transition.is_zero() => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / self.transition.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_deck;

    #[test]
    fn test_deck_new_defaults() {
        let deck = test_deck();
        assert_eq!(deck.current(), 0);
        assert!(!deck.is_locked());
        assert_eq!(deck.nav.phase(), Phase::Idle);
        assert_eq!(deck.slide_count, 4);
        assert_eq!(deck.transition, Duration::from_millis(800));
    }

    #[test]
    fn test_zero_slides_clamped_to_one() {
        let deck = Deck::new(0, Duration::from_millis(800));
        assert_eq!(deck.slide_count, 1);
        assert_eq!(deck.last_index(), 0);
    }

    #[test]
    fn test_progress_is_complete_when_idle() {
        let deck = test_deck();
        assert_eq!(deck.transition_progress(Instant::now()), 1.0);
    }

    #[test]
    fn test_progress_midway() {
        let mut deck = test_deck();
        let start = Instant::now();
        deck.transition_started = Some(start);
        let progress = deck.transition_progress(start + Duration::from_millis(400));
        assert!((progress - 0.5).abs() < 0.01);
        assert_eq!(deck.transition_progress(start + Duration::from_secs(5)), 1.0);
    }
}
