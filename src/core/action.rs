//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User scrolls the wheel past the threshold? That's `Action::Navigate(Command::Next)`.
//! The transition timer fires? That's `Action::TransitionElapsed`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any I/O the caller must perform.
//! No side effects here. Timers are scheduled elsewhere.
//!
//! ```text
//! Deck + Action  →  update()  →  Deck' + Effect
//! ```
//!
//! Every input adapter funnels into the same three `Command`s, so this reducer
//! is the only place that decides whether a slide change happens.

use log::{debug, info, warn};
use std::time::{Duration, Instant};

use crate::core::state::Deck;

/// A navigation request, independent of the input that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Command),
    /// The lock-release timer scheduled by `Effect::ScheduleUnlock` has fired.
    TransitionElapsed,
    Quit,
}

/// What the caller must do after `update()` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Release the lock by dispatching `Action::TransitionElapsed` after this long.
    ScheduleUnlock(Duration),
    Quit,
}

pub fn update(deck: &mut Deck, action: Action) -> Effect {
    match action {
        Action::Navigate(command) => navigate(deck, command),
        Action::TransitionElapsed => {
            deck.nav.locked = false;
            deck.transition_started = None;
            debug!("Transition finished at slide {}", deck.current());
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested at slide {}", deck.current());
            Effect::Quit
        }
    }
}

fn navigate(deck: &mut Deck, command: Command) -> Effect {
    if deck.nav.locked {
        debug!("Dropped {:?}: transition in progress", command);
        return Effect::None;
    }

    let current = deck.current();
    let target = match command {
        Command::Next if current < deck.last_index() => current + 1,
        Command::Previous if current > 0 => current - 1,
        Command::GoTo(index) if index >= deck.slide_count => {
            warn!(
                "Rejected GoTo({}): deck only has {} slides",
                index, deck.slide_count
            );
            return Effect::None;
        }
        Command::GoTo(index) if index != current => index,
        _ => {
            debug!("Ignored {:?} at slide {}", command, current);
            return Effect::None;
        }
    };

    deck.nav.locked = true;
    deck.previous_index = current;
    deck.nav.current_index = target;
    deck.transition_started = Some(Instant::now());
    debug!("Slide {} -> {} via {:?}", current, target, command);

    Effect::ScheduleUnlock(deck.transition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_deck;

    fn nav(deck: &mut Deck, command: Command) -> Effect {
        update(deck, Action::Navigate(command))
    }

    fn elapse(deck: &mut Deck) {
        assert_eq!(update(deck, Action::TransitionElapsed), Effect::None);
    }

    #[test]
    fn test_next_locks_and_schedules_unlock() {
        let mut deck = test_deck();
        let effect = nav(&mut deck, Command::Next);

        assert_eq!(effect, Effect::ScheduleUnlock(Duration::from_millis(800)));
        assert_eq!(deck.current(), 1);
        assert!(deck.is_locked());
        assert_eq!(deck.previous_index, 0);
        assert!(deck.transition_started.is_some());
    }

    #[test]
    fn test_only_first_call_in_idle_window_counts() {
        let mut deck = test_deck();
        assert_ne!(nav(&mut deck, Command::Next), Effect::None);
        assert_eq!(nav(&mut deck, Command::Next), Effect::None);
        assert_eq!(nav(&mut deck, Command::Previous), Effect::None);
        assert_eq!(nav(&mut deck, Command::GoTo(3)), Effect::None);
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn test_unlock_accepts_new_navigation() {
        let mut deck = test_deck();
        nav(&mut deck, Command::Next);
        elapse(&mut deck);

        assert!(!deck.is_locked());
        assert!(deck.transition_started.is_none());
        assert_ne!(nav(&mut deck, Command::Next), Effect::None);
        assert_eq!(deck.current(), 2);
    }

    #[test]
    fn test_next_at_last_slide_is_noop() {
        let mut deck = test_deck();
        for expected in 1..=3 {
            nav(&mut deck, Command::Next);
            elapse(&mut deck);
            assert_eq!(deck.current(), expected);
        }

        assert_eq!(nav(&mut deck, Command::Next), Effect::None);
        assert_eq!(deck.current(), 3);
        assert!(!deck.is_locked());
    }

    #[test]
    fn test_previous_at_first_slide_is_noop() {
        let mut deck = test_deck();
        assert_eq!(nav(&mut deck, Command::Previous), Effect::None);
        assert_eq!(deck.current(), 0);
        assert!(!deck.is_locked());
    }

    #[test]
    fn test_previous_moves_back() {
        let mut deck = test_deck();
        nav(&mut deck, Command::GoTo(2));
        elapse(&mut deck);
        nav(&mut deck, Command::Previous);
        assert_eq!(deck.current(), 1);
        assert_eq!(deck.previous_index, 2);
    }

    #[test]
    fn test_goto_sets_index_exactly() {
        let mut deck = test_deck();
        assert_ne!(nav(&mut deck, Command::GoTo(3)), Effect::None);
        assert_eq!(deck.current(), 3);
    }

    #[test]
    fn test_goto_current_is_noop() {
        let mut deck = test_deck();
        assert_eq!(nav(&mut deck, Command::GoTo(0)), Effect::None);
        assert!(!deck.is_locked());
    }

    #[test]
    fn test_goto_out_of_range_leaves_state_untouched() {
        let mut deck = test_deck();
        let before = deck.nav;
        assert_eq!(nav(&mut deck, Command::GoTo(4)), Effect::None);
        assert_eq!(nav(&mut deck, Command::GoTo(usize::MAX)), Effect::None);
        assert_eq!(deck.nav, before);
        assert!(deck.transition_started.is_none());
    }

    #[test]
    fn test_goto_twice_in_succession() {
        let mut deck = test_deck();
        assert_ne!(nav(&mut deck, Command::GoTo(2)), Effect::None);
        assert_eq!(nav(&mut deck, Command::GoTo(2)), Effect::None);
        assert_eq!(deck.current(), 2);
        assert_eq!(deck.previous_index, 0);
    }

    #[test]
    fn test_elapsed_while_idle_is_harmless() {
        let mut deck = test_deck();
        elapse(&mut deck);
        assert_eq!(deck.current(), 0);
        assert!(!deck.is_locked());
    }

    #[test]
    fn test_quit_effect() {
        let mut deck = test_deck();
        assert_eq!(update(&mut deck, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_single_slide_deck_never_transitions() {
        let mut deck = Deck::new(1, Duration::from_millis(800));
        assert_eq!(nav(&mut deck, Command::Next), Effect::None);
        assert_eq!(nav(&mut deck, Command::Previous), Effect::None);
        assert_eq!(nav(&mut deck, Command::GoTo(0)), Effect::None);
        assert!(!deck.is_locked());
    }
}
