//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::Duration;

use crate::core::content::Portfolio;
use crate::core::state::Deck;

/// Creates a four-slide deck with the default 800ms transition.
pub fn test_deck() -> Deck {
    Deck::new(4, Duration::from_millis(800))
}

/// The bundled portfolio, which always has four slides.
pub fn test_portfolio() -> Portfolio {
    Portfolio::bundled().expect("bundled portfolio must parse")
}
