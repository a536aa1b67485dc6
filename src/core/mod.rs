//! # Core Application Logic
//!
//! This module contains Folio's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (nav state)     │
//!                    │  • Action / Command     │
//!                    │  • update() (reducer)   │
//!                    │  • input adapters       │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Tests    │
//!     │  Adapter   │      │  Adapter   │      │            │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Deck` struct, navigation state in one place
//! - [`action`]: `Action`, `Command`, `Effect` and the `update()` reducer
//! - [`input`]: Wheel, touch, keyboard and direct-click adapters
//! - [`content`]: The static portfolio shown on the slides
//! - [`config`]: Layered settings (defaults, file, env, CLI)

pub mod action;
pub mod config;
pub mod content;
pub mod input;
pub mod state;
