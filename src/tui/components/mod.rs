//! # TUI Components
//!
//! This module contains all UI components for the terminal presenter.
//!
//! ## Component Architecture
//!
//! Every component here is a transient, props-based renderer: it is built
//! each frame from borrowed content and the current slide index, renders, and
//! is dropped. Persistent state (the deck, the touch start position) lives
//! elsewhere.
//!
//! ### Chrome
//!
//! - `Navbar`: logo and slide links along the top
//! - `NavDots`: slide indicator column on the right
//! - `StatusBar`: position and key hints along the bottom
//!
//! `Navbar` and `NavDots` also expose `targets()`, the clickable regions the
//! mouse hit test resolves against.
//!
//! ### Slides
//!
//! - `SlidePanel`: heading plus dispatch on the slide body kind
//! - `About`, `Competencies`, `Experience`, `Projects`: one per body kind
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── layout.rs        (card measurement and grid placement)
//! ├── navbar.rs
//! ├── nav_dots.rs
//! ├── status_bar.rs
//! ├── slide.rs         (SlidePanel)
//! ├── about.rs
//! ├── competencies.rs
//! ├── experience.rs
//! └── projects.rs
//! ```

mod layout;

pub mod about;
pub mod competencies;
pub mod experience;
pub mod nav_dots;
pub mod navbar;
pub mod projects;
pub mod slide;
pub mod status_bar;

pub use about::About;
pub use competencies::Competencies;
pub use experience::Experience;
pub use nav_dots::NavDots;
pub use navbar::Navbar;
pub use projects::Projects;
pub use slide::SlidePanel;
pub use status_bar::StatusBar;
