//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the core builds without terminal
//! crates (`--no-default-features`).

pub mod crossterm;
pub mod terminal_guard;
pub mod view;
