//! codetrack - side-by-side change tracker for a single text file.
//!
//! Module layout:
//! - core: input events and semantic commands
//! - models: line buffers and the editable pane text
//! - kernel: diff, highlight mapping, dual buffers and the state store
//! - tui: crossterm input conversion, terminal setup/teardown
//! - app: the workbench (layout, rendering, effect execution) and theme

pub mod core;
pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
