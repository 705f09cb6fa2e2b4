//! Data models: line buffers and the editable pane surface.

pub mod line_buffer;
pub mod pane_text;

pub use line_buffer::{split_lines, strip_terminator, LineBuffer};
pub use pane_text::{grapheme_width, slice_to_cow, PaneText};
