//! Core abstractions shared by the kernel and the frontends:
//! - Event: input events
//! - Command: semantic commands

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
