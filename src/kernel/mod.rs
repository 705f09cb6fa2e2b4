//! Headless application core: diff, highlight mapping, the dual buffer model
//! and the state/action/effect store that drives them.

pub mod action;
pub mod buffers;
pub mod diff;
pub mod effect;
pub mod highlight;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use buffers::DualBuffers;
pub use diff::{diff, diff_with, DiffAlgorithm, DiffKind, DiffOperation, DiffSummary};
pub use effect::Effect;
pub use highlight::{
    compute_highlights, compute_highlights_with, BufferSide, HighlightMapping, Highlights,
};
pub use state::{
    AppState, ConfirmDialogState, ContextMenuItem, ContextMenuState, CopyScope, InputDialogKind,
    InputDialogState, Notification, NotificationLevel, PaneState, PendingAction, UiState,
};
pub use store::{DispatchResult, Store};
