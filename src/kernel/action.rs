use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::buffers::DualBuffers;
use crate::kernel::highlight::BufferSide;
use crate::kernel::services::ports::{DiffSettings, EditorConfig};
use crate::kernel::state::{CopyScope, Notification};

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    /// Ask the shell to load `path`.
    OpenPath(PathBuf),
    FileOpened {
        path: PathBuf,
        buffers: DualBuffers,
    },
    /// Replace one side wholesale, e.g. from a paste of a whole file.
    PaneEdited {
        side: BufferSide,
        lines: Vec<String>,
    },
    CommitRequested,
    Committed {
        path: PathBuf,
        buffers: DualBuffers,
    },
    CopyRequested {
        side: BufferSide,
        scope: CopyScope,
    },
    /// Bracketed paste into whatever owns the keyboard.
    InsertText(String),
    FocusPane(BufferSide),
    /// Click inside a pane's text area; `row`/`x` are relative to the area.
    PaneClick {
        side: BufferSide,
        row: usize,
        x: usize,
    },
    PaneScroll {
        side: BufferSide,
        delta: isize,
        horizontal: bool,
    },
    PaneSetViewSize {
        side: BufferSide,
        height: usize,
        width: usize,
    },
    ContextMenuOpen {
        side: BufferSide,
        /// Absolute row under the pointer, if any.
        row: Option<usize>,
        x: u16,
        y: u16,
    },
    ContextMenuSelect {
        index: usize,
    },
    ContextMenuActivate,
    ContextMenuClose,
    ConfirmDialogAccept,
    ConfirmDialogCancel,
    Notify(Notification),
    DismissNotification,
    SetDiffOptions(DiffSettings),
    SetEditorConfig(EditorConfig),
}
