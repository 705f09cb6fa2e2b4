use std::path::PathBuf;

use crate::kernel::buffers::DualBuffers;
use crate::kernel::diff::{DiffOperation, DiffSummary};
use crate::kernel::highlight::{BufferSide, Highlights};
use crate::kernel::services::ports::{DiffSettings, EditorConfig};
use crate::models::PaneText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Modal message box; the next key or click dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Commit { path: PathBuf },
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDialogKind {
    OpenFile,
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    /// Byte offset into `value`.
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyScope {
    /// 0-based row in the pane.
    Line(usize),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuItem {
    CopyLine,
    CopyEntireText,
}

impl ContextMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            ContextMenuItem::CopyLine => "Copy Line",
            ContextMenuItem::CopyEntireText => "Copy Entire Text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextMenuState {
    pub visible: bool,
    pub anchor: (u16, u16),
    pub selected: usize,
    pub items: Vec<ContextMenuItem>,
    /// Pane and row the menu was opened on.
    pub target: Option<(BufferSide, usize)>,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: BufferSide,
    pub confirm_dialog: ConfirmDialogState,
    pub input_dialog: InputDialogState,
    pub context_menu: ContextMenuState,
    pub notification: Option<Notification>,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: BufferSide::Modified,
            confirm_dialog: ConfirmDialogState::default(),
            input_dialog: InputDialogState::default(),
            context_menu: ContextMenuState::default(),
            notification: None,
            should_quit: false,
        }
    }
}

impl UiState {
    /// Whether a modal layer currently owns the keyboard.
    pub fn has_modal(&self) -> bool {
        self.notification.is_some()
            || self.confirm_dialog.visible
            || self.input_dialog.visible
            || self.context_menu.visible
    }
}

/// One side's editable text plus its viewport.
#[derive(Debug, Clone, Default)]
pub struct PaneState {
    pub text: PaneText,
    pub scroll_row: usize,
    /// Screen columns scrolled off the left edge.
    pub scroll_col: usize,
    pub view_height: usize,
    pub view_width: usize,
}

impl PaneState {
    pub fn new(text: PaneText, view_height: usize) -> Self {
        Self {
            text,
            view_height,
            ..Self::default()
        }
    }

    /// Replace the text and reset the viewport.
    pub fn reset(&mut self, text: PaneText) {
        self.text = text;
        self.scroll_row = 0;
        self.scroll_col = 0;
    }

    /// Scroll so the cursor is visible.
    pub fn reveal_cursor(&mut self, tab_width: usize) -> bool {
        let before = (self.scroll_row, self.scroll_col);
        let (row, col) = self.text.cursor();

        let height = self.view_height.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + height {
            self.scroll_row = row + 1 - height;
        }

        if self.view_width > 0 {
            let x = self.text.display_col(row, col, tab_width);
            if x < self.scroll_col {
                self.scroll_col = x;
            } else if x >= self.scroll_col + self.view_width {
                self.scroll_col = x + 1 - self.view_width;
            }
        }

        (self.scroll_row, self.scroll_col) != before
    }

    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let max = self.text.len_rows().saturating_sub(1);
        let next = (self.scroll_row as isize + delta).clamp(0, max as isize) as usize;
        let changed = next != self.scroll_row;
        self.scroll_row = next;
        changed
    }

    pub fn scroll_horizontal_by(&mut self, delta: isize) -> bool {
        let next = (self.scroll_col as isize + delta).max(0) as usize;
        let changed = next != self.scroll_col;
        self.scroll_col = next;
        changed
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Last opened file; the commit target.
    pub file_path: Option<PathBuf>,
    pub buffers: DualBuffers,
    pub panes: [PaneState; 2],
    pub ops: Vec<DiffOperation>,
    pub summary: DiffSummary,
    pub highlights: Highlights,
    pub diff: DiffSettings,
    pub editor: EditorConfig,
    pub ui: UiState,
}

impl AppState {
    pub fn new(editor: EditorConfig, diff: DiffSettings) -> Self {
        let height = editor.default_viewport_height;
        Self {
            file_path: None,
            buffers: DualBuffers::new(),
            panes: [
                PaneState::new(PaneText::new(), height),
                PaneState::new(PaneText::new(), height),
            ],
            ops: Vec::new(),
            summary: DiffSummary::default(),
            highlights: Highlights::default(),
            diff,
            editor,
            ui: UiState::default(),
        }
    }

    pub fn pane(&self, side: BufferSide) -> &PaneState {
        &self.panes[side.index()]
    }

    pub fn pane_mut(&mut self, side: BufferSide) -> &mut PaneState {
        &mut self.panes[side.index()]
    }

    pub fn focused_pane(&self) -> &PaneState {
        self.pane(self.ui.focus)
    }

    pub fn is_dirty(&self) -> bool {
        self.buffers.is_dirty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EditorConfig::default(), DiffSettings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
