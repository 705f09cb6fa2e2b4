use crate::core::Command;
use crate::kernel::diff::{diff_with, DiffSummary};
use crate::kernel::highlight::{compute_highlights_with, BufferSide};

use super::state::{CopyScope, Notification};
use super::{Action, AppState, Effect};

mod buffers;
mod context_menu;
mod dialogs;
mod input_dialog;
mod pane;

pub const CONFIRM_APPLY_MESSAGE: &str = "Are you sure you want to apply these changes?";
pub const APPLIED_MESSAGE: &str = "Changes applied successfully.";

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect, state_changed: bool) -> Self {
        Self {
            effects: vec![effect],
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        let mut store = Self { state };
        store.recompute();
        store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::InsertText(text) => self.insert_text(text),
            Action::OpenPath(path) => DispatchResult::effect(Effect::LoadFile(path), false),
            action @ (Action::FileOpened { .. }
            | Action::PaneEdited { .. }
            | Action::CommitRequested
            | Action::Committed { .. }
            | Action::CopyRequested { .. }
            | Action::SetDiffOptions(_)) => self.reduce_buffer_action(action),
            action @ (Action::FocusPane(_)
            | Action::PaneClick { .. }
            | Action::PaneScroll { .. }
            | Action::PaneSetViewSize { .. }
            | Action::SetEditorConfig(_)) => self.reduce_pane_action(action),
            action @ (Action::ContextMenuOpen { .. }
            | Action::ContextMenuSelect { .. }
            | Action::ContextMenuActivate
            | Action::ContextMenuClose) => self.reduce_context_menu_action(action),
            action @ (Action::ConfirmDialogAccept
            | Action::ConfirmDialogCancel
            | Action::Notify(_)
            | Action::DismissNotification) => self.reduce_dialog_action(action),
        }
    }

    /// Commands go to the topmost modal layer, else to the focused pane.
    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        if command == Command::Quit {
            self.state.ui.should_quit = true;
            return DispatchResult::changed(true);
        }

        if self.state.ui.notification.is_some() {
            return match command {
                Command::Accept | Command::Escape => self.dispatch(Action::DismissNotification),
                _ => DispatchResult::unchanged(),
            };
        }
        if self.state.ui.confirm_dialog.visible {
            return match command {
                Command::Accept => self.dispatch(Action::ConfirmDialogAccept),
                Command::Escape => self.dispatch(Action::ConfirmDialogCancel),
                _ => DispatchResult::unchanged(),
            };
        }
        if self.state.ui.input_dialog.visible {
            return self.input_dialog_command(command);
        }
        if self.state.ui.context_menu.visible {
            return self.context_menu_command(command);
        }

        let focus = self.state.ui.focus;
        match command {
            Command::OpenFile => self.open_file_prompt(),
            Command::ApplyChanges => self.dispatch(Action::CommitRequested),
            Command::CopyLine => {
                let row = self.state.pane(focus).text.cursor().0;
                self.dispatch(Action::CopyRequested {
                    side: focus,
                    scope: CopyScope::Line(row),
                })
            }
            Command::CopyPane => self.dispatch(Action::CopyRequested {
                side: focus,
                scope: CopyScope::All,
            }),
            Command::FocusNextPane => self.dispatch(Action::FocusPane(focus.other())),
            Command::FocusOriginal => self.dispatch(Action::FocusPane(BufferSide::Original)),
            Command::FocusModified => self.dispatch(Action::FocusPane(BufferSide::Modified)),
            Command::ContextMenu => {
                let row = self.state.pane(focus).text.cursor().0;
                self.dispatch(Action::ContextMenuOpen {
                    side: focus,
                    row: Some(row),
                    x: 0,
                    y: 0,
                })
            }
            Command::Accept | Command::Escape => DispatchResult::unchanged(),
            Command::Custom(name) => {
                tracing::debug!(command = %name, "unknown command");
                DispatchResult::unchanged()
            }
            cmd => self.pane_command(focus, cmd),
        }
    }

    fn insert_text(&mut self, text: String) -> DispatchResult {
        if self.state.ui.input_dialog.visible {
            return self.input_dialog_insert(&text);
        }
        if self.state.ui.has_modal() || text.is_empty() {
            return DispatchResult::unchanged();
        }
        let side = self.state.ui.focus;
        let changed = self.state.pane_mut(side).text.insert_str(&text);
        if changed {
            self.sync_pane(side);
        }
        DispatchResult::changed(changed)
    }

    /// Push the pane's text into its buffer, then recompute.
    fn sync_pane(&mut self, side: BufferSide) {
        let tab_width = self.state.editor.tab_width();
        let lines = self.state.pane(side).text.lines();
        self.state.buffers.set(side, lines);
        self.state.pane_mut(side).reveal_cursor(tab_width);
        self.recompute();
    }

    /// Full diff + highlight recompute from the current buffers.
    fn recompute(&mut self) {
        let original = self.state.buffers.original().lines();
        let modified = self.state.buffers.modified().lines();
        let ops = diff_with(self.state.diff.algorithm, original, modified);
        self.state.highlights =
            compute_highlights_with(self.state.diff.highlight_mapping, &ops, original, modified);
        self.state.summary = DiffSummary::from_ops(&ops);
        self.state.ops = ops;
        tracing::debug!(
            unchanged = self.state.summary.unchanged,
            removed = self.state.summary.removed,
            added = self.state.summary.added,
            "diff recomputed"
        );
    }

    fn notify(&mut self, notification: Notification) -> bool {
        let changed = self.state.ui.notification.as_ref() != Some(&notification);
        self.state.ui.notification = Some(notification);
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
