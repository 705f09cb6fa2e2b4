use crate::kernel::highlight::BufferSide;
use crate::kernel::state::{CopyScope, Notification, PendingAction};
use crate::kernel::{Action, Effect};
use crate::models::PaneText;

use super::{DispatchResult, APPLIED_MESSAGE, CONFIRM_APPLY_MESSAGE};

impl super::Store {
    pub(super) fn reduce_buffer_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::FileOpened { path, buffers } => {
                tracing::info!(path = %path.display(), lines = buffers.original().len(), "file opened");
                let original = PaneText::from_lines(buffers.original());
                let modified = PaneText::from_lines(buffers.modified());
                self.state.buffers = buffers;
                self.state.file_path = Some(path);
                self.state.pane_mut(BufferSide::Original).reset(original);
                self.state.pane_mut(BufferSide::Modified).reset(modified);
                self.recompute();
                DispatchResult::changed(true)
            }
            Action::PaneEdited { side, lines } => {
                let text = lines.concat();
                self.state.pane_mut(side).text.replace_text(&text);
                self.sync_pane(side);
                DispatchResult::changed(true)
            }
            Action::CommitRequested => {
                let Some(path) = self.state.file_path.clone() else {
                    let changed = self.notify(Notification::error("No file is open."));
                    return DispatchResult::changed(changed);
                };
                let dialog = &mut self.state.ui.confirm_dialog;
                dialog.visible = true;
                dialog.message = CONFIRM_APPLY_MESSAGE.to_string();
                dialog.on_confirm = Some(PendingAction::Commit { path });
                DispatchResult::changed(true)
            }
            Action::Committed { path, buffers } => {
                tracing::info!(path = %path.display(), "changes applied");
                let baseline = PaneText::from_lines(buffers.original());
                self.state.buffers = buffers;
                self.state.file_path = Some(path);
                let pane = self.state.pane_mut(BufferSide::Original);
                let (row, col) = pane.text.cursor();
                pane.text = baseline;
                pane.text.set_cursor(row, col);
                self.recompute();
                self.notify(Notification::info("Success", APPLIED_MESSAGE));
                DispatchResult::changed(true)
            }
            Action::CopyRequested { side, scope } => {
                let buffer = self.state.buffers.buffer(side);
                let (text, success) = match scope {
                    CopyScope::Line(row) => {
                        let Some(text) = self.state.pane(side).text.row_text(row) else {
                            return DispatchResult::unchanged();
                        };
                        (
                            text.into_owned(),
                            Notification::info("Copy Line", "Line copied to clipboard."),
                        )
                    }
                    CopyScope::All => {
                        let success = match side {
                            BufferSide::Original => Notification::info(
                                "Copy Original Code",
                                "Original code copied to clipboard.",
                            ),
                            BufferSide::Modified => Notification::info(
                                "Copy Modified Code",
                                "Modified code copied to clipboard.",
                            ),
                        };
                        (buffer.trimmed_text(), success)
                    }
                };
                DispatchResult::effect(Effect::SetClipboardText { text, success }, false)
            }
            Action::SetDiffOptions(options) => {
                if self.state.diff == options {
                    return DispatchResult::unchanged();
                }
                self.state.diff = options;
                self.recompute();
                DispatchResult::changed(true)
            }
            _ => DispatchResult::unchanged(),
        }
    }
}
