use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::state::InputDialogKind;
use crate::kernel::Action;

use super::DispatchResult;

impl super::Store {
    /// The path prompt that stands in for a file dialog.
    pub(super) fn open_file_prompt(&mut self) -> DispatchResult {
        let value = self
            .state
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        let dialog = &mut self.state.ui.input_dialog;
        dialog.visible = true;
        dialog.title = "Open Text File".to_string();
        dialog.cursor = value.len();
        dialog.value = value;
        dialog.error = None;
        dialog.kind = Some(InputDialogKind::OpenFile);
        DispatchResult::changed(true)
    }

    pub(super) fn input_dialog_command(&mut self, command: Command) -> DispatchResult {
        let dialog = &mut self.state.ui.input_dialog;
        match command {
            Command::InsertChar(ch) => self.input_dialog_insert(ch.encode_utf8(&mut [0u8; 4])),
            Command::DeleteBackward => {
                if dialog.cursor == 0 {
                    return DispatchResult::unchanged();
                }
                dialog.error = None;
                let prev = prev_boundary(&dialog.value, dialog.cursor);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                DispatchResult::changed(true)
            }
            Command::DeleteForward => {
                if dialog.cursor >= dialog.value.len() {
                    return DispatchResult::unchanged();
                }
                dialog.error = None;
                let next = next_boundary(&dialog.value, dialog.cursor);
                dialog.value.drain(dialog.cursor..next);
                DispatchResult::changed(true)
            }
            Command::CursorLeft => {
                let prev = prev_boundary(&dialog.value, dialog.cursor);
                let changed = prev != dialog.cursor;
                dialog.cursor = prev;
                DispatchResult::changed(changed)
            }
            Command::CursorRight => {
                let next = next_boundary(&dialog.value, dialog.cursor);
                let changed = next != dialog.cursor;
                dialog.cursor = next;
                DispatchResult::changed(changed)
            }
            Command::CursorLineStart => {
                let changed = dialog.cursor != 0;
                dialog.cursor = 0;
                DispatchResult::changed(changed)
            }
            Command::CursorLineEnd => {
                let end = dialog.value.len();
                let changed = dialog.cursor != end;
                dialog.cursor = end;
                DispatchResult::changed(changed)
            }
            Command::Accept => self.input_dialog_accept(),
            Command::Escape => {
                dialog.reset();
                DispatchResult::changed(true)
            }
            _ => DispatchResult::unchanged(),
        }
    }

    pub(super) fn input_dialog_insert(&mut self, text: &str) -> DispatchResult {
        let dialog = &mut self.state.ui.input_dialog;
        // Single-line input: a pasted newline ends the value.
        let text = text.lines().next().unwrap_or_default();
        if !dialog.visible || text.is_empty() {
            return DispatchResult::unchanged();
        }
        dialog.error = None;
        dialog.cursor = dialog.cursor.min(dialog.value.len());
        dialog.value.insert_str(dialog.cursor, text);
        dialog.cursor += text.len();
        DispatchResult::changed(true)
    }

    fn input_dialog_accept(&mut self) -> DispatchResult {
        let dialog = &mut self.state.ui.input_dialog;
        let Some(kind) = dialog.kind else {
            dialog.reset();
            return DispatchResult::changed(true);
        };

        match kind {
            InputDialogKind::OpenFile => {
                let value = dialog.value.trim();
                if value.is_empty() {
                    let prev = dialog.error.replace("Path required".to_string());
                    return DispatchResult::changed(prev.as_deref() != dialog.error.as_deref());
                }
                let path = expand_home(value);
                dialog.reset();
                let mut result = self.dispatch(Action::OpenPath(path));
                result.state_changed = true;
                result
            }
        }
    }
}

fn prev_boundary(s: &str, at: usize) -> usize {
    s[..at.min(s.len())]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(s: &str, at: usize) -> usize {
    let at = at.min(s.len());
    s[at..]
        .chars()
        .next()
        .map(|ch| at + ch.len_utf8())
        .unwrap_or(s.len())
}

fn expand_home(value: &str) -> PathBuf {
    if let Some(rest) = value.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(value)
}
