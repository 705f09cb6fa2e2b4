use crate::core::Command;
use crate::kernel::highlight::BufferSide;
use crate::kernel::Action;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_pane_action(&mut self, action: Action) -> DispatchResult {
        let tab_width = self.state.editor.tab_width();
        match action {
            Action::FocusPane(side) => {
                if self.state.ui.has_modal() || self.state.ui.focus == side {
                    return DispatchResult::unchanged();
                }
                self.state.ui.focus = side;
                DispatchResult::changed(true)
            }
            Action::PaneClick { side, row, x } => {
                if self.state.ui.has_modal() {
                    return DispatchResult::unchanged();
                }
                let prev_focus = self.state.ui.focus;
                self.state.ui.focus = side;

                let pane = self.state.pane_mut(side);
                let before = pane.text.cursor();
                let row = (pane.scroll_row + row).min(pane.text.len_rows().saturating_sub(1));
                let col = pane.text.col_at_display(row, pane.scroll_col + x, tab_width);
                pane.text.set_cursor(row, col);
                pane.reveal_cursor(tab_width);

                DispatchResult::changed(prev_focus != side || pane.text.cursor() != before)
            }
            Action::PaneScroll {
                side,
                delta,
                horizontal,
            } => {
                let pane = self.state.pane_mut(side);
                let changed = if horizontal {
                    pane.scroll_horizontal_by(delta)
                } else {
                    pane.scroll_by(delta)
                };
                DispatchResult::changed(changed)
            }
            Action::PaneSetViewSize {
                side,
                height,
                width,
            } => {
                let pane = self.state.pane_mut(side);
                if pane.view_height == height && pane.view_width == width {
                    return DispatchResult::unchanged();
                }
                pane.view_height = height;
                pane.view_width = width;
                DispatchResult::changed(true)
            }
            Action::SetEditorConfig(config) => {
                if self.state.editor == config {
                    return DispatchResult::unchanged();
                }
                self.state.editor = config;
                DispatchResult::changed(true)
            }
            _ => DispatchResult::unchanged(),
        }
    }

    /// Cursor movement and editing in one pane.
    pub(super) fn pane_command(&mut self, side: BufferSide, command: Command) -> DispatchResult {
        let tab_width = self.state.editor.tab_width();
        let pane = self.state.pane_mut(side);
        let page = pane.view_height.max(1) as isize;
        let text = &mut pane.text;

        if command.is_cursor_command() {
            let moved = match command {
                Command::CursorLeft => text.move_left(),
                Command::CursorRight => text.move_right(),
                Command::CursorUp => text.move_vertical(-1),
                Command::CursorDown => text.move_vertical(1),
                Command::CursorLineStart => text.move_line_start(),
                Command::CursorLineEnd => text.move_line_end(),
                Command::CursorFileStart => text.move_file_start(),
                Command::CursorFileEnd => text.move_file_end(),
                Command::PageUp => text.move_vertical(-page),
                Command::PageDown => text.move_vertical(page),
                _ => false,
            };
            let scrolled = pane.reveal_cursor(tab_width);
            return DispatchResult::changed(moved || scrolled);
        }

        if command.is_edit_command() {
            let edited = match command {
                Command::InsertChar(ch) => text.insert_char(ch),
                Command::InsertNewline => text.insert_newline(),
                Command::InsertTab => text.insert_char('\t'),
                Command::DeleteBackward => text.delete_backward(),
                Command::DeleteForward => text.delete_forward(),
                _ => false,
            };
            if edited {
                self.sync_pane(side);
            }
            return DispatchResult::changed(edited);
        }

        tracing::debug!(command = command.name(), "command has no effect in a pane");
        DispatchResult::unchanged()
    }
}
