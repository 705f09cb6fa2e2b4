use crate::core::Command;
use crate::kernel::highlight::BufferSide;
use crate::kernel::state::{ContextMenuItem, ContextMenuState, CopyScope, Notification};
use crate::kernel::{Action, Effect};

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_context_menu_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ContextMenuOpen { side, row, x, y } => {
                if self.state.ui.notification.is_some()
                    || self.state.ui.input_dialog.visible
                    || self.state.ui.confirm_dialog.visible
                {
                    return DispatchResult::unchanged();
                }

                self.state.ui.focus = side;
                let row = row.filter(|&r| r < self.state.pane(side).text.len_rows());
                let mut items = Vec::with_capacity(2);
                if row.is_some() {
                    items.push(ContextMenuItem::CopyLine);
                }
                items.push(ContextMenuItem::CopyEntireText);

                self.state.ui.context_menu = ContextMenuState {
                    visible: true,
                    anchor: (x, y),
                    selected: 0,
                    items,
                    target: Some((side, row.unwrap_or(0))),
                };
                DispatchResult::changed(true)
            }
            Action::ContextMenuSelect { index } => {
                let menu = &mut self.state.ui.context_menu;
                if !menu.visible || menu.items.is_empty() {
                    return DispatchResult::unchanged();
                }
                let next = index.min(menu.items.len() - 1);
                let changed = next != menu.selected;
                menu.selected = next;
                DispatchResult::changed(changed)
            }
            Action::ContextMenuActivate => {
                if !self.state.ui.context_menu.visible {
                    return DispatchResult::unchanged();
                }
                let menu = std::mem::take(&mut self.state.ui.context_menu);
                let item = menu.items.get(menu.selected).copied();
                let (Some(item), Some((side, row))) = (item, menu.target) else {
                    return DispatchResult::changed(true);
                };

                let mut result = match item {
                    ContextMenuItem::CopyLine => self.dispatch(Action::CopyRequested {
                        side,
                        scope: CopyScope::Line(row),
                    }),
                    ContextMenuItem::CopyEntireText => self.copy_text_area(side),
                };
                result.state_changed = true;
                result
            }
            Action::ContextMenuClose => {
                if !self.state.ui.context_menu.visible {
                    return DispatchResult::unchanged();
                }
                self.state.ui.context_menu = ContextMenuState::default();
                DispatchResult::changed(true)
            }
            _ => DispatchResult::unchanged(),
        }
    }

    /// Key handling while the menu is open.
    pub(super) fn context_menu_command(&mut self, command: Command) -> DispatchResult {
        let menu = &self.state.ui.context_menu;
        let len = menu.items.len();
        match command {
            Command::CursorUp | Command::CursorDown if len > 0 => {
                let index = if command == Command::CursorUp {
                    (menu.selected + len - 1) % len
                } else {
                    (menu.selected + 1) % len
                };
                self.dispatch(Action::ContextMenuSelect { index })
            }
            Command::Accept => self.dispatch(Action::ContextMenuActivate),
            Command::Escape | Command::ContextMenu => self.dispatch(Action::ContextMenuClose),
            _ => DispatchResult::unchanged(),
        }
    }

    /// "Copy Entire Text" from the menu: same text as the copy buttons,
    /// different confirmation.
    fn copy_text_area(&mut self, side: BufferSide) -> DispatchResult {
        let text = self.state.buffers.buffer(side).trimmed_text();
        DispatchResult::effect(
            Effect::SetClipboardText {
                text,
                success: Notification::info("Copy Entire Text", "Text area copied to clipboard."),
            },
            false,
        )
    }
}
