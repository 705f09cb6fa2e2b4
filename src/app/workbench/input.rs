use super::Workbench;
use crate::core::event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::Action as KernelAction;
use crate::tui::view::EventResult;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Mouse(mouse_event) => workbench.handle_mouse(mouse_event),
        InputEvent::Resize(_, _) => EventResult::Consumed,
        InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
    }
}

impl Workbench {
    pub(super) fn handle_key_event(&mut self, key_event: &KeyEvent) -> EventResult {
        let context = self.keybinding_context();
        let key: Key = (*key_event).into();

        let changed = match self.keybindings.resolve(context, &key).cloned() {
            Some(Command::ContextMenu) if context == KeybindingContext::Pane => {
                self.open_context_menu_at_cursor()
            }
            Some(command) => {
                tracing::debug!(command = command.name(), ?context, "key command");
                self.dispatch_kernel(KernelAction::RunCommand(command))
            }
            None => match (key_event.code, context) {
                (KeyCode::Char(ch), KeybindingContext::Pane | KeybindingContext::InputDialog)
                    if is_text_input(key_event.modifiers) =>
                {
                    self.dispatch_kernel(KernelAction::RunCommand(Command::InsertChar(ch)))
                }
                _ => return EventResult::Ignored,
            },
        };

        if self.should_quit() {
            return EventResult::Quit;
        }
        EventResult::from_changed(changed)
    }

    pub(super) fn handle_paste(&mut self, text: &str) -> EventResult {
        let changed = self.dispatch_kernel(KernelAction::InsertText(text.to_string()));
        EventResult::from_changed(changed)
    }

    /// The notification box shares the confirm dialog's keys (Enter/Esc).
    fn keybinding_context(&self) -> KeybindingContext {
        let ui = &self.store.state().ui;
        if ui.notification.is_some() || ui.confirm_dialog.visible {
            KeybindingContext::ConfirmDialog
        } else if ui.input_dialog.visible {
            KeybindingContext::InputDialog
        } else if ui.context_menu.visible {
            KeybindingContext::ContextMenu
        } else {
            KeybindingContext::Pane
        }
    }

    /// Keyboard equivalent of a right click: open the menu on the cursor line,
    /// anchored at the on-screen cursor.
    fn open_context_menu_at_cursor(&mut self) -> bool {
        let side = self.focus();
        let row = self.store.state().pane(side).text.cursor().0;
        let text_area = self.layout.panes[side.index()].text;
        let (x, y) = super::render::cursor_position(self).unwrap_or((text_area.x, text_area.y));
        self.dispatch_kernel(KernelAction::ContextMenuOpen {
            side,
            row: Some(row),
            x,
            y: y.saturating_add(1),
        })
    }
}

fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}
