//! Key bindings: key → command, resolved per context.

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Pane,
    ConfirmDialog,
    InputDialog,
    ContextMenu,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "pane" | "editor" => Some(Self::Pane),
            "confirm" | "confirmdialog" | "confirm_dialog" => Some(Self::ConfirmDialog),
            "input" | "inputdialog" | "input_dialog" | "prompt" => Some(Self::InputDialog),
            "menu" | "contextmenu" | "context_menu" => Some(Self::ContextMenu),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    pane: FxHashMap<Key, Command>,
    confirm_dialog: FxHashMap<Key, Command>,
    input_dialog: FxHashMap<Key, Command>,
    context_menu: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            pane: default_pane_keybindings(),
            confirm_dialog: default_confirm_dialog_keybindings(),
            input_dialog: default_input_dialog_keybindings(),
            context_menu: default_context_menu_keybindings(),
        }
    }

    /// Modal contexts only fall back to `Escape`/`Quit` from the global map so
    /// that shortcuts like "apply changes" cannot fire behind a dialog.
    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Pane => self.pane.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::ConfirmDialog => self
                .confirm_dialog
                .get(key)
                .or_else(|| self.modal_fallback(key)),
            KeybindingContext::InputDialog => self
                .input_dialog
                .get(key)
                .or_else(|| self.modal_fallback(key)),
            KeybindingContext::ContextMenu => self
                .context_menu
                .get(key)
                .or_else(|| self.modal_fallback(key)),
        }
    }

    fn modal_fallback(&self, key: &Key) -> Option<&Command> {
        self.global
            .get(key)
            .filter(|cmd| matches!(cmd, Command::Escape | Command::Quit))
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Pane => &self.pane,
            KeybindingContext::ConfirmDialog => &self.confirm_dialog,
            KeybindingContext::InputDialog => &self.input_dialog,
            KeybindingContext::ContextMenu => &self.context_menu,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Pane => &mut self.pane,
            KeybindingContext::ConfirmDialog => &mut self.confirm_dialog,
            KeybindingContext::InputDialog => &mut self.input_dialog,
            KeybindingContext::ContextMenu => &mut self.context_menu,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::OpenFile);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::ApplyChanges);

    bindings.insert(Key::ctrl(KeyCode::Char('l')), Command::CopyLine);
    bindings.insert(Key::ctrl(KeyCode::Char('t')), Command::CopyPane);

    bindings.insert(Key::simple(KeyCode::F(6)), Command::FocusNextPane);
    bindings.insert(Key::ctrl(KeyCode::Char('w')), Command::FocusNextPane);
    bindings.insert(Key::alt(KeyCode::Char('1')), Command::FocusOriginal);
    bindings.insert(Key::alt(KeyCode::Char('2')), Command::FocusModified);
    bindings.insert(Key::shift(KeyCode::F(10)), Command::ContextMenu);

    bindings
}

fn default_pane_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(24);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
    bindings.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::PageDown);

    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings
}

fn default_confirm_dialog_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();

    bindings.insert(Key::simple(KeyCode::Enter), Command::Accept);
    bindings.insert(Key::simple(KeyCode::Char('y')), Command::Accept);
    bindings.insert(Key::simple(KeyCode::Char('n')), Command::Escape);
    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);

    bindings
}

fn default_input_dialog_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();

    bindings.insert(Key::simple(KeyCode::Enter), Command::Accept);
    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);
    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);

    bindings
}

fn default_context_menu_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();

    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Enter), Command::Accept);
    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings.insert(
        Key::new(KeyCode::F(10), KeyModifiers::SHIFT),
        Command::Escape,
    );

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
