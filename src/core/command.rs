//! Semantic commands, independent of the key that triggers them.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== cursor ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,
    PageUp,
    PageDown,

    // ==================== editing ====================
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== file ====================
    OpenFile,
    ApplyChanges,

    // ==================== clipboard ====================
    CopyLine,
    CopyPane,

    // ==================== view ====================
    FocusNextPane,
    FocusOriginal,
    FocusModified,
    ContextMenu,

    // ==================== dialogs ====================
    Accept,
    Escape,

    // ==================== system ====================
    Quit,

    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::OpenFile => "openFile",
            Command::ApplyChanges => "applyChanges",
            Command::CopyLine => "copyLine",
            Command::CopyPane => "copyPane",
            Command::FocusNextPane => "focusNextPane",
            Command::FocusOriginal => "focusOriginal",
            Command::FocusModified => "focusModified",
            Command::ContextMenu => "contextMenu",
            Command::Accept => "accept",
            Command::Escape => "escape",
            Command::Quit => "quit",
            Command::Custom(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Command {
        match name {
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "pageUp" => Command::PageUp,
            "pageDown" => Command::PageDown,
            "insertNewline" => Command::InsertNewline,
            "insertTab" => Command::InsertTab,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "openFile" => Command::OpenFile,
            "applyChanges" => Command::ApplyChanges,
            "copyLine" => Command::CopyLine,
            "copyPane" => Command::CopyPane,
            "focusNextPane" => Command::FocusNextPane,
            "focusOriginal" => Command::FocusOriginal,
            "focusModified" => Command::FocusModified,
            "contextMenu" => Command::ContextMenu,
            "accept" => Command::Accept,
            "escape" => Command::Escape,
            "quit" => Command::Quit,
            other => Command::Custom(other.to_string()),
        }
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::CursorLeft
                | Command::CursorRight
                | Command::CursorUp
                | Command::CursorDown
                | Command::CursorLineStart
                | Command::CursorLineEnd
                | Command::CursorFileStart
                | Command::CursorFileEnd
                | Command::PageUp
                | Command::PageDown
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
