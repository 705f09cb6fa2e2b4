use std::path::PathBuf;

use super::state::Notification;

/// Side effects requested by the store; the shell runs them and reports back
/// with follow-up actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load both buffers from the file; answer `FileOpened` or `Notify`.
    LoadFile(PathBuf),
    /// Write the modified buffer to the file; answer `Committed` or `Notify`.
    CommitFile(PathBuf),
    SetClipboardText {
        text: String,
        /// Shown once the clipboard accepted the text.
        success: Notification,
    },
}
