use serde::{Deserialize, Serialize};

use super::config::EditorConfig;
use crate::kernel::diff::DiffAlgorithm;
use crate::kernel::highlight::HighlightMapping;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub diff: DiffSettings,
    #[serde(default)]
    pub editor: EditorConfig,
}

/// `{"key": "ctrl+s", "command": "applyChanges", "context": "pane"}`.
/// An empty `command` removes the binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffSettings {
    pub algorithm: DiffAlgorithm,
    #[serde(alias = "highlightMapping")]
    pub highlight_mapping: HighlightMapping,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marked_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_selected_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            focus_border: Some("cyan".to_string()),
            inactive_border: Some("dark_gray".to_string()),
            accent_fg: Some("yellow".to_string()),
            header_fg: Some("cyan".to_string()),
            gutter_fg: Some("dark_gray".to_string()),
            removed_bg: Some("#F08080".to_string()),
            added_bg: Some("#90EE90".to_string()),
            marked_fg: Some("black".to_string()),
            button_bg: Some("dark_gray".to_string()),
            button_fg: Some("white".to_string()),
            status_bg: None,
            status_fg: Some("gray".to_string()),
            dialog_border: Some("cyan".to_string()),
            dialog_bg: None,
            dialog_fg: Some("white".to_string()),
            menu_selected_bg: Some("dark_gray".to_string()),
            menu_selected_fg: Some("white".to_string()),
            error_fg: Some("red".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
