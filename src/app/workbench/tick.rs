use super::super::theme::UiTheme;
use super::{modified_time, Workbench};
use crate::kernel::services::adapters::settings::{build_keybindings, load_settings_from};
use crate::kernel::Action as KernelAction;
use std::time::Instant;

impl Workbench {
    /// Periodic work between input events (called by the main loop).
    pub fn tick(&mut self) -> bool {
        self.poll_settings()
    }

    fn poll_settings(&mut self) -> bool {
        let Some(path) = self.settings_path.as_ref() else {
            return false;
        };

        if self.last_settings_check.elapsed() < super::SETTINGS_CHECK_INTERVAL {
            return false;
        }
        self.last_settings_check = Instant::now();

        let modified = modified_time(path);
        if modified.is_some() && modified != self.last_settings_modified {
            self.last_settings_modified = modified;
            return self.reload_settings();
        }

        false
    }

    /// Re-read the settings file and apply keybindings, theme, editor and diff
    /// options. A missing or malformed file keeps the current settings.
    pub(super) fn reload_settings(&mut self) -> bool {
        let Some(path) = self.settings_path.clone() else {
            return false;
        };
        let Some(settings) = load_settings_from(&path) else {
            return false;
        };
        tracing::info!(path = %path.display(), "settings reloaded");

        self.keybindings = build_keybindings(&settings.keybindings);
        self.theme = UiTheme::from_settings(&settings.theme);
        let _ = self.dispatch_kernel(KernelAction::SetEditorConfig(settings.editor));
        let _ = self.dispatch_kernel(KernelAction::SetDiffOptions(settings.diff));
        self.last_settings_modified = modified_time(&path);

        true
    }
}
