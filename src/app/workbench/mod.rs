//! Workbench: owns the kernel store and the shell services, routes terminal
//! input into actions and runs the effects the store asks for.

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::settings::{build_keybindings, load_settings_from};
use crate::kernel::services::adapters::{ClipboardService, KeybindingService, LocalFileProvider};
use crate::kernel::services::ports::{FileProvider, Settings};
use crate::kernel::{Action as KernelAction, AppState, BufferSide, Store};
use crate::tui::view::{EventResult, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

mod bridge;
mod input;
mod mouse;
mod render;
mod tick;
mod util;

const TOOLBAR_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const BUTTON_ROW_HEIGHT: u16 = 1;
const SETTINGS_CHECK_INTERVAL: Duration = Duration::from_millis(500);

/// Screen rectangles of one pane from the last render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PaneLayout {
    block: Rect,
    gutter: Rect,
    text: Rect,
    copy_button: Rect,
}

/// Hit-test targets from the last render.
#[derive(Debug, Clone, Default)]
struct LayoutCache {
    area: Rect,
    open_button: Rect,
    apply_button: Rect,
    panes: [PaneLayout; 2],
    status: Rect,
    confirm_buttons: Option<(Rect, Rect)>,
    menu: Option<Rect>,
}

pub struct Workbench {
    store: Store,
    files: Box<dyn FileProvider>,
    clipboard: ClipboardService,
    keybindings: KeybindingService,
    theme: UiTheme,
    settings_path: Option<PathBuf>,
    last_settings_check: Instant,
    last_settings_modified: Option<SystemTime>,
    layout: LayoutCache,
}

impl Workbench {
    /// Workbench on the local filesystem and the detected system clipboard.
    pub fn new(settings_path: Option<PathBuf>) -> Self {
        Self::with_services(
            settings_path,
            Box::new(LocalFileProvider::new()),
            ClipboardService::new(),
        )
    }

    pub fn with_services(
        settings_path: Option<PathBuf>,
        files: Box<dyn FileProvider>,
        clipboard: ClipboardService,
    ) -> Self {
        let settings = settings_path
            .as_deref()
            .and_then(load_settings_from)
            .unwrap_or_default();
        let last_settings_modified = settings_path.as_deref().and_then(modified_time);

        let Settings {
            keybindings,
            theme,
            diff,
            editor,
        } = settings;

        Self {
            store: Store::new(AppState::new(editor, diff)),
            files,
            clipboard,
            keybindings: build_keybindings(&keybindings),
            theme: UiTheme::from_settings(&theme),
            settings_path,
            last_settings_check: Instant::now(),
            last_settings_modified,
            layout: LayoutCache::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn focus(&self) -> BufferSide {
        self.store.state().ui.focus
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    /// Load `path` into both panes (startup argument).
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        self.dispatch_kernel(KernelAction::OpenPath(path))
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
