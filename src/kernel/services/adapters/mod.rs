//! Service adapters: OS specific implementations (filesystem, processes, env).

pub mod clipboard;
pub mod file;
pub mod keybinding;
pub mod paths;
pub mod settings;

pub use clipboard::{ClipboardBackend, ClipboardError, ClipboardService};
pub use file::LocalFileProvider;
pub use keybinding::{KeybindingContext, KeybindingService};
pub use paths::{ensure_log_dir, get_app_data_dir, get_config_dir, get_log_dir};
pub use settings::{
    build_keybindings, ensure_settings_file, get_settings_path, load_settings_from,
    parse_keybinding,
};
