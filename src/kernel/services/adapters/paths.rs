//! Per-platform application directories.
//!
//! - macOS: ~/Library/Application Support/codetrack/{logs,settings.json}
//! - Linux: $XDG_DATA_HOME/codetrack/logs, $XDG_CONFIG_HOME/codetrack/settings.json
//!   (falling back to ~/.local/share and ~/.config)
//! - Windows: %APPDATA%\codetrack\{logs,settings.json}

use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "codetrack";
const LOG_DIR: &str = "logs";

/// Where logs live.
pub fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        macos_app_dir(std::env::var("HOME").ok())
    }

    #[cfg(target_os = "linux")]
    {
        xdg_dir(
            std::env::var("XDG_DATA_HOME").ok(),
            std::env::var("HOME").ok(),
            ".local/share",
        )
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// Where `settings.json` lives.
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        macos_app_dir(std::env::var("HOME").ok())
    }

    #[cfg(target_os = "linux")]
    {
        xdg_dir(
            std::env::var("XDG_CONFIG_HOME").ok(),
            std::env::var("HOME").ok(),
            ".config",
        )
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn macos_app_dir(home: Option<String>) -> Option<PathBuf> {
    home.map(|home| {
        PathBuf::from(home)
            .join("Library/Application Support")
            .join(APP_NAME)
    })
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn xdg_dir(xdg: Option<String>, home: Option<String>, home_relative: &str) -> Option<PathBuf> {
    // An empty XDG variable counts as unset.
    match xdg.filter(|v| !v.trim().is_empty()) {
        Some(xdg) => Some(PathBuf::from(xdg).join(APP_NAME)),
        None => home.map(|home| PathBuf::from(home).join(home_relative).join(APP_NAME)),
    }
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
