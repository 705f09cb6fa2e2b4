use super::*;
use std::path::Path;

#[test]
fn xdg_variable_wins_over_home() {
    let dir = xdg_dir(
        Some("/xdg/config".to_string()),
        Some("/home/user".to_string()),
        ".config",
    );
    assert_eq!(dir.as_deref(), Some(Path::new("/xdg/config/codetrack")));
}

#[test]
fn empty_xdg_variable_falls_back_to_home() {
    let dir = xdg_dir(
        Some("  ".to_string()),
        Some("/home/user".to_string()),
        ".local/share",
    );
    assert_eq!(
        dir.as_deref(),
        Some(Path::new("/home/user/.local/share/codetrack"))
    );
}

#[test]
fn no_home_means_no_directory() {
    assert_eq!(xdg_dir(None, None, ".config"), None);
    assert_eq!(macos_app_dir(None), None);
}

#[test]
fn macos_dir_is_under_application_support() {
    let dir = macos_app_dir(Some("/Users/test".to_string()));
    assert_eq!(
        dir.as_deref(),
        Some(Path::new("/Users/test/Library/Application Support/codetrack"))
    );
}

#[test]
fn log_dir_is_inside_app_dir() {
    if let Some(dir) = get_log_dir() {
        assert!(dir.to_string_lossy().contains(APP_NAME));
        assert!(dir.ends_with(LOG_DIR));
    }
}
