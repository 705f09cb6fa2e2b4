use super::*;

#[test]
fn empty_object_yields_defaults() {
    let settings: Settings = serde_json::from_str("{}").expect("parse settings");
    assert!(settings.keybindings.is_empty());
    assert_eq!(settings.diff, DiffSettings::default());
    assert_eq!(settings.editor, EditorConfig::default());
    assert_eq!(settings.theme.removed_bg.as_deref(), Some("#F08080"));
    assert_eq!(settings.theme.added_bg.as_deref(), Some("#90EE90"));
}

#[test]
fn diff_section_parses_algorithm_and_mapping() {
    let data = r#"{ "diff": { "algorithm": "patience", "highlight_mapping": "aligned" } }"#;
    let settings: Settings = serde_json::from_str(data).expect("parse settings");
    assert_eq!(settings.diff.algorithm, DiffAlgorithm::Patience);
    assert_eq!(settings.diff.highlight_mapping, HighlightMapping::Aligned);
}

#[test]
fn partial_theme_keeps_other_defaults() {
    let data = r##"{ "theme": { "added_bg": "#00ff00" } }"##;
    let settings: Settings = serde_json::from_str(data).expect("parse settings");
    assert_eq!(settings.theme.added_bg.as_deref(), Some("#00ff00"));
    assert_eq!(settings.theme.focus_border.as_deref(), Some("cyan"));
}

#[test]
fn keybinding_rules_roundtrip() {
    let data = r#"{ "keybindings": [
        { "key": "ctrl+k", "command": "copyLine", "context": "pane" },
        { "key": "ctrl+t", "command": "" }
    ] }"#;
    let settings: Settings = serde_json::from_str(data).expect("parse settings");
    assert_eq!(settings.keybindings.len(), 2);
    assert_eq!(settings.keybindings[0].context.as_deref(), Some("pane"));
    assert!(settings.keybindings[1].context.is_none());

    let json = serde_json::to_string(&settings).expect("serialize settings");
    let decoded: Settings = serde_json::from_str(&json).expect("deserialize settings");
    assert_eq!(decoded.keybindings[0].command, "copyLine");
    assert_eq!(decoded.theme.marked_fg, settings.theme.marked_fg);
}
