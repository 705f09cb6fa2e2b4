use super::*;

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.tab_size, 4);
    assert!(config.show_line_numbers);
    assert_eq!(config.scroll_step(), 3);
}

#[test]
fn zero_values_are_clamped() {
    let config = EditorConfig {
        tab_size: 0,
        scroll_lines: 0,
        ..EditorConfig::default()
    };
    assert_eq!(config.tab_width(), 1);
    assert_eq!(config.scroll_step(), 1);
}

#[test]
fn camel_case_aliases_are_accepted() {
    let data = r#"{ "tabSize": 2, "showLineNumbers": false, "scrollStep": 5 }"#;
    let config: EditorConfig = serde_json::from_str(data).expect("parse editor config");
    assert_eq!(config.tab_size, 2);
    assert!(!config.show_line_numbers);
    assert_eq!(config.scroll_lines, 5);
    assert_eq!(config.default_viewport_height, 20);
}
