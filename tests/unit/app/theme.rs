use super::*;

#[test]
fn parse_color_accepts_hex_and_names() {
    assert_eq!(parse_color("#90EE90"), Some(Color::Rgb(0x90, 0xEE, 0x90)));
    assert_eq!(parse_color(" dark_gray "), Some(Color::DarkGray));
    assert_eq!(parse_color("Light-Green"), Some(Color::LightGreen));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#zzzzzz"), None);
    assert_eq!(parse_color("chartreuse"), None);
}

#[test]
fn defaults_mark_lines_coral_and_green() {
    let theme = UiTheme::default();
    assert_eq!(theme.removed_bg, Color::Rgb(0xF0, 0x80, 0x80));
    assert_eq!(theme.added_bg, Color::Rgb(0x90, 0xEE, 0x90));
    assert_eq!(theme.focus_border, Color::Cyan);
}

#[test]
fn settings_override_only_named_fields() {
    let settings = ThemeSettings {
        added_bg: Some("#000080".to_string()),
        removed_bg: Some("not-a-color".to_string()),
        focus_border: None,
        ..ThemeSettings::default()
    };
    let mut theme = UiTheme::default();
    theme.apply_settings(&settings);
    assert_eq!(theme.added_bg, Color::Rgb(0, 0, 0x80));
    assert_eq!(theme.removed_bg, Color::Rgb(0xF0, 0x80, 0x80));
    assert_eq!(theme.focus_border, Color::Cyan);
}

#[test]
fn ansi256_fallback_indexes_rgb() {
    let mut theme = UiTheme::default();
    theme.apply_color_support(TerminalColorSupport::Ansi256);
    // #F08080 → closest cube entry (255, 135, 135).
    assert_eq!(theme.removed_bg, Color::Indexed(210));
    assert_eq!(theme.focus_border, Color::Cyan);
}

#[test]
fn ansi16_fallback_stays_in_basic_palette() {
    let mut theme = UiTheme::default();
    theme.apply_color_support(TerminalColorSupport::Ansi16);
    match theme.added_bg {
        Color::Indexed(i) => assert!(i <= 15),
        other => panic!("expected indexed color, got {other:?}"),
    }
}

#[test]
fn color_support_detection() {
    assert_eq!(
        color_support_from("16", "truecolor", ""),
        TerminalColorSupport::Ansi16
    );
    assert_eq!(
        color_support_from("", "truecolor", "xterm"),
        TerminalColorSupport::TrueColor
    );
    assert_eq!(
        color_support_from("", "", "xterm-256color"),
        TerminalColorSupport::Ansi256
    );
    assert_eq!(
        color_support_from("", "", "vt100"),
        TerminalColorSupport::Ansi16
    );
}
