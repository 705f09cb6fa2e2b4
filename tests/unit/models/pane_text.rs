use super::*;

#[test]
fn lines_round_trip_through_rope() {
    let lines = vec!["a\n".to_string(), "b\r\n".to_string(), "c".to_string()];
    let text = PaneText::from_lines(&lines);
    assert_eq!(text.lines(), lines);
}

#[test]
fn insert_moves_cursor_after_text() {
    let mut text = PaneText::from_text("ac\n");
    text.set_cursor(0, 1);
    assert!(text.insert_char('b'));
    assert_eq!(text.text(), "abc\n");
    assert_eq!(text.cursor(), (0, 2));

    assert!(text.insert_str("x\ny"));
    assert_eq!(text.text(), "abx\nyc\n");
    assert_eq!(text.cursor(), (1, 1));
}

#[test]
fn newline_follows_crlf_files() {
    let mut text = PaneText::from_text("a\r\nb\r\n");
    text.set_cursor(0, 1);
    text.insert_newline();
    assert_eq!(text.text(), "a\r\n\r\nb\r\n");
    assert_eq!(text.cursor(), (1, 0));
}

#[test]
fn backspace_at_line_start_joins_lines() {
    let mut text = PaneText::from_text("ab\r\ncd\n");
    text.set_cursor(1, 0);
    assert!(text.delete_backward());
    assert_eq!(text.text(), "abcd\n");
    assert_eq!(text.cursor(), (0, 2));
}

#[test]
fn backspace_at_file_start_is_noop() {
    let mut text = PaneText::from_text("ab");
    assert!(!text.delete_backward());
    assert_eq!(text.text(), "ab");
}

#[test]
fn delete_forward_removes_grapheme_or_terminator() {
    let mut text = PaneText::from_text("héllo\nx");
    text.set_cursor(0, 1);
    assert!(text.delete_forward());
    assert_eq!(text.text(), "hllo\nx");

    text.set_cursor(0, 4);
    assert!(text.delete_forward());
    assert_eq!(text.text(), "hllox");

    text.set_cursor(0, 5);
    assert!(!text.delete_forward());
}

#[test]
fn vertical_moves_keep_preferred_column() {
    let mut text = PaneText::from_text("abcdef\nx\nabcdef\n");
    text.set_cursor(0, 5);
    text.move_vertical(1);
    assert_eq!(text.cursor(), (1, 1));
    text.move_vertical(1);
    assert_eq!(text.cursor(), (2, 5));
}

#[test]
fn set_cursor_clamps_to_content() {
    let mut text = PaneText::from_text("ab\ncd");
    text.set_cursor(10, 10);
    assert_eq!(text.cursor(), (1, 2));
}

#[test]
fn trailing_terminator_opens_empty_row() {
    let text = PaneText::from_text("a\n");
    assert_eq!(text.len_rows(), 2);
    assert_eq!(text.row_text(1).as_deref(), Some(""));
    assert_eq!(text.row_text(2), None);
}

#[test]
fn file_end_lands_after_last_grapheme() {
    let mut text = PaneText::from_text("one\ntwo");
    assert!(text.move_file_end());
    assert_eq!(text.cursor(), (1, 3));
    assert!(!text.move_right());
    assert!(text.move_file_start());
    assert_eq!(text.cursor(), (0, 0));
}

#[test]
fn display_col_expands_tabs_and_wide_chars() {
    let pane = PaneText::from_text("\tab\n中x\n");
    assert_eq!(pane.display_col(0, 0, 4), 0);
    assert_eq!(pane.display_col(0, 1, 4), 4);
    assert_eq!(pane.display_col(0, 3, 4), 6);
    assert_eq!(pane.display_col(1, 1, 4), 2);
    assert_eq!(pane.display_col(1, 2, 4), 3);
}

#[test]
fn col_at_display_maps_back_to_graphemes() {
    let pane = PaneText::from_text("\tab\n中x\n");
    assert_eq!(pane.col_at_display(0, 0, 4), 0);
    assert_eq!(pane.col_at_display(0, 3, 4), 0);
    assert_eq!(pane.col_at_display(0, 4, 4), 1);
    assert_eq!(pane.col_at_display(0, 99, 4), 3);
    assert_eq!(pane.col_at_display(1, 1, 4), 0);
    assert_eq!(pane.col_at_display(1, 2, 4), 1);
    assert_eq!(pane.col_at_display(9, 2, 4), 0);
}

#[test]
fn tab_stops_depend_on_position() {
    assert_eq!(grapheme_width("\t", 0, 4), 4);
    assert_eq!(grapheme_width("\t", 3, 4), 1);
    assert_eq!(grapheme_width("\t", 2, 0), 1);
    assert_eq!(grapheme_width("a", 2, 4), 1);
}

#[test]
fn only_lf_and_crlf_break_rows() {
    let mut pane = PaneText::from_text("a\x0cb\rc\u{2028}d\ne\n");
    assert_eq!(pane.len_rows(), 3);
    assert_eq!(pane.row_text(0).as_deref(), Some("a\x0cb\rc\u{2028}d"));

    pane.set_cursor(1, 0);
    assert!(pane.delete_backward());
    assert_eq!(pane.text(), "a\x0cb\rc\u{2028}de\n");
    assert_eq!(pane.lines().len(), 2);
}
