use super::*;

fn pane_with_rows(rows: usize, height: usize, width: usize) -> PaneState {
    let text: String = (0..rows).map(|i| format!("line {i}\n")).collect();
    let mut pane = PaneState::new(PaneText::from_text(&text), height);
    pane.view_width = width;
    pane
}

#[test]
fn reveal_cursor_scrolls_down_and_up() {
    let mut pane = pane_with_rows(50, 10, 40);
    pane.text.set_cursor(25, 0);
    assert!(pane.reveal_cursor(4));
    assert_eq!(pane.scroll_row, 16);

    pane.text.set_cursor(3, 0);
    assert!(pane.reveal_cursor(4));
    assert_eq!(pane.scroll_row, 3);

    assert!(!pane.reveal_cursor(4));
}

#[test]
fn reveal_cursor_scrolls_horizontally() {
    let long = format!("{}\n", "x".repeat(100));
    let mut pane = PaneState::new(PaneText::from_text(&long), 10);
    pane.view_width = 20;
    pane.text.set_cursor(0, 50);
    assert!(pane.reveal_cursor(4));
    assert_eq!(pane.scroll_col, 31);

    pane.text.set_cursor(0, 0);
    assert!(pane.reveal_cursor(4));
    assert_eq!(pane.scroll_col, 0);
}

#[test]
fn scroll_by_clamps_to_content() {
    let mut pane = pane_with_rows(5, 3, 40);
    assert!(!pane.scroll_by(-3));
    assert!(pane.scroll_by(100));
    assert_eq!(pane.scroll_row, 5);
    assert!(pane.scroll_horizontal_by(4));
    assert!(pane.scroll_horizontal_by(-10));
    assert_eq!(pane.scroll_col, 0);
}

#[test]
fn modal_detection() {
    let mut ui = UiState::default();
    assert!(!ui.has_modal());
    ui.notification = Some(Notification::info("Success", "done"));
    assert!(ui.has_modal());
    assert!(!ui.notification.as_ref().is_some_and(Notification::is_error));
    assert_eq!(Notification::error("boom").title, "Error");
}

#[test]
fn new_state_focuses_modified_pane() {
    let state = AppState::default();
    assert_eq!(state.ui.focus, BufferSide::Modified);
    assert!(state.file_path.is_none());
    assert!(!state.is_dirty());
    assert_eq!(state.focused_pane().view_height, 20);
}
