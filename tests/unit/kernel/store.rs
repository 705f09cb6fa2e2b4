use super::*;
use crate::kernel::buffers::DualBuffers;
use crate::kernel::diff::DiffAlgorithm;
use crate::kernel::highlight::HighlightMapping;
use crate::kernel::services::adapters::LocalFileProvider;
use crate::kernel::services::ports::DiffSettings;
use crate::kernel::state::{ContextMenuItem, PendingAction};
use std::path::PathBuf;
use tempfile::tempdir;

fn new_store() -> Store {
    Store::new(AppState::default())
}

fn opened_store(text: &str) -> Store {
    let mut store = new_store();
    let result = store.dispatch(Action::FileOpened {
        path: PathBuf::from("/tmp/sample.txt"),
        buffers: DualBuffers::from_text(text),
    });
    assert!(result.state_changed);
    store
}

fn type_text(store: &mut Store, text: &str) {
    for ch in text.chars() {
        let cmd = if ch == '\n' {
            Command::InsertNewline
        } else {
            Command::InsertChar(ch)
        };
        let _ = store.dispatch(Action::RunCommand(cmd));
    }
}

fn marked(store: &Store, side: BufferSide) -> Vec<usize> {
    store
        .state()
        .highlights
        .lines(side)
        .iter()
        .copied()
        .collect()
}

#[test]
fn open_path_requests_load() {
    let mut store = new_store();
    let result = store.dispatch(Action::OpenPath(PathBuf::from("a.txt")));
    assert_eq!(result.effects, vec![Effect::LoadFile(PathBuf::from("a.txt"))]);
    assert!(!result.state_changed);
}

#[test]
fn file_opened_fills_both_panes_without_marks() {
    let store = opened_store("a\nb\nc\n");
    let state = store.state();
    assert_eq!(state.file_path.as_deref(), Some(std::path::Path::new("/tmp/sample.txt")));
    assert_eq!(state.pane(BufferSide::Original).text.text(), "a\nb\nc\n");
    assert_eq!(state.pane(BufferSide::Modified).text.text(), "a\nb\nc\n");
    assert!(state.highlights.is_empty());
    assert_eq!(state.summary.unchanged, 3);
    assert!(!state.is_dirty());
}

#[test]
fn editing_modified_pane_recomputes_highlights() {
    let mut store = opened_store("a\nb\nc\n");
    let _ = store.dispatch(Action::RunCommand(Command::CursorDown));
    let _ = store.dispatch(Action::RunCommand(Command::DeleteForward));
    type_text(&mut store, "x");

    let state = store.state();
    assert_eq!(state.buffers.modified().lines(), ["a\n", "x\n", "c\n"]);
    assert_eq!(state.buffers.original().lines(), ["a\n", "b\n", "c\n"]);
    assert_eq!(marked(&store, BufferSide::Original), vec![2]);
    assert_eq!(marked(&store, BufferSide::Modified), vec![2]);
    assert!(store.state().is_dirty());
}

#[test]
fn editing_original_pane_updates_original_buffer() {
    let mut store = opened_store("a\nb\n");
    let _ = store.dispatch(Action::FocusPane(BufferSide::Original));
    let _ = store.dispatch(Action::RunCommand(Command::CursorFileEnd));
    type_text(&mut store, "z\n");

    let state = store.state();
    assert_eq!(state.buffers.original().lines(), ["a\n", "b\n", "z\n"]);
    assert_eq!(marked(&store, BufferSide::Original), vec![3]);
    assert!(marked(&store, BufferSide::Modified).is_empty());
}

#[test]
fn pane_edited_replaces_side_wholesale() {
    let mut store = opened_store("a\nb\nc\n");
    let _ = store.dispatch(Action::PaneEdited {
        side: BufferSide::Modified,
        lines: vec!["a\n".to_string(), "b\n".to_string()],
    });
    assert_eq!(store.state().pane(BufferSide::Modified).text.text(), "a\nb\n");
    assert_eq!(marked(&store, BufferSide::Original), vec![3]);
    assert!(marked(&store, BufferSide::Modified).is_empty());
}

#[test]
fn commit_without_file_reports_error() {
    let mut store = new_store();
    let result = store.dispatch(Action::RunCommand(Command::ApplyChanges));
    assert!(result.effects.is_empty());
    let notification = store.state().ui.notification.as_ref().unwrap();
    assert!(notification.is_error());
    assert!(!store.state().ui.confirm_dialog.visible);
}

#[test]
fn declining_commit_keeps_everything() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("code.txt");
    std::fs::write(&path, "a\nb\n").unwrap();
    let provider = LocalFileProvider::new();

    let mut store = new_store();
    let buffers = DualBuffers::load(&provider, &path).unwrap();
    let _ = store.dispatch(Action::FileOpened {
        path: path.clone(),
        buffers,
    });
    let _ = store.dispatch(Action::RunCommand(Command::CursorFileEnd));
    type_text(&mut store, "c\n");

    let result = store.dispatch(Action::RunCommand(Command::ApplyChanges));
    assert!(result.effects.is_empty());
    assert!(store.state().ui.confirm_dialog.visible);
    assert_eq!(store.state().ui.confirm_dialog.message, CONFIRM_APPLY_MESSAGE);
    assert_eq!(
        store.state().ui.confirm_dialog.on_confirm,
        Some(PendingAction::Commit { path: path.clone() })
    );

    // Typing while the dialog is up does nothing.
    type_text(&mut store, "q");
    let result = store.dispatch(Action::RunCommand(Command::Escape));
    assert!(result.effects.is_empty());
    assert!(!store.state().ui.confirm_dialog.visible);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    assert_eq!(store.state().buffers.original().lines(), ["a\n", "b\n"]);
    assert_eq!(
        store.state().buffers.modified().lines(),
        ["a\n", "b\n", "c\n"]
    );
    assert_eq!(
        store.state().pane(BufferSide::Modified).text.text(),
        "a\nb\nc\n"
    );
}

#[test]
fn accepting_commit_emits_commit_effect() {
    let mut store = opened_store("a\n");
    let _ = store.dispatch(Action::CommitRequested);
    let result = store.dispatch(Action::RunCommand(Command::Accept));
    assert_eq!(
        result.effects,
        vec![Effect::CommitFile(PathBuf::from("/tmp/sample.txt"))]
    );
    assert!(!store.state().ui.confirm_dialog.visible);
    // Nothing is applied until the shell reports back.
    assert_eq!(store.state().buffers.original().lines(), ["a\n"]);
}

#[test]
fn committed_resets_original_to_modified() {
    let mut store = opened_store("a\nb\n");
    let _ = store.dispatch(Action::RunCommand(Command::CursorFileEnd));
    type_text(&mut store, "c\n");
    assert!(!store.state().highlights.is_empty());

    let mut committed = store.state().buffers.clone();
    committed.set_original(committed.modified().lines().to_vec());
    let _ = store.dispatch(Action::Committed {
        path: PathBuf::from("/tmp/sample.txt"),
        buffers: committed,
    });

    let state = store.state();
    assert!(!state.is_dirty());
    assert!(state.highlights.is_empty());
    assert_eq!(
        state.pane(BufferSide::Original).text.text(),
        state.pane(BufferSide::Modified).text.text()
    );
    let notification = state.ui.notification.as_ref().unwrap();
    assert_eq!(notification.message, APPLIED_MESSAGE);
    assert!(!notification.is_error());
}

#[test]
fn failed_open_keeps_previous_buffers() {
    let mut store = opened_store("keep\n");
    let _ = store.dispatch(Action::Notify(Notification::error(
        "Failed to open file: missing.txt: not found",
    )));
    let state = store.state();
    assert_eq!(state.buffers.original().lines(), ["keep\n"]);
    assert_eq!(state.pane(BufferSide::Modified).text.text(), "keep\n");
    assert!(state.ui.notification.as_ref().unwrap().is_error());
}

#[test]
fn notification_swallows_keys_until_dismissed() {
    let mut store = opened_store("a\n");
    let _ = store.dispatch(Action::Notify(Notification::info("Copy Line", "done")));
    type_text(&mut store, "zz");
    assert_eq!(store.state().pane(BufferSide::Modified).text.text(), "a\n");

    let result = store.dispatch(Action::RunCommand(Command::Accept));
    assert!(result.state_changed);
    assert!(store.state().ui.notification.is_none());
}

#[test]
fn copy_line_uses_text_without_terminator() {
    let mut store = opened_store("first\r\nsecond\n");
    let result = store.dispatch(Action::CopyRequested {
        side: BufferSide::Original,
        scope: CopyScope::Line(0),
    });
    match result.effects.as_slice() {
        [Effect::SetClipboardText { text, success }] => {
            assert_eq!(text, "first");
            assert_eq!(success.message, "Line copied to clipboard.");
        }
        other => panic!("unexpected effects: {other:?}"),
    }

    let result = store.dispatch(Action::CopyRequested {
        side: BufferSide::Original,
        scope: CopyScope::Line(99),
    });
    assert!(result.effects.is_empty());
}

#[test]
fn form_feed_does_not_split_pane_rows() {
    let mut store = opened_store("a\x0cb\nc\n");
    let _ = store.dispatch(Action::PaneEdited {
        side: BufferSide::Modified,
        lines: vec!["a\x0cb\n".to_string(), "x\n".to_string()],
    });
    assert_eq!(marked(&store, BufferSide::Modified), vec![2]);

    let pane = &store.state().pane(BufferSide::Modified).text;
    assert_eq!(pane.len_rows(), 3);
    assert_eq!(pane.row_text(1).as_deref(), Some("x"));

    let result = store.dispatch(Action::CopyRequested {
        side: BufferSide::Modified,
        scope: CopyScope::Line(1),
    });
    match result.effects.as_slice() {
        [Effect::SetClipboardText { text, .. }] => assert_eq!(text, "x"),
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn copy_all_trims_and_names_the_side() {
    let mut store = opened_store("\n  body  \n\n");
    let result = store.dispatch(Action::RunCommand(Command::CopyPane));
    match result.effects.as_slice() {
        [Effect::SetClipboardText { text, success }] => {
            assert_eq!(text, "body");
            assert_eq!(success.message, "Modified code copied to clipboard.");
        }
        other => panic!("unexpected effects: {other:?}"),
    }

    let result = store.dispatch(Action::CopyRequested {
        side: BufferSide::Original,
        scope: CopyScope::All,
    });
    match result.effects.as_slice() {
        [Effect::SetClipboardText { success, .. }] => {
            assert_eq!(success.title, "Copy Original Code");
        }
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn context_menu_copies_line_under_pointer() {
    let mut store = opened_store("a\nb\nc\n");
    let _ = store.dispatch(Action::ContextMenuOpen {
        side: BufferSide::Original,
        row: Some(1),
        x: 10,
        y: 5,
    });
    let menu = &store.state().ui.context_menu;
    assert!(menu.visible);
    assert_eq!(
        menu.items,
        vec![ContextMenuItem::CopyLine, ContextMenuItem::CopyEntireText]
    );
    assert_eq!(store.state().ui.focus, BufferSide::Original);

    let result = store.dispatch(Action::RunCommand(Command::Accept));
    assert!(!store.state().ui.context_menu.visible);
    match result.effects.as_slice() {
        [Effect::SetClipboardText { text, .. }] => assert_eq!(text, "b"),
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn context_menu_copy_entire_text() {
    let mut store = opened_store("a\nb\n");
    let _ = store.dispatch(Action::RunCommand(Command::ContextMenu));
    let _ = store.dispatch(Action::RunCommand(Command::CursorDown));
    assert_eq!(store.state().ui.context_menu.selected, 1);
    let result = store.dispatch(Action::ContextMenuActivate);
    match result.effects.as_slice() {
        [Effect::SetClipboardText { text, success }] => {
            assert_eq!(text, "a\nb");
            assert_eq!(success.message, "Text area copied to clipboard.");
        }
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn context_menu_without_row_only_offers_entire_text() {
    let mut store = opened_store("a\n");
    let _ = store.dispatch(Action::ContextMenuOpen {
        side: BufferSide::Modified,
        row: Some(40),
        x: 0,
        y: 0,
    });
    assert_eq!(
        store.state().ui.context_menu.items,
        vec![ContextMenuItem::CopyEntireText]
    );
    let _ = store.dispatch(Action::RunCommand(Command::Escape));
    assert!(!store.state().ui.context_menu.visible);
}

#[test]
fn open_prompt_collects_path_and_requests_load() {
    let mut store = new_store();
    let _ = store.dispatch(Action::RunCommand(Command::OpenFile));
    assert!(store.state().ui.input_dialog.visible);

    let result = store.dispatch(Action::RunCommand(Command::Accept));
    assert!(result.effects.is_empty());
    assert_eq!(
        store.state().ui.input_dialog.error.as_deref(),
        Some("Path required")
    );

    let _ = store.dispatch(Action::InsertText("notes.tx".to_string()));
    type_text(&mut store, "t");
    let _ = store.dispatch(Action::RunCommand(Command::CursorLeft));
    let _ = store.dispatch(Action::RunCommand(Command::DeleteForward));
    let _ = store.dispatch(Action::RunCommand(Command::CursorLineEnd));
    type_text(&mut store, "T");
    assert_eq!(store.state().ui.input_dialog.value, "notes.txT");
    let _ = store.dispatch(Action::RunCommand(Command::DeleteBackward));

    let result = store.dispatch(Action::RunCommand(Command::Accept));
    assert_eq!(
        result.effects,
        vec![Effect::LoadFile(PathBuf::from("notes.tx"))]
    );
    assert!(!store.state().ui.input_dialog.visible);
}

#[test]
fn paste_inserts_into_focused_pane() {
    let mut store = opened_store("a\n");
    let result = store.dispatch(Action::InsertText("one\ntwo\n".to_string()));
    assert!(result.state_changed);
    assert_eq!(
        store.state().buffers.modified().lines(),
        ["one\n", "two\n", "a\n"]
    );
    assert_eq!(marked(&store, BufferSide::Modified), vec![1, 2]);
}

#[test]
fn focus_and_click_move_cursor() {
    let mut store = opened_store("alpha\nbeta\ngamma\n");
    let _ = store.dispatch(Action::PaneSetViewSize {
        side: BufferSide::Original,
        height: 10,
        width: 40,
    });
    let result = store.dispatch(Action::PaneClick {
        side: BufferSide::Original,
        row: 2,
        x: 3,
    });
    assert!(result.state_changed);
    assert_eq!(store.state().ui.focus, BufferSide::Original);
    assert_eq!(store.state().pane(BufferSide::Original).text.cursor(), (2, 3));

    let _ = store.dispatch(Action::RunCommand(Command::FocusNextPane));
    assert_eq!(store.state().ui.focus, BufferSide::Modified);
}

#[test]
fn page_down_moves_by_view_height() {
    let text: String = (0..100).map(|i| format!("{i}\n")).collect();
    let mut store = opened_store(&text);
    let _ = store.dispatch(Action::PaneSetViewSize {
        side: BufferSide::Modified,
        height: 10,
        width: 40,
    });
    let _ = store.dispatch(Action::RunCommand(Command::PageDown));
    let pane = store.state().pane(BufferSide::Modified);
    assert_eq!(pane.text.cursor().0, 10);
    assert_eq!(pane.scroll_row, 1);
}

#[test]
fn diff_options_switch_mapping() {
    let mut store = opened_store("x\ny\nx\n");
    let _ = store.dispatch(Action::PaneEdited {
        side: BufferSide::Modified,
        lines: vec!["x\n".to_string(), "y\n".to_string()],
    });
    assert_eq!(marked(&store, BufferSide::Original), vec![1]);

    let result = store.dispatch(Action::SetDiffOptions(DiffSettings {
        algorithm: DiffAlgorithm::Myers,
        highlight_mapping: HighlightMapping::Aligned,
    }));
    assert!(result.state_changed);
    assert_eq!(marked(&store, BufferSide::Original), vec![3]);
}

#[test]
fn quit_sets_flag_even_behind_dialogs() {
    let mut store = opened_store("a\n");
    let _ = store.dispatch(Action::CommitRequested);
    let _ = store.dispatch(Action::RunCommand(Command::Quit));
    assert!(store.state().ui.should_quit);
}
