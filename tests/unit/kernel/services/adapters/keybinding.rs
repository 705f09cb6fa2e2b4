use super::*;

#[test]
fn pane_has_cursor_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Pane, &Key::simple(KeyCode::Left)),
        Some(&Command::CursorLeft)
    );
}

#[test]
fn global_commands_fall_through_in_pane() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Pane, &Key::ctrl(KeyCode::Char('s'))),
        Some(&Command::ApplyChanges)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Pane, &Key::ctrl(KeyCode::Char('o'))),
        Some(&Command::OpenFile)
    );
}

#[test]
fn dialogs_do_not_leak_global_shortcuts() {
    let service = KeybindingService::new();
    let apply = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(service.resolve(KeybindingContext::ConfirmDialog, &apply), None);
    assert_eq!(service.resolve(KeybindingContext::InputDialog, &apply), None);
    assert_eq!(service.resolve(KeybindingContext::ContextMenu, &apply), None);

    let quit = Key::ctrl(KeyCode::Char('q'));
    assert_eq!(
        service.resolve(KeybindingContext::InputDialog, &quit),
        Some(&Command::Quit)
    );
}

#[test]
fn confirm_dialog_accepts_yes_and_rejects_no() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::ConfirmDialog, &Key::simple(KeyCode::Char('y'))),
        Some(&Command::Accept)
    );
    assert_eq!(
        service.resolve(KeybindingContext::ConfirmDialog, &Key::simple(KeyCode::Char('n'))),
        Some(&Command::Escape)
    );
}

#[test]
fn enter_means_newline_in_pane_and_accept_in_dialogs() {
    let service = KeybindingService::new();
    let enter = Key::simple(KeyCode::Enter);
    assert_eq!(
        service.resolve(KeybindingContext::Pane, &enter),
        Some(&Command::InsertNewline)
    );
    assert_eq!(
        service.resolve(KeybindingContext::InputDialog, &enter),
        Some(&Command::Accept)
    );
    assert_eq!(
        service.resolve(KeybindingContext::ContextMenu, &enter),
        Some(&Command::Accept)
    );
}

#[test]
fn bind_and_unbind_override_defaults() {
    let mut service = KeybindingService::new();
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(service.unbind(KeybindingContext::Global, &key), Some(Command::ApplyChanges));
    assert_eq!(service.resolve(KeybindingContext::Pane, &key), None);

    service.bind(KeybindingContext::Pane, key, Command::CopyPane);
    assert_eq!(
        service.resolve(KeybindingContext::Pane, &key),
        Some(&Command::CopyPane)
    );
    assert!(service.bindings(KeybindingContext::Pane).contains_key(&key));
}

#[test]
fn context_names_parse() {
    assert_eq!(KeybindingContext::parse("Editor"), Some(KeybindingContext::Pane));
    assert_eq!(
        KeybindingContext::parse("context_menu"),
        Some(KeybindingContext::ContextMenu)
    );
    assert_eq!(KeybindingContext::parse("sidebar"), None);
}
