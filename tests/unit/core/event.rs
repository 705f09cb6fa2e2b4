use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn uppercase_char_normalizes_to_shift() {
    let key: Key = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL).into();
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
}
