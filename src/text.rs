//! Text produced by a key press.
//!
//! Only called for a press that is not an auto-repeat. The decision is a single match: the
//! control-character keys come first and each arm ends the decision, so a key never yields
//! more than one piece of text.

use crate::keys::KeyCode;

/// UTF-8 text a non-repeat press of `key` inserts. Empty when the key inserts nothing.
pub fn synthesize(key: KeyCode) -> String {
    match text_char(key) {
        Some(c) => c.to_string(),
        None => String::new(),
    }
}

/// The single character behind [`synthesize`], if any.
pub fn text_char(key: KeyCode) -> Option<char> {
    let c = match key {
        KeyCode::Backspace => '\u{08}',
        KeyCode::Delete => '\u{7f}',
        KeyCode::Enter => '\n',
        // Left arrow inserts ESC. Only this key does; Escape itself inserts nothing.
        KeyCode::Left => '\u{1b}',
        other => return designated_char(other),
    };
    Some(c)
}

/// Code point designated for a printable key.
fn designated_char(key: KeyCode) -> Option<char> {
    let code = key.code();
    let c = match key {
        k if KeyCode::from_letter_code(code) == Some(k) => char::from(code as u8),
        KeyCode::Num0
        | KeyCode::Num1
        | KeyCode::Num2
        | KeyCode::Num3
        | KeyCode::Num4
        | KeyCode::Num5
        | KeyCode::Num6
        | KeyCode::Num7
        | KeyCode::Num8
        | KeyCode::Num9 => char::from(code as u8),
        KeyCode::Numpad0
        | KeyCode::Numpad1
        | KeyCode::Numpad2
        | KeyCode::Numpad3
        | KeyCode::Numpad4
        | KeyCode::Numpad5
        | KeyCode::Numpad6
        | KeyCode::Numpad7
        | KeyCode::Numpad8
        | KeyCode::Numpad9 => {
            char::from(b'0' + (code - KeyCode::Numpad0.code()) as u8)
        }
        KeyCode::NumpadAdd => '+',
        KeyCode::NumpadSubtract | KeyCode::Minus => '-',
        KeyCode::Space => ' ',
        KeyCode::Tab => '\t',
        KeyCode::Comma => ',',
        KeyCode::Period => '.',
        KeyCode::Equal => '=',
        KeyCode::Slash => '/',
        KeyCode::Backslash => '\\',
        KeyCode::Semicolon => ';',
        KeyCode::Apostrophe => '\'',
        KeyCode::Grave => '`',
        KeyCode::LeftBracket => '[',
        KeyCode::RightBracket => ']',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_keys_yield_exactly_one_byte() {
        assert_eq!(synthesize(KeyCode::Backspace).as_bytes(), [0x08]);
        assert_eq!(synthesize(KeyCode::Delete).as_bytes(), [0x7f]);
        assert_eq!(synthesize(KeyCode::Enter).as_bytes(), [0x0a]);
        assert_eq!(synthesize(KeyCode::Left).as_bytes(), [0x1b]);
    }

    #[test]
    fn escape_is_not_a_general_mapping() {
        assert!(synthesize(KeyCode::Escape).is_empty());
        assert!(synthesize(KeyCode::Right).is_empty());
        assert!(synthesize(KeyCode::Up).is_empty());
    }

    #[test]
    fn printable_keys_use_their_code_point() {
        assert_eq!(synthesize(KeyCode::A), "A");
        assert_eq!(synthesize(KeyCode::Z), "Z");
        assert_eq!(synthesize(KeyCode::Num7), "7");
        assert_eq!(synthesize(KeyCode::Numpad3), "3");
        assert_eq!(synthesize(KeyCode::NumpadAdd), "+");
        assert_eq!(synthesize(KeyCode::Space), " ");
        assert_eq!(synthesize(KeyCode::LeftBracket), "[");
        assert_eq!(synthesize(KeyCode::Backslash), "\\");
    }

    #[test]
    fn non_printable_keys_yield_nothing() {
        for key in [
            KeyCode::Unknown,
            KeyCode::LeftShift,
            KeyCode::RightCtrl,
            KeyCode::F5,
            KeyCode::Home,
            KeyCode::Menu,
            KeyCode::CapsLock,
        ] {
            assert!(synthesize(key).is_empty(), "{key:?}");
        }
    }
}
