//! Scan code → [`KeyCode`] table.
//!
//! Scan codes are USB-HID keyboard usage IDs (page `0x07`), the numbering most platform
//! layers report as "scancode". They identify a physical key position, not a character.
//!
//! [`lookup`] is total: every `u32` yields a key, and codes without a mapping yield
//! [`KeyCode::Unknown`]. Letters are the one range resolved arithmetically; everything else
//! goes through an explicit match so the table can be checked entry by entry.

use crate::keys::KeyCode;

/// Platform scan code constants (USB-HID usage IDs).
pub mod scancode {
    pub const A: u32 = 4;
    pub const B: u32 = 5;
    pub const C: u32 = 6;
    pub const D: u32 = 7;
    pub const E: u32 = 8;
    pub const F: u32 = 9;
    pub const G: u32 = 10;
    pub const H: u32 = 11;
    pub const I: u32 = 12;
    pub const J: u32 = 13;
    pub const K: u32 = 14;
    pub const L: u32 = 15;
    pub const M: u32 = 16;
    pub const N: u32 = 17;
    pub const O: u32 = 18;
    pub const P: u32 = 19;
    pub const Q: u32 = 20;
    pub const R: u32 = 21;
    pub const S: u32 = 22;
    pub const T: u32 = 23;
    pub const U: u32 = 24;
    pub const V: u32 = 25;
    pub const W: u32 = 26;
    pub const X: u32 = 27;
    pub const Y: u32 = 28;
    pub const Z: u32 = 29;
    pub const NUM_1: u32 = 30;
    pub const NUM_2: u32 = 31;
    pub const NUM_3: u32 = 32;
    pub const NUM_4: u32 = 33;
    pub const NUM_5: u32 = 34;
    pub const NUM_6: u32 = 35;
    pub const NUM_7: u32 = 36;
    pub const NUM_8: u32 = 37;
    pub const NUM_9: u32 = 38;
    pub const NUM_0: u32 = 39;
    pub const RETURN: u32 = 40;
    pub const ESCAPE: u32 = 41;
    pub const BACKSPACE: u32 = 42;
    pub const TAB: u32 = 43;
    pub const SPACE: u32 = 44;
    pub const MINUS: u32 = 45;
    pub const EQUALS: u32 = 46;
    pub const LEFT_BRACKET: u32 = 47;
    pub const RIGHT_BRACKET: u32 = 48;
    pub const BACKSLASH: u32 = 49;
    pub const SEMICOLON: u32 = 51;
    pub const APOSTROPHE: u32 = 52;
    pub const GRAVE: u32 = 53;
    pub const COMMA: u32 = 54;
    pub const PERIOD: u32 = 55;
    pub const SLASH: u32 = 56;
    pub const CAPS_LOCK: u32 = 57;
    pub const F1: u32 = 58;
    pub const F12: u32 = 69;
    pub const INSERT: u32 = 73;
    pub const HOME: u32 = 74;
    pub const PAGE_UP: u32 = 75;
    pub const DELETE: u32 = 76;
    pub const END: u32 = 77;
    pub const PAGE_DOWN: u32 = 78;
    pub const RIGHT: u32 = 79;
    pub const LEFT: u32 = 80;
    pub const DOWN: u32 = 81;
    pub const UP: u32 = 82;
    pub const KP_MINUS: u32 = 86;
    pub const KP_PLUS: u32 = 87;
    pub const KP_ENTER: u32 = 88;
    pub const KP_1: u32 = 89;
    pub const KP_2: u32 = 90;
    pub const KP_3: u32 = 91;
    pub const KP_4: u32 = 92;
    pub const KP_5: u32 = 93;
    pub const KP_6: u32 = 94;
    pub const KP_7: u32 = 95;
    pub const KP_8: u32 = 96;
    pub const KP_9: u32 = 97;
    pub const KP_0: u32 = 98;
    pub const APPLICATION: u32 = 101;
    pub const MENU: u32 = 118;
    pub const LCTRL: u32 = 224;
    pub const LSHIFT: u32 = 225;
    pub const LALT: u32 = 226;
    pub const LGUI: u32 = 227;
    pub const RCTRL: u32 = 228;
    pub const RSHIFT: u32 = 229;
    pub const RALT: u32 = 230;
    pub const RGUI: u32 = 231;
    pub const AC_HOME: u32 = 269;
    pub const AC_BACK: u32 = 270;
}

/// Distance from the letter scan codes (`4..=29`) to the letter key codes (`65..=90`).
pub const LETTER_OFFSET: u32 = KeyCode::A as u32 - scancode::A;

const FUNCTION_KEYS: [KeyCode; 12] = [
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
    KeyCode::F7,
    KeyCode::F8,
    KeyCode::F9,
    KeyCode::F10,
    KeyCode::F11,
    KeyCode::F12,
];

/// Resolve a platform scan code to its abstract key.
pub fn lookup(code: u32) -> KeyCode {
    use scancode as sc;

    if (sc::A..=sc::Z).contains(&code) {
        // Bounded by the range check, so the shifted value is always a letter.
        return KeyCode::from_letter_code((code + LETTER_OFFSET) as u16).unwrap_or_default();
    }
    if (sc::F1..=sc::F12).contains(&code) {
        return FUNCTION_KEYS[(code - sc::F1) as usize];
    }

    match code {
        sc::NUM_0 => KeyCode::Num0,
        sc::NUM_1 => KeyCode::Num1,
        sc::NUM_2 => KeyCode::Num2,
        sc::NUM_3 => KeyCode::Num3,
        sc::NUM_4 => KeyCode::Num4,
        sc::NUM_5 => KeyCode::Num5,
        sc::NUM_6 => KeyCode::Num6,
        sc::NUM_7 => KeyCode::Num7,
        sc::NUM_8 => KeyCode::Num8,
        sc::NUM_9 => KeyCode::Num9,

        sc::COMMA => KeyCode::Comma,
        sc::PERIOD => KeyCode::Period,
        sc::MINUS => KeyCode::Minus,
        sc::EQUALS => KeyCode::Equal,
        sc::SLASH => KeyCode::Slash,
        sc::BACKSLASH => KeyCode::Backslash,
        sc::SEMICOLON => KeyCode::Semicolon,
        sc::APOSTROPHE => KeyCode::Apostrophe,
        sc::GRAVE => KeyCode::Grave,
        sc::LEFT_BRACKET => KeyCode::LeftBracket,
        sc::RIGHT_BRACKET => KeyCode::RightBracket,

        sc::LEFT => KeyCode::Left,
        sc::RIGHT => KeyCode::Right,
        sc::UP => KeyCode::Up,
        sc::DOWN => KeyCode::Down,
        sc::HOME | sc::AC_HOME => KeyCode::Home,
        sc::END => KeyCode::End,
        sc::PAGE_UP => KeyCode::PageUp,
        sc::PAGE_DOWN => KeyCode::PageDown,
        sc::INSERT => KeyCode::Insert,
        sc::DELETE => KeyCode::Delete,
        sc::BACKSPACE => KeyCode::Backspace,
        sc::AC_BACK => KeyCode::Back,

        sc::LSHIFT => KeyCode::LeftShift,
        sc::RSHIFT => KeyCode::RightShift,
        sc::LCTRL => KeyCode::LeftCtrl,
        sc::RCTRL => KeyCode::RightCtrl,
        sc::LALT => KeyCode::LeftAlt,
        sc::RALT => KeyCode::RightAlt,
        sc::LGUI => KeyCode::LeftMeta,
        sc::RGUI => KeyCode::RightMeta,

        sc::KP_0 => KeyCode::Numpad0,
        sc::KP_1 => KeyCode::Numpad1,
        sc::KP_2 => KeyCode::Numpad2,
        sc::KP_3 => KeyCode::Numpad3,
        sc::KP_4 => KeyCode::Numpad4,
        sc::KP_5 => KeyCode::Numpad5,
        sc::KP_6 => KeyCode::Numpad6,
        sc::KP_7 => KeyCode::Numpad7,
        sc::KP_8 => KeyCode::Numpad8,
        sc::KP_9 => KeyCode::Numpad9,
        sc::KP_PLUS => KeyCode::NumpadAdd,
        sc::KP_MINUS => KeyCode::NumpadSubtract,

        sc::SPACE => KeyCode::Space,
        sc::TAB => KeyCode::Tab,
        sc::RETURN | sc::KP_ENTER => KeyCode::Enter,
        sc::ESCAPE => KeyCode::Escape,
        sc::CAPS_LOCK => KeyCode::CapsLock,
        sc::MENU | sc::APPLICATION => KeyCode::Menu,

        _ => KeyCode::Unknown,
    }
}
