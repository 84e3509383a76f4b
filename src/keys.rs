//! Abstract key identifiers and key/button actions.
//!
//! [`KeyCode`] is the layout-independent key identity handed to applications. Its numeric
//! values follow the Windows virtual-key numbering, so letters and digits carry their own
//! ASCII code (`KeyCode::A as u16 == b'A'`). Platform scan codes are turned into a
//! [`KeyCode`] by [`keymap::lookup`](crate::keymap::lookup); nothing else constructs one from
//! raw platform data.

use serde::{Deserialize, Serialize};

/// Logical key understood by the application.
///
/// `Unknown` is the sentinel for any scan code without a mapping.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u16)]
pub enum KeyCode {
    #[default]
    Unknown = 0,

    Backspace = 8,
    Tab = 9,
    Enter = 13,
    CapsLock = 20,
    Escape = 27,
    Space = 32,

    PageUp = 33,
    PageDown = 34,
    End = 35,
    Home = 36,
    Left = 37,
    Up = 38,
    Right = 39,
    Down = 40,
    Insert = 45,
    Delete = 46,

    Num0 = 48,
    Num1 = 49,
    Num2 = 50,
    Num3 = 51,
    Num4 = 52,
    Num5 = 53,
    Num6 = 54,
    Num7 = 55,
    Num8 = 56,
    Num9 = 57,

    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,

    LeftMeta = 91,
    RightMeta = 92,
    Menu = 93,

    Numpad0 = 96,
    Numpad1 = 97,
    Numpad2 = 98,
    Numpad3 = 99,
    Numpad4 = 100,
    Numpad5 = 101,
    Numpad6 = 102,
    Numpad7 = 103,
    Numpad8 = 104,
    Numpad9 = 105,
    NumpadAdd = 107,
    NumpadSubtract = 109,

    F1 = 112,
    F2 = 113,
    F3 = 114,
    F4 = 115,
    F5 = 116,
    F6 = 117,
    F7 = 118,
    F8 = 119,
    F9 = 120,
    F10 = 121,
    F11 = 122,
    F12 = 123,

    LeftShift = 160,
    RightShift = 161,
    LeftCtrl = 162,
    RightCtrl = 163,
    LeftAlt = 164,
    RightAlt = 165,
    Back = 166,

    Semicolon = 186,
    Equal = 187,
    Comma = 188,
    Minus = 189,
    Period = 190,
    Slash = 191,
    Grave = 192,
    LeftBracket = 219,
    Backslash = 220,
    RightBracket = 221,
    Apostrophe = 222,
}

/// Letters in code order; index `i` is `'A' + i`.
pub(crate) const LETTERS: [KeyCode; 26] = [
    KeyCode::A,
    KeyCode::B,
    KeyCode::C,
    KeyCode::D,
    KeyCode::E,
    KeyCode::F,
    KeyCode::G,
    KeyCode::H,
    KeyCode::I,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::M,
    KeyCode::N,
    KeyCode::O,
    KeyCode::P,
    KeyCode::Q,
    KeyCode::R,
    KeyCode::S,
    KeyCode::T,
    KeyCode::U,
    KeyCode::V,
    KeyCode::W,
    KeyCode::X,
    KeyCode::Y,
    KeyCode::Z,
];

impl KeyCode {
    /// Numeric key code (virtual-key numbering).
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Reverse of [`code`](Self::code) for the contiguous letter range `'A'..='Z'`.
    pub fn from_letter_code(code: u16) -> Option<KeyCode> {
        let first = KeyCode::A.code();
        if (first..=KeyCode::Z.code()).contains(&code) {
            Some(LETTERS[(code - first) as usize])
        } else {
            None
        }
    }

    /// `true` for the six left/right shift, ctrl and alt keys plus the meta keys.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::LeftShift
                | KeyCode::RightShift
                | KeyCode::LeftCtrl
                | KeyCode::RightCtrl
                | KeyCode::LeftAlt
                | KeyCode::RightAlt
                | KeyCode::LeftMeta
                | KeyCode::RightMeta
        )
    }
}

/// What happened to a key. Derived per event, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyAction {
    Press,
    Release,
    /// Platform auto-repeat while the key stays held.
    Repeat,
}

/// What happened to a pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButtonAction {
    Press,
    Release,
}
