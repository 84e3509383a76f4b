//! Raw platform events and the application-facing event model.
//!
//! A platform source hands the dispatcher [`RawEvent`]s: a closed set of variants, each
//! carrying a plain copy of the fields the handlers need. Nothing in a raw event borrows
//! platform memory, and the dispatcher drops each one once its handler returns.
//!
//! Handlers turn raw events into [`InputEvent`]s, one variant per application callback.
//!
//! ## Value conventions
//! - **Pointer coordinates / deltas:** raw platform units, passed through untouched.
//! - **Scroll direction:** unit-normalized, `(±1, 0)` or `(0, ±1)`.
//! - **Gamepad axes:** normalized to `[-1.0, 1.0]`.
//! - **Gamepad device index:** always [`GAMEPAD_INDEX`](crate::gamepad::GAMEPAD_INDEX).

use crate::gamepad::{GamepadAxisId, GamepadButtonId};
use crate::keys::{KeyAction, KeyCode, MouseButtonAction};
use serde::{Deserialize, Serialize};

/// Raw button/key state: released.
pub const RAW_RELEASED: u8 = 0;
/// Raw button/key state: pressed.
pub const RAW_PRESSED: u8 = 1;

/// Gamepad hot-plug direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceChange {
    Added,
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamepadDeviceEvent {
    /// Platform device index (for `Added`) or instance id (for `Removed`).
    pub which: i32,
    pub change: DeviceChange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamepadAxisEvent {
    pub which: i32,
    /// Platform axis id, see [`GamepadAxisId::from_platform`].
    pub axis: u8,
    pub value: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamepadButtonEvent {
    pub which: i32,
    /// Platform button id, see [`GamepadButtonId::from_platform`].
    pub button: u8,
    /// [`RAW_PRESSED`] or [`RAW_RELEASED`].
    pub state: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseMotionEvent {
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseWheelEvent {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseButtonEvent {
    pub x: i32,
    pub y: i32,
    pub button: u8,
    pub state: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardEvent {
    /// Platform scan code, see [`keymap`](crate::keymap).
    pub scancode: u32,
    /// [`RAW_PRESSED`], [`RAW_RELEASED`], or anything else (dropped).
    pub state: u8,
    /// Set by the platform for auto-repeat while held.
    pub repeat: bool,
}

/// One platform notification, already classified into the category its handler expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawEvent {
    GamepadDevice(GamepadDeviceEvent),
    GamepadAxis(GamepadAxisEvent),
    GamepadButton(GamepadButtonEvent),
    MouseMotion(MouseMotionEvent),
    MouseWheel(MouseWheelEvent),
    MouseButton(MouseButtonEvent),
    Keyboard(KeyboardEvent),
    /// Request to terminate the input subsystem.
    Quit,
    /// Anything the core has no handler for (window, touch, drop, …).
    Other { kind: u32 },
}

impl RawEvent {
    pub fn key_down(scancode: u32) -> Self {
        RawEvent::Keyboard(KeyboardEvent {
            scancode,
            state: RAW_PRESSED,
            repeat: false,
        })
    }

    pub fn key_up(scancode: u32) -> Self {
        RawEvent::Keyboard(KeyboardEvent {
            scancode,
            state: RAW_RELEASED,
            repeat: false,
        })
    }

    pub fn key_repeat(scancode: u32) -> Self {
        RawEvent::Keyboard(KeyboardEvent {
            scancode,
            state: RAW_PRESSED,
            repeat: true,
        })
    }

    pub fn gamepad_added(which: i32) -> Self {
        RawEvent::GamepadDevice(GamepadDeviceEvent {
            which,
            change: DeviceChange::Added,
        })
    }

    pub fn gamepad_removed(which: i32) -> Self {
        RawEvent::GamepadDevice(GamepadDeviceEvent {
            which,
            change: DeviceChange::Removed,
        })
    }

    pub fn mouse_motion(x: i32, y: i32, xrel: i32, yrel: i32) -> Self {
        RawEvent::MouseMotion(MouseMotionEvent { x, y, xrel, yrel })
    }

    pub fn mouse_wheel(x: i32, y: i32) -> Self {
        RawEvent::MouseWheel(MouseWheelEvent { x, y })
    }
}

/// Application-facing event. Each variant is one callback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Key {
        key: KeyCode,
        action: KeyAction,
    },
    /// UTF-8 text inserted by a key press.
    Text {
        text: String,
    },
    /// Absolute pointer position (pointer not captured).
    MousePosition {
        x: i32,
        y: i32,
    },
    /// Relative pointer motion (pointer captured).
    MouseRelative {
        dx: i32,
        dy: i32,
    },
    MouseButton {
        x: i32,
        y: i32,
        button: u8,
        action: MouseButtonAction,
    },
    /// `x`/`y` are the raw wheel values; `dx`/`dy` the unit direction.
    MouseScroll {
        x: i32,
        y: i32,
        dx: f32,
        dy: f32,
    },
    GamepadAvailability {
        device: u32,
        available: bool,
    },
    GamepadAxis {
        device: u32,
        axis: GamepadAxisId,
        value: f32,
    },
    GamepadButton {
        device: u32,
        button: GamepadButtonId,
        pressed: bool,
    },
}

impl InputEvent {
    pub fn is_keyboard(&self) -> bool {
        matches!(self, InputEvent::Key { .. } | InputEvent::Text { .. })
    }

    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            InputEvent::MousePosition { .. }
                | InputEvent::MouseRelative { .. }
                | InputEvent::MouseButton { .. }
                | InputEvent::MouseScroll { .. }
        )
    }

    pub fn is_gamepad(&self) -> bool {
        matches!(
            self,
            InputEvent::GamepadAvailability { .. }
                | InputEvent::GamepadAxis { .. }
                | InputEvent::GamepadButton { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_is_a_held_press() {
        assert_eq!(
            RawEvent::key_repeat(4),
            RawEvent::Keyboard(KeyboardEvent {
                scancode: 4,
                state: RAW_PRESSED,
                repeat: true
            })
        );
        assert_ne!(RawEvent::key_repeat(4), RawEvent::key_down(4));
    }

    #[test]
    fn input_event_groups_are_disjoint() {
        let events = [
            InputEvent::Text { text: "a".into() },
            InputEvent::MouseRelative { dx: 1, dy: 0 },
            InputEvent::GamepadAvailability {
                device: 0,
                available: true,
            },
        ];
        for e in &events {
            let groups = [e.is_keyboard(), e.is_pointer(), e.is_gamepad()];
            assert_eq!(groups.iter().filter(|g| **g).count(), 1, "{e:?}");
        }
    }
}
