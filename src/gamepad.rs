//! Gamepad axis/button identifiers and platform id mapping.
//!
//! Platform ids follow the common "game controller" layout numbering (the one SDL and most
//! XInput-style mappers use). Ids outside the mapped set return `None` and the event is
//! dropped by the caller. A loaded [`GamepadMapping`](crate::mapping::GamepadMapping) can
//! override individual ids.
//!
//! ## Axes
//! - `0..=3`: left X, left Y, right X, right Y (signed 16-bit)
//! - `4..=5`: left / right trigger (`0..=32767`)

use serde::{Deserialize, Serialize};

/// Every gamepad event is reported against this device index.
pub const GAMEPAD_INDEX: u32 = 0;

/// Logical gamepad axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamepadAxisId {
    LeftX,
    LeftY,
    RightX,
    RightY,
    LeftTrigger,
    RightTrigger,
}

/// Logical gamepad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamepadButtonId {
    A,
    B,
    X,
    Y,
    Back,
    Guide,
    Start,
    LeftStick,
    RightStick,
    Lb,
    Rb,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
}

impl GamepadAxisId {
    /// Map a platform axis id.
    pub fn from_platform(axis: u8) -> Option<Self> {
        Some(match axis {
            0 => Self::LeftX,
            1 => Self::LeftY,
            2 => Self::RightX,
            3 => Self::RightY,
            4 => Self::LeftTrigger,
            5 => Self::RightTrigger,
            _ => return None,
        })
    }
}

impl GamepadButtonId {
    /// Map a platform button id.
    pub fn from_platform(button: u8) -> Option<Self> {
        // Indices are the platform's; keep this table in platform order.
        const BUTTON_MAP: [GamepadButtonId; 15] = [
            GamepadButtonId::A,
            GamepadButtonId::B,
            GamepadButtonId::X,
            GamepadButtonId::Y,
            GamepadButtonId::Back,
            GamepadButtonId::Guide,
            GamepadButtonId::Start,
            GamepadButtonId::LeftStick,
            GamepadButtonId::RightStick,
            GamepadButtonId::Lb,
            GamepadButtonId::Rb,
            GamepadButtonId::DpadUp,
            GamepadButtonId::DpadDown,
            GamepadButtonId::DpadLeft,
            GamepadButtonId::DpadRight,
        ];
        BUTTON_MAP.get(button as usize).copied()
    }
}

/// Normalize a signed 16-bit axis into `[-1, 1]`.
///
/// Each sign is divided by its own maximum magnitude, so both extremes land exactly on
/// `±1.0` and `0` stays `0.0`.
#[inline]
pub fn normalize_axis(v: i16) -> f32 {
    // Map [-32768, 32767] -> [-1, 1]
    if v >= 0 {
        (v as f32) / 32767.0
    } else {
        (v as f32) / 32768.0
    }
}

/// Zero out values whose magnitude is below `deadzone`.
#[inline]
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    if value.abs() < deadzone {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_extremes_are_exact() {
        assert_eq!(normalize_axis(i16::MAX), 1.0);
        assert_eq!(normalize_axis(i16::MIN), -1.0);
        assert_eq!(normalize_axis(0), 0.0);
    }

    #[test]
    fn axis_stays_in_range() {
        for v in (i16::MIN..=i16::MAX).step_by(97) {
            let n = normalize_axis(v);
            assert!((-1.0..=1.0).contains(&n), "{v} -> {n}");
        }
    }

    #[test]
    fn unsupported_ids_are_none() {
        assert_eq!(GamepadAxisId::from_platform(6), None);
        assert_eq!(GamepadAxisId::from_platform(255), None);
        assert_eq!(GamepadButtonId::from_platform(15), None);
        assert_eq!(GamepadButtonId::from_platform(200), None);
    }

    #[test]
    fn platform_ids_map_in_order() {
        assert_eq!(GamepadAxisId::from_platform(4), Some(GamepadAxisId::LeftTrigger));
        assert_eq!(GamepadButtonId::from_platform(0), Some(GamepadButtonId::A));
        assert_eq!(GamepadButtonId::from_platform(5), Some(GamepadButtonId::Guide));
        assert_eq!(GamepadButtonId::from_platform(9), Some(GamepadButtonId::Lb));
        assert_eq!(GamepadButtonId::from_platform(14), Some(GamepadButtonId::DpadRight));
    }

    #[test]
    fn deadzone_clears_small_values() {
        assert_eq!(apply_deadzone(0.05, 0.1), 0.0);
        assert_eq!(apply_deadzone(-0.5, 0.1), -0.5);
        assert_eq!(apply_deadzone(1.0, 0.0), 1.0);
    }
}
