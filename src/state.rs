//! Mutable device state consulted while interpreting raw events.
//!
//! [`DeviceState`] is owned by the [`Dispatcher`](crate::dispatch::Dispatcher) and only changed
//! by its handlers (and the capture toggle on the window facade). It lives as long as the
//! window/input object and starts with no gamepads and the pointer released.

use crate::error::InputError;

/// Pointer capture flag and connected-gamepad count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceState {
    captured: bool,
    gamepads: u32,
}

impl DeviceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a gamepad connection.
    ///
    /// Returns `true` only when this is the first connected device (the 0 → 1 edge).
    pub fn on_gamepad_connected(&mut self) -> bool {
        self.gamepads = self.gamepads.saturating_add(1);
        self.gamepads == 1
    }

    /// Record a gamepad removal.
    ///
    /// Returns `Ok(true)` on the 1 → 0 edge, `Ok(false)` while other devices remain, and
    /// [`InputError::GamepadUnderflow`] without touching the count when none were connected.
    pub fn on_gamepad_disconnected(&mut self) -> Result<bool, InputError> {
        if self.gamepads == 0 {
            return Err(InputError::GamepadUnderflow);
        }
        self.gamepads -= 1;
        Ok(self.gamepads == 0)
    }

    #[inline]
    pub fn gamepad_count(&self) -> u32 {
        self.gamepads
    }

    /// Switch between relative (captured) and absolute pointer reporting.
    #[inline]
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_released() {
        let s = DeviceState::new();
        assert_eq!(s.gamepad_count(), 0);
        assert!(!s.is_captured());
    }

    #[test]
    fn only_edges_are_reported() {
        let mut s = DeviceState::new();
        assert!(s.on_gamepad_connected());
        assert!(!s.on_gamepad_connected());
        assert!(!s.on_gamepad_connected());
        assert_eq!(s.gamepad_count(), 3);
        assert!(!s.on_gamepad_disconnected().unwrap());
        assert!(!s.on_gamepad_disconnected().unwrap());
        assert!(s.on_gamepad_disconnected().unwrap());
        assert_eq!(s.gamepad_count(), 0);
    }

    #[test]
    fn disconnect_at_zero_is_an_anomaly() {
        let mut s = DeviceState::new();
        assert!(matches!(
            s.on_gamepad_disconnected(),
            Err(InputError::GamepadUnderflow)
        ));
        assert_eq!(s.gamepad_count(), 0);
        // Next connection is still the first one.
        assert!(s.on_gamepad_connected());
    }

    #[test]
    fn capture_toggles() {
        let mut s = DeviceState::new();
        s.set_captured(true);
        assert!(s.is_captured());
        s.set_captured(false);
        assert!(!s.is_captured());
    }
}
