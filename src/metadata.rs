//! Gamepad metadata snapshot.
//!
//! [`GamepadMeta`] is what a successful [`GamepadOpener::open_gamepad`](crate::device::GamepadOpener::open_gamepad)
//! returns. It only feeds logging; applications never see it, since every gamepad is
//! reported as device index 0. Backends populate what they know; unknown fields stay `None`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamepadMeta {
    /// Platform index the device was opened from.
    pub which: i32,

    /// Human-readable product name from the driver/firmware.
    pub name: Option<String>,

    /// USB Vendor ID (VID), if known.
    pub vid: Option<u16>,

    /// USB Product ID (PID), if known.
    pub pid: Option<u16>,

    /// OS/topological path to the device. Opaque, diagnostics only.
    pub path: Option<String>,
}

impl GamepadMeta {
    pub fn named(which: i32, name: impl Into<String>) -> Self {
        Self {
            which,
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl fmt::Display for GamepadMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or("Unknown"))?;
        if let (Some(vid), Some(pid)) = (self.vid, self.pid) {
            write!(f, " ({vid:04x}:{pid:04x})")?;
        }
        Ok(())
    }
}
