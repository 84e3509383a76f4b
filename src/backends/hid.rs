//! HID gamepad opener (feature `hid`).
//!
//! Resolves a platform gamepad index to the n-th HID entry that looks like a game controller
//! (Generic Desktop page, Joystick or Gamepad usage) and opens it in non-blocking mode. One
//! handle is kept per index: re-opening an index replaces its handle and a removal drops it.
//! Reports are not read here; event data arrives through the platform
//! [`EventSource`](crate::device::EventSource).

use crate::device::GamepadOpener;
use crate::error::{InputError, Result};
use crate::metadata::GamepadMeta;
use hidapi::{DeviceInfo, HidApi, HidDevice};
use std::collections::HashMap;
use tracing::{debug, warn};

const USAGE_PAGE_GENERIC_DESKTOP: u16 = 0x01;
const USAGE_JOYSTICK: u16 = 0x04;
const USAGE_GAMEPAD: u16 = 0x05;

fn is_gamepad(info: &DeviceInfo) -> bool {
    info.usage_page() == USAGE_PAGE_GENERIC_DESKTOP
        && matches!(info.usage(), USAGE_JOYSTICK | USAGE_GAMEPAD)
}

pub struct HidGamepads {
    api: HidApi,
    open: HashMap<i32, HidDevice>,
}

impl HidGamepads {
    /// Start the HID layer. Failure here is an initialization failure.
    pub fn new() -> Result<Self> {
        let api = HidApi::new().map_err(|e| InputError::Init(format!("hidapi: {e}")))?;
        Ok(Self {
            api,
            open: HashMap::new(),
        })
    }

    /// Number of handles currently held.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

impl GamepadOpener for HidGamepads {
    fn open_gamepad(&mut self, which: i32) -> Result<GamepadMeta> {
        let open_err = |reason: String| InputError::GamepadOpen { which, reason };

        if let Err(e) = self.api.refresh_devices() {
            debug!(%e, "hid refresh failed, using cached device list");
        }
        let index = usize::try_from(which).map_err(|_| open_err("negative index".into()))?;

        let (device, meta) = {
            let info = self
                .api
                .device_list()
                .filter(|info| is_gamepad(info))
                .nth(index)
                .ok_or_else(|| open_err("no matching HID gamepad".into()))?;
            let device = info
                .open_device(&self.api)
                .map_err(|e| open_err(e.to_string()))?;
            // Host-driven polling: never let a read block the pump.
            if let Err(e) = device.set_blocking_mode(false) {
                warn!(which, %e, "couldn't make gamepad handle non-blocking");
            }
            let meta = GamepadMeta {
                which,
                name: info.product_string().map(str::to_string),
                vid: Some(info.vendor_id()),
                pid: Some(info.product_id()),
                path: Some(info.path().to_string_lossy().into_owned()),
            };
            (device, meta)
        };

        if self.open.insert(which, device).is_some() {
            debug!(which, "replaced existing gamepad handle");
        }
        Ok(meta)
    }

    fn close_gamepad(&mut self, which: i32) {
        if self.open.remove(&which).is_some() {
            debug!(which, "gamepad handle closed");
        }
    }
}
