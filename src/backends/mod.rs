//! Raw event sources and gamepad openers.
//!
//! # Feature flags
//! - **`hid`**: enables [`hid::HidGamepads`], a `hidapi`-backed [`GamepadOpener`](crate::device::GamepadOpener).
//!
//! [`virtual_input::VirtualSource`] is always available; it is the queue used for replay,
//! demos and tests, and the place a host forwards its own platform events into.

#[cfg(feature = "hid")]
#[cfg_attr(docsrs, doc(cfg(feature = "hid")))]
pub mod hid;
pub mod virtual_input;

pub use virtual_input::VirtualSource;
