//! Platform seams consumed by the dispatcher.
//!
//! - [`EventSource`]: the platform's raw event queue plus input-subsystem lifetime.
//! - [`GamepadOpener`]: best-effort opening of a newly connected gamepad.
//!
//! Both must be non-blocking. `poll_event` returns `None` as soon as the queue is empty and
//! `open_gamepad` fails immediately instead of waiting on a device.

use crate::error::Result;
use crate::event::RawEvent;
use crate::metadata::GamepadMeta;

pub trait GamepadOpener {
    /// Open the gamepad the platform reported as `which`.
    fn open_gamepad(&mut self, which: i32) -> Result<GamepadMeta>;

    /// Release whatever was opened for `which`. Called on every removal, including ones for
    /// devices that never opened.
    fn close_gamepad(&mut self, _which: i32) {}
}

pub trait EventSource: GamepadOpener {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Next queued raw event, `None` when the queue is empty. Never blocks.
    fn poll_event(&mut self) -> Option<RawEvent>;

    /// Number of events queued right now, when the backend knows it.
    ///
    /// The dispatcher drains at most this many events per pump so events queued while
    /// handling land in the next pump. `None` drains until [`poll_event`](Self::poll_event)
    /// reports empty.
    fn pending(&self) -> Option<usize> {
        None
    }

    /// Orderly shutdown of the platform input subsystem. Called once, on quit.
    fn shutdown(&mut self);
}
