//! inputcore: input-event normalization for game windows.
//!
//! Turns a platform's raw keyboard, pointer and gamepad notifications into a stable,
//! ordered stream of application events, tracking only the state needed to do so
//! (pointer capture mode and connected-gamepad count).
//!
//! Once per tick the host calls [`InputWindow::poll_events`] (or [`Dispatcher::pump`]
//! directly); every queued [`RawEvent`] is routed to its handler in arrival order and
//! the resulting [`InputEvent`]s are delivered synchronously to the registered
//! [`InputListener`]s.

pub mod backends;
pub mod config;
pub mod device;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod filtered_listener;
pub mod gamepad;
mod handlers;
pub mod keymap;
pub mod keys;
pub mod logger;
pub mod mapping;
pub mod metadata;
pub mod recorder;
pub mod state;
pub mod text;
pub mod window;

pub use backends::VirtualSource;
pub use config::InputConfig;
pub use device::{EventSource, GamepadOpener};
pub use dispatch::{Dispatcher, PumpReport};
pub use error::{InputError, Result};
pub use event::*;
pub use eventbus::*;
pub use filtered_listener::FilteredListener;
pub use gamepad::{GamepadAxisId, GamepadButtonId, GAMEPAD_INDEX};
pub use keys::{KeyAction, KeyCode, MouseButtonAction};
pub use logger::Logger;
pub use mapping::GamepadMapping;
pub use metadata::GamepadMeta;
pub use recorder::Recorder;
pub use state::DeviceState;
pub use window::{init_or_abort, InputWindow, WindowProvider};
