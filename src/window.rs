//! Window facade tying the window/context provider, the raw event source and the dispatcher
//! together.
//!
//! The provider is an external collaborator: it owns the OS window and graphics context and
//! is only driven through [`WindowProvider`]. Icon and clipboard requests are accepted and
//! ignored on this target.
//!
//! # Example
//! ```no_run
//! use inputcore::{init_or_abort, EventFilter, InputConfig, InputWindow, Logger, VirtualSource, WindowProvider};
//!
//! struct Headless;
//! impl WindowProvider for Headless {
//!     fn set_pointer_capture(&mut self, _captured: bool) {}
//!     fn window_size(&self) -> (i32, i32) { (1280, 720) }
//!     fn show(&mut self) {}
//!     fn close(&mut self) {}
//! }
//!
//! let mut window = init_or_abort(InputWindow::new(Headless, VirtualSource::new(), InputConfig::default()));
//! window.listeners().add_listener(Logger::new(), EventFilter::All);
//! loop {
//!     if window.poll_events().quit {
//!         break;
//!     }
//! }
//! ```

use crate::config::InputConfig;
use crate::device::EventSource;
use crate::dispatch::{Dispatcher, PumpReport};
use crate::error::Result;
use crate::eventbus::InputEventBus;
use crate::mapping::GamepadMapping;
use crate::state::DeviceState;
use std::path::Path;
use tracing::{debug, error, info};

/// Operations consumed from the window/context provider.
pub trait WindowProvider {
    /// Grab or release the pointer at the OS level.
    fn set_pointer_capture(&mut self, captured: bool);

    /// Current client size in platform units.
    fn window_size(&self) -> (i32, i32);

    fn show(&mut self);

    fn close(&mut self);

    fn set_fullscreen(&mut self, _fullscreen: bool) {}

    fn make_current(&mut self, _active: bool) {}

    fn swap_buffers(&mut self) {}

    fn set_swap_interval(&mut self, _interval: i32) {}
}

/// Window plus input pump.
pub struct InputWindow<P: WindowProvider, S: EventSource> {
    provider: P,
    source: S,
    dispatcher: Dispatcher,
    bus: InputEventBus,
}

impl<P: WindowProvider, S: EventSource> InputWindow<P, S> {
    /// Wire a provider and a started event source together.
    pub fn new(mut provider: P, source: S, config: InputConfig) -> Result<Self> {
        config.validate()?;
        if config.start_captured {
            provider.set_pointer_capture(true);
        }
        debug!(source = source.name(), "input window ready");
        Ok(Self {
            provider,
            source,
            dispatcher: Dispatcher::new(config),
            bus: InputEventBus::new(),
        })
    }

    /// Application listeners; every event emitted while pumping goes through this bus.
    pub fn listeners(&mut self) -> &mut InputEventBus {
        &mut self.bus
    }

    /// Pump all queued raw events once. Call every tick.
    pub fn poll_events(&mut self) -> PumpReport {
        self.dispatcher.pump(&mut self.source, &mut self.bus)
    }

    /// Disabled cursor means captured pointer: motion is reported as relative deltas.
    pub fn set_cursor_disabled(&mut self, disabled: bool) {
        self.dispatcher.set_captured(disabled);
        self.provider.set_pointer_capture(disabled);
    }

    /// Load extra controller layouts from a TOML mapping file. Returns how many entries
    /// were added.
    pub fn add_gamepad_mapping_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let added = self
            .dispatcher
            .add_gamepad_mapping(GamepadMapping::load(path)?);
        info!(added, path = %path.display(), "loaded gamepad mappings");
        Ok(added)
    }

    /// Same as [`add_gamepad_mapping_file`](Self::add_gamepad_mapping_file), from an
    /// in-memory document.
    pub fn add_gamepad_mapping(&mut self, content: &str) -> Result<usize> {
        let added = self
            .dispatcher
            .add_gamepad_mapping(GamepadMapping::from_toml_str(content)?);
        info!(added, "loaded gamepad mappings");
        Ok(added)
    }

    pub fn device_state(&self) -> &DeviceState {
        self.dispatcher.state()
    }

    pub fn is_input_shut_down(&self) -> bool {
        self.dispatcher.is_shut_down()
    }

    pub fn window_size(&self) -> (i32, i32) {
        self.provider.window_size()
    }

    pub fn show(&mut self) {
        self.provider.show();
    }

    pub fn close(&mut self) {
        self.provider.close();
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.provider.set_fullscreen(fullscreen);
    }

    pub fn make_current(&mut self, active: bool) {
        self.provider.make_current(active);
    }

    pub fn swap_buffers(&mut self) {
        self.provider.swap_buffers();
    }

    pub fn set_swap_interval(&mut self, interval: i32) {
        self.provider.set_swap_interval(interval);
    }

    /// No-op: borderless target, no window icon.
    pub fn set_icon(&mut self, _icon_path: &str) {}

    /// No-op: no desktop clipboard to exchange with.
    pub fn set_clipboard_text(&mut self, _text: &str) {}

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<P: WindowProvider, S: EventSource> Drop for InputWindow<P, S> {
    fn drop(&mut self) {
        if !self.dispatcher.is_shut_down() {
            self.source.shutdown();
        }
    }
}

/// Unwrap an initialization result, terminating the process on failure.
///
/// Without a working input subsystem the application cannot run, so the error is reported
/// and the process exits with status 1.
pub fn init_or_abort<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!(%err, "fatal initialization failure");
            eprintln!("Fatal Error: {err}");
            std::process::exit(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::VirtualSource;
    use crate::error::InputError;

    #[derive(Default)]
    struct FakeWindow {
        captured: bool,
        shown: bool,
    }

    impl WindowProvider for FakeWindow {
        fn set_pointer_capture(&mut self, captured: bool) {
            self.captured = captured;
        }

        fn window_size(&self) -> (i32, i32) {
            (640, 480)
        }

        fn show(&mut self) {
            self.shown = true;
        }

        fn close(&mut self) {
            self.shown = false;
        }
    }

    #[test]
    fn cursor_toggle_updates_tracker_and_provider() {
        let mut w =
            InputWindow::new(FakeWindow::default(), VirtualSource::new(), InputConfig::default())
                .unwrap();
        w.set_cursor_disabled(true);
        assert!(w.device_state().is_captured());
        assert!(w.provider().captured);
        w.set_cursor_disabled(false);
        assert!(!w.device_state().is_captured());
        assert!(!w.provider().captured);
    }

    #[test]
    fn noop_hooks_are_accepted() {
        let mut w =
            InputWindow::new(FakeWindow::default(), VirtualSource::new(), InputConfig::default())
                .unwrap();
        w.set_icon("icon.png");
        w.set_clipboard_text("copied");
        w.show();
        assert!(w.provider().shown);
        assert_eq!(w.window_size(), (640, 480));
    }

    #[test]
    fn invalid_config_fails_construction() {
        let cfg = InputConfig {
            axis_deadzone: 2.0,
            ..InputConfig::default()
        };
        let res = InputWindow::new(FakeWindow::default(), VirtualSource::new(), cfg);
        assert!(matches!(res, Err(InputError::Config(_))));
    }

    #[test]
    fn mapping_errors_leave_existing_layout_alone() {
        let mut w =
            InputWindow::new(FakeWindow::default(), VirtualSource::new(), InputConfig::default())
                .unwrap();
        assert_eq!(
            w.add_gamepad_mapping("[[buttons]]\nplatform = 2\nbutton = \"Guide\"\n")
                .unwrap(),
            1
        );
        assert!(matches!(
            w.add_gamepad_mapping_file("/nonexistent/pads.toml"),
            Err(InputError::Io(_))
        ));
        assert!(matches!(
            w.add_gamepad_mapping("buttons = 3"),
            Err(InputError::Toml(_))
        ));
        assert_eq!(w.dispatcher.gamepad_mapping().len(), 1);
    }

    #[test]
    fn start_captured_grabs_pointer() {
        let cfg = InputConfig {
            start_captured: true,
            ..InputConfig::default()
        };
        let w = InputWindow::new(FakeWindow::default(), VirtualSource::new(), cfg).unwrap();
        assert!(w.provider().captured);
        assert!(w.device_state().is_captured());
    }
}
