//! Replays a scripted input session through the pump and prints what the application sees.
//!
//! `RUST_LOG=debug cargo run --example virtual_pump` also shows the handler logs.

use inputcore::keymap::scancode;
use inputcore::{
    init_or_abort, EventFilter, GamepadAxisEvent, InputConfig, InputEvent, InputWindow, Logger,
    RawEvent, VirtualSource, WindowProvider,
};
use tracing_subscriber::EnvFilter;

struct Headless;

impl WindowProvider for Headless {
    fn set_pointer_capture(&mut self, captured: bool) {
        println!("[window] pointer capture = {captured}");
    }

    fn window_size(&self) -> (i32, i32) {
        (1280, 720)
    }

    fn show(&mut self) {}

    fn close(&mut self) {}
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut source = VirtualSource::named("virtual:demo");
    source.fail_open(1);

    let mut window = init_or_abort(InputWindow::new(Headless, source, InputConfig::default()));
    window
        .listeners()
        .add_listener(|e: &InputEvent| println!("{e:?}"), EventFilter::All);
    window.listeners().add_listener(Logger::new(), EventFilter::All);

    window.source_mut().feed_all([
        RawEvent::gamepad_added(0),
        RawEvent::gamepad_added(1),
        RawEvent::GamepadAxis(GamepadAxisEvent {
            which: 0,
            axis: 0,
            value: -16384,
        }),
        RawEvent::key_down(scancode::H),
        RawEvent::key_repeat(scancode::H),
        RawEvent::key_up(scancode::H),
        RawEvent::mouse_motion(640, 360, 0, 0),
        RawEvent::mouse_wheel(0, -2),
    ]);
    let report = window.poll_events();
    println!("tick 1: {report:?}");

    window.set_cursor_disabled(true);
    window.source_mut().feed_all([
        RawEvent::mouse_motion(650, 362, 10, 2),
        RawEvent::gamepad_removed(1),
        RawEvent::gamepad_removed(0),
        RawEvent::Quit,
    ]);
    let report = window.poll_events();
    println!("tick 2: {report:?}");
}
