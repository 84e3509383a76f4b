use inputcore::keymap::scancode;
use inputcore::{
    EventFilter, GamepadAxisEvent, GamepadButtonEvent, GamepadButtonId, InputConfig, InputError,
    InputEvent, InputWindow, KeyAction, KeyCode, RawEvent, Recorder, VirtualSource,
    WindowProvider, RAW_PRESSED,
};

#[derive(Default)]
struct Headless {
    captured: bool,
}

impl WindowProvider for Headless {
    fn set_pointer_capture(&mut self, captured: bool) {
        self.captured = captured;
    }

    fn window_size(&self) -> (i32, i32) {
        (800, 600)
    }

    fn show(&mut self) {}

    fn close(&mut self) {}
}

fn window() -> (InputWindow<Headless, VirtualSource>, Recorder) {
    let mut w = InputWindow::new(
        Headless::default(),
        VirtualSource::new(),
        InputConfig::default(),
    )
    .expect("window");
    let rec = Recorder::new();
    w.listeners().add_listener(rec.clone(), EventFilter::All);
    (w, rec)
}

fn availability(events: &[InputEvent]) -> Vec<bool> {
    events
        .iter()
        .filter_map(|e| match e {
            InputEvent::GamepadAvailability { available, .. } => Some(*available),
            _ => None,
        })
        .collect()
}

#[test]
fn two_pads_produce_exactly_two_availability_events() {
    let (mut w, rec) = window();
    w.source_mut().feed_all([
        RawEvent::gamepad_added(0),
        RawEvent::gamepad_added(1),
        RawEvent::gamepad_removed(0),
        RawEvent::gamepad_removed(1),
    ]);
    let report = w.poll_events();

    assert_eq!(report.dispatched, 4);
    assert_eq!(availability(&rec.events()), vec![true, false]);
    assert_eq!(w.device_state().gamepad_count(), 0);
}

#[test]
fn extra_removal_is_contained_and_count_stays_zero() {
    let (mut w, rec) = window();
    w.source_mut().fail_open(0);
    w.source_mut().feed_all([
        RawEvent::gamepad_added(0),
        RawEvent::gamepad_removed(0),
        RawEvent::gamepad_removed(0),
        RawEvent::key_down(scancode::SPACE),
    ]);
    w.poll_events();

    let events = rec.events();
    assert_eq!(availability(&events), vec![true, false]);
    assert_eq!(w.device_state().gamepad_count(), 0);
    // The pump kept going after the anomaly.
    assert_eq!(
        events.last(),
        Some(&InputEvent::Key {
            key: KeyCode::Space,
            action: KeyAction::Press
        })
    );
}

#[test]
fn capture_toggle_switches_motion_form_for_later_events() {
    let (mut w, rec) = window();
    w.source_mut().feed(RawEvent::mouse_motion(100, 50, 3, -1));
    w.poll_events();

    w.set_cursor_disabled(true);
    assert!(w.provider().captured);
    w.source_mut().feed(RawEvent::mouse_motion(103, 49, 3, -1));
    w.poll_events();

    assert_eq!(
        rec.events(),
        vec![
            InputEvent::MousePosition { x: 100, y: 50 },
            InputEvent::MouseRelative { dx: 3, dy: -1 },
        ]
    );
}

#[test]
fn typing_produces_text_before_keys_and_no_text_on_repeat() {
    let (mut w, rec) = window();
    w.source_mut().feed_all([
        RawEvent::key_down(scancode::H),
        RawEvent::key_repeat(scancode::H),
        RawEvent::key_up(scancode::H),
        RawEvent::key_down(scancode::NUM_1),
    ]);
    w.poll_events();

    assert_eq!(
        rec.events(),
        vec![
            InputEvent::Text { text: "H".into() },
            InputEvent::Key {
                key: KeyCode::H,
                action: KeyAction::Press
            },
            InputEvent::Key {
                key: KeyCode::H,
                action: KeyAction::Repeat
            },
            InputEvent::Key {
                key: KeyCode::H,
                action: KeyAction::Release
            },
            InputEvent::Text { text: "1".into() },
            InputEvent::Key {
                key: KeyCode::Num1,
                action: KeyAction::Press
            },
        ]
    );
}

#[test]
fn scroll_and_axis_normalization() {
    let (mut w, rec) = window();
    w.source_mut().feed_all([
        RawEvent::mouse_wheel(-3, 0),
        RawEvent::mouse_wheel(0, 5),
        RawEvent::mouse_wheel(0, 0),
        RawEvent::GamepadAxis(GamepadAxisEvent {
            which: 4,
            axis: 0,
            value: i16::MAX,
        }),
    ]);
    let report = w.poll_events();

    assert_eq!(report.dispatched, 3);
    assert_eq!(report.dropped, 1);
    let events = rec.events();
    assert_eq!(
        events[0],
        InputEvent::MouseScroll {
            x: -3,
            y: 0,
            dx: -1.0,
            dy: 0.0
        }
    );
    assert_eq!(
        events[1],
        InputEvent::MouseScroll {
            x: 0,
            y: 5,
            dx: 0.0,
            dy: 1.0
        }
    );
    assert!(matches!(
        events[2],
        InputEvent::GamepadAxis { device: 0, value, .. } if value == 1.0
    ));
}

#[test]
fn quit_shuts_input_down_but_window_stays_usable() {
    let (mut w, rec) = window();
    w.source_mut().feed_all([
        RawEvent::key_down(scancode::ESCAPE),
        RawEvent::Quit,
        RawEvent::key_down(scancode::A),
    ]);
    let report = w.poll_events();

    assert!(report.quit);
    assert!(w.is_input_shut_down());
    assert!(w.source_mut().is_shut_down());
    assert_eq!(rec.len(), 1);

    w.source_mut().feed(RawEvent::key_down(scancode::B));
    assert_eq!(w.poll_events().dispatched, 0);
    assert_eq!(w.window_size(), (800, 600));
}

#[test]
fn each_pump_only_sees_newly_queued_events() {
    let (mut w, rec) = window();
    w.source_mut().feed(RawEvent::key_down(scancode::A));
    assert_eq!(w.poll_events().dispatched, 1);
    assert_eq!(w.poll_events().dispatched, 0);
    assert_eq!(rec.len(), 2);
}

#[test]
fn config_loaded_from_toml_disables_text() {
    let cfg = InputConfig::from_toml_str("text_input = false").unwrap();
    let mut w = InputWindow::new(Headless::default(), VirtualSource::new(), cfg).unwrap();
    let rec = Recorder::new();
    w.listeners().add_listener(rec.clone(), EventFilter::KeyboardOnly);
    w.source_mut().feed_all([
        RawEvent::key_down(scancode::A),
        RawEvent::mouse_motion(1, 1, 0, 0),
    ]);
    w.poll_events();

    assert_eq!(
        rec.events(),
        vec![InputEvent::Key {
            key: KeyCode::A,
            action: KeyAction::Press
        }]
    );
}

#[test]
fn hot_plug_cycles_keep_one_handle_per_pad() {
    let (mut w, rec) = window();
    w.source_mut().feed_all([
        RawEvent::gamepad_added(0),
        RawEvent::gamepad_removed(0),
        RawEvent::gamepad_added(0),
        RawEvent::gamepad_added(0),
    ]);
    w.poll_events();
    assert_eq!(w.source_mut().open_gamepads(), vec![0]);

    w.source_mut().feed(RawEvent::gamepad_removed(0));
    w.poll_events();
    assert_eq!(w.source_mut().open_gamepads(), Vec::<i32>::new());
    assert_eq!(availability(&rec.events()), vec![true, false, true]);
}

#[test]
fn mapping_file_remaps_buttons() {
    let path = std::env::temp_dir().join(format!("inputcore-pads-{}.toml", std::process::id()));
    std::fs::write(&path, "[[buttons]]\nplatform = 3\nbutton = \"Start\"\n").unwrap();

    let (mut w, rec) = window();
    let added = w.add_gamepad_mapping_file(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(added.unwrap(), 1);

    w.source_mut().feed(RawEvent::GamepadButton(GamepadButtonEvent {
        which: 0,
        button: 3,
        state: RAW_PRESSED,
    }));
    w.poll_events();
    assert_eq!(
        rec.events(),
        vec![InputEvent::GamepadButton {
            device: 0,
            button: GamepadButtonId::Start,
            pressed: true
        }]
    );
}

#[test]
fn malformed_mapping_file_is_a_toml_error() {
    let path = std::env::temp_dir().join(format!("inputcore-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "[[buttons]]\nplatform = \"three\"\n").unwrap();

    let (mut w, _rec) = window();
    let res = w.add_gamepad_mapping_file(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(res, Err(InputError::Toml(_))));
}
