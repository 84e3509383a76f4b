//! Per-category raw event handlers.
//!
//! Each handler interprets one raw event against the [`DeviceState`] and emits zero, one or
//! (keyboard only) two application events. Handlers never fail: unmappable ids are dropped,
//! device-open failures and count anomalies are logged and the event is considered handled.
//!
//! [`route`] is the category → handler table the dispatcher calls into.

use crate::config::InputConfig;
use crate::device::GamepadOpener;
use crate::event::{
    DeviceChange, GamepadAxisEvent, GamepadButtonEvent, GamepadDeviceEvent, InputEvent,
    KeyboardEvent, MouseButtonEvent, MouseMotionEvent, MouseWheelEvent, RawEvent, RAW_PRESSED,
    RAW_RELEASED,
};
use crate::eventbus::InputListener;
use crate::gamepad::{apply_deadzone, normalize_axis, GAMEPAD_INDEX};
use crate::keymap;
use crate::keys::{KeyAction, MouseButtonAction};
use crate::mapping::GamepadMapping;
use crate::state::DeviceState;
use crate::text;
use tracing::{debug, info, trace, warn};

/// Everything a handler may touch while handling one event.
pub(crate) struct Context<'a> {
    pub state: &'a mut DeviceState,
    pub config: &'a InputConfig,
    pub mapping: &'a GamepadMapping,
    pub opener: &'a mut dyn GamepadOpener,
    pub out: &'a mut dyn InputListener,
}

impl Context<'_> {
    #[inline]
    fn emit(&mut self, event: InputEvent) {
        self.out.on_input(&event);
    }
}

/// What became of a routed raw event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Handled,
    Dropped,
    Quit,
}

pub(crate) fn route(cx: &mut Context<'_>, raw: RawEvent) -> Outcome {
    match raw {
        RawEvent::GamepadDevice(ev) => gamepad_device(cx, ev),
        RawEvent::GamepadAxis(ev) => gamepad_axis(cx, ev),
        RawEvent::GamepadButton(ev) => gamepad_button(cx, ev),
        RawEvent::MouseMotion(ev) => mouse_motion(cx, ev),
        RawEvent::MouseWheel(ev) => mouse_wheel(cx, ev),
        RawEvent::MouseButton(ev) => mouse_button(cx, ev),
        RawEvent::Keyboard(ev) => keyboard(cx, ev),
        RawEvent::Quit => Outcome::Quit,
        RawEvent::Other { kind } => {
            trace!(kind, "dropping unhandled raw event");
            Outcome::Dropped
        }
    }
}

/// Hot-plug. The application only hears about the first connection and the last removal;
/// all devices are reported as index 0.
fn gamepad_device(cx: &mut Context<'_>, ev: GamepadDeviceEvent) -> Outcome {
    match ev.change {
        DeviceChange::Added => {
            match cx.opener.open_gamepad(ev.which) {
                Ok(meta) => info!(which = ev.which, "gamepad opened: {meta}"),
                Err(err) => warn!(which = ev.which, %err, "gamepad connected but not opened"),
            }
            let first = cx.state.on_gamepad_connected();
            debug!(count = cx.state.gamepad_count(), "gamepad connected");
            if first {
                cx.emit(InputEvent::GamepadAvailability {
                    device: GAMEPAD_INDEX,
                    available: true,
                });
            }
        }
        DeviceChange::Removed => {
            cx.opener.close_gamepad(ev.which);
            match cx.state.on_gamepad_disconnected() {
                Ok(last) => {
                    info!(which = ev.which, count = cx.state.gamepad_count(), "gamepad removed");
                    if last {
                        cx.emit(InputEvent::GamepadAvailability {
                            device: GAMEPAD_INDEX,
                            available: false,
                        });
                    }
                }
                Err(err) => warn!(which = ev.which, %err, "ignoring gamepad removal"),
            }
        }
    }
    Outcome::Handled
}

fn gamepad_axis(cx: &mut Context<'_>, ev: GamepadAxisEvent) -> Outcome {
    let Some(axis) = cx.mapping.axis(ev.axis) else {
        trace!(axis = ev.axis, "unsupported gamepad axis");
        return Outcome::Dropped;
    };
    let value = apply_deadzone(normalize_axis(ev.value), cx.config.axis_deadzone);
    cx.emit(InputEvent::GamepadAxis {
        device: GAMEPAD_INDEX,
        axis,
        value,
    });
    Outcome::Handled
}

fn gamepad_button(cx: &mut Context<'_>, ev: GamepadButtonEvent) -> Outcome {
    let Some(button) = cx.mapping.button(ev.button) else {
        trace!(button = ev.button, "unsupported gamepad button");
        return Outcome::Dropped;
    };
    cx.emit(InputEvent::GamepadButton {
        device: GAMEPAD_INDEX,
        button,
        pressed: ev.state == RAW_PRESSED,
    });
    Outcome::Handled
}

fn mouse_motion(cx: &mut Context<'_>, ev: MouseMotionEvent) -> Outcome {
    let event = if cx.state.is_captured() {
        InputEvent::MouseRelative {
            dx: ev.xrel,
            dy: ev.yrel,
        }
    } else {
        InputEvent::MousePosition { x: ev.x, y: ev.y }
    };
    cx.emit(event);
    Outcome::Handled
}

/// Horizontal wins over vertical; the reported direction is the sign only.
fn scroll_direction(x: i32, y: i32) -> Option<(f32, f32)> {
    if x != 0 {
        Some((x.signum() as f32, 0.0))
    } else if y != 0 {
        Some((0.0, y.signum() as f32))
    } else {
        None
    }
}

fn mouse_wheel(cx: &mut Context<'_>, ev: MouseWheelEvent) -> Outcome {
    let Some((dx, dy)) = scroll_direction(ev.x, ev.y) else {
        return Outcome::Dropped;
    };
    cx.emit(InputEvent::MouseScroll {
        x: ev.x,
        y: ev.y,
        dx,
        dy,
    });
    Outcome::Handled
}

fn mouse_button(cx: &mut Context<'_>, ev: MouseButtonEvent) -> Outcome {
    let action = if ev.state == RAW_PRESSED {
        MouseButtonAction::Press
    } else {
        MouseButtonAction::Release
    };
    cx.emit(InputEvent::MouseButton {
        x: ev.x,
        y: ev.y,
        button: ev.button,
        action,
    });
    Outcome::Handled
}

/// Text (if any) goes out before the key event, and only for a non-repeat press.
fn keyboard(cx: &mut Context<'_>, ev: KeyboardEvent) -> Outcome {
    let key = keymap::lookup(ev.scancode);

    let action = if ev.repeat {
        KeyAction::Repeat
    } else {
        match ev.state {
            RAW_PRESSED => KeyAction::Press,
            RAW_RELEASED => KeyAction::Release,
            other => {
                trace!(state = other, scancode = ev.scancode, "unknown key state");
                return Outcome::Dropped;
            }
        }
    };

    if action == KeyAction::Press && cx.config.text_input {
        let text = text::synthesize(key);
        if !text.is_empty() {
            cx.emit(InputEvent::Text { text });
        }
    }

    cx.emit(InputEvent::Key { key, action });
    Outcome::Handled
}
