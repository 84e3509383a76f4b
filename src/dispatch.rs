//! Per-tick event pump.
//!
//! [`Dispatcher::pump`] drains what the [`EventSource`] has queued, routes each raw event to
//! its handler in arrival order, and returns a [`PumpReport`]. It never blocks: the cost of a
//! pump is linear in the number of queued events.
//!
//! A quit event shuts the input subsystem down and stops draining. Every later pump is a
//! no-op; the process itself keeps running.
//!
//! The dispatcher has no internal locking. Hosts that pump from several threads must
//! serialize the calls themselves.

use crate::config::InputConfig;
use crate::device::EventSource;
use crate::event::RawEvent;
use crate::eventbus::InputListener;
use crate::handlers::{self, Context, Outcome};
use crate::mapping::GamepadMapping;
use crate::state::DeviceState;
use tracing::{info, trace};

/// Summary of one [`Dispatcher::pump`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PumpReport {
    /// Raw events that reached a handler and were acted on.
    pub dispatched: usize,
    /// Raw events dropped (unknown category, unmappable id, no-op).
    pub dropped: usize,
    /// A quit event was seen and the input subsystem was shut down.
    pub quit: bool,
}

/// Owns the [`DeviceState`] and routes raw events to handlers.
#[derive(Debug)]
pub struct Dispatcher {
    state: DeviceState,
    config: InputConfig,
    mapping: GamepadMapping,
    shut_down: bool,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl Dispatcher {
    pub fn new(config: InputConfig) -> Self {
        let mut state = DeviceState::new();
        state.set_captured(config.start_captured);
        Self {
            state,
            config,
            mapping: GamepadMapping::new(),
            shut_down: false,
        }
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn gamepad_mapping(&self) -> &GamepadMapping {
        &self.mapping
    }

    /// Add axis/button overrides on top of those already loaded. Returns the number of
    /// entries added.
    pub fn add_gamepad_mapping(&mut self, mapping: GamepadMapping) -> usize {
        self.mapping.extend(mapping)
    }

    /// Switch pointer reporting between relative (`true`) and absolute.
    ///
    /// Takes effect from the next motion event; nothing already emitted is revisited.
    pub fn set_captured(&mut self, captured: bool) {
        self.state.set_captured(captured);
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Drain the source once.
    pub fn pump<S: EventSource>(
        &mut self,
        source: &mut S,
        out: &mut dyn InputListener,
    ) -> PumpReport {
        let mut report = PumpReport::default();
        if self.shut_down {
            return report;
        }

        let budget = source.pending().unwrap_or(usize::MAX);
        for _ in 0..budget {
            let Some(raw) = source.poll_event() else {
                break;
            };
            match self.dispatch(raw, source, out) {
                Outcome::Handled => report.dispatched += 1,
                Outcome::Dropped => report.dropped += 1,
                Outcome::Quit => {
                    info!(source = source.name(), "quit received, shutting down input");
                    source.shutdown();
                    self.shut_down = true;
                    report.quit = true;
                    break;
                }
            }
        }
        report
    }

    fn dispatch<S: EventSource>(
        &mut self,
        raw: RawEvent,
        source: &mut S,
        out: &mut dyn InputListener,
    ) -> Outcome {
        trace!(?raw, "dispatch");
        let mut cx = Context {
            state: &mut self.state,
            config: &self.config,
            mapping: &self.mapping,
            opener: source,
            out,
        };
        handlers::route(&mut cx, raw)
    }
}
