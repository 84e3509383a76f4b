use crate::device::{EventSource, GamepadOpener};
use crate::error::{InputError, Result};
use crate::event::RawEvent;
use crate::metadata::GamepadMeta;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// In-memory raw event queue.
///
/// Feed it [`RawEvent`]s and pump it like a platform queue. Gamepad opens succeed with a
/// synthetic name unless the index was marked with [`fail_open`](Self::fail_open), or are
/// delegated to an attached [`GamepadOpener`] (e.g. the HID backend).
pub struct VirtualSource {
    name: String,
    events: VecDeque<RawEvent>,
    failing: HashSet<i32>,
    open: BTreeSet<i32>,
    opener: Option<Box<dyn GamepadOpener>>,
    shut_down: bool,
}

impl Default for VirtualSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualSource {
    pub fn new() -> Self {
        Self::named("virtual:0")
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            events: VecDeque::new(),
            failing: HashSet::new(),
            open: BTreeSet::new(),
            opener: None,
            shut_down: false,
        }
    }

    /// Delegate gamepad opens to a real backend.
    pub fn with_opener(mut self, opener: impl GamepadOpener + 'static) -> Self {
        self.opener = Some(Box::new(opener));
        self
    }

    /// Inject a raw event at the back of the queue.
    pub fn feed(&mut self, event: RawEvent) {
        self.events.push_back(event);
    }

    pub fn feed_all(&mut self, events: impl IntoIterator<Item = RawEvent>) {
        self.events.extend(events);
    }

    /// Make opening gamepad `which` fail.
    pub fn fail_open(&mut self, which: i32) {
        self.failing.insert(which);
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Gamepad indices currently open, ascending.
    pub fn open_gamepads(&self) -> Vec<i32> {
        self.open.iter().copied().collect()
    }
}

impl GamepadOpener for VirtualSource {
    fn open_gamepad(&mut self, which: i32) -> Result<GamepadMeta> {
        if self.failing.contains(&which) {
            return Err(InputError::GamepadOpen {
                which,
                reason: "no such virtual gamepad".to_string(),
            });
        }
        let meta = match self.opener.as_mut() {
            Some(opener) => opener.open_gamepad(which)?,
            None => GamepadMeta::named(which, format!("Virtual Gamepad {which}")),
        };
        self.open.insert(which);
        Ok(meta)
    }

    fn close_gamepad(&mut self, which: i32) {
        if self.open.remove(&which) {
            if let Some(opener) = self.opener.as_mut() {
                opener.close_gamepad(which);
            }
        }
    }
}

impl EventSource for VirtualSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn poll_event(&mut self) -> Option<RawEvent> {
        self.events.pop_front()
    }

    fn pending(&self) -> Option<usize> {
        Some(self.events.len())
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }
}
