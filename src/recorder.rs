//! In-order capture of delivered events.
//!
//! [`Recorder`] is a cloneable handle over a shared buffer: register one clone as a listener
//! and read the captured sequence through another. Used by replay tooling and tests.

use crate::event::InputEvent;
use crate::eventbus::InputListener;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone, Debug, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<InputEvent>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    // A listener that panicked mid-push leaves a usable Vec behind.
    fn lock(&self) -> MutexGuard<'_, Vec<InputEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of everything captured so far, in delivery order.
    pub fn events(&self) -> Vec<InputEvent> {
        self.lock().clone()
    }

    /// Take the captured events, leaving the buffer empty.
    pub fn drain(&self) -> Vec<InputEvent> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl InputListener for Recorder {
    fn on_input(&mut self, event: &InputEvent) {
        self.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let rec = Recorder::new();
        let mut writer = rec.clone();
        writer.on_input(&InputEvent::MouseRelative { dx: 1, dy: 2 });
        writer.on_input(&InputEvent::MouseRelative { dx: 3, dy: 4 });

        assert_eq!(rec.len(), 2);
        let drained = rec.drain();
        assert_eq!(drained[1], InputEvent::MouseRelative { dx: 3, dy: 4 });
        assert!(writer.is_empty());
    }
}
