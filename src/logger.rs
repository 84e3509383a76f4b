use crate::event::InputEvent;
use crate::eventbus::InputListener;

/// A simple listener that logs every application event at `debug` level as JSON.
#[derive(Debug, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }
}

impl InputListener for Logger {
    fn on_input(&mut self, event: &InputEvent) {
        match serde_json::to_string(event) {
            Ok(json) => tracing::debug!(target: "inputcore::events", "{json}"),
            Err(err) => tracing::debug!(target: "inputcore::events", ?event, %err, "unserializable event"),
        }
    }
}
