use crate::event::InputEvent;
use crate::eventbus::InputListener;

/// Forwards to `inner` only the events `predicate` accepts.
///
/// Unlike [`EventFilter`](crate::eventbus::EventFilter), the predicate may capture state,
/// e.g. a device index or a threshold chosen at runtime.
pub struct FilteredListener<P, L> {
    predicate: P,
    inner: L,
}

impl<P, L> FilteredListener<P, L>
where
    P: Fn(&InputEvent) -> bool + Send,
    L: InputListener,
{
    pub fn new(predicate: P, inner: L) -> Self {
        Self { predicate, inner }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<P, L> InputListener for FilteredListener<P, L>
where
    P: Fn(&InputEvent) -> bool + Send,
    L: InputListener,
{
    fn on_input(&mut self, event: &InputEvent) {
        if (self.predicate)(event) {
            self.inner.on_input(event);
        }
    }
}
