//! Handlers and the propagation result they return

use std::fmt;
use std::sync::Arc;

use super::types::KeyEvent;

/// What happens to a key event after a handler has seen it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The event was handled; stop dispatching it
    Consumed,
    /// Pass this (possibly rewritten) event on to later consumers
    Continue(KeyEvent),
}

impl Propagation {
    /// Check if the event was consumed
    pub fn is_consumed(&self) -> bool {
        matches!(self, Propagation::Consumed)
    }

    /// The event to pass on, if any
    pub fn into_event(self) -> Option<KeyEvent> {
        match self {
            Propagation::Consumed => None,
            Propagation::Continue(event) => Some(event),
        }
    }
}

/// A callback bound to a chord.
///
/// Cheap to clone; the same handler can be bound to several chords.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn(KeyEvent) -> Propagation + Send + Sync>);

impl Handler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(KeyEvent) -> Propagation + Send + Sync + 'static,
    {
        Handler(Arc::new(f))
    }

    /// Invoke the handler
    #[inline]
    pub fn call(&self, event: KeyEvent) -> Propagation {
        (self.0)(event)
    }
}

impl<F> From<F> for Handler
where
    F: Fn(KeyEvent) -> Propagation + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Handler::new(f)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler")
            .field(&Arc::as_ptr(&self.0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_handler_consumes() {
        let handler = Handler::new(|_| Propagation::Consumed);
        let event = KeyEvent::rune('q', Modifiers::NONE);
        assert!(handler.call(event).is_consumed());
    }

    #[test]
    fn test_handler_rewrites_event() {
        let handler =
            Handler::new(|ev| Propagation::Continue(KeyEvent::new(KeyCode::Escape, ev.mods)));

        let out = handler.call(KeyEvent::rune('[', Modifiers::CTRL));
        assert_eq!(
            out.into_event(),
            Some(KeyEvent::new(KeyCode::Escape, Modifiers::CTRL))
        );
    }

    #[test]
    fn test_closure_into_handler() {
        let handler: Handler = (|ev: KeyEvent| Propagation::Continue(ev)).into();
        let event = KeyEvent::rune('z', Modifiers::ALT);
        assert_eq!(handler.call(event), Propagation::Continue(event));

        let lookup = |action: &str| -> Option<Handler> {
            (action == "quit").then(|| (|_: KeyEvent| Propagation::Consumed).into())
        };
        assert!(lookup("quit").unwrap().call(event).is_consumed());
        assert!(lookup("save").is_none());
    }
}
