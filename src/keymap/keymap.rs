//! Keymap struct for storing bindings and dispatching key events

use std::collections::HashMap;

use parking_lot::RwLock;

use super::binding::{Handler, Propagation};
use super::chord::decode;
use super::config::ActionBinding;
use super::crossterm_adapter::HostKeyEvent;
use super::error::ChordError;
use super::types::{Chord, KeyCode, KeyEvent, Modifiers};

/// The keymap stores chord bindings and dispatches key events to them.
///
/// Safe to share between threads (`Arc<Keymap>`): any number of captures
/// run together, registrations are exclusive. Handlers are invoked after the
/// lock is released, so a handler may register further bindings.
#[derive(Debug, Default)]
pub struct Keymap {
    bindings: RwLock<HashMap<Chord, Handler>>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handler to a chord, replacing any previous binding
    pub fn bind(&self, chord: Chord, handler: Handler) {
        tracing::debug!(%chord, "binding chord");
        self.bindings.write().insert(chord, handler);
    }

    /// Bind a handler to a named key
    pub fn set_key<F>(&self, mods: Modifiers, key: KeyCode, handler: F)
    where
        F: Fn(KeyEvent) -> Propagation + Send + Sync + 'static,
    {
        self.bind(Chord::new(key, mods), Handler::new(handler));
    }

    /// Bind a handler to a literal character
    pub fn set_rune<F>(&self, mods: Modifiers, ch: char, handler: F)
    where
        F: Fn(KeyEvent) -> Propagation + Send + Sync + 'static,
    {
        self.bind(Chord::rune(ch, mods), Handler::new(handler));
    }

    /// Bind a handler to a chord given as text, e.g. `"Alt+s"`
    ///
    /// Nothing is bound if the text does not decode.
    pub fn set<F>(&self, text: &str, handler: F) -> Result<(), ChordError>
    where
        F: Fn(KeyEvent) -> Propagation + Send + Sync + 'static,
    {
        let chord = decode(text)?;
        self.bind(chord, Handler::new(handler));
        Ok(())
    }

    /// Dispatch a key event.
    ///
    /// Returns `Continue(event)` unchanged when nothing is bound to the
    /// event's chord. Otherwise calls the bound handler once and returns
    /// what it returned.
    pub fn capture(&self, event: KeyEvent) -> Propagation {
        let chord = event.chord();
        let handler = self.bindings.read().get(&chord).cloned();

        match handler {
            Some(handler) => {
                tracing::trace!(%chord, "dispatching to handler");
                handler.call(event)
            }
            None => {
                tracing::trace!(%chord, "no binding");
                Propagation::Continue(event)
            }
        }
    }

    /// Dispatch a host terminal event.
    ///
    /// Returns `None` if the event has no chord form (key releases, media
    /// keys and the like); the host should treat it as unhandled.
    pub fn capture_host<E: HostKeyEvent>(&self, event: &E) -> Option<Propagation> {
        event.to_key_event().map(|ev| self.capture(ev))
    }

    /// Bind named actions from a keymap file.
    ///
    /// `lookup` resolves an action name to its handler. Returns the action
    /// names that did not resolve; their bindings are skipped.
    pub fn apply_bindings<F>(&self, bindings: &[ActionBinding], lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<Handler>,
    {
        let mut unknown = Vec::new();
        for binding in bindings {
            match lookup(&binding.action) {
                Some(handler) => self.bind(binding.chord, handler),
                None => {
                    tracing::warn!(
                        chord = %binding.chord,
                        action = %binding.action,
                        "skipping binding for unknown action"
                    );
                    unknown.push(binding.action.clone());
                }
            }
        }
        unknown
    }

    /// Check if a chord has a binding
    pub fn contains(&self, chord: &Chord) -> bool {
        self.bindings.read().contains_key(chord)
    }

    /// Number of bound chords
    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    /// Check if nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.read().is_empty()
    }
}
