//! Keybinding registry for terminal applications
//!
//! This module provides:
//! - A chord codec: `"Ctrl+Shift+F1"` ⇄ [`Chord`]
//! - A thread-safe [`Keymap`] that maps chords to handlers and dispatches
//!   key events to them
//! - An adapter for crossterm key events
//! - YAML keymap files binding chords to named actions
//!
//! # Architecture
//!
//! ```text
//! crossterm::KeyEvent → KeyEvent → Keymap::capture() → Handler → Propagation
//! ```
//!
//! # Usage
//!
//! ```
//! use chordbind::keymap::{KeyCode, KeyEvent, Keymap, Modifiers, Propagation};
//!
//! let keymap = Keymap::new();
//! keymap.set("Alt+s", |_| Propagation::Consumed)?;
//! keymap.set_key(Modifiers::NONE, KeyCode::Escape, |_| Propagation::Consumed);
//!
//! let event = KeyEvent::rune('s', Modifiers::ALT);
//! assert!(keymap.capture(event).is_consumed());
//! # Ok::<(), chordbind::keymap::ChordError>(())
//! ```

mod binding;
mod chord;
mod config;
mod crossterm_adapter;
mod error;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::{Handler, Propagation};
pub use chord::{decode, encode, KEY_ALIASES, MODIFIER_LABELS};
pub use config::{load_keymap_file, parse_keymap_yaml, ActionBinding, BindingConfig, KeymapConfig};
pub use crossterm_adapter::{key_code_from_crossterm, key_code_to_crossterm, HostKeyEvent};
pub use error::{ChordError, KeymapError};
pub use keymap::Keymap;
pub use types::{Chord, KeyCode, KeyEvent, KeyEventKind, Modifiers, MAX_FUNCTION_KEY, NAMED_KEYS};

#[cfg(test)]
mod tests;
