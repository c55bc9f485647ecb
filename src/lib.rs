//! chordbind - keybinding registry for terminal applications
//!
//! Maps chords (a modifier mask plus a named key or a character) to
//! handlers, dispatches key events to them, and converts chords to and from
//! their text form (`"Alt+s"`, `"Ctrl+Shift+F1"`).

pub mod config_paths;
pub mod keymap;
pub mod tracing;

// Re-export commonly used types
pub use keymap::{
    decode, encode, Chord, ChordError, Handler, KeyCode, KeyEvent, Keymap, Modifiers, Propagation,
};
