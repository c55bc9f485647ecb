//! Error types for chord parsing and keymap loading

use std::path::PathBuf;

/// Errors produced when decoding or encoding a chord
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChordError {
    /// The chord text was empty
    #[error("empty string")]
    EmptyInput,

    /// The text or key code has no valid representation
    #[error("invalid key {0}")]
    InvalidKey(String),

    /// A piece is neither a modifier, a key name, nor a single character
    #[error("unknown key name or invalid rune: {0}")]
    UnknownKeyOrRune(String),
}

/// Errors that can occur when loading keymap files
#[derive(Debug, thiserror::Error)]
pub enum KeymapError {
    #[error("failed to read keymap {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse keymap: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid binding {key:?}: {source}")]
    Chord {
        key: String,
        #[source]
        source: ChordError,
    },
}
