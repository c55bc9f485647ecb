//! Chord text codec
//!
//! Converts between chord strings like `"Alt+s"` or `"Ctrl+Shift+F1"` and
//! [`Chord`] values. The grammar is
//!
//! ```text
//! [Modifier+]*(KeyName|Character|Space|"+")
//! ```
//!
//! Modifiers and key names are case-insensitive. Single characters keep their
//! case. A trailing `+` is the plus character itself, so `"Ctrl++"` is Ctrl
//! with `+`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ChordError;
use super::types::{Chord, KeyCode, Modifiers};

/// Modifier labels, lowercase, in encoding order
pub const MODIFIER_LABELS: &[(&str, Modifiers)] = &[
    ("ctrl", Modifiers::CTRL),
    ("alt", Modifiers::ALT),
    ("meta", Modifiers::META),
    ("shift", Modifiers::SHIFT),
];

/// Alternate spellings accepted for named keys, mapped to their canonical name
pub const KEY_ALIASES: &[(&str, &str)] = &[
    ("backspace2", "Backspace"),
    ("pgup", "PageUp"),
    ("pgdn", "PageDown"),
    ("esc", "Escape"),
];

fn modifier_from_label(label: &str) -> Option<Modifiers> {
    MODIFIER_LABELS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, m)| *m)
}

fn resolve_alias(name: &str) -> Option<&'static str> {
    KEY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
}

/// Decode a single non-modifier piece into a key
fn decode_key(piece: &str, lower: &str) -> Result<KeyCode, ChordError> {
    let name = resolve_alias(lower).unwrap_or(lower);

    if matches!(name, "space" | "spacebar") {
        return Ok(KeyCode::Char(' '));
    }
    if let Some(key) = KeyCode::from_name(name) {
        return Ok(key);
    }

    let mut chars = piece.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeyCode::Char(c)),
        _ => Err(ChordError::UnknownKeyOrRune(piece.to_string())),
    }
}

/// Decode a chord string like `"Ctrl+Shift+F1"` into a [`Chord`]
pub fn decode(text: &str) -> Result<Chord, ChordError> {
    if text.is_empty() {
        return Err(ChordError::EmptyInput);
    }

    let mut mods = Modifiers::NONE;
    let mut key = None;
    let mut rest = text;
    let mut plus_suffix = false;

    if let Some(prefix) = text.strip_suffix('+') {
        let mut chars = prefix.chars();
        match chars.next_back() {
            None => return Ok(Chord::rune('+', Modifiers::NONE)),
            // The suffix must be a separator followed by the plus key
            Some(c) if c != '+' || chars.as_str().is_empty() => {
                return Err(ChordError::InvalidKey(text.to_string()));
            }
            Some(_) => {
                rest = chars.as_str();
                key = Some(KeyCode::Char('+'));
                plus_suffix = true;
            }
        }
    }

    for piece in rest.split('+') {
        if piece.is_empty() {
            return Err(ChordError::InvalidKey(text.to_string()));
        }

        let lower = piece.to_ascii_lowercase();
        if let Some(m) = modifier_from_label(&lower) {
            mods |= m;
            continue;
        }

        // Only modifiers may precede a trailing plus
        if plus_suffix {
            return Err(ChordError::InvalidKey(text.to_string()));
        }

        // Last key piece wins
        key = Some(decode_key(piece, &lower)?);
    }

    let key = key.ok_or_else(|| ChordError::InvalidKey(text.to_string()))?;
    Ok(Chord::new(key, mods))
}

/// Encode a [`Chord`] into its canonical string form
///
/// Fails with [`ChordError::InvalidKey`] for key codes that have no name,
/// such as `F(0)`.
pub fn encode(chord: Chord) -> Result<String, ChordError> {
    let mut out = chord.mods.to_string();

    let key = match chord.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        key => key
            .name()
            .ok_or_else(|| ChordError::InvalidKey(format!("{:?}", key)))?,
    };

    if !out.is_empty() {
        out.push('+');
    }
    out.push_str(&key);
    Ok(out)
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match encode(*self) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "<invalid key {:?}>", self.key),
        }
    }
}

impl Serialize for Chord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = encode(*self).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Chord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        decode(&text).map_err(serde::de::Error::custom)
    }
}
