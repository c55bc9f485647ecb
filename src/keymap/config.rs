//! YAML configuration parsing for keymaps
//!
//! A keymap file maps chord strings to action names:
//!
//! ```yaml
//! bindings:
//!   - key: "Alt+s"
//!     action: save
//!   - key: "Escape"
//!     action: quit
//! ```
//!
//! Action names are resolved to handlers by the host, see
//! [`Keymap::apply_bindings`](super::Keymap::apply_bindings).

use std::path::Path;

use serde::Deserialize;

use super::chord::decode;
use super::error::KeymapError;
use super::types::Chord;

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub action: String,
}

/// A decoded binding: chord plus the action it triggers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBinding {
    pub chord: Chord,
    pub action: String,
}

/// Load bindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<ActionBinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|source| KeymapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bindings = parse_keymap_yaml(&content)?;
    tracing::info!(
        "Loaded keymap {} ({} bindings)",
        path.display(),
        bindings.len()
    );
    Ok(bindings)
}

/// Parse bindings from a YAML string
///
/// Fails on the first key that does not decode.
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<ActionBinding>, KeymapError> {
    let config: KeymapConfig = serde_yaml::from_str(yaml)?;

    config
        .bindings
        .into_iter()
        .map(|entry| {
            let chord = decode(&entry.key).map_err(|source| KeymapError::Chord {
                key: entry.key.clone(),
                source,
            })?;
            Ok(ActionBinding {
                chord,
                action: entry.action,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::error::ChordError;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
bindings:
  - key: "Alt+s"
    action: save
  - key: "ctrl+shift+f1"
    action: help
"#;

        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].chord, Chord::rune('s', Modifiers::ALT));
        assert_eq!(bindings[0].action, "save");
        assert_eq!(
            bindings[1].chord,
            Chord::new(KeyCode::F(1), Modifiers::CTRL | Modifiers::SHIFT)
        );
    }

    #[test]
    fn test_parse_plus_key() {
        let yaml = r#"
bindings:
  - key: "Ctrl++"
    action: zoom_in
"#;
        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings[0].chord, Chord::rune('+', Modifiers::CTRL));
    }

    #[test]
    fn test_parse_empty_document() {
        let bindings = parse_keymap_yaml("bindings: []").unwrap();
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_invalid_key_reports_entry() {
        let yaml = r#"
bindings:
  - key: "Ctrl+Bogus"
    action: save
"#;
        match parse_keymap_yaml(yaml) {
            Err(KeymapError::Chord { key, source }) => {
                assert_eq!(key, "Ctrl+Bogus");
                assert_eq!(source, ChordError::UnknownKeyOrRune("Bogus".to_string()));
            }
            other => panic!("expected chord error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            parse_keymap_yaml("bindings: [ {key: "),
            Err(KeymapError::Parse(_))
        ));
    }
}
