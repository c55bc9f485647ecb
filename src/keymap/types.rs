//! Core types for the keymap system: Modifiers, KeyCode, Chord, KeyEvent

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000);

    /// Every modifier bit set
    pub const ALL: Modifiers = Modifiers(0b1111);

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    /// Build a mask from raw bits, dropping anything outside the four modifiers
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Modifiers(bits & Self::ALL.0)
    }

    /// Raw bit representation
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if alt/option is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if meta (super/win) is held
    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

/// Labels in the order they are written: Ctrl, Alt, Meta, Shift
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        if self.shift() {
            parts.push("Shift");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code: either a named key from a fixed vocabulary or a literal character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A literal character (the "rune" kind). Case-sensitive.
    Char(char),

    // Editing
    /// The DEL-producing backspace key, also spelled `backspace2`
    Backspace,
    Tab,
    Backtab,
    Enter,
    Escape,
    Delete,
    Insert,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,

    // Locks and system keys
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
    Menu,
    KeypadBegin,

    // Function keys
    F(u8), // F1-F64
}

/// Highest function key with a name
pub const MAX_FUNCTION_KEY: u8 = 64;

/// Named keys and their canonical display names.
///
/// Function keys are not listed; they are named `F1` through `F64`.
pub const NAMED_KEYS: &[(KeyCode, &str)] = &[
    (KeyCode::Backspace, "Backspace"),
    (KeyCode::Tab, "Tab"),
    (KeyCode::Backtab, "Backtab"),
    (KeyCode::Enter, "Enter"),
    (KeyCode::Escape, "Escape"),
    (KeyCode::Delete, "Delete"),
    (KeyCode::Insert, "Insert"),
    (KeyCode::Up, "Up"),
    (KeyCode::Down, "Down"),
    (KeyCode::Left, "Left"),
    (KeyCode::Right, "Right"),
    (KeyCode::Home, "Home"),
    (KeyCode::End, "End"),
    (KeyCode::PageUp, "PageUp"),
    (KeyCode::PageDown, "PageDown"),
    (KeyCode::CapsLock, "CapsLock"),
    (KeyCode::ScrollLock, "ScrollLock"),
    (KeyCode::NumLock, "NumLock"),
    (KeyCode::PrintScreen, "PrintScreen"),
    (KeyCode::Pause, "Pause"),
    (KeyCode::Menu, "Menu"),
    (KeyCode::KeypadBegin, "KeypadBegin"),
];

impl KeyCode {
    /// Canonical name of a named key. `None` for characters and for
    /// function keys outside F1-F64.
    pub fn name(self) -> Option<String> {
        match self {
            KeyCode::Char(_) => None,
            KeyCode::F(n) if (1..=MAX_FUNCTION_KEY).contains(&n) => Some(format!("F{}", n)),
            KeyCode::F(_) => None,
            key => NAMED_KEYS
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, name)| (*name).to_string()),
        }
    }

    /// Look up a named key, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<KeyCode> {
        if let Some(&(key, _)) = NAMED_KEYS
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
        {
            return Some(key);
        }

        let digits = name.strip_prefix(['f', 'F'])?;
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        match digits.parse::<u8>() {
            Ok(n) if (1..=MAX_FUNCTION_KEY).contains(&n) => Some(KeyCode::F(n)),
            _ => None,
        }
    }

    /// Every named key in the vocabulary, function keys included
    pub fn named_keys() -> impl Iterator<Item = KeyCode> {
        NAMED_KEYS
            .iter()
            .map(|(key, _)| *key)
            .chain((1..=MAX_FUNCTION_KEY).map(KeyCode::F))
    }
}

/// A complete key combination: a modifier mask plus one key or character.
///
/// This is the unit of identity for a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chord {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Chord {
    /// Create a new chord
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a chord with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create a chord for a literal character with modifiers
    pub const fn rune(c: char, mods: Modifiers) -> Self {
        Self {
            key: KeyCode::Char(c),
            mods,
        }
    }
}

/// Whether a key event is an initial press or an auto-repeat
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
}

/// A key event as handed to [`Keymap::capture`](super::Keymap::capture)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub mods: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a key-press event
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self {
            key,
            mods,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key-press event for a literal character
    pub const fn rune(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c), mods)
    }

    /// Mark this event as an auto-repeat
    pub const fn repeated(mut self) -> Self {
        self.kind = KeyEventKind::Repeat;
        self
    }

    /// The chord this event is looked up by
    #[inline]
    pub const fn chord(&self) -> Chord {
        Chord::new(self.key, self.mods)
    }
}

impl From<Chord> for KeyEvent {
    fn from(chord: Chord) -> Self {
        Self::new(chord.key, chord.mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_empty() {
        let mods = Modifiers::NONE;
        assert!(mods.is_empty());
        assert!(!mods.ctrl());
        assert!(!mods.shift());
        assert!(!mods.alt());
        assert!(!mods.meta());
    }

    #[test]
    fn test_modifiers_individual() {
        assert!(Modifiers::CTRL.ctrl());
        assert!(!Modifiers::CTRL.shift());

        assert!(Modifiers::SHIFT.shift());
        assert!(!Modifiers::SHIFT.ctrl());

        assert!(Modifiers::ALT.alt());
        assert!(Modifiers::META.meta());
    }

    #[test]
    fn test_modifiers_combined_order_independent() {
        let a = Modifiers::CTRL | Modifiers::SHIFT;
        let b = Modifiers::SHIFT | Modifiers::CTRL;
        assert_eq!(a, b);
        assert!(a.ctrl());
        assert!(a.shift());
        assert!(!a.alt());
        assert!(a.contains(Modifiers::CTRL));
        assert!(!a.contains(Modifiers::ALT));
    }

    #[test]
    fn test_modifiers_from_bits_truncate() {
        assert_eq!(Modifiers::from_bits_truncate(0xff), Modifiers::ALL);
        assert_eq!(Modifiers::from_bits_truncate(0b0100), Modifiers::ALT);
    }

    #[test]
    fn test_modifiers_display_order() {
        let mods = Modifiers::SHIFT | Modifiers::META | Modifiers::ALT | Modifiers::CTRL;
        assert_eq!(mods.to_string(), "Ctrl+Alt+Meta+Shift");
        assert_eq!(Modifiers::NONE.to_string(), "");
    }

    #[test]
    fn test_key_names() {
        assert_eq!(KeyCode::Escape.name().as_deref(), Some("Escape"));
        assert_eq!(KeyCode::F(1).name().as_deref(), Some("F1"));
        assert_eq!(KeyCode::F(64).name().as_deref(), Some("F64"));
        assert_eq!(KeyCode::F(0).name(), None);
        assert_eq!(KeyCode::F(65).name(), None);
        assert_eq!(KeyCode::Char('a').name(), None);
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(KeyCode::from_name("pageup"), Some(KeyCode::PageUp));
        assert_eq!(KeyCode::from_name("PAGEUP"), Some(KeyCode::PageUp));
        assert_eq!(KeyCode::from_name("f12"), Some(KeyCode::F(12)));
        assert_eq!(KeyCode::from_name("F01"), None);
        assert_eq!(KeyCode::from_name("F0"), None);
        assert_eq!(KeyCode::from_name("F65"), None);
        assert_eq!(KeyCode::from_name("F"), None);
        assert_eq!(KeyCode::from_name("bogus"), None);
    }

    #[test]
    fn test_named_keys_all_have_names() {
        for key in KeyCode::named_keys() {
            let name = key.name().expect("named key should have a name");
            assert_eq!(KeyCode::from_name(&name), Some(key));
        }
    }

    #[test]
    fn test_chord_equality_is_case_sensitive() {
        assert_ne!(
            Chord::rune('a', Modifiers::NONE),
            Chord::rune('A', Modifiers::NONE)
        );
        assert_eq!(
            Chord::rune('a', Modifiers::ALT),
            Chord::new(KeyCode::Char('a'), Modifiers::ALT)
        );
    }

    #[test]
    fn test_event_chord_ignores_kind() {
        let press = KeyEvent::rune('o', Modifiers::ALT);
        let repeat = press.repeated();
        assert_ne!(press, repeat);
        assert_eq!(press.chord(), repeat.chord());
    }
}
