//! Adapter to convert crossterm key events to our KeyEvent type

use crossterm::event::{
    Event as CtEvent, KeyCode as CtKeyCode, KeyEvent as CtKeyEvent,
    KeyEventKind as CtKeyEventKind, KeyModifiers as CtModifiers,
};

use super::types::{KeyCode, KeyEvent, KeyEventKind, Modifiers};

/// A key event from a host terminal library.
///
/// Anything that can report a modifier mask and a key (or character) can be
/// captured by a [`Keymap`](super::Keymap).
///
/// Modifiers are passed through as the host reports them. crossterm reports
/// a typed `A` as `Char('A')` with Shift held, so uppercase characters must
/// be bound as `"Shift+A"`; a binding for plain `"A"` never fires from a
/// real key press.
pub trait HostKeyEvent {
    /// Convert to a [`KeyEvent`]. `None` when the event has no chord form.
    fn to_key_event(&self) -> Option<KeyEvent>;
}

impl HostKeyEvent for KeyEvent {
    fn to_key_event(&self) -> Option<KeyEvent> {
        Some(*self)
    }
}

impl HostKeyEvent for CtKeyEvent {
    fn to_key_event(&self) -> Option<KeyEvent> {
        let kind = match self.kind {
            CtKeyEventKind::Press => KeyEventKind::Press,
            CtKeyEventKind::Repeat => KeyEventKind::Repeat,
            CtKeyEventKind::Release => return None,
        };
        let key = key_code_from_crossterm(self.code)?;

        Some(KeyEvent {
            key,
            mods: self.modifiers.into(),
            kind,
        })
    }
}

impl HostKeyEvent for CtEvent {
    fn to_key_event(&self) -> Option<KeyEvent> {
        match self {
            CtEvent::Key(key) => key.to_key_event(),
            _ => None,
        }
    }
}

/// Map a crossterm key code. Returns None for keys outside our vocabulary
/// (media keys, bare modifier keys, Null).
pub fn key_code_from_crossterm(code: CtKeyCode) -> Option<KeyCode> {
    let key = match code {
        CtKeyCode::Char(c) => KeyCode::Char(c),
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Tab => KeyCode::Tab,
        CtKeyCode::BackTab => KeyCode::Backtab,
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Escape,
        CtKeyCode::Delete => KeyCode::Delete,
        CtKeyCode::Insert => KeyCode::Insert,

        // Arrows
        CtKeyCode::Up => KeyCode::Up,
        CtKeyCode::Down => KeyCode::Down,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,

        // Navigation
        CtKeyCode::Home => KeyCode::Home,
        CtKeyCode::End => KeyCode::End,
        CtKeyCode::PageUp => KeyCode::PageUp,
        CtKeyCode::PageDown => KeyCode::PageDown,

        CtKeyCode::CapsLock => KeyCode::CapsLock,
        CtKeyCode::ScrollLock => KeyCode::ScrollLock,
        CtKeyCode::NumLock => KeyCode::NumLock,
        CtKeyCode::PrintScreen => KeyCode::PrintScreen,
        CtKeyCode::Pause => KeyCode::Pause,
        CtKeyCode::Menu => KeyCode::Menu,
        CtKeyCode::KeypadBegin => KeyCode::KeypadBegin,

        CtKeyCode::F(n) => KeyCode::F(n),

        CtKeyCode::Null | CtKeyCode::Media(_) | CtKeyCode::Modifier(_) => return None,
    };
    Some(key)
}

/// Map one of our key codes back to crossterm
pub fn key_code_to_crossterm(key: KeyCode) -> CtKeyCode {
    match key {
        KeyCode::Char(c) => CtKeyCode::Char(c),
        KeyCode::Backspace => CtKeyCode::Backspace,
        KeyCode::Tab => CtKeyCode::Tab,
        KeyCode::Backtab => CtKeyCode::BackTab,
        KeyCode::Enter => CtKeyCode::Enter,
        KeyCode::Escape => CtKeyCode::Esc,
        KeyCode::Delete => CtKeyCode::Delete,
        KeyCode::Insert => CtKeyCode::Insert,
        KeyCode::Up => CtKeyCode::Up,
        KeyCode::Down => CtKeyCode::Down,
        KeyCode::Left => CtKeyCode::Left,
        KeyCode::Right => CtKeyCode::Right,
        KeyCode::Home => CtKeyCode::Home,
        KeyCode::End => CtKeyCode::End,
        KeyCode::PageUp => CtKeyCode::PageUp,
        KeyCode::PageDown => CtKeyCode::PageDown,
        KeyCode::CapsLock => CtKeyCode::CapsLock,
        KeyCode::ScrollLock => CtKeyCode::ScrollLock,
        KeyCode::NumLock => CtKeyCode::NumLock,
        KeyCode::PrintScreen => CtKeyCode::PrintScreen,
        KeyCode::Pause => CtKeyCode::Pause,
        KeyCode::Menu => CtKeyCode::Menu,
        KeyCode::KeypadBegin => CtKeyCode::KeypadBegin,
        KeyCode::F(n) => CtKeyCode::F(n),
    }
}

/// SUPER and META both map to Meta; HYPER is dropped
impl From<CtModifiers> for Modifiers {
    fn from(mods: CtModifiers) -> Self {
        Modifiers::new(
            mods.contains(CtModifiers::CONTROL),
            mods.contains(CtModifiers::SHIFT),
            mods.contains(CtModifiers::ALT),
            mods.intersects(CtModifiers::SUPER | CtModifiers::META),
        )
    }
}

impl From<Modifiers> for CtModifiers {
    fn from(mods: Modifiers) -> Self {
        let mut out = CtModifiers::NONE;
        if mods.ctrl() {
            out |= CtModifiers::CONTROL;
        }
        if mods.shift() {
            out |= CtModifiers::SHIFT;
        }
        if mods.alt() {
            out |= CtModifiers::ALT;
        }
        if mods.meta() {
            out |= CtModifiers::SUPER;
        }
        out
    }
}

impl From<KeyEvent> for CtKeyEvent {
    fn from(event: KeyEvent) -> Self {
        let kind = match event.kind {
            KeyEventKind::Press => CtKeyEventKind::Press,
            KeyEventKind::Repeat => CtKeyEventKind::Repeat,
        };
        CtKeyEvent::new_with_kind(key_code_to_crossterm(event.key), event.mods.into(), kind)
    }
}
