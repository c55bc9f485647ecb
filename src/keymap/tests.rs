//! Integration tests for the keymap system

use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crossterm::event::{KeyCode as CtKeyCode, KeyEvent as CtKeyEvent, KeyModifiers as CtModifiers};

#[test]
fn test_keymap_from_yaml_dispatches() {
    let yaml = r#"
bindings:
  - key: "Alt+s"
    action: save
  - key: "esc"
    action: quit
"#;
    let bindings = parse_keymap_yaml(yaml).unwrap();

    let saves = Arc::new(AtomicUsize::new(0));
    let keymap = Keymap::new();
    let counter = saves.clone();
    let unknown = keymap.apply_bindings(&bindings, |action| match action {
        "save" => {
            let counter = counter.clone();
            Some(Handler::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Propagation::Consumed
            }))
        }
        "quit" => Some((|_: KeyEvent| Propagation::Consumed).into()),
        _ => None,
    });

    assert!(unknown.is_empty());
    assert_eq!(keymap.len(), 2);

    keymap.capture(KeyEvent::rune('s', Modifiers::ALT));
    assert_eq!(saves.load(Ordering::SeqCst), 1);
    assert!(keymap
        .capture(KeyEvent::new(KeyCode::Escape, Modifiers::NONE))
        .is_consumed());
}

#[test]
fn test_capture_crossterm_event() {
    let keymap = Keymap::new();
    keymap.set("Ctrl+c", |_| Propagation::Consumed).unwrap();

    let ctrl_c = CtKeyEvent::new(CtKeyCode::Char('c'), CtModifiers::CONTROL);
    assert_eq!(keymap.capture_host(&ctrl_c), Some(Propagation::Consumed));

    let other = CtKeyEvent::new(CtKeyCode::Char('x'), CtModifiers::NONE);
    assert_eq!(
        keymap.capture_host(&other),
        Some(Propagation::Continue(KeyEvent::rune('x', Modifiers::NONE)))
    );

    let null = CtKeyEvent::new(CtKeyCode::Null, CtModifiers::NONE);
    assert_eq!(keymap.capture_host(&null), None);
}

#[test]
fn test_encoded_host_event_decodes_to_same_chord() {
    let ev = CtKeyEvent::new(CtKeyCode::PageUp, CtModifiers::CONTROL | CtModifiers::ALT);
    let chord = ev.to_key_event().unwrap().chord();

    let text = encode(chord).unwrap();
    assert_eq!(text, "Ctrl+Alt+PageUp");
    assert_eq!(decode(&text).unwrap(), chord);
}

#[test]
fn test_rewritten_event_reaches_fallback() {
    // Ctrl+[ is rewritten to Escape, which the host handles itself
    let keymap = Keymap::new();
    keymap.set_rune(Modifiers::CTRL, '[', |_| {
        Propagation::Continue(KeyEvent::new(KeyCode::Escape, Modifiers::NONE))
    });

    let out = keymap
        .capture(KeyEvent::rune('[', Modifiers::CTRL))
        .into_event()
        .unwrap();
    let ct: CtKeyEvent = out.into();
    assert_eq!(ct.code, CtKeyCode::Esc);
}

#[test]
fn test_uppercase_rune_needs_shift_binding() {
    let keymap = Keymap::new();
    keymap.set("A", |_| Propagation::Consumed).unwrap();
    let typed = CtKeyEvent::new(CtKeyCode::Char('A'), CtModifiers::SHIFT);
    assert_eq!(
        keymap.capture_host(&typed),
        Some(Propagation::Continue(KeyEvent::rune('A', Modifiers::SHIFT)))
    );

    keymap.set("Shift+A", |_| Propagation::Consumed).unwrap();
    assert_eq!(keymap.capture_host(&typed), Some(Propagation::Consumed));
}
