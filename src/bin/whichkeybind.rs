//! whichkeybind - show how key presses encode as chord strings
//!
//! Each key press prints the event, its encoded chord string and the chord
//! that string decodes back to. Escape or Ctrl+C quits.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use chordbind::config_paths;
use chordbind::keymap::{load_keymap_file, Handler, HostKeyEvent};
use chordbind::{decode, encode, Chord, KeyCode, KeyEvent, Keymap, Modifiers, Propagation};

/// Show the chord string for each key you press
#[derive(Parser, Debug)]
#[command(name = "whichkeybind", version, about = "Show the chord string for each key you press")]
struct CliArgs {
    /// Keymap file binding chords to actions (`quit`, `clear`)
    ///
    /// Defaults to ~/.config/chordbind/keymap.yaml when it exists.
    #[arg(long, value_name = "PATH")]
    keymap: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

/// Raw mode and alternate screen for the lifetime of the value
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn putln(out: &mut impl Write, row: u16, text: &str) -> io::Result<()> {
    queue!(out, MoveTo(0, row), Print(text))
}

/// Redraw the screen for a key press. Releases leave the screen alone.
fn describe(out: &mut impl Write, ev: &event::KeyEvent) -> io::Result<()> {
    if ev.kind == KeyEventKind::Release {
        return Ok(());
    }

    queue!(out, Clear(ClearType::All))?;
    putln(
        out,
        0,
        &format!("Event: {:?} {:?} {:?}", ev.modifiers, ev.code, ev.kind),
    )?;

    let Some(key_event) = ev.to_key_event() else {
        putln(out, 2, "(no chord for this key)")?;
        return out.flush();
    };

    match encode(key_event.chord()) {
        Ok(text) => {
            putln(out, 2, &text)?;
            match decode(&text) {
                Ok(chord) => putln(
                    out,
                    4,
                    &format!("Re-encoded as: {:?} {:?}", chord.mods, chord.key),
                )?,
                Err(e) => putln(out, 4, &e.to_string())?,
            }
        }
        Err(e) => putln(out, 2, &format!("error: {}", e))?,
    }
    out.flush()
}

fn build_keymap(args: &CliArgs, quit: &Arc<AtomicBool>) -> Result<Keymap> {
    let keymap = Keymap::new();

    let quit_handler = {
        let quit = quit.clone();
        Handler::new(move |_| {
            quit.store(true, Ordering::SeqCst);
            Propagation::Consumed
        })
    };
    keymap.bind(Chord::key(KeyCode::Escape), quit_handler.clone());
    keymap.bind(Chord::rune('c', Modifiers::CTRL), quit_handler.clone());

    let path = args
        .keymap
        .clone()
        .or_else(|| config_paths::keymap_file().filter(|p| p.exists()));
    if let Some(path) = path {
        let bindings = load_keymap_file(&path)
            .with_context(|| format!("failed to load keymap {}", path.display()))?;
        let unknown = keymap.apply_bindings(&bindings, |action| match action {
            "quit" => Some(quit_handler.clone()),
            "clear" => Some(
                (|_: KeyEvent| {
                    let _ = execute!(io::stdout(), Clear(ClearType::All));
                    Propagation::Consumed
                })
                .into(),
            ),
            _ => None,
        });
        for action in unknown {
            eprintln!("Warning: unknown action {:?} in {}", action, path.display());
        }
    }

    Ok(keymap)
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    chordbind::tracing::init(&args.log_level);

    let quit = Arc::new(AtomicBool::new(false));
    let keymap = build_keymap(&args, &quit)?;

    let _guard = TerminalGuard::new()?;
    let mut out = io::stdout();
    putln(&mut out, 0, "Press a key (Escape or Ctrl+C to quit)")?;
    out.flush()?;

    while !quit.load(Ordering::SeqCst) {
        if let Event::Key(ev) = event::read()? {
            describe(&mut out, &ev)?;
            keymap.capture_host(&ev);
        }
    }

    Ok(())
}
