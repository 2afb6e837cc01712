//! Key mapping from terminal events to per-tick controls.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Controls;

/// Result of draining one tick's worth of terminal events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSample {
    pub controls: Controls,
    pub quit: bool,
}

/// Fold every pending event into one sample. On each axis the last key
/// wins; fire stays set once any fire key was seen. Releases are ignored.
pub fn sample<I>(events: I) -> InputSample
where
    I: IntoIterator<Item = Event>,
{
    let mut sample = InputSample::default();
    for event in events {
        let Event::Key(key) = event else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if should_quit(key) {
            sample.quit = true;
            continue;
        }
        apply_key(&mut sample.controls, key.code);
    }
    sample
}

/// Apply a single key press to `controls`.
pub fn apply_key(controls: &mut Controls, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => controls.rows = -1,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => controls.rows = 1,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => controls.cols = -1,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => controls.cols = 1,
        KeyCode::Char(' ') => controls.fire = true,
        _ => {}
    }
}

/// Raw mode swallows SIGINT, so Ctrl-C arrives here as a key.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
