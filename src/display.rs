//! Rendering layer — all terminal I/O lives here.
//!
//! The scene draws into a `Canvas`; this module only translates canvas
//! cells into terminal commands and flushes them in one batch per tick.

use std::io::Write;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};
use cosmic_game::canvas::Canvas;
use cosmic_game::entities::Brightness;

// ── Screen setup / teardown ───────────────────────────────────────────────────

pub fn enter<W: Write>(out: &mut W) -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.flush()
}

pub fn leave<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    out.flush()?;
    terminal::disable_raw_mode()
}

// ── Per-tick flush ────────────────────────────────────────────────────────────

/// Write every cell of `canvas` that differs from `previous` (or every cell
/// when there is no previous frame), then flush once.
pub fn render<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    previous: Option<&Canvas>,
) -> std::io::Result<()> {
    let cols = canvas.cols() as usize;
    let mut style: Option<Brightness> = None;
    // Where the terminal cursor sits after the last print, if known.
    let mut cursor_at: Option<(usize, usize)> = None;

    for (i, cell) in canvas.cells().iter().enumerate() {
        if previous.is_some_and(|prev| prev.cells().get(i) == Some(cell)) {
            continue;
        }
        let (row, col) = (i / cols, i % cols);

        if cursor_at != Some((row, col)) {
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
        }
        if style != Some(cell.brightness) {
            apply_brightness(out, cell.brightness)?;
            style = Some(cell.brightness);
        }
        out.queue(Print(cell.ch))?;
        cursor_at = Some((row, col + 1));
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    out.flush()
}

/// Queue a terminal bell; it goes out with the next flush.
pub fn beep<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(Print('\x07'))?;
    Ok(())
}

fn apply_brightness<W: Write>(out: &mut W, brightness: Brightness) -> std::io::Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match brightness {
        Brightness::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Brightness::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Brightness::Plain => {}
    }
    Ok(())
}
