//! Pure scene arithmetic.
//!
//! Nothing here touches the canvas or the RNG; the entity state machines
//! call into these so every boundary rule can be tested on its own.

use crate::config::BlinkCycle;
use crate::entities::{Bounds, Brightness, Position};

// ── Star twinkle ──────────────────────────────────────────────────────────────

/// Brightness band for a phase in `[1, cycle.len()]`.
///
/// `(0, dim]` is dim, `(dim + plain, dim + plain + bold]` is bold, and
/// everything else is plain.
pub fn brightness_for_phase(phase: u32, cycle: &BlinkCycle) -> Brightness {
    let dim_end = cycle.dim;
    let bold_start = cycle.dim + cycle.plain;
    let bold_end = bold_start + cycle.bold;

    if phase > 0 && phase <= dim_end {
        Brightness::Dim
    } else if phase > bold_start && phase <= bold_end {
        Brightness::Bold
    } else {
        Brightness::Plain
    }
}

/// Phase that follows `phase`, wrapping from `cycle_len` back to 1.
pub fn next_phase(phase: u32, cycle_len: u32) -> u32 {
    if phase >= cycle_len {
        1
    } else {
        phase + 1
    }
}

// ── Star drift ────────────────────────────────────────────────────────────────

/// The row a drifting star may never occupy: the bottom border.
pub fn star_bottom_edge(canvas_rows: u16) -> i32 {
    canvas_rows as i32 - 1
}

/// Move one row down, wrapping back to row 1 on reaching `bottom_edge`.
pub fn drift_row(row: i32, bottom_edge: i32) -> i32 {
    let next = row + 1;
    if next >= bottom_edge {
        1
    } else {
        next
    }
}

// ── Ship ──────────────────────────────────────────────────────────────────────

/// Border rectangle for a canvas: one cell of padding on every side.
pub fn ship_bounds(canvas_rows: u16, canvas_cols: u16) -> Bounds {
    Bounds {
        top: 1,
        left: 1,
        bottom: canvas_rows as i32 - 1,
        right: canvas_cols as i32 - 1,
    }
}

/// Smallest canvas (rows, cols) that fits a sprite inside the border padding.
pub fn min_canvas(sprite_rows: i32, sprite_cols: i32) -> (i32, i32) {
    (sprite_rows + 2, sprite_cols + 2)
}

/// Clamp each axis of `candidate` independently so a sprite of the given
/// size stays inside `bounds`.
pub fn clamp_ship(candidate: Position, bounds: &Bounds, sprite_rows: i32, sprite_cols: i32) -> Position {
    Position {
        row: candidate
            .row
            .min(bounds.bottom - sprite_rows)
            .max(bounds.top),
        col: candidate
            .col
            .min(bounds.right - sprite_cols)
            .max(bounds.left),
    }
}

/// Centre cell of a canvas.
pub fn centre(canvas_rows: u16, canvas_cols: u16) -> Position {
    Position::new(canvas_rows as i32 / 2, canvas_cols as i32 / 2)
}

// ── Projectile ────────────────────────────────────────────────────────────────

/// Round a fractional flight position to the cell it is drawn in.
pub fn to_cell(row: f32, col: f32) -> Position {
    Position::new(row.round() as i32, col.round() as i32)
}

/// Whether a projectile cell is strictly inside the border.
pub fn in_flight(cell: Position, canvas_rows: u16, canvas_cols: u16) -> bool {
    let max_row = canvas_rows as i32 - 1;
    let max_col = canvas_cols as i32 - 1;
    0 < cell.row && cell.row < max_row && 0 < cell.col && cell.col < max_col
}
