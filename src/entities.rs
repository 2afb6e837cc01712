//! Shared scene data types — pure data, no logic.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// A cell address on the canvas. Row 0 is the top edge, column 0 the left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// The border rectangle a sprite must stay inside.
///
/// `top`/`left` are the first interior row/column; `bottom`/`right` are the
/// border row/column on the far side, so a sprite of `h` rows may start at
/// most at `bottom - h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

// ── Drawing ───────────────────────────────────────────────────────────────────

/// Visual emphasis applied to a single glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Brightness {
    Dim,
    #[default]
    Plain,
    Bold,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// One tick's worth of sampled input.
///
/// Each axis component is −1, 0 or +1. Rows grow downward, so "up" is
/// `rows = -1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub rows: i32,
    pub cols: i32,
    pub fire: bool,
}

// ── Scheduling ────────────────────────────────────────────────────────────────

/// What an entity reports after being resumed for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Resume me again next tick.
    Continue,
    /// Drop me; I will never be resumed again.
    Done,
}
