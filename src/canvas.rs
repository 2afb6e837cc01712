//! In-memory drawing surface.
//!
//! Entities draw into a `Canvas`; the binary's display layer flushes it to
//! the terminal once per tick. Unlike a terminal cursor, the canvas refuses
//! writes outside its area, so a bad coordinate shows up as an error rather
//! than as garbage on screen.

use crate::entities::{Brightness, Position};
use crate::error::{Result, SceneError};
use crate::sprite::Sprite;

/// A single glyph cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub brightness: Brightness,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            brightness: Brightness::Plain,
        }
    }
}

/// Fixed-size grid of cells addressed by (row, column).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(rows: u16, cols: u16) -> Self {
        let len = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.idx(pos.row, pos.col).is_some()
    }

    #[inline(always)]
    fn idx(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// Place `ch` at (row, col) with the given emphasis.
    pub fn put(&mut self, row: i32, col: i32, ch: char, brightness: Brightness) -> Result<()> {
        let i = self.idx(row, col).ok_or(SceneError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })?;
        self.cells[i] = Cell { ch, brightness };
        Ok(())
    }

    /// Blank a single cell.
    pub fn erase(&mut self, row: i32, col: i32) -> Result<()> {
        self.put(row, col, ' ', Brightness::Plain)
    }

    /// Draw `sprite` with its top-left corner at `origin`.
    ///
    /// With `negative` set, every visible glyph of the sprite is blanked
    /// instead, which removes a previous draw of the same sprite at the
    /// same origin without touching neighbouring cells.
    pub fn draw_sprite(&mut self, origin: Position, sprite: &Sprite, negative: bool) -> Result<()> {
        for (dr, dc, ch) in sprite.glyphs() {
            let row = origin.row + dr as i32;
            let col = origin.col + dc as i32;
            if negative {
                self.erase(row, col)?;
            } else {
                self.put(row, col, ch, Brightness::Plain)?;
            }
        }
        Ok(())
    }

    /// Frame the outermost rows and columns with a box.
    pub fn draw_border(&mut self) {
        if self.rows < 2 || self.cols < 2 {
            return;
        }
        let bottom = self.rows as i32 - 1;
        let right = self.cols as i32 - 1;

        for col in 1..right {
            self.set(0, col, '─');
            self.set(bottom, col, '─');
        }
        for row in 1..bottom {
            self.set(row, 0, '│');
            self.set(row, right, '│');
        }
        self.set(0, 0, '┌');
        self.set(0, right, '┐');
        self.set(bottom, 0, '└');
        self.set(bottom, right, '┘');
    }

    fn set(&mut self, row: i32, col: i32, ch: char) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = Cell {
                ch,
                brightness: Brightness::Plain,
            };
        }
    }
}
