//! Fire-and-forget shot.

use crate::compute::{in_flight, to_cell};
use crate::entities::{Brightness, Position, Step};
use crate::error::Result;
use crate::scheduler::{Entity, TickFrame};

/// Default vertical speed: a little under a third of a row per tick, upward.
pub const DEFAULT_ROWS_SPEED: f32 = -0.3;

const FLASH: char = '*';
const GLOW: char = 'O';
const TRAIL_VERTICAL: char = '|';
const TRAIL_HORIZONTAL: char = '-';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Flash,
    Glow,
    Flying,
}

/// A shot that flashes at its launch cell for two ticks, then travels in a
/// straight line until it reaches the border, where it finishes.
#[derive(Clone, Debug)]
pub struct Projectile {
    row: f32,
    col: f32,
    rows_speed: f32,
    cols_speed: f32,
    stage: Stage,
    /// Cell holding the glyph drawn last tick.
    drawn: Option<Position>,
}

impl Projectile {
    /// Launch straight up from `start`.
    pub fn new(start: Position) -> Self {
        Self::with_velocity(start, DEFAULT_ROWS_SPEED, 0.0)
    }

    pub fn with_velocity(start: Position, rows_speed: f32, cols_speed: f32) -> Self {
        Self {
            row: start.row as f32,
            col: start.col as f32,
            rows_speed,
            cols_speed,
            stage: Stage::Flash,
            drawn: None,
        }
    }

    /// Cell the projectile currently occupies.
    pub fn cell(&self) -> Position {
        to_cell(self.row, self.col)
    }

    fn trail(&self) -> char {
        if self.cols_speed != 0.0 {
            TRAIL_HORIZONTAL
        } else {
            TRAIL_VERTICAL
        }
    }
}

impl Entity for Projectile {
    fn step(&mut self, frame: &mut TickFrame<'_>) -> Result<Step> {
        let canvas = &mut *frame.canvas;
        if let Some(cell) = self.drawn.take() {
            canvas.erase(cell.row, cell.col)?;
        }

        let glyph = match self.stage {
            Stage::Flash => {
                self.stage = Stage::Glow;
                FLASH
            }
            Stage::Glow => {
                self.stage = Stage::Flying;
                GLOW
            }
            Stage::Flying => {
                self.row += self.rows_speed;
                self.col += self.cols_speed;
                self.trail()
            }
        };

        let cell = self.cell();
        if !in_flight(cell, canvas.rows(), canvas.cols()) {
            return Ok(Step::Done);
        }
        canvas.put(cell.row, cell.col, glyph, Brightness::Plain)?;
        self.drawn = Some(cell);
        Ok(Step::Continue)
    }

    fn kind(&self) -> &'static str {
        "projectile"
    }
}
