//! Player-steered ship.

use crate::compute::{centre, clamp_ship, min_canvas, ship_bounds};
use crate::entities::{Bounds, Position, Step};
use crate::error::{Result, SceneError};
use crate::scheduler::{Entity, TickFrame};
use crate::sprite::Sprite;

/// Two-frame ship sprite that moves with the sampled input and stays one
/// cell clear of the border on every side.
///
/// Each resume wipes the frame drawn last tick, moves, then draws the other
/// frame. The frames alternate every tick whether or not the ship moved.
#[derive(Clone, Debug)]
pub struct Ship {
    position: Position,
    bounds: Bounds,
    sprite_rows: i32,
    sprite_cols: i32,
    frames: [Sprite; 2],
    next_frame: usize,
    previous_frame: Option<usize>,
    speed: i32,
}

impl Ship {
    /// Place the ship at the canvas centre. The bounding box comes from the
    /// first frame.
    ///
    /// Fails when the canvas cannot hold the sprite plus one cell of padding
    /// on every side.
    pub fn new(frames: [Sprite; 2], canvas_rows: u16, canvas_cols: u16, speed: i32) -> Result<Self> {
        let sprite_rows = frames[0].rows() as i32;
        let sprite_cols = frames[0].cols() as i32;
        let (min_rows, min_cols) = min_canvas(sprite_rows, sprite_cols);
        if (canvas_rows as i32) < min_rows || (canvas_cols as i32) < min_cols {
            return Err(SceneError::CanvasTooSmall {
                rows: canvas_rows,
                cols: canvas_cols,
                min_rows: min_rows.min(u16::MAX as i32) as u16,
                min_cols: min_cols.min(u16::MAX as i32) as u16,
            });
        }

        let bounds = ship_bounds(canvas_rows, canvas_cols);
        let position = clamp_ship(
            centre(canvas_rows, canvas_cols),
            &bounds,
            sprite_rows,
            sprite_cols,
        );
        Ok(Self {
            position,
            bounds,
            sprite_rows,
            sprite_cols,
            frames,
            next_frame: 0,
            previous_frame: None,
            speed,
        })
    }

    /// Top-left corner of the sprite.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Sprite bounding box as (rows, cols).
    pub fn sprite_size(&self) -> (i32, i32) {
        (self.sprite_rows, self.sprite_cols)
    }

    /// The cell just above the nose, where projectiles start.
    pub fn muzzle(&self) -> Position {
        Position::new(self.position.row - 1, self.position.col + self.sprite_cols / 2)
    }
}

impl Entity for Ship {
    fn step(&mut self, frame: &mut TickFrame<'_>) -> Result<Step> {
        if let Some(prev) = self.previous_frame {
            frame
                .canvas
                .draw_sprite(self.position, &self.frames[prev], true)?;
        }

        let controls = frame.controls;
        let candidate = Position::new(
            self.position.row + controls.rows * self.speed,
            self.position.col + controls.cols * self.speed,
        );
        self.position = clamp_ship(candidate, &self.bounds, self.sprite_rows, self.sprite_cols);

        let current = self.next_frame;
        frame
            .canvas
            .draw_sprite(self.position, &self.frames[current], false)?;
        self.previous_frame = Some(current);
        self.next_frame = (current + 1) % self.frames.len();

        frame.muzzle = Some(self.muzzle());
        Ok(Step::Continue)
    }

    fn kind(&self) -> &'static str {
        "ship"
    }
}
