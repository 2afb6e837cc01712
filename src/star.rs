//! Twinkling, slowly drifting star.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::compute::{brightness_for_phase, drift_row, next_phase, star_bottom_edge};
use crate::config::{BlinkCycle, SceneConfig};
use crate::entities::{Position, Step};
use crate::error::Result;
use crate::scheduler::{Entity, TickFrame};

const FALLBACK_SYMBOL: char = '*';

/// A star walks through its blink cycle forever, one phase per tick, and
/// slides down one row every `speed_divisor` steps. Its column never
/// changes.
#[derive(Clone, Debug)]
pub struct Star {
    position: Position,
    symbol: char,
    /// Phase drawn on the next resume, always in `[1, cycle.len()]`.
    phase: u32,
    cycle: BlinkCycle,
    speed_divisor: u32,
    bottom_edge: i32,
    /// Steps whose glyph has already been erased.
    completed: u64,
    drawn: bool,
}

impl Star {
    /// A star at an explicit place and phase. `start_phase` is pulled into
    /// `[1, cycle.len()]`.
    pub fn new(
        position: Position,
        symbol: char,
        start_phase: u32,
        config: &SceneConfig,
        canvas_rows: u16,
    ) -> Self {
        let cycle = config.blink;
        Self {
            position,
            symbol,
            phase: start_phase.clamp(1, cycle.len().max(1)),
            cycle,
            speed_divisor: config.star_speed_divisor.max(1),
            bottom_edge: star_bottom_edge(canvas_rows),
            completed: 0,
            drawn: false,
        }
    }

    /// A star placed uniformly over the interior with a random symbol and
    /// starting phase, so neighbouring stars do not blink in unison.
    pub fn random(
        rng: &mut impl Rng,
        config: &SceneConfig,
        canvas_rows: u16,
        canvas_cols: u16,
    ) -> Self {
        let last_row = (canvas_rows as i32 - 2).max(1);
        let last_col = (canvas_cols as i32 - 2).max(1);
        let position = Position::new(rng.gen_range(1..=last_row), rng.gen_range(1..=last_col));
        let symbol = config
            .star_symbols
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_SYMBOL);
        let phase = rng.gen_range(1..=config.blink.len().max(1));
        Self::new(position, symbol, phase, config, canvas_rows)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }
}

impl Entity for Star {
    fn step(&mut self, frame: &mut TickFrame<'_>) -> Result<Step> {
        // Finish the previous step: blank the glyph, then maybe drift.
        if self.drawn {
            frame.canvas.erase(self.position.row, self.position.col)?;
            self.completed += 1;
            if self.completed % self.speed_divisor as u64 == 0 {
                self.position.row = drift_row(self.position.row, self.bottom_edge);
            }
        }

        let brightness = brightness_for_phase(self.phase, &self.cycle);
        frame
            .canvas
            .put(self.position.row, self.position.col, self.symbol, brightness)?;
        self.drawn = true;
        self.phase = next_phase(self.phase, self.cycle.len());

        Ok(Step::Continue)
    }

    fn kind(&self) -> &'static str {
        "star"
    }
}
