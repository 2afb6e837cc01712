//! Scene tuning knobs, gathered into one value handed to the scene at start.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides where the ship frames are read from.
pub const FRAMES_DIR_ENV: &str = "COSMIC_FRAMES_DIR";

// ── Star twinkle cycle ────────────────────────────────────────────────────────

/// Lengths (in ticks) of the four brightness bands a star walks through:
/// dim, plain, bold, plain again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkCycle {
    pub dim: u32,
    pub plain: u32,
    pub bold: u32,
    pub plain_after: u32,
}

impl BlinkCycle {
    pub const fn new(dim: u32, plain: u32, bold: u32, plain_after: u32) -> Self {
        Self {
            dim,
            plain,
            bold,
            plain_after,
        }
    }

    /// Total number of phases in one full twinkle.
    pub const fn len(&self) -> u32 {
        self.dim + self.plain + self.bold + self.plain_after
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BlinkCycle {
    fn default() -> Self {
        Self::new(20, 3, 5, 3)
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Pause between two scheduler ticks.
    pub tick: Duration,
    pub star_count: usize,
    pub star_symbols: Vec<char>,
    pub blink: BlinkCycle,
    /// Stars drift one row every this many steps (1 is the fastest).
    pub star_speed_divisor: u32,
    /// Cells the ship moves per unit of input.
    pub ship_speed: i32,
    pub frames_dir: PathBuf,
    /// Minimum ticks between two projectile launches.
    pub fire_cooldown_ticks: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            star_count: 300,
            star_symbols: vec!['+', '*', '.', ':'],
            blink: BlinkCycle::default(),
            star_speed_divisor: 3,
            ship_speed: 3,
            frames_dir: PathBuf::from("frames"),
            fire_cooldown_ticks: 5,
        }
    }
}

impl SceneConfig {
    /// Defaults, with the frames directory taken from `COSMIC_FRAMES_DIR`
    /// when it is set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(FRAMES_DIR_ENV) {
            config.frames_dir = PathBuf::from(dir);
        }
        config
    }
}
