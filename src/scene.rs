//! The composed scene: a star field, the ship and its projectiles sharing
//! one canvas under one scheduler.

use std::time::Duration;

use rand::Rng;

use crate::canvas::Canvas;
use crate::config::SceneConfig;
use crate::entities::Controls;
use crate::error::Result;
use crate::projectile::Projectile;
use crate::scheduler::{Scheduler, TickFrame};
use crate::ship::Ship;
use crate::sprite::Sprite;
use crate::star::Star;

/// Owner of the running loop: the canvas, the scheduler and the
/// `SceneConfig` that sets tick pacing, star field and ship tuning.
pub struct Scene {
    canvas: Canvas,
    scheduler: Scheduler,
    config: SceneConfig,
    /// Ticks left before another launch is allowed.
    fire_cooldown: u32,
    /// Shots launched since the last `take_launches`.
    launches: u32,
}

impl Scene {
    /// Build the opening scene: `config.star_count` random stars, one shot
    /// already leaving the ship's starting position, and the ship itself.
    ///
    /// Fails with `SceneError::CanvasTooSmall` when the ship does not fit.
    pub fn new(
        config: SceneConfig,
        rows: u16,
        cols: u16,
        frames: [Sprite; 2],
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let ship = Ship::new(frames, rows, cols, config.ship_speed)?;

        let mut scheduler = Scheduler::new();
        for _ in 0..config.star_count {
            scheduler.register(Box::new(Star::random(rng, &config, rows, cols)));
        }

        scheduler.register(Box::new(Projectile::new(ship.position())));
        scheduler.register(Box::new(ship));

        log::info!(
            "scene {}x{}: {} stars, tick {:?}",
            cols,
            rows,
            config.star_count,
            config.tick
        );

        Ok(Self {
            canvas: Canvas::new(rows, cols),
            scheduler,
            config,
            fire_cooldown: 0,
            launches: 1,
        })
    }

    /// Run one scheduler tick with this tick's input, then launch a shot if
    /// fire was requested and the cooldown allows it.
    pub fn tick(&mut self, controls: Controls) -> Result<()> {
        let mut frame = TickFrame::new(&mut self.canvas, controls);
        self.scheduler.tick(&mut frame)?;
        let muzzle = frame.muzzle;

        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
        if controls.fire && self.fire_cooldown == 0 {
            if let Some(start) = muzzle {
                log::debug!("launch at ({}, {})", start.row, start.col);
                self.scheduler.register(Box::new(Projectile::new(start)));
                self.fire_cooldown = self.config.fire_cooldown_ticks;
                self.launches += 1;
            }
        }
        Ok(())
    }

    /// Number of shots launched since the previous call, counting the
    /// opening shot. The display beeps once per tick when this is non-zero.
    pub fn take_launches(&mut self) -> u32 {
        std::mem::take(&mut self.launches)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick
    }
}
