//! Cooperative round-robin scheduling.
//!
//! Every live entity is resumed exactly once per tick, in registration
//! order. There is no preemption and no timeout: an entity that does not
//! return from [`Entity::step`] stalls the whole scene.

use crate::canvas::Canvas;
use crate::entities::{Controls, Position, Step};
use crate::error::Result;

/// Everything an entity may touch while it runs for one tick.
pub struct TickFrame<'a> {
    pub canvas: &'a mut Canvas,
    /// Input sampled once at the start of the tick.
    pub controls: Controls,
    /// Launch point for projectiles, published by the ship each tick.
    pub muzzle: Option<Position>,
}

impl<'a> TickFrame<'a> {
    pub fn new(canvas: &'a mut Canvas, controls: Controls) -> Self {
        Self {
            canvas,
            controls,
            muzzle: None,
        }
    }
}

/// A resumable unit of scene work.
///
/// `step` performs one visible step and must return promptly: either
/// [`Step::Continue`] to be resumed next tick, or [`Step::Done`] to be
/// dropped for good. An `Err` is fatal to the scene.
pub trait Entity {
    fn step(&mut self, frame: &mut TickFrame<'_>) -> Result<Step>;

    /// Short label used in log output.
    fn kind(&self) -> &'static str {
        "entity"
    }
}

/// Ordered registry of live entities.
#[derive(Default)]
pub struct Scheduler {
    entities: Vec<Box<dyn Entity>>,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity; it is first resumed on the next tick.
    pub fn register(&mut self, entity: Box<dyn Entity>) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Labels of the live entities, in resume order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.entities.iter().map(|e| e.kind()).collect()
    }

    /// Run one tick: redraw the border, resume every entity once, then drop
    /// the ones that finished. Returns how many were dropped.
    ///
    /// Completions are collected against the registry as it stood when the
    /// tick began and filtered out afterwards, so a finishing entity never
    /// causes its neighbour to be skipped or resumed twice.
    pub fn tick(&mut self, frame: &mut TickFrame<'_>) -> Result<usize> {
        self.ticks += 1;
        frame.canvas.draw_border();

        let mut finished: Vec<usize> = Vec::new();
        for (i, entity) in self.entities.iter_mut().enumerate() {
            if entity.step(frame)? == Step::Done {
                finished.push(i);
            }
        }

        if finished.is_empty() {
            return Ok(0);
        }

        let tick = self.ticks;
        self.entities = std::mem::take(&mut self.entities)
            .into_iter()
            .enumerate()
            .filter(|(i, entity)| {
                let done = finished.contains(i);
                if done {
                    log::debug!("tick {}: {} #{} finished", tick, entity.kind(), i);
                }
                !done
            })
            .map(|(_, entity)| entity)
            .collect();

        Ok(finished.len())
    }
}
