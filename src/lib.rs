//! Cooperative terminal starfield: twinkling stars, a steerable ship and
//! its projectiles, all driven one step per tick by a single scheduler.

pub mod canvas;
pub mod compute;
pub mod config;
pub mod controls;
pub mod entities;
pub mod error;
pub mod logging;
pub mod projectile;
pub mod scene;
pub mod scheduler;
pub mod ship;
pub mod sprite;
pub mod star;
