mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{event, event::Event, terminal};
use rand::thread_rng;

use cosmic_game::canvas::Canvas;
use cosmic_game::config::SceneConfig;
use cosmic_game::controls;
use cosmic_game::logging;
use cosmic_game::scene::Scene;
use cosmic_game::sprite::{load_ship_frames, Sprite};

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // Report log file trouble while the terminal is still readable.
    if let Err(err) = logging::init() {
        eprintln!("warning: {err}; logging to stderr");
    }

    let config = SceneConfig::from_env();
    // Missing frames are fatal before the screen is touched.
    let frames = load_ship_frames(&config.frames_dir)
        .with_context(|| format!("loading ship frames from {}", config.frames_dir.display()))?;

    let mut out = BufWriter::new(stdout());
    display::enter(&mut out).context("entering full-screen mode")?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the tick loop never blocks on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, config, frames);

    // Always restore the terminal
    let _ = display::leave(&mut out);
    log::info!("scene stopped");

    result
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: SceneConfig,
    frames: [Sprite; 2],
) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut rng = thread_rng();
    let mut scene = Scene::new(config, rows, cols, frames, &mut rng)?;
    let tick = scene.tick_interval();
    let mut shown: Option<Canvas> = None;

    loop {
        let tick_start = Instant::now();

        let input = controls::sample(rx.try_iter());
        if input.quit {
            return Ok(());
        }

        scene.tick(input.controls)?;
        if scene.take_launches() > 0 {
            display::beep(out)?;
        }
        display::render(out, scene.canvas(), shown.as_ref())?;
        match shown.as_mut() {
            Some(prev) => prev.clone_from(scene.canvas()),
            None => shown = Some(scene.canvas().clone()),
        }

        let elapsed = tick_start.elapsed();
        if elapsed < tick {
            thread::sleep(tick - elapsed);
        }
    }
}
