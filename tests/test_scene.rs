use std::path::Path;

use cosmic_game::config::SceneConfig;
use cosmic_game::entities::Controls;
use cosmic_game::error::SceneError;
use cosmic_game::scene::Scene;
use cosmic_game::sprite::{load_ship_frames, Sprite};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn frames() -> [Sprite; 2] {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("frames");
    load_ship_frames(&dir).unwrap()
}

fn make_scene(star_count: usize) -> Scene {
    let config = SceneConfig {
        star_count,
        ..SceneConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    Scene::new(config, 30, 60, frames(), &mut rng).unwrap()
}

fn fire() -> Controls {
    Controls {
        fire: true,
        ..Controls::default()
    }
}

#[test]
fn opening_scene_holds_stars_shot_and_ship() {
    let scene = make_scene(10);
    let kinds = scene.scheduler().kinds();
    assert_eq!(kinds.len(), 12);
    assert!(kinds[..10].iter().all(|k| *k == "star"));
    assert_eq!(&kinds[10..], &["projectile", "ship"]);
}

#[test]
fn first_tick_draws_border_and_ship() {
    let mut scene = make_scene(0);
    scene.tick(Controls::default()).unwrap();
    let canvas = scene.canvas();
    assert_eq!(canvas.get(0, 0).unwrap().ch, '┌');
    assert_eq!(canvas.get(29, 59).unwrap().ch, '┘');
    // Ship nose sits two columns into the sprite's top row
    let glyphs = canvas.cells().iter().filter(|c| c.ch == '.').count();
    assert!(glyphs >= 1);
}

#[test]
fn opening_shot_eventually_leaves() {
    let mut scene = make_scene(5);
    for _ in 0..200 {
        scene.tick(Controls::default()).unwrap();
    }
    assert_eq!(scene.scheduler().len(), 6);
    assert!(!scene.scheduler().kinds().contains(&"projectile"));
}

#[test]
fn fire_launches_a_shot_after_the_tick() {
    let mut scene = make_scene(0);
    assert_eq!(scene.scheduler().len(), 2);
    scene.tick(fire()).unwrap();
    assert_eq!(scene.scheduler().len(), 3);
    assert_eq!(scene.scheduler().kinds().last(), Some(&"projectile"));
}

#[test]
fn fire_respects_the_cooldown() {
    let mut scene = make_scene(0);
    let cooldown = SceneConfig::default().fire_cooldown_ticks as usize;

    scene.tick(fire()).unwrap();
    let after_first = scene.scheduler().len();
    for _ in 1..cooldown {
        scene.tick(fire()).unwrap();
    }
    // Still only one extra shot (the opening shot is still in flight)
    assert_eq!(scene.scheduler().len(), after_first);

    scene.tick(fire()).unwrap();
    assert_eq!(scene.scheduler().len(), after_first + 1);
}

#[test]
fn stars_never_end_the_scene() {
    let mut scene = make_scene(50);
    for _ in 0..300 {
        scene.tick(Controls::default()).unwrap();
    }
    assert_eq!(scene.scheduler().len(), 51);
}

#[test]
fn terminal_shorter_than_the_rocket_is_rejected() {
    // The bundled rocket is 9x5, so the scene needs 11x7
    for (rows, cols) in [(9, 40), (10, 40), (30, 6)] {
        let mut rng = StdRng::seed_from_u64(1);
        match Scene::new(SceneConfig::default(), rows, cols, frames(), &mut rng) {
            Err(SceneError::CanvasTooSmall {
                min_rows: 11,
                min_cols: 7,
                ..
            }) => {}
            Err(other) => panic!("{rows}x{cols}: unexpected error {other}"),
            Ok(_) => panic!("{rows}x{cols}: scene should not start"),
        }
    }
}

#[test]
fn smallest_terminal_keeps_the_border_clear() {
    let config = SceneConfig {
        star_count: 0,
        ..SceneConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    let mut scene = Scene::new(config, 11, 7, frames(), &mut rng).unwrap();
    for _ in 0..10 {
        scene.tick(Controls { rows: 1, cols: 1, fire: false }).unwrap();
    }
    let canvas = scene.canvas();
    for col in 1..6 {
        assert_eq!(canvas.get(10, col).unwrap().ch, '─');
    }
}

#[test]
fn launches_are_counted_for_the_bell() {
    let mut scene = make_scene(0);
    // The opening shot
    assert_eq!(scene.take_launches(), 1);
    assert_eq!(scene.take_launches(), 0);

    scene.tick(Controls::default()).unwrap();
    assert_eq!(scene.take_launches(), 0);

    scene.tick(fire()).unwrap();
    assert_eq!(scene.take_launches(), 1);
}
