use cosmic_game::compute::*;
use cosmic_game::config::BlinkCycle;
use cosmic_game::entities::{Bounds, Brightness, Position};

fn cycle() -> BlinkCycle {
    BlinkCycle::new(20, 3, 5, 3)
}

// ── brightness_for_phase ──────────────────────────────────────────────────────

#[test]
fn cycle_length_is_sum_of_bands() {
    assert_eq!(cycle().len(), 31);
    assert_eq!(BlinkCycle::default(), cycle());
}

#[test]
fn dim_band_is_closed_on_the_right() {
    let c = cycle();
    assert_eq!(brightness_for_phase(1, &c), Brightness::Dim);
    assert_eq!(brightness_for_phase(20, &c), Brightness::Dim); // phase == D
    assert_eq!(brightness_for_phase(21, &c), Brightness::Plain); // phase == D + 1
}

#[test]
fn bold_band_boundaries() {
    let c = cycle();
    assert_eq!(brightness_for_phase(23, &c), Brightness::Plain); // D + P1
    assert_eq!(brightness_for_phase(24, &c), Brightness::Bold);
    assert_eq!(brightness_for_phase(28, &c), Brightness::Bold); // D + P1 + B
    assert_eq!(brightness_for_phase(29, &c), Brightness::Plain);
    assert_eq!(brightness_for_phase(31, &c), Brightness::Plain);
}

#[test]
fn phase_zero_is_plain() {
    assert_eq!(brightness_for_phase(0, &cycle()), Brightness::Plain);
}

#[test]
fn bands_follow_a_custom_cycle() {
    let c = BlinkCycle::new(2, 1, 2, 1);
    let bands: Vec<Brightness> = (1..=c.len()).map(|p| brightness_for_phase(p, &c)).collect();
    assert_eq!(
        bands,
        vec![
            Brightness::Dim,
            Brightness::Dim,
            Brightness::Plain,
            Brightness::Bold,
            Brightness::Bold,
            Brightness::Plain,
        ]
    );
}

// ── next_phase ────────────────────────────────────────────────────────────────

#[test]
fn next_phase_counts_up_then_wraps_to_one() {
    assert_eq!(next_phase(1, 31), 2);
    assert_eq!(next_phase(30, 31), 31);
    assert_eq!(next_phase(31, 31), 1);
}

// ── drift_row ─────────────────────────────────────────────────────────────────

#[test]
fn drift_moves_one_row_down() {
    assert_eq!(drift_row(5, 23), 6);
}

#[test]
fn drift_may_reach_last_interior_row() {
    // 24-row canvas: border at 23, last interior row 22
    assert_eq!(star_bottom_edge(24), 23);
    assert_eq!(drift_row(21, 23), 22);
}

#[test]
fn drift_wraps_to_row_one_at_the_edge() {
    assert_eq!(drift_row(22, 23), 1);
}

// ── ship bounds & clamping ────────────────────────────────────────────────────

#[test]
fn bounds_leave_one_cell_padding() {
    assert_eq!(
        ship_bounds(24, 80),
        Bounds {
            top: 1,
            left: 1,
            bottom: 23,
            right: 79
        }
    );
}

#[test]
fn clamp_keeps_inside_positions() {
    let b = ship_bounds(24, 80);
    let p = Position::new(10, 30);
    assert_eq!(clamp_ship(p, &b, 9, 5), p);
}

#[test]
fn clamp_pins_each_axis_independently() {
    let b = ship_bounds(24, 80);
    // Past the bottom only: column survives untouched
    assert_eq!(clamp_ship(Position::new(40, 30), &b, 9, 5), Position::new(14, 30));
    // Past the left only
    assert_eq!(clamp_ship(Position::new(10, -7), &b, 9, 5), Position::new(10, 1));
    // Past the top-right corner
    assert_eq!(clamp_ship(Position::new(-3, 200), &b, 9, 5), Position::new(1, 74));
}

#[test]
fn clamp_holds_for_every_candidate() {
    let b = ship_bounds(20, 30);
    let (rows, cols) = (4, 3);
    for row in -10..40 {
        for col in -10..50 {
            let p = clamp_ship(Position::new(row, col), &b, rows, cols);
            assert!(b.top <= p.row && p.row <= b.bottom - rows, "row {p:?}");
            assert!(b.left <= p.col && p.col <= b.right - cols, "col {p:?}");
        }
    }
}

#[test]
fn centre_of_canvas() {
    assert_eq!(centre(24, 80), Position::new(12, 40));
    assert_eq!(centre(25, 81), Position::new(12, 40));
}

// ── projectile helpers ────────────────────────────────────────────────────────

#[test]
fn to_cell_rounds_to_nearest() {
    assert_eq!(to_cell(9.7, 4.0), Position::new(10, 4));
    assert_eq!(to_cell(9.4, 4.0), Position::new(9, 4));
}

#[test]
fn in_flight_excludes_the_border() {
    assert!(in_flight(Position::new(1, 1), 10, 10));
    assert!(in_flight(Position::new(8, 8), 10, 10));
    assert!(!in_flight(Position::new(0, 5), 10, 10));
    assert!(!in_flight(Position::new(9, 5), 10, 10));
    assert!(!in_flight(Position::new(5, 0), 10, 10));
    assert!(!in_flight(Position::new(5, 9), 10, 10));
}
