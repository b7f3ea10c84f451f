// Host-side tests for the pixel background.

use graft_fx::core::constants::{CELL_ALPHA_PEAK, CELL_SIZE, DENSITY_POINTER, DENSITY_TOUCH};
use graft_fx::core::field::{cell_alpha, expected_cell_count, grid_dims};
use graft_fx::core::{DrawOp, DrawList, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn alpha_stays_within_peak_over_full_phase() {
    for i in 0..=1000 {
        let p = i as f32 / 1000.0;
        let a = cell_alpha(p);
        assert!((0.0..=CELL_ALPHA_PEAK).contains(&a), "alpha {a} out of range at phase {p}");
    }
    assert!((cell_alpha(0.5) - CELL_ALPHA_PEAK).abs() < 1e-6);
}

#[test]
fn alpha_is_continuous_across_wrap() {
    let before = cell_alpha(0.9999);
    let after = cell_alpha(0.0);
    assert!((before - after).abs() < 1e-3, "jump at wrap: {before} -> {after}");
}

#[test]
fn grid_dims_round_up_partial_cells() {
    assert_eq!(grid_dims(24, 24), (1, 1));
    assert_eq!(grid_dims(25, 48), (2, 2));
    assert_eq!(grid_dims(0, 0), (0, 0));
}

#[test]
fn cells_are_grid_aligned_and_inside_viewport() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut field = ParticleField::new(0.5);
    field.initialize(640, 480, &mut rng);
    assert!(!field.is_empty());
    for c in field.cells() {
        assert_eq!(c.x % CELL_SIZE as i32, 0);
        assert_eq!(c.y % CELL_SIZE as i32, 0);
        assert!(c.x < 640 && c.y < 480);
        assert!((0.0..1.0).contains(&c.life));
        assert!(c.speed >= 0.003 && c.speed <= 0.009);
        assert!(c.size == 2.0 || c.size == 4.0);
    }
}

fn mean_count(width: u32, height: u32, density: f64, runs: u64) -> f64 {
    let mut total = 0usize;
    for seed in 0..runs {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new(density);
        field.initialize(width, height, &mut rng);
        total += field.len();
    }
    total as f64 / runs as f64
}

#[test]
fn cell_count_matches_density_expectation() {
    // 100 x 100 grid
    let (w, h) = (2400, 2400);
    for density in [DENSITY_POINTER, DENSITY_TOUCH] {
        let expected = expected_cell_count(w, h, density);
        let mean = mean_count(w, h, density, 20);
        // sd of the mean is well under 10 cells here
        assert!(
            (mean - expected).abs() < 30.0,
            "density {density}: mean {mean} vs expected {expected}"
        );
    }
    assert!(mean_count(w, h, DENSITY_TOUCH, 5) < mean_count(w, h, DENSITY_POINTER, 5));
}

#[test]
fn resize_regenerates_the_whole_field() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = ParticleField::new(0.3);
    field.initialize(1920, 1080, &mut rng);
    let big = field.len();
    field.initialize(240, 240, &mut rng);
    assert!(field.len() < big);
    assert!(field.len() <= 100);
    assert!(field.cells().iter().all(|c| c.x < 240 && c.y < 240));
}

#[test]
fn advance_wraps_phase_into_unit_interval() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut field = ParticleField::new(0.2);
    field.initialize(480, 480, &mut rng);
    let start: Vec<f32> = field.cells().iter().map(|c| c.life).collect();
    field.advance();
    for (c, s) in field.cells().iter().zip(&start) {
        let expected = (s + c.speed) % 1.0;
        assert!((c.life - expected).abs() < 1e-6);
    }
    for _ in 0..1000 {
        field.advance();
    }
    assert!(field.cells().iter().all(|c| (0.0..1.0).contains(&c.life)));
}

#[test]
fn render_clears_then_draws_every_cell() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = ParticleField::new(0.1);
    field.initialize(960, 540, &mut rng);
    let mut list = DrawList::new();
    field.render(&mut list);
    assert_eq!(list.ops().first(), Some(&DrawOp::Clear));
    assert_eq!(list.len(), field.len() + 1);
    for (op, cell) in list.ops()[1..].iter().zip(field.cells()) {
        match op {
            DrawOp::Rect { x, y, alpha, color, .. } => {
                assert_eq!(*x, cell.x as f32);
                assert_eq!(*y, cell.y as f32);
                assert_eq!(*color, cell.color);
                assert!((*alpha - cell_alpha(cell.life)).abs() < 1e-6);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }
}
