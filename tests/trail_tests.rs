// Host-side tests for the pointer trail state machine.

use glam::Vec2;
use graft_fx::core::color::{LIME, PALETTE};
use graft_fx::core::constants::{
    DNA_POINTS, EASE_FACTOR, GLOW_INNER, GLOW_INNER_HOVER, RING_RADIUS, RING_RADIUS_HOVER, SPIN_RATE, TRAIL_DECAY,
    TRAIL_MAX,
};
use graft_fx::core::trail::dna_points;
use graft_fx::core::{DrawList, DrawOp, PointerPhase, PointerState, PointerTrail, Trail};

#[test]
fn trail_never_exceeds_max_len() {
    let mut trail = Trail::default();
    for i in 0..500 {
        trail.push(Vec2::new(i as f32, 0.0));
        assert!(trail.len() <= TRAIL_MAX);
    }
    assert_eq!(trail.len(), TRAIL_MAX);
}

#[test]
fn trail_evicts_oldest_first() {
    let mut trail = Trail::with_capacity(4);
    for i in 0..5 {
        trail.push(Vec2::new(i as f32, 0.0));
    }
    let xs: Vec<f32> = trail.iter().map(|p| p.pos.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn trail_color_follows_length_at_push() {
    let mut trail = Trail::default();
    for i in 0..9 {
        trail.push(Vec2::new(i as f32, 0.0));
    }
    let colors: Vec<_> = trail.iter().map(|p| p.color).collect();
    assert_eq!(colors[0], PALETTE[0]);
    assert_eq!(colors[7], PALETTE[0]);
    // floor(8 * 0.13) == 1
    assert_eq!(colors[8], LIME);
}

#[test]
fn decay_clamps_at_zero_and_dead_points_are_skipped() {
    let mut trail = Trail::default();
    trail.push(Vec2::new(1.0, 1.0));
    trail.push(Vec2::new(2.0, 2.0));
    trail.decay();
    assert!(trail.iter().all(|p| (p.life - (1.0 - TRAIL_DECAY)).abs() < 1e-6));

    for _ in 0..40 {
        trail.decay();
    }
    assert!(trail.iter().all(|p| p.life == 0.0));
    assert_eq!(trail.len(), 2);

    let mut list = DrawList::new();
    trail.render(&mut list);
    assert!(list.is_empty());
}

#[test]
fn oldest_live_point_is_invisible_and_newest_is_largest() {
    let mut trail = Trail::default();
    for i in 0..4 {
        trail.push(Vec2::new(100.0 + i as f32 * 10.0, 100.0));
    }
    let mut list = DrawList::new();
    trail.render(&mut list);
    let rects: Vec<(f32, f32)> = list
        .ops()
        .iter()
        .map(|op| match op {
            DrawOp::Rect { w, alpha, .. } => (*w, *alpha),
            other => panic!("unexpected op {other:?}"),
        })
        .collect();
    assert_eq!(rects.len(), 4);
    assert_eq!(rects[0].1, 0.0);
    assert!(rects.windows(2).all(|w| w[0].0 <= w[1].0 && w[0].1 <= w[1].1));
}

#[test]
fn pointer_starts_idle_and_moves_on_input() {
    let mut pt = PointerTrail::new(Vec2::new(400.0, 300.0));
    assert_eq!(pt.pointer.phase, PointerPhase::Idle);
    assert!(pt.trail.is_empty());
    pt.on_move(Vec2::new(10.0, 20.0), false);
    assert_eq!(pt.pointer.phase, PointerPhase::Moving);
    assert_eq!(pt.pointer.raw, Vec2::new(10.0, 20.0));
    assert_eq!(pt.trail.len(), 1);
}

#[test]
fn easing_moves_a_fixed_fraction_toward_raw() {
    let mut state = PointerState::new(Vec2::ZERO);
    state.raw = Vec2::new(100.0, 0.0);
    state.step();
    assert!((state.eased.x - 100.0 * EASE_FACTOR).abs() < 1e-4);
}

#[test]
fn eased_position_stays_strictly_between_line_endpoints() {
    let first = Vec2::new(100.0, 100.0);
    let last = Vec2::new(500.0, 300.0);
    let mut pt = PointerTrail::new(first);
    for i in 0..5 {
        let t = i as f32 / 4.0;
        pt.on_move(first.lerp(last, t), false);
    }
    for _ in 0..5 {
        pt.advance();
    }
    let e = pt.pointer.eased;
    assert!(e.x > first.x && e.x < last.x, "eased x {} outside ({}, {})", e.x, first.x, last.x);
    assert!(e.y > first.y && e.y < last.y, "eased y {} outside ({}, {})", e.y, first.y, last.y);
}

#[test]
fn hover_doubles_rotation_and_widens_glow() {
    let mut pt = PointerTrail::new(Vec2::new(50.0, 50.0));
    pt.advance();
    assert!((pt.pointer.angle - SPIN_RATE).abs() < 1e-6);
    assert_eq!(pt.glow().inner_radius, GLOW_INNER);

    pt.on_move(Vec2::new(60.0, 60.0), true);
    let before = pt.pointer.angle;
    pt.advance();
    assert!((pt.pointer.angle - before - 2.0 * SPIN_RATE).abs() < 1e-6);
    assert_eq!(pt.glow().inner_radius, GLOW_INNER_HOVER);
    assert_eq!(pt.glow().focus, Vec2::new(60.0, 60.0));
}

#[test]
fn dna_points_are_antipodal_pairs() {
    let center = Vec2::new(200.0, 200.0);
    let pairs = dna_points(center, 24.0, 0.3, false);
    assert_eq!(pairs.len(), DNA_POINTS);
    for (near, far) in &pairs {
        let mid = (*near + *far) / 2.0;
        assert!(mid.distance(center) <= 1.0, "pair not centered: {near:?} {far:?}");
        assert!(near.distance(center) <= 25.0);
    }
    let wide = dna_points(center, 24.0, 0.0, true);
    assert!(wide[0].0.distance(center) > 30.0);
}

#[test]
fn cursor_render_draws_ring_and_links() {
    let mut pt = PointerTrail::new(Vec2::new(300.0, 300.0));
    let mut list = DrawList::new();
    pt.render_cursor(&mut list);
    assert_eq!(list.ops()[0], DrawOp::Clear);

    let rings: Vec<f32> = list
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::DashedCircle { radius, .. } => Some(*radius),
            _ => None,
        })
        .collect();
    assert_eq!(rings, vec![RING_RADIUS]);
    let links = list.ops().iter().filter(|op| matches!(op, DrawOp::Line { .. })).count();
    assert_eq!(links, DNA_POINTS / 2);

    pt.on_move(Vec2::new(300.0, 300.0), true);
    list.reset();
    pt.render_cursor(&mut list);
    assert!(list
        .ops()
        .iter()
        .any(|op| matches!(op, DrawOp::DashedCircle { radius, .. } if *radius == RING_RADIUS_HOVER)));
}

#[test]
fn crosshair_dot_sits_on_raw_pointer() {
    let mut pt = PointerTrail::new(Vec2::ZERO);
    pt.on_move(Vec2::new(120.4, 80.6), false);
    let mut list = DrawList::new();
    pt.render_cursor(&mut list);
    let dot = list.ops().iter().find_map(|op| match op {
        DrawOp::Rect { x, y, w, shadow: Some(s), .. } if *w == 4.0 && s.blur == 12.0 => Some((*x, *y)),
        _ => None,
    });
    assert_eq!(dot, Some((118.0, 79.0)));
}
