// Host-side tests for tuning constants and their relationships.

use graft_fx::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn rates_are_within_reasonable_bounds() {
    // Per-frame decays must finish within a few seconds at 60 Hz
    assert!(TRAIL_DECAY > 0.0 && TRAIL_DECAY < 1.0);
    assert!(RIPPLE_DECAY > 0.0 && RIPPLE_DECAY < 1.0);

    // Easing must lag but never overshoot
    assert!(EASE_FACTOR > 0.0 && EASE_FACTOR < 1.0);

    assert!(DENSITY_TOUCH > 0.0 && DENSITY_TOUCH < DENSITY_POINTER && DENSITY_POINTER < 1.0);
    assert!(CELL_SPEED_MIN > 0.0 && CELL_SPEED_SPAN > 0.0);
    assert!(CELL_ALPHA_PEAK > 0.0 && CELL_ALPHA_PEAK <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_variants_are_larger() {
    assert!(GLOW_INNER_HOVER > GLOW_INNER);
    assert!(GLOW_OUTER_HOVER > GLOW_OUTER);
    assert!(DNA_RADIUS_HOVER > DNA_RADIUS);
    assert!(RING_RADIUS_HOVER > RING_RADIUS);

    // Halo reaches past the grid zone
    assert!(GLOW_OUTER > GLOW_INNER);
    assert!(GLOW_HOT_CORE < 1.0 && GLOW_BRIGHT_CORE < GLOW_HOT_CORE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_lifetimes_cover_their_animations() {
    assert!(BURST_PARTICLE_LIFETIME_MS > BURST_ANIMATION_MS);
    assert!(BURST_RING_LIFETIME_MS > BURST_PARTICLE_LIFETIME_MS);
    assert!(BURST_RING_LIFETIME_MS > BURST_INNER_DELAY_MS);
    assert!(BURST_INNER_FRACTION < 1.0);
    assert!(TRAIL_SIZE_MIN < TRAIL_SIZE_MAX);
    assert_eq!(DNA_POINTS % 2, 0);
}
