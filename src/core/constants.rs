//! Effect tuning constants.
//!
//! Rates are expressed per animation frame; the loops run once per display
//! refresh and never scale by elapsed time.

// Particle field
pub const CELL_SIZE: f32 = 24.0; // grid pitch in CSS px
pub const DENSITY_POINTER: f64 = 0.065;
pub const DENSITY_TOUCH: f64 = 0.04;
pub const CELL_SPEED_MIN: f32 = 0.003;
pub const CELL_SPEED_SPAN: f32 = 0.006;
pub const CELL_SIZES: [f32; 2] = [2.0, 4.0];
pub const CELL_ALPHA_PEAK: f32 = 0.3;

// Glow
pub const GLOW_GRID: f32 = 32.0;
pub const GLOW_FALLOFF_EXP: f32 = 2.2;
pub const GLOW_GRID_ALPHA: f32 = 0.6;
pub const GLOW_BRIGHT_CORE: f32 = 0.3; // fraction of inner radius drawn in the bright shade
pub const GLOW_HOT_CORE: f32 = 0.45; // hot-core gradient radius as a fraction of inner radius
pub const GLOW_DOT_SIZE: f32 = 2.0;
pub const GLOW_DOT_BLUR: f32 = 4.0;

// Pointer
pub const TRAIL_MAX: usize = 32;
pub const TRAIL_DECAY: f32 = 0.04;
pub const TRAIL_ALPHA: f32 = 0.65;
pub const TRAIL_SIZE_MAX: f32 = 9.0;
pub const TRAIL_SIZE_MIN: f32 = 2.0;
pub const TRAIL_COLOR_STEP: f32 = 0.13;
pub const EASE_FACTOR: f32 = 0.22;
pub const SPIN_RATE: f32 = 0.045; // rad/frame, doubled while hovering
pub const GLOW_INNER: f32 = 140.0;
pub const GLOW_OUTER: f32 = 240.0;
pub const GLOW_INNER_HOVER: f32 = 200.0;
pub const GLOW_OUTER_HOVER: f32 = 340.0;

// DNA ornament
pub const DNA_POINTS: usize = 8;
pub const DNA_RADIUS: f32 = 24.0;
pub const DNA_RADIUS_HOVER: f32 = 32.0;
pub const DNA_HOVER_SPREAD: f32 = 1.5;
pub const DNA_SQUASH: f32 = 0.38;
pub const DNA_DOT_SIZE: f32 = 4.0;
pub const DNA_DOT_BLUR: f32 = 5.0;

pub const RING_RADIUS: f32 = 34.0;
pub const RING_RADIUS_HOVER: f32 = 44.0;
pub const RING_DASH: [f32; 2] = [4.0, 8.0];

pub const CROSSHAIR_GAP: f32 = 5.0;
pub const CROSSHAIR_ARM: f32 = 6.0;
pub const CROSSHAIR_DOT_BLUR: f32 = 12.0;

// Touch ripples
pub const RIPPLE_DECAY: f32 = 0.022;
pub const RIPPLE_GROWTH: f32 = 200.0;
pub const RIPPLE_BASE_RADIUS: f32 = 60.0;
pub const RIPPLE_INNER_FRACTION: f32 = 0.6;

pub const BURST_RING_MIN: f32 = 180.0;
pub const BURST_RING_SPAN: f32 = 80.0;
pub const BURST_INNER_FRACTION: f32 = 0.55;
pub const BURST_INNER_DELAY_MS: u64 = 80;
pub const BURST_FLASH_SIZE: f32 = 60.0;
pub const BURST_PARTICLES: usize = 6;
pub const BURST_DISTANCE_MIN: f32 = 40.0;
pub const BURST_DISTANCE_SPAN: f32 = 40.0;
pub const BURST_PARTICLE_SIZE: f32 = 4.0;
pub const BURST_ANIMATION_MS: u64 = 600;
pub const BURST_PARTICLE_LIFETIME_MS: u64 = 700;
pub const BURST_RING_LIFETIME_MS: u64 = 950;
