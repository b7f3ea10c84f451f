//! Radial bloom composited onto a transparent overlay.
//!
//! A glow is two radial gradients (a wide soft halo and a tight hot core)
//! plus a dithered grid of small glowing squares whose brightness falls off
//! with `(1 - d / r)^GLOW_FALLOFF_EXP`. The steep curve gives a bloom look
//! without per-pixel work.

use super::color::{Rgba, GREEN, LIME, TRANSPARENT};
use super::constants::*;
use super::draw::{DrawList, DrawOp, GradientStop, Shadow};
use glam::Vec2;
use smallvec::smallvec;

const HALO_STOPS: [(f32, Rgba); 3] = [
    (0.0, Rgba::rgba(127, 255, 95, 0.13)),
    (0.3, Rgba::rgba(127, 255, 95, 0.07)),
    (0.7, Rgba::rgba(200, 255, 128, 0.025)),
];

const HOT_STOPS: [(f32, Rgba); 2] = [
    (0.0, Rgba::rgba(180, 255, 130, 0.18)),
    (0.5, Rgba::rgba(127, 255, 95, 0.07)),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub focus: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub intensity: f32,
}

/// One lit point of the dithered grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPoint {
    pub pos: Vec2,
    pub strength: f32,
    pub bright: bool,
}

/// Falloff of a grid point at `distance` from the focus; 0 outside `inner_radius`.
#[inline]
pub fn grid_strength(distance: f32, inner_radius: f32, intensity: f32) -> f32 {
    if inner_radius <= 0.0 || distance.is_nan() || distance > inner_radius {
        return 0.0;
    }
    let t = (1.0 - distance.max(0.0) / inner_radius).clamp(0.0, 1.0);
    t.powf(GLOW_FALLOFF_EXP) * intensity.max(0.0)
}

impl Glow {
    /// Lit grid points inside the inner radius, clipped to a `bounds` sized surface.
    pub fn grid_points(&self, bounds: Vec2) -> Vec<GlowPoint> {
        let r = self.inner_radius;
        if r <= 0.0 || self.intensity <= 0.0 {
            return Vec::new();
        }
        let x0 = (((self.focus.x - r) / GLOW_GRID).floor() * GLOW_GRID).max(0.0);
        let y0 = (((self.focus.y - r) / GLOW_GRID).floor() * GLOW_GRID).max(0.0);
        let x1 = (((self.focus.x + r) / GLOW_GRID).ceil() * GLOW_GRID).min(bounds.x);
        let y1 = (((self.focus.y + r) / GLOW_GRID).ceil() * GLOW_GRID).min(bounds.y);

        let mut points = Vec::new();
        let mut gx = x0;
        while gx <= x1 {
            let mut gy = y0;
            while gy <= y1 {
                let pos = Vec2::new(gx, gy);
                let dist = pos.distance(self.focus);
                let strength = grid_strength(dist, r, self.intensity);
                if strength > 0.0 {
                    points.push(GlowPoint {
                        pos,
                        strength,
                        bright: dist < r * GLOW_BRIGHT_CORE,
                    });
                }
                gy += GLOW_GRID;
            }
            gx += GLOW_GRID;
        }
        points
    }

    /// Clear the overlay and paint this glow.
    pub fn render(&self, list: &mut DrawList, bounds: Vec2) {
        list.clear_surface();
        self.composite(list, bounds);
    }

    /// Paint this glow on top of whatever the overlay already holds.
    pub fn composite(&self, list: &mut DrawList, bounds: Vec2) {
        let a = self.intensity.max(0.0);

        let mut halo = smallvec![];
        for (offset, color) in HALO_STOPS {
            halo.push(GradientStop {
                offset,
                color: color.with_alpha(color.a * a),
            });
        }
        halo.push(GradientStop {
            offset: 1.0,
            color: TRANSPARENT,
        });
        list.push(DrawOp::RadialFill {
            center: self.focus,
            radius: self.outer_radius.max(0.0),
            stops: halo,
        });

        let mut hot = smallvec![];
        for (offset, color) in HOT_STOPS {
            hot.push(GradientStop {
                offset,
                color: color.with_alpha(color.a * a),
            });
        }
        hot.push(GradientStop {
            offset: 1.0,
            color: TRANSPARENT,
        });
        list.push(DrawOp::RadialFill {
            center: self.focus,
            radius: (self.inner_radius * GLOW_HOT_CORE).max(0.0),
            stops: hot,
        });

        let half = GLOW_DOT_SIZE / 2.0;
        for p in self.grid_points(bounds) {
            list.glowing_rect(
                p.pos.x - half,
                p.pos.y - half,
                GLOW_DOT_SIZE,
                GLOW_DOT_SIZE,
                if p.bright { LIME } else { GREEN },
                p.strength * GLOW_GRID_ALPHA,
                Shadow {
                    color: GREEN,
                    blur: GLOW_DOT_BLUR,
                },
            );
        }
    }
}
