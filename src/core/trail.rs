//! Pointer replacement: fading trail, eased "DNA" ornament and crosshair.
//!
//! [`PointerTrail::on_move`] records input; [`PointerTrail::advance`] steps
//! decay, easing and rotation once per frame; the `render_*` methods only
//! read state.

use super::color::{Rgba, GREEN, LIME, ORANGE, PALETTE, SKY, WHITE};
use super::constants::*;
use super::draw::{DrawList, DrawOp, Shadow};
use super::glow::Glow;
use glam::Vec2;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::f32::consts::{PI, TAU};

const DNA_LINK: Rgba = Rgba::rgba(127, 255, 95, 0.18);
const RING: Rgba = Rgba::rgba(200, 255, 128, 0.12);
const CROSSHAIR: Rgba = Rgba::rgba(127, 255, 95, 0.55);
const DNA_NEAR: [Rgba; 3] = [GREEN, LIME, SKY];
const DNA_FAR: [Rgba; 3] = [ORANGE, SKY, LIME];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub life: f32,
    pub color: Rgba,
}

/// Bounded FIFO of recent pointer positions.
///
/// Points whose life reached 0 stay in the sequence until evicted; they are
/// skipped when rendering.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    max_len: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(TRAIL_MAX)
    }
}

impl Trail {
    pub fn with_capacity(max_len: usize) -> Self {
        let max_len = max_len.max(1);
        Self {
            points: VecDeque::with_capacity(max_len + 1),
            max_len,
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn push(&mut self, pos: Vec2) {
        let slot = (self.points.len() as f32 * TRAIL_COLOR_STEP).floor() as usize;
        self.points.push_back(TrailPoint {
            pos,
            life: 1.0,
            color: PALETTE[slot % PALETTE.len()],
        });
        while self.points.len() > self.max_len {
            self.points.pop_front();
        }
    }

    pub fn decay(&mut self) {
        for p in &mut self.points {
            p.life = (p.life - TRAIL_DECAY).max(0.0);
        }
    }

    /// Older points are smaller and dimmer than recent ones.
    pub fn render(&self, list: &mut DrawList) {
        let n = self.points.len() as f32;
        for (i, p) in self.points.iter().enumerate() {
            if p.life <= 0.0 {
                continue;
            }
            let ratio = i as f32 / n;
            let s = (ratio * TRAIL_SIZE_MAX).max(TRAIL_SIZE_MIN);
            list.rect(
                (p.pos.x - s / 2.0).round(),
                (p.pos.y - s / 2.0).round(),
                s.ceil(),
                s.ceil(),
                p.color,
                p.life * ratio * TRAIL_ALPHA,
            );
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Idle,
    Moving,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    /// Last reported pointer position.
    pub raw: Vec2,
    /// Lagged position the ornament is drawn at.
    pub eased: Vec2,
    pub angle: f32,
    pub hover: bool,
    pub phase: PointerPhase,
}

impl PointerState {
    pub fn new(start: Vec2) -> Self {
        Self {
            raw: start,
            eased: start,
            angle: 0.0,
            hover: false,
            phase: PointerPhase::Idle,
        }
    }

    pub fn spin_rate(&self) -> f32 {
        if self.hover {
            SPIN_RATE * 2.0
        } else {
            SPIN_RATE
        }
    }

    pub fn step(&mut self) {
        self.angle = (self.angle + self.spin_rate()).rem_euclid(TAU);
        self.eased = self.eased.lerp(self.raw, EASE_FACTOR);
    }
}

/// Endpoint pairs of the DNA ornament around `center`.
pub fn dna_points(center: Vec2, radius: f32, angle: f32, hover: bool) -> SmallVec<[(Vec2, Vec2); DNA_POINTS]> {
    let spread = if hover { radius * DNA_HOVER_SPREAD } else { radius };
    (0..DNA_POINTS)
        .map(|i| {
            let a = angle + (i as f32 / DNA_POINTS as f32) * TAU;
            let near = Vec2::new(a.cos() * spread, a.sin() * spread * DNA_SQUASH);
            let far = Vec2::new((a + PI).cos() * spread, (a + PI).sin() * spread * DNA_SQUASH);
            ((center + near).round(), (center + far).round())
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct PointerTrail {
    pub pointer: PointerState,
    pub trail: Trail,
}

impl PointerTrail {
    pub fn new(start: Vec2) -> Self {
        Self {
            pointer: PointerState::new(start),
            trail: Trail::default(),
        }
    }

    pub fn on_move(&mut self, pos: Vec2, hover: bool) {
        self.pointer.raw = pos;
        self.pointer.hover = hover;
        self.pointer.phase = PointerPhase::Moving;
        self.trail.push(pos);
    }

    pub fn advance(&mut self) {
        self.trail.decay();
        self.pointer.step();
    }

    /// Glow centered on the raw pointer, wider while hovering.
    pub fn glow(&self) -> Glow {
        let (inner, outer) = if self.pointer.hover {
            (GLOW_INNER_HOVER, GLOW_OUTER_HOVER)
        } else {
            (GLOW_INNER, GLOW_OUTER)
        };
        Glow {
            focus: self.pointer.raw,
            inner_radius: inner,
            outer_radius: outer,
            intensity: 1.0,
        }
    }

    /// Trail, ornament, dashed ring and crosshair on a freshly cleared surface.
    pub fn render_cursor(&self, list: &mut DrawList) {
        list.clear_surface();
        self.trail.render(list);
        self.render_dna(list);
        self.render_ring(list);
        self.render_crosshair(list);
    }

    fn render_dna(&self, list: &mut DrawList) {
        let p = &self.pointer;
        let radius = if p.hover { DNA_RADIUS_HOVER } else { DNA_RADIUS };
        let half = DNA_DOT_SIZE / 2.0;
        for (i, (near, far)) in dna_points(p.eased, radius, p.angle, p.hover).into_iter().enumerate() {
            if i % 2 == 0 {
                list.push(DrawOp::Line {
                    from: near,
                    to: far,
                    color: DNA_LINK,
                    width: 1.0,
                });
            }
            for (pos, color) in [(near, DNA_NEAR[i % 3]), (far, DNA_FAR[i % 3])] {
                list.glowing_rect(
                    pos.x - half,
                    pos.y - half,
                    DNA_DOT_SIZE,
                    DNA_DOT_SIZE,
                    color,
                    1.0,
                    Shadow {
                        color,
                        blur: DNA_DOT_BLUR,
                    },
                );
            }
        }
    }

    fn render_ring(&self, list: &mut DrawList) {
        list.push(DrawOp::DashedCircle {
            center: self.pointer.eased,
            radius: if self.pointer.hover {
                RING_RADIUS_HOVER
            } else {
                RING_RADIUS
            },
            dash: RING_DASH,
            color: RING,
            width: 1.0,
        });
    }

    fn render_crosshair(&self, list: &mut DrawList) {
        let c = self.pointer.raw.round();
        list.glowing_rect(
            c.x - 2.0,
            c.y - 2.0,
            4.0,
            4.0,
            WHITE,
            1.0,
            Shadow {
                color: GREEN,
                blur: CROSSHAIR_DOT_BLUR,
            },
        );
        let (gap, arm) = (CROSSHAIR_GAP, CROSSHAIR_ARM);
        list.rect(c.x - gap - arm + 1.0, c.y, arm, 1.0, CROSSHAIR, 1.0);
        list.rect(c.x + gap, c.y, arm, 1.0, CROSSHAIR, 1.0);
        list.rect(c.x, c.y - gap - arm + 1.0, 1.0, arm, CROSSHAIR, 1.0);
        list.rect(c.x, c.y + gap, 1.0, arm, CROSSHAIR, 1.0);
    }
}
