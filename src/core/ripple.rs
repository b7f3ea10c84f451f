//! Decaying glow ripples spawned by touches.

use super::constants::*;
use super::draw::DrawList;
use super::glow::Glow;
use glam::Vec2;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleRecord {
    pub pos: Vec2,
    pub life: f32,
}

impl RippleRecord {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, life: 1.0 }
    }

    /// Grows from `RIPPLE_BASE_RADIUS` as life drains.
    #[inline]
    pub fn radius(&self) -> f32 {
        (1.0 - self.life.clamp(0.0, 1.0)) * RIPPLE_GROWTH + RIPPLE_BASE_RADIUS
    }

    /// Brightens then dims; 0 at both ends of life.
    #[inline]
    pub fn intensity(&self) -> f32 {
        let life = self.life.clamp(0.0, 1.0);
        ((life * PI).sin() * life).max(0.0)
    }

    pub fn glow(&self) -> Glow {
        let radius = self.radius();
        Glow {
            focus: self.pos,
            inner_radius: radius * RIPPLE_INNER_FRACTION,
            outer_radius: radius,
            intensity: self.intensity(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RippleField {
    records: Vec<RippleRecord>,
}

impl RippleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Vec2) {
        self.records.push(RippleRecord::new(pos));
    }

    pub fn records(&self) -> &[RippleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decay every record and drop the ones that ran out this frame.
    pub fn advance(&mut self) {
        for r in &mut self.records {
            r.life -= RIPPLE_DECAY;
        }
        self.records.retain(|r| r.life > 0.0);
    }

    /// One cleared overlay with every live ripple composited on it.
    pub fn render(&self, list: &mut DrawList, bounds: Vec2) {
        list.clear_surface();
        for r in &self.records {
            r.glow().composite(list, bounds);
        }
    }
}
