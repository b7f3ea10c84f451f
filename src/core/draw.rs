//! Recorded 2D draw operations.
//!
//! Effects never touch a canvas directly. They append [`DrawOp`]s to a
//! [`DrawList`] and the web layer replays the list onto a 2D context, which
//! keeps every effect testable on the host.

use super::color::Rgba;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Clear the whole surface to transparent.
    Clear,
    /// Filled axis-aligned rectangle painted with a global alpha.
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
        alpha: f32,
        shadow: Option<Shadow>,
    },
    /// Fill the whole surface with a radial gradient centered on `center`.
    RadialFill {
        center: Vec2,
        radius: f32,
        stops: SmallVec<[GradientStop; 4]>,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    DashedCircle {
        center: Vec2,
        radius: f32,
        dash: [f32; 2],
        color: Rgba,
        width: f32,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded ops but keep the allocation for the next frame.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn clear_surface(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, alpha: f32) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            w,
            h,
            color,
            alpha: alpha.clamp(0.0, 1.0),
            shadow: None,
        });
    }

    pub fn glowing_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, alpha: f32, shadow: Shadow) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            w,
            h,
            color,
            alpha: alpha.clamp(0.0, 1.0),
            shadow: Some(shadow),
        });
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
