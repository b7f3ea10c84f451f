//! Replays recorded [`DrawList`]s onto 2D canvases.

use crate::core::draw::{DrawList, DrawOp, Shadow};
use crate::dom::{self, DomError};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    pub fn from_id(document: &web::Document, id: &'static str) -> Result<Self, DomError> {
        let canvas = dom::element_by_id(document, id)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| DomError::WrongElement(id, "canvas"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(DomError::NoContext(id))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| DomError::NoContext(id))?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the viewport; this also wipes the canvas.
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width.max(1));
        self.canvas.set_height(height.max(1));
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    pub fn paint(&self, list: &DrawList) {
        for op in list.ops() {
            if let Err(e) = self.paint_op(op) {
                log::debug!("[render] draw op failed: {:?}", e);
            }
        }
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_shadow_blur(0.0);
    }

    fn paint_op(&self, op: &DrawOp) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match op {
            DrawOp::Clear => {
                let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
                ctx.clear_rect(0.0, 0.0, w, h);
            }
            DrawOp::Rect {
                x,
                y,
                w,
                h,
                color,
                alpha,
                shadow,
            } => {
                ctx.set_global_alpha(*alpha as f64);
                ctx.set_fill_style_str(&color.css());
                self.set_shadow(shadow.as_ref());
                ctx.fill_rect(*x as f64, *y as f64, *w as f64, *h as f64);
                ctx.set_global_alpha(1.0);
                if shadow.is_some() {
                    ctx.set_shadow_blur(0.0);
                }
            }
            DrawOp::RadialFill {
                center,
                radius,
                stops,
            } => {
                if *radius <= 0.0 {
                    return Ok(());
                }
                let (cx, cy) = (center.x as f64, center.y as f64);
                let grad = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, *radius as f64)?;
                for stop in stops {
                    grad.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.css())?;
                }
                ctx.set_fill_style_canvas_gradient(&grad);
                let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
                ctx.fill_rect(0.0, 0.0, w, h);
            }
            DrawOp::Line {
                from,
                to,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
            DrawOp::DashedCircle {
                center,
                radius,
                dash,
                color,
                width,
            } => {
                let pattern = js_sys::Array::of2(&JsValue::from_f64(dash[0] as f64), &JsValue::from_f64(dash[1] as f64));
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*width as f64);
                ctx.set_line_dash(&pattern)?;
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.stroke();
                ctx.set_line_dash(&js_sys::Array::new())?;
            }
        }
        Ok(())
    }

    fn set_shadow(&self, shadow: Option<&Shadow>) {
        match shadow {
            Some(s) => {
                self.ctx.set_shadow_color(&s.color.css());
                self.ctx.set_shadow_blur(s.blur as f64);
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
    }
}
