//! Per-surface redraw loops driven by `requestAnimationFrame`.

use crate::core::{DrawList, ParticleField, PointerTrail, RippleField, Transient, TransientId, Transients};
use crate::render::Surface;
use fnv::FnvHashMap;
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One animated surface: step state, then repaint from scratch.
pub trait FrameDriver {
    fn frame(&mut self);
}

pub struct BackgroundDriver {
    pub surface: Surface,
    pub field: ParticleField,
    pub rng: StdRng,
    list: DrawList,
}

impl BackgroundDriver {
    pub fn new(surface: Surface, field: ParticleField, rng: StdRng) -> Self {
        Self {
            surface,
            field,
            rng,
            list: DrawList::new(),
        }
    }

    /// Regenerate the whole field for a new viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.field.initialize(width, height, &mut self.rng);
    }
}

impl FrameDriver for BackgroundDriver {
    fn frame(&mut self) {
        self.field.advance();
        self.list.reset();
        self.field.render(&mut self.list);
        self.surface.paint(&self.list);
    }
}

pub struct PointerDriver {
    pub cursor: Surface,
    pub glow: Surface,
    pub trail: PointerTrail,
    cursor_list: DrawList,
    glow_list: DrawList,
}

impl PointerDriver {
    pub fn new(cursor: Surface, glow: Surface, trail: PointerTrail) -> Self {
        Self {
            cursor,
            glow,
            trail,
            cursor_list: DrawList::new(),
            glow_list: DrawList::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.cursor.resize(width, height);
        self.glow.resize(width, height);
    }
}

impl FrameDriver for PointerDriver {
    fn frame(&mut self) {
        self.trail.advance();

        self.glow_list.reset();
        self.trail.glow().render(&mut self.glow_list, self.glow.size());
        self.glow.paint(&self.glow_list);

        self.cursor_list.reset();
        self.trail.render_cursor(&mut self.cursor_list);
        self.cursor.paint(&self.cursor_list);
    }
}

pub struct TouchDriver {
    pub glow: Surface,
    pub ripples: RippleField,
    pub transients: Transients,
    pub rng: StdRng,
    /// DOM nodes backing live transients.
    pub elements: FnvHashMap<TransientId, web::Element>,
    epoch: Instant,
    list: DrawList,
}

impl TouchDriver {
    pub fn new(glow: Surface, rng: StdRng) -> Self {
        Self {
            glow,
            ripples: RippleField::new(),
            transients: Transients::new(),
            rng,
            elements: FnvHashMap::default(),
            epoch: Instant::now(),
            list: DrawList::new(),
        }
    }

    /// Time since the driver started; transient lifetimes are measured on it.
    pub fn now(&self) -> std::time::Duration {
        self.epoch.elapsed()
    }

    /// Record a touch: glow ripple plus a burst of transients. Returns the new transients.
    pub fn touch(&mut self, pos: Vec2) -> Vec<Transient> {
        let now = self.now();
        self.ripples.push(pos);
        self.transients.spawn_burst(pos, now, &mut self.rng).to_vec()
    }

    fn sweep_transients(&mut self) {
        let now = self.now();
        for id in self.transients.sweep(now) {
            if let Some(el) = self.elements.remove(&id) {
                el.remove();
            }
        }
    }
}

impl FrameDriver for TouchDriver {
    fn frame(&mut self) {
        self.sweep_transients();
        self.ripples.advance();
        self.list.reset();
        self.ripples.render(&mut self.list, self.glow.size());
        self.glow.paint(&self.list);
    }
}

pub fn start_loop<D: FrameDriver + 'static>(driver: Rc<RefCell<D>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        driver.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
