//! Decorative page effects for Graft Studios, compiled to WebAssembly.
//!
//! The effect state and math live in [`core`] and build on any target; the
//! browser wiring below is only compiled for `wasm32`.

pub mod config;
pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod display;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::config::EffectsConfig;
    use crate::constants::{BACKGROUND_CANVAS_ID, CURSOR_CANVAS_ID, GLOW_CANVAS_ID};
    use crate::core::{ParticleField, PointerTrail};
    use crate::frame::{self, BackgroundDriver, PointerDriver, TouchDriver};
    use crate::render::Surface;
    use crate::{dom, events};
    use anyhow::Context;
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("graft-fx starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let window = dom::window()?;
        let document = dom::window_document()?;
        let config = EffectsConfig::for_device(dom::detect_device(&window));
        log::info!("[init] device={:?} density={}", config.device, config.density);
        dom::apply_device_cursor(&document, config.device);

        // A missing element only disables its own component.
        run_component("background", || start_background(&window, &document, &config));
        if config.pointer_trail {
            run_component("pointer", || start_pointer(&window, &document));
        }
        if config.touch_ripples {
            run_component("touch", || start_touch(&window, &document));
        }
        run_component("clock", || Ok(events::start_clock(&document)?));
        run_component("tab-title", || Ok(events::wire_tab_title(&document)?));
        run_component("form", || Ok(events::wire_signup_form(&document)?));
        Ok(())
    }

    fn run_component(name: &str, start: impl FnOnce() -> anyhow::Result<()>) {
        match start() {
            Ok(()) => log::info!("[{}] started", name),
            Err(e) => log::warn!("[{}] disabled: {:#}", name, e),
        }
    }

    fn start_background(window: &web::Window, document: &web::Document, config: &EffectsConfig) -> anyhow::Result<()> {
        let surface = Surface::from_id(document, BACKGROUND_CANVAS_ID).context("background surface")?;
        let driver = Rc::new(RefCell::new(BackgroundDriver::new(
            surface,
            ParticleField::new(config.density),
            StdRng::from_entropy(),
        )));
        let (w, h) = dom::viewport_size(window);
        driver.borrow_mut().resize(w, h);

        let on_resize = driver.clone();
        events::wire_resize(window, move |w, h| on_resize.borrow_mut().resize(w, h));
        frame::start_loop(driver);
        Ok(())
    }

    fn start_pointer(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
        let cursor = Surface::from_id(document, CURSOR_CANVAS_ID).context("cursor surface")?;
        let glow = Surface::from_id(document, GLOW_CANVAS_ID).context("glow surface")?;
        let (w, h) = dom::viewport_size(window);
        let center = Vec2::new(w as f32, h as f32) / 2.0;
        let driver = Rc::new(RefCell::new(PointerDriver::new(cursor, glow, PointerTrail::new(center))));
        driver.borrow_mut().resize(w, h);

        let on_resize = driver.clone();
        events::wire_resize(window, move |w, h| on_resize.borrow_mut().resize(w, h));
        events::wire_pointer_move(document, driver.clone());
        frame::start_loop(driver);
        Ok(())
    }

    fn start_touch(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
        let glow = Surface::from_id(document, GLOW_CANVAS_ID).context("glow surface")?;
        let (w, h) = dom::viewport_size(window);
        glow.resize(w, h);
        if let Err(e) = events::install_burst_styles(document) {
            log::warn!("[touch] burst styles not installed: {}", e);
        }
        let driver = Rc::new(RefCell::new(TouchDriver::new(glow, StdRng::from_entropy())));

        let on_resize = driver.clone();
        events::wire_resize(window, move |w, h| on_resize.borrow().glow.resize(w, h));
        events::wire_touch_start(document, driver.clone()).context("touch listener")?;
        frame::start_loop(driver);
        Ok(())
    }
}
