use crate::constants::{COORDS_ID, HOVER_SELECTOR};
use crate::core::text::coords_label;
use crate::dom;
use crate::frame::PointerDriver;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Whether the element under (x, y) is something clickable.
fn hit_test_hover(document: &web::Document, x: f32, y: f32) -> bool {
    document
        .element_from_point(x, y)
        .and_then(|el| el.closest(HOVER_SELECTOR).ok().flatten())
        .is_some()
}

pub fn wire_pointer_move(document: &web::Document, driver: Rc<RefCell<PointerDriver>>) {
    let doc = document.clone();
    let readout = document.get_element_by_id(COORDS_ID);
    if readout.is_none() {
        log::warn!("[pointer] missing #{}, coordinate readout disabled", COORDS_ID);
    }
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        if let Some(el) = &readout {
            el.set_text_content(Some(&coords_label(pos.x, pos.y)));
        }
        let hover = hit_test_hover(&doc, pos.x, pos.y);
        driver.borrow_mut().trail.on_move(pos, hover);
    });
}

/// Call `on_resize` with the new viewport size whenever the window resizes.
pub fn wire_resize(window: &web::Window, mut on_resize: impl FnMut(u32, u32) + 'static) {
    let wnd = window.clone();
    dom::add_listener(window, "resize", move |_: web::Event| {
        let (w, h) = dom::viewport_size(&wnd);
        on_resize(w, h);
    });
}
