use crate::constants::BURST_STYLESHEET;
use crate::core::Transient;
use crate::dom::{self, DomError};
use crate::frame::TouchDriver;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn install_burst_styles(document: &web::Document) -> Result<(), DomError> {
    let head = document.head().ok_or(DomError::MissingElement("head"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(BURST_STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}

fn mount(document: &web::Document, body: &web::HtmlElement, t: &Transient) -> Result<web::Element, DomError> {
    let el = document.create_element("div")?;
    if let Some(class) = t.class_name() {
        el.set_class_name(class);
    }
    el.set_attribute("style", &t.css())?;
    body.append_child(&el)?;
    Ok(el)
}

pub fn wire_touch_start(document: &web::Document, driver: Rc<RefCell<TouchDriver>>) -> Result<(), DomError> {
    let body = document.body().ok_or(DomError::MissingElement("body"))?;
    let doc = document.clone();
    dom::add_passive_listener(document, "touchstart", move |ev: web::TouchEvent| {
        let touches = ev.changed_touches();
        for i in 0..touches.length() {
            let Some(touch) = touches.get(i) else {
                continue;
            };
            let pos = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
            let mut d = driver.borrow_mut();
            for t in d.touch(pos) {
                match mount(&doc, &body, &t) {
                    Ok(el) => {
                        d.elements.insert(t.id, el);
                    }
                    Err(e) => log::debug!("[touch] could not mount transient: {}", e),
                }
            }
        }
    });
    Ok(())
}
