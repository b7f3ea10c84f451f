use crate::constants::{CLOCK_ID, CLOCK_INTERVAL_MS, FORM_ID, SUCCESS_ID, TAB_TITLE_INTERVAL_MS};
use crate::core::tab_title::TabTitle;
use crate::core::text::clock_label;
use crate::display;
use crate::dom::{self, DomError};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn start_clock(document: &web::Document) -> Result<(), DomError> {
    let clock = dom::element_by_id(document, CLOCK_ID)?;
    let window = dom::window()?;
    let tick = move || {
        let now = js_sys::Date::new_0();
        clock.set_text_content(Some(&clock_label(now.get_hours(), now.get_minutes(), now.get_seconds())));
    };
    let cb = dom::leak_callback(tick);
    _ = cb.call0(&wasm_bindgen::JsValue::NULL);
    dom::set_interval(&window, CLOCK_INTERVAL_MS, &cb)?;
    Ok(())
}

struct TitleRotation {
    title: TabTitle,
    timer: Option<i32>,
}

pub fn wire_tab_title(document: &web::Document) -> Result<(), DomError> {
    let window = dom::window()?;
    let state = Rc::new(RefCell::new(TitleRotation {
        title: TabTitle::default(),
        timer: None,
    }));

    let doc_tick = document.clone();
    let state_tick = state.clone();
    let rotate = dom::leak_callback(move || {
        let frame = state_tick.borrow_mut().title.next_frame();
        doc_tick.set_title(frame);
    });

    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move |_: web::Event| {
        let mut s = state.borrow_mut();
        if let Some(handle) = s.timer.take() {
            window.clear_interval_with_handle(handle);
        }
        if doc.hidden() {
            match dom::set_interval(&window, TAB_TITLE_INTERVAL_MS, &rotate) {
                Ok(handle) => s.timer = Some(handle),
                Err(e) => log::warn!("[title] rotation not started: {}", e),
            }
        } else {
            doc.set_title(s.title.reset());
        }
    });
    Ok(())
}

pub fn wire_signup_form(document: &web::Document) -> Result<(), DomError> {
    let form = dom::html_element_by_id(document, FORM_ID)?;
    let success = dom::html_element_by_id(document, SUCCESS_ID)?;
    let form_hide = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        display::hide(&form_hide);
        display::show(&success, "block");
    });
    Ok(())
}
