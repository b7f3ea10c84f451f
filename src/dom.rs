use crate::config::Device;
use crate::constants::{CURSOR_CANVAS_ID, TOUCH_BODY_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("#{0} is not a <{1}>")]
    WrongElement(&'static str, &'static str),
    #[error("#{0} has no 2d context")]
    NoContext(&'static str),
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(v: JsValue) -> Self {
        DomError::Js(format!("{:?}", v))
    }
}

#[inline]
pub fn window() -> Result<web::Window, DomError> {
    web::window().ok_or(DomError::NoWindow)
}

#[inline]
pub fn window_document() -> Result<web::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn element_by_id(document: &web::Document, id: &'static str) -> Result<web::Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))
}

pub fn html_element_by_id(document: &web::Document, id: &'static str) -> Result<web::HtmlElement, DomError> {
    element_by_id(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| DomError::WrongElement(id, "html element"))
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w.max(0.0) as u32, h.max(0.0) as u32)
}

pub fn detect_device(window: &web::Window) -> Device {
    let has_ontouchstart = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    let touch_points = window.navigator().max_touch_points();
    Device::from_touch_support(has_ontouchstart || touch_points > 0)
}

/// Touch devices keep the native cursor; pointer devices get the canvas one.
pub fn apply_device_cursor(document: &web::Document, device: Device) {
    let Some(body) = document.body() else {
        log::warn!("[dom] no <body>, cursor setup skipped");
        return;
    };
    let style = body.style();
    if device.is_touch() {
        _ = body.class_list().add_1(TOUCH_BODY_CLASS);
        _ = style.set_property("cursor", "auto");
        if let Ok(cur) = html_element_by_id(document, CURSOR_CANVAS_ID) {
            _ = cur.style().set_property("display", "none");
        }
    } else {
        _ = style.set_property("cursor", "none");
    }
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Same as [`add_listener`] but registered as passive.
pub fn add_passive_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Run `tick` every `interval_ms`; returns the interval handle.
pub fn set_interval(window: &web::Window, interval_ms: i32, tick: &js_sys::Function) -> Result<i32, DomError> {
    Ok(window.set_interval_with_callback_and_timeout_and_arguments_0(tick, interval_ms)?)
}

/// Leak a closure as a reusable JS function.
pub fn leak_callback(tick: impl FnMut() + 'static) -> js_sys::Function {
    let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
    let f: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    closure.forget();
    f
}
