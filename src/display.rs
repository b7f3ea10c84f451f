use web_sys as web;

#[inline]
pub fn show(el: &web::HtmlElement, display: &str) {
    _ = el.style().set_property("display", display);
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.style().set_property("display", "none");
}
