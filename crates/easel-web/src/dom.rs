use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn require_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    element_by_id(document, id).ok_or_else(|| anyhow!("missing #{id}"))
}

pub fn require_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .ok_or_else(|| anyhow!("missing canvas #{id}"))
}

pub fn canvas_context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("2d context error: {e:?}"))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("2d context cast error: {e:?}"))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    let _ = el.set_attribute("style", style);
}

#[inline]
pub fn show(el: &web::Element) {
    let _ = el.set_attribute("style", "");
}

#[inline]
pub fn hide(el: &web::Element) {
    let _ = el.set_attribute("style", "display:none");
}

pub fn viewport_size(window: &web::Window) -> (f32, f32) {
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
    (w as f32, h as f32)
}

/// Match a canvas backing store to its on-screen CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = rect.width() as u32;
    let h_px = rect.height() as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}
