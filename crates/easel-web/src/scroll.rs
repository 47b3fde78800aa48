//! Scroll observation: document scroll geometry -> raw progress target.
//!
//! The raw target lands in a shared cell; the frame loop eases the displayed
//! progress toward it.

use std::cell::Cell;
use std::rc::Rc;

use web_sys as web;

use crate::events::ListenerGuard;
use crate::progress::progress_fraction;

fn current_progress(window: &web::Window, document: &web::Document) -> f32 {
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let content_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    progress_fraction(scroll_top, content_height, viewport_height)
}

/// Wire scroll and resize listeners that keep `target` up to date. The
/// returned guards own the listeners; dropping them detaches observation.
pub fn observe(
    window: &web::Window,
    document: &web::Document,
    target: Rc<Cell<f32>>,
) -> Vec<ListenerGuard> {
    target.set(current_progress(window, document));

    let mut guards = Vec::with_capacity(2);
    for event in ["scroll", "resize"] {
        let window_o = window.clone();
        let document_o = document.clone();
        let target_o = target.clone();
        guards.push(ListenerGuard::listen(window, event, move |_ev| {
            target_o.set(current_progress(&window_o, &document_o));
        }));
    }
    guards
}
