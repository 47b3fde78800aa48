//! Event-listener lifecycle.
//!
//! App-lifetime closures (the confession buttons) are wired once and leaked
//! in the usual wasm-bindgen way. Anything that must detach again — the
//! active-painting pointer/resize listeners, scroll observation, teardown
//! hooks — is held as a [`ListenerGuard`] that removes itself on drop, so a
//! toggle can never stack duplicate listeners.

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl ListenerGuard {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

/// Pointer position in CSS pixels relative to an element's border box.
#[inline]
pub fn pointer_element_px(ev: &web::PointerEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Pointer position in viewport CSS pixels.
#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
