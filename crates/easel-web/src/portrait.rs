//! Portrait layer: progress-driven filter compositing, the sketch overlay
//! and the active painting surface.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use rand::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use easel_core::constants::STROKE_SHADOW_COLOR;
use easel_core::paint::{Spring, Stroke};
use easel_core::reveal::{sketch_opacity, RevealParams};

use crate::constants::PORTRAIT_URL;
use crate::dom;
use crate::events::{self, ListenerGuard};

pub struct PortraitLayer {
    backdrop: web::HtmlElement,
    sketch: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    cursor: Option<web::HtmlElement>,
    hint: Option<web::HtmlElement>,
    active: bool,
    spring: Spring,
    cursor_target: Rc<Cell<Vec2>>,
    painted: Rc<Cell<bool>>,
    pointer_guard: Option<ListenerGuard>,
    resize_guard: Option<ListenerGuard>,
}

impl PortraitLayer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let backdrop = dom::require_element(document, "portrait-backdrop")?;
        let sketch = dom::require_element(document, "portrait-sketch")?;
        let canvas = dom::require_canvas(document, "paint-canvas")?;
        let ctx = dom::canvas_context_2d(&canvas)?;
        let cursor = dom::element_by_id(document, "paint-cursor");
        let hint = dom::element_by_id(document, "paint-hint");
        if let Some(el) = &cursor {
            dom::hide(el);
        }
        if let Some(el) = &hint {
            dom::hide(el);
        }
        preload_portrait();

        Ok(Self {
            backdrop,
            sketch,
            canvas,
            ctx,
            cursor,
            hint,
            active: false,
            spring: Spring::new(),
            cursor_target: Rc::new(Cell::new(Vec2::ZERO)),
            painted: Rc::new(Cell::new(false)),
            pointer_guard: None,
            resize_guard: None,
        })
    }

    pub fn apply_progress(&self, progress: f32) {
        let params = RevealParams::at(progress);
        dom::set_style(&self.backdrop, &format!("filter:{}", params.css_filter()));
        match sketch_opacity(progress) {
            Some(opacity) => dom::set_style(&self.sketch, &format!("opacity:{opacity:.3}")),
            None => dom::hide(&self.sketch),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Toggle active painting mode. Enabling attaches exactly one window
    /// pointermove listener and one resize listener; disabling (or dropping
    /// the layer) detaches exactly those, so repeated toggles never stack.
    pub fn set_active(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;
        let Some(window) = web::window() else {
            return;
        };
        if active {
            let _ = self.backdrop.class_list().add_1("accepted");
            dom::sync_canvas_backing_size(&self.canvas);
            if let Some(el) = &self.hint {
                dom::show(el);
            }
            if let Some(el) = &self.cursor {
                dom::show(el);
            }

            let canvas = self.canvas.clone();
            let ctx = self.ctx.clone();
            let target = self.cursor_target.clone();
            let painted = self.painted.clone();
            let hint = self.hint.clone();
            let mut rng = StdRng::from_entropy();
            self.pointer_guard = Some(ListenerGuard::listen(
                &window,
                "pointermove",
                move |ev: web::Event| {
                    let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                        return;
                    };
                    let pos = events::pointer_element_px(ev, &canvas);
                    draw_stroke(&ctx, &Stroke::at(pos, &mut rng));
                    target.set(events::pointer_client_px(ev));
                    if !painted.get() {
                        painted.set(true);
                        if let Some(el) = &hint {
                            dom::hide(el);
                        }
                    }
                },
            ));

            let canvas = self.canvas.clone();
            self.resize_guard = Some(ListenerGuard::listen(&window, "resize", move |_ev| {
                // Resizing the backing store clears the surface; strokes are
                // ephemeral decoration, so that is acceptable.
                dom::sync_canvas_backing_size(&canvas);
            }));
        } else {
            self.pointer_guard = None;
            self.resize_guard = None;
            if let Some(el) = &self.cursor {
                dom::hide(el);
            }
            if let Some(el) = &self.hint {
                dom::hide(el);
            }
        }
    }

    /// Per-frame work: ease the cursor dot toward the pointer.
    pub fn tick(&mut self, dt_sec: f32) {
        if !self.active {
            return;
        }
        self.spring.step(self.cursor_target.get(), dt_sec);
        if let Some(cursor) = &self.cursor {
            let pos = self.spring.position();
            dom::set_style(
                cursor,
                &format!("transform:translate({:.1}px,{:.1}px)", pos.x, pos.y),
            );
        }
    }
}

fn draw_stroke(ctx: &web::CanvasRenderingContext2d, stroke: &Stroke) {
    ctx.set_global_composite_operation("source-over").ok();
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_line_width(stroke.width_px as f64);
    ctx.set_shadow_blur(stroke.shadow_blur_px as f64);
    ctx.set_shadow_color(STROKE_SHADOW_COLOR);
    ctx.set_stroke_style_str(&stroke.css_color());
    ctx.begin_path();
    ctx.move_to(stroke.from.x as f64, stroke.from.y as f64);
    ctx.line_to(stroke.to.x as f64, stroke.to.y as f64);
    ctx.stroke();
}

/// Best-effort portrait preload; a failed load only logs, the backdrop just
/// stays blank.
fn preload_portrait() {
    let Ok(img) = web::HtmlImageElement::new() else {
        return;
    };
    let onerror = Closure::wrap(Box::new(move || {
        log::warn!("portrait image failed to load; backdrop stays blank");
    }) as Box<dyn FnMut()>);
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();
    img.set_src(PORTRAIT_URL);
}
