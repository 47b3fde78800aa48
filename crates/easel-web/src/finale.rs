//! Confetti finale rendering and the delayed portrait reveal.

use rand::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use easel_core::confetti::{ConfettiSystem, Finale};
use easel_core::constants::CONFETTI_TTL_SEC;

use crate::dom;

pub struct FinaleLayer {
    surface: Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)>,
    portrait: Option<web::HtmlElement>,
    system: ConfettiSystem,
    script: Option<Finale>,
    rng: StdRng,
    revealed: bool,
}

impl FinaleLayer {
    /// Confetti is fire-and-forget decoration; a missing canvas disables
    /// drawing but the reveal timing still runs.
    pub fn new(document: &web::Document) -> Self {
        let surface = document
            .get_element_by_id("confetti-canvas")
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
            .and_then(|canvas| {
                dom::canvas_context_2d(&canvas)
                    .ok()
                    .map(|ctx| (canvas, ctx))
            });
        if surface.is_none() {
            log::warn!("no #confetti-canvas; finale confetti disabled");
        }
        let portrait = dom::element_by_id(document, "finale-portrait");
        if let Some(el) = &portrait {
            dom::hide(el);
        }
        Self {
            surface,
            portrait,
            system: ConfettiSystem::new(),
            script: None,
            rng: StdRng::from_entropy(),
            revealed: false,
        }
    }

    /// Start the burst window. Idempotent; a second call is ignored.
    pub fn begin(&mut self) {
        if self.script.is_some() {
            return;
        }
        if let Some((canvas, _)) = &self.surface {
            dom::sync_canvas_backing_size(canvas);
        }
        self.script = Some(Finale::start());
    }

    pub fn tick(&mut self, dt_sec: f32) {
        if self.script.is_none() && self.system.is_empty() {
            return;
        }
        if let Some(script) = &mut self.script {
            script.tick(dt_sec, &mut self.system, &mut self.rng);
            if script.finished() && !self.revealed {
                self.revealed = true;
                if let Some(el) = &self.portrait {
                    dom::show(el);
                }
            }
        }
        self.system.step(dt_sec);
        self.draw();
    }

    fn draw(&self) {
        let Some((canvas, ctx)) = &self.surface else {
            return;
        };
        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        ctx.clear_rect(0.0, 0.0, w, h);
        for p in self.system.particles() {
            ctx.save();
            let _ = ctx.translate(p.position.x as f64 * w, p.position.y as f64 * h);
            let _ = ctx.rotate(p.angle as f64);
            ctx.set_global_alpha(((p.ttl / CONFETTI_TTL_SEC).clamp(0.0, 1.0)) as f64);
            ctx.set_fill_style_str(p.color);
            ctx.fill_rect(-4.0, -6.0, 8.0, 12.0);
            ctx.restore();
        }
        ctx.set_global_alpha(1.0);
    }
}
