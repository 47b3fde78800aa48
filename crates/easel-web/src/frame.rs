//! The single frame loop.
//!
//! One requestAnimationFrame chain owns every recurring job: fixed-step
//! simulation advance, body-to-element transform sync, progress scrubbing,
//! the cursor spring and confetti. Layers never self-schedule.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use easel_core::drift::World;

use crate::constants::{MAX_FRAME_DELTA_SEC, SCRUB_TAU_SEC, SIM_STEP_SEC};
use crate::events::ListenerGuard;
use crate::finale::FinaleLayer;
use crate::float_layer::FloatLayer;
use crate::portrait::PortraitLayer;
use crate::progress;

pub struct FrameContext {
    pub world: Rc<RefCell<World>>,
    pub float_layer: Rc<RefCell<FloatLayer>>,
    pub portrait: Rc<RefCell<PortraitLayer>>,
    pub finale: Rc<RefCell<FinaleLayer>>,
    pub raw_progress: Rc<Cell<f32>>,
    pub progress: f32,
    pub sim_accumulator: f32,
    pub last_instant: Instant,
    /// Scroll/resize/teardown listeners stay attached for as long as the
    /// frame context lives.
    pub guards: Vec<ListenerGuard>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DELTA_SEC);
        self.last_instant = now;

        // Fixed-step simulation advance
        self.sim_accumulator += dt;
        {
            let mut world = self.world.borrow_mut();
            while self.sim_accumulator >= SIM_STEP_SEC {
                world.step(SIM_STEP_SEC);
                self.sim_accumulator -= SIM_STEP_SEC;
            }
        }
        self.float_layer.borrow().sync(&self.world.borrow());

        // Scrubbed progress drives the portrait reveal
        self.progress = progress::scrub_toward(
            self.progress,
            self.raw_progress.get(),
            dt,
            SCRUB_TAU_SEC,
        );
        {
            let mut portrait = self.portrait.borrow_mut();
            portrait.apply_progress(self.progress);
            portrait.tick(dt);
        }

        self.finale.borrow_mut().tick(dt);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
