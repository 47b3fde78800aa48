#![cfg(target_arch = "wasm32")]

mod constants;
mod dom;
mod events;
mod finale;
mod float_layer;
mod frame;
mod panels;
mod portrait;
mod progress;
mod scroll;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use rand::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use easel_core::drift::World;
use easel_core::story::Story;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("easel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    panels::mount_story(&document)?;

    let viewport = dom::viewport_size(&window);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    // Layer placement draws from its own stream so a resize never disturbs
    // the world's breeze sequence
    let mut layer_rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);

    let mut world = World::new(Vec2::ZERO, seed);
    world.install_bounds(viewport.0, viewport.1);
    let float_layer =
        float_layer::FloatLayer::mount(&document, &mut world, viewport, &mut layer_rng);

    let world = Rc::new(RefCell::new(world));
    let float_layer = Rc::new(RefCell::new(float_layer));
    let portrait = Rc::new(RefCell::new(portrait::PortraitLayer::new(&document)?));
    let finale = Rc::new(RefCell::new(finale::FinaleLayer::new(&document)));
    let story = Rc::new(RefCell::new(Story::new()));

    panels::wire_choices(
        &window,
        &document,
        story.clone(),
        portrait.clone(),
        finale.clone(),
    );

    let raw_progress = Rc::new(Cell::new(0.0f32));
    let mut guards = scroll::observe(&window, &document, raw_progress.clone());

    // Keep the walls matched to the viewport
    {
        let world_r = world.clone();
        let window_r = window.clone();
        guards.push(events::ListenerGuard::listen(&window, "resize", move |_ev| {
            let (w, h) = dom::viewport_size(&window_r);
            world_r.borrow_mut().install_bounds(w, h);
        }));
    }

    // Page teardown releases registered bodies and painting listeners
    {
        let world_t = world.clone();
        let float_t = float_layer.clone();
        let portrait_t = portrait.clone();
        guards.push(events::ListenerGuard::listen(
            &window,
            "pagehide",
            move |_ev| {
                float_t.borrow_mut().unmount(&mut world_t.borrow_mut());
                portrait_t.borrow_mut().set_active(false);
            },
        ));
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        world,
        float_layer,
        portrait,
        finale,
        raw_progress,
        progress: 0.0,
        sim_accumulator: 0.0,
        last_instant: Instant::now(),
        guards,
    }));
    frame::start_loop(frame_ctx);
    log::info!("easel-web ready");
    Ok(())
}
