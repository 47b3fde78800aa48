//! Decorative floating shapes driven by the drift simulation.
//!
//! Each shape is an absolutely positioned div whose transform is copied from
//! its body once per frame. The layer is pure decoration: a missing
//! container mounts as an empty layer and nothing moves.

use glam::Vec2;
use rand::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use easel_core::constants::*;
use easel_core::drift::{BodyId, BodySpec, World};

use crate::constants::{SPAWN_FIELD_HEIGHT_FACTOR, SPAWN_SPEED_PX_S, SPAWN_SPIN_RAD_S};
use crate::dom;

struct FloatShape {
    body: BodyId,
    element: web::HtmlElement,
    size: Vec2,
}

#[derive(Default)]
pub struct FloatLayer {
    shapes: Vec<FloatShape>,
}

/// Fixed accent shapes spawned alongside the random blobs: chat-bubble
/// rectangles at anchor fractions of the viewport.
const BUBBLES: [(f32, f32, f32, f32, &str); 2] = [
    (0.2, 0.3, 60.0, 60.0, "float-bubble"),
    (0.8, 0.6, 80.0, 50.0, "float-bubble alt"),
];

impl FloatLayer {
    /// Spawn the decorative shapes and register their bodies. Tolerates a
    /// missing `#float-layer` container by mounting empty.
    pub fn mount(
        document: &web::Document,
        world: &mut World,
        viewport: (f32, f32),
        rng: &mut StdRng,
    ) -> Self {
        let Some(container) = document.get_element_by_id("float-layer") else {
            log::warn!("no #float-layer container; drift decoration disabled");
            return Self::default();
        };
        let (vw, vh) = viewport;
        let mut shapes = Vec::with_capacity(FLOATING_SHAPE_COUNT + BUBBLES.len());

        for _ in 0..FLOATING_SHAPE_COUNT {
            let size = Vec2::new(
                SHAPE_MIN_SIZE_PX + rng.gen::<f32>() * SHAPE_SIZE_SPAN_PX,
                SHAPE_MIN_SIZE_PX + rng.gen::<f32>() * SHAPE_SIZE_SPAN_PX,
            );
            let position = Vec2::new(
                rng.gen::<f32>() * vw,
                rng.gen::<f32>() * vh * SPAWN_FIELD_HEIGHT_FACTOR,
            );
            if let Some(shape) = spawn(document, &container, world, position, size, "float-blob", rng)
            {
                shapes.push(shape);
            }
        }
        for (fx, fy, w, h, class) in BUBBLES {
            let position = Vec2::new(vw * fx, vh * fy);
            if let Some(shape) =
                spawn(document, &container, world, position, Vec2::new(w, h), class, rng)
            {
                shapes.push(shape);
            }
        }

        world.set_breeze(DRIFT_BREEZE_PX_S2);
        log::info!("float layer mounted with {} shapes", shapes.len());
        Self { shapes }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Copy body transforms onto the elements. Bodies are center-origin,
    /// elements are top-left-origin, hence the half-extent offset.
    pub fn sync(&self, world: &World) {
        for shape in &self.shapes {
            let Some(body) = world.body(shape.body) else {
                continue;
            };
            let top_left = body.position - shape.size * 0.5;
            dom::set_style(
                &shape.element,
                &format!(
                    "width:{:.0}px;height:{:.0}px;will-change:transform;\
                     transform:translate({:.1}px,{:.1}px) rotate({:.3}rad)",
                    shape.size.x, shape.size.y, top_left.x, top_left.y, body.angle
                ),
            );
        }
    }

    /// Remove every body this layer registered and drop its elements.
    pub fn unmount(&mut self, world: &mut World) {
        for shape in self.shapes.drain(..) {
            if let Err(e) = world.remove_body(shape.body) {
                log::warn!("float layer teardown: {e}");
            }
            shape.element.remove();
        }
    }
}

fn spawn(
    document: &web::Document,
    container: &web::Element,
    world: &mut World,
    position: Vec2,
    size: Vec2,
    class: &str,
    rng: &mut StdRng,
) -> Option<FloatShape> {
    let element = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    element.set_class_name(class);
    container.append_child(&element).ok()?;

    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    let body = world.add_body(&BodySpec {
        position,
        size,
        angle: rng.gen::<f32>() * BODY_SPAWN_MAX_ANGLE_RAD,
        velocity: Vec2::new(theta.cos(), theta.sin()) * SPAWN_SPEED_PX_S,
        angular_velocity: (rng.gen::<f32>() - 0.5) * 2.0 * SPAWN_SPIN_RAD_S,
        ..BodySpec::default()
    });
    Some(FloatShape {
        body,
        element,
        size,
    })
}
