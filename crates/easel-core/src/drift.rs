//! Zero-gravity drift simulation for the decorative background layer.
//!
//! A deliberately small rigid-rectangle world: bodies drift under a per-step
//! air-friction decay, take a faint random breeze nudge so motion never fully
//! dies, and bounce off static walls installed around the viewport. The
//! front-end samples positions once per frame to drive element transforms.
//!
//! Rotation only affects the sampled angle; overlap tests use axis-aligned
//! extents, which is enough for soft blobs that never stack.

use fnv::FnvHashMap;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;
use thiserror::Error;

use crate::constants::{
    BODY_AIR_FRICTION, BODY_DENSITY, BODY_RESTITUTION, WALL_MARGIN_PX, WALL_THICKNESS_PX,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriftError {
    #[error("unknown body id {0:?}")]
    UnknownBody(BodyId),
}

/// Handle issued by [`World::add_body`]. Ids are never reused within a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u32);

#[derive(Clone, Debug)]
pub struct BodySpec {
    pub position: Vec2,
    pub size: Vec2,
    pub angle: f32,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub air_friction: f32,
    pub restitution: f32,
    pub density: f32,
    pub is_static: bool,
}

impl Default for BodySpec {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::splat(1.0),
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            air_friction: BODY_AIR_FRICTION,
            restitution: BODY_RESTITUTION,
            density: BODY_DENSITY,
            is_static: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Body {
    pub position: Vec2,
    pub half_extents: Vec2,
    pub angle: f32,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub air_friction: f32,
    pub restitution: f32,
    pub mass: f32,
    pub is_static: bool,
}

impl Body {
    fn from_spec(spec: &BodySpec) -> Self {
        let half = spec.size * 0.5;
        Self {
            position: spec.position,
            half_extents: half,
            angle: spec.angle,
            velocity: spec.velocity,
            angular_velocity: spec.angular_velocity,
            air_friction: spec.air_friction,
            restitution: spec.restitution,
            mass: (spec.density * spec.size.x * spec.size.y).max(1e-6),
            is_static: spec.is_static,
        }
    }

    fn inv_mass(&self) -> f32 {
        if self.is_static {
            0.0
        } else {
            1.0 / self.mass
        }
    }
}

pub struct World {
    gravity: Vec2,
    breeze: f32,
    bodies: FnvHashMap<BodyId, Body>,
    // Insertion order; stepping and contact resolution walk this so the
    // world is deterministic for a given seed and call sequence.
    order: Vec<BodyId>,
    walls: SmallVec<[BodyId; 4]>,
    next_id: u32,
    rng: StdRng,
}

impl World {
    pub fn new(gravity: Vec2, seed: u64) -> Self {
        Self {
            gravity,
            breeze: 0.0,
            bodies: FnvHashMap::default(),
            order: Vec::new(),
            walls: SmallVec::new(),
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Amplitude of the random per-step nudge applied to dynamic bodies,
    /// in px/s^2. Zero disables it.
    pub fn set_breeze(&mut self, accel: f32) {
        self.breeze = accel.max(0.0);
    }

    pub fn add_body(&mut self, spec: &BodySpec) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(id, Body::from_spec(spec));
        self.order.push(id);
        id
    }

    pub fn remove_body(&mut self, id: BodyId) -> Result<(), DriftError> {
        if self.bodies.remove(&id).is_none() {
            return Err(DriftError::UnknownBody(id));
        }
        self.order.retain(|b| *b != id);
        self.walls.retain(|b| *b != id);
        Ok(())
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn dynamic_body_count(&self) -> usize {
        self.bodies.values().filter(|b| !b.is_static).count()
    }

    /// Install four static walls enclosing a `width` x `height` viewport with
    /// the standard margin and thickness. Replaces any previously installed
    /// walls; dynamic bodies are untouched.
    pub fn install_bounds(&mut self, width: f32, height: f32) {
        let old: SmallVec<[BodyId; 4]> = self.walls.drain(..).collect();
        for id in old {
            let _ = self.remove_body(id);
        }
        let m = WALL_MARGIN_PX;
        let t = WALL_THICKNESS_PX;
        let specs = [
            // top, bottom, right, left
            (Vec2::new(width / 2.0, -m), Vec2::new(width, t)),
            (Vec2::new(width / 2.0, height + m), Vec2::new(width, t)),
            (Vec2::new(width + m, height / 2.0), Vec2::new(t, height)),
            (Vec2::new(-m, height / 2.0), Vec2::new(t, height)),
        ];
        for (position, size) in specs {
            let id = self.add_body(&BodySpec {
                position,
                size,
                is_static: true,
                ..BodySpec::default()
            });
            self.walls.push(id);
        }
        log::debug!("installed bounds for {width}x{height} viewport");
    }

    /// Advance the world by `dt` seconds. Callers drive this at a fixed step.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.integrate(dt);
        self.resolve_contacts();
    }

    fn integrate(&mut self, dt: f32) {
        for id in &self.order {
            let body = self.bodies.get_mut(id).expect("ordered id always present");
            if body.is_static {
                continue;
            }
            let nudge = if self.breeze > 0.0 {
                let theta = self.rng.gen::<f32>() * TAU;
                Vec2::new(theta.cos(), theta.sin()) * self.breeze * dt
            } else {
                Vec2::ZERO
            };
            body.velocity += self.gravity * dt + nudge;
            let decay = 1.0 - body.air_friction;
            body.velocity *= decay;
            body.angular_velocity *= decay;
            body.position += body.velocity * dt;
            body.angle += body.angular_velocity * dt;
        }
    }

    fn resolve_contacts(&mut self) {
        for i in 0..self.order.len() {
            for j in (i + 1)..self.order.len() {
                let (ia, ib) = (self.order[i], self.order[j]);
                let a = &self.bodies[&ia];
                let b = &self.bodies[&ib];
                if a.is_static && b.is_static {
                    continue;
                }
                let Some((normal, depth)) = overlap(a, b) else {
                    continue;
                };
                let (inv_a, inv_b) = (a.inv_mass(), b.inv_mass());
                let inv_sum = inv_a + inv_b;
                if inv_sum <= 0.0 {
                    continue;
                }
                let restitution = a.restitution.max(b.restitution);
                let rel = (b.velocity - a.velocity).dot(normal);
                // Push out along the minimal axis, then reflect approaching
                // velocity with the pair restitution.
                let jn = if rel < 0.0 {
                    -(1.0 + restitution) * rel / inv_sum
                } else {
                    0.0
                };
                let correction = normal * depth / inv_sum;
                {
                    let a = self.bodies.get_mut(&ia).expect("present");
                    a.position -= correction * inv_a;
                    a.velocity -= normal * jn * inv_a;
                }
                {
                    let b = self.bodies.get_mut(&ib).expect("present");
                    b.position += correction * inv_b;
                    b.velocity += normal * jn * inv_b;
                }
            }
        }
    }
}

/// Axis-aligned overlap test. Returns the contact normal (from `a` toward
/// `b`) and penetration depth along the minimal axis, or None when separated.
fn overlap(a: &Body, b: &Body) -> Option<(Vec2, f32)> {
    let d = b.position - a.position;
    let px = (a.half_extents.x + b.half_extents.x) - d.x.abs();
    if px <= 0.0 {
        return None;
    }
    let py = (a.half_extents.y + b.half_extents.y) - d.y.abs();
    if py <= 0.0 {
        return None;
    }
    if px < py {
        let sx = if d.x >= 0.0 { 1.0 } else { -1.0 };
        Some((Vec2::new(sx, 0.0), px))
    } else {
        let sy = if d.y >= 0.0 { 1.0 } else { -1.0 };
        Some((Vec2::new(0.0, sy), py))
    }
}
