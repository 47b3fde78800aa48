//! Edge-burst confetti for the accepted finale.
//!
//! Positions and velocities are in normalized viewport units so the renderer
//! can scale to any canvas size. Angles follow the screen convention where
//! 90 degrees points straight up.

use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

use crate::constants::*;

#[derive(Clone, Debug)]
pub struct BurstSpec {
    pub particle_count: usize,
    pub angle_deg: f32,
    pub spread_deg: f32,
    pub origin: Vec2,
    pub colors: SmallVec<[&'static str; 3]>,
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
    pub spin: f32,
    pub ttl: f32,
    pub color: &'static str,
}

#[derive(Default)]
pub struct ConfettiSystem {
    particles: Vec<Particle>,
}

impl ConfettiSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn burst(&mut self, spec: &BurstSpec, rng: &mut impl Rng) {
        for _ in 0..spec.particle_count {
            let jitter = (rng.gen::<f32>() - 0.5) * spec.spread_deg;
            let theta = (spec.angle_deg + jitter).to_radians();
            let speed = CONFETTI_MIN_SPEED + rng.gen::<f32>() * CONFETTI_SPEED_SPAN;
            // Screen y grows downward, so an upward angle maps to -sin.
            let velocity = Vec2::new(theta.cos(), -theta.sin()) * speed;
            let color = if spec.colors.is_empty() {
                "#ffffff"
            } else {
                spec.colors[rng.gen_range(0..spec.colors.len())]
            };
            self.particles.push(Particle {
                position: spec.origin,
                velocity,
                angle: rng.gen::<f32>() * std::f32::consts::TAU,
                spin: (rng.gen::<f32>() - 0.5) * 2.0 * CONFETTI_MAX_SPIN_RAD_S,
                ttl: CONFETTI_TTL_SEC,
                color,
            });
        }
    }

    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let drag = (1.0 - CONFETTI_DRAG_PER_SEC * dt).max(0.0);
        for p in &mut self.particles {
            p.velocity.y += CONFETTI_GRAVITY * dt;
            p.velocity *= drag;
            p.position += p.velocity * dt;
            p.angle += p.spin * dt;
            p.ttl -= dt;
        }
        self.particles.retain(|p| p.ttl > 0.0);
    }
}

/// Drives the two-edge burst sequence: both edges fire every tick for the
/// finale duration, then the portrait reveal is due.
pub struct Finale {
    remaining_sec: f32,
}

impl Finale {
    pub fn start() -> Self {
        Self {
            remaining_sec: FINALE_DURATION_SEC,
        }
    }

    pub fn left_burst() -> BurstSpec {
        BurstSpec {
            particle_count: FINALE_BURST_COUNT,
            angle_deg: FINALE_LEFT_ANGLE_DEG,
            spread_deg: FINALE_SPREAD_DEG,
            origin: Vec2::new(0.0, 0.5),
            colors: SmallVec::from_slice(&FINALE_COLORS),
        }
    }

    pub fn right_burst() -> BurstSpec {
        BurstSpec {
            particle_count: FINALE_BURST_COUNT,
            angle_deg: FINALE_RIGHT_ANGLE_DEG,
            spread_deg: FINALE_SPREAD_DEG,
            origin: Vec2::new(1.0, 0.5),
            colors: SmallVec::from_slice(&FINALE_COLORS),
        }
    }

    pub fn bursting(&self) -> bool {
        self.remaining_sec > 0.0
    }

    /// True once the burst window has elapsed; the caller reveals the finale
    /// portrait at this point.
    pub fn finished(&self) -> bool {
        !self.bursting()
    }

    pub fn tick(&mut self, dt: f32, system: &mut ConfettiSystem, rng: &mut impl Rng) {
        if !self.bursting() {
            return;
        }
        system.burst(&Self::left_burst(), rng);
        system.burst(&Self::right_burst(), rng);
        self.remaining_sec -= dt;
    }
}
