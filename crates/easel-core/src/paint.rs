//! Brush strokes and the spring-smoothed cursor for active painting mode.

use glam::Vec2;
use rand::Rng;

use crate::constants::*;

/// One short additive stroke anchored at the pointer. The surface these land
/// on is never cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub from: Vec2,
    pub to: Vec2,
    pub hue_deg: f32,
    pub width_px: f32,
    pub shadow_blur_px: f32,
}

impl Stroke {
    pub fn at(pos: Vec2, rng: &mut impl Rng) -> Self {
        let hue_deg = STROKE_HUE_BASE_DEG + rng.gen::<f32>() * STROKE_HUE_SPAN_DEG;
        Self {
            from: pos,
            to: pos + Vec2::splat(1.0),
            hue_deg,
            width_px: STROKE_WIDTH_PX,
            shadow_blur_px: STROKE_SHADOW_BLUR_PX,
        }
    }

    /// Pastel stroke color as a CSS `hsla(..)` value.
    pub fn css_color(&self) -> String {
        format!(
            "hsla({:.0}, {:.0}%, {:.0}%, {})",
            self.hue_deg, STROKE_SATURATION_PCT, STROKE_LIGHTNESS_PCT, STROKE_ALPHA
        )
    }
}

/// Under-damped spring follower used for the painting cursor dot.
///
/// Semi-implicit Euler; stable at the frame-loop step for the stiffness and
/// damping in use. The first step snaps to the target so the dot never flies
/// in from the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spring {
    position: Vec2,
    velocity: Vec2,
    initialized: bool,
}

impl Spring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn step(&mut self, target: Vec2, dt: f32) {
        if !self.initialized {
            self.position = target;
            self.velocity = Vec2::ZERO;
            self.initialized = true;
            return;
        }
        if dt <= 0.0 {
            return;
        }
        let accel =
            (target - self.position) * CURSOR_SPRING_STIFFNESS - self.velocity * CURSOR_SPRING_DAMPING;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
    }
}
