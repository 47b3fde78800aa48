// Shared tuning constants for the drift layer, the reveal mapping and the
// finale. The reveal multipliers are a fixed visual contract; renaming them
// is fine, retuning them is not.

use std::f32::consts::PI;

// Decorative drift layer
pub const FLOATING_SHAPE_COUNT: usize = 15;
pub const SHAPE_MIN_SIZE_PX: f32 = 20.0;
pub const SHAPE_SIZE_SPAN_PX: f32 = 40.0;
pub const BODY_AIR_FRICTION: f32 = 0.05; // per-step velocity decay factor
pub const BODY_RESTITUTION: f32 = 0.8;
pub const BODY_DENSITY: f32 = 0.01; // mass = density * area
pub const BODY_SPAWN_MAX_ANGLE_RAD: f32 = 0.1 * PI;
pub const DRIFT_BREEZE_PX_S2: f32 = 8.0; // random nudge keeping shapes adrift

// Wall geometry (viewport plus margin on every side)
pub const WALL_MARGIN_PX: f32 = 500.0;
pub const WALL_THICKNESS_PX: f32 = 1000.0;

// Reveal mapping
pub const BLUR_MAX_PX: f32 = 20.0;
pub const BLUR_FADE_RATE: f32 = 1.5;
pub const GRAYSCALE_MAX_PCT: f32 = 100.0;
pub const GRAYSCALE_FADE_RATE: f32 = 2.0;
pub const OPACITY_RISE_RATE: f32 = 1.2;
pub const CONTRAST_BASE_PCT: f32 = 80.0;
pub const CONTRAST_SPAN_PCT: f32 = 40.0;
pub const SEPIA_MAX_PCT: f32 = 50.0;
pub const SKETCH_VISIBLE_BELOW: f32 = 0.6;
pub const SKETCH_FADE_RATE: f32 = 1.5;

// Painting stage breakpoints
pub const STAGE_OUTLINE_AT: f32 = 0.2;
pub const STAGE_UNDERPAINT_AT: f32 = 0.5;
pub const STAGE_DETAIL_AT: f32 = 0.8;
pub const STAGE_FINAL_AT: f32 = 0.95;

// Brush strokes (active painting mode)
pub const STROKE_WIDTH_PX: f32 = 20.0;
pub const STROKE_SHADOW_BLUR_PX: f32 = 15.0;
pub const STROKE_SHADOW_COLOR: &str = "rgba(255, 180, 160, 0.5)";
pub const STROKE_HUE_BASE_DEG: f32 = 15.0; // peach/orange range
pub const STROKE_HUE_SPAN_DEG: f32 = 30.0;
pub const STROKE_SATURATION_PCT: f32 = 80.0;
pub const STROKE_LIGHTNESS_PCT: f32 = 70.0;
pub const STROKE_ALPHA: f32 = 0.5;

// Cursor spring (pointer follower)
pub const CURSOR_SPRING_STIFFNESS: f32 = 700.0;
pub const CURSOR_SPRING_DAMPING: f32 = 25.0;

// Confetti finale
pub const FINALE_DURATION_SEC: f32 = 3.0;
pub const FINALE_BURST_COUNT: usize = 5; // particles per edge per tick
pub const FINALE_SPREAD_DEG: f32 = 55.0;
pub const FINALE_LEFT_ANGLE_DEG: f32 = 60.0;
pub const FINALE_RIGHT_ANGLE_DEG: f32 = 120.0;
pub const FINALE_COLORS: [&str; 3] = ["#FFB7A1", "#FF9E80", "#FF8A65"];
pub const CONFETTI_MIN_SPEED: f32 = 0.35; // normalized viewport units per second
pub const CONFETTI_SPEED_SPAN: f32 = 0.55;
pub const CONFETTI_GRAVITY: f32 = 1.2; // normalized units per second squared
pub const CONFETTI_DRAG_PER_SEC: f32 = 0.35;
pub const CONFETTI_TTL_SEC: f32 = 2.5;
pub const CONFETTI_MAX_SPIN_RAD_S: f32 = 6.0;
