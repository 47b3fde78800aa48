// Frame pacing, scroll-scrub and spawn tuning for the web front-end.

// Fixed simulation step driven from the frame loop accumulator
pub const SIM_STEP_SEC: f32 = 1.0 / 60.0;

// Clamp applied to the frame delta after a tab suspend
pub const MAX_FRAME_DELTA_SEC: f32 = 0.25;

// Progress easing time constant toward the raw scroll target
pub const SCRUB_TAU_SEC: f32 = 0.5;

// Delay before the accepted branch scrolls the page to the bottom
pub const ACCEPT_SCROLL_DELAY_MS: i32 = 100;

// Decorative shapes spawn across twice the viewport height
pub const SPAWN_FIELD_HEIGHT_FACTOR: f32 = 2.0;

// Initial drift rolled per shape at mount
pub const SPAWN_SPEED_PX_S: f32 = 12.0;
pub const SPAWN_SPIN_RAD_S: f32 = 0.15;

// Portrait asset; failure to load degrades to a blank backdrop
pub const PORTRAIT_URL: &str = "/portrait.jpg";
