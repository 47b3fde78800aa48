//! Scroll-geometry to progress-fraction mapping.
//!
//! Kept free of web types so the math is host-testable.

/// Normalized scroll position across the document: 0 at the top, 1 once the
/// viewport bottom reaches the content bottom. Degenerate geometry (content
/// no taller than the viewport) pins the fraction to 0.
pub fn progress_fraction(scroll_top: f64, content_height: f64, viewport_height: f64) -> f32 {
    let span = content_height - viewport_height;
    if span.is_nan() || span <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / span).clamp(0.0, 1.0) as f32
}

/// Exponential approach of the displayed progress toward the raw scroll
/// target, giving the scrubbed feel. `tau_sec <= 0` snaps.
pub fn scrub_toward(current: f32, target: f32, dt_sec: f32, tau_sec: f32) -> f32 {
    if tau_sec <= 0.0 || dt_sec <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-dt_sec / tau_sec).exp();
    current + (target - current) * alpha
}
