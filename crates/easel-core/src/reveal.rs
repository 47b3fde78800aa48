//! Progress-driven reveal mapping for the portrait layer.
//!
//! Everything here is a pure function of the scroll progress fraction, so the
//! whole visual contract is testable without a rendering harness.

use crate::constants::*;

/// Composed filter parameters for the portrait backdrop at a given progress.
///
/// All fields are pre-clamped; feeding any progress value (even out of
/// range) can never produce a negative blur/grayscale/sepia or an opacity
/// above 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealParams {
    pub blur_px: f32,
    pub grayscale_pct: f32,
    pub opacity: f32,
    pub contrast_pct: f32,
    pub sepia_pct: f32,
}

impl RevealParams {
    pub fn at(progress: f32) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            blur_px: (BLUR_MAX_PX * (1.0 - p * BLUR_FADE_RATE)).max(0.0),
            grayscale_pct: (GRAYSCALE_MAX_PCT * (1.0 - p * GRAYSCALE_FADE_RATE)).max(0.0),
            opacity: (p * OPACITY_RISE_RATE).min(1.0),
            contrast_pct: CONTRAST_BASE_PCT + CONTRAST_SPAN_PCT * p,
            sepia_pct: (SEPIA_MAX_PCT * (1.0 - p)).max(0.0),
        }
    }

    /// CSS `filter` value composing all five parameters.
    pub fn css_filter(&self) -> String {
        format!(
            "blur({:.2}px) grayscale({:.1}%) contrast({:.1}%) sepia({:.1}%) opacity({:.3})",
            self.blur_px, self.grayscale_pct, self.contrast_pct, self.sepia_pct, self.opacity
        )
    }
}

/// Opacity of the high-contrast sketch overlay, or None once the overlay is
/// dropped from the composition (progress at or past the visibility cutoff).
pub fn sketch_opacity(progress: f32) -> Option<f32> {
    let p = progress.clamp(0.0, 1.0);
    if p < SKETCH_VISIBLE_BELOW {
        Some((1.0 - p * SKETCH_FADE_RATE).clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Named painting stage for the sketch illustration panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Blank,
    Outline,
    Underpaint,
    Detail,
    Final,
}

impl Stage {
    pub fn at(progress: f32) -> Self {
        let p = progress.clamp(0.0, 1.0);
        if p < STAGE_OUTLINE_AT {
            Stage::Blank
        } else if p < STAGE_UNDERPAINT_AT {
            Stage::Outline
        } else if p < STAGE_DETAIL_AT {
            Stage::Underpaint
        } else if p < STAGE_FINAL_AT {
            Stage::Detail
        } else {
            Stage::Final
        }
    }
}
