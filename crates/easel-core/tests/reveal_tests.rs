use easel_core::constants::*;
use easel_core::reveal::{sketch_opacity, RevealParams, Stage};

#[test]
fn params_stay_in_range_across_the_whole_progress_span() {
    for i in 0..=100 {
        let p = i as f32 / 100.0;
        let params = RevealParams::at(p);
        assert!(params.blur_px >= 0.0, "blur negative at p={p}");
        assert!(params.blur_px <= BLUR_MAX_PX);
        assert!(params.grayscale_pct >= 0.0, "grayscale negative at p={p}");
        assert!(params.grayscale_pct <= GRAYSCALE_MAX_PCT);
        assert!(params.sepia_pct >= 0.0, "sepia negative at p={p}");
        assert!(params.sepia_pct <= SEPIA_MAX_PCT);
        assert!((0.0..=1.0).contains(&params.opacity), "opacity out of range at p={p}");
        assert!(params.contrast_pct >= CONTRAST_BASE_PCT);
        assert!(params.contrast_pct <= CONTRAST_BASE_PCT + CONTRAST_SPAN_PCT);
    }
}

#[test]
fn blank_canvas_state_at_zero() {
    let params = RevealParams::at(0.0);
    assert_eq!(params.blur_px, 20.0);
    assert_eq!(params.grayscale_pct, 100.0);
    assert_eq!(params.opacity, 0.0);
    assert_eq!(params.contrast_pct, 80.0);
    assert_eq!(params.sepia_pct, 50.0);
}

#[test]
fn fully_revealed_state_at_one() {
    let params = RevealParams::at(1.0);
    assert_eq!(params.blur_px, 0.0);
    assert_eq!(params.grayscale_pct, 0.0);
    assert_eq!(params.opacity, 1.0);
    assert_eq!(params.contrast_pct, 120.0);
    assert_eq!(params.sepia_pct, 0.0);
}

#[test]
fn quarter_progress_matches_the_expected_vector() {
    let params = RevealParams::at(0.25);
    assert!((params.blur_px - 12.5).abs() < 1e-5);
    assert!((params.grayscale_pct - 50.0).abs() < 1e-4);
    assert!((params.opacity - 0.3).abs() < 1e-6);
    assert!((params.contrast_pct - 90.0).abs() < 1e-4);
    assert!((params.sepia_pct - 37.5).abs() < 1e-4);
    let sketch = sketch_opacity(0.25).expect("sketch visible at 0.25");
    assert!((sketch - 0.625).abs() < 1e-5);
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(RevealParams::at(-3.0), RevealParams::at(0.0));
    assert_eq!(RevealParams::at(7.5), RevealParams::at(1.0));
    assert_eq!(sketch_opacity(-1.0), Some(1.0));
    assert_eq!(sketch_opacity(2.0), None);
}

#[test]
fn sketch_overlay_visible_iff_below_cutoff() {
    assert!(sketch_opacity(0.0).is_some());
    assert!(sketch_opacity(0.59).is_some());
    assert!(sketch_opacity(0.6).is_none());
    assert!(sketch_opacity(1.0).is_none());
    // While visible the opacity never exceeds 1
    for i in 0..60 {
        let p = i as f32 / 100.0;
        let o = sketch_opacity(p).unwrap();
        assert!((0.0..=1.0).contains(&o), "sketch opacity out of range at p={p}");
    }
}

#[test]
fn css_filter_composes_all_five_parameters() {
    let css = RevealParams::at(0.25).css_filter();
    assert_eq!(
        css,
        "blur(12.50px) grayscale(50.0%) contrast(90.0%) sepia(37.5%) opacity(0.300)"
    );
}

#[test]
fn stage_breakpoints() {
    assert_eq!(Stage::at(0.0), Stage::Blank);
    assert_eq!(Stage::at(0.19), Stage::Blank);
    assert_eq!(Stage::at(0.2), Stage::Outline);
    assert_eq!(Stage::at(0.49), Stage::Outline);
    assert_eq!(Stage::at(0.5), Stage::Underpaint);
    assert_eq!(Stage::at(0.79), Stage::Underpaint);
    assert_eq!(Stage::at(0.8), Stage::Detail);
    assert_eq!(Stage::at(0.94), Stage::Detail);
    assert_eq!(Stage::at(0.95), Stage::Final);
    assert_eq!(Stage::at(1.0), Stage::Final);
}
