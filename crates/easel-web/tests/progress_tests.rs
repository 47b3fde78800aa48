// Host-side tests for the pure scroll-progress math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/progress.rs"]
mod progress;

use progress::*;

#[test]
fn top_of_the_document_is_zero() {
    assert_eq!(progress_fraction(0.0, 5000.0, 800.0), 0.0);
}

#[test]
fn bottom_of_the_document_is_one() {
    assert_eq!(progress_fraction(4200.0, 5000.0, 800.0), 1.0);
}

#[test]
fn midpoints_interpolate_linearly() {
    let p = progress_fraction(2100.0, 5000.0, 800.0);
    assert!((p - 0.5).abs() < 1e-6);
    let q = progress_fraction(1050.0, 5000.0, 800.0);
    assert!((q - 0.25).abs() < 1e-6);
}

#[test]
fn overscroll_is_clamped() {
    assert_eq!(progress_fraction(-120.0, 5000.0, 800.0), 0.0);
    assert_eq!(progress_fraction(9999.0, 5000.0, 800.0), 1.0);
}

#[test]
fn degenerate_geometry_pins_to_zero() {
    // Content shorter than the viewport
    assert_eq!(progress_fraction(10.0, 500.0, 800.0), 0.0);
    // Content exactly the viewport
    assert_eq!(progress_fraction(0.0, 800.0, 800.0), 0.0);
    // Nonsense inputs
    assert_eq!(progress_fraction(f64::NAN, 5000.0, 800.0), 0.0);
    assert_eq!(progress_fraction(10.0, f64::NAN, 800.0), 0.0);
}

#[test]
fn scrub_moves_toward_the_target_without_overshoot() {
    let mut current = 0.0;
    let target = 1.0;
    for _ in 0..30 {
        let next = scrub_toward(current, target, 1.0 / 60.0, 0.5);
        assert!(next > current, "scrub must make progress");
        assert!(next < target, "scrub must not overshoot");
        current = next;
    }
}

#[test]
fn scrub_converges_within_a_few_time_constants() {
    let mut current = 0.0;
    for _ in 0..240 {
        current = scrub_toward(current, 1.0, 1.0 / 60.0, 0.5);
    }
    assert!((1.0 - current) < 0.01, "still {current} after 4 seconds");
}

#[test]
fn zero_tau_snaps_to_the_target() {
    assert_eq!(scrub_toward(0.2, 0.9, 1.0 / 60.0, 0.0), 0.9);
}

#[test]
fn scrub_follows_a_falling_target_too() {
    let mut current = 1.0;
    for _ in 0..240 {
        current = scrub_toward(current, 0.0, 1.0 / 60.0, 0.5);
    }
    assert!(current < 0.01);
}
