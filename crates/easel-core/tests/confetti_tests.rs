use easel_core::confetti::{ConfettiSystem, Finale};
use easel_core::constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const STEP: f32 = 1.0 / 60.0;

#[test]
fn burst_spawns_the_requested_particle_count() {
    let mut system = ConfettiSystem::new();
    let mut rng = StdRng::seed_from_u64(4);
    system.burst(&Finale::left_burst(), &mut rng);
    assert_eq!(system.len(), FINALE_BURST_COUNT);
    system.burst(&Finale::right_burst(), &mut rng);
    assert_eq!(system.len(), FINALE_BURST_COUNT * 2);
}

#[test]
fn particles_use_the_finale_palette() {
    let mut system = ConfettiSystem::new();
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..20 {
        system.burst(&Finale::left_burst(), &mut rng);
    }
    for p in system.particles() {
        assert!(FINALE_COLORS.contains(&p.color), "unknown color {}", p.color);
    }
}

#[test]
fn edge_bursts_aim_inward() {
    let mut system = ConfettiSystem::new();
    let mut rng = StdRng::seed_from_u64(4);
    system.burst(&Finale::left_burst(), &mut rng);
    for p in system.particles() {
        assert_eq!(p.position.x, 0.0);
        assert!(p.velocity.x > 0.0, "left burst should head right");
        assert!(p.velocity.y < 0.0, "burst should head upward at first");
    }
    let mut system = ConfettiSystem::new();
    system.burst(&Finale::right_burst(), &mut rng);
    for p in system.particles() {
        assert_eq!(p.position.x, 1.0);
        assert!(p.velocity.x < 0.0, "right burst should head left");
    }
}

#[test]
fn gravity_pulls_particles_back_down() {
    let mut system = ConfettiSystem::new();
    let mut rng = StdRng::seed_from_u64(9);
    system.burst(&Finale::left_burst(), &mut rng);
    let initial_vy: Vec<f32> = system.particles().iter().map(|p| p.velocity.y).collect();
    for _ in 0..60 {
        system.step(STEP);
    }
    for (p, vy0) in system.particles().iter().zip(initial_vy) {
        assert!(p.velocity.y > vy0, "vertical velocity should grow downward");
    }
}

#[test]
fn particles_expire_after_their_ttl() {
    let mut system = ConfettiSystem::new();
    let mut rng = StdRng::seed_from_u64(9);
    system.burst(&Finale::left_burst(), &mut rng);
    let ticks = (CONFETTI_TTL_SEC / STEP) as usize + 2;
    for _ in 0..ticks {
        system.step(STEP);
    }
    assert!(system.is_empty(), "{} particles outlived their ttl", system.len());
}

#[test]
fn finale_fires_both_edges_every_tick_then_stops() {
    let mut system = ConfettiSystem::new();
    let mut rng = StdRng::seed_from_u64(1);
    let mut finale = Finale::start();
    assert!(finale.bursting());

    finale.tick(STEP, &mut system, &mut rng);
    assert_eq!(system.len(), FINALE_BURST_COUNT * 2);

    let mut ticks = 1;
    while finale.bursting() {
        finale.tick(STEP, &mut system, &mut rng);
        ticks += 1;
        assert!(ticks < 10_000, "finale never stopped bursting");
    }
    let expected = (FINALE_DURATION_SEC / STEP).round() as usize;
    assert!(
        (ticks as i64 - expected as i64).abs() <= 1,
        "burst window ran for {ticks} ticks, expected about {expected}"
    );
    assert!(finale.finished());

    let count = system.len();
    finale.tick(STEP, &mut system, &mut rng);
    assert_eq!(system.len(), count, "a finished finale must not emit");
}
