// Host-side tests for the envelope open/close machine and its pop-out burst.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use valentine_core::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn setup() -> (EnvelopeSection, VirtualTimers, StdRng) {
    (EnvelopeSection::new(), VirtualTimers::new(), StdRng::seed_from_u64(7))
}

fn deliver(env: &mut EnvelopeSection, fired: Vec<ExpiryKey>) {
    for key in fired {
        env.on_timer(key);
    }
}

#[test]
fn starts_closed_with_open_prompt() {
    let (env, _, _) = setup();
    assert_eq!(env.state(), EnvelopeState::Closed);
    assert_eq!(env.prompt(), "💌 Click to open the envelope");
    assert_eq!(env.particle_count(), 0);
}

#[test]
fn toggle_alternates_states() {
    let (mut env, mut timers, mut rng) = setup();
    assert_eq!(env.toggle(&mut rng, &mut timers), EnvelopeState::Open);
    assert_eq!(env.prompt(), "💌 Read with love");
    assert_eq!(env.toggle(&mut rng, &mut timers), EnvelopeState::Closed);
    assert_eq!(env.toggle(&mut rng, &mut timers), EnvelopeState::Open);
}

#[test]
fn close_control_always_ends_closed() {
    for wait in [0, 1, 500, 1799, 1800, 5000] {
        let (mut env, mut timers, mut rng) = setup();
        env.toggle(&mut rng, &mut timers);
        deliver(&mut env, timers.advance(ms(wait)));
        assert_eq!(env.close(), EnvelopeState::Closed, "after {wait}ms");
        assert_eq!(env.close(), EnvelopeState::Closed);
    }
}

#[test]
fn close_never_opens() {
    let (mut env, _, _) = setup();
    assert_eq!(env.close(), EnvelopeState::Closed);
    assert_eq!(env.particle_count(), 0);
}

#[test]
fn opening_spawns_thirty_particles_cleared_at_1800ms() {
    let (mut env, mut timers, mut rng) = setup();
    env.toggle(&mut rng, &mut timers);
    assert_eq!(env.particle_count(), ENVELOPE_BURST_SIZE);
    assert_eq!(timers.pending_count(), 1);

    deliver(&mut env, timers.advance(ms(1799)));
    assert_eq!(env.particle_count(), 30);
    deliver(&mut env, timers.advance(ms(1)));
    assert_eq!(env.particle_count(), 0);
}

#[test]
fn closing_does_not_spawn_or_clear_the_burst() {
    let (mut env, mut timers, mut rng) = setup();
    env.toggle(&mut rng, &mut timers);
    env.toggle(&mut rng, &mut timers);
    assert_eq!(env.particle_count(), 30);
    assert_eq!(timers.pending_count(), 1);
}

#[test]
fn reopening_replaces_burst_and_restarts_clear() {
    let (mut env, mut timers, mut rng) = setup();
    env.toggle(&mut rng, &mut timers);
    deliver(&mut env, timers.advance(ms(1000)));
    env.toggle(&mut rng, &mut timers);
    env.toggle(&mut rng, &mut timers);

    assert_eq!(env.particle_count(), 30);
    assert_eq!(timers.pending_count(), 1);

    // The first burst's clear would have landed here; it was cancelled.
    deliver(&mut env, timers.advance(ms(800)));
    assert_eq!(env.particle_count(), 30);
    deliver(&mut env, timers.advance(ms(1000)));
    assert_eq!(env.particle_count(), 0);
}

#[test]
fn particles_stay_inside_their_ranges() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let p = PopoutParticle::random(&mut rng);
        assert!((40.0..60.0).contains(&p.top_pct));
        assert!((35.0..65.0).contains(&p.left_pct));
        assert!(p.travel.x.abs() <= 125.0 && p.travel.y.abs() <= 125.0);
        assert!(p.rotate_deg.abs() <= 360.0);
        assert!((0.0..0.5).contains(&p.delay_s));
    }
}

#[test]
fn late_particles_are_truncated_by_the_global_clear() {
    let base = PopoutParticle {
        top_pct: 50.0,
        left_pct: 50.0,
        travel: Vec2::ZERO,
        rotate_deg: 0.0,
        delay_s: 0.0,
    };
    assert!(!base.is_truncated());
    assert!(!PopoutParticle { delay_s: 0.2, ..base }.is_truncated());
    assert!(PopoutParticle { delay_s: 0.45, ..base }.is_truncated());
}

#[test]
fn burst_clear_ignores_per_particle_delay() {
    let (mut env, mut timers, mut rng) = setup();
    env.toggle(&mut rng, &mut timers);
    let truncated = env.particles().filter(|p| p.item.is_truncated()).count();
    // Some hearts start late enough to still be mid-flight at the clear.
    assert!(truncated > 0);
    assert!(truncated < ENVELOPE_BURST_SIZE);
    deliver(&mut env, timers.advance(ENVELOPE_BURST_LIFETIME));
    assert_eq!(env.particle_count(), 0);
}

#[test]
fn bad_delay_counts_as_no_delay() {
    let base = PopoutParticle {
        top_pct: 50.0,
        left_pct: 50.0,
        travel: Vec2::ZERO,
        rotate_deg: 0.0,
        delay_s: 0.0,
    };
    for delay_s in [-0.1, f32::NAN, f32::NEG_INFINITY] {
        let p = PopoutParticle { delay_s, ..base };
        assert_eq!(p.delay(), Duration::ZERO);
        assert!(!p.is_truncated());
    }
}

#[test]
fn particle_style_carries_animation_variables() {
    let p = PopoutParticle {
        top_pct: 45.0,
        left_pct: 50.0,
        travel: Vec2::new(-20.0, 30.0),
        rotate_deg: 90.0,
        delay_s: 0.25,
    };
    let style = p.style();
    assert!(style.contains("--tx: -20px"));
    assert!(style.contains("--ty: 30px"));
    assert!(style.contains("--rotate: 90deg"));
    assert!(style.contains("animation-delay: 0.25s"));
}

#[test]
fn envelope_tilt_is_gentler_than_greeting() {
    let (mut env, _, _) = setup();
    env.pointer_move(Vec2::new(200.0, 100.0));
    let tilt = env.tilt();
    assert!((tilt.rotate_y_deg - 1.0).abs() < 1e-5);
    assert!((tilt.rotate_x_deg + 0.5).abs() < 1e-5);
    assert!(env.tilt_style().starts_with("transform: perspective(1200px)"));
}

#[test]
fn unmount_mid_burst_cancels_the_clear() {
    let (mut env, mut timers, mut rng) = setup();
    env.toggle(&mut rng, &mut timers);
    env.unmount(&mut timers);
    assert_eq!(timers.pending_count(), 0);
    assert!(timers.advance(ms(2000)).is_empty());
    assert_eq!(env.toggle(&mut rng, &mut timers), EnvelopeState::Open);
    assert_eq!(timers.pending_count(), 0);
}
