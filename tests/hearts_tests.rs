// Host-side tests for the ambient floating hearts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use valentine_core::*;

#[test]
fn eighteen_hearts_per_mount() {
    let mut rng = StdRng::seed_from_u64(1);
    let hearts = FloatingHearts::generate(&mut rng);
    assert_eq!(hearts.len(), FLOATING_HEART_COUNT);
    assert_eq!(hearts.len(), 18);
    assert!(!hearts.is_empty());
}

#[test]
fn parameters_stay_inside_their_ranges() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        for h in FloatingHearts::generate(&mut rng).hearts() {
            assert!((0.0..100.0).contains(&h.left_pct));
            assert!((25.0..50.0).contains(&h.size_px));
            assert!((18.0..32.0).contains(&h.duration_s));
            assert!((0.0..6.0).contains(&h.delay_s));
        }
    }
}

#[test]
fn drift_direction_alternates() {
    let mut rng = StdRng::seed_from_u64(3);
    let hearts = FloatingHearts::generate(&mut rng);
    for (i, h) in hearts.hearts().iter().enumerate() {
        assert_eq!(h.id, i);
        let expected = if i % 2 == 0 { Drift::Down } else { Drift::Up };
        assert_eq!(h.drift, expected);
    }
}

#[test]
fn same_seed_gives_same_field() {
    let a = FloatingHearts::generate(&mut StdRng::seed_from_u64(42));
    let b = FloatingHearts::generate(&mut StdRng::seed_from_u64(42));
    assert_eq!(a.hearts(), b.hearts());
}

#[test]
fn rendering_twice_gives_the_same_field() {
    let mut rng = StdRng::seed_from_u64(9);
    let hearts = FloatingHearts::generate(&mut rng);
    let first = hearts.render();

    // Drawing more numbers from the same rng must not leak into the field.
    let _ = FloatingHearts::generate(&mut rng);
    let _: f32 = rng.gen();
    let second = hearts.render();

    assert_eq!(first.len(), FLOATING_HEART_COUNT);
    assert_eq!(first, second);
    let direct: Vec<String> = hearts.hearts().iter().map(|h| h.style()).collect();
    assert_eq!(first, direct);
}

#[test]
fn a_new_mount_gets_a_new_field() {
    let mut rng = StdRng::seed_from_u64(9);
    let a = FloatingHearts::generate(&mut rng);
    let b = FloatingHearts::generate(&mut rng);
    assert_ne!(a.render(), b.render());
}

#[test]
fn style_picks_edge_and_keyframes_by_drift() {
    let down = FloatingHeart {
        id: 0,
        left_pct: 10.0,
        size_px: 30.0,
        duration_s: 20.0,
        delay_s: 2.0,
        drift: Drift::Down,
    };
    assert_eq!(
        down.style(),
        "left: 10%; top: -30px; animation: drift-down 20s linear 2s infinite"
    );
    let up = FloatingHeart {
        drift: Drift::Up,
        ..down
    };
    assert_eq!(
        up.style(),
        "left: 10%; bottom: -30px; animation: drift 20s linear 2s infinite"
    );
}
