// Host-side tests for the greeting section: tilt, click hearts and teardown.

use glam::Vec2;
use std::time::Duration;
use valentine_core::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn deliver(section: &mut impl Section, fired: Vec<ExpiryKey>) {
    for key in fired {
        section.on_timer(key);
    }
}

#[test]
fn offset_is_measured_from_container_center() {
    let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
    assert_eq!(rect.offset_from_center(Vec2::new(110.0, 70.0)), Vec2::ZERO);
    assert_eq!(rect.offset_from_center(Vec2::new(10.0, 20.0)), Vec2::new(-100.0, -50.0));
    assert_eq!(rect.local(Vec2::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
}

#[test]
fn frame_and_bouquet_tilt_are_mirrored() {
    let mut g = GreetingSection::new();
    g.pointer_move(Vec2::new(100.0, -50.0));

    let frame = g.frame_tilt();
    let bouquet = g.bouquet_tilt();
    assert!((frame.rotate_y_deg - 1.0).abs() < 1e-5);
    assert!((bouquet.rotate_y_deg + 1.0).abs() < 1e-5);
    assert!((frame.rotate_x_deg - 0.5).abs() < 1e-5);
    assert_eq!(frame.rotate_x_deg, bouquet.rotate_x_deg);

    assert!(g.frame_style().starts_with("transform: perspective(1000px) rotateY("));
    assert!(g.frame_style().ends_with("transition: transform 0.1s ease-out"));
}

#[test]
fn tilt_is_not_clamped() {
    let mut g = GreetingSection::new();
    g.pointer_move(Vec2::new(20_000.0, 0.0));
    assert!(g.frame_tilt().rotate_y_deg > 190.0);
}

#[test]
fn pointer_keeps_only_latest_sample() {
    let mut g = GreetingSection::new();
    g.pointer_move(Vec2::new(5.0, 5.0));
    g.pointer_move(Vec2::new(-3.0, 8.0));
    assert_eq!(g.pointer(), Vec2::new(-3.0, 8.0));
}

#[test]
fn click_heart_lives_for_1200ms() {
    let mut timers = VirtualTimers::new();
    let mut g = GreetingSection::new();

    let id = g.click(Vec2::new(40.0, 60.0), &mut timers).expect("mounted");
    let heart = g.hearts().next().expect("one heart");
    assert_eq!(heart.id, id);
    assert_eq!(heart.item.at, Vec2::new(40.0, 60.0));

    deliver(&mut g, timers.advance(ms(1199)));
    assert_eq!(g.heart_count(), 1);
    deliver(&mut g, timers.advance(ms(1)));
    assert_eq!(g.heart_count(), 0);
}

#[test]
fn each_heart_expires_on_its_own_schedule() {
    let mut timers = VirtualTimers::new();
    let mut g = GreetingSection::new();

    let first = g.click(Vec2::new(1.0, 1.0), &mut timers).unwrap();
    deliver(&mut g, timers.advance(ms(600)));
    let second = g.click(Vec2::new(2.0, 2.0), &mut timers).unwrap();
    assert_ne!(first, second);
    assert_eq!(g.heart_count(), 2);

    deliver(&mut g, timers.advance(ms(600)));
    let left: Vec<_> = g.hearts().map(|h| h.id).collect();
    assert_eq!(left, vec![second]);

    deliver(&mut g, timers.advance(ms(600)));
    assert_eq!(g.heart_count(), 0);
}

#[test]
fn unmount_cancels_pending_heart_timers() {
    let mut timers = VirtualTimers::new();
    let mut g = GreetingSection::new();
    for i in 0..5 {
        g.click(Vec2::new(i as f32, 0.0), &mut timers);
    }
    assert_eq!(timers.pending_count(), 5);

    g.unmount(&mut timers);
    assert_eq!(timers.pending_count(), 0);
    assert!(timers.advance(ms(5_000)).is_empty());
    assert!(!g.is_mounted());
    assert_eq!(g.heart_count(), 0);
}

#[test]
fn late_delivery_after_unmount_is_a_no_op() {
    let mut timers = VirtualTimers::new();
    let mut g = GreetingSection::new();
    g.click(Vec2::ZERO, &mut timers);
    // Capture what would have fired, then tear down first.
    let mut shadow = VirtualTimers::new();
    g.click(Vec2::ZERO, &mut shadow);
    let stale = shadow.advance(ms(1200));

    g.unmount(&mut timers);
    for key in stale {
        assert!(!g.on_timer(key));
    }
    assert!(g.click(Vec2::ZERO, &mut timers).is_none());
    assert_eq!(timers.pending_count(), 0);
}

#[test]
fn text_blocks_fade_in_with_fixed_delays() {
    let g = GreetingSection::new();
    assert_eq!(
        g.text_block_delays(),
        [
            "animation-delay: 0.1s".to_string(),
            "animation-delay: 0.3s".to_string(),
            "animation-delay: 0.5s".to_string(),
        ]
    );
}

#[test]
fn heart_style_places_it_at_click_point() {
    let heart = ClickHeart {
        at: Vec2::new(12.0, 34.0),
    };
    let style = heart.style();
    assert!(style.starts_with("left: 12px; top: 34px;"));
    assert!(style.contains("fadeInUp 1.2s"));
}
