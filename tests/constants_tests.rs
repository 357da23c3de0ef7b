// Host-side tests for timing constants and their relationships.
// The web crate is wasm-only, so these target valentine-core directly.

use std::time::Duration;
use valentine_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn lifetimes_match_page_timings() {
    assert_eq!(GREETING_HEART_LIFETIME, Duration::from_millis(1200));
    assert_eq!(ENVELOPE_BURST_LIFETIME, Duration::from_millis(1800));
    assert_eq!(GALLERY_EMOJI_LIFETIME, Duration::from_millis(1500));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_ratios() {
    for t in [
        GREETING_REVEAL_THRESHOLD,
        ENVELOPE_REVEAL_THRESHOLD,
        GALLERY_REVEAL_THRESHOLD,
    ] {
        assert!(t > 0.0 && t <= 1.0);
    }
    assert!(GREETING_REVEAL_THRESHOLD < ENVELOPE_REVEAL_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn text_delays_are_staggered() {
    let d = GREETING_TEXT_DELAYS_S;
    assert!(d[0] < d[1] && d[1] < d[2]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_delay_can_outrun_the_global_clear() {
    // A particle starting at the latest delay finishes after the burst is cleared.
    let latest = Duration::from_secs_f32(BURST_MAX_DELAY_S);
    assert!(latest + POP_OUT_ANIMATION > ENVELOPE_BURST_LIFETIME);
    // One starting immediately does not.
    assert!(POP_OUT_ANIMATION <= ENVELOPE_BURST_LIFETIME);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(BURST_TOP_PCT.0 < BURST_TOP_PCT.1);
    assert!(BURST_LEFT_PCT.0 < BURST_LEFT_PCT.1);
    assert!(FLOATING_HEART_SIZE_PX.0 < FLOATING_HEART_SIZE_PX.1);
    assert!(FLOATING_HEART_DURATION_S.0 < FLOATING_HEART_DURATION_S.1);
    assert!(ENVELOPE_TILT_DEG_PER_PX < GREETING_TILT_DEG_PER_PX);
}
