//! Envelope letter: a two-state open/close machine with a pop-out burst.

use crate::constants::{
    BURST_LEFT_PCT, BURST_MAX_DELAY_S, BURST_SPIN_DEG, BURST_TOP_PCT, BURST_TRAVEL_PX,
    ENVELOPE_BURST_LIFETIME, ENVELOPE_BURST_SIZE, ENVELOPE_PERSPECTIVE_PX,
    ENVELOPE_REVEAL_THRESHOLD, ENVELOPE_TILT_DEG_PER_PX, ENVELOPE_TILT_TRANSITION,
    POP_OUT_ANIMATION,
};
use crate::expiring::{Entry, ExpiringList};
use crate::pointer::{Mirror, Tilt};
use crate::reveal::RevealLatch;
use crate::section::Section;
use crate::timer::{ExpiryKey, Timers};
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvelopeState {
    #[default]
    Closed,
    Open,
}

impl EnvelopeState {
    pub fn is_open(self) -> bool {
        self == EnvelopeState::Open
    }

    pub fn prompt(self) -> &'static str {
        match self {
            EnvelopeState::Closed => "💌 Click to open the envelope",
            EnvelopeState::Open => "💌 Read with love",
        }
    }
}

/// One heart of the opening burst. Displacement and spin only drive the
/// outward CSS animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopoutParticle {
    pub top_pct: f32,
    pub left_pct: f32,
    pub travel: Vec2,
    pub rotate_deg: f32,
    pub delay_s: f32,
}

impl PopoutParticle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let half_travel = BURST_TRAVEL_PX / 2.0;
        let half_spin = BURST_SPIN_DEG / 2.0;
        Self {
            top_pct: rng.gen_range(BURST_TOP_PCT.0..BURST_TOP_PCT.1),
            left_pct: rng.gen_range(BURST_LEFT_PCT.0..BURST_LEFT_PCT.1),
            travel: Vec2::new(
                rng.gen_range(-half_travel..half_travel),
                rng.gen_range(-half_travel..half_travel),
            ),
            rotate_deg: rng.gen_range(-half_spin..half_spin),
            delay_s: rng.gen_range(0.0..BURST_MAX_DELAY_S),
        }
    }

    /// Negative or non-finite delays count as zero.
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.delay_s).unwrap_or_default()
    }

    /// The burst is cleared as a whole, so a late-starting particle can be
    /// removed before its own animation has finished.
    pub fn is_truncated(&self) -> bool {
        self.delay() + POP_OUT_ANIMATION > ENVELOPE_BURST_LIFETIME
    }

    pub fn style(&self) -> String {
        format!(
            "top: {}%; left: {}%; --tx: {}px; --ty: {}px; --rotate: {}deg; animation-delay: {}s",
            self.top_pct, self.left_pct, self.travel.x, self.travel.y, self.rotate_deg, self.delay_s
        )
    }
}

#[derive(Debug)]
pub struct EnvelopeSection {
    state: EnvelopeState,
    latch: RevealLatch,
    pointer: Vec2,
    burst: ExpiringList<PopoutParticle>,
    mounted: bool,
}

impl Default for EnvelopeSection {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvelopeSection {
    pub fn new() -> Self {
        Self {
            state: EnvelopeState::Closed,
            latch: RevealLatch::new(ENVELOPE_REVEAL_THRESHOLD),
            pointer: Vec2::ZERO,
            burst: ExpiringList::new(),
            mounted: true,
        }
    }

    pub fn state(&self) -> EnvelopeState {
        self.state
    }

    /// Click on the envelope body. Opening replaces any burst still on screen.
    pub fn toggle<R: Rng + ?Sized>(&mut self, rng: &mut R, timers: &mut dyn Timers) -> EnvelopeState {
        if !self.mounted {
            return self.state;
        }
        match self.state {
            EnvelopeState::Closed => {
                self.burst.clear(timers);
                let particles: Vec<PopoutParticle> = (0..ENVELOPE_BURST_SIZE)
                    .map(|_| PopoutParticle::random(rng))
                    .collect();
                self.burst
                    .push_group(particles, ENVELOPE_BURST_LIFETIME, timers);
                self.state = EnvelopeState::Open;
                log::debug!("[envelope] opened, burst of {}", self.burst.len());
            }
            EnvelopeState::Open => {
                self.state = EnvelopeState::Closed;
            }
        }
        self.state
    }

    /// The letter's close control. Never opens.
    pub fn close(&mut self) -> EnvelopeState {
        if self.mounted {
            self.state = EnvelopeState::Closed;
        }
        self.state
    }

    pub fn prompt(&self) -> &'static str {
        self.state.prompt()
    }

    pub fn pointer_move(&mut self, offset: Vec2) {
        if self.mounted {
            self.pointer = offset;
        }
    }

    pub fn tilt(&self) -> Tilt {
        Tilt::from_offset(self.pointer, ENVELOPE_TILT_DEG_PER_PX, Mirror::Follow)
    }

    pub fn tilt_style(&self) -> String {
        format!(
            "transform: {}; transition: {}",
            self.tilt().css_transform(ENVELOPE_PERSPECTIVE_PX),
            ENVELOPE_TILT_TRANSITION
        )
    }

    pub fn particles(&self) -> impl Iterator<Item = &Entry<PopoutParticle>> {
        self.burst.iter()
    }

    pub fn particle_count(&self) -> usize {
        self.burst.len()
    }
}

impl Section for EnvelopeSection {
    fn name(&self) -> &'static str {
        "envelope"
    }

    fn latch(&self) -> &RevealLatch {
        &self.latch
    }

    fn latch_mut(&mut self) -> &mut RevealLatch {
        &mut self.latch
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn on_timer(&mut self, key: ExpiryKey) -> bool {
        if !self.mounted {
            return false;
        }
        self.burst.expire(key) > 0
    }

    fn unmount(&mut self, timers: &mut dyn Timers) {
        self.burst.clear(timers);
        self.mounted = false;
    }
}
