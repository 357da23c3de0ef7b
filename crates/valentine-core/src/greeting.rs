//! Hero section: parallax frame and bouquet, click-to-spawn hearts.

use crate::constants::{
    GREETING_HEART_LIFETIME, GREETING_PERSPECTIVE_PX, GREETING_REVEAL_THRESHOLD,
    GREETING_TEXT_DELAYS_S, GREETING_TILT_DEG_PER_PX, GREETING_TILT_TRANSITION,
};
use crate::expiring::{Entry, ExpiringList, ParticleId};
use crate::pointer::{Mirror, Tilt};
use crate::reveal::RevealLatch;
use crate::section::Section;
use crate::timer::{ExpiryKey, Timers};
use glam::Vec2;

/// Heart spawned by a click, positioned relative to the section's top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickHeart {
    pub at: Vec2,
}

impl ClickHeart {
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; animation: fadeInUp {}s ease-out forwards",
            self.at.x,
            self.at.y,
            GREETING_HEART_LIFETIME.as_secs_f32()
        )
    }
}

#[derive(Debug)]
pub struct GreetingSection {
    latch: RevealLatch,
    pointer: Vec2,
    hearts: ExpiringList<ClickHeart>,
    mounted: bool,
}

impl Default for GreetingSection {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingSection {
    pub fn new() -> Self {
        Self {
            latch: RevealLatch::new(GREETING_REVEAL_THRESHOLD),
            pointer: Vec2::ZERO,
            hearts: ExpiringList::new(),
            mounted: true,
        }
    }

    /// Record the pointer offset from the section centre.
    pub fn pointer_move(&mut self, offset: Vec2) {
        if self.mounted {
            self.pointer = offset;
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn frame_tilt(&self) -> Tilt {
        Tilt::from_offset(self.pointer, GREETING_TILT_DEG_PER_PX, Mirror::Follow)
    }

    pub fn bouquet_tilt(&self) -> Tilt {
        Tilt::from_offset(self.pointer, GREETING_TILT_DEG_PER_PX, Mirror::Opposite)
    }

    pub fn frame_style(&self) -> String {
        tilt_style(self.frame_tilt())
    }

    pub fn bouquet_style(&self) -> String {
        tilt_style(self.bouquet_tilt())
    }

    /// Spawn a heart at `at` (section-local px). Ignored once unmounted.
    pub fn click(&mut self, at: Vec2, timers: &mut dyn Timers) -> Option<ParticleId> {
        if !self.mounted {
            return None;
        }
        let id = self
            .hearts
            .push(ClickHeart { at }, GREETING_HEART_LIFETIME, timers);
        log::debug!("[greeting] heart {:?} at ({:.0},{:.0})", id, at.x, at.y);
        Some(id)
    }

    pub fn hearts(&self) -> impl Iterator<Item = &Entry<ClickHeart>> {
        self.hearts.iter()
    }

    pub fn heart_count(&self) -> usize {
        self.hearts.len()
    }

    /// Inline `animation-delay` for each of the three staggered text blocks.
    pub fn text_block_delays(&self) -> [String; 3] {
        GREETING_TEXT_DELAYS_S.map(|d| format!("animation-delay: {}s", d))
    }
}

fn tilt_style(tilt: Tilt) -> String {
    format!(
        "transform: {}; transition: {}",
        tilt.css_transform(GREETING_PERSPECTIVE_PX),
        GREETING_TILT_TRANSITION
    )
}

impl Section for GreetingSection {
    fn name(&self) -> &'static str {
        "greeting"
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
        self.hearts.expire(key) > 0
    }

    fn unmount(&mut self, timers: &mut dyn Timers) {
        self.hearts.clear(timers);
        self.mounted = false;
    }
}
