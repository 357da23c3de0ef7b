use crate::reveal::{IntersectionSample, RevealLatch};
use crate::timer::{ExpiryKey, Timers};

/// Lifecycle shared by every page section.
///
/// After `unmount` a section ignores timer deliveries and input, and holds no
/// pending timers.
pub trait Section {
    fn name(&self) -> &'static str;

    fn latch(&self) -> &RevealLatch;

    fn latch_mut(&mut self) -> &mut RevealLatch;

    fn is_mounted(&self) -> bool;

    /// Returns `true` if the delivery changed visible state.
    fn on_timer(&mut self, key: ExpiryKey) -> bool;

    fn unmount(&mut self, timers: &mut dyn Timers);

    fn is_visible(&self) -> bool {
        self.latch().is_visible()
    }

    /// Returns `true` on the single report that reveals the section.
    fn on_intersection(&mut self, sample: IntersectionSample) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let flipped = self.latch_mut().observe(sample);
        if flipped {
            log::debug!("[{}] revealed at ratio {:.2}", self.name(), sample.ratio);
        }
        flipped
    }
}

/// Entrance animation used by the reveal classes in style.css.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    Up,
    Left,
    Right,
}

#[inline]
pub fn reveal_class(visible: bool, entrance: Entrance) -> &'static str {
    match (visible, entrance) {
        (true, Entrance::Up) => "animate-fade-in-up",
        (true, Entrance::Left) => "animate-fade-in-left",
        (true, Entrance::Right) => "animate-fade-in-right",
        (false, Entrance::Up) => "opacity-0 translate-y-10",
        (false, Entrance::Left) => "opacity-0 -translate-x-20",
        (false, Entrance::Right) => "opacity-0 translate-x-20",
    }
}
