//! Fire-once timer abstraction.
//!
//! Sections never talk to the browser clock directly. They ask a [`Timers`]
//! implementation to deliver an [`ExpiryKey`] back to them after a delay, and
//! they keep the returned [`TimerId`] so the request can be cancelled when the
//! owning section goes away. The web frontend backs this with
//! `setTimeout`/`clearTimeout`; tests use [`VirtualTimers`].

use std::time::Duration;

/// Opaque handle for one scheduled delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Value handed back to the owning section when its timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpiryKey(pub u64);

pub trait Timers {
    /// Schedule `key` to be delivered once after `delay`.
    fn start(&mut self, delay: Duration, key: ExpiryKey) -> TimerId;
    /// Cancel a pending delivery. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Clone, Debug)]
struct Pending {
    id: TimerId,
    due: Duration,
    key: ExpiryKey,
}

/// Manually advanced clock. Timers fire in due order, ties in start order.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return the keys of every timer that came due.
    pub fn advance(&mut self, by: Duration) -> Vec<ExpiryKey> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(p.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|p| (p.due, p.id));
        due.into_iter().map(|p| p.key).collect()
    }
}

impl Timers for VirtualTimers {
    fn start(&mut self, delay: Duration, key: ExpiryKey) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay,
            key,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|p| p.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut t = VirtualTimers::new();
        t.start(Duration::from_millis(300), ExpiryKey(3));
        t.start(Duration::from_millis(100), ExpiryKey(1));
        t.start(Duration::from_millis(200), ExpiryKey(2));
        assert_eq!(
            t.advance(Duration::from_millis(300)),
            vec![ExpiryKey(1), ExpiryKey(2), ExpiryKey(3)]
        );
        assert_eq!(t.pending_count(), 0);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut t = VirtualTimers::new();
        let id = t.start(Duration::from_millis(10), ExpiryKey(7));
        t.cancel(id);
        assert!(t.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn not_due_before_its_delay() {
        let mut t = VirtualTimers::new();
        t.start(Duration::from_millis(1200), ExpiryKey(0));
        assert!(t.advance(Duration::from_millis(1199)).is_empty());
        assert_eq!(t.advance(Duration::from_millis(1)), vec![ExpiryKey(0)]);
    }
}
