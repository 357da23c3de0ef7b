use crate::timer::{ExpiryKey, TimerId, Timers};
use fnv::FnvHashMap;
use std::time::Duration;

/// Identity of one entry in an [`ExpiringList`]. Unique for the life of the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

#[derive(Clone, Debug)]
pub struct Entry<T> {
    pub id: ParticleId,
    pub item: T,
    group: ExpiryKey,
}

/// Append-only list whose entries remove themselves after a fixed lifetime.
///
/// Every insertion (a single entry or a whole group) owns exactly one pending
/// timer. [`ExpiringList::clear`] cancels all of them, so nothing scheduled by
/// the list can land after its owner is torn down.
#[derive(Debug)]
pub struct ExpiringList<T> {
    entries: Vec<Entry<T>>,
    pending: FnvHashMap<ExpiryKey, TimerId>,
    next: u64,
}

impl<T> Default for ExpiringList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            pending: FnvHashMap::default(),
            next: 0,
        }
    }
}

impl<T> ExpiringList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh(&mut self) -> u64 {
        let v = self.next;
        self.next += 1;
        v
    }

    /// Insert one entry and schedule its removal.
    pub fn push(&mut self, item: T, lifetime: Duration, timers: &mut dyn Timers) -> ParticleId {
        let id = ParticleId(self.fresh());
        let group = ExpiryKey(id.0);
        self.entries.push(Entry { id, item, group });
        let timer = timers.start(lifetime, group);
        self.pending.insert(group, timer);
        id
    }

    /// Insert a batch that expires as a unit under a single timer.
    pub fn push_group<I>(&mut self, items: I, lifetime: Duration, timers: &mut dyn Timers) -> ExpiryKey
    where
        I: IntoIterator<Item = T>,
    {
        let group = ExpiryKey(self.fresh());
        for item in items {
            let id = ParticleId(self.fresh());
            self.entries.push(Entry { id, item, group });
        }
        let timer = timers.start(lifetime, group);
        self.pending.insert(group, timer);
        group
    }

    /// Handle a fired timer. Returns how many entries were removed; a key this
    /// list is not waiting on removes nothing.
    pub fn expire(&mut self, key: ExpiryKey) -> usize {
        if self.pending.remove(&key).is_none() {
            return 0;
        }
        let before = self.entries.len();
        self.entries.retain(|e| e.group != key);
        let removed = before - self.entries.len();
        log::debug!("expired {} entries for {:?}", removed, key);
        removed
    }

    /// Drop every entry and cancel every pending timer.
    pub fn clear(&mut self, timers: &mut dyn Timers) {
        for (_, timer) in self.pending.drain() {
            timers.cancel(timer);
        }
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending_timers(&self) -> usize {
        self.pending.len()
    }
}
