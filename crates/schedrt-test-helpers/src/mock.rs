//! Scriptable host scheduler for tests.
//!
//! [`MockHost`] stands in for the host side of the engine: a manual clock, a
//! base-priority table and a settable current thread. Every accessor is
//! non-blocking for readers and allocation-free, so it can back RT safety
//! tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use schedrt_core::prelude::{BasePriority, HostScheduler, ThreadHandle, Timestamp};

/// A [`HostScheduler`] driven entirely by the test.
#[derive(Debug, Default)]
pub struct MockHost {
    now: AtomicU64,
    default_priority: BasePriority,
    priorities: RwLock<HashMap<ThreadHandle, BasePriority>>,
    current: RwLock<Option<ThreadHandle>>,
    priority_queries: AtomicU64,
}

impl MockHost {
    /// Clock at 0, every thread at base priority 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base priority for threads without an explicit entry.
    #[must_use]
    pub fn with_default_priority(mut self, priority: BasePriority) -> Self {
        self.default_priority = priority;
        self
    }

    /// Start the clock at `now`.
    #[must_use]
    pub fn starting_at(self, now: Timestamp) -> Self {
        self.set_time(now);
        self
    }

    /// Jump the clock to `now`.
    pub fn set_time(&self, now: Timestamp) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Move the clock forward by `ticks` and return the new time.
    pub fn advance(&self, ticks: u64) -> Timestamp {
        self.now
            .fetch_add(ticks, Ordering::SeqCst)
            .saturating_add(ticks)
    }

    /// Set the base priority of `thread`.
    pub fn set_priority(&self, thread: ThreadHandle, priority: BasePriority) {
        self.priorities.write().insert(thread, priority);
    }

    /// Set the thread the host reports as running.
    pub fn set_current(&self, thread: Option<ThreadHandle>) {
        *self.current.write() = thread;
    }

    /// How many times the engine asked for a base priority.
    #[must_use]
    pub fn priority_queries(&self) -> u64 {
        self.priority_queries.load(Ordering::SeqCst)
    }
}

impl HostScheduler for MockHost {
    fn base_priority(&self, thread: ThreadHandle) -> BasePriority {
        self.priority_queries.fetch_add(1, Ordering::SeqCst);
        self.priorities
            .read()
            .get(&thread)
            .copied()
            .unwrap_or(self.default_priority)
    }

    fn current_time(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }

    fn current_thread(&self) -> Option<ThreadHandle> {
        *self.current.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::must;
    use schedrt_core::ThreadArena;

    #[test]
    fn test_clock() {
        let host = MockHost::new().starting_at(100);
        assert_eq!(host.current_time(), 100);
        assert_eq!(host.advance(25), 125);
        host.set_time(7);
        assert_eq!(host.current_time(), 7);
    }

    #[test]
    fn test_priorities_and_current() {
        let mut arena = ThreadArena::with_capacity(2);
        let a = must(arena.insert(()));
        let b = must(arena.insert(()));

        let host = MockHost::new().with_default_priority(BasePriority(9));
        host.set_priority(a, BasePriority(1));
        assert_eq!(host.base_priority(a), BasePriority(1));
        assert_eq!(host.base_priority(b), BasePriority(9));
        assert_eq!(host.priority_queries(), 2);

        assert_eq!(host.current_thread(), None);
        host.set_current(Some(b));
        assert_eq!(host.current_thread(), Some(b));
    }
}
