//! What the engine needs from the host scheduler.

use core::fmt;

use schedrt_policy::{BasePriority, Timestamp};
use serde::{Deserialize, Serialize};

/// Opaque identity of a registered thread.
///
/// Handles are generational: once a thread is unregistered its handle stops
/// resolving, even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ThreadHandle {
    index: u32,
    generation: u32,
}

impl ThreadHandle {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index in the thread table.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when the handle was issued.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ThreadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thread#{}.{}", self.index, self.generation)
    }
}

/// Services consumed from the host scheduler.
///
/// Implementations must be cheap and non-blocking: they are queried while
/// the engine holds its lock.
pub trait HostScheduler {
    /// Base priority of `thread`. Numerically lower is more urgent.
    fn base_priority(&self, thread: ThreadHandle) -> BasePriority;

    /// Monotonic time in host ticks.
    fn current_time(&self) -> Timestamp;

    /// The thread currently executing, if the host tracks one.
    fn current_thread(&self) -> Option<ThreadHandle>;
}

impl<H: HostScheduler + ?Sized> HostScheduler for &H {
    fn base_priority(&self, thread: ThreadHandle) -> BasePriority {
        (**self).base_priority(thread)
    }

    fn current_time(&self) -> Timestamp {
        (**self).current_time()
    }

    fn current_thread(&self) -> Option<ThreadHandle> {
        (**self).current_thread()
    }
}

impl<H: HostScheduler + ?Sized> HostScheduler for std::sync::Arc<H> {
    fn base_priority(&self, thread: ThreadHandle) -> BasePriority {
        (**self).base_priority(thread)
    }

    fn current_time(&self) -> Timestamp {
        (**self).current_time()
    }

    fn current_thread(&self) -> Option<ThreadHandle> {
        (**self).current_thread()
    }
}
