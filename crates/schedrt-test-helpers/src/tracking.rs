//! Heap allocation tracking for RT safety tests.
//!
//! Install [`TrackingAllocator`] as the global allocator of a test binary,
//! open an [`AllocationGuard`] around the code under test and check it with
//! [`assert_rt_safe!`](crate::assert_rt_safe). Counting is per thread and only
//! active while a guard is alive on that thread.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
    static ALLOCATED_BYTES: Cell<usize> = const { Cell::new(0) };
    static ACTIVE_GUARDS: Cell<usize> = const { Cell::new(0) };
}

fn tracking_active() -> bool {
    ACTIVE_GUARDS.with(|g| g.get() > 0)
}

fn count(bytes: usize) {
    ALLOCATIONS.with(|c| c.set(c.get().saturating_add(1)));
    ALLOCATED_BYTES.with(|b| b.set(b.get().saturating_add(bytes)));
}

/// Global allocator that forwards to [`System`] and counts allocations made
/// while an [`AllocationGuard`] is open.
pub struct TrackingAllocator;

// SAFETY: every call is forwarded unchanged to `System`; the bookkeeping only
// touches thread-local counters and never allocates.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: the caller upholds `GlobalAlloc::alloc`'s contract for `layout`.
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() && tracking_active() {
            count(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: `ptr` was returned by `System` for this `layout`.
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: `ptr` was returned by `System` for `layout`; the caller
        // upholds the `new_size` requirements.
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() && tracking_active() && new_size > layout.size() {
            count(new_size.saturating_sub(layout.size()));
        }
        new_ptr
    }
}

/// Scope in which allocations on the current thread are counted.
#[must_use = "allocations are only counted while the guard is alive"]
pub struct AllocationGuard {
    start_allocations: usize,
    start_bytes: usize,
}

impl AllocationGuard {
    /// Start counting on this thread.
    pub fn new() -> Self {
        ACTIVE_GUARDS.with(|g| g.set(g.get().saturating_add(1)));
        Self {
            start_allocations: ALLOCATIONS.with(Cell::get),
            start_bytes: ALLOCATED_BYTES.with(Cell::get),
        }
    }

    /// Allocations since the guard was opened.
    pub fn allocations(&self) -> usize {
        ALLOCATIONS
            .with(Cell::get)
            .saturating_sub(self.start_allocations)
    }

    /// Bytes allocated since the guard was opened.
    pub fn bytes(&self) -> usize {
        ALLOCATED_BYTES
            .with(Cell::get)
            .saturating_sub(self.start_bytes)
    }

    /// Whether anything was allocated since the guard was opened.
    pub fn has_allocations(&self) -> bool {
        self.allocations() > 0
    }
}

impl Default for AllocationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AllocationGuard {
    fn drop(&mut self) {
        ACTIVE_GUARDS.with(|g| g.set(g.get().saturating_sub(1)));
    }
}

/// Open an [`AllocationGuard`].
pub fn track() -> AllocationGuard {
    AllocationGuard::new()
}

/// Panic if the guard saw any allocation.
#[macro_export]
macro_rules! assert_rt_safe {
    ($guard:expr) => {
        $crate::assert_rt_safe!($guard, "RT path")
    };
    ($guard:expr, $context:expr) => {{
        let guard = &$guard;
        let allocations = guard.allocations();
        if allocations > 0 {
            panic!(
                "RT path allocation violation in '{}': {} allocations ({} bytes) at {}:{}",
                $context,
                allocations,
                guard.bytes(),
                file!(),
                line!()
            );
        }
    }};
}
