//! Scheduling event notifications.
//!
//! The host calls these from its scheduling paths, with its scheduling lock
//! held. Implementations must stay O(1), never block, never allocate and
//! never call back into the host.
//!
//! Expected call pattern per thread:
//! - `on_enqueued` once per ready-queue insertion
//! - `on_dispatch` and `on_descheduled` strictly alternating
//! - `record_activation`, `record_completion`, `record_deadline_miss` and
//!   `record_priority_inversion` zero or more times per job

use schedrt_errors::SchedResult;

use crate::host::ThreadHandle;

/// Event sink for the host scheduler.
///
/// Every method fails with `SchedError::UnknownThread` for a handle that
/// does not name a registered thread; nothing is recorded in that case.
pub trait SchedEventHooks {
    /// A new job of `thread` was released.
    fn record_activation(&self, thread: ThreadHandle) -> SchedResult;

    /// The current job of `thread` finished.
    fn record_completion(&self, thread: ThreadHandle) -> SchedResult;

    /// `thread` missed its deadline.
    fn record_deadline_miss(&self, thread: ThreadHandle) -> SchedResult;

    /// `thread` was blocked behind a lower-priority holder.
    fn record_priority_inversion(&self, thread: ThreadHandle) -> SchedResult;

    /// `thread` was inserted into the ready queue.
    fn on_enqueued(&self, thread: ThreadHandle) -> SchedResult;

    /// `thread` was given the CPU.
    ///
    /// A different thread that was the last to leave the CPU is charged a
    /// preemption.
    fn on_dispatch(&self, thread: ThreadHandle) -> SchedResult;

    /// `thread` was removed from the CPU.
    fn on_descheduled(&self, thread: ThreadHandle) -> SchedResult;

    /// One context switch from `outgoing` to `incoming`, either side possibly
    /// idle.
    ///
    /// When both are present and differ, `outgoing` is charged a preemption,
    /// provided it was actually running.
    fn on_switch(
        &self,
        outgoing: Option<ThreadHandle>,
        incoming: Option<ThreadHandle>,
    ) -> SchedResult;
}
