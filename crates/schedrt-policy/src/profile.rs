//! Per-thread scheduling profile.

use serde::{Deserialize, Serialize};

/// Host time value (ticks of the host's monotonic clock).
pub type Timestamp = u64;

/// Scheduling parameters of one thread, read by the comparators.
///
/// A fresh profile is all zeros. Setters store exactly what they are given;
/// the only normalization is [`SchedulingProfile::effective_weight`], which
/// every weighted comparator goes through.
///
/// # RT Safety
///
/// POD type, `Copy`, no heap allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SchedulingProfile {
    /// Absolute deadline of the current job.
    pub deadline: Timestamp,
    /// Relative importance. Zero is stored as given and used as 1.
    pub weight: u32,
    /// Expected job duration (RMS) or accumulated runtime (PFS).
    pub exec_time_estimate: u64,
    /// Remaining execution time of the current job.
    pub time_left: u64,
}

impl SchedulingProfile {
    /// Create a zero-valued profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deadline: 0,
            weight: 0,
            exec_time_estimate: 0,
            time_left: 0,
        }
    }

    /// Set the absolute deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Timestamp) -> Self {
        self.deadline = deadline;
        self
    }

    /// Set the weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the execution-time estimate.
    #[must_use]
    pub const fn with_exec_time(mut self, exec_time_estimate: u64) -> Self {
        self.exec_time_estimate = exec_time_estimate;
        self
    }

    /// Set the remaining execution time.
    #[must_use]
    pub const fn with_time_left(mut self, time_left: u64) -> Self {
        self.time_left = time_left;
        self
    }

    /// Weight as used by divisions: never less than 1.
    #[inline]
    #[must_use]
    pub const fn effective_weight(&self) -> u64 {
        if self.weight == 0 { 1 } else { self.weight as u64 }
    }

    /// Laxity relative to the comparator's frame: `deadline - time_left`.
    ///
    /// Negative once the remaining work no longer fits before the deadline.
    #[inline]
    #[must_use]
    pub fn laxity(&self) -> i128 {
        i128::from(self.deadline) - i128::from(self.time_left)
    }

    /// Slack left at `now`: `deadline - time_left - now`.
    ///
    /// A negative value means the deadline can no longer be met.
    #[inline]
    #[must_use]
    pub fn laxity_at(&self, now: Timestamp) -> i128 {
        self.laxity() - i128::from(now)
    }

    /// Charge executed time against the current job.
    ///
    /// `time_left` saturates at zero. When `accumulate_runtime` is set the
    /// same amount is added to `exec_time_estimate`, which fairness policies
    /// read as virtual runtime.
    #[inline]
    pub fn charge(&mut self, elapsed: u64, accumulate_runtime: bool) {
        self.time_left = self.time_left.saturating_sub(elapsed);
        if accumulate_runtime {
            self.exec_time_estimate = self.exec_time_estimate.saturating_add(elapsed);
        }
    }
}
