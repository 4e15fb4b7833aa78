//! Per-thread statistics recorder.
//!
//! A [`StatsRecorder`] sits next to each thread's scheduling profile and is
//! driven by the host's scheduling events. It keeps the anchors it needs to
//! turn events into durations (activation, ready and dispatch times) and folds
//! the resulting samples into the tiers enabled at start-of-day.
//!
//! # RT Safety
//!
//! Every method is O(1), allocation-free and never blocks. The recorder does
//! no locking of its own; the caller provides exclusion.

use schedrt_errors::SchedResult;

use crate::stats::{DetailedTimestamps, RtStats, SquaredSums, Timestamp};
use crate::tiers::{StatsTier, StatsTiers};

/// Result of a dispatch or deschedule notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Accepted. Carries the CPU time of the slice for a deschedule, 0 for a
    /// dispatch.
    Accepted(u64),
    /// Dispatch of a running thread or deschedule of an idle one. Nothing
    /// was recorded.
    OutOfOrder,
}

impl SwitchOutcome {
    /// Whether the notification was recorded.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, SwitchOutcome::Accepted(_))
    }
}

/// Event-driven statistics for one thread.
#[derive(Debug, Clone, Copy)]
pub struct StatsRecorder {
    tiers: StatsTiers,
    stats: RtStats,
    response_samples: u64,
    waiting_samples: u64,
    job_started: Option<Timestamp>,
    ready_since: Option<Timestamp>,
    running_since: Option<Timestamp>,
}

impl StatsRecorder {
    /// Create a zeroed recorder for the given tiers.
    #[must_use]
    pub fn new(tiers: StatsTiers) -> Self {
        let tiers = tiers.normalize();
        Self {
            tiers,
            stats: RtStats::with_tiers(tiers.squared, tiers.detailed),
            response_samples: 0,
            waiting_samples: 0,
            job_started: None,
            ready_since: None,
            running_since: None,
        }
    }

    /// Tiers this recorder maintains.
    #[must_use]
    pub const fn tiers(&self) -> StatsTiers {
        self.tiers
    }

    /// Whether the thread is between a dispatch and a deschedule.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Whether a job has been activated and not yet completed.
    #[must_use]
    pub const fn has_open_job(&self) -> bool {
        self.job_started.is_some()
    }

    /// Zero every statistic.
    ///
    /// Dispatch and ready state survive so the next hook still pairs with the
    /// one before the reset. The open job anchor is dropped.
    pub fn reset(&mut self) {
        self.stats = RtStats::with_tiers(self.tiers.squared, self.tiers.detailed);
        self.response_samples = 0;
        self.waiting_samples = 0;
        self.job_started = None;
    }

    /// Copy of the current statistics.
    ///
    /// # Errors
    ///
    /// [`schedrt_errors::SchedError::StatsDisabled`] when the basic tier is
    /// off.
    pub fn snapshot(&self) -> SchedResult<RtStats> {
        self.tiers.require(StatsTier::Basic)?;
        Ok(self.stats)
    }

    /// A new job was released at `now`.
    #[inline]
    pub fn record_activation(&mut self, now: Timestamp) {
        self.job_started = Some(now);
        if !self.tiers.basic {
            return;
        }
        self.stats.activations = self.stats.activations.saturating_add(1);
        self.stamp(|t| t.last_activation_time = now);
    }

    /// The current job finished at `now`.
    ///
    /// With an open job the response time `now - activation` is sampled.
    #[inline]
    pub fn record_completion(&mut self, now: Timestamp) {
        let started = self.job_started.take();
        if !self.tiers.basic {
            return;
        }
        self.stats.completions = self.stats.completions.saturating_add(1);
        if let Some(started) = started {
            let response = now.saturating_sub(started);
            self.stats.response.record(response, self.response_samples == 0);
            self.response_samples = self.response_samples.saturating_add(1);
            if let Some(sums) = self.stats.squared.as_mut() {
                SquaredSums::add(&mut sums.response, response);
            }
        }
        self.stamp(|t| t.last_completion_time = now);
    }

    /// The host detected a deadline miss.
    #[inline]
    pub fn record_deadline_miss(&mut self) {
        if self.tiers.basic {
            self.stats.deadline_misses = self.stats.deadline_misses.saturating_add(1);
        }
    }

    /// The host detected a priority inversion involving this thread.
    #[inline]
    pub fn record_priority_inversion(&mut self) {
        if self.tiers.basic {
            self.stats.priority_inversions = self.stats.priority_inversions.saturating_add(1);
        }
    }

    /// The thread lost the CPU to a different thread.
    #[inline]
    pub fn record_preemption(&mut self) {
        if self.tiers.basic {
            self.stats.preemptions = self.stats.preemptions.saturating_add(1);
        }
    }

    /// The thread entered the ready queue at `now`.
    #[inline]
    pub fn on_enqueued(&mut self, now: Timestamp) {
        self.ready_since = Some(now);
        self.stamp(|t| t.last_ready_time = now);
    }

    /// The thread was given the CPU at `now`.
    ///
    /// A pending ready time turns into a waiting-time sample.
    #[inline]
    pub fn on_dispatch(&mut self, now: Timestamp) -> SwitchOutcome {
        if self.running_since.is_some() {
            return SwitchOutcome::OutOfOrder;
        }
        self.running_since = Some(now);
        let ready = self.ready_since.take();
        if !self.tiers.basic {
            return SwitchOutcome::Accepted(0);
        }
        self.stats.context_switches = self.stats.context_switches.saturating_add(1);
        if let Some(ready) = ready {
            let waiting = now.saturating_sub(ready);
            self.stats.waiting.record(waiting, self.waiting_samples == 0);
            self.waiting_samples = self.waiting_samples.saturating_add(1);
            if let Some(sums) = self.stats.squared.as_mut() {
                SquaredSums::add(&mut sums.waiting, waiting);
            }
        }
        self.stamp(|t| t.last_dispatch_time = now);
        SwitchOutcome::Accepted(0)
    }

    /// The thread was removed from the CPU at `now`.
    ///
    /// The accepted outcome carries the slice length, which the caller may
    /// charge against the thread's profile.
    #[inline]
    pub fn on_descheduled(&mut self, now: Timestamp) -> SwitchOutcome {
        let Some(since) = self.running_since.take() else {
            return SwitchOutcome::OutOfOrder;
        };
        let slice = now.saturating_sub(since);
        if self.tiers.basic {
            self.stats.context_switches = self.stats.context_switches.saturating_add(1);
            self.stats.total_exec_time = self.stats.total_exec_time.saturating_add(slice);
            self.stamp(|t| t.last_completion_time = now);
        }
        SwitchOutcome::Accepted(slice)
    }

    #[inline]
    fn stamp(&mut self, update: impl FnOnce(&mut DetailedTimestamps)) {
        if let Some(timestamps) = self.stats.detailed.as_mut() {
            update(timestamps);
        }
    }
}

impl Default for StatsRecorder {
    fn default() -> Self {
        Self::new(StatsTiers::default())
    }
}
