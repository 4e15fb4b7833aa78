//! The policy engine.
//!
//! [`RtSchedEngine`] owns one scheduling profile and one statistics recorder
//! per registered thread, the active [`PolicySelector`], and a single lock
//! that makes comparisons, profile updates and statistics reads mutually
//! exclusive.
//!
//! # RT Safety
//!
//! After construction the thread table never grows. Profile setters and
//! getters, `compare`, `pick_next`, every hook and `snapshot` are O(1) or
//! O(candidates), allocation-free and hold the lock only for field copies.

use core::cmp::Ordering;

use parking_lot::Mutex;
use schedrt_errors::{Result, SchedError, SchedResult};
use schedrt_policy::{BasePriority, Candidate, PolicySelector, SchedPolicy, SchedulingProfile, Timestamp};
use schedrt_stats::{RtStats, StatsRecorder, StatsTiers, SwitchOutcome};

use crate::arena::ThreadArena;
use crate::config::{EngineConfig, ProfileMaintenance};
use crate::hooks::SchedEventHooks;
use crate::host::{HostScheduler, ThreadHandle};

#[derive(Debug, Clone, Copy)]
struct ThreadRecord {
    profile: SchedulingProfile,
    stats: StatsRecorder,
}

impl ThreadRecord {
    fn new(profile: SchedulingProfile, tiers: StatsTiers) -> Self {
        Self {
            profile,
            stats: StatsRecorder::new(tiers),
        }
    }

    fn deschedule(&mut self, now: Timestamp, maintenance: ProfileMaintenance) -> SwitchOutcome {
        let outcome = self.stats.on_descheduled(now);
        if let SwitchOutcome::Accepted(slice) = outcome {
            maintenance.apply(&mut self.profile, slice);
        }
        outcome
    }
}

#[derive(Debug)]
struct EngineState {
    selector: PolicySelector,
    threads: ThreadArena<ThreadRecord>,
    /// Thread that last left the CPU, until the next dispatch.
    last_descheduled: Option<ThreadHandle>,
}

impl EngineState {
    /// Dispatch `thread`. A different thread that left the CPU just before
    /// is counted as preempted.
    fn dispatch(&mut self, thread: ThreadHandle, now: Timestamp) -> SchedResult<SwitchOutcome> {
        let outcome = self.threads.get_mut(thread)?.stats.on_dispatch(now);
        if outcome.is_accepted() {
            if let Some(previous) = self.last_descheduled.take() {
                if previous != thread {
                    if let Ok(record) = self.threads.get_mut(previous) {
                        record.stats.record_preemption();
                    }
                }
            }
        }
        Ok(outcome)
    }

    fn deschedule(
        &mut self,
        thread: ThreadHandle,
        now: Timestamp,
        maintenance: ProfileMaintenance,
    ) -> SchedResult<SwitchOutcome> {
        let outcome = self.threads.get_mut(thread)?.deschedule(now, maintenance);
        if outcome.is_accepted() {
            self.last_descheduled = Some(thread);
        }
        Ok(outcome)
    }
}

/// Scheduling policy engine bound to a host.
///
/// # Thread Safety
///
/// All state sits behind one `parking_lot::Mutex`. Host queries for the
/// current time happen before the lock is taken; base priorities are read
/// under it.
pub struct RtSchedEngine<H> {
    host: H,
    tiers: StatsTiers,
    maintenance: ProfileMaintenance,
    state: Mutex<EngineState>,
}

impl<H: HostScheduler> RtSchedEngine<H> {
    /// Create an engine with a preallocated thread table.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(host: H, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let tiers = config.tiers.normalize();

        tracing::info!(
            policy = %config.policy,
            basic = tiers.basic,
            squared = tiers.squared,
            detailed = tiers.detailed,
            max_threads = config.max_threads,
            "Scheduling policy engine initialised"
        );

        Ok(Self {
            host,
            tiers,
            maintenance: config.maintenance,
            state: Mutex::new(EngineState {
                selector: PolicySelector::new(config.policy),
                threads: ThreadArena::with_capacity(config.max_threads),
                last_descheduled: None,
            }),
        })
    }

    /// Create an engine with [`EngineConfig::default`].
    ///
    /// # Errors
    ///
    /// Never fails with the default configuration; the signature matches
    /// [`RtSchedEngine::new`].
    pub fn with_defaults(host: H) -> Result<Self> {
        Self::new(host, EngineConfig::default())
    }

    /// The host this engine queries.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Active policy.
    #[must_use]
    pub fn policy(&self) -> SchedPolicy {
        self.state.lock().selector.policy()
    }

    /// Statistics tiers after normalization.
    #[must_use]
    pub const fn tiers(&self) -> StatsTiers {
        self.tiers
    }

    /// Automatic profile upkeep.
    #[must_use]
    pub const fn maintenance(&self) -> ProfileMaintenance {
        self.maintenance
    }

    /// Number of registered threads.
    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.state.lock().threads.len()
    }

    /// Thread table capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.state.lock().threads.capacity()
    }

    /// Handles of all registered threads. Allocates; not for the hot path.
    #[must_use]
    pub fn threads(&self) -> Vec<ThreadHandle> {
        self.state
            .lock()
            .threads
            .iter()
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Replace the active policy.
    ///
    /// Re-selecting the active policy always succeeds.
    ///
    /// # Errors
    ///
    /// [`SchedError::PolicyLocked`] while any thread is registered.
    pub fn set_policy(&self, policy: SchedPolicy) -> SchedResult {
        let mut state = self.state.lock();
        let current = state.selector.policy();
        if current == policy {
            return Ok(());
        }
        if !state.threads.is_empty() {
            tracing::warn!(
                current = %current,
                requested = %policy,
                threads = state.threads.len(),
                "Policy change rejected while threads are registered"
            );
            return Err(SchedError::PolicyLocked);
        }
        state.selector = PolicySelector::new(policy);
        tracing::info!(policy = %policy, "Scheduling policy changed");
        Ok(())
    }

    /// Register a thread with a zeroed profile and statistics.
    ///
    /// # Errors
    ///
    /// [`SchedError::CapacityExhausted`] when the thread table is full.
    pub fn register(&self) -> SchedResult<ThreadHandle> {
        self.register_with(SchedulingProfile::new())
    }

    /// Register a thread with an initial profile.
    ///
    /// # Errors
    ///
    /// [`SchedError::CapacityExhausted`] when the thread table is full.
    pub fn register_with(&self, profile: SchedulingProfile) -> SchedResult<ThreadHandle> {
        let mut state = self.state.lock();
        let capacity = state.threads.capacity();
        let handle = state
            .threads
            .insert(ThreadRecord::new(profile, self.tiers))
            .inspect_err(|_| tracing::warn!(capacity, "Thread table full"))?;
        tracing::debug!(thread = %handle, "Thread registered");
        Ok(handle)
    }

    /// Drop a thread's profile and statistics.
    ///
    /// Returns the final statistics when the basic tier is enabled.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn unregister(&self, thread: ThreadHandle) -> SchedResult<Option<RtStats>> {
        let record = self.state.lock().threads.remove(thread)?;
        tracing::debug!(thread = %thread, "Thread unregistered");
        Ok(record.stats.snapshot().ok())
    }

    /// Resolve the host's current thread to a registered handle.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] when the host reports no current thread
    /// or one that is not registered.
    pub fn current(&self) -> SchedResult<ThreadHandle> {
        let thread = self.host.current_thread().ok_or(SchedError::UnknownThread)?;
        if self.state.lock().threads.contains(thread) {
            Ok(thread)
        } else {
            Err(SchedError::UnknownThread)
        }
    }

    fn read<T>(&self, thread: ThreadHandle, f: impl FnOnce(&ThreadRecord) -> T) -> SchedResult<T> {
        self.state.lock().threads.get(thread).map(f)
    }

    fn update<T>(
        &self,
        thread: ThreadHandle,
        f: impl FnOnce(&mut ThreadRecord) -> T,
    ) -> SchedResult<T> {
        self.state.lock().threads.get_mut(thread).map(f)
    }

    /// Set the absolute deadline.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn set_deadline(&self, thread: ThreadHandle, deadline: Timestamp) -> SchedResult {
        self.update(thread, |r| r.profile.deadline = deadline)
    }

    /// Set the deadline to `current_time() + delta`, saturating.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn set_relative_deadline(&self, thread: ThreadHandle, delta: u64) -> SchedResult {
        let deadline = self.host.current_time().saturating_add(delta);
        self.set_deadline(thread, deadline)
    }

    /// Set the weight. Zero is stored and later used as 1.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn set_weight(&self, thread: ThreadHandle, weight: u32) -> SchedResult {
        self.update(thread, |r| r.profile.weight = weight)
    }

    /// Set the execution-time estimate.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn set_exec_time(&self, thread: ThreadHandle, exec_time: u64) -> SchedResult {
        self.update(thread, |r| r.profile.exec_time_estimate = exec_time)
    }

    /// Set the remaining execution time.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn set_time_left(&self, thread: ThreadHandle, time_left: u64) -> SchedResult {
        self.update(thread, |r| r.profile.time_left = time_left)
    }

    /// Replace the whole profile in one step.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn set_profile(&self, thread: ThreadHandle, profile: SchedulingProfile) -> SchedResult {
        self.update(thread, |r| r.profile = profile)
    }

    /// Charge executed time against the current job.
    ///
    /// `time_left` saturates at 0; with runtime accumulation configured the
    /// same amount is added to `exec_time_estimate`.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn charge_execution(&self, thread: ThreadHandle, elapsed: u64) -> SchedResult {
        let accumulate = self.maintenance.accumulate_runtime;
        self.update(thread, |r| r.profile.charge(elapsed, accumulate))
    }

    /// Copy of the profile.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn profile(&self, thread: ThreadHandle) -> SchedResult<SchedulingProfile> {
        self.read(thread, |r| r.profile)
    }

    /// Absolute deadline.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn deadline(&self, thread: ThreadHandle) -> SchedResult<Timestamp> {
        self.read(thread, |r| r.profile.deadline)
    }

    /// Stored weight, which may be 0.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn weight(&self, thread: ThreadHandle) -> SchedResult<u32> {
        self.read(thread, |r| r.profile.weight)
    }

    /// Execution-time estimate or accumulated runtime.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn exec_time(&self, thread: ThreadHandle) -> SchedResult<u64> {
        self.read(thread, |r| r.profile.exec_time_estimate)
    }

    /// Remaining execution time.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn time_left(&self, thread: ThreadHandle) -> SchedResult<u64> {
        self.read(thread, |r| r.profile.time_left)
    }

    /// Slack at the host's current time, negative once the deadline can no
    /// longer be met.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn laxity(&self, thread: ThreadHandle) -> SchedResult<i128> {
        let now = self.host.current_time();
        self.read(thread, |r| r.profile.laxity_at(now))
    }

    /// Order two threads: base priority first, then the active policy.
    ///
    /// `Less` means `a` runs first; `Equal` leaves the choice to the host.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] if either handle is stale.
    pub fn compare(&self, a: ThreadHandle, b: ThreadHandle) -> SchedResult<Ordering> {
        let state = self.state.lock();
        let pa = state.threads.get(a)?.profile;
        let pb = state.threads.get(b)?.profile;
        Ok(state.selector.order(
            Candidate::new(self.host.base_priority(a), &pa),
            Candidate::new(self.host.base_priority(b), &pb),
        ))
    }

    /// The candidate that should run next, or `None` for an empty slice.
    ///
    /// Ties go to the earlier candidate, so passing the ready queue in order
    /// gives FIFO among equals. All profiles are read under one lock.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] if any candidate is stale.
    pub fn pick_next(&self, candidates: &[ThreadHandle]) -> SchedResult<Option<ThreadHandle>> {
        let state = self.state.lock();
        for &thread in candidates {
            state.threads.get(thread)?;
        }
        let threads = &state.threads;
        Ok(state.selector.pick(candidates.iter().filter_map(|&thread| {
            threads.get(thread).ok().map(|record| {
                let priority: BasePriority = self.host.base_priority(thread);
                (thread, Candidate::new(priority, &record.profile))
            })
        })))
    }

    /// Consistent copy of a thread's statistics.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle,
    /// [`SchedError::StatsDisabled`] without the basic tier.
    pub fn snapshot(&self, thread: ThreadHandle) -> SchedResult<RtStats> {
        self.read(thread, |r| r.stats.snapshot())?
    }

    /// Zero a thread's statistics.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale handle.
    pub fn reset_stats(&self, thread: ThreadHandle) -> SchedResult {
        self.update(thread, |r| r.stats.reset())?;
        tracing::debug!(thread = %thread, "Thread statistics reset");
        Ok(())
    }

    fn report_out_of_order(thread: ThreadHandle, hook: &'static str, outcome: SwitchOutcome) {
        if outcome == SwitchOutcome::OutOfOrder {
            tracing::warn!(thread = %thread, hook, "Out-of-order switch notification ignored");
        }
    }
}

impl<H: HostScheduler> SchedEventHooks for RtSchedEngine<H> {
    fn record_activation(&self, thread: ThreadHandle) -> SchedResult {
        let now = self.host.current_time();
        self.update(thread, |r| r.stats.record_activation(now))
    }

    fn record_completion(&self, thread: ThreadHandle) -> SchedResult {
        let now = self.host.current_time();
        self.update(thread, |r| r.stats.record_completion(now))
    }

    fn record_deadline_miss(&self, thread: ThreadHandle) -> SchedResult {
        self.update(thread, |r| r.stats.record_deadline_miss())
    }

    fn record_priority_inversion(&self, thread: ThreadHandle) -> SchedResult {
        self.update(thread, |r| r.stats.record_priority_inversion())
    }

    fn on_enqueued(&self, thread: ThreadHandle) -> SchedResult {
        let now = self.host.current_time();
        self.update(thread, |r| r.stats.on_enqueued(now))
    }

    fn on_dispatch(&self, thread: ThreadHandle) -> SchedResult {
        let now = self.host.current_time();
        let outcome = self.state.lock().dispatch(thread, now)?;
        Self::report_out_of_order(thread, "on_dispatch", outcome);
        Ok(())
    }

    fn on_descheduled(&self, thread: ThreadHandle) -> SchedResult {
        let now = self.host.current_time();
        let maintenance = self.maintenance;
        let outcome = self.state.lock().deschedule(thread, now, maintenance)?;
        Self::report_out_of_order(thread, "on_descheduled", outcome);
        Ok(())
    }

    fn on_switch(
        &self,
        outgoing: Option<ThreadHandle>,
        incoming: Option<ThreadHandle>,
    ) -> SchedResult {
        if outgoing == incoming {
            return Ok(());
        }
        let now = self.host.current_time();
        let maintenance = self.maintenance;
        let mut state = self.state.lock();
        if let Some(thread) = outgoing {
            state.threads.get(thread)?;
        }
        if let Some(thread) = incoming {
            state.threads.get(thread)?;
        }

        // The switch names its outgoing thread; an earlier deschedule does not
        // carry over.
        state.last_descheduled = None;
        if let Some(thread) = outgoing {
            let outcome = state.deschedule(thread, now, maintenance)?;
            Self::report_out_of_order(thread, "on_switch", outcome);
        }
        match incoming {
            Some(thread) => {
                let outcome = state.dispatch(thread, now)?;
                Self::report_out_of_order(thread, "on_switch", outcome);
            }
            None => state.last_descheduled = None,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

    /// Flat-priority host with a manual clock.
    #[derive(Default)]
    struct ClockHost {
        now: AtomicU64,
    }

    impl ClockHost {
        fn advance(&self, ticks: u64) {
            self.now.fetch_add(ticks, AtomicOrdering::SeqCst);
        }
    }

    impl HostScheduler for ClockHost {
        fn base_priority(&self, _thread: ThreadHandle) -> BasePriority {
            BasePriority(0)
        }

        fn current_time(&self) -> Timestamp {
            self.now.load(AtomicOrdering::SeqCst)
        }

        fn current_thread(&self) -> Option<ThreadHandle> {
            None
        }
    }

    fn engine(policy: SchedPolicy) -> Result<RtSchedEngine<ClockHost>> {
        RtSchedEngine::new(
            ClockHost::default(),
            EngineConfig::builder()
                .policy(policy)
                .tiers(StatsTiers::all())
                .max_threads(4)
                .build()?,
        )
    }

    #[test]
    fn test_register_until_full() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        for _ in 0..4 {
            engine.register()?;
        }
        assert_eq!(engine.register(), Err(SchedError::CapacityExhausted));
        assert_eq!(engine.thread_count(), 4);
        Ok(())
    }

    #[test]
    fn test_setters_and_getters() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let t = engine.register()?;
        engine.set_deadline(t, 100)?;
        engine.set_weight(t, 0)?;
        engine.set_exec_time(t, 12)?;
        engine.set_time_left(t, 7)?;

        assert_eq!(engine.deadline(t)?, 100);
        assert_eq!(engine.weight(t)?, 0);
        assert_eq!(engine.exec_time(t)?, 12);
        assert_eq!(engine.time_left(t)?, 7);
        assert_eq!(engine.profile(t)?.effective_weight(), 1);
        Ok(())
    }

    #[test]
    fn test_relative_deadline_uses_host_clock() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let t = engine.register()?;
        engine.host().advance(40);
        engine.set_relative_deadline(t, 60)?;
        assert_eq!(engine.deadline(t)?, 100);
        Ok(())
    }

    #[test]
    fn test_stale_handle_rejected() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let t = engine.register()?;
        engine.unregister(t)?;
        assert_eq!(engine.set_weight(t, 3), Err(SchedError::UnknownThread));
        assert_eq!(engine.snapshot(t), Err(SchedError::UnknownThread));
        assert_eq!(engine.on_dispatch(t), Err(SchedError::UnknownThread));
        Ok(())
    }

    #[test]
    fn test_policy_locked_once_threads_exist() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        engine.set_policy(SchedPolicy::Llf)?;
        let t = engine.register()?;
        assert_eq!(engine.set_policy(SchedPolicy::Pfs), Err(SchedError::PolicyLocked));
        assert_eq!(engine.set_policy(SchedPolicy::Llf), Ok(()));
        engine.unregister(t)?;
        engine.set_policy(SchedPolicy::Pfs)?;
        assert_eq!(engine.policy(), SchedPolicy::Pfs);
        Ok(())
    }

    #[test]
    fn test_switch_counts_preemption_on_outgoing() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let a = engine.register()?;
        let b = engine.register()?;

        engine.on_switch(None, Some(a))?;
        engine.host().advance(5);
        engine.on_switch(Some(a), Some(b))?;
        engine.host().advance(3);
        engine.on_switch(Some(b), None)?;

        let sa = engine.snapshot(a)?;
        let sb = engine.snapshot(b)?;
        assert_eq!(sa.preemptions, 1);
        assert_eq!(sa.context_switches, 2);
        assert_eq!(sa.total_exec_time, 5);
        assert_eq!(sb.preemptions, 0);
        assert_eq!(sb.total_exec_time, 3);
        Ok(())
    }

    #[test]
    fn test_switch_from_idle_outgoing_counts_nothing() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let a = engine.register()?;
        let b = engine.register()?;

        engine.on_switch(Some(a), Some(b))?;
        let sa = engine.snapshot(a)?;
        assert_eq!(sa.preemptions, 0);
        assert_eq!(sa.context_switches, 0);
        assert_eq!(engine.snapshot(b)?.context_switches, 1);
        Ok(())
    }

    #[test]
    fn test_separate_hooks_count_preemption() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let a = engine.register()?;
        let b = engine.register()?;

        engine.on_dispatch(a)?;
        engine.host().advance(5);
        engine.on_descheduled(a)?;
        engine.on_dispatch(b)?;
        assert_eq!(engine.snapshot(a)?.preemptions, 1);
        assert_eq!(engine.snapshot(b)?.preemptions, 0);

        // Same thread back on the CPU is not a preemption.
        engine.on_descheduled(b)?;
        engine.on_dispatch(b)?;
        assert_eq!(engine.snapshot(b)?.preemptions, 0);
        Ok(())
    }

    #[test]
    fn test_switch_to_idle_does_not_carry_preemption() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let a = engine.register()?;
        let b = engine.register()?;

        engine.on_switch(None, Some(a))?;
        engine.on_switch(Some(a), None)?;
        engine.on_switch(None, Some(b))?;
        assert_eq!(engine.snapshot(a)?.preemptions, 0);
        Ok(())
    }

    #[test]
    fn test_switch_to_self_is_noop() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let a = engine.register()?;
        engine.on_switch(Some(a), Some(a))?;
        assert_eq!(engine.snapshot(a)?.context_switches, 0);
        Ok(())
    }

    #[test]
    fn test_switch_validates_before_recording() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let a = engine.register()?;
        let gone = engine.register()?;
        engine.unregister(gone)?;
        engine.on_dispatch(a)?;

        assert_eq!(engine.on_switch(Some(a), Some(gone)), Err(SchedError::UnknownThread));
        let stats = engine.snapshot(a)?;
        assert_eq!(stats.preemptions, 0);
        assert_eq!(stats.context_switches, 1);
        Ok(())
    }

    #[test]
    fn test_pick_next_prefers_first_on_tie() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let a = engine.register_with(SchedulingProfile::new().with_deadline(50))?;
        let b = engine.register_with(SchedulingProfile::new().with_deadline(50))?;
        let c = engine.register_with(SchedulingProfile::new().with_deadline(70))?;

        assert_eq!(engine.pick_next(&[c, b, a])?, Some(b));
        assert_eq!(engine.pick_next(&[])?, None);
        Ok(())
    }

    #[test]
    fn test_unregister_returns_final_stats() -> Result<()> {
        let engine = engine(SchedPolicy::Edf)?;
        let t = engine.register()?;
        engine.record_activation(t)?;
        let stats = engine.unregister(t)?;
        assert_eq!(stats.map(|s| s.activations), Some(1));
        Ok(())
    }
}
