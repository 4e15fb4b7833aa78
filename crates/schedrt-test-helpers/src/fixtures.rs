//! Task-set and profile fixtures.

use schedrt_core::prelude::{
    HostScheduler, RtSchedEngine, SchedResult, SchedulingProfile, ThreadHandle, Timestamp,
};

/// One periodic task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskFixture {
    /// Label used in assertions.
    pub name: &'static str,
    /// Deadline relative to release.
    pub deadline: u64,
    /// Release period.
    pub period: u64,
    /// Worst-case execution time.
    pub exec_time: u64,
    /// Remaining work at release. Equal to `exec_time` for periodic tasks.
    pub time_left: u64,
    /// Relative importance.
    pub weight: u32,
}

impl TaskFixture {
    /// A periodic task with a fresh job.
    #[must_use]
    pub const fn periodic(
        name: &'static str,
        deadline: u64,
        period: u64,
        exec_time: u64,
        weight: u32,
    ) -> Self {
        Self {
            name,
            deadline,
            period,
            exec_time,
            time_left: exec_time,
            weight,
        }
    }

    /// A task described only by its deadline and remaining work.
    #[must_use]
    pub const fn laxity(name: &'static str, deadline: u64, time_left: u64) -> Self {
        Self {
            name,
            deadline,
            period: deadline,
            exec_time: time_left,
            time_left,
            weight: 1,
        }
    }

    /// Profile of the job released at `release`.
    #[must_use]
    pub const fn profile_at(&self, release: Timestamp) -> SchedulingProfile {
        SchedulingProfile::new()
            .with_deadline(release.saturating_add(self.deadline))
            .with_weight(self.weight)
            .with_exec_time(self.exec_time)
            .with_time_left(self.time_left)
    }

    /// Profile of the job released at time 0.
    #[must_use]
    pub const fn profile(&self) -> SchedulingProfile {
        self.profile_at(0)
    }

    /// Processor utilisation in parts per thousand.
    #[must_use]
    pub fn utilisation_permille(&self) -> u64 {
        self.exec_time.saturating_mul(1000).checked_div(self.period).unwrap_or(0)
    }
}

/// Five periodic tasks of mixed urgency and weight.
pub const TASK_SET: [TaskFixture; 5] = [
    TaskFixture::periodic("high-a", 25, 50, 8, 5),
    TaskFixture::periodic("med-b", 40, 80, 12, 3),
    TaskFixture::periodic("low-c", 70, 120, 15, 2),
    TaskFixture::periodic("burst-d", 30, 60, 10, 4),
    TaskFixture::periodic("background-e", 90, 150, 18, 1),
];

/// Three tasks with laxities 5, 50 and 100.
pub const LAXITY_SET: [TaskFixture; 3] = [
    TaskFixture::laxity("urgent", 100, 95),
    TaskFixture::laxity("normal", 200, 150),
    TaskFixture::laxity("relaxed", 300, 200),
];

/// Ten response times with average 6, jitter 4 and variance 9.
pub const RESPONSE_SERIES: [u64; 10] = [5, 8, 7, 6, 9, 5, 6, 8, 7, 5];

/// Register every task with its release-0 profile, in order.
///
/// # Errors
///
/// Fails if the engine's thread table fills up.
pub fn register_tasks<H: HostScheduler>(
    engine: &RtSchedEngine<H>,
    tasks: &[TaskFixture],
) -> SchedResult<Vec<ThreadHandle>> {
    tasks
        .iter()
        .map(|task| engine.register_with(task.profile()))
        .collect()
}
