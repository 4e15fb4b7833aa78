//! Statistics snapshot and derived metrics.
//!
//! [`RtStats`] is a plain copy of one thread's statistics, taken under the
//! host's scheduling lock. Everything on it beyond the raw fields is a pure
//! function of the copy.

use schedrt_errors::{SchedError, SchedResult};
use serde::{Deserialize, Serialize};

/// Host time value, in host ticks.
pub type Timestamp = u64;

/// Running total, minimum and maximum of one timing series.
///
/// `min` and `max` stay zero until the first sample arrives.
///
/// # RT Safety
///
/// POD type, `Copy`, no heap allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Sum of all samples (saturating).
    pub total: u64,
    /// Smallest sample.
    pub min: u64,
    /// Largest sample.
    pub max: u64,
}

impl TimingSummary {
    /// Fold one sample in. `first` must be true for the first sample since
    /// the last reset.
    #[inline]
    pub fn record(&mut self, sample: u64, first: bool) {
        self.total = self.total.saturating_add(sample);
        if first {
            self.min = sample;
            self.max = sample;
        } else {
            self.min = self.min.min(sample);
            self.max = self.max.max(sample);
        }
    }

    /// `max - min`.
    #[inline]
    #[must_use]
    pub const fn spread(&self) -> u64 {
        self.max.saturating_sub(self.min)
    }
}

/// Running sums of squared samples (tier "squared").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SquaredSums {
    /// Sum of squared response times.
    pub response: u128,
    /// Sum of squared waiting times.
    pub waiting: u128,
}

impl SquaredSums {
    #[inline]
    pub(crate) fn add(acc: &mut u128, sample: u64) {
        let square = u128::from(sample).saturating_mul(u128::from(sample));
        *acc = acc.saturating_add(square);
    }
}

/// Most recent event timestamps (tier "detailed").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetailedTimestamps {
    /// Last `record_activation`.
    pub last_activation_time: Timestamp,
    /// Last insertion into the ready queue.
    pub last_ready_time: Timestamp,
    /// Last dispatch onto the CPU.
    pub last_dispatch_time: Timestamp,
    /// Last job completion or removal from the CPU.
    pub last_completion_time: Timestamp,
}

/// Per-thread real-time statistics.
///
/// Counters saturate at `u64::MAX`. The optional tiers are `None` when they
/// were not enabled at start-of-day.
///
/// # RT Safety
///
/// POD type, `Copy`, no heap allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RtStats {
    /// Jobs released.
    pub activations: u64,
    /// Jobs completed.
    pub completions: u64,
    /// Times the thread lost the CPU to a different thread.
    pub preemptions: u64,
    /// Dispatches plus deschedulings.
    pub context_switches: u64,
    /// Deadline misses reported by the host.
    pub deadline_misses: u64,
    /// Priority inversions reported by the host.
    pub priority_inversions: u64,
    /// Activation to completion.
    pub response: TimingSummary,
    /// Ready to dispatch.
    pub waiting: TimingSummary,
    /// Time spent on the CPU between dispatch and deschedule.
    pub total_exec_time: u64,
    /// Tier "squared".
    pub squared: Option<SquaredSums>,
    /// Tier "detailed".
    pub detailed: Option<DetailedTimestamps>,
}

impl RtStats {
    /// Zeroed statistics with the optional tiers present as requested.
    #[must_use]
    pub fn with_tiers(squared: bool, detailed: bool) -> Self {
        Self {
            squared: squared.then(SquaredSums::default),
            detailed: detailed.then(DetailedTimestamps::default),
            ..Self::default()
        }
    }

    /// Average response time, 0 without activations.
    #[must_use]
    pub fn average_response_time(&self) -> u64 {
        self.response.total.checked_div(self.activations).unwrap_or(0)
    }

    /// Average waiting time, 0 without activations.
    #[must_use]
    pub fn average_waiting_time(&self) -> u64 {
        self.waiting.total.checked_div(self.activations).unwrap_or(0)
    }

    /// Average execution time, 0 without activations.
    #[must_use]
    pub fn average_exec_time(&self) -> u64 {
        self.total_exec_time.checked_div(self.activations).unwrap_or(0)
    }

    /// Deadline misses as a percentage of activations.
    ///
    /// Returns 0.0 if no activations have been recorded.
    #[must_use]
    pub fn miss_ratio(&self) -> f64 {
        if self.activations == 0 {
            0.0
        } else {
            (self.deadline_misses as f64 / self.activations as f64) * 100.0
        }
    }

    /// `max - min` of response times, 0 below two activations.
    #[must_use]
    pub fn response_jitter(&self) -> u64 {
        if self.activations < 2 {
            return 0;
        }
        self.response.spread()
    }

    /// `max - min` of waiting times, 0 below two activations.
    #[must_use]
    pub fn waiting_jitter(&self) -> u64 {
        if self.activations < 2 {
            return 0;
        }
        self.waiting.spread()
    }

    /// Response-time variance `E[X^2] - E[X]^2`.
    ///
    /// # Errors
    ///
    /// [`SchedError::SquaredTierDisabled`] without the squared tier.
    pub fn response_variance(&self) -> SchedResult<u64> {
        let sums = self.squared.ok_or(SchedError::SquaredTierDisabled)?;
        Ok(variance(self.response.total, sums.response, self.activations))
    }

    /// Waiting-time variance `E[X^2] - E[X]^2`.
    ///
    /// # Errors
    ///
    /// [`SchedError::SquaredTierDisabled`] without the squared tier.
    pub fn waiting_variance(&self) -> SchedResult<u64> {
        let sums = self.squared.ok_or(SchedError::SquaredTierDisabled)?;
        Ok(variance(self.waiting.total, sums.waiting, self.activations))
    }

    /// Integer square root of [`RtStats::response_variance`].
    ///
    /// # Errors
    ///
    /// [`SchedError::SquaredTierDisabled`] without the squared tier.
    pub fn response_stddev(&self) -> SchedResult<u64> {
        self.response_variance().map(u64::isqrt)
    }

    /// Integer square root of [`RtStats::waiting_variance`].
    ///
    /// # Errors
    ///
    /// [`SchedError::SquaredTierDisabled`] without the squared tier.
    pub fn waiting_stddev(&self) -> SchedResult<u64> {
        self.waiting_variance().map(u64::isqrt)
    }

    /// Detailed timestamps.
    ///
    /// # Errors
    ///
    /// [`SchedError::DetailedTierDisabled`] without the detailed tier.
    pub fn timestamps(&self) -> SchedResult<DetailedTimestamps> {
        self.detailed.ok_or(SchedError::DetailedTierDisabled)
    }
}

/// Sum-of-squares variance, 0 below two samples.
fn variance(total: u64, sum_squares: u128, n: u64) -> u64 {
    if n < 2 {
        return 0;
    }
    let n = u128::from(n);
    let mean = u128::from(total) / n;
    let mean_of_squares = sum_squares / n;
    let value = mean_of_squares.saturating_sub(mean.saturating_mul(mean));
    u64::try_from(value).unwrap_or(u64::MAX)
}
