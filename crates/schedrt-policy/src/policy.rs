//! Policy selection.
//!
//! [`SchedPolicy`] is the closed set of disciplines; [`PolicySelector`] binds
//! exactly one of them for the lifetime of a scheduler and applies the base
//! priority rule before consulting it.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use schedrt_errors::SchedRtError;
use serde::{Deserialize, Serialize};

use crate::comparator::{Comparator, Edf, Llf, Pfs, Rms, WeightedEdf, Wsrt};
use crate::profile::SchedulingProfile;

/// Base priority as reported by the host.
///
/// Numerically lower values are more urgent. A base priority difference is
/// decided before any comparator runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct BasePriority(pub i32);

impl BasePriority {
    /// Wrap a raw host priority.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw host priority.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// `Less` when `self` must run before `other` regardless of policy.
    #[inline]
    #[must_use]
    pub fn precedence(self, other: Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Scheduling discipline applied among threads of equal base priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedPolicy {
    /// Earliest Deadline First
    #[default]
    Edf,
    /// Deadline divided by weight
    #[serde(alias = "wedf", alias = "weighted_edf")]
    WeightedEdf,
    /// Weighted Shortest Remaining Time
    Wsrt,
    /// Rate Monotonic (execution-time proxy)
    Rms,
    /// Least Laxity First
    Llf,
    /// Proportional Fair Scheduling
    Pfs,
}

impl SchedPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [SchedPolicy; 6] = [
        SchedPolicy::Edf,
        SchedPolicy::WeightedEdf,
        SchedPolicy::Wsrt,
        SchedPolicy::Rms,
        SchedPolicy::Llf,
        SchedPolicy::Pfs,
    ];

    /// Canonical policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SchedPolicy::Edf => "edf",
            SchedPolicy::WeightedEdf => "weighted-edf",
            SchedPolicy::Wsrt => "wsrt",
            SchedPolicy::Rms => "rms",
            SchedPolicy::Llf => "llf",
            SchedPolicy::Pfs => "pfs",
        }
    }

    /// Whether the policy divides by the thread weight.
    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(
            self,
            SchedPolicy::WeightedEdf | SchedPolicy::Wsrt | SchedPolicy::Pfs
        )
    }

    /// Whether the policy reads `time_left`, which the host must keep current.
    #[must_use]
    pub const fn uses_time_left(self) -> bool {
        matches!(self, SchedPolicy::Wsrt | SchedPolicy::Llf)
    }

    /// Whether `exec_time_estimate` is read as accumulated runtime.
    #[must_use]
    pub const fn uses_runtime(self) -> bool {
        matches!(self, SchedPolicy::Pfs)
    }
}

impl Comparator for SchedPolicy {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    #[inline]
    fn key(&self, profile: &SchedulingProfile) -> i128 {
        match self {
            SchedPolicy::Edf => Edf.key(profile),
            SchedPolicy::WeightedEdf => WeightedEdf.key(profile),
            SchedPolicy::Wsrt => Wsrt.key(profile),
            SchedPolicy::Rms => Rms.key(profile),
            SchedPolicy::Llf => Llf.key(profile),
            SchedPolicy::Pfs => Pfs.key(profile),
        }
    }
}

impl fmt::Display for SchedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedPolicy {
    type Err = SchedRtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edf" => Ok(SchedPolicy::Edf),
            "weighted-edf" | "weighted_edf" | "wedf" => Ok(SchedPolicy::WeightedEdf),
            "wsrt" => Ok(SchedPolicy::Wsrt),
            "rms" => Ok(SchedPolicy::Rms),
            "llf" => Ok(SchedPolicy::Llf),
            "pfs" => Ok(SchedPolicy::Pfs),
            _ => Err(SchedRtError::unknown_policy(s)),
        }
    }
}

/// A thread under consideration: its base priority and profile.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Host base priority
    pub priority: BasePriority,
    /// Scheduling profile
    pub profile: &'a SchedulingProfile,
}

impl<'a> Candidate<'a> {
    /// Pair a base priority with a profile.
    #[must_use]
    pub const fn new(priority: BasePriority, profile: &'a SchedulingProfile) -> Self {
        Self { priority, profile }
    }
}

/// The single comparator active for a scheduler.
///
/// Built once at start-of-day; there is no setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySelector {
    policy: SchedPolicy,
}

impl PolicySelector {
    /// Bind the given policy.
    #[must_use]
    pub const fn new(policy: SchedPolicy) -> Self {
        Self { policy }
    }

    /// The bound policy.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> SchedPolicy {
        self.policy
    }

    /// Order two candidates: base priority first, then the policy.
    ///
    /// `Less` means `a` runs first, `Equal` is a tie for the host to break.
    #[inline]
    #[must_use]
    pub fn order(&self, a: Candidate<'_>, b: Candidate<'_>) -> Ordering {
        a.priority
            .precedence(b.priority)
            .then_with(|| self.policy.compare(a.profile, b.profile))
    }

    /// Pick the best of a set of candidates.
    ///
    /// Ties keep the earlier item, so listing candidates in ready-queue order
    /// yields FIFO among equals. Returns `None` for an empty set.
    pub fn pick<'a, T, I>(&self, candidates: I) -> Option<T>
    where
        I: IntoIterator<Item = (T, Candidate<'a>)>,
    {
        let mut best: Option<(T, Candidate<'a>)> = None;
        for (item, candidate) in candidates {
            let replace = match &best {
                Some((_, current)) => self.order(candidate, *current) == Ordering::Less,
                None => true,
            };
            if replace {
                best = Some((item, candidate));
            }
        }
        best.map(|(item, _)| item)
    }
}

impl Default for PolicySelector {
    fn default() -> Self {
        Self::new(SchedPolicy::default())
    }
}

impl From<SchedPolicy> for PolicySelector {
    fn from(policy: SchedPolicy) -> Self {
        Self::new(policy)
    }
}
