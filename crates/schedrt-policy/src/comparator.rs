//! The six ordering disciplines.
//!
//! Every comparator reduces a profile to a single signed key and orders
//! ascending on it: `Ordering::Less` means the first argument runs first,
//! `Ordering::Equal` is a tie left to the host (typically FIFO). Reducing to
//! a key makes each comparator total and transitive by construction.
//!
//! # RT Safety
//!
//! All comparators are O(1), allocation-free and side-effect-free. Keys are
//! computed in `i128` so no input combination can overflow.

use core::cmp::Ordering;

use crate::profile::SchedulingProfile;

/// A pure ordering over two scheduling profiles.
pub trait Comparator {
    /// Short policy name used in logs.
    fn name(&self) -> &'static str;

    /// Ordering key of a profile; lower runs first.
    fn key(&self, profile: &SchedulingProfile) -> i128;

    /// Compare two profiles. `Less` means `a` runs before `b`.
    #[inline]
    fn compare(&self, a: &SchedulingProfile, b: &SchedulingProfile) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

/// Earliest Deadline First.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edf;

impl Comparator for Edf {
    fn name(&self) -> &'static str {
        "edf"
    }

    #[inline]
    fn key(&self, profile: &SchedulingProfile) -> i128 {
        i128::from(profile.deadline)
    }
}

/// Weighted EDF: `deadline / weight`, truncating.
///
/// Truncation can make two different (deadline, weight) pairs tie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedEdf;

impl Comparator for WeightedEdf {
    fn name(&self) -> &'static str {
        "weighted-edf"
    }

    #[inline]
    fn key(&self, profile: &SchedulingProfile) -> i128 {
        i128::from(profile.deadline / profile.effective_weight())
    }
}

/// Weighted Shortest Remaining Time: `time_left / weight`.
///
/// Only meaningful while the host keeps `time_left` current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wsrt;

impl Comparator for Wsrt {
    fn name(&self) -> &'static str {
        "wsrt"
    }

    #[inline]
    fn key(&self, profile: &SchedulingProfile) -> i128 {
        i128::from(profile.time_left / profile.effective_weight())
    }
}

/// Rate Monotonic with the execution-time estimate standing in for the period.
///
/// Static: deadlines play no part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rms;

impl Comparator for Rms {
    fn name(&self) -> &'static str {
        "rms"
    }

    #[inline]
    fn key(&self, profile: &SchedulingProfile) -> i128 {
        i128::from(profile.exec_time_estimate)
    }
}

/// Least Laxity First: `deadline - time_left`.
///
/// Negative laxity still orders; more negative runs first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Llf;

impl Comparator for Llf {
    fn name(&self) -> &'static str {
        "llf"
    }

    #[inline]
    fn key(&self, profile: &SchedulingProfile) -> i128 {
        profile.laxity()
    }
}

/// Proportional Fair Scheduling: virtual runtime `exec_time_estimate / weight`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pfs;

impl Comparator for Pfs {
    fn name(&self) -> &'static str {
        "pfs"
    }

    #[inline]
    fn key(&self, profile: &SchedulingProfile) -> i128 {
        i128::from(profile.exec_time_estimate / profile.effective_weight())
    }
}
