//! Ordering policies for threads that share a base priority.
//!
//! When the host must choose among ready threads at the same base priority it
//! hands their [`SchedulingProfile`]s to the single [`PolicySelector`] bound at
//! start-of-day, which applies one of six disciplines:
//!
//! - **EDF**: earliest absolute deadline
//! - **Weighted EDF**: lowest `deadline / weight`
//! - **WSRT**: lowest `time_left / weight`
//! - **RMS**: lowest execution-time estimate (period proxy)
//! - **LLF**: lowest laxity `deadline - time_left`, negative allowed
//! - **PFS**: lowest virtual runtime `exec_time_estimate / weight`
//!
//! # RT-Safety Guarantees
//!
//! - **No heap allocations** in any comparator or in [`PolicySelector::pick`]
//! - **No blocking**, no callbacks into the host
//! - **O(1)** per comparison
//! - A zero weight is used as 1 through [`SchedulingProfile::effective_weight`];
//!   it is never an error
//!
//! # Example
//!
//! ```
//! use schedrt_policy::prelude::*;
//! use std::cmp::Ordering;
//!
//! let selector = PolicySelector::new(SchedPolicy::WeightedEdf);
//! let a = SchedulingProfile::new().with_deadline(100).with_weight(2);
//! let b = SchedulingProfile::new().with_deadline(120).with_weight(1);
//!
//! let order = selector.order(
//!     Candidate::new(BasePriority(5), &a),
//!     Candidate::new(BasePriority(5), &b),
//! );
//! assert_eq!(order, Ordering::Less);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(unused_must_use)]

pub mod comparator;
pub mod policy;
pub mod profile;

pub mod prelude;

pub use comparator::{Comparator, Edf, Llf, Pfs, Rms, WeightedEdf, Wsrt};
pub use policy::{BasePriority, Candidate, PolicySelector, SchedPolicy};
pub use profile::{SchedulingProfile, Timestamp};
