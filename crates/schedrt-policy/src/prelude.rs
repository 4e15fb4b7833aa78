//! Prelude module for common policy types.

pub use crate::comparator::{Comparator, Edf, Llf, Pfs, Rms, WeightedEdf, Wsrt};
pub use crate::policy::{BasePriority, Candidate, PolicySelector, SchedPolicy};
pub use crate::profile::{SchedulingProfile, Timestamp};
