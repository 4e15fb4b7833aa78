//! Prelude module for the policy engine.
//!
//! Re-exports the engine together with the policy, statistics and error
//! types a host needs to drive it.

pub use crate::config::{EngineConfig, EngineConfigBuilder, ProfileMaintenance};
pub use crate::engine::RtSchedEngine;
pub use crate::hooks::SchedEventHooks;
pub use crate::host::{HostScheduler, ThreadHandle};

pub use schedrt_errors::{SchedError, SchedResult, SchedRtError};
pub use schedrt_policy::{
    BasePriority, Candidate, Comparator, PolicySelector, SchedPolicy, SchedulingProfile,
    Timestamp,
};
pub use schedrt_stats::{RtStats, StatsTier, StatsTiers};
