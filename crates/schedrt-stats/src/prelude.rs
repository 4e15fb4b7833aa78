//! Prelude module for common statistics types.

pub use crate::recorder::{StatsRecorder, SwitchOutcome};
pub use crate::stats::{DetailedTimestamps, RtStats, SquaredSums, Timestamp, TimingSummary};
pub use crate::tiers::{StatsTier, StatsTiers};
