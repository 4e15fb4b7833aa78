//! Per-thread real-time scheduling statistics.
//!
//! Each thread owns a [`StatsRecorder`] driven by the host's scheduling
//! events. Statistics are organised in additive tiers chosen at start-of-day
//! through [`StatsTiers`]:
//!
//! - **basic**: activation, completion, preemption, context-switch,
//!   deadline-miss and priority-inversion counters; total, min and max of
//!   response and waiting time; total execution time
//! - **squared**: running sums of squared response and waiting times, enough
//!   for a variance without keeping history
//! - **detailed**: last activation, ready, dispatch and completion timestamps
//!
//! Reading a tier that was not enabled yields an "unsupported" error from
//! [`schedrt_errors::SchedError`], never a panic. Too few samples yield 0.
//!
//! # Example
//!
//! ```
//! use schedrt_stats::prelude::*;
//!
//! let mut recorder = StatsRecorder::new(StatsTiers::basic_only().with_squared(true));
//! recorder.record_activation(0);
//! recorder.record_completion(5);
//! recorder.record_activation(10);
//! recorder.record_completion(19);
//!
//! let stats = recorder.snapshot()?;
//! assert_eq!(stats.average_response_time(), 7);
//! assert_eq!(stats.response_jitter(), 4);
//! assert_eq!(stats.response_variance()?, 4);
//! # Ok::<(), schedrt_errors::SchedError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(unused_must_use)]

pub mod recorder;
pub mod stats;
pub mod tiers;

pub mod prelude;

pub use recorder::{StatsRecorder, SwitchOutcome};
pub use stats::{DetailedTimestamps, RtStats, SquaredSums, Timestamp, TimingSummary};
pub use tiers::{StatsTier, StatsTiers};
