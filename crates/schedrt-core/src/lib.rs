//! Real-time scheduling policy engine.
//!
//! Ties the pieces together for a host scheduler:
//!
//! - [`HostScheduler`]: what the engine consumes from the host (base
//!   priorities, monotonic time, the current thread)
//! - [`RtSchedEngine`]: per-thread profiles and statistics in a preallocated
//!   table, the active policy, and one lock over all of it
//! - [`SchedEventHooks`]: the notifications the host delivers from its
//!   scheduling paths
//! - [`EngineConfig`]: start-of-day policy, statistics tiers, capacity and
//!   profile upkeep
//!
//! Base priority always decides first; the policy only orders threads that
//! share a base priority.
//!
//! # Example
//!
//! ```
//! use schedrt_core::prelude::*;
//!
//! struct Host;
//!
//! impl HostScheduler for Host {
//!     fn base_priority(&self, _thread: ThreadHandle) -> BasePriority {
//!         BasePriority(5)
//!     }
//!     fn current_time(&self) -> Timestamp {
//!         0
//!     }
//!     fn current_thread(&self) -> Option<ThreadHandle> {
//!         None
//!     }
//! }
//!
//! let config = EngineConfig::builder().policy(SchedPolicy::WeightedEdf).build()?;
//! let engine = RtSchedEngine::new(Host, config)?;
//!
//! let a = engine.register()?;
//! engine.set_deadline(a, 100)?;
//! engine.set_weight(a, 2)?;
//!
//! let b = engine.register()?;
//! engine.set_deadline(b, 120)?;
//! engine.set_weight(b, 1)?;
//!
//! assert_eq!(engine.pick_next(&[b, a])?, Some(a));
//! # Ok::<(), schedrt_errors::SchedRtError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(unused_must_use)]

pub mod arena;
pub mod config;
pub mod engine;
pub mod hooks;
pub mod host;

pub mod prelude;

pub use arena::ThreadArena;
pub use config::{EngineConfig, EngineConfigBuilder, MAX_THREADS, ProfileMaintenance};
pub use engine::RtSchedEngine;
pub use hooks::SchedEventHooks;
pub use host::{HostScheduler, ThreadHandle};
