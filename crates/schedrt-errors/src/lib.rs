//! Error types for the schedrt policy engine.
//!
//! Two layers:
//!
//! - [`rt`]: [`SchedError`], the `Copy` error codes returned while the host
//!   holds its scheduling lock (unknown handle, disabled statistics tier,
//!   locked policy, exhausted thread table).
//! - [`common`]: [`SchedRtError`], the top-level error for configuration and
//!   start-of-day paths, plus [`ErrorCategory`] and [`ErrorSeverity`].
//!
//! Degenerate inputs such as a zero weight or too few samples for a variance
//! are never errors; they are resolved with documented sentinels where they
//! are used.
//!
//! # Example
//!
//! ```
//! use schedrt_errors::prelude::*;
//!
//! fn require_stats(enabled: bool) -> SchedResult {
//!     if !enabled {
//!         return Err(SchedError::StatsDisabled);
//!     }
//!     Ok(())
//! }
//!
//! let err: SchedRtError = require_stats(false).err().map_or(
//!     SchedRtError::config("unreachable"),
//!     SchedRtError::from,
//! );
//! assert_eq!(err.category(), ErrorCategory::Statistics);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod prelude;
pub mod rt;

pub use common::{ErrorCategory, ErrorSeverity, SchedRtError};
pub use rt::SchedError;

/// A specialized `Result` type for start-of-day operations.
pub type Result<T> = std::result::Result<T, SchedRtError>;

/// A specialized `Result` type for hot-path operations.
pub type SchedResult<T = ()> = std::result::Result<T, SchedError>;
