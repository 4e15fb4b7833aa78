//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use schedrt_test_helpers::prelude::*;
//! ```

pub use crate::init_test_tracing;
pub use crate::must::{must, must_parse, must_some, must_unsupported, must_with};

#[cfg(feature = "tracking")]
pub use crate::tracking::{AllocationGuard, track};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{
    LAXITY_SET, RESPONSE_SERIES, TASK_SET, TaskFixture, register_tasks,
};

#[cfg(feature = "mock")]
pub use crate::mock::MockHost;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
