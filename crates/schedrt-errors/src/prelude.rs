//! Prelude module for convenient error handling imports.

pub use crate::{
    Result, SchedResult,
    common::{ErrorCategory, ErrorSeverity, SchedRtError},
    rt::SchedError,
};
