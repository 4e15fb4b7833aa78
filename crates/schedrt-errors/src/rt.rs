//! Hot-path error codes.
//!
//! Everything that can go wrong while the host holds its scheduling lock is
//! described by [`SchedError`]:
//! - `Copy` semantics (no heap allocations)
//! - Fixed `#[repr(u8)]` codes for compact reporting
//! - No string payloads

use core::fmt;

use crate::common::{ErrorCategory, ErrorSeverity};

/// Scheduling and statistics error codes.
///
/// # Examples
///
/// ```
/// use schedrt_errors::{ErrorSeverity, SchedError};
///
/// let err = SchedError::StatsDisabled;
///
/// assert_eq!(err.code(), 2);
/// assert_eq!(err.severity(), ErrorSeverity::Info);
/// assert!(err.is_recoverable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SchedError {
    /// Handle does not name a live thread record
    UnknownThread = 1,
    /// Basic statistics tier is not enabled
    StatsDisabled = 2,
    /// Squared-sum statistics tier is not enabled
    SquaredTierDisabled = 3,
    /// Detailed timestamp statistics tier is not enabled
    DetailedTierDisabled = 4,
    /// Policy cannot change while threads are scheduled
    PolicyLocked = 5,
    /// Thread table has no free slot
    CapacityExhausted = 6,
}

impl SchedError {
    /// Get the numeric error code.
    ///
    /// ```
    /// use schedrt_errors::SchedError;
    ///
    /// assert_eq!(SchedError::UnknownThread.code(), 1);
    /// assert_eq!(SchedError::PolicyLocked.code(), 5);
    /// ```
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Get the error severity.
    pub fn severity(self) -> ErrorSeverity {
        match self {
            SchedError::UnknownThread => ErrorSeverity::Error,
            SchedError::StatsDisabled
            | SchedError::SquaredTierDisabled
            | SchedError::DetailedTierDisabled => ErrorSeverity::Info,
            SchedError::PolicyLocked => ErrorSeverity::Warning,
            SchedError::CapacityExhausted => ErrorSeverity::Critical,
        }
    }

    /// Get the subsystem the error belongs to.
    pub fn category(self) -> ErrorCategory {
        match self {
            SchedError::UnknownThread | SchedError::CapacityExhausted => ErrorCategory::Threads,
            SchedError::StatsDisabled
            | SchedError::SquaredTierDisabled
            | SchedError::DetailedTierDisabled => ErrorCategory::Statistics,
            SchedError::PolicyLocked => ErrorCategory::Policy,
        }
    }

    /// Check if the caller can carry on without reconfiguring the engine.
    ///
    /// Tier errors only mean "this figure is not collected"; they never
    /// invalidate scheduling decisions.
    pub fn is_recoverable(self) -> bool {
        matches!(
            self,
            SchedError::StatsDisabled
                | SchedError::SquaredTierDisabled
                | SchedError::DetailedTierDisabled
                | SchedError::PolicyLocked
        )
    }

    /// Check if the error reports a disabled statistics tier.
    pub fn is_unsupported(self) -> bool {
        matches!(
            self,
            SchedError::StatsDisabled
                | SchedError::SquaredTierDisabled
                | SchedError::DetailedTierDisabled
        )
    }

    /// Create an error from a code.
    ///
    /// Returns `None` if the code does not correspond to a known error.
    ///
    /// ```
    /// use schedrt_errors::SchedError;
    ///
    /// assert_eq!(SchedError::from_code(3), Some(SchedError::SquaredTierDisabled));
    /// assert_eq!(SchedError::from_code(0), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(SchedError::UnknownThread),
            2 => Some(SchedError::StatsDisabled),
            3 => Some(SchedError::SquaredTierDisabled),
            4 => Some(SchedError::DetailedTierDisabled),
            5 => Some(SchedError::PolicyLocked),
            6 => Some(SchedError::CapacityExhausted),
            _ => None,
        }
    }
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedError::UnknownThread => write!(f, "Unknown thread handle"),
            SchedError::StatsDisabled => write!(f, "RT statistics are disabled"),
            SchedError::SquaredTierDisabled => write!(f, "Squared statistics tier is disabled"),
            SchedError::DetailedTierDisabled => {
                write!(f, "Detailed statistics tier is disabled")
            }
            SchedError::PolicyLocked => {
                write!(f, "Scheduling policy cannot change while threads are scheduled")
            }
            SchedError::CapacityExhausted => write!(f, "Thread table capacity exhausted"),
        }
    }
}

impl std::error::Error for SchedError {}
