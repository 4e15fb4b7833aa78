//! Top-level error type, classification and severity.

use core::fmt;

use crate::SchedError;

/// Top-level error type for start-of-day and configuration paths.
///
/// Hot-path operations report [`SchedError`] directly; anything that may
/// allocate (configuration loading, policy parsing) reports this type.
#[derive(Debug, thiserror::Error)]
pub enum SchedRtError {
    /// Scheduling or statistics error code
    #[error("Scheduler error: {0}")]
    Sched(#[from] SchedError),

    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Policy name not recognised
    #[error("Unknown scheduling policy: {0}")]
    UnknownPolicy(String),
}

impl SchedRtError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SchedRtError::Sched(e) => e.category(),
            SchedRtError::Config(_) => ErrorCategory::Config,
            SchedRtError::UnknownPolicy(_) => ErrorCategory::Policy,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SchedRtError::Sched(e) => e.severity(),
            SchedRtError::Config(_) | SchedRtError::UnknownPolicy(_) => ErrorSeverity::Error,
        }
    }

    /// Check if this error is recoverable.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Critical
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        SchedRtError::Config(msg.into())
    }

    /// Create an unknown-policy error for the given name.
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        SchedRtError::UnknownPolicy(name.into())
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Thread table and handle errors
    Threads = 0,
    /// Policy selection errors
    Policy = 1,
    /// Statistics tier errors
    Statistics = 2,
    /// Configuration errors
    Config = 3,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Threads => write!(f, "Threads"),
            ErrorCategory::Policy => write!(f, "Policy"),
            ErrorCategory::Statistics => write!(f, "Statistics"),
            ErrorCategory::Config => write!(f, "Config"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Caller misuse that leaves the engine consistent
    Warning = 1,
    /// Operation failed
    Error = 2,
    /// Engine cannot accept further threads
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Threads.to_string(), "Threads");
        assert_eq!(ErrorCategory::Statistics.to_string(), "Statistics");
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Critical > ErrorSeverity::Error);
        assert!(ErrorSeverity::Error > ErrorSeverity::Warning);
        assert!(ErrorSeverity::Warning > ErrorSeverity::Info);
    }

    #[test]
    fn test_sched_error_converts() {
        let err: SchedRtError = SchedError::CapacityExhausted.into();
        assert_eq!(err.category(), ErrorCategory::Threads);
        assert!(!err.is_recoverable());

        let err = SchedRtError::config("max_threads must be greater than 0");
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(err.is_recoverable());
    }
}
