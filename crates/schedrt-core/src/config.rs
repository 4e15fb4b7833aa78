//! Start-of-day engine configuration.

use schedrt_errors::{Result, SchedRtError};
use schedrt_policy::{SchedPolicy, SchedulingProfile};
use schedrt_stats::StatsTiers;
use serde::{Deserialize, Serialize};

/// Largest supported thread table.
pub const MAX_THREADS: usize = 65_536;

/// Profile upkeep the engine performs itself when a thread leaves the CPU.
///
/// Both are off by default; the host then keeps `time_left` and the runtime
/// current through the profile setters or `charge_execution`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileMaintenance {
    /// Subtract each slice from `time_left`, saturating at 0.
    pub decrement_time_left: bool,
    /// Add each slice to `exec_time_estimate`.
    pub accumulate_runtime: bool,
}

impl ProfileMaintenance {
    /// No automatic upkeep.
    #[must_use]
    pub const fn manual() -> Self {
        Self {
            decrement_time_left: false,
            accumulate_runtime: false,
        }
    }

    /// The upkeep the given policy reads from.
    ///
    /// WSRT and LLF need a current `time_left`; PFS reads accumulated runtime.
    #[must_use]
    pub const fn for_policy(policy: SchedPolicy) -> Self {
        Self {
            decrement_time_left: policy.uses_time_left(),
            accumulate_runtime: policy.uses_runtime(),
        }
    }

    /// Apply one executed slice to `profile`.
    #[inline]
    pub fn apply(self, profile: &mut SchedulingProfile, slice: u64) {
        if self.decrement_time_left {
            profile.charge(slice, self.accumulate_runtime);
        } else if self.accumulate_runtime {
            profile.exec_time_estimate = profile.exec_time_estimate.saturating_add(slice);
        }
    }
}

/// Engine configuration, fixed once threads are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ordering discipline among equal base priorities.
    pub policy: SchedPolicy,
    /// Statistics tiers maintained for every thread.
    pub tiers: StatsTiers,
    /// Thread table capacity, reserved up front.
    pub max_threads: usize,
    /// Automatic profile upkeep on deschedule.
    pub maintenance: ProfileMaintenance,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy: SchedPolicy::Edf,
            tiers: StatsTiers::basic_only(),
            max_threads: 64,
            maintenance: ProfileMaintenance::manual(),
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_threads` is 0 or above [`MAX_THREADS`].
    pub fn validate(&self) -> Result<()> {
        if self.max_threads == 0 {
            return Err(SchedRtError::config("max_threads must be greater than 0"));
        }
        if self.max_threads > MAX_THREADS {
            return Err(SchedRtError::config(format!(
                "max_threads must not exceed {MAX_THREADS}"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, an unknown policy name or an
    /// invalid value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SchedRtError::config(format!("invalid engine configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SchedRtError::config(format!("cannot serialize engine configuration: {e}")))
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

/// Builder for `EngineConfig`.
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Set the scheduling policy.
    #[must_use]
    pub fn policy(mut self, policy: SchedPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set the statistics tiers.
    #[must_use]
    pub fn tiers(mut self, tiers: StatsTiers) -> Self {
        self.config.tiers = tiers;
        self
    }

    /// Set the thread table capacity.
    #[must_use]
    pub fn max_threads(mut self, max_threads: usize) -> Self {
        self.config.max_threads = max_threads;
        self
    }

    /// Set the automatic profile upkeep.
    #[must_use]
    pub fn maintenance(mut self, maintenance: ProfileMaintenance) -> Self {
        self.config.maintenance = maintenance;
        self
    }

    /// Use the upkeep the configured policy reads from.
    #[must_use]
    pub fn maintenance_for_policy(mut self) -> Self {
        self.config.maintenance = ProfileMaintenance::for_policy(self.config.policy);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
