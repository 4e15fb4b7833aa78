//! Statistics detail tiers.

use schedrt_errors::{SchedError, SchedResult};
use serde::{Deserialize, Serialize};

/// One tier of statistics detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsTier {
    /// Counters plus totals, min and max of response and waiting time.
    Basic,
    /// Running sums of squares, for variance.
    Squared,
    /// Last activation, ready, dispatch and completion timestamps.
    Detailed,
}

/// Which tiers are maintained, fixed at start-of-day.
///
/// `squared` and `detailed` extend `basic`; on their own they have nothing to
/// extend, which is why [`StatsTiers::normalize`] drops them when `basic` is
/// off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsTiers {
    /// Basic counters and aggregates.
    pub basic: bool,
    /// Sums of squares.
    pub squared: bool,
    /// Event timestamps.
    pub detailed: bool,
}

impl Default for StatsTiers {
    fn default() -> Self {
        Self::basic_only()
    }
}

impl StatsTiers {
    /// No statistics at all.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            basic: false,
            squared: false,
            detailed: false,
        }
    }

    /// Counters and aggregates only.
    #[must_use]
    pub const fn basic_only() -> Self {
        Self {
            basic: true,
            squared: false,
            detailed: false,
        }
    }

    /// Every tier.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            basic: true,
            squared: true,
            detailed: true,
        }
    }

    /// Enable the squared tier.
    #[must_use]
    pub const fn with_squared(mut self, enabled: bool) -> Self {
        self.squared = enabled;
        self
    }

    /// Enable the detailed tier.
    #[must_use]
    pub const fn with_detailed(mut self, enabled: bool) -> Self {
        self.detailed = enabled;
        self
    }

    /// Drop additive tiers when the basic tier is off.
    #[must_use]
    pub const fn normalize(self) -> Self {
        if self.basic { self } else { Self::disabled() }
    }

    /// Whether `tier` is maintained after normalization.
    #[must_use]
    pub const fn is_enabled(&self, tier: StatsTier) -> bool {
        let tiers = self.normalize();
        match tier {
            StatsTier::Basic => tiers.basic,
            StatsTier::Squared => tiers.squared,
            StatsTier::Detailed => tiers.detailed,
        }
    }

    /// `Ok` when `tier` is maintained, otherwise the matching "unsupported"
    /// error.
    pub const fn require(&self, tier: StatsTier) -> SchedResult {
        if self.is_enabled(tier) {
            return Ok(());
        }
        Err(match tier {
            StatsTier::Basic => SchedError::StatsDisabled,
            StatsTier::Squared => SchedError::SquaredTierDisabled,
            StatsTier::Detailed => SchedError::DetailedTierDisabled,
        })
    }
}
