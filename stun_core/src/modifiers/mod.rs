//! StunModifiers - Resolved stun-affecting bonuses for one target

mod aggregator;
mod source;

pub use aggregator::{aggregate_modifiers, StunModifierAccumulator};
pub use source::{ModifierContribution, SourceKind, StunModifierSource};

use crate::error::{StunError, StunResult};
use serde::{Deserialize, Serialize};

/// All stun-affecting bonuses for one target at one point in time
///
/// Light stun chance scales as `(1 + increased / 100) × more`. Threshold
/// factors scale the Heavy Stun meter size once per engagement, and the
/// buildup multiplier scales every hit's contribution to that meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StunModifiers {
    /// Additive stun chance, in percent (40.0 = 40% increased)
    pub increased_stun_chance: f64,
    /// Multiplicative stun chance factor (1.2 = 20% more)
    pub more_stun_chance: f64,
    pub increased_stun_threshold: f64,
    pub reduced_stun_threshold: f64,
    /// Factor on Heavy Stun buildup gained per hit
    pub stun_buildup_multiplier: f64,
    /// Replaces the default minimum chance floor when set
    pub minimum_stun_chance: Option<f64>,
    pub immune_to_stun: bool,
}

impl Default for StunModifiers {
    fn default() -> Self {
        StunModifiers {
            increased_stun_chance: 0.0,
            more_stun_chance: 1.0,
            increased_stun_threshold: 1.0,
            reduced_stun_threshold: 1.0,
            stun_buildup_multiplier: 1.0,
            minimum_stun_chance: None,
            immune_to_stun: false,
        }
    }
}

impl StunModifiers {
    /// Neutral modifiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Modifiers for a target that cannot be stunned
    pub fn immune() -> Self {
        StunModifiers {
            immune_to_stun: true,
            ..Self::default()
        }
    }

    pub fn with_increased_stun_chance(mut self, percent: f64) -> Self {
        self.increased_stun_chance = percent;
        self
    }

    pub fn with_more_stun_chance(mut self, factor: f64) -> Self {
        self.more_stun_chance = factor;
        self
    }

    pub fn with_stun_threshold(mut self, increased: f64, reduced: f64) -> Self {
        self.increased_stun_threshold = increased;
        self.reduced_stun_threshold = reduced;
        self
    }

    pub fn with_stun_buildup_multiplier(mut self, factor: f64) -> Self {
        self.stun_buildup_multiplier = factor;
        self
    }

    pub fn with_minimum_stun_chance(mut self, percent: f64) -> Self {
        self.minimum_stun_chance = Some(percent);
        self
    }

    /// Combined chance multiplier: increased first, then more
    pub fn chance_multiplier(&self) -> f64 {
        (1.0 + self.increased_stun_chance / 100.0) * self.more_stun_chance
    }

    /// Combined factor applied to the target's life to size the Heavy Stun meter
    pub fn threshold_multiplier(&self) -> f64 {
        self.increased_stun_threshold * self.reduced_stun_threshold
    }

    /// Check factor invariants before the calculator trusts these values
    ///
    /// Every numeric field must be finite. `increased_stun_chance` may be
    /// negative; the multiplicative factors and the floor may not.
    pub fn validate(&self) -> StunResult<()> {
        let fields = [
            ("increased_stun_chance", self.increased_stun_chance),
            ("more_stun_chance", self.more_stun_chance),
            ("increased_stun_threshold", self.increased_stun_threshold),
            ("reduced_stun_threshold", self.reduced_stun_threshold),
            ("stun_buildup_multiplier", self.stun_buildup_multiplier),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(StunError::InvalidModifier { field, value });
            }
        }

        let factors = [
            ("more_stun_chance", self.more_stun_chance),
            ("stun_buildup_multiplier", self.stun_buildup_multiplier),
        ];
        for (field, value) in factors {
            if value < 0.0 {
                return Err(StunError::InvalidModifier { field, value });
            }
        }

        if let Some(floor) = self.minimum_stun_chance {
            if !floor.is_finite() || floor < 0.0 {
                return Err(StunError::InvalidModifier {
                    field: "minimum_stun_chance",
                    value: floor,
                });
            }
        }

        let threshold = self.threshold_multiplier();
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(StunError::NonPositiveThreshold(threshold));
        }

        Ok(())
    }
}
