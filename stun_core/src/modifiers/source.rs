//! StunModifierSource - Trait and implementations for modifier providers

use super::aggregator::StunModifierAccumulator;
use super::StunModifiers;
use serde::{Deserialize, Serialize};

/// Trait for anything that contributes stun modifiers to a target
pub trait StunModifierSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's modifiers to the accumulator
    fn apply(&self, acc: &mut StunModifierAccumulator);
}

/// Where a contribution comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    BaseStats,
    #[default]
    Gear,
    PassiveTree,
    Ascendancy,
    Buff,
}

impl SourceKind {
    pub fn priority(&self) -> i32 {
        match self {
            SourceKind::BaseStats => -100,
            SourceKind::Gear => 0,
            SourceKind::PassiveTree => 100,
            SourceKind::Ascendancy => 150,
            SourceKind::Buff => 200,
        }
    }
}

/// A partial set of stun modifiers from one gear piece, passive, or ascendancy node
///
/// Every field is optional; absent fields contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifierContribution {
    pub id: String,
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default)]
    pub increased_stun_chance: Option<f64>,
    #[serde(default)]
    pub more_stun_chance: Option<f64>,
    #[serde(default)]
    pub increased_stun_threshold: Option<f64>,
    #[serde(default)]
    pub reduced_stun_threshold: Option<f64>,
    #[serde(default)]
    pub stun_buildup_multiplier: Option<f64>,
    #[serde(default)]
    pub minimum_stun_chance: Option<f64>,
    #[serde(default)]
    pub immune_to_stun: bool,
}

impl ModifierContribution {
    pub fn new(id: impl Into<String>, kind: SourceKind) -> Self {
        ModifierContribution {
            id: id.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_increased_stun_chance(mut self, percent: f64) -> Self {
        self.increased_stun_chance = Some(percent);
        self
    }

    pub fn with_more_stun_chance(mut self, factor: f64) -> Self {
        self.more_stun_chance = Some(factor);
        self
    }

    pub fn with_increased_stun_threshold(mut self, factor: f64) -> Self {
        self.increased_stun_threshold = Some(factor);
        self
    }

    pub fn with_reduced_stun_threshold(mut self, factor: f64) -> Self {
        self.reduced_stun_threshold = Some(factor);
        self
    }

    pub fn with_stun_buildup_multiplier(mut self, factor: f64) -> Self {
        self.stun_buildup_multiplier = Some(factor);
        self
    }

    pub fn with_minimum_stun_chance(mut self, percent: f64) -> Self {
        self.minimum_stun_chance = Some(percent);
        self
    }

    pub fn with_immunity(mut self) -> Self {
        self.immune_to_stun = true;
        self
    }
}

impl StunModifierSource for ModifierContribution {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.kind.priority()
    }

    fn apply(&self, acc: &mut StunModifierAccumulator) {
        if let Some(v) = self.increased_stun_chance {
            acc.add_increased_stun_chance(v);
        }
        if let Some(v) = self.more_stun_chance {
            acc.add_more_stun_chance(v);
        }
        if let Some(v) = self.increased_stun_threshold {
            acc.add_increased_stun_threshold(v);
        }
        if let Some(v) = self.reduced_stun_threshold {
            acc.add_reduced_stun_threshold(v);
        }
        if let Some(v) = self.stun_buildup_multiplier {
            acc.add_stun_buildup_multiplier(v);
        }
        if let Some(v) = self.minimum_stun_chance {
            acc.add_minimum_stun_chance(v);
        }
        if self.immune_to_stun {
            acc.set_immune();
        }
    }
}

/// A resolved set folds in like any other source
impl StunModifierSource for StunModifiers {
    fn id(&self) -> &str {
        "resolved"
    }

    fn apply(&self, acc: &mut StunModifierAccumulator) {
        acc.add_increased_stun_chance(self.increased_stun_chance);
        acc.add_more_stun_chance(self.more_stun_chance);
        acc.add_increased_stun_threshold(self.increased_stun_threshold);
        acc.add_reduced_stun_threshold(self.reduced_stun_threshold);
        acc.add_stun_buildup_multiplier(self.stun_buildup_multiplier);
        if let Some(floor) = self.minimum_stun_chance {
            acc.add_minimum_stun_chance(floor);
        }
        if self.immune_to_stun {
            acc.set_immune();
        }
    }
}
