//! Scenario files - Targets and the hits to land on them

use serde::{Deserialize, Serialize};
use stun_core::{aggregate_modifiers, Hit, ModifierContribution, StunModifierSource, StunModifiers};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// RNG seed for Light Stun rolls
    #[serde(default)]
    pub seed: u64,
    /// Seconds that pass before each hit
    #[serde(default = "default_seconds_between_hits")]
    pub seconds_between_hits: f64,
    pub targets: Vec<TargetSpec>,
    pub hits: Vec<HitSpec>,
}

fn default_seconds_between_hits() -> f64 {
    0.5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSpec {
    pub id: String,
    pub max_life: f64,
    #[serde(default)]
    pub modifiers: Vec<ModifierContribution>,
}

impl TargetSpec {
    /// Resolve this target's modifier contributions
    pub fn resolved_modifiers(&self) -> StunModifiers {
        let sources: Vec<&dyn StunModifierSource> = self
            .modifiers
            .iter()
            .map(|m| m as &dyn StunModifierSource)
            .collect();
        aggregate_modifiers(&sources)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitSpec {
    pub target: String,
    #[serde(flatten)]
    pub hit: Hit,
}
