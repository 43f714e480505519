//! Stun results - Outcome of light and heavy stun evaluation

use crate::meter::MeterSnapshot;
use crate::types::{AttackType, DamageType, StunState};
use serde::{Deserialize, Serialize};

/// One Light Stun probability evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightStunResult {
    // === Inputs ===
    pub damage: f64,
    pub target_max_life: f64,

    // === Chance Breakdown ===
    /// Chance from damage relative to life, before the floor
    pub base_chance: f64,
    /// Floor in effect for this hit
    pub minimum_chance: f64,
    pub damage_type_bonus: f64,
    pub attack_type_bonus: f64,
    /// Final chance in percent, 0-100
    pub final_chance: f64,

    // === Outcome ===
    pub will_stun: bool,
    pub immune: bool,
}

impl LightStunResult {
    /// Final chance as a probability between 0 and 1
    pub fn probability(&self) -> f64 {
        self.final_chance / 100.0
    }

    pub fn summary(&self) -> String {
        if self.immune {
            return "Light stun: immune".to_string();
        }
        format!(
            "Light stun: {:.1}% chance ({})",
            self.final_chance,
            if self.will_stun { "STUNNED" } else { "no stun" }
        )
    }
}

/// One Heavy Stun buildup application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeavyStunResult {
    pub buildup_added: f64,
    pub total_buildup: f64,
    /// Meter as it stands after this hit
    pub meter: MeterSnapshot,

    // === Flags ===
    /// Whether this hit moved the meter into HeavyStunned
    pub triggered_heavy_stun: bool,
    /// Whether a would-stun hit landed on a primed target
    pub triggered_crushing_blow: bool,

    /// Further identical hits needed to heavy stun (0 if already, infinite if none add buildup)
    ///
    /// Infinity is written as `null`, which JSON cannot otherwise represent.
    #[serde(with = "unbounded_serde")]
    pub hits_to_heavy_stun: f64,
}

impl HeavyStunResult {
    pub fn state(&self) -> StunState {
        self.meter.state
    }

    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "Heavy stun: +{:.0} buildup ({:.1}%, {:?})",
            self.buildup_added, self.meter.buildup_percentage, self.meter.state
        )];

        if self.triggered_heavy_stun {
            parts.push("HEAVY STUN".to_string());
        }
        if self.triggered_crushing_blow {
            parts.push("CRUSHING BLOW".to_string());
        }
        if self.meter.state != StunState::HeavyStunned {
            if self.hits_to_heavy_stun.is_finite() {
                parts.push(format!("~{:.1} hits to heavy stun", self.hits_to_heavy_stun));
            } else {
                parts.push("no buildup".to_string());
            }
        }

        parts.join(", ")
    }
}

/// Light and heavy stun outcome of a single hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteStunResult {
    pub damage: f64,
    pub target_max_life: f64,
    pub damage_type: DamageType,
    pub attack_type: AttackType,
    pub light: LightStunResult,
    pub heavy: HeavyStunResult,
}

impl CompleteStunResult {
    /// Whether the hit stunned in any way
    pub fn any_stun(&self) -> bool {
        self.light.will_stun || self.heavy.triggered_heavy_stun
    }

    pub fn summary(&self) -> String {
        format!(
            "{:.0} {:?} {:?} damage vs {:.0} life | {} | {}",
            self.damage,
            self.damage_type,
            self.attack_type,
            self.target_max_life,
            self.light.summary(),
            self.heavy.summary()
        )
    }
}

/// Serde module for an `f64` whose infinite value maps to `null`
mod unbounded_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let finite = if value.is_finite() { Some(*value) } else { None };
        finite.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.unwrap_or(f64::INFINITY))
    }
}
