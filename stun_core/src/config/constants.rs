//! Stun tuning constants

use super::ConfigError;
use crate::types::{AttackType, DamageType};
use serde::{Deserialize, Serialize};

/// Tunable stun constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StunConstants {
    #[serde(default)]
    pub light: LightStunConstants,
    #[serde(default)]
    pub heavy: HeavyStunConstants,
    #[serde(default)]
    pub damage_type_bonus: DamageTypeBonuses,
    #[serde(default)]
    pub attack_type_bonus: AttackTypeBonuses,
}

impl StunConstants {
    /// Reject tables that would produce meaningless chances or meters
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("light.base_chance_scale", self.light.base_chance_scale),
            ("heavy.buildup_scale", self.heavy.buildup_scale),
            ("heavy.primed_threshold", self.heavy.primed_threshold),
            ("heavy.heavy_stun_threshold", self.heavy.heavy_stun_threshold),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("light.max_base_chance", self.light.max_base_chance),
            ("light.minimum_chance", self.light.minimum_chance),
            ("heavy.heavy_stun_duration", self.heavy.heavy_stun_duration),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }

        if self.heavy.primed_threshold >= self.heavy.heavy_stun_threshold {
            return Err(ConfigError::ValidationError(format!(
                "heavy.primed_threshold ({}) must be below heavy.heavy_stun_threshold ({})",
                self.heavy.primed_threshold, self.heavy.heavy_stun_threshold
            )));
        }

        for dt in DamageType::all() {
            let bonus = self.damage_type_bonus.get(*dt);
            if !bonus.is_finite() || bonus < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "damage_type_bonus for {:?} must be non-negative and finite, got {}",
                    dt, bonus
                )));
            }
        }
        for at in AttackType::all() {
            let bonus = self.attack_type_bonus.get(*at);
            if !bonus.is_finite() || bonus < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "attack_type_bonus for {:?} must be non-negative and finite, got {}",
                    at, bonus
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightStunConstants {
    /// Base chance = 100 * damage / max_life * scale
    #[serde(default = "default_scale")]
    pub base_chance_scale: f64,
    /// Cap on the base chance before bonuses
    #[serde(default = "default_max_base_chance")]
    pub max_base_chance: f64,
    /// Floor used when no minimum stun chance modifier is present
    #[serde(default = "default_minimum_chance")]
    pub minimum_chance: f64,
}

impl Default for LightStunConstants {
    fn default() -> Self {
        LightStunConstants {
            base_chance_scale: 1.0,
            max_base_chance: 100.0,
            minimum_chance: 15.0,
        }
    }
}

fn default_scale() -> f64 {
    1.0
}
fn default_max_base_chance() -> f64 {
    100.0
}
fn default_minimum_chance() -> f64 {
    15.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeavyStunConstants {
    /// Buildup = damage * scale * buildup multiplier
    #[serde(default = "default_scale")]
    pub buildup_scale: f64,
    /// Percentage at which the meter becomes primed
    #[serde(default = "default_primed_threshold")]
    pub primed_threshold: f64,
    /// Percentage at which the target is heavy stunned
    #[serde(default = "default_heavy_stun_threshold")]
    pub heavy_stun_threshold: f64,
    /// Heavy stun duration in seconds
    #[serde(default = "default_heavy_stun_duration")]
    pub heavy_stun_duration: f64,
}

impl Default for HeavyStunConstants {
    fn default() -> Self {
        HeavyStunConstants {
            buildup_scale: 1.0,
            primed_threshold: 50.0,
            heavy_stun_threshold: 100.0,
            heavy_stun_duration: 3.0,
        }
    }
}

fn default_primed_threshold() -> f64 {
    50.0
}
fn default_heavy_stun_threshold() -> f64 {
    100.0
}
fn default_heavy_stun_duration() -> f64 {
    3.0
}

/// Light stun multiplier per damage type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageTypeBonuses {
    #[serde(default = "default_strong_bonus")]
    pub physical: f64,
    #[serde(default = "default_neutral_bonus")]
    pub fire: f64,
    #[serde(default = "default_neutral_bonus")]
    pub cold: f64,
    #[serde(default = "default_neutral_bonus")]
    pub lightning: f64,
    #[serde(default = "default_neutral_bonus")]
    pub chaos: f64,
}

impl DamageTypeBonuses {
    pub fn get(&self, damage_type: DamageType) -> f64 {
        match damage_type {
            DamageType::Physical => self.physical,
            DamageType::Fire => self.fire,
            DamageType::Cold => self.cold,
            DamageType::Lightning => self.lightning,
            DamageType::Chaos => self.chaos,
        }
    }
}

impl Default for DamageTypeBonuses {
    fn default() -> Self {
        DamageTypeBonuses {
            physical: 1.5,
            fire: 1.0,
            cold: 1.0,
            lightning: 1.0,
            chaos: 1.0,
        }
    }
}

/// Light stun multiplier per attack type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackTypeBonuses {
    #[serde(default = "default_strong_bonus")]
    pub melee: f64,
    #[serde(default = "default_neutral_bonus")]
    pub ranged: f64,
    #[serde(default = "default_neutral_bonus")]
    pub spell: f64,
}

impl AttackTypeBonuses {
    pub fn get(&self, attack_type: AttackType) -> f64 {
        match attack_type {
            AttackType::Melee => self.melee,
            AttackType::Ranged => self.ranged,
            AttackType::Spell => self.spell,
        }
    }
}

impl Default for AttackTypeBonuses {
    fn default() -> Self {
        AttackTypeBonuses {
            melee: 1.5,
            ranged: 1.0,
            spell: 1.0,
        }
    }
}

fn default_strong_bonus() -> f64 {
    1.5
}
fn default_neutral_bonus() -> f64 {
    1.0
}
