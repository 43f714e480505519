//! Core classification types for hits and stun states

use serde::{Deserialize, Serialize};

/// Damage category of a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Fire,
    Cold,
    Lightning,
    Chaos,
}

impl DamageType {
    /// Get all damage types
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Physical,
            DamageType::Fire,
            DamageType::Cold,
            DamageType::Lightning,
            DamageType::Chaos,
        ]
    }

    /// Check if this is an elemental damage type
    pub fn is_elemental(&self) -> bool {
        matches!(
            self,
            DamageType::Fire | DamageType::Cold | DamageType::Lightning
        )
    }
}

/// How a hit was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    Melee,
    Ranged,
    Spell,
}

impl AttackType {
    /// Get all attack types
    pub fn all() -> &'static [AttackType] {
        &[AttackType::Melee, AttackType::Ranged, AttackType::Spell]
    }
}

/// Heavy Stun meter state, always derived from the buildup percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StunState {
    /// Below the primed threshold
    Normal,
    /// At or above the primed threshold but not yet full
    Primed,
    /// Meter filled; target is incapacitated until reset
    HeavyStunned,
}

impl StunState {
    /// Derive the state from a buildup percentage and the configured thresholds
    pub fn from_percentage(percentage: f64, primed_threshold: f64, heavy_threshold: f64) -> Self {
        if percentage >= heavy_threshold {
            StunState::HeavyStunned
        } else if percentage >= primed_threshold {
            StunState::Primed
        } else {
            StunState::Normal
        }
    }
}

/// A single incoming hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub damage: f64,
    pub damage_type: DamageType,
    pub attack_type: AttackType,
}

impl Hit {
    pub fn new(damage: f64, damage_type: DamageType, attack_type: AttackType) -> Self {
        Hit {
            damage,
            damage_type,
            attack_type,
        }
    }
}
