//! Stun calculation - Light Stun chance, Heavy Stun buildup, combined hits
//!
//! The calculator holds only tuning constants. Meters are owned by the caller
//! and passed in for each hit; the calculator never keeps one.

mod complete;
mod heavy;
mod light;
mod result;

pub use result::{CompleteStunResult, HeavyStunResult, LightStunResult};

use crate::config::{ConfigError, StunConstants};
use crate::error::StunResult;
use crate::meter::HeavyStunMeter;
use crate::modifiers::StunModifiers;
use crate::types::{AttackType, DamageType};
use rand::Rng;

/// Stun resolution using a fixed set of constants
#[derive(Debug, Clone, Default)]
pub struct StunCalculator {
    constants: StunConstants,
}

impl StunCalculator {
    /// Build a calculator, rejecting constants that fail validation
    pub fn new(constants: StunConstants) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(StunCalculator { constants })
    }

    pub fn constants(&self) -> &StunConstants {
        &self.constants
    }

    /// Create a meter for a target using this calculator's thresholds
    pub fn meter_for_target(
        &self,
        target_max_life: f64,
        modifiers: &StunModifiers,
    ) -> StunResult<HeavyStunMeter> {
        HeavyStunMeter::for_target(target_max_life, modifiers, &self.constants.heavy)
    }
}

/// Evaluate Light Stun with default constants
pub fn evaluate_light_stun(
    damage: f64,
    damage_type: DamageType,
    attack_type: AttackType,
    target_max_life: f64,
    modifiers: &StunModifiers,
) -> StunResult<LightStunResult> {
    let mut rng = rand::thread_rng();
    evaluate_light_stun_with_rng(damage, damage_type, attack_type, target_max_life, modifiers, &mut rng)
}

/// Evaluate Light Stun with default constants and a provided RNG (for deterministic testing)
pub fn evaluate_light_stun_with_rng(
    damage: f64,
    damage_type: DamageType,
    attack_type: AttackType,
    target_max_life: f64,
    modifiers: &StunModifiers,
    rng: &mut impl Rng,
) -> StunResult<LightStunResult> {
    StunCalculator::default().evaluate_light_stun_with_rng(
        damage,
        damage_type,
        attack_type,
        target_max_life,
        modifiers,
        rng,
    )
}

/// Apply one hit's Heavy Stun buildup with default constants
pub fn apply_heavy_stun_hit(
    damage: f64,
    modifiers: &StunModifiers,
    meter: &mut HeavyStunMeter,
    light_stun_landed: bool,
) -> StunResult<HeavyStunResult> {
    StunCalculator::default().apply_heavy_stun_hit(damage, modifiers, meter, light_stun_landed)
}

/// Evaluate both stun channels for one hit with default constants
pub fn evaluate_complete_stun(
    damage: f64,
    damage_type: DamageType,
    attack_type: AttackType,
    target_max_life: f64,
    modifiers: &StunModifiers,
    meter: &mut HeavyStunMeter,
) -> StunResult<CompleteStunResult> {
    let mut rng = rand::thread_rng();
    evaluate_complete_stun_with_rng(
        damage,
        damage_type,
        attack_type,
        target_max_life,
        modifiers,
        meter,
        &mut rng,
    )
}

/// Evaluate both stun channels with default constants and a provided RNG
pub fn evaluate_complete_stun_with_rng(
    damage: f64,
    damage_type: DamageType,
    attack_type: AttackType,
    target_max_life: f64,
    modifiers: &StunModifiers,
    meter: &mut HeavyStunMeter,
    rng: &mut impl Rng,
) -> StunResult<CompleteStunResult> {
    StunCalculator::default().evaluate_complete_stun_with_rng(
        damage,
        damage_type,
        attack_type,
        target_max_life,
        modifiers,
        meter,
        rng,
    )
}
