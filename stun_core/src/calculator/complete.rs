//! Combined stun evaluation for one hit

use super::result::CompleteStunResult;
use super::StunCalculator;
use crate::error::{validate_damage, validate_max_life, StunResult};
use crate::meter::HeavyStunMeter;
use crate::modifiers::StunModifiers;
use crate::types::{AttackType, DamageType, Hit};
use rand::Rng;

impl StunCalculator {
    /// Evaluate both stun channels using the thread RNG
    pub fn evaluate_complete_stun(
        &self,
        damage: f64,
        damage_type: DamageType,
        attack_type: AttackType,
        target_max_life: f64,
        modifiers: &StunModifiers,
        meter: &mut HeavyStunMeter,
    ) -> StunResult<CompleteStunResult> {
        let mut rng = rand::thread_rng();
        self.evaluate_complete_stun_with_rng(
            damage,
            damage_type,
            attack_type,
            target_max_life,
            modifiers,
            meter,
            &mut rng,
        )
    }

    /// Evaluate both stun channels with a provided RNG (for deterministic testing)
    ///
    /// 1. Rolls Light Stun for the hit
    /// 2. Adds Heavy Stun buildup, passing the Light Stun outcome along so a
    ///    would-stun hit on a primed target counts as a Crushing Blow
    pub fn evaluate_complete_stun_with_rng(
        &self,
        damage: f64,
        damage_type: DamageType,
        attack_type: AttackType,
        target_max_life: f64,
        modifiers: &StunModifiers,
        meter: &mut HeavyStunMeter,
        rng: &mut impl Rng,
    ) -> StunResult<CompleteStunResult> {
        // Everything is checked before the meter can change
        validate_damage(damage)?;
        validate_max_life(target_max_life)?;
        modifiers.validate()?;

        let light = self.evaluate_light_stun_with_rng(
            damage,
            damage_type,
            attack_type,
            target_max_life,
            modifiers,
            rng,
        )?;
        let heavy = self.apply_heavy_stun_hit(damage, modifiers, meter, light.will_stun)?;

        Ok(CompleteStunResult {
            damage,
            target_max_life,
            damage_type,
            attack_type,
            light,
            heavy,
        })
    }

    /// Evaluate a `Hit` against a target
    pub fn evaluate_hit_with_rng(
        &self,
        hit: &Hit,
        target_max_life: f64,
        modifiers: &StunModifiers,
        meter: &mut HeavyStunMeter,
        rng: &mut impl Rng,
    ) -> StunResult<CompleteStunResult> {
        self.evaluate_complete_stun_with_rng(
            hit.damage,
            hit.damage_type,
            hit.attack_type,
            target_max_life,
            modifiers,
            meter,
            rng,
        )
    }
}
