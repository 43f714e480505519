//! Light Stun - Per-hit stun chance
//!
//! Formula:
//! `final = max(floor, base) × damage_type_bonus × attack_type_bonus × (1 + increased/100) × more`
//!
//! where `base = 100 × damage / max_life × scale` (capped), and the floor is
//! the target's minimum stun chance if it has one, otherwise the configured
//! default (15%). The result is clamped to 0-100 and rolled once.

use super::result::LightStunResult;
use super::StunCalculator;
use crate::error::{validate_damage, validate_max_life, StunResult};
use crate::modifiers::StunModifiers;
use crate::types::{AttackType, DamageType};
use rand::Rng;
use tracing::debug;

impl StunCalculator {
    /// Base chance from damage relative to the target's life, before the floor
    pub fn base_light_stun_chance(&self, damage: f64, target_max_life: f64) -> f64 {
        let light = &self.constants.light;
        (100.0 * damage / target_max_life * light.base_chance_scale).min(light.max_base_chance)
    }

    /// Evaluate Light Stun using the thread RNG
    pub fn evaluate_light_stun(
        &self,
        damage: f64,
        damage_type: DamageType,
        attack_type: AttackType,
        target_max_life: f64,
        modifiers: &StunModifiers,
    ) -> StunResult<LightStunResult> {
        let mut rng = rand::thread_rng();
        self.evaluate_light_stun_with_rng(
            damage,
            damage_type,
            attack_type,
            target_max_life,
            modifiers,
            &mut rng,
        )
    }

    /// Evaluate Light Stun with a provided RNG (for deterministic testing)
    pub fn evaluate_light_stun_with_rng(
        &self,
        damage: f64,
        damage_type: DamageType,
        attack_type: AttackType,
        target_max_life: f64,
        modifiers: &StunModifiers,
        rng: &mut impl Rng,
    ) -> StunResult<LightStunResult> {
        validate_damage(damage)?;
        validate_max_life(target_max_life)?;
        modifiers.validate()?;

        let base_chance = self.base_light_stun_chance(damage, target_max_life);
        let minimum_chance = modifiers
            .minimum_stun_chance
            .unwrap_or(self.constants.light.minimum_chance);
        let damage_type_bonus = self.constants.damage_type_bonus.get(damage_type);
        let attack_type_bonus = self.constants.attack_type_bonus.get(attack_type);

        let mut result = LightStunResult {
            damage,
            target_max_life,
            base_chance,
            minimum_chance,
            damage_type_bonus,
            attack_type_bonus,
            final_chance: 0.0,
            will_stun: false,
            immune: modifiers.immune_to_stun,
        };

        if modifiers.immune_to_stun {
            debug!(damage, "light stun skipped: target immune");
            return Ok(result);
        }

        // A hit that deals nothing cannot stun, floor or not
        if damage > 0.0 {
            let chance = base_chance.max(minimum_chance)
                * damage_type_bonus
                * attack_type_bonus
                * modifiers.chance_multiplier();
            result.final_chance = chance.clamp(0.0, 100.0);
        }

        let roll: f64 = rng.gen();
        result.will_stun = roll < result.probability();

        debug!(
            damage,
            target_max_life,
            base_chance,
            final_chance = result.final_chance,
            will_stun = result.will_stun,
            "light stun evaluated"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StunConstants;
    use crate::error::StunError;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// RNG whose rolls are always 0.0 (every non-zero chance succeeds)
    fn always_hit() -> StepRng {
        StepRng::new(0, 0)
    }

    /// RNG whose rolls are just below 1.0 (only a 100% chance succeeds)
    fn never_hit() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn calc() -> StunCalculator {
        StunCalculator::default()
    }

    #[test]
    fn test_base_chance_proportional_to_damage() {
        let calc = calc();
        assert!((calc.base_light_stun_chance(100.0, 1000.0) - 10.0).abs() < 1e-9);
        assert!((calc.base_light_stun_chance(500.0, 1000.0) - 50.0).abs() < 1e-9);
        // Capped
        assert!((calc.base_light_stun_chance(5000.0, 1000.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_floor_applies_before_type_bonuses() {
        // 1 damage vs 1,000,000 life: base is 0.0001%, floor is 15%
        let result = calc()
            .evaluate_light_stun_with_rng(
                1.0,
                DamageType::Chaos,
                AttackType::Spell,
                1_000_000.0,
                &StunModifiers::default(),
                &mut never_hit(),
            )
            .unwrap();

        let constants = StunConstants::default();
        let expected = 15.0
            * constants.damage_type_bonus.get(DamageType::Chaos)
            * constants.attack_type_bonus.get(AttackType::Spell);
        assert!(result.final_chance >= expected - 1e-9);
        assert!((result.final_chance - expected).abs() < 1e-9);
    }

    #[test]
    fn test_physical_melee_bonus() {
        // 200 / 1000 = 20% base, * 1.5 physical * 1.5 melee = 45%
        let result = calc()
            .evaluate_light_stun_with_rng(
                200.0,
                DamageType::Physical,
                AttackType::Melee,
                1000.0,
                &StunModifiers::default(),
                &mut never_hit(),
            )
            .unwrap();
        assert!((result.final_chance - 45.0).abs() < 1e-9);
        assert!((result.damage_type_bonus - 1.5).abs() < f64::EPSILON);
        assert!((result.attack_type_bonus - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_increased_then_more() {
        // 20% base, 50% increased -> 30%, then 1.5x more -> 45%
        let mods = StunModifiers::new()
            .with_increased_stun_chance(50.0)
            .with_more_stun_chance(1.5);
        let result = calc()
            .evaluate_light_stun_with_rng(
                200.0,
                DamageType::Fire,
                AttackType::Ranged,
                1000.0,
                &mods,
                &mut never_hit(),
            )
            .unwrap();
        assert!((result.final_chance - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_minimum_replaces_default_floor() {
        let mods = StunModifiers::new().with_minimum_stun_chance(30.0);
        let result = calc()
            .evaluate_light_stun_with_rng(
                10.0,
                DamageType::Cold,
                AttackType::Spell,
                1000.0,
                &mods,
                &mut never_hit(),
            )
            .unwrap();
        assert!((result.minimum_chance - 30.0).abs() < f64::EPSILON);
        assert!((result.final_chance - 30.0).abs() < 1e-9);

        // A lower explicit floor also replaces the default
        let mods = StunModifiers::new().with_minimum_stun_chance(5.0);
        let result = calc()
            .evaluate_light_stun_with_rng(
                10.0,
                DamageType::Cold,
                AttackType::Spell,
                1000.0,
                &mods,
                &mut never_hit(),
            )
            .unwrap();
        assert!((result.final_chance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_to_100() {
        let mods = StunModifiers::new().with_more_stun_chance(3.0);
        let result = calc()
            .evaluate_light_stun_with_rng(
                900.0,
                DamageType::Physical,
                AttackType::Melee,
                1000.0,
                &mods,
                &mut never_hit(),
            )
            .unwrap();
        assert!((result.final_chance - 100.0).abs() < f64::EPSILON);
        // 100% chance succeeds even on the highest roll
        assert!(result.will_stun);
    }

    #[test]
    fn test_immune_never_stuns() {
        let result = calc()
            .evaluate_light_stun_with_rng(
                1_000_000.0,
                DamageType::Physical,
                AttackType::Melee,
                1000.0,
                &StunModifiers::immune(),
                &mut always_hit(),
            )
            .unwrap();
        assert!(result.immune);
        assert!(!result.will_stun);
        assert!((result.final_chance - 0.0).abs() < f64::EPSILON);
        // Bonuses are still recorded
        assert!((result.damage_type_bonus - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_damage_has_zero_chance() {
        let result = calc()
            .evaluate_light_stun_with_rng(
                0.0,
                DamageType::Physical,
                AttackType::Melee,
                1000.0,
                &StunModifiers::default(),
                &mut always_hit(),
            )
            .unwrap();
        assert!((result.final_chance - 0.0).abs() < f64::EPSILON);
        assert!(!result.will_stun);
    }

    #[test]
    fn test_forced_outcomes() {
        let mods = StunModifiers::default();
        let hit = calc()
            .evaluate_light_stun_with_rng(100.0, DamageType::Fire, AttackType::Spell, 1000.0, &mods, &mut always_hit())
            .unwrap();
        assert!(hit.will_stun);

        let miss = calc()
            .evaluate_light_stun_with_rng(100.0, DamageType::Fire, AttackType::Spell, 1000.0, &mods, &mut never_hit())
            .unwrap();
        assert!(!miss.will_stun);
        assert!((hit.final_chance - miss.final_chance).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validation_errors() {
        let mods = StunModifiers::default();
        let err = calc()
            .evaluate_light_stun_with_rng(-1.0, DamageType::Fire, AttackType::Spell, 1000.0, &mods, &mut always_hit())
            .unwrap_err();
        assert_eq!(err, StunError::NegativeDamage(-1.0));

        let err = calc()
            .evaluate_light_stun_with_rng(10.0, DamageType::Fire, AttackType::Spell, 0.0, &mods, &mut always_hit())
            .unwrap_err();
        assert_eq!(err, StunError::NonPositiveMaxLife(0.0));

        let err = calc()
            .evaluate_light_stun_with_rng(f64::INFINITY, DamageType::Fire, AttackType::Spell, 1000.0, &mods, &mut always_hit())
            .unwrap_err();
        assert_eq!(err, StunError::NonFiniteDamage(f64::INFINITY));
    }

    #[test]
    fn test_infinite_increased_chance_is_rejected() {
        // inf * 0 would otherwise produce a NaN final chance
        let mods = StunModifiers::new()
            .with_increased_stun_chance(f64::INFINITY)
            .with_more_stun_chance(0.0);
        let err = calc()
            .evaluate_light_stun_with_rng(500.0, DamageType::Physical, AttackType::Melee, 1000.0, &mods, &mut always_hit())
            .unwrap_err();
        assert_eq!(
            err,
            StunError::InvalidModifier {
                field: "increased_stun_chance",
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn test_idempotent_with_fixed_seed() {
        let mods = StunModifiers::new().with_increased_stun_chance(20.0);
        let first = calc()
            .evaluate_light_stun_with_rng(
                300.0,
                DamageType::Lightning,
                AttackType::Ranged,
                2000.0,
                &mods,
                &mut ChaCha8Rng::seed_from_u64(7),
            )
            .unwrap();
        for _ in 0..10 {
            let again = calc()
                .evaluate_light_stun_with_rng(
                    300.0,
                    DamageType::Lightning,
                    AttackType::Ranged,
                    2000.0,
                    &mods,
                    &mut ChaCha8Rng::seed_from_u64(7),
                )
                .unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_custom_constants() {
        let mut constants = StunConstants::default();
        constants.light.base_chance_scale = 2.0;
        constants.light.minimum_chance = 0.0;
        constants.damage_type_bonus.chaos = 0.5;
        let calc = StunCalculator::new(constants).unwrap();

        // 100 / 1000 = 10% * 2 scale = 20%, * 0.5 chaos = 10%
        let result = calc
            .evaluate_light_stun_with_rng(
                100.0,
                DamageType::Chaos,
                AttackType::Ranged,
                1000.0,
                &StunModifiers::default(),
                &mut never_hit(),
            )
            .unwrap();
        assert!((result.final_chance - 10.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_final_chance_in_bounds(
            damage in 0.0f64..1_000_000.0,
            life in 1.0f64..1_000_000.0,
            increased in -200.0f64..500.0,
            more in 0.0f64..5.0,
            seed in any::<u64>(),
        ) {
            let mods = StunModifiers::new()
                .with_increased_stun_chance(increased)
                .with_more_stun_chance(more);
            for dt in DamageType::all() {
                for at in AttackType::all() {
                    let result = calc()
                        .evaluate_light_stun_with_rng(
                            damage,
                            *dt,
                            *at,
                            life,
                            &mods,
                            &mut ChaCha8Rng::seed_from_u64(seed),
                        )
                        .unwrap();
                    prop_assert!(result.final_chance >= 0.0);
                    prop_assert!(result.final_chance <= 100.0);
                }
            }
        }

        #[test]
        fn prop_immune_never_stuns(damage in 0.0f64..1_000_000.0, life in 1.0f64..100_000.0) {
            let result = calc()
                .evaluate_light_stun_with_rng(
                    damage,
                    DamageType::Physical,
                    AttackType::Melee,
                    life,
                    &StunModifiers::immune(),
                    &mut always_hit(),
                )
                .unwrap();
            prop_assert!(!result.will_stun);
            prop_assert_eq!(result.final_chance, 0.0);
        }
    }
}
