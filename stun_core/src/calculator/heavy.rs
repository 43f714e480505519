//! Heavy Stun - Buildup accumulation and trigger detection

use super::result::HeavyStunResult;
use super::StunCalculator;
use crate::error::{validate_damage, StunResult};
use crate::meter::HeavyStunMeter;
use crate::modifiers::StunModifiers;
use tracing::{debug, info};

impl StunCalculator {
    /// Buildup a hit of `damage` adds to a meter
    pub fn heavy_stun_buildup(&self, damage: f64, modifiers: &StunModifiers) -> f64 {
        if modifiers.immune_to_stun {
            return 0.0;
        }
        damage * self.constants.heavy.buildup_scale * modifiers.stun_buildup_multiplier
    }

    /// Apply one hit's buildup to `meter`
    ///
    /// `light_stun_landed` is the Light Stun outcome of the same hit; landing
    /// it while the meter was already primed is a Crushing Blow. The meter is
    /// left untouched if validation fails or the hit adds no buildup.
    pub fn apply_heavy_stun_hit(
        &self,
        damage: f64,
        modifiers: &StunModifiers,
        meter: &mut HeavyStunMeter,
        light_stun_landed: bool,
    ) -> StunResult<HeavyStunResult> {
        validate_damage(damage)?;
        modifiers.validate()?;

        let buildup_added = self.heavy_stun_buildup(damage, modifiers);
        let was_primed = meter.is_primed();
        let was_heavy_stunned = meter.is_heavy_stunned();

        if buildup_added > 0.0 {
            meter.record_hit(damage, buildup_added);
        }

        let triggered_heavy_stun = !was_heavy_stunned && meter.is_heavy_stunned();
        let triggered_crushing_blow =
            !modifiers.immune_to_stun && was_primed && light_stun_landed;

        if triggered_heavy_stun {
            info!(
                damage,
                total_buildup = meter.current_buildup(),
                hits = meter.hits_received(),
                "heavy stun triggered"
            );
        }
        if triggered_crushing_blow {
            info!(damage, "crushing blow triggered");
        }

        let result = HeavyStunResult {
            buildup_added,
            total_buildup: meter.current_buildup(),
            meter: meter.snapshot(),
            triggered_heavy_stun,
            triggered_crushing_blow,
            hits_to_heavy_stun: meter.estimate_hits_to_heavy_stun(buildup_added),
        };

        debug!(
            damage,
            buildup_added,
            percentage = result.meter.buildup_percentage,
            state = ?result.meter.state,
            "heavy stun buildup applied"
        );

        Ok(result)
    }
}
