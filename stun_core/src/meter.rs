//! HeavyStunMeter - Persistent Heavy Stun buildup for one target
//!
//! The meter accumulates buildup from every hit and never decays on its own.
//! State is derived from the buildup percentage on every read:
//!
//! - below 50%: Normal
//! - 50% up to 100%: Primed
//! - 100% and above: HeavyStunned
//!
//! The only way back to Normal is an explicit `reset()`, typically when the
//! Heavy Stun duration has expired.

use crate::config::HeavyStunConstants;
use crate::error::{validate_max_life, StunError, StunResult};
use crate::modifiers::StunModifiers;
use crate::types::StunState;
use serde::{Deserialize, Serialize};

/// One hit's contribution to the meter, kept for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    pub damage: f64,
    pub buildup: f64,
    pub total_buildup: f64,
    pub percentage: f64,
}

/// Only built through the validated constructors; not deserializable.
#[derive(Debug, Clone, PartialEq)]
pub struct HeavyStunMeter {
    current_buildup: f64,
    max_buildup: f64,
    hits_received: u32,
    hit_history: Vec<HitRecord>,
    primed_threshold: f64,
    heavy_stun_threshold: f64,
}

impl HeavyStunMeter {
    /// Create an empty meter that fills at `max_buildup`
    pub fn new(max_buildup: f64) -> StunResult<Self> {
        Self::with_constants(max_buildup, &HeavyStunConstants::default())
    }

    /// Create an empty meter using configured state thresholds
    pub fn with_constants(max_buildup: f64, constants: &HeavyStunConstants) -> StunResult<Self> {
        if !max_buildup.is_finite() || max_buildup <= 0.0 {
            return Err(StunError::NonPositiveThreshold(max_buildup));
        }
        Ok(HeavyStunMeter {
            current_buildup: 0.0,
            max_buildup,
            hits_received: 0,
            hit_history: Vec::new(),
            primed_threshold: constants.primed_threshold,
            heavy_stun_threshold: constants.heavy_stun_threshold,
        })
    }

    /// Create the meter for a target engagement
    ///
    /// The threshold modifiers are folded into `max_buildup` here, once, so
    /// later hits never re-apply them.
    pub fn for_target(
        target_max_life: f64,
        modifiers: &StunModifiers,
        constants: &HeavyStunConstants,
    ) -> StunResult<Self> {
        validate_max_life(target_max_life)?;
        modifiers.validate()?;
        Self::with_constants(target_max_life * modifiers.threshold_multiplier(), constants)
    }

    pub fn current_buildup(&self) -> f64 {
        self.current_buildup
    }

    pub fn max_buildup(&self) -> f64 {
        self.max_buildup
    }

    pub fn hits_received(&self) -> u32 {
        self.hits_received
    }

    pub fn hit_history(&self) -> &[HitRecord] {
        &self.hit_history
    }

    /// Unclamped fill percentage
    pub fn raw_percentage(&self) -> f64 {
        100.0 * self.current_buildup / self.max_buildup
    }

    /// Fill percentage for display, clamped to 0-100
    pub fn buildup_percentage(&self) -> f64 {
        self.raw_percentage().clamp(0.0, 100.0)
    }

    pub fn state(&self) -> StunState {
        StunState::from_percentage(
            self.raw_percentage(),
            self.primed_threshold,
            self.heavy_stun_threshold,
        )
    }

    pub fn is_primed(&self) -> bool {
        self.state() == StunState::Primed
    }

    pub fn is_heavy_stunned(&self) -> bool {
        self.state() == StunState::HeavyStunned
    }

    /// Buildup still needed before the target is heavy stunned
    pub fn remaining_buildup(&self) -> f64 {
        let needed = self.max_buildup * self.heavy_stun_threshold / 100.0;
        (needed - self.current_buildup).max(0.0)
    }

    /// Estimate how many more hits of `buildup_per_hit` fill the meter
    ///
    /// Returns 0 once heavy stunned and infinity when hits add no buildup
    /// (including a NaN buildup).
    pub fn estimate_hits_to_heavy_stun(&self, buildup_per_hit: f64) -> f64 {
        if self.is_heavy_stunned() {
            return 0.0;
        }
        if !(buildup_per_hit > 0.0) {
            return f64::INFINITY;
        }
        (self.remaining_buildup() / buildup_per_hit).max(0.0)
    }

    /// Add one hit's buildup and record it
    pub fn record_hit(&mut self, damage: f64, buildup: f64) -> HitRecord {
        self.current_buildup += buildup;
        self.hits_received += 1;

        let record = HitRecord {
            damage,
            buildup,
            total_buildup: self.current_buildup,
            percentage: self.raw_percentage(),
        };
        self.hit_history.push(record);
        record
    }

    /// Clear all buildup and history, returning the meter to Normal
    pub fn reset(&mut self) {
        self.current_buildup = 0.0;
        self.hits_received = 0;
        self.hit_history.clear();
    }

    /// Lightweight copy of the meter without its history
    pub fn snapshot(&self) -> MeterSnapshot {
        MeterSnapshot {
            current_buildup: self.current_buildup,
            max_buildup: self.max_buildup,
            buildup_percentage: self.buildup_percentage(),
            state: self.state(),
            hits_received: self.hits_received,
        }
    }
}

/// Meter state as observed right after a hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeterSnapshot {
    pub current_buildup: f64,
    pub max_buildup: f64,
    pub buildup_percentage: f64,
    pub state: StunState,
    pub hits_received: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_meter_is_normal() {
        let meter = HeavyStunMeter::new(5000.0).unwrap();
        assert_eq!(meter.state(), StunState::Normal);
        assert!((meter.buildup_percentage() - 0.0).abs() < f64::EPSILON);
        assert_eq!(meter.hits_received(), 0);
        assert!(meter.hit_history().is_empty());
    }

    #[test]
    fn test_rejects_non_positive_max() {
        assert_eq!(
            HeavyStunMeter::new(0.0),
            Err(StunError::NonPositiveThreshold(0.0))
        );
        assert!(HeavyStunMeter::new(-10.0).is_err());
        assert!(HeavyStunMeter::new(f64::INFINITY).is_err());
        assert!(HeavyStunMeter::new(f64::NAN).is_err());
    }

    #[test]
    fn test_for_target_scales_threshold_once() {
        let mods = StunModifiers::new().with_stun_threshold(2.0, 0.75);
        let meter = HeavyStunMeter::for_target(1000.0, &mods, &HeavyStunConstants::default()).unwrap();
        assert!((meter.max_buildup() - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_for_target_validates_life() {
        let result = HeavyStunMeter::for_target(0.0, &StunModifiers::default(), &HeavyStunConstants::default());
        assert_eq!(result, Err(StunError::NonPositiveMaxLife(0.0)));
    }

    #[test]
    fn test_percentage_display_clamped_but_buildup_not() {
        let mut meter = HeavyStunMeter::new(1000.0).unwrap();
        meter.record_hit(1500.0, 1500.0);
        assert!((meter.current_buildup() - 1500.0).abs() < f64::EPSILON);
        assert!((meter.raw_percentage() - 150.0).abs() < 1e-9);
        assert!((meter.buildup_percentage() - 100.0).abs() < f64::EPSILON);
        assert!(meter.is_heavy_stunned());
    }

    #[test]
    fn test_record_hit_appends_history_in_order() {
        let mut meter = HeavyStunMeter::new(1000.0).unwrap();
        meter.record_hit(100.0, 100.0);
        meter.record_hit(300.0, 300.0);

        let history = meter.hit_history();
        assert_eq!(history.len(), 2);
        assert!((history[0].total_buildup - 100.0).abs() < f64::EPSILON);
        assert!((history[1].total_buildup - 400.0).abs() < f64::EPSILON);
        assert!((history[1].percentage - 40.0).abs() < 1e-9);
        assert_eq!(meter.hits_received(), 2);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut meter = HeavyStunMeter::new(1000.0).unwrap();
        meter.record_hit(700.0, 700.0);
        meter.record_hit(700.0, 700.0);
        assert!(meter.is_heavy_stunned());

        meter.reset();
        assert!((meter.current_buildup() - 0.0).abs() < f64::EPSILON);
        assert!((meter.buildup_percentage() - 0.0).abs() < f64::EPSILON);
        assert_eq!(meter.state(), StunState::Normal);
        assert_eq!(meter.hits_received(), 0);
        assert!(meter.hit_history().is_empty());
        assert!((meter.max_buildup() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_return_to_primed_without_reset() {
        let mut meter = HeavyStunMeter::new(1000.0).unwrap();
        meter.record_hit(1000.0, 1000.0);
        meter.record_hit(0.0, 0.0);
        assert!(meter.is_heavy_stunned());
        assert!(!meter.is_primed());
    }

    #[test]
    fn test_estimate_hits() {
        let mut meter = HeavyStunMeter::new(1000.0).unwrap();
        meter.record_hit(250.0, 250.0);
        assert!((meter.estimate_hits_to_heavy_stun(250.0) - 3.0).abs() < 1e-9);
        assert!(meter.estimate_hits_to_heavy_stun(0.0).is_infinite());
        assert!(meter.estimate_hits_to_heavy_stun(-5.0).is_infinite());

        meter.record_hit(750.0, 750.0);
        assert!((meter.estimate_hits_to_heavy_stun(250.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_with_nan_buildup_is_unbounded() {
        let meter = HeavyStunMeter::new(1000.0).unwrap();
        assert_eq!(meter.state(), StunState::Normal);
        assert_eq!(meter.estimate_hits_to_heavy_stun(f64::NAN), f64::INFINITY);
    }

    #[test]
    fn test_snapshot() {
        let mut meter = HeavyStunMeter::new(2000.0).unwrap();
        meter.record_hit(1200.0, 1200.0);
        let snap = meter.snapshot();
        assert_eq!(snap.state, StunState::Primed);
        assert!((snap.buildup_percentage - 60.0).abs() < 1e-9);
        assert_eq!(snap.hits_received, 1);
    }

    proptest! {
        #[test]
        fn prop_state_derived_from_percentage(max in 1.0f64..100_000.0, fraction in 0.0f64..=2.0) {
            let mut meter = HeavyStunMeter::new(max).unwrap();
            let buildup = max * fraction;
            meter.record_hit(buildup, buildup);

            let pct = meter.raw_percentage();
            let expected = if pct >= 100.0 {
                StunState::HeavyStunned
            } else if pct >= 50.0 {
                StunState::Primed
            } else {
                StunState::Normal
            };
            prop_assert_eq!(meter.state(), expected);
            prop_assert!(meter.buildup_percentage() <= 100.0);
            prop_assert!(meter.current_buildup() >= 0.0);
        }

        #[test]
        fn prop_reset_from_any_state(max in 1.0f64..10_000.0, hits in prop::collection::vec(0.0f64..5_000.0, 0..20)) {
            let mut meter = HeavyStunMeter::new(max).unwrap();
            for h in &hits {
                meter.record_hit(*h, *h);
            }
            meter.reset();
            prop_assert_eq!(meter.state(), StunState::Normal);
            prop_assert_eq!(meter.hits_received(), 0);
            prop_assert!(meter.hit_history().is_empty());
            prop_assert_eq!(meter.current_buildup(), 0.0);
        }
    }
}
