//! StunSession - Tracks Heavy Stun meters for the targets of one engagement
//!
//! Each registered target owns exactly one meter. Hits against a target are
//! resolved one at a time through `&mut self`, so a meter is never updated
//! from two evaluations at once.

use crate::calculator::{CompleteStunResult, StunCalculator};
use crate::error::{StunError, StunResult};
use crate::meter::HeavyStunMeter;
use crate::modifiers::StunModifiers;
use crate::types::Hit;
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// A target being tracked in a session
#[derive(Debug, Clone)]
pub struct TrackedTarget {
    pub max_life: f64,
    pub modifiers: StunModifiers,
    pub meter: HeavyStunMeter,
    /// Seconds of Heavy Stun left, if currently heavy stunned
    pub heavy_stun_remaining: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct StunSession {
    calculator: StunCalculator,
    targets: HashMap<String, TrackedTarget>,
}

impl StunSession {
    pub fn new(calculator: StunCalculator) -> Self {
        StunSession {
            calculator,
            targets: HashMap::new(),
        }
    }

    pub fn calculator(&self) -> &StunCalculator {
        &self.calculator
    }

    /// Start tracking a target
    ///
    /// The meter is sized from the target's life and threshold modifiers
    /// here. Registering an id that is already tracked keeps the existing
    /// meter.
    pub fn register_target(
        &mut self,
        id: impl Into<String>,
        max_life: f64,
        modifiers: StunModifiers,
    ) -> StunResult<&HeavyStunMeter> {
        let id = id.into();
        if !self.targets.contains_key(&id) {
            let meter = self.calculator.meter_for_target(max_life, &modifiers)?;
            debug!(target_id = %id, max_buildup = meter.max_buildup(), "registered stun target");
            self.targets.insert(
                id.clone(),
                TrackedTarget {
                    max_life,
                    modifiers,
                    meter,
                    heavy_stun_remaining: None,
                },
            );
        }
        self.targets
            .get(&id)
            .map(|t| &t.meter)
            .ok_or(StunError::UnknownTarget(id))
    }

    pub fn target(&self, id: &str) -> Option<&TrackedTarget> {
        self.targets.get(id)
    }

    pub fn meter(&self, id: &str) -> Option<&HeavyStunMeter> {
        self.targets.get(id).map(|t| &t.meter)
    }

    pub fn remove_target(&mut self, id: &str) -> Option<TrackedTarget> {
        self.targets.remove(id)
    }

    /// Ids of all tracked targets, sorted
    pub fn target_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.targets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Resolve a hit against a tracked target using the thread RNG
    pub fn resolve_hit(&mut self, id: &str, hit: &Hit) -> StunResult<CompleteStunResult> {
        let mut rng = rand::thread_rng();
        self.resolve_hit_with_rng(id, hit, &mut rng)
    }

    /// Resolve a hit against a tracked target with a provided RNG
    pub fn resolve_hit_with_rng(
        &mut self,
        id: &str,
        hit: &Hit,
        rng: &mut impl Rng,
    ) -> StunResult<CompleteStunResult> {
        let target = self
            .targets
            .get_mut(id)
            .ok_or_else(|| StunError::UnknownTarget(id.to_string()))?;

        let result = self.calculator.evaluate_hit_with_rng(
            hit,
            target.max_life,
            &target.modifiers,
            &mut target.meter,
            rng,
        )?;

        if result.heavy.triggered_heavy_stun {
            target.heavy_stun_remaining = Some(self.calculator.constants().heavy.heavy_stun_duration);
        }

        Ok(result)
    }

    /// End a target's Heavy Stun now and reset its meter
    pub fn clear_heavy_stun(&mut self, id: &str) -> StunResult<()> {
        let target = self
            .targets
            .get_mut(id)
            .ok_or_else(|| StunError::UnknownTarget(id.to_string()))?;
        target.meter.reset();
        target.heavy_stun_remaining = None;
        info!(target_id = id, "heavy stun cleared");
        Ok(())
    }

    /// Advance Heavy Stun timers by `delta` seconds
    ///
    /// Targets whose Heavy Stun expires have their meter reset. Returns the
    /// ids of the targets that recovered, sorted. A negative or non-finite
    /// `delta` is ignored and leaves every timer untouched.
    pub fn tick(&mut self, delta: f64) -> Vec<String> {
        if !delta.is_finite() || delta < 0.0 {
            warn!(delta, "ignoring invalid tick delta");
            return Vec::new();
        }

        let mut recovered = Vec::new();

        for (id, target) in self.targets.iter_mut() {
            let Some(remaining) = target.heavy_stun_remaining.as_mut() else {
                continue;
            };
            *remaining -= delta;
            if *remaining <= 0.0 {
                target.meter.reset();
                target.heavy_stun_remaining = None;
                info!(target_id = %id, "heavy stun expired, meter reset");
                recovered.push(id.clone());
            }
        }

        recovered.sort_unstable();
        recovered
    }
}
