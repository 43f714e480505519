//! StunModifierAccumulator - Collects modifier contributions before resolving them

use super::source::StunModifierSource;
use super::StunModifiers;

/// Accumulates stun modifier contributions from various sources
///
/// Additive values sum, multiplicative factors are kept as a list and
/// multiplied on resolve, the minimum chance floor keeps the highest
/// contribution, and immunity from any source wins.
#[derive(Debug, Clone, Default)]
pub struct StunModifierAccumulator {
    pub increased_stun_chance: f64,
    pub more_stun_chance: Vec<f64>,
    pub increased_stun_threshold: Vec<f64>,
    pub reduced_stun_threshold: Vec<f64>,
    pub stun_buildup_multiplier: Vec<f64>,
    pub minimum_stun_chance: Option<f64>,
    pub immune_to_stun: bool,
}

impl StunModifierAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an increased stun chance bonus, in percent
    pub fn add_increased_stun_chance(&mut self, percent: f64) {
        self.increased_stun_chance += percent;
    }

    /// Add a more stun chance factor (1.2 = 20% more)
    pub fn add_more_stun_chance(&mut self, factor: f64) {
        self.more_stun_chance.push(factor);
    }

    pub fn add_increased_stun_threshold(&mut self, factor: f64) {
        self.increased_stun_threshold.push(factor);
    }

    pub fn add_reduced_stun_threshold(&mut self, factor: f64) {
        self.reduced_stun_threshold.push(factor);
    }

    pub fn add_stun_buildup_multiplier(&mut self, factor: f64) {
        self.stun_buildup_multiplier.push(factor);
    }

    /// Offer a minimum chance floor; the highest one wins
    pub fn add_minimum_stun_chance(&mut self, percent: f64) {
        self.minimum_stun_chance = Some(match self.minimum_stun_chance {
            Some(existing) => existing.max(percent),
            None => percent,
        });
    }

    pub fn set_immune(&mut self) {
        self.immune_to_stun = true;
    }

    /// Fold everything collected into one resolved modifier set
    pub fn resolve(&self) -> StunModifiers {
        StunModifiers {
            increased_stun_chance: self.increased_stun_chance,
            more_stun_chance: self.more_stun_chance.iter().product(),
            increased_stun_threshold: self.increased_stun_threshold.iter().product(),
            reduced_stun_threshold: self.reduced_stun_threshold.iter().product(),
            stun_buildup_multiplier: self.stun_buildup_multiplier.iter().product(),
            minimum_stun_chance: self.minimum_stun_chance,
            immune_to_stun: self.immune_to_stun,
        }
    }
}

/// Aggregate sources into resolved modifiers, applying them in priority order
pub fn aggregate_modifiers(sources: &[&dyn StunModifierSource]) -> StunModifiers {
    let mut ordered: Vec<&dyn StunModifierSource> = sources.to_vec();
    ordered.sort_by_key(|s| s.priority());

    let mut acc = StunModifierAccumulator::new();
    for source in ordered {
        tracing::trace!(source = source.id(), "applying stun modifier source");
        source.apply(&mut acc);
    }
    acc.resolve()
}
