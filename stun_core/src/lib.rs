//! stun_core - Stun resolution engine for build analysis
//!
//! This library provides:
//! - StunModifiers: Resolved stun bonuses aggregated from gear, passives, and buffs
//! - Light Stun: Per-hit stun chance with floors and type bonuses
//! - HeavyStunMeter: Persistent buildup meter (Normal → Primed → HeavyStunned)
//! - StunCalculator: Combined per-hit evaluation, including Crushing Blows
//! - StunSession: Per-target meter tracking with Heavy Stun expiry

pub mod calculator;
pub mod config;
pub mod error;
pub mod meter;
pub mod modifiers;
pub mod prelude;
pub mod session;
pub mod types;

// Re-export core types for convenience
pub use calculator::{
    apply_heavy_stun_hit, evaluate_complete_stun, evaluate_complete_stun_with_rng,
    evaluate_light_stun, evaluate_light_stun_with_rng, CompleteStunResult, HeavyStunResult,
    LightStunResult, StunCalculator,
};
pub use config::{default_constants, ConfigError, StunConstants};
pub use error::{StunError, StunResult};
pub use meter::{HeavyStunMeter, HitRecord, MeterSnapshot};
pub use modifiers::{
    aggregate_modifiers, ModifierContribution, SourceKind, StunModifierAccumulator,
    StunModifierSource, StunModifiers,
};
pub use session::{StunSession, TrackedTarget};
pub use types::{AttackType, DamageType, Hit, StunState};
