//! Stun calculation errors

use thiserror::Error;

/// Invalid input to a stun evaluation
///
/// These indicate a defect in the caller; values are never clamped to
/// make them valid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StunError {
    #[error("Damage must be non-negative, got {0}")]
    NegativeDamage(f64),
    #[error("Damage must be finite, got {0}")]
    NonFiniteDamage(f64),
    #[error("Target max life must be positive and finite, got {0}")]
    NonPositiveMaxLife(f64),
    #[error("Stun threshold must be positive and finite, got {0}")]
    NonPositiveThreshold(f64),
    #[error("Invalid stun modifier {field}: {value}")]
    InvalidModifier { field: &'static str, value: f64 },
    #[error("Unknown target: {0}")]
    UnknownTarget(String),
}

pub type StunResult<T> = Result<T, StunError>;

/// Validate hit damage
pub fn validate_damage(damage: f64) -> StunResult<()> {
    if !damage.is_finite() {
        return Err(StunError::NonFiniteDamage(damage));
    }
    if damage < 0.0 {
        return Err(StunError::NegativeDamage(damage));
    }
    Ok(())
}

/// Validate a target's max life
pub fn validate_max_life(max_life: f64) -> StunResult<()> {
    if !max_life.is_finite() || max_life <= 0.0 {
        return Err(StunError::NonPositiveMaxLife(max_life));
    }
    Ok(())
}
