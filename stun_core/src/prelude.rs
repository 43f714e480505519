//! Prelude module for convenient imports
//!
//! ```rust
//! use stun_core::prelude::*;
//! ```

// Core types
pub use crate::types::{AttackType, DamageType, Hit, StunState};

// Modifiers
pub use crate::modifiers::{aggregate_modifiers, ModifierContribution, SourceKind, StunModifierSource, StunModifiers};

// Calculation
pub use crate::calculator::{CompleteStunResult, HeavyStunResult, LightStunResult, StunCalculator};
pub use crate::meter::HeavyStunMeter;
pub use crate::session::StunSession;

// Errors and config
pub use crate::config::StunConstants;
pub use crate::error::{StunError, StunResult};
