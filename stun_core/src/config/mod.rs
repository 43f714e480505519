//! Configuration loading from TOML files

mod constants;

pub use constants::{AttackTypeBonuses, DamageTypeBonuses, HeavyStunConstants, LightStunConstants, StunConstants};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate stun constants from a file
pub fn load_stun_constants(path: &Path) -> Result<StunConstants, ConfigError> {
    let constants: StunConstants = load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Get the bundled stun constants
pub fn default_constants() -> StunConstants {
    let toml = include_str!("../../config/stun.toml");
    parse_toml::<StunConstants>(toml)
        .ok()
        .filter(|c| c.validate().is_ok())
        .unwrap_or_else(|| {
            tracing::warn!("bundled stun.toml is invalid, using built-in defaults");
            StunConstants::default()
        })
}
