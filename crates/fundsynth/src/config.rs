//! Application configuration.

use fundsynth_costs::{AdminRates, RateError, ServicingRates};
use fundsynth_data::{DataError, SynthConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`AppConfig`]
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A rate is negative or not finite
    #[error(transparent)]
    Rate(#[from] RateError),

    /// Generator settings are unusable
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Generator settings and rate tables.
///
/// Every section is optional in the file; missing sections take their
/// defaults. A `[servicing]` section replaces the whole default table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Synthetic data generator settings
    pub synth: SynthConfig,

    /// Servicing rate per asset class
    pub servicing: ServicingRates,

    /// Admin fee rates in basis points
    pub admin: AdminRates,
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// contains invalid values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse or contains invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check generator settings and both rate tables.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.synth.validate()?;
        self.servicing.validate()?;
        self.admin.validate()?;
        Ok(())
    }
}
