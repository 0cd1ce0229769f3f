//! Top-level configuration.

use serde::{Deserialize, Serialize};

use super::{ConversionConfig, ObservabilityConfig};
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LRW_*`, via `apply_env_overrides` or `load`)
/// 2. TOML document
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LrwConfig {
    pub conversion: ConversionConfig,
    pub observability: ObservabilityConfig,
}

impl LrwConfig {
    /// Load configuration from a TOML string. Missing sections and fields
    /// take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML string, then apply `LRW_*` environment overrides.
    pub fn load(toml_str: &str) -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(toml_str)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "expected one of {}, got {:?}",
                    LOG_LEVELS.join(", "),
                    self.observability.log_level
                ),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `LRW_<SECTION>_<FIELD>`, e.g. `LRW_OBSERVABILITY_JSON_LOGS`.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LRW_CONVERSION_STRICT_EXTENSION_KEYS") {
            if let Ok(v) = val.parse::<bool>() {
                self.conversion.strict_extension_keys = v;
            }
        }
        if let Ok(val) = std::env::var("LRW_CONVERSION_GENERATE_RESULT_IDS") {
            if let Ok(v) = val.parse::<bool>() {
                self.conversion.generate_result_ids = v;
            }
        }
        if let Ok(val) = std::env::var("LRW_OBSERVABILITY_LOG_LEVEL") {
            if LOG_LEVELS.contains(&val.to_ascii_lowercase().as_str()) {
                self.observability.log_level = val;
            }
        }
        if let Ok(val) = std::env::var("LRW_OBSERVABILITY_JSON_LOGS") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json_logs = v;
            }
        }
    }
}
