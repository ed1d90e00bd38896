//! Configuration management for the moderation engine
//!
//! Handles loading, validation, and environment overrides for all engine
//! configuration.

pub mod models;
pub mod validation;

pub use models::{LexiconConfig, RuntimeConfig, ThresholdConfig, WeightedTerm};
pub use validation::Validate;

use crate::utils::error::{ModerationError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration for the moderation engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// Keyword tables for every detector
    pub lexicon: LexiconConfig,
    /// Aggregator score thresholds
    pub thresholds: ThresholdConfig,
    /// Orchestrator runtime knobs
    pub runtime: RuntimeConfig,
}

impl ModerationConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading moderation config from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ModerationError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| ModerationError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Moderation config loaded");
        Ok(config)
    }

    /// Build configuration from defaults plus environment overrides
    ///
    /// Recognized variables: `MODGUARD_DETECTOR_TIMEOUT_MS`,
    /// `MODGUARD_MAX_CONCURRENCY`, `MODGUARD_RETRY_ON_ERROR`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var("MODGUARD_DETECTOR_TIMEOUT_MS") {
            self.runtime.detector_timeout_ms = value.parse().map_err(|_| {
                ModerationError::Config(format!(
                    "MODGUARD_DETECTOR_TIMEOUT_MS is not a valid integer: {}",
                    value
                ))
            })?;
        }
        if let Ok(value) = std::env::var("MODGUARD_MAX_CONCURRENCY") {
            self.runtime.max_concurrency = value.parse().map_err(|_| {
                ModerationError::Config(format!(
                    "MODGUARD_MAX_CONCURRENCY is not a valid integer: {}",
                    value
                ))
            })?;
        }
        if let Ok(value) = std::env::var("MODGUARD_RETRY_ON_ERROR") {
            self.runtime.retry_on_error = matches!(value.as_str(), "1" | "true" | "yes");
        }
        Ok(())
    }
}

impl Validate for ModerationConfig {
    fn validate(&self) -> Result<()> {
        self.lexicon.validate()?;
        self.thresholds.validate()?;
        self.runtime.validate()?;
        Ok(())
    }
}
