//! Configuration validation
//!
//! Validation logic for all configuration structures.

use super::models::{LexiconConfig, RuntimeConfig, ThresholdConfig};
use crate::utils::error::{ModerationError, Result};
use tracing::debug;

/// Types that can validate their own contents
pub trait Validate {
    /// Check internal consistency, returning a `Config` error on the first
    /// violation found
    fn validate(&self) -> Result<()>;
}

fn check_unit_interval(value: f64, context: &str) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ModerationError::Config(format!(
            "{} must be within [0, 1], got {}",
            context, value
        )));
    }
    Ok(())
}

impl Validate for ThresholdConfig {
    fn validate(&self) -> Result<()> {
        check_unit_interval(self.toxicity_block, "thresholds.toxicity_block")?;
        check_unit_interval(self.toxicity_flag, "thresholds.toxicity_flag")?;
        check_unit_interval(self.spam_score, "thresholds.spam_score")?;

        if self.toxicity_flag > self.toxicity_block {
            return Err(ModerationError::Config(format!(
                "thresholds.toxicity_flag ({}) must not exceed thresholds.toxicity_block ({})",
                self.toxicity_flag, self.toxicity_block
            )));
        }

        Ok(())
    }
}

impl Validate for RuntimeConfig {
    fn validate(&self) -> Result<()> {
        if self.detector_timeout_ms == 0 {
            return Err(ModerationError::Config(
                "runtime.detector_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.max_concurrency == 0 {
            return Err(ModerationError::Config(
                "runtime.max_concurrency must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for LexiconConfig {
    fn validate(&self) -> Result<()> {
        if self.crisis_high.is_empty() && self.crisis_medium.is_empty() && self.crisis_low.is_empty()
        {
            return Err(ModerationError::Config(
                "lexicon must define at least one crisis tier".to_string(),
            ));
        }

        for (name, tier) in [
            ("crisis_high", &self.crisis_high),
            ("crisis_medium", &self.crisis_medium),
            ("crisis_low", &self.crisis_low),
            ("intensifiers", &self.intensifiers),
        ] {
            if tier.iter().any(|phrase| phrase.trim().is_empty()) {
                return Err(ModerationError::Config(format!(
                    "lexicon.{} contains an empty phrase",
                    name
                )));
            }
        }

        for term in &self.toxic_terms {
            check_unit_interval(term.weight, &format!("lexicon.toxic_terms[{}]", term.term))?;
        }

        debug!("Lexicon validated");
        Ok(())
    }
}
