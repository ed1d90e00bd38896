//! Crisis keyword detector
//!
//! Scores self-harm and suicide risk language against the tiered crisis
//! lexicon. Any match is treated as high-confidence: a single keyword hit is
//! enough to act on, so confidence is a fixed step rather than a continuous
//! function of the match.

use super::SignalDetector;
use crate::core::lexicon::CrisisLexicon;
use crate::core::types::{MetadataValue, ModerationSignal, SignalKind, SignalMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Confidence reported when any crisis phrase matches
const CONFIDENCE_CRISIS: f64 = 0.9;
/// Confidence reported on a clean text
const CONFIDENCE_CLEAN: f64 = 0.1;

/// Detector for crisis language
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    lexicon: Arc<CrisisLexicon>,
}

impl CrisisDetector {
    /// Create a detector over a shared lexicon
    pub fn new(lexicon: Arc<CrisisLexicon>) -> Self {
        Self { lexicon }
    }
}

#[async_trait]
impl SignalDetector for CrisisDetector {
    fn kind(&self) -> SignalKind {
        SignalKind::Crisis
    }

    async fn detect(&self, text: &str) -> Result<ModerationSignal> {
        let assessment = self.lexicon.assess(text);

        let mut metadata = SignalMetadata::new();
        metadata.insert(
            "matched_phrases".to_string(),
            MetadataValue::List(assessment.matched_phrases.clone()),
        );
        metadata.insert(
            "intensified".to_string(),
            MetadataValue::Bool(assessment.intensified),
        );

        let (score, confidence) = if assessment.is_crisis() {
            (
                f64::from(assessment.severity.weight()) / 3.0,
                CONFIDENCE_CRISIS,
            )
        } else {
            (0.0, CONFIDENCE_CLEAN)
        };

        Ok(ModerationSignal {
            kind: SignalKind::Crisis,
            score,
            confidence,
            severity: assessment.severity,
            metadata,
        })
    }
}
