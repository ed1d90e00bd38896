//! Toxicity detector
//!
//! Deterministic lexical scorer: each matched toxic term contributes its
//! configured weight, saturating at 1.0.

use super::SignalDetector;
use crate::core::lexicon::WeightedTermTable;
use crate::core::types::{MetadataValue, ModerationSignal, Severity, SignalKind, SignalMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Detector for toxic language
#[derive(Debug, Clone)]
pub struct ToxicityDetector {
    terms: Arc<WeightedTermTable>,
}

impl ToxicityDetector {
    /// Create a detector over a shared weighted term table
    pub fn new(terms: Arc<WeightedTermTable>) -> Self {
        Self { terms }
    }
}

#[async_trait]
impl SignalDetector for ToxicityDetector {
    fn kind(&self) -> SignalKind {
        SignalKind::Toxicity
    }

    async fn detect(&self, text: &str) -> Result<ModerationSignal> {
        let (score, matched) = self.terms.score(text);
        let confidence = if matched.is_empty() { 0.7 } else { 0.8 };

        let mut metadata = SignalMetadata::new();
        metadata.insert("matched_terms".to_string(), MetadataValue::List(matched));

        Ok(ModerationSignal {
            kind: SignalKind::Toxicity,
            score,
            confidence,
            severity: Severity::None,
            metadata,
        })
    }
}
