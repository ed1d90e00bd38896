//! Sentiment detector
//!
//! Lexicon valence scorer. The score maps the balance of negative and
//! positive terms onto [0, 1], where 0 is maximally negative and 0.5 neutral.
//! Sentiment has no decision rule of its own; it contributes context metadata
//! and its confidence to the aggregate mean.

use super::SignalDetector;
use crate::core::lexicon::TermList;
use crate::core::types::{MetadataValue, ModerationSignal, Severity, SignalKind, SignalMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Detector for sentiment valence
#[derive(Debug, Clone)]
pub struct SentimentDetector {
    negative: Arc<TermList>,
    positive: Arc<TermList>,
}

impl SentimentDetector {
    /// Create a detector over shared negative/positive term lists
    pub fn new(negative: Arc<TermList>, positive: Arc<TermList>) -> Self {
        Self { negative, positive }
    }
}

#[async_trait]
impl SignalDetector for SentimentDetector {
    fn kind(&self) -> SignalKind {
        SignalKind::Sentiment
    }

    async fn detect(&self, text: &str) -> Result<ModerationSignal> {
        let negative_hits = self.negative.matches(text).len();
        let positive_hits = self.positive.matches(text).len();
        let total = negative_hits + positive_hits;

        let (score, confidence) = if total == 0 {
            (0.5, 0.5)
        } else {
            let balance = (positive_hits as f64 - negative_hits as f64) / total as f64;
            let score = 0.5 + 0.5 * balance;
            // Confidence grows with the amount of evidence, capped below 1.
            let confidence = (0.5 + 0.1 * total as f64).min(0.9);
            (score, confidence)
        };

        let mut metadata = SignalMetadata::new();
        metadata.insert(
            "negative_hits".to_string(),
            MetadataValue::Number(negative_hits as f64),
        );
        metadata.insert(
            "positive_hits".to_string(),
            MetadataValue::Number(positive_hits as f64),
        );

        Ok(ModerationSignal {
            kind: SignalKind::Sentiment,
            score,
            confidence,
            severity: Severity::None,
            metadata,
        })
    }
}
