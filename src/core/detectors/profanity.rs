//! Profanity detector
//!
//! Substring match against a fixed word list, with severity bucketed by the
//! count of distinct matched words: 0 -> none, 1-2 -> medium, more -> high.

use super::SignalDetector;
use crate::core::lexicon::TermList;
use crate::core::types::{MetadataValue, ModerationSignal, Severity, SignalKind, SignalMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Detector for profanity
#[derive(Debug, Clone)]
pub struct ProfanityDetector {
    words: Arc<TermList>,
}

impl ProfanityDetector {
    /// Create a detector over a shared word list
    pub fn new(words: Arc<TermList>) -> Self {
        Self { words }
    }

    fn bucket(match_count: usize) -> (Severity, f64, f64) {
        // (severity, score, confidence) per distinct-match bucket
        match match_count {
            0 => (Severity::None, 0.0, 0.9),
            1 | 2 => (Severity::Medium, 0.5, 0.85),
            _ => (Severity::High, 0.9, 0.95),
        }
    }
}

#[async_trait]
impl SignalDetector for ProfanityDetector {
    fn kind(&self) -> SignalKind {
        SignalKind::Profanity
    }

    async fn detect(&self, text: &str) -> Result<ModerationSignal> {
        let matched = self.words.matches(text);
        let (severity, score, confidence) = Self::bucket(matched.len());

        let mut metadata = SignalMetadata::new();
        metadata.insert(
            "matched_words".to_string(),
            MetadataValue::List(matched),
        );

        Ok(ModerationSignal {
            kind: SignalKind::Profanity,
            score,
            confidence,
            severity,
            metadata,
        })
    }
}
