//! Advice detector for AI-generated responses
//!
//! Only runs when moderating generated responses, not user input. Flags
//! directive personal advice and anything resembling medical guidance, which a
//! companion app must never produce.

use super::SignalDetector;
use crate::core::lexicon::TermList;
use crate::core::types::{MetadataValue, ModerationSignal, Severity, SignalKind, SignalMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Metadata flag set when directive personal advice matched
pub const META_INAPPROPRIATE: &str = "inappropriate";
/// Metadata flag set when medical advice matched
pub const META_MEDICAL: &str = "medical";

/// Detector for inappropriate or medical advice in AI responses
#[derive(Debug, Clone)]
pub struct AdviceDetector {
    inappropriate: Arc<TermList>,
    medical: Arc<TermList>,
}

impl AdviceDetector {
    /// Create a detector over shared advice term lists
    pub fn new(inappropriate: Arc<TermList>, medical: Arc<TermList>) -> Self {
        Self {
            inappropriate,
            medical,
        }
    }
}

#[async_trait]
impl SignalDetector for AdviceDetector {
    fn kind(&self) -> SignalKind {
        SignalKind::Advice
    }

    async fn detect(&self, text: &str) -> Result<ModerationSignal> {
        let inappropriate_matches = self.inappropriate.matches(text);
        let medical_matches = self.medical.matches(text);
        let any_match = !inappropriate_matches.is_empty() || !medical_matches.is_empty();

        let mut metadata = SignalMetadata::new();
        metadata.insert(
            META_INAPPROPRIATE.to_string(),
            MetadataValue::Bool(!inappropriate_matches.is_empty()),
        );
        metadata.insert(
            META_MEDICAL.to_string(),
            MetadataValue::Bool(!medical_matches.is_empty()),
        );
        let mut matched = inappropriate_matches;
        matched.extend(medical_matches);
        metadata.insert("matched_phrases".to_string(), MetadataValue::List(matched));

        Ok(ModerationSignal {
            kind: SignalKind::Advice,
            score: if any_match { 0.7 } else { 0.0 },
            confidence: if any_match { 0.8 } else { 0.7 },
            severity: Severity::None,
            metadata,
        })
    }
}
