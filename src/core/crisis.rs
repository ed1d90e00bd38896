//! Standalone crisis classifier
//!
//! Entry point for chat-facing callers that only need a crisis verdict and a
//! supportive response template, without running the full moderation pipeline.
//! Shares the exact lexicon and assessment algorithm with the crisis detector,
//! so the two can never drift apart.

use crate::core::lexicon::{CrisisAssessment, CrisisLexicon};
use crate::core::types::Severity;
use std::sync::Arc;

/// Classifies crisis severity and supplies severity-keyed response templates
#[derive(Debug, Clone)]
pub struct CrisisClassifier {
    lexicon: Arc<CrisisLexicon>,
}

impl CrisisClassifier {
    /// Create a classifier over a shared lexicon
    pub fn new(lexicon: Arc<CrisisLexicon>) -> Self {
        Self { lexicon }
    }

    /// Assess a text against the crisis lexicon
    pub fn assess(&self, text: &str) -> CrisisAssessment {
        self.lexicon.assess(text)
    }

    /// Severity-only verdict
    pub fn classify(&self, text: &str) -> Severity {
        self.assess(text).severity
    }

    /// Supportive response template for a severity tier
    ///
    /// Returns `None` for `Severity::None`; callers render these instead of a
    /// bare rejection when content is suppressed.
    pub fn supportive_response(severity: Severity) -> Option<&'static str> {
        match severity {
            Severity::None => None,
            Severity::Low => Some(
                "It sounds like things feel heavy right now. I'm here with you, \
                 and it's okay to take this one moment at a time.",
            ),
            Severity::Medium => Some(
                "I'm really glad you shared that with me. What you're feeling \
                 matters, and you don't have to carry it alone. Would it help to \
                 talk through what's weighing on you?",
            ),
            Severity::High => Some(
                "I'm concerned about what you're going through, and your safety \
                 matters most. Please reach out to someone who can help right \
                 now: call or text 988 to reach the Suicide & Crisis Lifeline, \
                 or contact your local emergency services.",
            ),
        }
    }
}
