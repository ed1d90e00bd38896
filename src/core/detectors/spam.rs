//! Spam detector
//!
//! Deterministic lexical heuristics: link density, promotional phrasing,
//! repeated-character runs, shouting, and token repetition each contribute a
//! fixed amount to the score. Identical input always yields the identical
//! score.

use super::SignalDetector;
use crate::core::patterns::{PROMO_PATTERN, URL_PATTERN};
use crate::core::types::{MetadataValue, ModerationSignal, Severity, SignalKind, SignalMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Minimum alphabetic length before the uppercase-ratio heuristic applies
const SHOUTING_MIN_LEN: usize = 12;
/// Uppercase ratio above which text counts as shouting
const SHOUTING_RATIO: f64 = 0.7;
/// Length of a same-character run that counts as filler
const REPEAT_RUN_LEN: usize = 5;

/// Detector for spam heuristics
#[derive(Debug, Clone)]
pub struct SpamDetector {
    /// Score at which content counts as spam
    spam_threshold: f64,
}

impl SpamDetector {
    /// Create a detector with the configured spam threshold
    pub fn new(spam_threshold: f64) -> Self {
        Self { spam_threshold }
    }

    fn has_repeated_run(text: &str) -> bool {
        let mut run = 1usize;
        let mut prev: Option<char> = None;
        for c in text.chars() {
            if Some(c) == prev {
                run += 1;
                if run >= REPEAT_RUN_LEN {
                    return true;
                }
            } else {
                run = 1;
                prev = Some(c);
            }
        }
        false
    }

    fn is_shouting(text: &str) -> bool {
        let alphabetic: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
        if alphabetic.len() < SHOUTING_MIN_LEN {
            return false;
        }
        let upper = alphabetic.iter().filter(|c| c.is_uppercase()).count();
        upper as f64 / alphabetic.len() as f64 > SHOUTING_RATIO
    }

    fn has_token_repetition(text: &str) -> bool {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < 6 {
            return false;
        }
        let distinct: std::collections::HashSet<String> =
            tokens.iter().map(|t| t.to_lowercase()).collect();
        (distinct.len() as f64) / (tokens.len() as f64) < 0.5
    }
}

#[async_trait]
impl SignalDetector for SpamDetector {
    fn kind(&self) -> SignalKind {
        SignalKind::Spam
    }

    async fn detect(&self, text: &str) -> Result<ModerationSignal> {
        let url_count = URL_PATTERN.find_iter(text).count();
        let promo_count = PROMO_PATTERN.find_iter(text).count();

        let mut score = 0.0;
        score += (url_count as f64 * 0.4).min(0.8);
        score += (promo_count as f64 * 0.3).min(0.6);
        if Self::has_repeated_run(text) {
            score += 0.3;
        }
        if Self::is_shouting(text) {
            score += 0.3;
        }
        if Self::has_token_repetition(text) {
            score += 0.3;
        }
        let score = score.min(1.0);

        let is_spam = score >= self.spam_threshold;
        let severity = if is_spam {
            Severity::Medium
        } else {
            Severity::None
        };
        let confidence = if is_spam { 0.85 } else { 0.75 };

        let mut metadata = SignalMetadata::new();
        metadata.insert("is_spam".to_string(), MetadataValue::Bool(is_spam));
        metadata.insert("url_count".to_string(), MetadataValue::Number(url_count as f64));
        metadata.insert(
            "promo_count".to_string(),
            MetadataValue::Number(promo_count as f64),
        );

        Ok(ModerationSignal {
            kind: SignalKind::Spam,
            score,
            confidence,
            severity,
            metadata,
        })
    }
}
