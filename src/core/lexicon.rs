//! Runtime lexicon structures
//!
//! Builds matchable term tables from [`LexiconConfig`] and implements the one
//! shared crisis assessment used by both the crisis detector and the
//! standalone classifier. Matching is case-insensitive substring containment
//! throughout; phrases inside larger words also match.

use crate::config::LexiconConfig;
use crate::core::types::Severity;
use serde::{Deserialize, Serialize};

/// Tiered crisis lexicon with context intensifiers
#[derive(Debug, Clone)]
pub struct CrisisLexicon {
    /// Lowercased phrase plus keyword weight (1-3)
    entries: Vec<(String, u8)>,
    /// Lowercased intensifier words
    intensifiers: Vec<String>,
}

/// Outcome of assessing one text against the crisis lexicon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisAssessment {
    /// Assessed severity tier after any intensifier bump
    pub severity: Severity,
    /// Crisis phrases found in the text
    pub matched_phrases: Vec<String>,
    /// True when an intensifier co-occurred with a crisis phrase and bumped
    /// the severity one tier
    pub intensified: bool,
}

impl CrisisAssessment {
    /// Whether any crisis phrase matched
    pub fn is_crisis(&self) -> bool {
        self.severity != Severity::None
    }
}

fn lower_all(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| t.to_lowercase()).collect()
}

impl CrisisLexicon {
    /// Build the runtime lexicon from configuration
    pub fn from_config(config: &LexiconConfig) -> Self {
        let mut entries = Vec::new();
        for phrase in &config.crisis_high {
            entries.push((phrase.to_lowercase(), 3));
        }
        for phrase in &config.crisis_medium {
            entries.push((phrase.to_lowercase(), 2));
        }
        for phrase in &config.crisis_low {
            entries.push((phrase.to_lowercase(), 1));
        }

        Self {
            entries,
            intensifiers: lower_all(&config.intensifiers),
        }
    }

    /// Assess a text: scan every phrase, take the maximum weight, bump one
    /// tier if an intensifier co-occurs with at least one crisis phrase,
    /// capped at `High`
    pub fn assess(&self, text: &str) -> CrisisAssessment {
        let lowered = text.to_lowercase();

        let mut max_weight: u8 = 0;
        let mut matched_phrases = Vec::new();
        for (phrase, weight) in &self.entries {
            if lowered.contains(phrase.as_str()) {
                max_weight = max_weight.max(*weight);
                matched_phrases.push(phrase.clone());
            }
        }

        let intensifier_present = self
            .intensifiers
            .iter()
            .any(|word| lowered.contains(word.as_str()));

        let intensified = intensifier_present && max_weight > 0;
        let severity = if intensified {
            Severity::from_weight(max_weight).bump()
        } else {
            Severity::from_weight(max_weight)
        };

        CrisisAssessment {
            severity,
            matched_phrases,
            intensified,
        }
    }
}

/// Flat lowercased term list used by the substring detectors
#[derive(Debug, Clone)]
pub struct TermList {
    terms: Vec<String>,
}

impl TermList {
    /// Build a term list, lowercasing every entry
    pub fn new(terms: &[String]) -> Self {
        Self {
            terms: lower_all(terms),
        }
    }

    /// All distinct terms contained in the text
    pub fn matches(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.terms
            .iter()
            .filter(|term| lowered.contains(term.as_str()))
            .cloned()
            .collect()
    }

    /// Whether any term is contained in the text
    pub fn matches_any(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.terms.iter().any(|term| lowered.contains(term.as_str()))
    }
}

/// Weighted term table used by the toxicity scorer
#[derive(Debug, Clone)]
pub struct WeightedTermTable {
    entries: Vec<(String, f64)>,
}

impl WeightedTermTable {
    /// Build the table from configuration, lowercasing every term
    pub fn new(entries: &[crate::config::WeightedTerm]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|e| (e.term.to_lowercase(), e.weight))
                .collect(),
        }
    }

    /// Sum of weights for every matched term plus the matched terms themselves
    pub fn score(&self, text: &str) -> (f64, Vec<String>) {
        let lowered = text.to_lowercase();
        let mut total = 0.0;
        let mut matched = Vec::new();
        for (term, weight) in &self.entries {
            if lowered.contains(term.as_str()) {
                total += weight;
                matched.push(term.clone());
            }
        }
        (total.min(1.0), matched)
    }
}
