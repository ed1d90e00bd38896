//! Configuration structures
//!
//! Serde models for the moderation engine configuration. Every field has a
//! built-in default so an empty YAML file (or no file at all) yields a working
//! engine.

use serde::{Deserialize, Serialize};

/// A lexicon term with an associated weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedTerm {
    /// Term matched by case-insensitive substring containment
    pub term: String,
    /// Contribution to the score when matched
    pub weight: f64,
}

impl WeightedTerm {
    /// Convenience constructor used by the default tables
    pub fn new(term: &str, weight: f64) -> Self {
        Self {
            term: term.to_string(),
            weight,
        }
    }
}

/// Keyword tables driving every detector
///
/// Matching is case-insensitive substring containment throughout; phrases
/// inside larger words also match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Crisis phrases, weight 3 (highest risk)
    pub crisis_high: Vec<String>,
    /// Crisis phrases, weight 2
    pub crisis_medium: Vec<String>,
    /// Crisis phrases, weight 1
    pub crisis_low: Vec<String>,
    /// Context intensifiers; co-occurrence with any crisis phrase bumps the
    /// assessed severity one tier
    pub intensifiers: Vec<String>,
    /// Profanity word list
    pub profanity: Vec<String>,
    /// Toxic terms with per-term score weights
    pub toxic_terms: Vec<WeightedTerm>,
    /// Negative sentiment terms
    pub negative_terms: Vec<String>,
    /// Positive sentiment terms
    pub positive_terms: Vec<String>,
    /// Inappropriate-advice phrases (AI responses only)
    pub inappropriate_advice: Vec<String>,
    /// Medical-advice phrases (AI responses only)
    pub medical_advice: Vec<String>,
}

fn string_list(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            crisis_high: string_list(&[
                "suicide",
                "kill myself",
                "end my life",
                "end it all",
                "take my own life",
                "better off dead",
                "hurt myself",
                "self harm",
            ]),
            crisis_medium: string_list(&[
                "hopeless",
                "worthless",
                "no reason to live",
                "can't go on",
                "cant go on",
                "give up on life",
                "hate myself",
                "nothing matters",
            ]),
            crisis_low: string_list(&[
                "want to disappear",
                "tired of everything",
                "what's the point",
                "whats the point",
                "so alone",
                "empty inside",
            ]),
            intensifiers: string_list(&[
                "tonight", "plan", "ready", "method", "how to", "right now", "goodbye",
            ]),
            profanity: string_list(&[
                "fuck", "shit", "bitch", "asshole", "bastard", "prick", "douche",
            ]),
            toxic_terms: vec![
                WeightedTerm::new("kill you", 0.9),
                WeightedTerm::new("hate you", 0.6),
                WeightedTerm::new("go die", 0.7),
                WeightedTerm::new("idiot", 0.4),
                WeightedTerm::new("loser", 0.4),
                WeightedTerm::new("pathetic", 0.4),
                WeightedTerm::new("stupid", 0.3),
                WeightedTerm::new("shut up", 0.3),
                WeightedTerm::new("disgusting", 0.4),
                WeightedTerm::new("ugly", 0.3),
            ],
            negative_terms: string_list(&[
                "sad", "awful", "terrible", "miserable", "angry", "lonely", "crying", "scared",
            ]),
            positive_terms: string_list(&[
                "happy", "great", "good", "love", "wonderful", "nice", "calm", "grateful",
            ]),
            inappropriate_advice: string_list(&[
                "you should leave",
                "break up with",
                "you must quit",
                "cut them off",
                "stop talking to",
                "it's your fault",
            ]),
            medical_advice: string_list(&[
                "diagnose",
                "diagnosis",
                "prescribe",
                "prescription",
                "dosage",
                "stop taking your",
                "increase your dose",
            ]),
        }
    }
}

/// Score thresholds used by the decision aggregator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Toxicity score above which content is blocked
    pub toxicity_block: f64,
    /// Toxicity score above which content is flagged (and the toxic reason tag
    /// recorded)
    pub toxicity_flag: f64,
    /// Spam heuristic score at which content counts as spam
    pub spam_score: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            toxicity_block: 0.8,
            toxicity_flag: 0.5,
            spam_score: 0.6,
        }
    }
}

/// Runtime knobs for the orchestrator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Per-detector time budget in milliseconds
    pub detector_timeout_ms: u64,
    /// Maximum concurrently running pipelines during batch moderation
    pub max_concurrency: usize,
    /// Retry a failed detector once before falling back to a neutral signal
    pub retry_on_error: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            detector_timeout_ms: 2000,
            max_concurrency: 8,
            retry_on_error: true,
        }
    }
}
