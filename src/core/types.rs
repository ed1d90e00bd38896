//! Core moderation types
//!
//! Value objects shared by the detectors, the aggregator, and the orchestrator.
//! Everything here is request-scoped: produced fresh per call, never cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Dimensions a detector can score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Toxic language scoring
    Toxicity,
    /// Sentiment valence scoring
    Sentiment,
    /// Self-harm / suicide risk language
    Crisis,
    /// Spam heuristics
    Spam,
    /// Profanity matching
    Profanity,
    /// AI-response advice checks
    Advice,
}

impl SignalKind {
    /// Stable name used in logs and metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Toxicity => "toxicity",
            SignalKind::Sentiment => "sentiment",
            SignalKind::Crisis => "crisis",
            SignalKind::Spam => "spam",
            SignalKind::Profanity => "profanity",
            SignalKind::Advice => "advice",
        }
    }
}

/// Tiered severity scale
///
/// Used both for crisis classification (keyword weight 0-3 maps directly onto
/// the four tiers) and for profanity match buckets. Ordered: `None < Low <
/// Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// No signal
    #[default]
    None,
    /// Low severity
    Low,
    /// Medium severity
    Medium,
    /// High severity
    High,
}

impl Severity {
    /// Map a keyword weight (0-3) onto a tier; weights above 3 saturate at `High`
    pub fn from_weight(weight: u8) -> Self {
        match weight {
            0 => Severity::None,
            1 => Severity::Low,
            2 => Severity::Medium,
            _ => Severity::High,
        }
    }

    /// Keyword weight equivalent of this tier
    pub fn weight(&self) -> u8 {
        match self {
            Severity::None => 0,
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }

    /// One tier up, capped at `High`
    pub fn bump(self) -> Self {
        Severity::from_weight(self.weight().saturating_add(1))
    }
}

/// Typed metadata value attached to a signal
///
/// Replaces untyped string-to-anything maps at the service boundary: every
/// value has an explicit kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Boolean flag
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
    /// List of terms
    List(Vec<String>),
}

/// Metadata map carried by a signal (matched terms, category labels, counters)
pub type SignalMetadata = BTreeMap<String, MetadataValue>;

/// Per-detector output for one piece of content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationSignal {
    /// Dimension this signal scores
    pub kind: SignalKind,
    /// Score in [0, 1]
    pub score: f64,
    /// Detector confidence in [0, 1]
    pub confidence: f64,
    /// Tier assigned by the detector (crisis and profanity use this; score-only
    /// detectors leave it at `None`)
    pub severity: Severity,
    /// Detector-specific metadata
    pub metadata: SignalMetadata,
}

impl ModerationSignal {
    /// Zero signal used when a detector is unavailable
    pub fn neutral(kind: SignalKind) -> Self {
        Self {
            kind,
            score: 0.0,
            confidence: 0.0,
            severity: Severity::None,
            metadata: SignalMetadata::new(),
        }
    }

    /// Read a boolean metadata flag, defaulting to false
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.metadata.get(key), Some(MetadataValue::Bool(true)))
    }

    /// Read a term list from metadata, defaulting to empty
    pub fn terms(&self, key: &str) -> &[String] {
        match self.metadata.get(key) {
            Some(MetadataValue::List(terms)) => terms,
            _ => &[],
        }
    }
}

/// Final disposition for one piece of content
///
/// Ordered by restrictiveness: `Approved < Flagged < Blocked`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ModerationDecision {
    /// Content passes
    Approved,
    /// Content needs review or a softer presentation
    Flagged,
    /// Content must be suppressed
    Blocked,
}

/// Why a result escalated past `Approved`
///
/// Non-exclusive: a single result may carry several tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ModerationReason {
    /// Self-harm / suicide risk language detected
    CrisisContent,
    /// Toxic language above threshold
    ToxicContent,
    /// Spam heuristics triggered
    SpamContent,
    /// Profanity matched
    Profanity,
    /// AI response gave inappropriate personal advice
    InappropriateAdvice,
    /// AI response gave medical advice
    MedicalAdvice,
}

/// Reason set attached to a result
pub type ReasonSet = BTreeSet<ModerationReason>;

/// Outcome of one moderation call
///
/// Serializes to the JSON contract consumed by downstream logging and
/// analytics collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResult {
    /// Unique result id
    pub id: Uuid,
    /// Content that was evaluated
    pub content: String,
    /// User the content belongs to
    pub user_id: String,
    /// Final disposition
    pub decision: ModerationDecision,
    /// Reason tags; empty only when `decision` is `Approved`
    pub reasons: ReasonSet,
    /// Arithmetic mean of the contributing signals' confidences, in [0, 1]
    pub confidence: f64,
    /// Crisis severity assessed for this content
    pub severity: Severity,
    /// True when at least one detector was unavailable and contributed a
    /// neutral fallback signal instead of a real score
    pub degraded: bool,
    /// When the verdict was produced
    pub timestamp: DateTime<Utc>,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Caller-supplied context for AI-response moderation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseContext {
    /// User the response is addressed to
    pub user_id: String,
    /// Conversation the response belongs to, when known
    pub conversation_id: Option<String>,
}

impl ResponseContext {
    /// Context for a user with no conversation attribution
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            conversation_id: None,
        }
    }
}
