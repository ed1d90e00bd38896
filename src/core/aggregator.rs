//! Decision aggregation
//!
//! Reduces the full signal set for one input to a single decision plus reason
//! tags. Precedence is fixed and evaluated top to bottom; reasons accumulate
//! independently of which rule decided the outcome, so a blocked result can
//! carry several tags.

use crate::config::ThresholdConfig;
use crate::core::detectors::{META_INAPPROPRIATE, META_MEDICAL};
use crate::core::types::{
    ModerationDecision, ModerationReason, ModerationSignal, ReasonSet, Severity, SignalKind,
};

/// Aggregated outcome for one signal set
#[derive(Debug, Clone)]
pub struct AggregateOutcome {
    /// Final disposition
    pub decision: ModerationDecision,
    /// Accumulated reason tags
    pub reasons: ReasonSet,
    /// Arithmetic mean of all signal confidences
    pub confidence: f64,
    /// Crisis severity carried through from the crisis signal
    pub severity: Severity,
}

/// Combines detector signals into one moderation decision
#[derive(Debug, Clone)]
pub struct DecisionAggregator {
    thresholds: ThresholdConfig,
}

impl DecisionAggregator {
    /// Create an aggregator with the configured thresholds
    pub fn new(thresholds: ThresholdConfig) -> Self {
        Self { thresholds }
    }

    fn find<'a>(
        signals: &'a [ModerationSignal],
        kind: SignalKind,
    ) -> Option<&'a ModerationSignal> {
        signals.iter().find(|s| s.kind == kind)
    }

    /// Reduce a signal set to a decision, reasons, and mean confidence
    pub fn aggregate(&self, signals: &[ModerationSignal]) -> AggregateOutcome {
        let crisis = Self::find(signals, SignalKind::Crisis);
        let toxicity = Self::find(signals, SignalKind::Toxicity);
        let spam = Self::find(signals, SignalKind::Spam);
        let profanity = Self::find(signals, SignalKind::Profanity);
        let advice = Self::find(signals, SignalKind::Advice);

        let is_crisis = crisis.is_some_and(|s| s.severity != Severity::None);
        let toxicity_score = toxicity.map_or(0.0, |s| s.score);
        let is_spam = spam.is_some_and(|s| s.severity != Severity::None);
        let profanity_severity = profanity.map_or(Severity::None, |s| s.severity);
        let inappropriate_advice = advice.is_some_and(|s| s.flag(META_INAPPROPRIATE));
        let medical_advice = advice.is_some_and(|s| s.flag(META_MEDICAL));

        // Reason tags accumulate whenever a signal crosses its own mention
        // threshold, regardless of which rule wins below.
        let mut reasons = ReasonSet::new();
        if is_crisis {
            reasons.insert(ModerationReason::CrisisContent);
        }
        if toxicity_score > self.thresholds.toxicity_flag {
            reasons.insert(ModerationReason::ToxicContent);
        }
        if is_spam {
            reasons.insert(ModerationReason::SpamContent);
        }
        if profanity_severity != Severity::None {
            reasons.insert(ModerationReason::Profanity);
        }
        if inappropriate_advice {
            reasons.insert(ModerationReason::InappropriateAdvice);
        }
        if medical_advice {
            reasons.insert(ModerationReason::MedicalAdvice);
        }

        // Precedence: first matching rule wins. Crisis dominates everything.
        let decision = if is_crisis {
            ModerationDecision::Blocked
        } else if toxicity_score > self.thresholds.toxicity_block {
            ModerationDecision::Blocked
        } else if is_spam {
            ModerationDecision::Blocked
        } else if profanity_severity == Severity::High {
            ModerationDecision::Blocked
        } else if toxicity_score > self.thresholds.toxicity_flag
            || profanity_severity == Severity::Medium
        {
            ModerationDecision::Flagged
        } else if inappropriate_advice || medical_advice {
            ModerationDecision::Flagged
        } else {
            ModerationDecision::Approved
        };

        let confidence = if signals.is_empty() {
            1.0
        } else {
            signals.iter().map(|s| s.confidence).sum::<f64>() / signals.len() as f64
        };

        debug_assert!(
            decision == ModerationDecision::Approved || !reasons.is_empty(),
            "non-approved decision must carry at least one reason"
        );

        AggregateOutcome {
            decision,
            reasons,
            confidence,
            severity: crisis.map_or(Severity::None, |s| s.severity),
        }
    }
}
