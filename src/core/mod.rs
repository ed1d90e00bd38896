//! Moderation core
//!
//! Detectors, decision aggregation, crisis classification, and the public
//! orchestrator.

pub mod aggregator;
pub mod crisis;
pub mod detectors;
pub mod lexicon;
pub mod orchestrator;
pub mod patterns;
pub mod types;

pub use aggregator::{AggregateOutcome, DecisionAggregator};
pub use crisis::CrisisClassifier;
pub use detectors::{
    AdviceDetector, CrisisDetector, ProfanityDetector, SentimentDetector, SignalDetector,
    SpamDetector, ToxicityDetector,
};
pub use lexicon::{CrisisAssessment, CrisisLexicon, TermList, WeightedTermTable};
pub use orchestrator::{MAX_CONTENT_CHARS, ModerationOrchestrator};
pub use types::{
    MetadataValue, ModerationDecision, ModerationReason, ModerationResult, ModerationSignal,
    ReasonSet, ResponseContext, Severity, SignalKind, SignalMetadata,
};
