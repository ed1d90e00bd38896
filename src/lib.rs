//! # modguard
//!
//! Content moderation and crisis triage engine for chat applications.
//! Independent signal detectors (crisis keywords, toxicity, sentiment, spam,
//! profanity, AI-response advice checks) run concurrently per input and are
//! reduced by a fixed-precedence decision aggregator into an approved,
//! flagged, or blocked verdict with reason tags.
//!
//! ## Features
//!
//! - **Crisis triage first**: tiered self-harm lexicon with context
//!   intensifiers; any crisis match blocks the content and carries a severity
//!   the caller uses to pick a supportive response template
//! - **Deterministic detectors**: identical input always yields the identical
//!   verdict; the detector trait is the seam for plugging in real classifiers
//! - **Bounded concurrency**: per-detector timeouts, one retry on transient
//!   failure, neutral fallback (marked `degraded`) when a detector stays down
//! - **Batch fan-out**: concurrent batch moderation with input-order results
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modguard::{ModerationConfig, ModerationOrchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = ModerationOrchestrator::new(ModerationConfig::default())?;
//!
//!     let result = orchestrator.moderate("I feel hopeless tonight", "user-42").await?;
//!     println!("decision: {:?}, severity: {:?}", result.decision, result.severity);
//!
//!     let severity = orchestrator.classify_crisis("I feel hopeless tonight");
//!     if let Some(template) = modguard::CrisisClassifier::supportive_response(severity) {
//!         println!("supportive response: {}", template);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod config;
pub mod core;
pub mod monitoring;
pub mod utils;

// Re-export main types
pub use crate::config::{
    LexiconConfig, ModerationConfig, RuntimeConfig, ThresholdConfig, Validate, WeightedTerm,
};
pub use crate::core::{
    AggregateOutcome, CrisisAssessment, CrisisClassifier, DecisionAggregator, MAX_CONTENT_CHARS,
    MetadataValue, ModerationDecision, ModerationOrchestrator, ModerationReason, ModerationResult,
    ModerationSignal, ReasonSet, ResponseContext, Severity, SignalDetector, SignalKind,
    SignalMetadata,
};
pub use crate::monitoring::{ModerationStats, ModerationStatsSnapshot};
pub use crate::utils::error::{ModerationError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
