//! Signal detectors
//!
//! Independent scorers, one per moderation dimension. Every detector is a
//! pure function of the input text and its lexicon: no side effects, no shared
//! mutable state, deterministic output for identical input. The trait is async
//! so a detector backed by a remote classifier can slot in behind the same
//! interface.

mod advice;
mod crisis;
mod profanity;
mod sentiment;
mod spam;
mod toxicity;

pub use advice::{AdviceDetector, META_INAPPROPRIATE, META_MEDICAL};
pub use crisis::CrisisDetector;
pub use profanity::ProfanityDetector;
pub use sentiment::SentimentDetector;
pub use spam::SpamDetector;
pub use toxicity::ToxicityDetector;

use crate::core::types::{ModerationSignal, SignalKind};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A single moderation dimension scorer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignalDetector: Send + Sync {
    /// Dimension this detector scores
    fn kind(&self) -> SignalKind;

    /// Score the text, returning a signal with score and confidence in [0, 1]
    async fn detect(&self, text: &str) -> Result<ModerationSignal>;
}
