//! Moderation orchestrator
//!
//! Public entry point of the engine. Dispatches all detectors concurrently for
//! one input, joins once every detector completes (latency is bounded by the
//! slowest detector, not their sum), applies the decision aggregator, and
//! records statistics. Detectors that error or exceed their time budget fall
//! back to a neutral signal and mark the result degraded; the call itself
//! always completes.

use crate::config::{ModerationConfig, RuntimeConfig, Validate};
use crate::core::aggregator::DecisionAggregator;
use crate::core::crisis::CrisisClassifier;
use crate::core::detectors::{
    AdviceDetector, CrisisDetector, ProfanityDetector, SentimentDetector, SignalDetector,
    SpamDetector, ToxicityDetector,
};
use crate::core::lexicon::{CrisisAssessment, CrisisLexicon, TermList, WeightedTermTable};
use crate::core::types::{
    ModerationResult, ModerationSignal, ResponseContext, Severity,
};
use crate::monitoring::ModerationStats;
use crate::utils::error::{ModerationError, Result};
use chrono::Utc;
use futures::future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};
use uuid::Uuid;

/// Maximum content length accepted by the engine, in characters
///
/// The surrounding validation layer enforces 1-4000 characters before content
/// reaches moderation; the orchestrator rejects only the degenerate cases.
pub const MAX_CONTENT_CHARS: usize = 4000;

/// Backoff before retrying a failed detector
const RETRY_BACKOFF: Duration = Duration::from_millis(50);

/// Public entry point for content moderation
pub struct ModerationOrchestrator {
    /// Detectors run for user-submitted content
    detectors: Vec<Arc<dyn SignalDetector>>,
    /// Detectors run for AI-generated responses (user set plus advice checks)
    response_detectors: Vec<Arc<dyn SignalDetector>>,
    aggregator: DecisionAggregator,
    classifier: CrisisClassifier,
    stats: Arc<ModerationStats>,
    runtime: RuntimeConfig,
    batch_permits: Arc<Semaphore>,
}

impl ModerationOrchestrator {
    /// Build an orchestrator with the default detector set
    pub fn new(config: ModerationConfig) -> Result<Self> {
        config.validate()?;

        let lexicon = Arc::new(CrisisLexicon::from_config(&config.lexicon));
        let profanity = Arc::new(TermList::new(&config.lexicon.profanity));
        let toxic_terms = Arc::new(WeightedTermTable::new(&config.lexicon.toxic_terms));
        let negative = Arc::new(TermList::new(&config.lexicon.negative_terms));
        let positive = Arc::new(TermList::new(&config.lexicon.positive_terms));
        let inappropriate = Arc::new(TermList::new(&config.lexicon.inappropriate_advice));
        let medical = Arc::new(TermList::new(&config.lexicon.medical_advice));

        let detectors: Vec<Arc<dyn SignalDetector>> = vec![
            Arc::new(CrisisDetector::new(Arc::clone(&lexicon))),
            Arc::new(ToxicityDetector::new(toxic_terms)),
            Arc::new(SentimentDetector::new(negative, positive)),
            Arc::new(SpamDetector::new(config.thresholds.spam_score)),
            Arc::new(ProfanityDetector::new(profanity)),
        ];

        let mut response_detectors = detectors.clone();
        response_detectors.push(Arc::new(AdviceDetector::new(inappropriate, medical)));

        Ok(Self {
            detectors,
            response_detectors,
            aggregator: DecisionAggregator::new(config.thresholds.clone()),
            classifier: CrisisClassifier::new(lexicon),
            stats: Arc::new(ModerationStats::new()),
            runtime: config.runtime.clone(),
            batch_permits: Arc::new(Semaphore::new(config.runtime.max_concurrency)),
        })
    }

    /// Build an orchestrator with injected detectors
    ///
    /// The seam for plugging in real classifiers (or mocks in tests) behind
    /// the same signal interface. `response_detectors` is the set run for
    /// AI-generated responses.
    pub fn with_detectors(
        config: ModerationConfig,
        detectors: Vec<Arc<dyn SignalDetector>>,
        response_detectors: Vec<Arc<dyn SignalDetector>>,
    ) -> Result<Self> {
        config.validate()?;

        let lexicon = Arc::new(CrisisLexicon::from_config(&config.lexicon));

        Ok(Self {
            detectors,
            response_detectors,
            aggregator: DecisionAggregator::new(config.thresholds.clone()),
            classifier: CrisisClassifier::new(lexicon),
            stats: Arc::new(ModerationStats::new()),
            runtime: config.runtime.clone(),
            batch_permits: Arc::new(Semaphore::new(config.runtime.max_concurrency)),
        })
    }

    /// Moderate one piece of user-submitted content
    pub async fn moderate(&self, text: &str, user_id: &str) -> Result<ModerationResult> {
        self.run_pipeline(text, user_id, &self.detectors).await
    }

    /// Moderate a batch of inputs concurrently
    ///
    /// Each input runs its own detector pipeline; total in-flight pipelines
    /// are capped by `runtime.max_concurrency`. The output preserves input
    /// order regardless of completion order.
    pub async fn moderate_batch(
        &self,
        texts: &[String],
        user_id: &str,
    ) -> Result<Vec<ModerationResult>> {
        let futures = texts.iter().map(|text| {
            let permits = Arc::clone(&self.batch_permits);
            async move {
                let _permit = permits.acquire_owned().await.map_err(|_| {
                    ModerationError::Internal("batch semaphore closed".to_string())
                })?;
                self.run_pipeline(text, user_id, &self.detectors).await
            }
        });

        future::join_all(futures).await.into_iter().collect()
    }

    /// Moderate an AI-generated response
    ///
    /// Runs the full pipeline plus the advice checks that only apply to
    /// generated content.
    pub async fn moderate_ai_response(
        &self,
        text: &str,
        context: &ResponseContext,
    ) -> Result<ModerationResult> {
        self.run_pipeline(text, &context.user_id, &self.response_detectors)
            .await
    }

    /// Crisis-only verdict for chat-facing callers
    pub fn classify_crisis(&self, text: &str) -> Severity {
        self.classifier.classify(text)
    }

    /// Full crisis assessment including matched phrases
    pub fn assess_crisis(&self, text: &str) -> CrisisAssessment {
        self.classifier.assess(text)
    }

    /// The standalone crisis classifier
    pub fn crisis_classifier(&self) -> &CrisisClassifier {
        &self.classifier
    }

    /// Point-in-time statistics snapshot
    pub async fn stats(&self) -> crate::monitoring::ModerationStatsSnapshot {
        self.stats.snapshot().await
    }

    fn validate_content(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ModerationError::Validation(
                "content is empty".to_string(),
            ));
        }
        let chars = text.chars().count();
        if chars > MAX_CONTENT_CHARS {
            return Err(ModerationError::Validation(format!(
                "content exceeds {} characters ({})",
                MAX_CONTENT_CHARS, chars
            )));
        }
        Ok(())
    }

    /// Run one detector within its time budget
    ///
    /// Errors are retried once after a short backoff (detectors are
    /// idempotent); a timeout or repeated failure degrades to a neutral
    /// signal, returned alongside the typed failure, so the overall call
    /// still completes.
    async fn run_detector(
        &self,
        detector: &Arc<dyn SignalDetector>,
        text: &str,
    ) -> (ModerationSignal, Option<ModerationError>) {
        let kind = detector.kind();
        let budget = Duration::from_millis(self.runtime.detector_timeout_ms);

        match timeout(budget, detector.detect(text)).await {
            Ok(Ok(signal)) => (signal, None),
            Ok(Err(first_err)) => {
                if self.runtime.retry_on_error {
                    debug!("Detector {} failed, retrying once: {}", kind.as_str(), first_err);
                    sleep(RETRY_BACKOFF).await;
                    if let Ok(Ok(signal)) = timeout(budget, detector.detect(text)).await {
                        return (signal, None);
                    }
                }
                let err = ModerationError::DetectorUnavailable {
                    detector: kind.as_str().to_string(),
                };
                warn!("{} ({}), using neutral fallback", err, first_err);
                (ModerationSignal::neutral(kind), Some(err))
            }
            Err(_) => {
                let err = ModerationError::Timeout {
                    detector: kind.as_str().to_string(),
                };
                warn!(
                    "{} after {}ms, using neutral fallback",
                    err, self.runtime.detector_timeout_ms
                );
                (ModerationSignal::neutral(kind), Some(err))
            }
        }
    }

    async fn run_pipeline(
        &self,
        text: &str,
        user_id: &str,
        detectors: &[Arc<dyn SignalDetector>],
    ) -> Result<ModerationResult> {
        Self::validate_content(text)?;

        let started = Instant::now();

        let outcomes =
            future::join_all(detectors.iter().map(|d| self.run_detector(d, text))).await;

        let degraded = outcomes.iter().any(|(_, failure)| failure.is_some());
        let signals: Vec<ModerationSignal> =
            outcomes.into_iter().map(|(signal, _)| signal).collect();

        let outcome = self.aggregator.aggregate(&signals);

        let result = ModerationResult {
            id: Uuid::new_v4(),
            content: text.to_string(),
            user_id: user_id.to_string(),
            decision: outcome.decision,
            reasons: outcome.reasons,
            confidence: outcome.confidence,
            severity: outcome.severity,
            degraded,
            timestamp: Utc::now(),
            processing_time_ms: started.elapsed().as_millis() as u64,
        };

        debug!(
            "Moderated content for user {}: {:?} ({} reasons, confidence {:.2}{})",
            user_id,
            result.decision,
            result.reasons.len(),
            result.confidence,
            if degraded { ", degraded" } else { "" }
        );

        self.stats.record(&result).await;

        Ok(result)
    }
}
