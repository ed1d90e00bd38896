//! Moderation statistics
//!
//! Aggregate counters mutated by every moderation call. Updates are
//! serialized through a single `RwLock` so concurrent chat sessions never race
//! on the aggregate; recording can never fail and never affects the verdict.

use crate::core::types::{ModerationDecision, ModerationResult};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Mutable storage behind the lock
#[derive(Debug, Default)]
struct StatsStorage {
    total_calls: u64,
    approved: u64,
    flagged: u64,
    blocked: u64,
    degraded_calls: u64,
    confidence_sum: f64,
    processing_time_ms_total: u64,
}

/// Serializable point-in-time view of the aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationStatsSnapshot {
    /// Total moderation calls recorded
    pub total_calls: u64,
    /// Calls that ended in `Approved`
    pub approved: u64,
    /// Calls that ended in `Flagged`
    pub flagged: u64,
    /// Calls that ended in `Blocked`
    pub blocked: u64,
    /// Calls where at least one detector fell back to a neutral signal
    pub degraded_calls: u64,
    /// Rolling mean of result confidences
    pub average_confidence: f64,
    /// Cumulative processing time across all calls
    pub total_processing_time_ms: u64,
    /// Mean processing time per call
    pub average_processing_time_ms: f64,
}

/// Thread-safe moderation statistics aggregate
#[derive(Debug, Default)]
pub struct ModerationStats {
    storage: RwLock<StatsStorage>,
}

impl ModerationStats {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed moderation result
    pub async fn record(&self, result: &ModerationResult) {
        let mut storage = self.storage.write().await;
        storage.total_calls += 1;
        match result.decision {
            ModerationDecision::Approved => storage.approved += 1,
            ModerationDecision::Flagged => storage.flagged += 1,
            ModerationDecision::Blocked => storage.blocked += 1,
        }
        if result.degraded {
            storage.degraded_calls += 1;
        }
        storage.confidence_sum += result.confidence;
        storage.processing_time_ms_total += result.processing_time_ms;
    }

    /// Point-in-time view of the aggregate
    pub async fn snapshot(&self) -> ModerationStatsSnapshot {
        let storage = self.storage.read().await;
        let calls = storage.total_calls;
        ModerationStatsSnapshot {
            total_calls: calls,
            approved: storage.approved,
            flagged: storage.flagged,
            blocked: storage.blocked,
            degraded_calls: storage.degraded_calls,
            average_confidence: if calls == 0 {
                0.0
            } else {
                storage.confidence_sum / calls as f64
            },
            total_processing_time_ms: storage.processing_time_ms_total,
            average_processing_time_ms: if calls == 0 {
                0.0
            } else {
                storage.processing_time_ms_total as f64 / calls as f64
            },
        }
    }
}
