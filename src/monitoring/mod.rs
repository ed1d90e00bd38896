//! Monitoring and observability
//!
//! Moderation call statistics for downstream dashboards and logging.

mod stats;

pub use stats::{ModerationStats, ModerationStatsSnapshot};
