//! Spam detection patterns
//!
//! Pre-compiled regex patterns used by the spam heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

// These patterns are static and known-good; if one fails to compile we fall
// back to a never-matching pattern and log the error instead of panicking.

/// URL pattern: http(s) links
pub static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bhttps?://\S+").unwrap_or_else(|e| {
        tracing::error!("Failed to compile URL regex: {}", e);
        // [^\s\S] matches "neither whitespace nor non-whitespace" = empty set
        Regex::new(r"[^\s\S]").unwrap()
    })
});

/// Promotional phrasing commonly seen in spam
pub static PROMO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(buy now|click here|free money|limited offer|visit my|act now|dm me)\b")
        .unwrap_or_else(|e| {
            tracing::error!("Failed to compile promo regex: {}", e);
            Regex::new(r"[^\s\S]").unwrap()
        })
});
