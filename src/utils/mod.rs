//! Shared utilities
//!
//! Cross-cutting helpers used throughout the moderation engine.

pub mod error;
