//! Error handling for the moderation engine
//!
//! Defines the crate-wide error type and result alias.

mod error;

pub use error::{ModerationError, Result};
