//! Moodlog Core
//!
//! Core types and utilities shared across moodlog components.
//!
//! This crate provides:
//! - The sentiment and journal data model
//! - Error types and result handling
//! - The inference service credential

pub mod credential;
pub mod error;
pub mod types;

pub use credential::Credential;
pub use error::{Disposition, Error, Result};
pub use types::{GenerationResult, JournalEntry, Label, SentimentResult, Tone};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::credential::Credential;
    pub use crate::error::{Disposition, Error, Result};
    pub use crate::types::{GenerationResult, JournalEntry, Label, SentimentResult, Tone};
}
