//! StenoScore: transcription scoring engine
//!
//! Compares a reference passage with a typed transcript, classifies word
//! mistakes (missed / wrong / misspelled) and derives WPM and accuracy.

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{accuracy, compare, similarity, words_per_minute};
pub use crate::error::{Error, Result};

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Similarity above which a non-matching word counts as misspelled.
/// Exclusive bound: exactly 0.7 is still a wrong word.
pub const MISSPELLING_THRESHOLD: f64 = 0.7;

// =============================================================================
// AGGREGATION
// =============================================================================

/// How many entries `PassageStats::frequent_mistakes` keeps by default
pub const FREQUENT_MISTAKES_LIMIT: usize = 10;

/// Seconds in a minute, for WPM
pub const SECONDS_PER_MINUTE: f64 = 60.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
