//! Metric Derivation: typing speed and accuracy
//!
//! Rounding is `f64::round` (half away from zero) throughout.

use chrono::Utc;
use tracing::debug;
use crate::SECONDS_PER_MINUTE;
use crate::core::comparison::compare;
use crate::core::tokenizer::token_count;
use crate::error::{Error, Result};
use crate::types::{AttemptRecord, MistakeSet};

/// Words per minute for `text` typed over `duration_secs`.
///
/// Fails with `InvalidArgument` if the duration is not a positive number.
pub fn words_per_minute(text: &str, duration_secs: f64) -> Result<u32> {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "duration must be a positive number of seconds, got {}",
            duration_secs
        )));
    }

    let minutes = duration_secs / SECONDS_PER_MINUTE;
    Ok((token_count(text) as f64 / minutes).round() as u32)
}

/// Accuracy percentage of `typed` against `reference`.
///
/// `(words - mistakes) / words * 100`, rounded. Not clamped: a transcript
/// with more mistakes than the reference has words scores below zero.
/// Fails with `InvalidArgument` if the reference has no words.
pub fn accuracy(reference: &str, typed: &str) -> Result<i64> {
    let total_words = reference_word_count(reference)?;
    Ok(accuracy_from(total_words, &compare(reference, typed)))
}

/// Reference word count, rejecting an empty reference
fn reference_word_count(reference: &str) -> Result<usize> {
    match token_count(reference) {
        0 => Err(Error::InvalidArgument(
            "reference text has no words".to_string(),
        )),
        n => Ok(n),
    }
}

fn accuracy_from(total_words: usize, mistakes: &MistakeSet) -> i64 {
    let ratio = (total_words as f64 - mistakes.total() as f64) / total_words as f64;
    (ratio * 100.0).round() as i64
}

/// Score a finished attempt: WPM over the typed text, accuracy and mistakes.
pub fn score_attempt(
    passage_id: Option<u64>,
    reference: &str,
    typed: &str,
    duration_secs: u32,
) -> Result<AttemptRecord> {
    let wpm = words_per_minute(typed, f64::from(duration_secs))?;
    let total_words = reference_word_count(reference)?;
    let mistakes = compare(reference, typed);
    let accuracy = accuracy_from(total_words, &mistakes);

    debug!(?passage_id, wpm, accuracy, "scored attempt");

    Ok(AttemptRecord {
        passage_id,
        typed_content: typed.to_string(),
        duration_secs,
        wpm,
        accuracy,
        mistakes,
        timestamp: Utc::now(),
    })
}

// =============================================================================
// TESTS
// =============================================================================
