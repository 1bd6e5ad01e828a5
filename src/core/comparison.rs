//! Word Aligner & Classifier
//!
//! Walks reference and typed words position by position. No re-alignment is
//! attempted: an inserted or dropped word shifts every later position.

use tracing::debug;
use crate::MISSPELLING_THRESHOLD;
use crate::core::similarity::similarity;
use crate::core::tokenizer::tokenize;
use crate::types::{MistakeKind, MistakeSet};

/// Classify the differences between a reference passage and a transcript.
///
/// Per position:
/// - typed ran long: typed word is `wrong`
/// - typed ran short: reference word is `missed`
/// - exact (case-sensitive) match: nothing
/// - similarity > 0.7: reference word is `misspelled`
/// - otherwise: typed word is `wrong`
pub fn compare(reference: &str, typed: &str) -> MistakeSet {
    let reference_words = tokenize(reference);
    let typed_words = tokenize(typed);
    let positions = reference_words.len().max(typed_words.len());

    let mut mistakes = MistakeSet::default();

    for i in 0..positions {
        match (reference_words.get(i), typed_words.get(i)) {
            (None, Some(typed_word)) => mistakes.push(MistakeKind::Wrong, typed_word),
            (Some(reference_word), None) => mistakes.push(MistakeKind::Missed, reference_word),
            (Some(reference_word), Some(typed_word)) => {
                if reference_word == typed_word {
                    continue;
                }
                if similarity(reference_word, typed_word) > MISSPELLING_THRESHOLD {
                    mistakes.push(MistakeKind::Misspelled, reference_word);
                } else {
                    mistakes.push(MistakeKind::Wrong, typed_word);
                }
            }
            (None, None) => break,
        }
    }

    debug!(
        reference_words = reference_words.len(),
        typed_words = typed_words.len(),
        missed = mistakes.missed().len(),
        wrong = mistakes.wrong().len(),
        misspelled = mistakes.misspelled().len(),
        "compared transcript"
    );

    mistakes
}

// =============================================================================
// TESTS
// =============================================================================
