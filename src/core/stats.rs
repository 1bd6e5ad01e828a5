//! Mistake aggregation over many scored attempts
//!
//! The caller owns storage and passes the records in. Passage stats tally by
//! word alone; the master error list and per-attempt breakdown tally per
//! `(word, kind)`. Ordering is by frequency, highest first; ties keep the
//! order in which the word was first seen.

use std::collections::HashMap;
use tracing::info;
use crate::types::{AttemptRecord, MistakeKind, MistakeSet, PassageStats, WordCount, WordFrequency};

/// Dashboard statistics for the attempts of one passage.
///
/// `records` should already be filtered to the passage. Averages are rounded;
/// `frequent_mistakes` keeps at most `limit` entries.
pub fn passage_stats(records: &[AttemptRecord], limit: usize) -> PassageStats {
    if records.is_empty() {
        return PassageStats::empty();
    }

    let attempts = records.len() as f64;
    let total_wpm: f64 = records.iter().map(|r| f64::from(r.wpm)).sum();
    let total_accuracy: f64 = records.iter().map(|r| r.accuracy as f64).sum();

    let mut frequent_mistakes = tally_words(records.iter().map(|r| &r.mistakes));
    frequent_mistakes.truncate(limit);

    info!(attempts = records.len(), "computed passage stats");

    PassageStats {
        total_attempts: records.len(),
        average_wpm: (total_wpm / attempts).round() as u32,
        average_accuracy: (total_accuracy / attempts).round() as i64,
        frequent_mistakes,
    }
}

/// Every mistake across all records, most frequent first
pub fn master_error_list(records: &[AttemptRecord]) -> Vec<WordFrequency> {
    let list = tally(records.iter().map(|r| &r.mistakes));
    info!(attempts = records.len(), distinct = list.len(), "computed master error list");
    list
}

/// Distinct mistakes within a single attempt, most frequent first
pub fn attempt_breakdown(mistakes: &MistakeSet) -> Vec<WordFrequency> {
    tally(std::iter::once(mistakes))
}

/// Records typed against one passage
pub fn records_for_passage(records: &[AttemptRecord], passage_id: u64) -> Vec<AttemptRecord> {
    records
        .iter()
        .filter(|r| r.passage_id == Some(passage_id))
        .cloned()
        .collect()
}

fn tally_words<'a>(sets: impl Iterator<Item = &'a MistakeSet>) -> Vec<WordCount> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    for set in sets {
        for (_, word) in set.iter() {
            match index.get(word) {
                Some(&i) => counts[i].frequency += 1,
                None => {
                    index.insert(word, counts.len());
                    counts.push(WordCount::new(word, 1));
                }
            }
        }
    }

    counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    counts
}

fn tally<'a>(sets: impl Iterator<Item = &'a MistakeSet>) -> Vec<WordFrequency> {
    let mut index: HashMap<(&'a str, MistakeKind), usize> = HashMap::new();
    let mut counts: Vec<WordFrequency> = Vec::new();

    for set in sets {
        for (kind, word) in set.iter() {
            match index.get(&(word, kind)) {
                Some(&i) => counts[i].frequency += 1,
                None => {
                    index.insert((word, kind), counts.len());
                    counts.push(WordFrequency::new(word, 1, kind));
                }
            }
        }
    }

    // stable: ties keep first-seen order
    counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    counts
}

// =============================================================================
// TESTS
// =============================================================================
