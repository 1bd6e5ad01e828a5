//! Aggregated mistake statistics

use serde::{Deserialize, Serialize};
use crate::types::MistakeKind;

/// How often a word was gotten wrong in a particular way
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    /// Always >= 1
    pub frequency: u32,
    #[serde(rename = "type")]
    pub kind: MistakeKind,
}

impl WordFrequency {
    /// Create a new entry
    pub fn new(word: impl Into<String>, frequency: u32, kind: MistakeKind) -> Self {
        Self {
            word: word.into(),
            frequency,
            kind,
        }
    }
}

/// How often a word was gotten wrong in any way
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    /// Always >= 1
    pub frequency: u32,
}

impl WordCount {
    /// Create a new entry
    pub fn new(word: impl Into<String>, frequency: u32) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Dashboard numbers for one passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageStats {
    pub total_attempts: usize,
    pub average_wpm: u32,
    pub average_accuracy: i64,
    /// Most frequently mistaken words, highest first. Missed, wrong and
    /// misspelled occurrences of a word share one count.
    pub frequent_mistakes: Vec<WordCount>,
}

impl PassageStats {
    /// Stats for a passage nobody has attempted yet
    pub fn empty() -> Self {
        Self {
            total_attempts: 0,
            average_wpm: 0,
            average_accuracy: 0,
            frequent_mistakes: Vec::new(),
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "attempts={} | avg_wpm={} | avg_accuracy={}% | frequent_mistakes={}",
            self.total_attempts,
            self.average_wpm,
            self.average_accuracy,
            self.frequent_mistakes.len()
        )
    }
}
