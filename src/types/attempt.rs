//! Scored attempt records

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use colored::Colorize;
use crate::types::MistakeSet;

/// One practice attempt, scored and ready for the caller to store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Passage this attempt was typed against, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_id: Option<u64>,
    /// What the user typed
    pub typed_content: String,
    /// Elapsed typing time (seconds)
    pub duration_secs: u32,
    /// Words per minute over the typed text
    pub wpm: u32,
    /// Accuracy percentage, unclamped
    pub accuracy: i64,
    /// Word mistakes
    pub mistakes: MistakeSet,
    /// When this was scored
    pub timestamp: DateTime<Utc>,
}

impl AttemptRecord {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let accuracy = format!("{}%", self.accuracy);
        let accuracy = if self.accuracy >= 95 {
            accuracy.green()
        } else if self.accuracy >= 80 {
            accuracy.yellow()
        } else {
            accuracy.red()
        };

        format!(
            "{} wpm={} | accuracy={} | missed={} | wrong={} | misspelled={}",
            "▶".bold(),
            self.wpm.to_string().bold(),
            accuracy,
            self.mistakes.missed().len(),
            self.mistakes.wrong().len(),
            self.mistakes.misspelled().len(),
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "wpm={} | accuracy={} | duration={}s | missed={} | wrong={} | misspelled={}",
            self.wpm,
            self.accuracy,
            self.duration_secs,
            self.mistakes.missed().len(),
            self.mistakes.wrong().len(),
            self.mistakes.misspelled().len(),
        )
    }
}
