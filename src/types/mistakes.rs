//! Mistake classification types

use serde::{Deserialize, Serialize};

/// The three ways a word position can go wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MistakeKind {
    /// Reference word with no typed counterpart
    Missed,
    /// Typed word unrelated to the reference word, or typed past the end
    Wrong,
    /// Typed word close to the reference word but not identical
    Misspelled,
}

impl MistakeKind {
    /// All kinds, in the order they are stored and reported
    pub const ALL: [MistakeKind; 3] = [Self::Missed, Self::Wrong, Self::Misspelled];

    /// Lowercase name, matches the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missed => "missed",
            Self::Wrong => "wrong",
            Self::Misspelled => "misspelled",
        }
    }

    /// ANSI color for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Self::Missed => "\x1b[33m",     // Yellow
            Self::Wrong => "\x1b[31m",      // Red
            Self::Misspelled => "\x1b[35m", // Magenta
        }
    }
}

impl std::fmt::Display for MistakeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-attempt classification of word mistakes.
///
/// Built once by [`crate::compare`] and read-only afterwards: the lists are
/// private and only exposed as slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MistakeSet {
    missed: Vec<String>,
    wrong: Vec<String>,
    misspelled: Vec<String>,
}

impl MistakeSet {
    /// Builder used during classification
    pub(crate) fn push(&mut self, kind: MistakeKind, word: &str) {
        let list = match kind {
            MistakeKind::Missed => &mut self.missed,
            MistakeKind::Wrong => &mut self.wrong,
            MistakeKind::Misspelled => &mut self.misspelled,
        };
        list.push(word.to_string());
    }

    /// Reference words absent from the transcript
    pub fn missed(&self) -> &[String] {
        &self.missed
    }

    /// Typed words that don't belong
    pub fn wrong(&self) -> &[String] {
        &self.wrong
    }

    /// Reference words typed with a small error
    pub fn misspelled(&self) -> &[String] {
        &self.misspelled
    }

    /// Words recorded under one kind
    pub fn words(&self, kind: MistakeKind) -> &[String] {
        match kind {
            MistakeKind::Missed => &self.missed,
            MistakeKind::Wrong => &self.wrong,
            MistakeKind::Misspelled => &self.misspelled,
        }
    }

    /// Total mistakes across all kinds
    pub fn total(&self) -> usize {
        self.missed.len() + self.wrong.len() + self.misspelled.len()
    }

    /// True for a perfect transcript
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Every mistake as `(kind, word)`, missed first, then wrong, then misspelled
    pub fn iter(&self) -> impl Iterator<Item = (MistakeKind, &str)> + '_ {
        MistakeKind::ALL
            .into_iter()
            .flat_map(move |kind| self.words(kind).iter().map(move |w| (kind, w.as_str())))
    }
}
