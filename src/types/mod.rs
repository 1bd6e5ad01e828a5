//! Core types for StenoScore

mod mistakes;
mod frequency;
mod attempt;

pub use mistakes::{MistakeKind, MistakeSet};
pub use frequency::{WordCount, WordFrequency, PassageStats};
pub use attempt::AttemptRecord;
