//! Core modules for StenoScore

pub mod tokenizer;
pub mod similarity;
pub mod comparison;
pub mod metrics;
pub mod stats;
pub mod records;

pub use tokenizer::{tokenize, token_count};
pub use similarity::similarity;
pub use comparison::compare;
pub use metrics::{words_per_minute, accuracy, score_attempt};
pub use stats::{passage_stats, master_error_list, attempt_breakdown, records_for_passage};
pub use records::{read_text_source, load_records};
