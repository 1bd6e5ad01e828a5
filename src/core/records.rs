//! Loading CLI inputs: text arguments and scored-attempt files

use std::path::Path;
use tracing::debug;
use crate::error::Result;
use crate::types::AttemptRecord;

/// Resolve a text argument: `@path` reads the file, anything else is literal
pub fn read_text_source(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(arg.to_string()),
    }
}

/// Load a JSON array of attempt records
pub fn load_records(path: &Path) -> Result<Vec<AttemptRecord>> {
    let json = std::fs::read_to_string(path)?;
    let records: Vec<AttemptRecord> = serde_json::from_str(&json)?;
    debug!(count = records.len(), path = %path.display(), "loaded attempt records");
    Ok(records)
}

// =============================================================================
// TESTS
// =============================================================================
