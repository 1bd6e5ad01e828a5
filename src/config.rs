//! CLI configuration
//!
//! Priority order:
//! 1. Command-line flags (highest)
//! 2. TOML config file given with `--config`
//! 3. Compiled defaults

use std::path::Path;
use serde::Deserialize;
use crate::{Error, Result, FREQUENT_MISTAKES_LIMIT};

/// Settings read from a TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Entries kept in `frequent_mistakes`
    pub top_mistakes: Option<usize>,
    /// Colored terminal output
    pub color: Option<bool>,
    /// JSON output instead of text
    pub json: Option<bool>,
}

impl FileConfig {
    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        if config.top_mistakes == Some(0) {
            return Err(Error::Config("top_mistakes must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// Effective output settings after merging flags, file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub top_mistakes: usize,
    pub color: bool,
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            top_mistakes: FREQUENT_MISTAKES_LIMIT,
            color: true,
            json: false,
        }
    }
}

impl OutputConfig {
    /// Merge CLI flags over the file config over defaults.
    ///
    /// Boolean flags can only switch behaviour on (`--json`, `--no-color`),
    /// so `false` means "not given".
    pub fn resolve(
        file: &FileConfig,
        top_flag: Option<usize>,
        json_flag: bool,
        no_color_flag: bool,
    ) -> Self {
        let defaults = Self::default();
        Self {
            top_mistakes: top_flag.or(file.top_mistakes).unwrap_or(defaults.top_mistakes),
            color: !no_color_flag && file.color.unwrap_or(defaults.color),
            json: json_flag || file.json.unwrap_or(defaults.json),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
