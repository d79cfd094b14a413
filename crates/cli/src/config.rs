//! Optional `lineboard.toml` configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! format = "json"
//!
//! [paths]
//! max_paths = 500
//!
//! [attribution]
//! max_depth = 6
//! ```
//!
//! Every section and key is optional. Command-line flags override the file.

use std::path::Path;

use lineboard_attribution::DEFAULT_MAX_DEPTH;
use lineboard_paths::DEFAULT_MAX_PATHS;
use serde::{Deserialize, Serialize};

use crate::OutputFormat;

/// Looked up in the working directory when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "lineboard.toml";

// ── Types ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LineboardConfig {
    pub output: OutputSettings,
    pub paths: PathSettings,
    pub attribution: AttributionSettings,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct OutputSettings {
    pub format: Option<OutputFormat>,
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PathSettings {
    /// Result cap for route enumeration.
    pub max_paths: usize,
}

impl Default for PathSettings {
    fn default() -> Self {
        PathSettings {
            max_paths: DEFAULT_MAX_PATHS,
        }
    }
}

/// `[attribution]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct AttributionSettings {
    /// Hop limit for the greedy conversion walk.
    pub max_depth: usize,
}

impl Default for AttributionSettings {
    fn default() -> Self {
        AttributionSettings {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

// ── Functions ─────────────────────────────────────────────────────────────────

/// Read and parse a config file from `path`.
pub(crate) fn read_config(path: &Path) -> Result<LineboardConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("could not parse '{}': {}", path.display(), e))
}

/// Explicit path if given, else `./lineboard.toml` if present, else defaults.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<LineboardConfig, String> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        tracing::debug!(path = %fallback.display(), "using config from working directory");
        return read_config(fallback);
    }
    Ok(LineboardConfig::default())
}
