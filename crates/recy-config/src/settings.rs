//! Runtime settings (`settings.json`).
//!
//! Every field has a default, so an empty object `{}` is a valid settings
//! file and a missing file means "all defaults".

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::validate::ValidationError;

/// Default history rotation threshold (10 MiB).
pub const DEFAULT_HISTORY_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Complete settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Settings {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    #[serde(default)]
    pub history: HistorySettings,

    #[serde(default)]
    pub scan: ScanSettings,
}

/// Scan history persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistorySettings {
    /// Append each scan to the history log.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Override the history directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Rotate `history.jsonl` once it grows past this many bytes.
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: u64,
}

/// Scan pipeline knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanSettings {
    /// Labels with a lower confidence are dropped before resolution.
    #[serde(default)]
    pub min_confidence: f64,
}

fn default_schema_version() -> String {
    crate::CONFIG_SCHEMA_VERSION.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_size_bytes() -> u64 {
    DEFAULT_HISTORY_MAX_BYTES
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            schema_version: default_schema_version(),
            history: HistorySettings::default(),
            scan: ScanSettings::default(),
        }
    }
}

impl Default for HistorySettings {
    fn default() -> Self {
        HistorySettings {
            enabled: true,
            dir: None,
            max_size_bytes: DEFAULT_HISTORY_MAX_BYTES,
        }
    }
}

impl Default for ScanSettings {
    fn default() -> Self {
        ScanSettings {
            min_confidence: 0.0,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_str(&content)
    }

    /// Parse settings from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }
}
