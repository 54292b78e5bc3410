//! Append-only scan history.
//!
//! # Design
//!
//! - **Format**: JSON Lines, one [`ScanRecord`] per line
//! - **Attribution**: each record carries the fingerprint of the catalog and
//!   exclusion set that produced it
//! - **Rotation**: `history.jsonl` is renamed to `history.YYYYMMDD-HHMMSS.jsonl`
//!   once it reaches the configured size
//!
//! # File Location
//!
//! - `--history-dir` or settings `history.dir` (if given)
//! - `$RECY_DATA/history/history.jsonl` (if RECY_DATA is set)
//! - `$XDG_DATA_HOME/recycling-resolver/history/history.jsonl`
//! - platform data dir otherwise

mod record;
mod writer;

pub use record::{ScanRecord, HISTORY_SCHEMA_VERSION};
pub use writer::{read_records, HistoryLog, HistoryLogConfig};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading or writing scan history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to resolve history directory (set RECY_DATA or XDG_DATA_HOME)")]
    DataDirUnavailable,

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize scan record: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported scan record schema {version:?} at {path}:{line}")]
    IncompatibleVersion {
        path: PathBuf,
        line: usize,
        version: String,
    },

    #[error("failed to parse scan record at {path}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl From<HistoryError> for recy_common::Error {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::Io { source, .. } => recy_common::Error::Io(source),
            other => recy_common::Error::HistoryCorrupted(other.to_string()),
        }
    }
}

/// Data directory override.
pub const ENV_DATA_DIR: &str = "RECY_DATA";

pub(crate) const HISTORY_DIR_NAME: &str = "history";
pub(crate) const HISTORY_FILENAME: &str = "history.jsonl";

/// Resolve the history directory.
///
/// `explicit` covers both the CLI flag and the settings file; the caller
/// picks whichever wins.
pub fn resolve_history_dir(explicit: Option<&Path>) -> Result<PathBuf, HistoryError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        return Ok(PathBuf::from(dir).join(HISTORY_DIR_NAME));
    }

    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg)
            .join(recy_config::resolve::APP_NAME)
            .join(HISTORY_DIR_NAME));
    }

    if let Some(base) = dirs::data_dir() {
        return Ok(base.join(recy_config::resolve::APP_NAME).join(HISTORY_DIR_NAME));
    }

    Err(HistoryError::DataDirUnavailable)
}
