//! Error types for the recycling resolver.
//!
//! The resolver and ranker themselves never fail. Everything here belongs to
//! the surrounding boundary: catalog construction, configuration, scan input,
//! history persistence, and sharing.
//!
//! # Human-Facing Output
//!
//! ```text
//! ✗ Duplicate Catalog Key
//!   Reason: duplicate key "cup" in specific_items
//!   Fix: Remove or rename one of the entries in catalog.json, then run 'recy catalog check'.
//! ```
//!
//! # Agent-Facing Output
//!
//! ```json
//! {
//!   "code": 20,
//!   "category": "scan_input",
//!   "message": "invalid scan input at label 3: confidence 1.7 outside [0, 1]",
//!   "recoverable": true,
//!   "suggested_action": "fix_input",
//!   "context": { "index": 3 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for resolver boundary operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Catalog data or overlay errors.
    Catalog,
    /// Malformed vision-service payloads.
    ScanInput,
    /// Scan history log errors.
    History,
    /// Share delivery errors.
    Share,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Catalog => write!(f, "catalog"),
            ErrorCategory::ScanInput => write!(f, "scan_input"),
            ErrorCategory::History => write!(f, "history"),
            ErrorCategory::Share => write!(f, "share"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Suggested actions for agents to take in response to errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// Retry the operation.
    Retry,
    /// Remove the offending config or overlay file.
    ResetConfig,
    /// Run `recy catalog check` / `recy config validate`.
    RunCheck,
    /// Correct the input payload and resubmit.
    FixInput,
    /// Manual intervention required.
    ManualIntervention,
}

impl std::fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestedAction::Retry => write!(f, "retry"),
            SuggestedAction::ResetConfig => write!(f, "reset_config"),
            SuggestedAction::RunCheck => write!(f, "run_check"),
            SuggestedAction::FixInput => write!(f, "fix_input"),
            SuggestedAction::ManualIntervention => write!(f, "manual_intervention"),
        }
    }
}

/// Unified error type.
#[derive(Error, Debug)]
pub enum Error {
    // Catalog errors (10-19)
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("duplicate key {key:?} in {catalog}")]
    DuplicateCatalogKey { catalog: String, key: String },

    // Scan input errors (20-29)
    #[error("invalid scan input{}: {message}", .index.map(|i| format!(" at label {i}")).unwrap_or_default())]
    InvalidScanInput {
        index: Option<usize>,
        message: String,
    },

    // History errors (30-39)
    #[error("scan history corrupted: {0}")]
    HistoryCorrupted(String),

    // Share errors (40-49)
    #[error("share failed: {0}")]
    ShareFailed(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code.
    ///
    /// - 10-19: Catalog errors
    /// - 20-29: Scan input errors
    /// - 30-39: History errors
    /// - 40-49: Share errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidCatalog(_) => 11,
            Error::DuplicateCatalogKey { .. } => 12,
            Error::InvalidScanInput { .. } => 20,
            Error::HistoryCorrupted(_) => 30,
            Error::ShareFailed(_) => 40,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidCatalog(_) | Error::DuplicateCatalogKey { .. } => ErrorCategory::Catalog,
            Error::InvalidScanInput { .. } => ErrorCategory::ScanInput,
            Error::HistoryCorrupted(_) => ErrorCategory::History,
            Error::ShareFailed(_) => ErrorCategory::Share,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether this error is potentially recoverable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::InvalidCatalog(_) => true,
            Error::DuplicateCatalogKey { .. } => true,
            Error::InvalidScanInput { .. } => true,
            // Append-only log; a corrupt line needs a human.
            Error::HistoryCorrupted(_) => false,
            Error::ShareFailed(_) => true,
            Error::Io(_) => true,
            Error::Json(_) => true,
        }
    }

    /// Returns the suggested action for agents.
    pub fn suggested_action(&self) -> SuggestedAction {
        match self {
            Error::InvalidCatalog(_) => SuggestedAction::ResetConfig,
            Error::DuplicateCatalogKey { .. } => SuggestedAction::RunCheck,
            Error::InvalidScanInput { .. } => SuggestedAction::FixInput,
            Error::HistoryCorrupted(_) => SuggestedAction::ManualIntervention,
            Error::ShareFailed(_) => SuggestedAction::Retry,
            Error::Io(_) => SuggestedAction::Retry,
            Error::Json(_) => SuggestedAction::FixInput,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::InvalidCatalog(_) => {
                "Fix the catalog overlay and run 'recy catalog check', or remove catalog.json to use the built-in catalog."
            }
            Error::DuplicateCatalogKey { .. } => {
                "Remove or rename one of the entries in catalog.json, then run 'recy catalog check'."
            }
            Error::InvalidScanInput { .. } => {
                "Each label needs a string 'name' and a 'confidence' between 0 and 1. Fix the payload and rescan."
            }
            Error::HistoryCorrupted(_) => {
                "Inspect history.jsonl (see 'recy history path') and remove the malformed line."
            }
            Error::ShareFailed(_) => {
                "Check that the share destination is writable and retry, or share to stdout."
            }
            Error::Io(_) => {
                "Check disk space, permissions, and that the data directories exist. Retry the operation."
            }
            Error::Json(_) => {
                "Invalid JSON. Check syntax with 'jq . <file>' and retry."
            }
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::InvalidCatalog(_) => "Invalid Catalog",
            Error::DuplicateCatalogKey { .. } => "Duplicate Catalog Key",
            Error::InvalidScanInput { .. } => "Invalid Scan Input",
            Error::HistoryCorrupted(_) => "Scan History Corrupted",
            Error::ShareFailed(_) => "Share Failed",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Parse Error",
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Whether the error is potentially recoverable.
    pub recoverable: bool,

    /// Suggested action for agents.
    pub suggested_action: SuggestedAction,

    /// Additional structured context (e.g., label index, catalog key).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::DuplicateCatalogKey { catalog, key } => {
                context.insert("catalog".to_string(), serde_json::json!(catalog));
                context.insert("key".to_string(), serde_json::json!(key));
            }
            Error::InvalidScanInput {
                index: Some(index), ..
            } => {
                context.insert("index".to_string(), serde_json::json!(index));
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
            suggested_action: err.suggested_action(),
            context,
        }
    }
}

impl StructuredError {
    /// Add additional context to the error.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.context.insert(key.into(), v);
        }
        self
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }

    /// Serialize to pretty JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_json())
    }
}

/// Format an error for human-readable stderr output.
///
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(Error::InvalidCatalog("test".into()).code(), 11);
        assert_eq!(
            Error::DuplicateCatalogKey {
                catalog: "specific_items".into(),
                key: "cup".into()
            }
            .code(),
            12
        );
        assert_eq!(Error::ShareFailed("closed".into()).code(), 40);
    }

    #[test]
    fn test_error_category() {
        assert_eq!(Error::InvalidCatalog("x".into()).category(), ErrorCategory::Catalog);
        assert_eq!(
            Error::InvalidScanInput {
                index: None,
                message: "x".into()
            }
            .category(),
            ErrorCategory::ScanInput
        );
    }

    #[test]
    fn test_error_recoverable() {
        assert!(Error::InvalidCatalog("test".into()).is_recoverable());
        assert!(Error::ShareFailed("test".into()).is_recoverable());
        assert!(!Error::HistoryCorrupted("line 3".into()).is_recoverable());
    }

    #[test]
    fn test_invalid_scan_input_message() {
        let err = Error::InvalidScanInput {
            index: Some(3),
            message: "confidence 1.7 outside [0, 1]".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid scan input at label 3: confidence 1.7 outside [0, 1]"
        );

        let err = Error::InvalidScanInput {
            index: None,
            message: "expected an array".into(),
        };
        assert_eq!(err.to_string(), "invalid scan input: expected an array");
    }

    #[test]
    fn test_structured_error_from_error() {
        let err = Error::InvalidScanInput {
            index: Some(2),
            message: "confidence NaN outside [0, 1]".into(),
        };
        let structured = StructuredError::from(&err);

        assert_eq!(structured.code, 20);
        assert_eq!(structured.category, ErrorCategory::ScanInput);
        assert!(structured.recoverable);
        assert_eq!(structured.suggested_action, SuggestedAction::FixInput);
        assert_eq!(structured.context.get("index"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_structured_error_json() {
        let err = Error::DuplicateCatalogKey {
            catalog: "material_classes".into(),
            key: "glass".into(),
        };
        let json = StructuredError::from(&err).to_json();

        assert!(json.contains(r#""code":12"#));
        assert!(json.contains(r#""category":"catalog""#));
        assert!(json.contains(r#""suggested_action":"run_check""#));
        assert!(json.contains(r#""key":"glass""#));
    }

    #[test]
    fn test_format_error_human() {
        let err = Error::DuplicateCatalogKey {
            catalog: "specific_items".into(),
            key: "cup".into(),
        };
        let formatted = format_error_human(&err, false);

        assert!(formatted.contains("Duplicate Catalog Key"));
        assert!(formatted.contains(r#"duplicate key "cup" in specific_items"#));
        assert!(formatted.contains("recy catalog check"));
    }

    #[test]
    fn test_display_impls() {
        assert_eq!(ErrorCategory::ScanInput.to_string(), "scan_input");
        assert_eq!(SuggestedAction::FixInput.to_string(), "fix_input");
    }
}
