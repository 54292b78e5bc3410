//! Share text for a label's guidance, and where to deliver it.
//!
//! Delivery failures are data, not panics: [`share`] always returns a
//! [`ShareOutcome`] and logs the failure so the caller can carry on.

use recy_common::RecyclingCategory;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from a share sink.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("failed to write share text to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write share text to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Render guidance as a plain-text block.
///
/// ```text
/// Item: Plastic Bottle
/// Category: Recyclable
/// Instructions: Empty and rinse before recycling
/// Additional info: ...
/// • Remove cap
/// ```
pub fn share_text(item_name: &str, guidance: &RecyclingCategory) -> String {
    let mut lines = vec![
        format!("Item: {item_name}"),
        format!("Category: {}", guidance.category),
        format!("Instructions: {}", guidance.instructions),
    ];
    if let Some(info) = &guidance.additional_info {
        lines.push(format!("Additional info: {info}"));
    }
    lines.extend(guidance.preparation.iter().map(|step| format!("• {step}")));
    lines.join("\n")
}

/// Destination for share text.
pub trait ShareSink {
    /// Short description for logs ("stdout", a path).
    fn describe(&self) -> String;

    fn deliver(&self, text: &str) -> Result<(), ShareError>;
}

/// Writes share text to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ShareSink for StdoutSink {
    fn describe(&self) -> String {
        "stdout".to_string()
    }

    fn deliver(&self, text: &str) -> Result<(), ShareError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{text}").map_err(ShareError::Stdout)?;
        handle.flush().map_err(ShareError::Stdout)
    }
}

/// Writes share text to a file, replacing its contents.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShareSink for FileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn deliver(&self, text: &str) -> Result<(), ShareError> {
        let mut body = text.to_string();
        body.push('\n');
        std::fs::write(&self.path, body).map_err(|source| ShareError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Result of a share attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShareOutcome {
    Shared { destination: String },
    Failed { destination: String, reason: String },
}

impl ShareOutcome {
    pub fn is_shared(&self) -> bool {
        matches!(self, ShareOutcome::Shared { .. })
    }
}

/// Render and deliver share text. Never fails; sink errors become
/// [`ShareOutcome::Failed`].
pub fn share(sink: &dyn ShareSink, item_name: &str, guidance: &RecyclingCategory) -> ShareOutcome {
    let text = share_text(item_name, guidance);
    let destination = sink.describe();
    match sink.deliver(&text) {
        Ok(()) => {
            debug!(item = item_name, %destination, "shared guidance");
            ShareOutcome::Shared { destination }
        }
        Err(err) => {
            warn!(item = item_name, %destination, error = %err, "share failed");
            ShareOutcome::Failed {
                destination,
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recy_common::Category;
    use std::cell::RefCell;

    struct RecordingSink {
        delivered: RefCell<Vec<String>>,
    }

    impl ShareSink for RecordingSink {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        fn deliver(&self, text: &str) -> Result<(), ShareError> {
            self.delivered.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn bottle() -> RecyclingCategory {
        RecyclingCategory::new(Category::Recyclable, "Empty and rinse")
            .with_additional_info("Caps can stay on")
            .with_preparation(["Empty contents", "Rinse"])
    }

    #[test]
    fn test_share_text_full() {
        let text = share_text("Plastic Bottle", &bottle());
        assert_eq!(
            text,
            "Item: Plastic Bottle\n\
             Category: Recyclable\n\
             Instructions: Empty and rinse\n\
             Additional info: Caps can stay on\n\
             • Empty contents\n\
             • Rinse"
        );
    }

    #[test]
    fn test_share_text_minimal() {
        let guidance = RecyclingCategory::new(Category::SpecialDisposal, "Take to a depot");
        let text = share_text("Paint Can", &guidance);
        assert_eq!(
            text,
            "Item: Paint Can\nCategory: Special Disposal\nInstructions: Take to a depot"
        );
    }

    #[test]
    fn test_share_delivers_to_sink() {
        let sink = RecordingSink {
            delivered: RefCell::new(Vec::new()),
        };
        let outcome = share(&sink, "Bottle", &bottle());
        assert!(outcome.is_shared());
        assert_eq!(sink.delivered.borrow().len(), 1);
        assert!(sink.delivered.borrow()[0].starts_with("Item: Bottle"));
    }

    #[test]
    fn test_file_sink_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("share.txt");
        let outcome = share(&FileSink::new(&path), "Bottle", &bottle());
        assert!(outcome.is_shared());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("• Rinse\n"));
    }

    #[test]
    fn test_file_sink_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("share.txt");
        let outcome = share(&FileSink::new(&path), "Bottle", &bottle());
        match outcome {
            ShareOutcome::Failed { destination, reason } => {
                assert_eq!(destination, path.display().to_string());
                assert!(reason.contains("failed to write share text"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
