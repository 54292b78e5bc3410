//! Configuration validation errors and semantic validation.

use std::collections::HashSet;
use thiserror::Error;

use crate::overlay::{CatalogOverlay, OverlayEntry};
use crate::settings::Settings;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Duplicate key {key:?} in {table}")]
    DuplicateKey { table: String, key: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::SemanticError(_) => 63,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::DuplicateKey { .. } => 66,
            ValidationError::VersionMismatch { .. } => 67,
        }
    }
}

fn check_version(actual: &str) -> ValidationResult<()> {
    if actual != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// Validate settings semantically.
pub fn validate_settings(settings: &Settings) -> ValidationResult<()> {
    check_version(&settings.schema_version)?;

    if settings.history.max_size_bytes == 0 {
        return Err(ValidationError::InvalidValue {
            field: "history.max_size_bytes".to_string(),
            message: "Must be greater than 0".to_string(),
        });
    }

    if let Some(dir) = &settings.history.dir {
        if dir.as_os_str().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "history.dir".to_string(),
                message: "Must not be empty when set".to_string(),
            });
        }
    }

    let min = settings.scan.min_confidence;
    if !(0.0..=1.0).contains(&min) {
        return Err(ValidationError::InvalidValue {
            field: "scan.min_confidence".to_string(),
            message: format!("Must be in [0, 1], got {}", min),
        });
    }

    Ok(())
}

/// Validate a catalog overlay semantically.
///
/// Collisions with built-in keys are fine (they replace in place); collisions
/// inside one overlay table are not.
pub fn validate_overlay(overlay: &CatalogOverlay) -> ValidationResult<()> {
    check_version(&overlay.schema_version)?;

    validate_overlay_table("specific_items", &overlay.specific_items)?;
    validate_overlay_table("material_classes", &overlay.material_classes)?;

    for (i, term) in overlay.exclusions.iter().enumerate() {
        if term.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("exclusions[{}]", i),
                message: "Must not be empty".to_string(),
            });
        }
    }

    Ok(())
}

fn validate_overlay_table(table: &str, rows: &[OverlayEntry]) -> ValidationResult<()> {
    let mut seen = HashSet::new();

    for (i, row) in rows.iter().enumerate() {
        if row.key.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("{}[{}].key", table, i),
                message: "Must not be empty".to_string(),
            });
        }
        if row.instructions.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("{}[{}].instructions", table, i),
                message: "Must not be empty".to_string(),
            });
        }
        if let Err(message) = row.parse_category() {
            return Err(ValidationError::InvalidValue {
                field: format!("{}[{}].category", table, i),
                message,
            });
        }
        if !seen.insert(row.key.to_lowercase()) {
            return Err(ValidationError::DuplicateKey {
                table: table.to_string(),
                key: row.key.clone(),
            });
        }
    }

    Ok(())
}
