//! Catalog overlay file (`catalog.json`).
//!
//! Lets an operator adjust local guidance without rebuilding: replace the
//! payload of an existing key, append new keys, or add exclusion terms.
//! Categories are kept as strings here so that an unknown value is reported
//! as a validation error with its field path instead of a bare parse error.

use recy_common::{CatalogEntry, Category, RecyclingCategory};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::validate::ValidationError;

/// Complete overlay file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogOverlay {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Entries merged into the Specific Items table.
    #[serde(default)]
    pub specific_items: Vec<OverlayEntry>,

    /// Entries merged into the Material Classes table.
    #[serde(default)]
    pub material_classes: Vec<OverlayEntry>,

    /// Extra labels to reject as non-objects (exact match, any case).
    #[serde(default)]
    pub exclusions: Vec<String>,
}

/// One overlay row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OverlayEntry {
    pub key: String,

    /// One of: Recyclable, Compost, Landfill, Special Disposal, Unknown.
    pub category: String,

    pub instructions: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preparation: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_mistakes: Vec<String>,
}

fn default_schema_version() -> String {
    crate::CONFIG_SCHEMA_VERSION.to_string()
}

impl Default for CatalogOverlay {
    fn default() -> Self {
        CatalogOverlay {
            schema_version: default_schema_version(),
            specific_items: Vec::new(),
            material_classes: Vec::new(),
            exclusions: Vec::new(),
        }
    }
}

impl OverlayEntry {
    /// Parse the category string.
    pub fn parse_category(&self) -> Result<Category, String> {
        self.category.parse::<Category>()
    }

    /// Convert into a catalog entry. Fails on an unknown category.
    pub fn to_entry(&self) -> Result<CatalogEntry, String> {
        let category = self.parse_category()?;
        let mut guidance = RecyclingCategory::new(category, self.instructions.clone())
            .with_preparation(self.preparation.iter().cloned())
            .with_common_mistakes(self.common_mistakes.iter().cloned());
        guidance.additional_info = self.additional_info.clone();
        Ok(CatalogEntry::new(self.key.clone(), guidance))
    }
}

impl CatalogOverlay {
    /// Load an overlay from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_str(&content)
    }

    /// Parse an overlay from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }

    /// True when the overlay changes nothing.
    pub fn is_empty(&self) -> bool {
        self.specific_items.is_empty()
            && self.material_classes.is_empty()
            && self.exclusions.is_empty()
    }

    /// Convert both tables to catalog entries.
    ///
    /// Call [`crate::validate::validate_overlay`] first for field-level errors.
    pub fn entries(&self) -> Result<(Vec<CatalogEntry>, Vec<CatalogEntry>), ValidationError> {
        let convert = |table: &str, rows: &[OverlayEntry]| {
            rows.iter()
                .enumerate()
                .map(|(i, row)| {
                    row.to_entry().map_err(|message| ValidationError::InvalidValue {
                        field: format!("{}[{}].category", table, i),
                        message,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        };
        Ok((
            convert("specific_items", &self.specific_items)?,
            convert("material_classes", &self.material_classes)?,
        ))
    }
}
